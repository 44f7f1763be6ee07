// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::{
    clean,
    config::options::ExportOptions,
    export::{self, ExportOutcome},
    form::{FieldSource, FormState, FormUi},
    record::SECTIONS,
    store::{self, RecordStore},
};

/// One command-line event, handled in the order given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Set(String),
    Save,
    Export,
    Out(String),
    Overwrite,
    Clean(PathBuf),
    Fields,
    Interactive,
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let commands = parse_args(env::args().skip(1))?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock());
    session.run(&commands, stdin.lock())
}

pub fn parse_args<I>(args: I) -> Result<Vec<Command>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let cmd = match a.as_str() {
            "--set" | "-s" => Command::Set(args.next().ok_or("Missing FIELD=VALUE for --set")?),
            "--save" => Command::Save,
            "--export" | "-e" => Command::Export,
            "-o" | "--out" => Command::Out(args.next().ok_or("Missing output path")?),
            "--overwrite" => Command::Overwrite,
            "--clean" => Command::Clean(PathBuf::from(args.next().ok_or("Missing workbook for --clean")?)),
            "--fields" => Command::Fields,
            "-i" | "--interactive" => Command::Interactive,
            "-h" | "--help" => Command::Help,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        };
        out.push(cmd);
    }
    if out.is_empty() {
        out.push(Command::Help);
    }
    Ok(out)
}

/// Form + store for one CLI run. Records live until the process exits.
pub struct Session<W: Write> {
    pub store: RecordStore,
    pub form: FormState,
    pub options: ExportOptions,
    out: W,
}

/// The CLI's view of the form: stdout is the notification channel.
struct CliUi<'a, W: Write> {
    form: &'a mut FormState,
    out: &'a mut W,
}

impl<W: Write> FieldSource for CliUi<'_, W> {
    fn value(&self, id: &str) -> Option<String> {
        self.form.value(id)
    }
}

impl<W: Write> FormUi for CliUi<'_, W> {
    fn clear_all_inputs(&mut self) {
        self.form.clear();
    }
    fn notify_user(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }
    fn show_count(&mut self, count: usize) {
        let _ = writeln!(self.out, "{}", store::counter_text(count));
    }
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            store: RecordStore::new(),
            form: FormState::new(),
            options: ExportOptions::default(),
            out,
        }
    }

    pub fn output(&self) -> &W { &self.out }

    pub fn run<R: BufRead>(&mut self, commands: &[Command], input: R) -> Result<(), Box<dyn Error>> {
        let mut input = Some(input);
        for cmd in commands {
            match cmd {
                Command::Interactive => {
                    if let Some(r) = input.take() {
                        self.interactive(r)?;
                    }
                }
                other => self.apply(other)?,
            }
        }

        let pending = self.form.filled();
        if pending > 0 {
            logw!("CLI: {} field(s) set but never saved", pending);
            writeln!(self.out, "Aviso: {pending} campo(s) sin guardar.")?;
        }
        Ok(())
    }

    fn apply(&mut self, cmd: &Command) -> Result<(), Box<dyn Error>> {
        match cmd {
            Command::Set(text) => self.form.apply_assignment(text)?,
            Command::Save => self.save(),
            Command::Export => self.export()?,
            Command::Out(text) => {
                self.options.set_path(text);
                logf!("CLI: Out path set → {}", self.options.out_path().display());
            }
            Command::Overwrite => self.options.overwrite = true,
            Command::Clean(input) => {
                let output = clean::default_cleaned_path(input);
                let report = clean::clean_file(input, &output)?;
                writeln!(
                    self.out,
                    "Limpieza: {} (vacíos={}, fuera de rango={}, rellenados={}, no evaluados={}, reclasificados={})",
                    output.display(),
                    report.placeholders + report.unparsable,
                    report.out_of_range + report.age_out_of_range + report.arm_incoherent,
                    report.filled_with_median,
                    report.not_evaluated,
                    report.reclassified,
                )?;
            }
            Command::Fields => self.print_fields()?,
            Command::Help => write!(self.out, "{}", include_str!("cli_help.txt"))?,
            Command::Interactive => {}
        }
        Ok(())
    }

    fn save(&mut self) {
        let mut ui = CliUi { form: &mut self.form, out: &mut self.out };
        self.store.capture(&mut ui);
    }

    fn export(&mut self) -> Result<(), Box<dyn Error>> {
        let mut ui = CliUi { form: &mut self.form, out: &mut self.out };
        match export::export(&self.store, &self.options, &mut ui)? {
            ExportOutcome::Written(path) => writeln!(self.out, "Exportado: {}", path.display())?,
            ExportOutcome::Empty => {}
        }
        Ok(())
    }

    fn print_fields(&mut self) -> Result<(), Box<dyn Error>> {
        for (section, ids) in SECTIONS {
            writeln!(self.out, "{section}: {}", ids.join(", "))?;
        }
        Ok(())
    }

    /// Line-driven form: `campo=valor`, `guardar`, `exportar`, `campos`, `salir`.
    /// Bad lines are reported and skipped.
    fn interactive<R: BufRead>(&mut self, input: R) -> Result<(), Box<dyn Error>> {
        logd!("CLI: interactive mode");
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }

            let res: Result<(), Box<dyn Error>> = match line.to_lowercase().as_str() {
                "guardar" | "save" => { self.save(); Ok(()) }
                "exportar" | "export" => self.export(),
                "campos" | "fields" => self.print_fields(),
                "salir" | "quit" | "exit" => break,
                _ => self.form.apply_assignment(line).map_err(Into::into),
            };
            if let Err(e) = res {
                loge!("CLI: {}", e);
                writeln!(self.out, "Error: {e}")?;
            }
        }
        Ok(())
    }
}
