// src/record.rs
//
// One captured measurement entry. The field set is fixed: 29 form inputs
// plus the date. Column names are the form ids, spelled as the form has them.

record_fields! {
    /// A flat snapshot of the form. Values are kept as typed (no numeric parsing).
    pub struct Record {
        id              => "ID",
        institucion     => "Insititucion",
        nombre          => "Nombre",
        apellido        => "Apelllido",
        edad            => "Edad",
        peso            => "Peso",
        altura          => "Altura",

        // Skinfolds (mm)
        pl_tr           => "PlTr",
        pl_sub_esc      => "PlSubEsc",
        pl_ci           => "PlCI",
        pl_sup          => "PlSup",
        pl_abd          => "PlAbd",
        pl_mm           => "PlMM",
        pl_pant         => "PlPant",

        // Perimeters (cm)
        per_brazo_rel   => "PerBrazoRel",
        per_brazo_con   => "PerBrazoCon",
        per_t           => "PerT",
        per_cin         => "PerCin",
        per_cad         => "PerCad",
        per_muslo       => "PerMuslo",
        per_pier        => "PerPier",

        // Physical tests + their classifications
        test_abd        => "Test_Abd",
        clasi_cls_abd   => "Clasi_ClsAbd",
        test_flex_cls   => "Test_FlexCLS",
        clasi_cls_flex  => "Clasi_ClsFlex",
        test_salto      => "Test_Salto",
        clasi_salto     => "Clasi_salto",
        test_cooper     => "Test_Cooper",
        clasi_coop      => "Clasi_Coop",

        fecha           => "Fecha",
    }
}

/// The designated date input; always the last column.
pub const DATE_FIELD: &str = "Fecha";

/// Every column, in order (measurement inputs, then the date).
pub const COLUMNS: &[&str] = Record::KEYS;

/// The measurement inputs only (everything but the date).
pub const FIELD_NAMES: &[&str] = match COLUMNS.split_last() {
    Some((_, inputs)) => inputs,
    None => COLUMNS,
};

pub fn is_known_field(id: &str) -> bool {
    COLUMNS.contains(&id)
}

/// Groups used to lay out the form (GUI) and to list fields (CLI).
pub const SECTIONS: &[(&str, &[&str])] = &[
    ("Datos personales", &["ID", "Insititucion", "Nombre", "Apelllido", "Edad", "Peso", "Altura"]),
    ("Pliegues (mm)", &["PlTr", "PlSubEsc", "PlCI", "PlSup", "PlAbd", "PlMM", "PlPant"]),
    ("Perímetros (cm)", &["PerBrazoRel", "PerBrazoCon", "PerT", "PerCin", "PerCad", "PerMuslo", "PerPier"]),
    ("Tests físicos", &[
        "Test_Abd", "Clasi_ClsAbd", "Test_FlexCLS", "Clasi_ClsFlex",
        "Test_Salto", "Clasi_salto", "Test_Cooper", "Clasi_Coop",
    ]),
    ("Fecha", &[DATE_FIELD]),
];

impl Record {
    /// (column, value) pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        COLUMNS.iter().copied().zip(self.values())
    }

    /// True when every input was left blank.
    pub fn is_blank(&self) -> bool {
        self.values().iter().all(|v| v.is_empty())
    }
}
