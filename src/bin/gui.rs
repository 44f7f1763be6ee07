// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use antropometria::{config::state::GuiState, gui};
use eframe::egui::{ IconData, ViewportBuilder };

/// 64×64 green tile with a white tape-measure band and tick marks.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let band = (26..38).contains(&y);
        let tick = band && x % 8 == 0 && y < 32;
        if tick {
            image::Rgba([20, 90, 45, 255])
        } else if band {
            image::Rgba([245, 245, 235, 255])
        } else {
            image::Rgba([30, 140, 70, 255])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
