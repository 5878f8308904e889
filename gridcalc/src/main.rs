//! gridcalc — a desk calculator
//!
//! Basic arithmetic, power, square root, and a one-register memory.

mod app;

use app::GridCalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([300.0, 390.0])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| {
            calccore::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(GridCalcApp::new(cc))
        }),
    )
}
