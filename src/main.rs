use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use tenzies::app::TenziesApp;
use tenzies::config::{WINDOW_SIZE, WINDOW_TITLE};
use tenzies::error::Result;
use tenzies::logging::init_logging;

fn main() -> Result<()> {
    init_logging()?;

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(TenziesApp::default()))),
    )?;

    Ok(())
}
