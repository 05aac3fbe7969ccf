// Presentation: game state bookkeeping, UI and keyboard input
pub mod input;
pub mod state;
pub mod ui;

pub use state::TenziesApp;

use eframe::egui::Context;
use eframe::{App, Frame};

impl App for TenziesApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.handle_keyboard(ctx);
        self.render_ui(ctx);
    }
}
