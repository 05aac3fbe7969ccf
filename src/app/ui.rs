use super::state::TenziesApp;
use crate::config::{
    BACKGROUND_COLOR, BOARD_COLOR, DICE_PER_ROW, DIE_BUTTON_SIZE, DIE_FONT_SIZE, DIE_SPACING,
    DIE_TEXT_COLOR, FREE_DIE_COLOR, HELD_DIE_COLOR, ROLL_BUTTON_COLOR, ROLL_BUTTON_SIZE,
    WINDOW_TITLE,
};
use crate::game::{Die, DieId};
use eframe::egui::{
    self, Button, CentralPanel, Color32, Context, Grid, RichText, Ui, Vec2, WidgetInfo,
    WidgetType,
};

pub const INSTRUCTIONS: &str = "Roll until all dice are the same. Click each die to freeze it at its current value between rolls.";

/// Caption of the single game control.
pub fn roll_button_label(won: bool) -> &'static str {
    if won { "New Game" } else { "Roll" }
}

impl TenziesApp {
    pub fn render_ui(&mut self, ctx: &Context) {
        self.setup_custom_styles(ctx);

        let panel_frame = egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND_COLOR);
        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                egui::Frame::group(ui.style()).fill(BOARD_COLOR).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(WINDOW_TITLE)
                                .heading()
                                .strong()
                                .color(DIE_TEXT_COLOR),
                        );
                        ui.label(RichText::new(INSTRUCTIONS).color(DIE_TEXT_COLOR));
                        ui.add_space(16.0);

                        self.render_dice(ui);

                        ui.add_space(20.0);
                        self.render_roll_button(ui);
                        ui.add_space(10.0);
                    });
                });
            });
        });
    }

    fn setup_custom_styles(&self, ctx: &Context) {
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(32.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.spacing.button_padding = Vec2::new(10.0, 6.0);

        ctx.set_style(style);
    }

    fn render_dice(&mut self, ui: &mut Ui) {
        let mut clicked: Option<DieId> = None;

        Grid::new("dice_grid")
            .spacing([DIE_SPACING, DIE_SPACING])
            .show(ui, |ui| {
                for (index, die) in self.game.dice().iter().enumerate() {
                    if die_button(ui, die).clicked() {
                        clicked = Some(die.id());
                    }
                    if (index + 1) % DICE_PER_ROW == 0 {
                        ui.end_row();
                    }
                }
            });

        if let Some(id) = clicked {
            self.toggle_hold(id);
        }
    }

    fn render_roll_button(&mut self, ui: &mut Ui) {
        let label = RichText::new(roll_button_label(self.game.is_won()))
            .size(20.0)
            .color(Color32::WHITE);
        let response = ui.add(
            Button::new(label)
                .fill(ROLL_BUTTON_COLOR)
                .min_size(ROLL_BUTTON_SIZE.into()),
        );

        if self.focus_roll_button {
            response.request_focus();
            self.focus_roll_button = false;
        }
        if response.clicked() {
            self.roll();
        }
    }
}

fn die_button(ui: &mut Ui, die: &Die) -> egui::Response {
    let fill = if die.is_held() { HELD_DIE_COLOR } else { FREE_DIE_COLOR };
    let text = RichText::new(die.value().to_string())
        .size(DIE_FONT_SIZE)
        .strong()
        .color(DIE_TEXT_COLOR);
    let description = die.describe();

    let response = ui.add(
        Button::new(text)
            .fill(fill)
            .min_size(Vec2::splat(DIE_BUTTON_SIZE)),
    );
    response.widget_info(|| {
        WidgetInfo::selected(WidgetType::Button, true, die.is_held(), &description)
    });
    response.on_hover_text(description)
}
