use super::state::TenziesApp;
use crate::config::DICE_COUNT;
use eframe::egui::{Context, Key};

const DIE_KEYS: [Key; DICE_COUNT] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
    Key::Num0,
];

/// Board position toggled by a digit key: `1` is the first die, `0` the tenth.
pub fn die_index_for_key(key: Key) -> Option<usize> {
    DIE_KEYS.iter().position(|&k| k == key)
}

impl TenziesApp {
    pub fn handle_keyboard(&mut self, ctx: &Context) {
        let (roll, toggled) = ctx.input(|i| {
            let toggled: Vec<usize> = DIE_KEYS
                .iter()
                .filter(|&&key| i.key_pressed(key))
                .filter_map(|&key| die_index_for_key(key))
                .collect();
            (i.key_pressed(Key::R), toggled)
        });

        for index in toggled {
            self.toggle_hold_at(index);
        }
        if roll {
            self.roll();
        }
    }
}
