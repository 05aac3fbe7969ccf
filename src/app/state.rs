use crate::game::{DieId, GameState, RollOutcome};
use tracing::info;

pub struct TenziesApp {
    pub game: GameState,

    // Won flag seen after the last handled event, used to spot the transition
    pub was_won: bool,
    // Move keyboard focus to the roll button on the next frame
    pub focus_roll_button: bool,
}

impl Default for TenziesApp {
    fn default() -> Self {
        Self::with_game(GameState::new())
    }
}

impl TenziesApp {
    pub fn with_game(game: GameState) -> Self {
        let was_won = game.is_won();
        Self {
            game,
            was_won,
            focus_roll_button: false,
        }
    }

    pub fn roll(&mut self) {
        if self.game.roll() == RollOutcome::NewGame {
            info!("starting a new game");
        }
        self.sync_win_state();
    }

    pub fn toggle_hold(&mut self, id: DieId) {
        self.game.toggle_hold(id);
        self.sync_win_state();
    }

    /// Toggles the die at board position `index`; out-of-range positions are ignored.
    pub fn toggle_hold_at(&mut self, index: usize) {
        if let Some(id) = self.game.dice().get(index).map(|die| die.id()) {
            self.toggle_hold(id);
        }
    }

    fn sync_win_state(&mut self) {
        let won = self.game.is_won();
        if won && !self.was_won {
            info!(face = self.game.dice()[0].value(), "all dice match, game won");
            self.focus_roll_button = true;
        }
        self.was_won = won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DICE_COUNT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app_with_faces(faces: &[u8]) -> TenziesApp {
        TenziesApp::with_game(GameState::from_faces(StdRng::seed_from_u64(0), faces))
    }

    #[test]
    fn winning_requests_focus_once() {
        let mut app = app_with_faces(&[1; DICE_COUNT]);

        for index in 0..DICE_COUNT - 1 {
            app.toggle_hold_at(index);
            assert!(!app.focus_roll_button);
        }
        app.toggle_hold_at(DICE_COUNT - 1);

        assert!(app.game.is_won());
        assert!(app.was_won);
        assert!(app.focus_roll_button);
    }

    #[test]
    fn roll_after_win_starts_over() {
        let mut app = app_with_faces(&[2; DICE_COUNT]);
        for index in 0..DICE_COUNT {
            app.toggle_hold_at(index);
        }
        app.focus_roll_button = false;

        app.roll();

        assert!(!app.game.is_won());
        assert!(!app.was_won);
        assert!(!app.focus_roll_button);
        assert!(app.game.dice().iter().all(|die| !die.is_held()));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut app = app_with_faces(&[3; DICE_COUNT]);
        let before = app.game.dice().to_vec();

        app.toggle_hold_at(DICE_COUNT);

        assert_eq!(app.game.dice(), before.as_slice());
    }
}
