use super::die::{Die, DieId};
use crate::config::DICE_COUNT;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// What a call to [`GameState::roll`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// Unheld dice got new faces.
    Rerolled,
    /// The game was already won, so a fresh set was dealt.
    NewGame,
}

/// Ten dice plus the RNG and id counter that feed them.
///
/// The won flag is never stored; [`GameState::is_won`] derives it from the
/// dice every time it is asked.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    dice: [Die; DICE_COUNT],
    next_id: u64,
    rng: R,
}

impl GameState<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameState<R> {
    /// Deals a fresh game drawing every face from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let mut next_id = 0;
        let dice = deal(&mut next_id, &mut rng);
        Self { dice, next_id, rng }
    }

    /// Builds a game with known faces, all unheld.
    ///
    /// # Panics
    /// If `faces` does not hold exactly ten values, or a value is outside 1..=6.
    pub fn from_faces(rng: R, faces: &[u8]) -> Self {
        assert_eq!(
            faces.len(),
            DICE_COUNT,
            "a game needs exactly {} dice",
            DICE_COUNT
        );
        let dice = std::array::from_fn(|i| Die::new(DieId(i as u64), faces[i]));
        Self {
            dice,
            next_id: DICE_COUNT as u64,
            rng,
        }
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.dice.iter().find(|die| die.id() == id)
    }

    /// All dice held and showing the face of the first one.
    pub fn is_won(&self) -> bool {
        self.dice.iter().all(Die::is_held) && self.dice.iter().map(Die::value).all_equal()
    }

    /// Replaces every die with a freshly dealt, unheld one with a new id.
    pub fn new_game(&mut self) {
        self.dice = deal(&mut self.next_id, &mut self.rng);
        debug!(faces = ?self.faces(), "dealt new game");
    }

    /// Rerolls the unheld dice, or deals a new game if the current one is won.
    pub fn roll(&mut self) -> RollOutcome {
        if self.is_won() {
            self.new_game();
            return RollOutcome::NewGame;
        }

        for die in self.dice.iter_mut() {
            die.reroll(&mut self.rng);
        }
        debug!(faces = ?self.faces(), won = self.is_won(), "rolled unheld dice");
        RollOutcome::Rerolled
    }

    /// Flips the hold flag of the die with `id`.
    ///
    /// Returns `false` and leaves the game untouched if no die has that id.
    pub fn toggle_hold(&mut self, id: DieId) -> bool {
        let Some(die) = self.dice.iter_mut().find(|die| die.id() == id) else {
            debug!(%id, "ignoring hold toggle for unknown die");
            return false;
        };
        die.toggle_hold();
        debug!(%id, held = die.is_held(), "toggled hold");
        true
    }

    fn faces(&self) -> [u8; DICE_COUNT] {
        std::array::from_fn(|i| self.dice[i].value())
    }
}

fn deal<R: Rng>(next_id: &mut u64, rng: &mut R) -> [Die; DICE_COUNT] {
    std::array::from_fn(|_| {
        let id = DieId(*next_id);
        *next_id += 1;
        Die::roll(id, rng)
    })
}
