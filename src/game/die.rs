use crate::config::DIE_FACES;
use rand::Rng;
use std::fmt;

/// Identifier of one die slot. Unique within the `GameState` that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieId(pub(crate) u64);

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "die#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    id: DieId,
    value: u8,
    held: bool,
}

impl Die {
    pub(crate) fn new(id: DieId, value: u8) -> Self {
        assert!(
            DIE_FACES.contains(&value),
            "die value {} is outside {:?}",
            value,
            DIE_FACES
        );
        Self {
            id,
            value,
            held: false,
        }
    }

    pub(crate) fn roll<R: Rng>(id: DieId, rng: &mut R) -> Self {
        Self::new(id, draw_face(rng))
    }

    pub fn id(&self) -> DieId {
        self.id
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Text used for the die's accessible label and hover text.
    pub fn describe(&self) -> String {
        let held = if self.held { "held" } else { "not held" };
        format!("Die with value {}, {}", self.value, held)
    }

    // Held dice keep their face.
    pub(crate) fn reroll<R: Rng>(&mut self, rng: &mut R) {
        if !self.held {
            self.value = draw_face(rng);
        }
    }

    pub(crate) fn toggle_hold(&mut self) {
        self.held = !self.held;
    }
}

fn draw_face<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(DIE_FACES)
}
