// Pet state machine

use glam::IVec2;

/// Which way the pet is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sign of horizontal movement in screen space
    pub fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// Index into per-direction asset arrays
    pub fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => 1,
        }
    }
}

/// Whether the pet is walking or taking a break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motion {
    /// Animating and moving every tick
    #[default]
    Walking,
    /// Standing still until the resume task fires
    Paused,
}

impl Motion {
    /// Check if ticks should advance the walk cycle
    pub fn is_walking(&self) -> bool {
        matches!(self, Self::Walking)
    }
}

/// Everything that describes where the pet is and what it is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetState {
    /// Top-left corner of the window in screen coordinates
    pub position: IVec2,
    pub facing: Facing,
    pub motion: Motion,
}

impl PetState {
    pub fn new(position: IVec2) -> Self {
        Self {
            position,
            facing: Facing::default(),
            motion: Motion::default(),
        }
    }

    /// Step horizontally inside `[0, max_x]`, turning around at the edge
    /// the pet is walking toward.
    ///
    /// A position outside the bounds is clamped back without turning.
    /// Returns true when the pet turned.
    pub fn walk(&mut self, distance: i32, max_x: i32) -> bool {
        let max_x = max_x.max(0);
        let x = crate::core::math::clamp(
            self.position.x + distance * self.facing.sign(),
            0,
            max_x,
        );
        self.position.x = x;

        let reached_edge = match self.facing {
            Facing::Left => x == 0,
            Facing::Right => x == max_x,
        };
        if reached_edge {
            self.facing = self.facing.flipped();
        }
        reached_edge
    }
}
