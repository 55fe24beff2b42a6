//! Pairwise collision resolution

use super::vehicle::Vehicle;

/// Which of the two vehicles in a collision were killed by it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub first_died: bool,
    pub second_died: bool,
}

impl CollisionOutcome {
    pub fn deaths(&self) -> usize {
        usize::from(self.first_died) + usize::from(self.second_died)
    }
}

/// Apply a collision between two vehicles sharing a cell
///
/// Each side reacts to the other; since death times are fixed per kind the
/// result does not depend on argument order. Neither reference is kept.
pub fn resolve_collision(first: &mut Vehicle, second: &mut Vehicle) -> CollisionOutcome {
    let first_was_alive = first.is_alive();
    let second_was_alive = second.is_alive();

    first.collide(second);
    second.collide(first);

    CollisionOutcome {
        first_died: first_was_alive && !first.is_alive(),
        second_died: second_was_alive && !second.is_alive(),
    }
}
