//! Fundamental identifier types.

/// Index of a planet in the container's planet list. Assigned in parse
/// order starting at 0.
pub type PlanetId = usize;

/// Player id as written on the wire. See [`crate::constants`] for the
/// conventional values.
pub type PlayerId = u32;
