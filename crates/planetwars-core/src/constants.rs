//! Protocol constants.

use crate::types::PlayerId;

// --- Players ---

/// Owner id of unclaimed planets.
pub const NEUTRAL: PlayerId = 0;

/// Owner id of the player this client acts for.
pub const ME: PlayerId = 1;

/// Owner id of the opposing player.
pub const ENEMY: PlayerId = 2;

// --- Wire protocol ---

/// Record tag for a planet line.
pub const PLANET_TAG: &str = "P";

/// Record tag for a fleet line.
pub const FLEET_TAG: &str = "F";

/// Tokens in a planet record, tag included: `P x y owner ships growth`.
pub const PLANET_TOKENS: usize = 6;

/// Tokens in a fleet record, tag included:
/// `F owner ships source destination trip_length turns_remaining`.
pub const FLEET_TOKENS: usize = 7;

/// Everything after this marker on a snapshot line is ignored.
pub const COMMENT_MARKER: char = '#';

/// Line that ends a turn, in both directions.
pub const TURN_END: &str = "go";
