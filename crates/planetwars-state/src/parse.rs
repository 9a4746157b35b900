//! Snapshot line parser.
//!
//! Turns one line of snapshot text into a typed record. Knows nothing about
//! planet ids or fleet merging; the container applies records in order.

use std::str::FromStr;

use glam::DVec2;

use planetwars_core::constants::*;
use planetwars_core::error::{ParseError, ParseErrorKind};
use planetwars_core::types::{PlanetId, PlayerId};

/// A single parsed snapshot record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Record {
    Planet {
        position: DVec2,
        owner: PlayerId,
        num_ships: i64,
        growth_rate: i64,
    },
    Fleet {
        owner: PlayerId,
        num_ships: u32,
        source: PlanetId,
        destination: PlanetId,
        total_trip_length: u32,
        turns_remaining: u32,
    },
}

/// Parse one line. Returns `Ok(None)` for blank and comment-only lines.
/// `line_no` is 1-based and only used for error reporting.
pub(crate) fn parse_line(line_no: usize, line: &str) -> Result<Option<Record>, ParseError> {
    let content = match line.split_once(COMMENT_MARKER) {
        Some((before, _)) => before,
        None => line,
    };
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let Some(&tag) = tokens.first() else {
        return Ok(None);
    };

    let fail = |kind: ParseErrorKind| ParseError::new(line_no, kind);
    let expect_tokens = |expected: usize| {
        if tokens.len() == expected {
            Ok(())
        } else {
            Err(fail(ParseErrorKind::WrongTokenCount {
                tag: tag.to_string(),
                expected,
                found: tokens.len(),
            }))
        }
    };

    match tag {
        PLANET_TAG => {
            expect_tokens(PLANET_TOKENS)?;
            let x = coordinate(line_no, tokens[1])?;
            let y = coordinate(line_no, tokens[2])?;
            Ok(Some(Record::Planet {
                position: DVec2::new(x, y),
                owner: number(line_no, tokens[3])?,
                num_ships: number(line_no, tokens[4])?,
                growth_rate: number(line_no, tokens[5])?,
            }))
        }
        FLEET_TAG => {
            expect_tokens(FLEET_TOKENS)?;
            let num_ships: u32 = number(line_no, tokens[2])?;
            if num_ships == 0 {
                return Err(fail(ParseErrorKind::ZeroShipFleet));
            }
            Ok(Some(Record::Fleet {
                owner: number(line_no, tokens[1])?,
                num_ships,
                source: number(line_no, tokens[3])?,
                destination: number(line_no, tokens[4])?,
                total_trip_length: number(line_no, tokens[5])?,
                turns_remaining: number(line_no, tokens[6])?,
            }))
        }
        other => Err(fail(ParseErrorKind::UnknownRecord(other.to_string()))),
    }
}

fn number<T: FromStr>(line_no: usize, token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| {
        ParseError::new(
            line_no,
            ParseErrorKind::InvalidNumber {
                token: token.to_string(),
            },
        )
    })
}

/// A planet coordinate. `nan` and `inf` parse as `f64` but are not
/// positions.
fn coordinate(line_no: usize, token: &str) -> Result<f64, ParseError> {
    let value: f64 = number(line_no, token)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::new(
            line_no,
            ParseErrorKind::InvalidNumber {
                token: token.to_string(),
            },
        ))
    }
}
