use std::fmt;
use std::str::FromStr;

use overlay_core::errors::{ErrorInfo, OverlayError};
use serde::{Deserialize, Serialize};

/// Operational status of a peer.
///
/// `Ok` and `Down` can be switched freely; `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailState {
    /// Up and participating.
    #[default]
    Ok,
    /// Temporarily unavailable.
    Down,
    /// Permanently removed.
    Dead,
}

impl FailState {
    /// Numeric code of the state (`OK = 0`, `DEAD = 1`, `DOWN = 2`).
    pub fn code(self) -> i32 {
        match self {
            FailState::Ok => 0,
            FailState::Dead => 1,
            FailState::Down => 2,
        }
    }
}

impl TryFrom<i32> for FailState {
    type Error = OverlayError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FailState::Ok),
            1 => Ok(FailState::Dead),
            2 => Ok(FailState::Down),
            other => Err(unknown_state(other)),
        }
    }
}

impl FromStr for FailState {
    type Err = OverlayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "ok" => Ok(FailState::Ok),
            "down" => Ok(FailState::Down),
            "dead" => Ok(FailState::Dead),
            _ => Err(unknown_state(value)),
        }
    }
}

impl fmt::Display for FailState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailState::Ok => "OK",
            FailState::Down => "DOWN",
            FailState::Dead => "DEAD",
        };
        f.write_str(label)
    }
}

fn unknown_state(value: impl fmt::Display) -> OverlayError {
    OverlayError::Argument(
        ErrorInfo::new("unknown-fail-state", format!("failState={value}"))
            .with_hint("expected OK (0), DEAD (1) or DOWN (2)"),
    )
}
