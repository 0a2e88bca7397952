//! Read-your-writes consistency
//!
//! The backend answers every request with the event store position it has
//! seen. Echoing that position back asks the read side to wait until its
//! projections have caught up with it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// HTTP header carrying the observed position (sent lower-case)
pub const OBSERVED_POSITION_HEADER: &str = "x-observed-position";

/// Event store position observed by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservedPosition(u64);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid observed position: {0:?}")]
pub struct InvalidObservedPosition(pub String);

impl ObservedPosition {
    pub const fn new(position: u64) -> Self {
        Self(position)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Keep the newer of two positions
    pub fn merge(current: Option<Self>, observed: Self) -> Self {
        match current {
            Some(current) if current >= observed => current,
            _ => observed,
        }
    }
}

impl FromStr for ObservedPosition {
    type Err = InvalidObservedPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidObservedPosition(s.to_string()))
    }
}

impl fmt::Display for ObservedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
