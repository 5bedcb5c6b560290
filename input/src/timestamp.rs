use std::time::Duration;

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};

/// A monotonic input timestamp in milliseconds.
///
/// The origin is chosen by the host (usually the device uptime). Only differences between
/// timestamps are meaningful.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// The duration elapsed since `earlier`, zero if `earlier` is actually later.
    pub fn saturating_duration_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}
