use serde::{Deserialize, Serialize};
use tactile_geometry::Point;

use crate::{PointerSample, Timestamp};

/// A raw touch event delivered by the host.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TouchEvent {
    /// A finger touched the surface.
    Down {
        pointer: PointerSample,
        time: Timestamp,
    },
    /// A snapshot of all fingers currently on the surface.
    Move {
        pointers: Vec<PointerSample>,
        time: Timestamp,
    },
    /// A finger left the surface at the given position.
    Up {
        pointer: PointerSample,
        time: Timestamp,
    },
}

impl TouchEvent {
    pub fn down(id: u32, position: impl Into<Point>, time: u64) -> Self {
        Self::Down {
            pointer: PointerSample::new(id, position),
            time: Timestamp::from_millis(time),
        }
    }

    pub fn moved(pointers: impl IntoIterator<Item = PointerSample>, time: u64) -> Self {
        Self::Move {
            pointers: pointers.into_iter().collect(),
            time: Timestamp::from_millis(time),
        }
    }

    pub fn up(id: u32, position: impl Into<Point>, time: u64) -> Self {
        Self::Up {
            pointer: PointerSample::new(id, position),
            time: Timestamp::from_millis(time),
        }
    }

    pub fn time(&self) -> Timestamp {
        use TouchEvent::*;
        match *self {
            Down { time, .. } | Move { time, .. } | Up { time, .. } => time,
        }
    }
}
