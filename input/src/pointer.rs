use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use tactile_geometry::Point;

/// Identifies a finger while it touches the surface.
///
/// Ids are assigned by the host and are unique only for as long as the finger is down.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PointerId(u32);

impl PointerId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// The position of a pointer at the time of an event.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub fn new(id: u32, position: impl Into<Point>) -> Self {
        Self {
            id: PointerId::new(id),
            position: position.into(),
        }
    }
}
