use derive_more::Display;
use serde::{Deserialize, Serialize};
use tactile_geometry::{Point, Vector};

/// The direction of a straight drag segment, in screen coordinates (y grows downwards).
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Classifies a drag vector by its dominant axis.
    ///
    /// The horizontal axis wins only if it is strictly larger, ties go to the vertical one.
    pub fn of(delta: Vector) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x < 0.0 {
                Self::Left
            } else {
                Self::Right
            }
        } else if delta.y < 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn between(from: Point, to: Point) -> Self {
        Self::of(to - from)
    }
}

/// A recognized gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    /// Fingers that performed the gesture.
    pub finger_count: usize,
    /// Stationary fingers held down while the gesture was performed.
    pub modifier_count: usize,
    /// Where the gesture started, relative to the surface size (0..1 on both axes).
    pub start_position: Point,
    pub shape: GestureShape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureShape {
    Tap,
    Swipe(SwipeDirection),
    /// Two or more swipes performed without lifting the finger.
    SwipeSequence(Vec<SwipeDirection>),
}

impl Gesture {
    pub fn tap(finger_count: usize, modifier_count: usize, start_position: Point) -> Self {
        Self {
            finger_count,
            modifier_count,
            start_position,
            shape: GestureShape::Tap,
        }
    }

    /// Builds a swipe or a swipe sequence from the directions a finger recorded.
    ///
    /// `None` if no direction was recorded.
    pub fn from_swipes(
        swipes: &[SwipeDirection],
        finger_count: usize,
        modifier_count: usize,
        start_position: Point,
    ) -> Option<Self> {
        let shape = match swipes {
            [] => return None,
            [direction] => GestureShape::Swipe(*direction),
            directions => GestureShape::SwipeSequence(directions.to_vec()),
        };
        Some(Self {
            finger_count,
            modifier_count,
            start_position,
            shape,
        })
    }

    /// The swipe directions in recorded order, empty for taps.
    pub fn directions(&self) -> &[SwipeDirection] {
        match &self.shape {
            GestureShape::Tap => &[],
            GestureShape::Swipe(direction) => std::slice::from_ref(direction),
            GestureShape::SwipeSequence(directions) => directions,
        }
    }

    pub fn is_tap(&self) -> bool {
        self.shape == GestureShape::Tap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SwipeDirection::*;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(SwipeDirection::of(Vector::new(-10.0, 3.0)), Left);
        assert_eq!(SwipeDirection::of(Vector::new(10.0, -3.0)), Right);
        assert_eq!(SwipeDirection::of(Vector::new(2.0, -30.0)), Up);
        assert_eq!(SwipeDirection::of(Vector::new(-2.0, 30.0)), Down);
    }

    #[test]
    fn ties_resolve_vertically() {
        assert_eq!(SwipeDirection::of(Vector::new(5.0, 5.0)), Down);
        assert_eq!(SwipeDirection::of(Vector::new(-5.0, -5.0)), Up);
        assert_eq!(SwipeDirection::of(Vector::new(5.0, -5.0)), Up);
    }

    #[test]
    fn shape_follows_swipe_count() {
        let start = Point::new(0.5, 0.5);
        assert_eq!(Gesture::from_swipes(&[], 1, 0, start), None);

        let swipe = Gesture::from_swipes(&[Left], 1, 0, start).unwrap();
        assert_eq!(swipe.shape, GestureShape::Swipe(Left));
        assert_eq!(swipe.directions(), &[Left]);

        let sequence = Gesture::from_swipes(&[Left, Up], 2, 1, start).unwrap();
        assert_eq!(sequence.shape, GestureShape::SwipeSequence(vec![Left, Up]));
        assert_eq!(sequence.directions(), &[Left, Up]);
        assert_eq!(sequence.finger_count, 2);
        assert_eq!(sequence.modifier_count, 1);
    }

    #[test]
    fn taps_have_no_directions() {
        let tap = Gesture::tap(2, 0, Point::default());
        assert!(tap.is_tap());
        assert!(tap.directions().is_empty());
    }
}
