use anyhow::{Result, bail};
use log::warn;
use tactile_geometry::Point;
use tactile_input::{Gesture, GestureShape, SwipeDirection};

/// A gesture as it is transmitted. Positions are quantized to 1/100 of the surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct WireGesture {
    pub finger_count: u8,
    pub modifier_count: u8,
    pub start_x: f64,
    pub start_y: f64,
    pub shape: WireShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireShape {
    /// A single swipe or a swipe sequence.
    Swipe(Vec<SwipeDirection>),
    Tap,
    /// A plain touch, not produced by the recognizer.
    Touch,
}

impl WireShape {
    const SWIPE: u8 = 0;
    const TAP: u8 = 1;
    const TOUCH: u8 = 2;

    fn tag(&self) -> u8 {
        match self {
            WireShape::Swipe(_) => Self::SWIPE,
            WireShape::Tap => Self::TAP,
            WireShape::Touch => Self::TOUCH,
        }
    }
}

impl From<&Gesture> for WireGesture {
    fn from(gesture: &Gesture) -> Self {
        let shape = match &gesture.shape {
            GestureShape::Tap => WireShape::Tap,
            GestureShape::Swipe(_) | GestureShape::SwipeSequence(_) => {
                WireShape::Swipe(gesture.directions().to_vec())
            }
        };
        Self {
            finger_count: count_byte(gesture.finger_count),
            modifier_count: count_byte(gesture.modifier_count),
            start_x: gesture.start_position.x,
            start_y: gesture.start_position.y,
            shape,
        }
    }
}

impl WireGesture {
    pub fn start_position(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// Appends the record, without the message kind byte.
    pub(crate) fn write(&self, bytes: &mut Vec<u8>) {
        bytes.extend([
            self.finger_count,
            self.modifier_count,
            quantize(self.start_x) as u8,
            quantize(self.start_y) as u8,
            self.shape.tag(),
        ]);
        if let WireShape::Swipe(directions) = &self.shape {
            bytes.extend(directions.iter().map(|d| direction_byte(*d)));
        }
    }

    /// Reads a record, `record` excludes the message kind byte.
    pub(crate) fn read(record: &[u8]) -> Result<Self> {
        let [finger_count, modifier_count, x, y, shape, directions @ ..] = record else {
            bail!(
                "{} bytes is not enough to define a gesture",
                record.len() + 1
            );
        };

        let shape = match *shape {
            WireShape::SWIPE => {
                if directions.is_empty() {
                    bail!("Received a swipe gesture without swipe directions");
                }
                WireShape::Swipe(
                    directions
                        .iter()
                        .map(|b| direction_from_byte(*b))
                        .collect::<Result<_>>()?,
                )
            }
            WireShape::TAP => WireShape::Tap,
            WireShape::TOUCH => WireShape::Touch,
            tag => bail!("{tag} is an unknown gesture shape"),
        };

        Ok(Self {
            finger_count: *finger_count,
            modifier_count: *modifier_count,
            start_x: dequantize(*x),
            start_y: dequantize(*y),
            shape,
        })
    }
}

/// Encodes a recognized gesture as a complete client message.
pub fn encode_gesture(gesture: &Gesture) -> Vec<u8> {
    crate::ClientMessage::Gesture(gesture.into()).to_bytes()
}

fn count_byte(count: usize) -> u8 {
    u8::try_from(count).unwrap_or_else(|_| {
        warn!("Count {count} does not fit into a byte, sending {}", u8::MAX);
        u8::MAX
    })
}

fn quantize(v: f64) -> i8 {
    let scaled = (v * 100.0).round();
    if !(f64::from(i8::MIN)..=f64::from(i8::MAX)).contains(&scaled) {
        warn!("Position {v} is out of the transmittable range and gets clamped");
    }
    // Float to int casts saturate, NaN becomes 0.
    scaled as i8
}

fn dequantize(b: u8) -> f64 {
    f64::from(b as i8) / 100.0
}

fn direction_byte(direction: SwipeDirection) -> u8 {
    match direction {
        SwipeDirection::Left => 0,
        SwipeDirection::Right => 1,
        SwipeDirection::Up => 2,
        SwipeDirection::Down => 3,
    }
}

fn direction_from_byte(b: u8) -> Result<SwipeDirection> {
    Ok(match b {
        0 => SwipeDirection::Left,
        1 => SwipeDirection::Right,
        2 => SwipeDirection::Up,
        3 => SwipeDirection::Down,
        b => bail!("Invalid swipe direction {b}"),
    })
}
