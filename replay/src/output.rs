use anyhow::Result;
use clap::ValueEnum;
use itertools::Itertools;
use tactile_input::Gesture;
use tactile_wire::encode_gesture;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per gesture.
    Json,
    /// The client message bytes as hex.
    Wire,
}

impl OutputFormat {
    pub fn render(self, gesture: &Gesture) -> Result<String> {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string(gesture)?,
            OutputFormat::Wire => encode_gesture(gesture)
                .iter()
                .map(|b| format!("{b:02x}"))
                .join(""),
        })
    }
}

#[cfg(test)]
mod tests {
    use tactile_geometry::Point;
    use tactile_input::SwipeDirection;

    use super::*;

    #[test]
    fn renders_wire_hex() {
        use SwipeDirection::*;
        let gesture = Gesture::from_swipes(&[Left, Up], 1, 2, Point::new(0.5, 0.5)).unwrap();
        assert_eq!(
            OutputFormat::Wire.render(&gesture).unwrap(),
            "0001023232000002"
        );
    }

    #[test]
    fn renders_json() {
        let tap = Gesture::tap(2, 0, Point::new(0.25, 0.5));
        let json: serde_json::Value =
            serde_json::from_str(&OutputFormat::Json.render(&tap).unwrap()).unwrap();
        assert_eq!(json["finger_count"], 2);
        assert_eq!(json["modifier_count"], 0);
        assert_eq!(json["start_position"], serde_json::json!([0.25, 0.5]));
        assert_eq!(json["shape"], "Tap");
    }
}
