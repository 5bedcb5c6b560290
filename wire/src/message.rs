use anyhow::{Result, bail};

use crate::WireGesture;

/// A message sent from the touch client to the remote service.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientMessage {
    Gesture(WireGesture),
    /// A braille key combination, one bit per dot.
    Braille(u8),
    InputMode(InputMode),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    Standard,
    Braille,
}

impl ClientMessage {
    const GESTURE: u8 = 0;
    const BRAILLE: u8 = 1;
    const INPUT_MODE: u8 = 2;

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            ClientMessage::Gesture(gesture) => {
                let mut bytes = vec![Self::GESTURE];
                gesture.write(&mut bytes);
                bytes
            }
            ClientMessage::Braille(combination) => vec![Self::BRAILLE, *combination],
            ClientMessage::InputMode(mode) => vec![Self::INPUT_MODE, mode.to_byte()],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let [kind, payload @ ..] = bytes else {
            bail!("Empty message");
        };

        match *kind {
            Self::GESTURE => Ok(ClientMessage::Gesture(WireGesture::read(payload)?)),
            Self::BRAILLE => {
                let [combination] = payload else {
                    bail!("Invalid byte count for a braille message ({})", bytes.len());
                };
                Ok(ClientMessage::Braille(*combination))
            }
            Self::INPUT_MODE => {
                let [mode] = payload else {
                    bail!(
                        "Invalid byte count for an input mode message ({})",
                        bytes.len()
                    );
                };
                Ok(ClientMessage::InputMode(InputMode::from_byte(*mode)?))
            }
            kind => bail!("Unknown client message kind {kind}"),
        }
    }
}

impl InputMode {
    fn to_byte(self) -> u8 {
        match self {
            InputMode::Standard => 0,
            InputMode::Braille => 1,
        }
    }

    fn from_byte(b: u8) -> Result<Self> {
        Ok(match b {
            0 => InputMode::Standard,
            1 => InputMode::Braille,
            b => bail!("Invalid input mode {b}"),
        })
    }
}
