//! The binary client message protocol used to forward recognized gestures to a remote service.
//!
//! Every message starts with a kind byte. A gesture record is laid out as:
//!
//! | byte | content |
//! |------|---------|
//! | 0 | message kind, `0` |
//! | 1 | finger count |
//! | 2 | modifier count |
//! | 3 | start x in hundredths of the surface width, signed |
//! | 4 | start y in hundredths of the surface height, signed |
//! | 5 | shape: `0` swipe, `1` tap, `2` touch |
//! | 6.. | swipes only: one byte per direction, `Left = 0`, `Right = 1`, `Up = 2`, `Down = 3` |
mod gesture;
mod message;

pub use gesture::*;
pub use message::*;
