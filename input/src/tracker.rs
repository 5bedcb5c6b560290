mod finger_track;

pub use finger_track::*;
