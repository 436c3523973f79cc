mod angles;
pub mod smoothing;

pub use angles::quat_from_pitch_yaw_roll;
pub use smoothing::{smooth, Smoothing};
