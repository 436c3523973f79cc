pub mod camera;
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod math;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use config::{ControllerConfig, HomeView, SpeedScale};
pub use controller::{
    default_keyboard_mouse_map, default_pad_map, CameraController, FreeLookState, InputSample,
};
