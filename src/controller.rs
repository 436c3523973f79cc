//! Free-look camera controller.
//!
//! Reads two input contexts (keyboard/mouse and gamepad), smooths the
//! per-frame translation and look deltas, and drives a camera transform.
//! Orientation is rebuilt from absolute pitch/yaw every frame rather than
//! accumulated as quaternions.

use glam::Vec3;
use log::{debug, trace, warn};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::config::ControllerConfig;
use crate::core::{AxisPolicy, Control, Devices, InputMap, MouseAxis, PadAxis, PadButton};
use crate::math::quat_from_pitch_yaw_roll;
use crate::traits::{Axis, Button, CameraTransform, InputContext, Space};

const LOG_TARGET: &str = "freelook::controller";

/// Name of the default keyboard/mouse context
pub const KEYBOARD_MOUSE_CONTEXT: &str = "CameraController (Keyboard/Mouse)";
/// Name of the default gamepad context
pub const PAD_CONTEXT: &str = "CameraController (Pad)";

/// Default keyboard/mouse table: WASD/QE movement, arrows and mouse look,
/// shift boost.
pub fn default_keyboard_mouse_map() -> InputMap {
    let mut map = InputMap::new(KEYBOARD_MOUSE_CONTEXT);
    map.map_float_range(Axis::MoveX, Control::Key(KeyCode::KeyD), 0.0, 1.0)
        .map_float_range(Axis::MoveX, Control::Key(KeyCode::KeyA), 0.0, -1.0)
        .map_float_range(Axis::MoveY, Control::Key(KeyCode::KeyE), 0.0, 1.0)
        .map_float_range(Axis::MoveY, Control::Key(KeyCode::KeyQ), 0.0, -1.0)
        .map_float_range(Axis::MoveZ, Control::Key(KeyCode::KeyW), 0.0, 1.0)
        .map_float_range(Axis::MoveZ, Control::Key(KeyCode::KeyS), 0.0, -1.0)
        .map_float_range(Axis::Pitch, Control::Key(KeyCode::ArrowUp), 0.0, 1.0)
        .map_float_range(Axis::Pitch, Control::Key(KeyCode::ArrowDown), 0.0, -1.0)
        .map_float_range(Axis::Yaw, Control::Key(KeyCode::ArrowLeft), 0.0, 1.0)
        .map_float_range(Axis::Yaw, Control::Key(KeyCode::ArrowRight), 0.0, -1.0)
        .map_bool(Button::Boost, Control::Key(KeyCode::ShiftLeft))
        .map_bool(Button::Boost, Control::Key(KeyCode::ShiftRight));

    map.map_bool(Button::Lmb, Control::MouseButton(MouseButton::Left))
        .map_bool(Button::Rmb, Control::MouseButton(MouseButton::Right))
        .map_float(Axis::Pitch, Control::MouseAxis(MouseAxis::Y))
        .map_float(Axis::Yaw, Control::MouseAxis(MouseAxis::X));

    // Mouse and keyboard both drive look; take the stronger one instead of stacking.
    map.set_policy(Axis::Pitch, AxisPolicy::Max)
        .set_policy(Axis::Yaw, AxisPolicy::Max);
    map
}

/// Default gamepad table: left stick moves, right stick looks, triggers
/// move down/up, stick clicks boost.
pub fn default_pad_map() -> InputMap {
    let mut map = InputMap::new(PAD_CONTEXT);
    map.map_float(Axis::MoveX, Control::PadAxis(PadAxis::LeftStickX))
        .map_float(Axis::MoveZ, Control::PadAxis(PadAxis::LeftStickY))
        // Two independent trigger axes: both held cancel out.
        .map_float_range(Axis::MoveY, Control::PadAxis(PadAxis::Axis4), 0.0, -1.0)
        .map_float_range(Axis::MoveY, Control::PadAxis(PadAxis::Axis5), 0.0, 1.0)
        .map_float(Axis::Pitch, Control::PadAxis(PadAxis::RightStickY))
        .map_float(Axis::Yaw, Control::PadAxis(PadAxis::RightStickX))
        .map_bool(Button::Boost, Control::PadButton(PadButton::L3))
        .map_bool(Button::Boost, Control::PadButton(PadButton::R3));
    map.set_policy(Axis::MoveY, AxisPolicy::Sum);
    map
}

/// Logical input for one frame, read from both contexts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Keyboard/mouse movement axes
    pub move_km: Vec3,
    /// Gamepad movement axes
    pub move_pad: Vec3,
    /// Gamepad look deflection
    pub pad_pitch: f32,
    pub pad_yaw: f32,
    /// Keyboard/mouse look change since the previous frame
    pub mouse_pitch_delta: f32,
    pub mouse_yaw_delta: f32,
    pub boost: bool,
    pub lmb: bool,
    pub rmb: bool,
}

impl InputSample {
    pub fn read(km: &impl InputContext, pad: &impl InputContext) -> Self {
        let movement = |ctx: &dyn InputContext| {
            Vec3::new(ctx.value(Axis::MoveX), ctx.value(Axis::MoveY), ctx.value(Axis::MoveZ))
        };
        Self {
            move_km: movement(km),
            move_pad: movement(pad),
            pad_pitch: pad.value(Axis::Pitch),
            pad_yaw: pad.value(Axis::Yaw),
            mouse_pitch_delta: km.value_delta(Axis::Pitch),
            mouse_yaw_delta: km.value_delta(Axis::Yaw),
            boost: km.pressed(Button::Boost) || pad.pressed(Button::Boost),
            lmb: km.pressed(Button::Lmb),
            rmb: km.pressed(Button::Rmb),
        }
    }
}

/// Controller state between frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeLookState {
    /// Smoothed translation of the previous frame
    pub velocity: Vec3,
    /// Smoothed pitch delta of the previous frame
    pub pitch_rate: f32,
    /// Smoothed yaw delta of the previous frame
    pub yaw_rate: f32,
    /// Absolute pitch in degrees
    pub pitch: f32,
    /// Absolute yaw in degrees, unbounded
    pub yaw: f32,
}

/// Free-look camera controller bound to one camera and two input contexts
#[derive(Debug, Clone)]
pub struct CameraController<C: CameraTransform> {
    camera: C,
    keyboard_mouse: InputMap,
    pad: InputMap,
    config: ControllerConfig,
    state: FreeLookState,
    invert_y: bool,
}

impl<C: CameraTransform> CameraController<C> {
    /// Bind to a camera and input contexts, then reset to the home view.
    ///
    /// An out-of-range `pitch_limit` is folded into [0, 90]; other fields
    /// are used as given.
    pub fn new(camera: C, keyboard_mouse: InputMap, pad: InputMap, mut config: ControllerConfig) -> Self {
        let pitch_limit = config.clamped_pitch_limit();
        if pitch_limit != config.pitch_limit {
            warn!(
                target: LOG_TARGET,
                "pitch_limit {} out of range, using {}",
                config.pitch_limit,
                pitch_limit
            );
            config.pitch_limit = pitch_limit;
        }
        debug!(
            target: LOG_TARGET,
            "Binding contexts \"{}\" and \"{}\"",
            keyboard_mouse.name(),
            pad.name()
        );
        let invert_y = config.invert_y;
        let mut controller = Self {
            camera,
            keyboard_mouse,
            pad,
            config,
            state: FreeLookState::default(),
            invert_y,
        };
        controller.reset_view();
        controller
    }

    /// Bind with the default keyboard/mouse and gamepad tables
    pub fn with_default_bindings(camera: C, config: ControllerConfig) -> Self {
        Self::new(camera, default_keyboard_mouse_map(), default_pad_map(), config)
    }

    /// Clear smoothing history and return the camera to the home view
    pub fn reset_view(&mut self) {
        let home = self.config.home;
        self.state = FreeLookState {
            velocity: Vec3::ZERO,
            pitch_rate: 0.0,
            yaw_rate: 0.0,
            pitch: home.pitch.clamp(-self.config.pitch_limit, self.config.pitch_limit),
            yaw: home.yaw,
        };

        self.camera
            .set_rotation(quat_from_pitch_yaw_roll(self.state.pitch, self.state.yaw, 0.0));
        self.camera.set_translation(home.translation());

        debug!(
            target: LOG_TARGET,
            "View reset to {:?}, pitch {} yaw {}",
            home.translation,
            self.state.pitch,
            self.state.yaw
        );
    }

    /// Refresh both input contexts from the devices, then advance one frame
    pub fn update(&mut self, devices: &Devices, delta_time: f32) {
        self.keyboard_mouse.update(devices);
        self.pad.update(devices);
        let sample = InputSample::read(&self.keyboard_mouse, &self.pad);
        self.apply(&sample, delta_time);
    }

    /// Advance one frame from an already-read input sample
    pub fn apply(&mut self, input: &InputSample, delta_time: f32) {
        let config = &self.config;
        let scale = config.scale(input.boost);

        let mut translation =
            (input.move_km + input.move_pad) * config.move_speed * scale.translation * delta_time;
        let look = config.look_speed * scale.rotation * delta_time;
        let mut pitch = input.pad_pitch * look;
        let mut yaw = input.pad_yaw * look;

        let smoothing = config.smoothing;
        let state = &mut self.state;
        smoothing.apply(&mut state.velocity.x, &mut translation.x, delta_time);
        smoothing.apply(&mut state.velocity.y, &mut translation.y, delta_time);
        smoothing.apply(&mut state.velocity.z, &mut translation.z, delta_time);
        smoothing.apply(&mut state.pitch_rate, &mut pitch, delta_time);
        smoothing.apply(&mut state.yaw_rate, &mut yaw, delta_time);

        // Mouse look bypasses smoothing
        if input.lmb {
            pitch -= input.mouse_pitch_delta * config.mouse_sensitivity * scale.rotation;
            yaw -= input.mouse_yaw_delta * config.mouse_sensitivity * scale.rotation;
        }

        let sign = if self.invert_y { 1.0 } else { -1.0 };
        state.pitch = (state.pitch + pitch * sign).clamp(-config.pitch_limit, config.pitch_limit);
        state.yaw += yaw;

        self.camera.translate(translation, Space::Local);
        self.camera
            .set_rotation(quat_from_pitch_yaw_roll(state.pitch, state.yaw, 0.0));

        trace!(
            target: LOG_TARGET,
            "dt {:.4} move {:?} pitch {:.2} yaw {:.2}",
            delta_time,
            translation,
            state.pitch,
            state.yaw
        );
    }

    /// Absolute pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.state.pitch
    }

    /// Absolute yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.state.yaw
    }

    pub fn invert_y(&self) -> bool {
        self.invert_y
    }

    pub fn set_invert_y(&mut self, invert: bool) {
        self.invert_y = invert;
    }

    pub fn state(&self) -> &FreeLookState {
        &self.state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn keyboard_mouse(&self) -> &InputMap {
        &self.keyboard_mouse
    }

    pub fn pad(&self) -> &InputMap {
        &self.pad
    }

    /// Release the camera
    pub fn into_camera(self) -> C {
        self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;

    fn controller() -> CameraController<Camera> {
        CameraController::with_default_bindings(Camera::default(), ControllerConfig::default())
    }

    #[test]
    fn test_default_tables_registered() {
        let km = default_keyboard_mouse_map();
        assert_eq!(km.name(), KEYBOARD_MOUSE_CONTEXT);
        assert_eq!(km.float_bindings(Axis::Pitch).len(), 3);
        assert_eq!(km.policy(Axis::Pitch), AxisPolicy::Max);
        assert_eq!(km.policy(Axis::Yaw), AxisPolicy::Max);
        assert_eq!(km.bool_bindings(Button::Boost).len(), 2);

        let pad = default_pad_map();
        assert_eq!(pad.name(), PAD_CONTEXT);
        assert_eq!(pad.float_bindings(Axis::MoveY).len(), 2);
        assert_eq!(pad.bool_bindings(Button::Boost).len(), 2);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut c = controller();
        let before = *c.camera();
        let input = InputSample {
            move_km: Vec3::ONE,
            pad_pitch: 1.0,
            ..Default::default()
        };
        c.apply(&input, 0.0);
        assert_eq!(c.camera().position, before.position);
        assert_eq!(c.pitch(), 0.0);
    }

    #[test]
    fn test_accumulators_hold_last_blend() {
        let mut c = controller();
        let input = InputSample {
            move_km: Vec3::Z,
            ..Default::default()
        };
        let start = c.camera().position;
        c.apply(&input, 1.0 / 60.0);
        let moved = (c.camera().position - start).length();
        assert!((c.state().velocity.z - moved).abs() < 1e-6);
    }
}
