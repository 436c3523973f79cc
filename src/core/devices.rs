//! Raw device state: what the hardware currently reports, before any mapping.
//!
//! Keyboard and mouse are fed by the winit adapter. The pad has no
//! built-in backend; the host writes stick, trigger and button values
//! into [`PadState`] each frame.

use std::collections::HashSet;

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Analog values above this magnitude count as "down" when read as a bool
pub const BOOL_AXIS_THRESHOLD: f32 = 0.5;

/// Mouse axis identifier.
///
/// Reads the absolute cursor position in physical pixels, not a value in
/// [-1, 1]. Consumers use the per-frame delta of these axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAxis {
    X,
    Y,
}

/// Gamepad analog axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadAxis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    /// Left trigger
    Axis4,
    /// Right trigger
    Axis5,
}

impl PadAxis {
    const COUNT: usize = 6;

    const fn index(self) -> usize {
        self as usize
    }
}

/// Gamepad digital button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadButton {
    A,
    B,
    X,
    Y,
    L1,
    R1,
    /// Left stick click
    L3,
    /// Right stick click
    R3,
    Start,
    Select,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
}

impl PadButton {
    pub const ALL: [PadButton; 14] = [
        PadButton::A,
        PadButton::B,
        PadButton::X,
        PadButton::Y,
        PadButton::L1,
        PadButton::R1,
        PadButton::L3,
        PadButton::R3,
        PadButton::Start,
        PadButton::Select,
        PadButton::DpadUp,
        PadButton::DpadDown,
        PadButton::DpadLeft,
        PadButton::DpadRight,
    ];
}

/// Physical control on one of the devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Key(KeyCode),
    MouseButton(MouseButton),
    MouseAxis(MouseAxis),
    PadButton(PadButton),
    PadAxis(PadAxis),
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn set(&mut self, key: KeyCode, down: bool) {
        if down {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Release every key (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct MouseState {
    held: HashSet<MouseButton>,
    /// Cursor position in physical pixels
    position: (f32, f32),
}

impl MouseState {
    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        if down {
            self.held.insert(button);
        } else {
            self.held.remove(&button);
        }
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }

    /// Move the cursor by a relative amount
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position.0 += dx;
        self.position.1 += dy;
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Cursor coordinate in physical pixels
    pub fn axis(&self, axis: MouseAxis) -> f32 {
        match axis {
            MouseAxis::X => self.position.0,
            MouseAxis::Y => self.position.1,
        }
    }

    pub fn clear_buttons(&mut self) {
        self.held.clear();
    }
}

/// One gamepad. A disconnected pad reads neutral.
#[derive(Debug, Clone, Default)]
pub struct PadState {
    connected: bool,
    axes: [f32; PadAxis::COUNT],
    held: HashSet<PadButton>,
}

impl PadState {
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Mark disconnected and drop all reported values
    pub fn disconnect(&mut self) {
        *self = Self::default();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Set an analog axis; values are clamped to [-1, 1]
    pub fn set_axis(&mut self, axis: PadAxis, value: f32) {
        self.axes[axis.index()] = value.clamp(-1.0, 1.0);
    }

    pub fn set_button(&mut self, button: PadButton, down: bool) {
        if down {
            self.held.insert(button);
        } else {
            self.held.remove(&button);
        }
    }

    pub fn axis(&self, axis: PadAxis) -> f32 {
        if self.connected {
            self.axes[axis.index()]
        } else {
            0.0
        }
    }

    pub fn is_down(&self, button: PadButton) -> bool {
        self.connected && self.held.contains(&button)
    }
}

/// Snapshot of every device the controller can read
#[derive(Debug, Clone, Default)]
pub struct Devices {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
    pub pad: PadState,
}

impl Devices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a control as an analog value. Digital controls read 0.0 or 1.0.
    pub fn float(&self, control: Control) -> f32 {
        match control {
            Control::Key(key) => digital(self.keyboard.is_down(key)),
            Control::MouseButton(button) => digital(self.mouse.is_down(button)),
            Control::MouseAxis(axis) => self.mouse.axis(axis),
            Control::PadButton(button) => digital(self.pad.is_down(button)),
            Control::PadAxis(axis) => self.pad.axis(axis),
        }
    }

    /// Read a control as a digital value. Analog controls count as down past
    /// [`BOOL_AXIS_THRESHOLD`].
    pub fn bool(&self, control: Control) -> bool {
        match control {
            Control::Key(key) => self.keyboard.is_down(key),
            Control::MouseButton(button) => self.mouse.is_down(button),
            Control::PadButton(button) => self.pad.is_down(button),
            Control::MouseAxis(_) | Control::PadAxis(_) => {
                self.float(control).abs() > BOOL_AXIS_THRESHOLD
            }
        }
    }
}

fn digital(down: bool) -> f32 {
    if down {
        1.0
    } else {
        0.0
    }
}
