//! Gamepad backend: polls gilrs and writes the first connected pad into
//! [`PadState`].

use anyhow::{anyhow, Result};
use gilrs::{Event, EventType, Gamepad, GamepadId, Gilrs};
use log::info;

use super::devices::{PadAxis, PadButton, PadState};

const LOG_TARGET: &str = "freelook::gamepad";

const BUTTONS: [(gilrs::Button, PadButton); 14] = [
    (gilrs::Button::South, PadButton::A),
    (gilrs::Button::East, PadButton::B),
    (gilrs::Button::West, PadButton::X),
    (gilrs::Button::North, PadButton::Y),
    (gilrs::Button::LeftTrigger, PadButton::L1),
    (gilrs::Button::RightTrigger, PadButton::R1),
    (gilrs::Button::LeftThumb, PadButton::L3),
    (gilrs::Button::RightThumb, PadButton::R3),
    (gilrs::Button::Start, PadButton::Start),
    (gilrs::Button::Select, PadButton::Select),
    (gilrs::Button::DPadUp, PadButton::DpadUp),
    (gilrs::Button::DPadDown, PadButton::DpadDown),
    (gilrs::Button::DPadLeft, PadButton::DpadLeft),
    (gilrs::Button::DPadRight, PadButton::DpadRight),
];

/// One frame of gamepad state, independent of the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PadReading {
    /// Sticks in [-1, 1], +Y up
    pub left_stick: (f32, f32),
    pub right_stick: (f32, f32),
    /// Analog triggers in [0, 1]
    pub left_trigger: f32,
    pub right_trigger: f32,
    pub held: Vec<PadButton>,
}

impl PadReading {
    /// Mark the pad connected and overwrite every axis and button
    pub fn apply_to(&self, pad: &mut PadState) {
        pad.connect();
        pad.set_axis(PadAxis::LeftStickX, self.left_stick.0);
        pad.set_axis(PadAxis::LeftStickY, self.left_stick.1);
        pad.set_axis(PadAxis::RightStickX, self.right_stick.0);
        pad.set_axis(PadAxis::RightStickY, self.right_stick.1);
        pad.set_axis(PadAxis::Axis4, self.left_trigger);
        pad.set_axis(PadAxis::Axis5, self.right_trigger);
        for button in PadButton::ALL {
            pad.set_button(button, self.held.contains(&button));
        }
    }

    fn from_gamepad(gamepad: &Gamepad<'_>) -> Self {
        let trigger = |button| gamepad.button_data(button).map_or(0.0, |data| data.value());
        Self {
            left_stick: (
                gamepad.value(gilrs::Axis::LeftStickX),
                gamepad.value(gilrs::Axis::LeftStickY),
            ),
            right_stick: (
                gamepad.value(gilrs::Axis::RightStickX),
                gamepad.value(gilrs::Axis::RightStickY),
            ),
            left_trigger: trigger(gilrs::Button::LeftTrigger2),
            right_trigger: trigger(gilrs::Button::RightTrigger2),
            held: BUTTONS
                .iter()
                .filter(|(from, _)| gamepad.is_pressed(*from))
                .map(|(_, to)| *to)
                .collect(),
        }
    }
}

/// Tracks the active gamepad and feeds it into [`PadState`] each frame
pub struct GamepadInput {
    gilrs: Gilrs,
    active: Option<GamepadId>,
}

impl GamepadInput {
    pub fn new() -> Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow!("Failed to initialize gamepad backend: {}", e))?;
        let active = gilrs.gamepads().next().map(|(id, gamepad)| {
            info!(target: LOG_TARGET, "Using gamepad \"{}\"", gamepad.name());
            id
        });
        Ok(Self { gilrs, active })
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Drain backend events and refresh `pad` from the active gamepad.
    /// Disconnects `pad` when no gamepad is available.
    pub fn poll(&mut self, pad: &mut PadState) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected if self.active.is_none() => {
                    info!(target: LOG_TARGET, "Gamepad connected: \"{}\"", self.gilrs.gamepad(id).name());
                    self.active = Some(id);
                }
                EventType::Disconnected if self.active == Some(id) => {
                    info!(target: LOG_TARGET, "Gamepad disconnected");
                    self.active = None;
                }
                _ => {}
            }
        }

        if self.active.is_none() {
            self.active = self.gilrs.gamepads().next().map(|(id, _)| id);
        }

        match self.active.and_then(|id| self.gilrs.connected_gamepad(id)) {
            Some(gamepad) => PadReading::from_gamepad(&gamepad).apply_to(pad),
            None if pad.is_connected() => pad.disconnect(),
            None => {}
        }
    }
}
