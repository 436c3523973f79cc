use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::devices::Devices;

/// Adapter that bridges Winit window events to raw device state
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    devices: Devices,
}

impl WinitInput {
    /// Create an adapter with nothing held and the cursor at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update device state.
    /// Returns true if the event carried input.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key(code, event.state);
                }
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }

    pub fn key(&mut self, code: KeyCode, state: ElementState) {
        self.devices.keyboard.set(code, state.is_pressed());
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.devices.mouse.set_button(button, state.is_pressed());
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.devices.mouse.set_position(x, y);
    }

    /// Release held keys and buttons; the window lost focus and will not
    /// report their release.
    pub fn release_all(&mut self) {
        self.devices.keyboard.clear();
        self.devices.mouse.clear_buttons();
    }

    pub fn devices(&self) -> &Devices {
        &self.devices
    }

    /// Mutable access, e.g. for a host that polls a gamepad
    pub fn devices_mut(&mut self) -> &mut Devices {
        &mut self.devices
    }
}
