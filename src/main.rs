use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use freelook::cli::{Cli, CONTROLS_HELP};
use freelook::core::{FpsCounter, FrameClock, GamepadInput, WinitInput};
use freelook::{Camera, CameraController, ControllerConfig};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
// Frames longer than this (window drag, breakpoint) are clamped
const MAX_FRAME_TIME: f32 = 0.25;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    input: WinitInput,
    gamepad: Option<GamepadInput>,
    controller: CameraController<Camera>,
    clock: FrameClock,
    fps: FpsCounter,
}

impl App {
    fn new(config: ControllerConfig, gamepad: Option<GamepadInput>, log_interval: f32) -> Self {
        Self {
            window: None,
            input: WinitInput::new(),
            gamepad,
            controller: CameraController::with_default_bindings(Camera::default(), config),
            clock: FrameClock::new(),
            fps: FpsCounter::new(log_interval),
        }
    }

    fn update(&mut self) {
        let frame = self.clock.tick();
        let delta = frame.delta_time.min(MAX_FRAME_TIME);

        if let Some(gamepad) = &mut self.gamepad {
            gamepad.poll(&mut self.input.devices_mut().pad);
        }
        self.controller.update(self.input.devices(), delta);

        if let Some(fps) = self.fps.tick(delta) {
            let camera = self.controller.camera();
            info!(
                "FPS: {:.1} position {:.2} pitch {:.1} yaw {:.1}",
                fps,
                camera.position,
                self.controller.pitch(),
                self.controller.yaw()
            );
            let uniform = camera.to_uniform();
            debug!(
                "View uniform ({} bytes): view {:?} forward {:?}",
                bytemuck::bytes_of(&uniform).len(),
                uniform.view,
                uniform.forward
            );
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "Free Look - {:.0} fps - pitch {:.0} yaw {:.0}",
                    fps,
                    self.controller.pitch(),
                    self.controller.yaw()
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Free Look")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Home),
                        repeat: false,
                        ..
                    },
                ..
            } => self.controller.reset_view(),
            WindowEvent::RedrawRequested => self.update(),
            WindowEvent::Focused(false) => {
                warn!("Focus lost, releasing held input");
                self.input.process_event(&event);
            }
            other => {
                self.input.process_event(&other);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };
    if cli.no_invert_y {
        config.invert_y = false;
    }

    let gamepad = match GamepadInput::new() {
        Ok(gamepad) => {
            if !gamepad.is_active() {
                info!("No gamepad connected yet");
            }
            Some(gamepad)
        }
        Err(e) => {
            warn!("Gamepad input disabled: {:#}", e);
            None
        }
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, gamepad, cli.log_interval);

    info!("Free Look - {}", CONTROLS_HELP);
    event_loop.run_app(&mut app)?;

    Ok(())
}
