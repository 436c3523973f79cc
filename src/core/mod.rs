pub mod clock;
pub mod devices;
pub mod gamepad;
pub mod input_adapter;
pub mod input_map;

pub use clock::{FpsCounter, FrameClock, FrameUpdate};
pub use devices::{Control, Devices, MouseAxis, PadAxis, PadButton};
pub use gamepad::{GamepadInput, PadReading};
pub use input_adapter::WinitInput;
pub use input_map::{AxisPolicy, FloatBinding, InputMap};
