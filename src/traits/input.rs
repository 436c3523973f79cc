/// Logical continuous channel read by the camera controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    MoveX,
    MoveY,
    MoveZ,
    Pitch,
    Yaw,
}

impl Axis {
    pub const ALL: [Axis; 5] = [Axis::MoveX, Axis::MoveY, Axis::MoveZ, Axis::Pitch, Axis::Yaw];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Logical digital channel read by the camera controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Boost,
    Lmb,
    Rmb,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Boost, Button::Lmb, Button::Rmb];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Input context - logical axis and button state for the current frame
pub trait InputContext {
    /// Combined value of an axis, nominally in [-1, 1]
    fn value(&self, axis: Axis) -> f32;

    /// Change of `value(axis)` since the previous frame
    fn value_delta(&self, axis: Axis) -> f32;

    /// Check if button is currently down
    fn pressed(&self, button: Button) -> bool;
}
