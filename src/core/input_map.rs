//! Mapping from physical controls to the logical channels a consumer reads.
//!
//! An [`InputMap`] is an enum-keyed table: every [`Axis`] owns a list of
//! float bindings and a combination policy, every [`Button`] owns a list of
//! controls. Values are recomputed once per frame by [`InputMap::update`],
//! which also keeps the previous frame's values for deltas.

use crate::traits::{Axis, Button, InputContext};

use super::devices::{Control, Devices};

const AXIS_COUNT: usize = Axis::ALL.len();
const BUTTON_COUNT: usize = Button::ALL.len();

/// How several bindings on the same axis combine into one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisPolicy {
    /// First non-zero binding in registration order
    #[default]
    FirstDown,
    /// Largest magnitude wins
    Max,
    /// Smallest non-zero magnitude wins
    Min,
    /// Mean of the non-zero bindings
    Average,
    /// Sum of all bindings, clamped to [-1, 1]
    Sum,
}

impl AxisPolicy {
    fn combine(self, mut values: impl Iterator<Item = f32>) -> f32 {
        match self {
            AxisPolicy::FirstDown => values.find(|v| *v != 0.0).unwrap_or(0.0),
            AxisPolicy::Max => values.fold(0.0_f32, |best, v| if v.abs() > best.abs() { v } else { best }),
            AxisPolicy::Min => values
                .filter(|v| *v != 0.0)
                .fold(None, |best: Option<f32>, v| match best {
                    Some(b) if b.abs() <= v.abs() => Some(b),
                    _ => Some(v),
                })
                .unwrap_or(0.0),
            AxisPolicy::Average => {
                let (sum, count) = values
                    .filter(|v| *v != 0.0)
                    .fold((0.0_f32, 0u32), |(sum, count), v| (sum + v, count + 1));
                if count == 0 {
                    0.0
                } else {
                    sum / count as f32
                }
            }
            AxisPolicy::Sum => values.sum::<f32>().clamp(-1.0, 1.0),
        }
    }
}

/// One control feeding an axis. The raw reading `r` maps to `min + r * (max - min)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatBinding {
    pub control: Control,
    pub min: f32,
    pub max: f32,
}

impl FloatBinding {
    pub fn read(&self, devices: &Devices) -> f32 {
        self.min + devices.float(self.control) * (self.max - self.min)
    }
}

/// Named input context: a mapping table plus the values of the last update
#[derive(Debug, Clone)]
pub struct InputMap {
    name: String,
    floats: [Vec<FloatBinding>; AXIS_COUNT],
    policies: [AxisPolicy; AXIS_COUNT],
    bools: [Vec<Control>; BUTTON_COUNT],
    values: [f32; AXIS_COUNT],
    previous: [f32; AXIS_COUNT],
    pressed: [bool; BUTTON_COUNT],
    primed: bool,
}

impl InputMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            floats: Default::default(),
            policies: [AxisPolicy::default(); AXIS_COUNT],
            bools: Default::default(),
            values: [0.0; AXIS_COUNT],
            previous: [0.0; AXIS_COUNT],
            pressed: [false; BUTTON_COUNT],
            primed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map a control onto an axis with the default range (0, 1)
    pub fn map_float(&mut self, axis: Axis, control: Control) -> &mut Self {
        self.map_float_range(axis, control, 0.0, 1.0)
    }

    /// Map a control onto an axis, scaling its reading into `min..max`
    pub fn map_float_range(&mut self, axis: Axis, control: Control, min: f32, max: f32) -> &mut Self {
        self.floats[axis.index()].push(FloatBinding { control, min, max });
        self
    }

    /// Map a control onto a button. Any mapped control held means pressed.
    pub fn map_bool(&mut self, button: Button, control: Control) -> &mut Self {
        self.bools[button.index()].push(control);
        self
    }

    pub fn set_policy(&mut self, axis: Axis, policy: AxisPolicy) -> &mut Self {
        self.policies[axis.index()] = policy;
        self
    }

    pub fn policy(&self, axis: Axis) -> AxisPolicy {
        self.policies[axis.index()]
    }

    pub fn float_bindings(&self, axis: Axis) -> &[FloatBinding] {
        &self.floats[axis.index()]
    }

    pub fn bool_bindings(&self, button: Button) -> &[Control] {
        &self.bools[button.index()]
    }

    /// Drop every binding of an axis
    pub fn unmap_axis(&mut self, axis: Axis) {
        self.floats[axis.index()].clear();
    }

    pub fn unmap_button(&mut self, button: Button) {
        self.bools[button.index()].clear();
    }

    /// Recompute every channel from the devices. Call once per frame.
    pub fn update(&mut self, devices: &Devices) {
        let mut values = [0.0; AXIS_COUNT];
        for axis in Axis::ALL {
            let i = axis.index();
            let readings = self.floats[i].iter().map(|b| b.read(devices));
            values[i] = self.policies[i].combine(readings);
        }

        self.previous = if self.primed { self.values } else { values };
        self.values = values;
        self.primed = true;

        for button in Button::ALL {
            let i = button.index();
            self.pressed[i] = self.bools[i].iter().any(|c| devices.bool(*c));
        }
    }

    /// Forget the previous frame so the next update reports zero deltas
    pub fn clear_history(&mut self) {
        self.primed = false;
    }
}

impl InputContext for InputMap {
    fn value(&self, axis: Axis) -> f32 {
        self.values[axis.index()]
    }

    fn value_delta(&self, axis: Axis) -> f32 {
        self.values[axis.index()] - self.previous[axis.index()]
    }

    fn pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }
}
