use glam::{Quat, Vec3};

/// Reference frame for incremental translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Space {
    /// Delta is rotated by the camera's orientation first
    #[default]
    Local,
    /// Delta is applied as-is
    World,
}

/// Camera transform driven by a controller
pub trait CameraTransform {
    /// Absolute position in world space
    fn translation(&self) -> Vec3;

    fn set_translation(&mut self, translation: Vec3);

    /// Absolute orientation (unit quaternion)
    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Move the camera by `delta` expressed in `space`
    fn translate(&mut self, delta: Vec3, space: Space) {
        let offset = match space {
            Space::Local => self.rotation() * delta,
            Space::World => delta,
        };
        self.set_translation(self.translation() + offset);
    }
}
