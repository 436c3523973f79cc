use glam::{Mat4, Quat, Vec3};

use crate::traits::CameraTransform;
use crate::types::CameraUniform;

/// Camera transform: absolute position and orientation.
///
/// Local frame is +X right, +Y up, +Z forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Camera {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// World-to-view transform (inverse of the camera's world transform)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: self.forward().to_array(),
            _pad2: 0.0,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

impl CameraTransform for Camera {
    fn translation(&self) -> Vec3 {
        self.position
    }

    fn set_translation(&mut self, translation: Vec3) {
        self.position = translation;
    }

    fn rotation(&self) -> Quat {
        self.orientation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.orientation = rotation.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Space;

    #[test]
    fn test_default_camera_axes() {
        let camera = Camera::default();
        assert_eq!(camera.forward(), Vec3::Z);
        assert_eq!(camera.right(), Vec3::X);
        assert_eq!(camera.up(), Vec3::Y);
    }

    #[test]
    fn test_local_translate_follows_orientation() {
        let mut camera = Camera::new(Vec3::ZERO, Quat::from_rotation_y(90f32.to_radians()));
        camera.translate(Vec3::Z, Space::Local);
        assert!(camera.position.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn test_world_translate_ignores_orientation() {
        let mut camera = Camera::new(Vec3::ONE, Quat::from_rotation_y(90f32.to_radians()));
        camera.translate(Vec3::Z, Space::World);
        assert!(camera.position.abs_diff_eq(Vec3::new(1.0, 1.0, 2.0), 1e-6));
    }

    #[test]
    fn test_view_matrix_maps_position_to_origin() {
        let camera = Camera::new(
            Vec3::new(3.0, -2.0, 7.0),
            Quat::from_rotation_x(0.4) * Quat::from_rotation_y(1.1),
        );
        let p = camera.view_matrix().transform_point3(camera.position);
        assert!(p.abs_diff_eq(Vec3::ZERO, 1e-5));

        let ahead = camera.view_matrix().transform_point3(camera.position + camera.forward());
        assert!(ahead.abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn test_set_rotation_normalizes() {
        let mut camera = Camera::default();
        camera.set_rotation(Quat::from_xyzw(0.0, 2.0, 0.0, 0.0));
        assert!((camera.rotation().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_uniform() {
        let camera = Camera::new(Vec3::new(0.0, 1.5, 0.25), Quat::IDENTITY);
        let uniform = camera.to_uniform();
        assert_eq!(uniform.position, [0.0, 1.5, 0.25]);
        assert_eq!(uniform.forward, [0.0, 0.0, 1.0]);
        assert_eq!(uniform.view[3][1], -1.5);
    }
}
