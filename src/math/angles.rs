use glam::{EulerRot, Quat};

/// Orientation from Euler angles in degrees.
///
/// Roll about Z is applied first, then pitch about X, then yaw about Y.
pub fn quat_from_pitch_yaw_roll(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw.to_radians(),
        pitch.to_radians(),
        roll.to_radians(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_zero_angles_identity() {
        let q = quat_from_pitch_yaw_roll(0.0, 0.0, 0.0);
        assert!(q.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_yaw_turns_forward_toward_x() {
        let q = quat_from_pitch_yaw_roll(0.0, 90.0, 0.0);
        let forward = q * Vec3::Z;
        assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn test_positive_pitch_tilts_forward_down() {
        let q = quat_from_pitch_yaw_roll(90.0, 0.0, 0.0);
        let forward = q * Vec3::Z;
        assert!(forward.abs_diff_eq(Vec3::NEG_Y, 1e-5));
    }

    #[test]
    fn test_pitch_applied_before_yaw() {
        let q = quat_from_pitch_yaw_roll(45.0, 90.0, 0.0);
        let forward = q * Vec3::Z;
        // Pitched down, then turned toward +X: no Z component left
        assert!(forward.z.abs() < 1e-5);
        assert!(forward.x > 0.0);
        assert!(forward.y < 0.0);
    }

    #[test]
    fn test_result_is_normalized() {
        let q = quat_from_pitch_yaw_roll(-33.0, 1234.5, 12.0);
        assert!((q.length() - 1.0).abs() < 1e-5);
    }
}
