//! Components used by the world module.
use bevy::prelude::*;

/// Marker component for the primary camera, orbiting a fixed target.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl OrbitCamera {
    /// Creates an orbit state whose yaw/pitch/radius reproduce `position`
    /// relative to `target`.
    pub fn looking_from(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(f32::EPSILON);
        let (yaw, pitch) = yaw_pitch_for_offset(offset, radius);
        Self {
            target,
            radius,
            yaw,
            pitch,
            rotate_sensitivity: 0.2,
            zoom_sensitivity: 2.0,
        }
    }

    /// Camera position implied by the current orbit state.
    pub fn position(&self) -> Vec3 {
        let rotation =
            Quat::from_axis_angle(Vec3::Y, self.yaw) * Quat::from_axis_angle(Vec3::X, self.pitch);
        self.target + rotation * Vec3::new(0.0, 0.0, self.radius)
    }
}

fn yaw_pitch_for_offset(offset: Vec3, radius: f32) -> (f32, f32) {
    let yaw = offset.x.atan2(offset.z);
    let pitch = -(offset.y / radius).clamp(-1.0, 1.0).asin();
    (yaw, pitch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_state_reproduces_start_position() {
        let position = Vec3::new(0.0, 25.0, 72.0);
        let target = Vec3::new(0.0, 15.0, 0.0);
        let camera = OrbitCamera::looking_from(position, target);

        let reconstructed = camera.position();
        assert!((reconstructed - position).length() < 1e-3);
    }

    #[test]
    fn orbit_radius_matches_distance_to_target() {
        let camera = OrbitCamera::looking_from(Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO);
        assert!((camera.radius - 5.0).abs() < 1e-5);
    }
}
