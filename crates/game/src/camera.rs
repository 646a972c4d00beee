//! Chase camera trailing the aircraft.

use engine_core::Orientation;
use glam::{Mat4, Vec3};

/// Camera placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    /// Right-handed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Sits `distance` behind the aircraft along its yaw and `height` above it,
/// looking at the aircraft. Pitch and roll do not move the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseCamera {
    pub distance: f32,
    pub height: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            distance: 10.0,
            height: 1.5,
        }
    }
}

impl ChaseCamera {
    pub fn new(distance: f32, height: f32) -> Self {
        Self { distance, height }
    }

    pub fn pose(&self, position: Vec3, orientation: &Orientation) -> CameraPose {
        // Same yaw convention as the thrust heading, flattened to the ground plane.
        let yaw_only = Orientation::new(0.0, orientation.yaw, 0.0).heading();
        let eye = position - yaw_only * self.distance + Vec3::Y * self.height;
        CameraPose {
            eye,
            target: position,
            up: Vec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_sits_behind_level_aircraft() {
        let cam = ChaseCamera::default();
        let pose = cam.pose(Vec3::new(0.0, 10.0, 0.0), &Orientation::default());
        assert!((pose.eye - Vec3::new(0.0, 11.5, -10.0)).length() < 1e-5);
        assert_eq!(pose.target, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn camera_follows_yaw_not_pitch() {
        let cam = ChaseCamera::new(10.0, 0.0);
        let p = Vec3::ZERO;
        let pose = cam.pose(p, &Orientation::new(45.0, 90.0, 30.0));
        assert!((pose.eye - Vec3::new(-10.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn camera_stays_behind_thrust_heading() {
        let cam = ChaseCamera::default();
        let o = Orientation::new(0.0, -135.0, 0.0);
        let pose = cam.pose(Vec3::ZERO, &o);
        let to_target = (pose.target - pose.eye).normalize();
        let flat = Vec3::new(to_target.x, 0.0, to_target.z).normalize();
        assert!((flat - o.heading()).length() < 1e-4);
    }

    #[test]
    fn view_matrix_maps_target_in_front() {
        let cam = ChaseCamera::default();
        let pose = cam.pose(Vec3::new(5.0, 20.0, 5.0), &Orientation::default());
        let view = pose.view_matrix();
        let in_view = view.transform_point3(pose.target);
        // Right-handed view space looks down -Z.
        assert!(in_view.z < 0.0);
        assert!(in_view.x.abs() < 1e-4);
    }
}
