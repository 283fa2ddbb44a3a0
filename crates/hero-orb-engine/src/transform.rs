//! Rotation and perspective projection of particle positions.

use glam::DVec3;
use hero_orb_core::{OrbSettings, Viewport};

/// Yaw and pitch angles for one frame, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub yaw: f64,
    pub pitch: f64,
}

impl Rotation {
    /// Continuous yaw plus an oscillating pitch at clock value `time`.
    pub fn at(time: f64, settings: &OrbSettings) -> Self {
        Self {
            yaw: time * settings.yaw_factor,
            pitch: (time * settings.tilt_frequency).sin() * settings.tilt_amplitude,
        }
    }

    /// Yaw first, then pitch.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        rotate_x(rotate_y(point, self.yaw), self.pitch)
    }
}

/// Rotate about the vertical axis.
pub fn rotate_y(point: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(
        point.x * cos - point.z * sin,
        point.y,
        point.x * sin + point.z * cos,
    )
}

/// Rotate about the horizontal axis.
pub fn rotate_x(point: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(
        point.x,
        point.y * cos - point.z * sin,
        point.y * sin + point.z * cos,
    )
}

/// A point mapped into layout-pixel screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Depth factor; larger means closer to the camera.
    pub scale: f64,
}

/// Perspective-project a rotated point onto the viewport.
///
/// Requires `perspective > point.z`, which holds for every point on the
/// sphere as long as `perspective > radius`.
pub fn project(
    point: DVec3,
    perspective: f64,
    projection_scale: f64,
    viewport: &Viewport,
) -> Projected {
    let depth = perspective / (perspective - point.z);
    let (cx, cy) = viewport.center();
    Projected {
        x: point.x * depth * viewport.width * projection_scale + cx,
        y: point.y * depth * viewport.height * projection_scale + cy,
        scale: depth,
    }
}

/// Rotate and project a base position in one step.
pub fn transform(
    base: DVec3,
    rotation: &Rotation,
    settings: &OrbSettings,
    viewport: &Viewport,
) -> Projected {
    project(
        rotation.apply(base),
        settings.perspective,
        settings.projection_scale,
        viewport,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn test_quarter_turns() {
        let x = DVec3::X;
        assert!(close(rotate_y(x, FRAC_PI_2), DVec3::Z));
        assert!(close(rotate_x(DVec3::Y, FRAC_PI_2), DVec3::Z));
    }

    #[test]
    fn test_yaw_is_applied_before_pitch() {
        let rotation = Rotation {
            yaw: FRAC_PI_2,
            pitch: FRAC_PI_2,
        };
        // X --yaw--> Z --pitch--> -Y
        assert!(close(rotation.apply(DVec3::X), DVec3::NEG_Y));
        // Pitch first would have left X untouched and then yawed it to Z.
        assert!(!close(rotation.apply(DVec3::X), DVec3::Z));
    }

    #[test]
    fn test_rotation_at_time_zero_is_identity() {
        let rotation = Rotation::at(0.0, &OrbSettings::default());
        assert_eq!(rotation.yaw, 0.0);
        assert_eq!(rotation.pitch, 0.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let viewport = Viewport::new(400.0, 300.0, 1.0);
        let projected = project(DVec3::ZERO, 3.5, 0.294, &viewport);
        assert_eq!(projected.x, 200.0);
        assert_eq!(projected.y, 150.0);
        assert_eq!(projected.scale, 1.0);
    }

    #[test]
    fn test_projection_on_empty_viewport_is_finite() {
        let projected = project(DVec3::new(1.0, 1.0, 1.0), 3.5, 0.294, &Viewport::default());
        assert!(projected.x.is_finite() && projected.y.is_finite());
    }

    proptest! {
        #[test]
        fn prop_rotation_preserves_norm(
            x in -10.0f64..10.0,
            y in -10.0f64..10.0,
            z in -10.0f64..10.0,
            yaw in -20.0f64..20.0,
            pitch in -20.0f64..20.0,
        ) {
            let point = DVec3::new(x, y, z);
            let rotated = Rotation { yaw, pitch }.apply(point);
            prop_assert!((rotated.length() - point.length()).abs() < 1e-9);
        }

        #[test]
        fn prop_closer_points_project_larger(
            x in -1.5f64..1.5,
            y in -1.5f64..1.5,
            z1 in -1.52f64..1.52,
            gap in 1e-3f64..1.0,
        ) {
            let z2 = (z1 + gap).min(1.52);
            prop_assume!(z2 > z1);
            let viewport = Viewport::new(400.0, 400.0, 1.0);
            let far = project(DVec3::new(x, y, z1), 3.5, 0.294, &viewport);
            let near = project(DVec3::new(x, y, z2), 3.5, 0.294, &viewport);
            prop_assert!(near.scale > far.scale);
        }
    }
}
