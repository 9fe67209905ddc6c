//! Movement domain: ground and slope classification from a downward probe.

use bevy::prelude::*;

/// Result of the downward ground ray, as reported by the physics host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub distance: f32,
    pub normal: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundState {
    pub grounded: bool,
    pub on_slope: bool,
    pub slope_normal: Vec3,
    pub slope_angle_deg: f32,
}

impl Default for GroundState {
    fn default() -> Self {
        Self {
            grounded: false,
            on_slope: false,
            slope_normal: Vec3::Y,
            slope_angle_deg: 0.0,
        }
    }
}

impl GroundState {
    /// Classify a probe result. Misses and hits beyond the probe distance are
    /// airborne, with slope data reset so nothing stale can leak through.
    pub fn from_probe(hit: Option<GroundHit>, probe_distance: f32, max_slope_angle: f32) -> Self {
        let Some(hit) = hit.filter(|h| h.distance <= probe_distance) else {
            return Self::default();
        };

        let normal = hit.normal.normalize_or(Vec3::Y);
        let angle = slope_angle_deg(normal);
        let on_slope = is_slope_angle(angle, max_slope_angle);

        Self {
            grounded: true,
            on_slope,
            slope_normal: normal,
            slope_angle_deg: angle,
        }
    }

    /// Project `direction` onto the current slope plane and normalize. Off a
    /// slope this is just the normalized direction. Zero in, zero out.
    pub fn slope_move_direction(&self, direction: Vec3) -> Vec3 {
        if !self.on_slope {
            return direction.normalize_or_zero();
        }
        project_on_plane(direction, self.slope_normal).normalize_or_zero()
    }
}

/// Angle in degrees between world up and `normal`.
pub fn slope_angle_deg(normal: Vec3) -> f32 {
    let cos = normal.normalize_or(Vec3::Y).dot(Vec3::Y).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Flat ground (exactly 0) is not a slope, and neither is anything at or past the limit.
pub fn is_slope_angle(angle_deg: f32, max_slope_angle: f32) -> bool {
    angle_deg > 0.0 && angle_deg < max_slope_angle
}

pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}

/// Ray origin at the body's feet: half the standing height, scaled by the current Y scale.
pub fn feet_origin(position: Vec3, half_height: f32, y_scale: f32) -> Vec3 {
    position - Vec3::Y * (half_height * y_scale)
}
