//! Movement domain: speed targets and the per-frame speed transition smoother.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedTarget {
    /// Target implied by the current mode
    pub desired: f32,
    /// Speed the force integrator actually uses
    pub effective: f32,
    /// `desired` as of the end of the previous frame
    pub last_desired: f32,
}

/// An in-flight interpolation of the effective speed toward a new target.
///
/// Starting a run overwrites whatever run was active; there is never more than one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedSmoother {
    pub active: bool,
    pub start_value: f32,
    pub target: f32,
    pub elapsed: f32,
    pub total_difference: f32,
}

impl SpeedSmoother {
    pub fn start(&mut self, from: f32, to: f32) {
        *self = Self {
            active: true,
            start_value: from,
            target: to,
            elapsed: 0.0,
            total_difference: (to - from).abs(),
        };
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_running_toward(&self, target: f32) -> bool {
        self.active && self.target == target
    }

    /// Advance one frame and return the new effective speed, or `None` when idle.
    ///
    /// `slope_angle_deg` is `Some` only while on a slope; steeper slopes finish sooner.
    pub fn tick(
        &mut self,
        dt: f32,
        speed_increase_multiplier: f32,
        slope_increase_multiplier: f32,
        slope_angle_deg: Option<f32>,
    ) -> Option<f32> {
        if !self.active {
            return None;
        }

        let mut advance = dt.max(0.0) * speed_increase_multiplier;
        if let Some(angle) = slope_angle_deg {
            advance *= (1.0 + angle / 90.0) * slope_increase_multiplier;
        }
        self.elapsed += advance;

        if self.elapsed >= self.total_difference {
            self.active = false;
            return Some(self.target);
        }

        let t = (self.elapsed / self.total_difference).clamp(0.0, 1.0);
        Some(self.start_value + (self.target - self.start_value) * t)
    }
}
