use std::time::{Duration, Instant};

use crate::style::Color;

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A single in-flight interpolation between two scalar values.
///
/// Time never comes from the wall clock; callers pass `Instant`s, which is
/// what makes animations testable against a virtual clock.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Eased progress in [0, 1] at the given time.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.easing.apply(t)
    }

    /// Interpolated value at the given time, clamped to the endpoints.
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.progress(now);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Linear interpolation for i16 values.
pub fn lerp_i16(from: i16, to: i16, t: f32) -> i16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i16
}

/// Interpolate colors in OKLCH space.
pub fn lerp_color(from: &Color, to: &Color, t: f32) -> Color {
    let (from_l, from_c, from_h) = color_to_oklch(from);
    let (to_l, to_c, to_h) = color_to_oklch(to);

    // Interpolate L and C linearly
    let l = from_l + (to_l - from_l) * t;
    let c = from_c + (to_c - from_c) * t;

    // Hue interpolation (shortest path around the circle)
    let mut dh = to_h - from_h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }
    let h = (from_h + dh * t).rem_euclid(360.0);

    Color::oklch(l, c, h)
}

/// Extract OKLCH values from a color.
fn color_to_oklch(color: &Color) -> (f32, f32, f32) {
    match color {
        Color::Oklch { l, c, h } => (*l, *c, *h),
        Color::Rgb { r, g, b } => {
            use palette::{IntoColor, Oklch, Srgb};
            let srgb = Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0);
            let oklch: Oklch = srgb.into_color();
            (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
        }
    }
}
