use eframe::egui::{Pos2, Vec2, vec2};
use rand::Rng;

use crate::util::unit;

const DRIFT_BACK: f32 = 50.0;
const DRIFT_SPAN: f32 = 300.0;
const BASE_DURATION_SECS: f32 = 20.0;
const DURATION_JITTER_SECS: f32 = 1.0;

/// Quadratic ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Endless yoyo interpolation between `from` and `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: Pos2,
    to: Pos2,
    duration_secs: f32,
    elapsed_secs: f32,
    paused: bool,
}

impl Tween {
    pub fn new(from: Pos2, to: Pos2, duration_secs: f32) -> Self {
        Self {
            from,
            to,
            duration_secs: duration_secs.max(f32::EPSILON),
            elapsed_secs: 0.0,
            paused: false,
        }
    }

    /// Drift from `origin` towards a random target in a 300x300 box that
    /// starts 50 units up and left of the origin.
    pub fn drift<R: Rng + ?Sized>(origin: Pos2, rng: &mut R) -> Self {
        let offset = vec2(
            -DRIFT_BACK + unit(rng) * DRIFT_SPAN,
            -DRIFT_BACK + unit(rng) * DRIFT_SPAN,
        );
        let duration = BASE_DURATION_SECS + unit(rng) * DURATION_JITTER_SECS;
        Self::new(origin, origin + offset, duration)
    }

    #[cfg(test)]
    pub fn target(&self) -> Pos2 {
        self.to
    }

    #[cfg(test)]
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn advance(&mut self, delta_secs: f32) {
        if self.paused || delta_secs <= 0.0 {
            return;
        }

        // Wrap on a full forward+reverse cycle so precision holds over long runs.
        let cycle = self.duration_secs * 2.0;
        self.elapsed_secs = (self.elapsed_secs + delta_secs) % cycle;
    }

    pub fn progress(&self) -> f32 {
        let phase = self.elapsed_secs / self.duration_secs;
        let local = phase.fract();
        if (phase as u64) % 2 == 0 { local } else { 1.0 - local }
    }

    pub fn value(&self) -> Pos2 {
        let span: Vec2 = self.to - self.from;
        self.from + span * ease_in_out(self.progress())
    }
}
