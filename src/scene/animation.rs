use rand::Rng;
use tracing::debug;

use super::{Scene, Surface};

/// Start/stop control over the per-frame advance-and-draw cycle.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    running: bool,
    frames: u64,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting creates the scene's tweens on first use; restarting after a
    /// stop continues the existing ones.
    pub fn start<R: Rng + ?Sized>(&mut self, scene: &mut Scene, rng: &mut R) {
        scene.ensure_tweens(rng);
        if !self.running {
            debug!(frames = self.frames, "animation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!(frames = self.frames, "animation stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances every tween by `delta_secs` and redraws. Returns `false`
    /// without touching the surface while stopped.
    pub fn tick(&mut self, scene: &mut Scene, surface: &mut dyn Surface, delta_secs: f32) -> bool {
        if !self.running {
            return false;
        }

        scene.advance(delta_secs);
        scene.draw_frame(surface);
        self.frames += 1;
        true
    }
}
