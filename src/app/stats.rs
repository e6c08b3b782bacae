use std::collections::VecDeque;

use crate::util::format_frame_time;

const FPS_SAMPLE_WINDOW: usize = 180;

#[derive(Default)]
pub(super) struct FrameStats {
    current: f32,
    samples: VecDeque<f32>,
}

impl FrameStats {
    pub(super) fn record(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }

        self.current = (1.0 / dt).clamp(0.0, 1000.0);
        self.samples.push_back(self.current);
        while self.samples.len() > FPS_SAMPLE_WINDOW {
            self.samples.pop_front();
        }
    }

    pub(super) fn display_text(&self, frames: u64) -> Option<String> {
        if self.samples.is_empty() {
            return None;
        }

        let avg = self.samples.iter().sum::<f32>() / self.samples.len() as f32;
        let mut parts = vec![format!("FPS {:.0}", self.current), format!("avg {avg:.1}")];
        parts.extend(format_frame_time(self.current));
        parts.push(format!("frame {frames}"));
        Some(parts.join(" | "))
    }
}
