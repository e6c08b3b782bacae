use eframe::egui::Pos2;
use rand::Rng;

/// Uniform sample in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}

pub fn distance_sq(a: Pos2, b: Pos2) -> f32 {
    (a - b).length_sq()
}

pub fn format_frame_time(fps: f32) -> Option<String> {
    (fps > f32::EPSILON).then(|| format!("{:.1} ms", 1000.0 / fps))
}
