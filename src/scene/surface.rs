use eframe::egui::{Color32, Pos2};

/// The 2D drawing target a scene renders into. Coordinates are relative to
/// the surface's top-left corner.
pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Pos2, radius: f32, fill: Color32);
    fn stroke_line(&mut self, from: Pos2, to: Pos2, stroke: Color32);
}

pub fn white(alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}
