use eframe::egui::Pos2;

use super::surface::{Surface, white};

pub const CONTENT_RADIUS: f32 = 7.0;
pub const CONTENT_OPACITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f32,
    /// Fill opacity; the circle is skipped entirely while this is zero.
    pub active: f32,
}

impl Circle {
    pub fn new(radius: f32, active: f32) -> Self {
        Self { radius, active }
    }

    pub fn is_active(&self) -> bool {
        self.active > 0.0
    }

    pub fn escalate(&mut self) {
        self.radius = CONTENT_RADIUS;
        self.active = CONTENT_OPACITY;
    }

    pub fn draw(&self, surface: &mut dyn Surface, center: Pos2) {
        if !self.is_active() {
            return;
        }

        surface.fill_circle(center, self.radius, white(self.active));
    }
}
