use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::scene::Surface;

use super::render_utils::{BACKGROUND, canvas_to_screen};

const LINE_WIDTH: f32 = 1.0;

/// Paints scene calls into an egui canvas rect.
pub(super) struct PainterSurface {
    painter: Painter,
    rect: Rect,
}

impl PainterSurface {
    pub(super) fn new(painter: Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }
}

impl Surface for PainterSurface {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, BACKGROUND);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, fill: Color32) {
        self.painter
            .circle_filled(canvas_to_screen(self.rect, center), radius, fill);
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, stroke: Color32) {
        self.painter.line_segment(
            [
                canvas_to_screen(self.rect, from),
                canvas_to_screen(self.rect, to),
            ],
            Stroke::new(LINE_WIDTH, stroke),
        );
    }
}
