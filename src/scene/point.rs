use eframe::egui::{Pos2, Vec2, vec2};

use super::circle::Circle;
use super::surface::{Surface, white};

pub const LINE_OPACITY: f32 = 0.1;
pub const CIRCLE_OPACITY: f32 = 0.3;

const TOOLTIP_CHAR_WIDTH: f32 = 7.0;
const TOOLTIP_PADDING: f32 = 16.0;
const TOOLTIP_HEIGHT: f32 = 22.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Last measured on-screen size; an estimate until the overlay host reports one.
    pub size: Vec2,
    pub anchor: Pos2,
}

impl Tooltip {
    pub fn new(text: String, anchor: Pos2) -> Self {
        let size = vec2(
            text.chars().count() as f32 * TOOLTIP_CHAR_WIDTH + TOOLTIP_PADDING,
            TOOLTIP_HEIGHT,
        );
        Self { text, size, anchor }
    }
}

#[derive(Clone, Debug)]
pub struct Point {
    pub position: Pos2,
    pub origin: Pos2,
    pub closest: Vec<usize>,
    /// Stroke opacity of the neighbor lines; zero hides them.
    pub active: f32,
    pub circle: Circle,
    pub tooltip: Option<Tooltip>,
    pub content: Option<usize>,
    pub is_paused: bool,
}

impl Point {
    pub fn new(origin: Pos2, closest: Vec<usize>, radius: f32) -> Self {
        Self {
            position: origin,
            origin,
            closest,
            active: LINE_OPACITY,
            circle: Circle::new(radius, CIRCLE_OPACITY),
            tooltip: None,
            content: None,
            is_paused: false,
        }
    }

    pub(super) fn draw_lines(&self, points: &[Point], surface: &mut dyn Surface) {
        if self.active <= 0.0 {
            return;
        }

        let stroke = white(self.active);
        for neighbor in self.closest.iter().filter_map(|&index| points.get(index)) {
            surface.stroke_line(self.position, neighbor.position, stroke);
        }
    }

    pub(super) fn track_tooltip(&mut self) {
        if let Some(tooltip) = &mut self.tooltip {
            tooltip.anchor = self.position;
        }
    }
}
