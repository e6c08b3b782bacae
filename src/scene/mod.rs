mod animation;
mod circle;
mod hover;
mod neighbors;
mod point;
mod surface;
mod tween;

use eframe::egui::Vec2;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::content::{ContentAssignment, ContentBlock};
use crate::layout::jittered_grid;
use crate::util::unit;

pub use animation::AnimationLoop;
pub use hover::{HoverChange, HoverPolicy, Overlay};
pub use point::Point;
pub use surface::Surface;
pub use tween::Tween;

use point::Tooltip;

const MIN_CIRCLE_RADIUS: f32 = 4.0;
const CIRCLE_RADIUS_JITTER: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub grid: usize,
    pub neighbors: usize,
    pub hover_policy: HoverPolicy,
    pub assignment: ContentAssignment,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid: 5,
            neighbors: 3,
            hover_policy: HoverPolicy::default(),
            assignment: ContentAssignment::default(),
        }
    }
}

/// Points, their drift tweens and the hover overlay for one drawing surface.
pub struct Scene {
    config: SceneConfig,
    size: Vec2,
    points: Vec<Point>,
    tweens: Vec<Tween>,
    content: Vec<ContentBlock>,
    overlay: Overlay,
    /// The one point whose tween is paused by hover, if any.
    held: Option<usize>,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(
        config: SceneConfig,
        size: Vec2,
        content: Vec<ContentBlock>,
        rng: &mut R,
    ) -> Self {
        let origins = jittered_grid(size, config.grid, rng);
        let graph = neighbors::nearest_neighbors(&origins, config.neighbors);

        let mut points = origins
            .into_iter()
            .zip(graph)
            .map(|(origin, closest)| {
                let radius = MIN_CIRCLE_RADIUS + unit(rng) * CIRCLE_RADIUS_JITTER;
                Point::new(origin, closest, radius)
            })
            .collect::<Vec<_>>();

        let mut dropped = 0usize;
        for (block_index, block) in content.iter().enumerate() {
            let Some(point) = points.get_mut(config.assignment.point_for(block_index)) else {
                dropped += 1;
                continue;
            };

            point.content = Some(block_index);
            point.tooltip = block
                .tooltip
                .clone()
                .map(|text| Tooltip::new(text, point.position));
        }
        if dropped > 0 {
            warn!(dropped, points = points.len(), "more content blocks than points");
        }

        info!(
            points = points.len(),
            neighbors = config.neighbors,
            with_content = content.len() - dropped,
            width = size.x,
            height = size.y,
            "scene built"
        );

        Self::from_parts(config, size, points, Vec::new(), content)
    }

    pub(crate) fn from_parts(
        config: SceneConfig,
        size: Vec2,
        points: Vec<Point>,
        tweens: Vec<Tween>,
        content: Vec<ContentBlock>,
    ) -> Self {
        Self {
            config,
            size,
            points,
            tweens,
            content,
            overlay: Overlay::None,
            held: None,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[cfg(test)]
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn content(&self, point: usize) -> Option<&ContentBlock> {
        let index = self.points.get(point)?.content?;
        self.content.get(index)
    }

    pub fn set_tooltip_size(&mut self, point: usize, size: Vec2) {
        if let Some(tooltip) = self.points.get_mut(point).and_then(|p| p.tooltip.as_mut()) {
            tooltip.size = size;
        }
    }

    /// Only the surface size changes; layout and neighbors stay as built.
    pub fn resize(&mut self, size: Vec2) {
        if size == self.size {
            return;
        }
        debug!(
            from = ?self.size,
            to = ?size,
            "surface resized"
        );
        self.size = size;
    }

    /// Creates one drift tween per point. Existing tweens are kept.
    pub(crate) fn ensure_tweens<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.tweens.len() == self.points.len() {
            return;
        }

        self.tweens = self
            .points
            .iter()
            .map(|point| Tween::drift(point.origin, rng))
            .collect();
    }

    pub(crate) fn advance(&mut self, delta_secs: f32) {
        for (point, tween) in self.points.iter_mut().zip(&mut self.tweens) {
            tween.advance(delta_secs);
            point.position = tween.value();
        }
    }

    pub fn draw_frame(&mut self, surface: &mut dyn Surface) {
        surface.clear();

        for index in 0..self.points.len() {
            if self.points[index].tooltip.is_some() {
                self.points[index].circle.escalate();
            }

            let point = &self.points[index];
            point.draw_lines(&self.points, surface);
            point.circle.draw(surface, point.position);

            self.points[index].track_tooltip();
        }
    }
}
