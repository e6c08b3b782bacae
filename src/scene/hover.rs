use clap::ValueEnum;
use eframe::egui::{Pos2, Rect, Vec2};
use tracing::debug;

use super::Scene;

/// How far above and left of a point its hover region starts.
pub const HIT_MARGIN: f32 = 10.0;
const CIRCLE_HIT_PADDING: f32 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HoverPolicy {
    /// Hovering a tooltip pauses its point and opens the content popup; the
    /// point stays paused while the pointer is over the popup.
    #[default]
    TooltipWithPopup,
    /// Any circle pauses while hovered. No overlay.
    SimpleHoverPause,
    /// Circles carrying content pause and show a bubble while hovered.
    BubbleOnHover,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Popup { point: usize, anchor: Pos2 },
    Bubble { point: usize, anchor: Pos2 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Entered(usize),
    Left(usize),
}

/// Strict containment in the box spanning `HIT_MARGIN` up-left of `anchor`
/// to `size` down-right of it.
pub fn hit_region(anchor: Pos2, size: Vec2, pointer: Pos2) -> bool {
    pointer.x > anchor.x - HIT_MARGIN
        && pointer.x < anchor.x + size.x
        && pointer.y > anchor.y - HIT_MARGIN
        && pointer.y < anchor.y + size.y
}

pub fn circle_hit(center: Pos2, radius: f32, pointer: Pos2) -> bool {
    let extent = (radius + CIRCLE_HIT_PADDING) * 2.0;
    Rect::from_center_size(center, Vec2::splat(extent)).contains(pointer)
}

impl Scene {
    /// Scans points in creation order; the first one whose region decides
    /// anything ends the scan.
    pub fn pointer_moved(&mut self, pointer: Pos2, popup_size: Vec2) -> Option<HoverChange> {
        let policy = self.config.hover_policy;

        for index in 0..self.points.len() {
            let point = &self.points[index];
            let eligible = match policy {
                HoverPolicy::TooltipWithPopup => point.tooltip.is_some(),
                HoverPolicy::SimpleHoverPause => true,
                HoverPolicy::BubbleOnHover => point.content.is_some(),
            };
            if !eligible {
                continue;
            }

            if point.is_paused {
                let still_inside = match policy {
                    HoverPolicy::TooltipWithPopup => hit_region(point.position, popup_size, pointer),
                    _ => circle_hit(point.position, point.circle.radius, pointer),
                };
                if still_inside {
                    return None;
                }

                self.release(index);
                return Some(HoverChange::Left(index));
            }

            let entered = match (policy, &point.tooltip) {
                (HoverPolicy::TooltipWithPopup, Some(tooltip)) => {
                    hit_region(point.position, tooltip.size, pointer)
                }
                (HoverPolicy::TooltipWithPopup, None) => false,
                _ => circle_hit(point.position, point.circle.radius, pointer),
            };
            if entered {
                let anchor = point.position;
                let overlay = match policy {
                    HoverPolicy::TooltipWithPopup => Overlay::Popup {
                        point: index,
                        anchor,
                    },
                    HoverPolicy::SimpleHoverPause => Overlay::None,
                    HoverPolicy::BubbleOnHover => Overlay::Bubble {
                        point: index,
                        anchor,
                    },
                };
                self.hold(index, overlay);
                return Some(HoverChange::Entered(index));
            }
        }

        None
    }

    /// Pointer left the surface: release whatever is held.
    pub fn pointer_left(&mut self) -> Option<HoverChange> {
        let index = self.held?;
        self.release(index);
        Some(HoverChange::Left(index))
    }

    /// Holding a point releases the previously held one first.
    fn hold(&mut self, index: usize, overlay: Overlay) {
        if let Some(previous) = self.held.filter(|&held| held != index) {
            self.release(previous);
        }
        if let Some(tween) = self.tweens.get_mut(index) {
            tween.pause();
        }
        if let Some(point) = self.points.get_mut(index) {
            point.is_paused = true;
        }
        self.held = Some(index);
        self.overlay = overlay;
        debug!(point = index, ?overlay, "hover entered");
    }

    fn release(&mut self, index: usize) {
        if let Some(tween) = self.tweens.get_mut(index) {
            tween.resume();
        }
        if let Some(point) = self.points.get_mut(index) {
            point.is_paused = false;
        }
        if self.held == Some(index) {
            self.held = None;
        }
        self.overlay = Overlay::None;
        debug!(point = index, "hover left");
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;
    use crate::scene::point::{Point, Tooltip};
    use crate::scene::tween::Tween;
    use crate::scene::{Scene, SceneConfig};

    fn point_at(x: f32, y: f32) -> Point {
        Point::new(pos2(x, y), Vec::new(), 5.0)
    }

    fn with_tooltip(mut point: Point, width: f32, height: f32) -> Point {
        let mut tooltip = Tooltip::new("tip".to_owned(), point.position);
        tooltip.size = vec2(width, height);
        point.tooltip = Some(tooltip);
        point.content = Some(0);
        point
    }

    fn scene(policy: HoverPolicy, points: Vec<Point>) -> Scene {
        let config = SceneConfig {
            hover_policy: policy,
            ..SceneConfig::default()
        };
        let tweens = points
            .iter()
            .map(|point| Tween::new(point.origin, point.origin + vec2(100.0, 100.0), 20.0))
            .collect();
        Scene::from_parts(config, vec2(500.0, 500.0), points, tweens, Vec::new())
    }

    #[test]
    fn region_around_point_with_overlay_size() {
        let anchor = pos2(100.0, 100.0);
        let size = vec2(50.0, 20.0);
        assert!(hit_region(anchor, size, pos2(102.0, 102.0)));
        assert!(!hit_region(anchor, size, pos2(200.0, 200.0)));
        assert!(!hit_region(anchor, size, pos2(90.0, 100.0)));
        assert!(hit_region(anchor, size, pos2(91.0, 91.0)));
        assert!(!hit_region(anchor, size, pos2(150.0, 110.0)));
    }

    #[test]
    fn circle_hit_box_tracks_radius() {
        assert!(circle_hit(pos2(100.0, 100.0), 5.0, pos2(102.0, 102.0)));
        assert!(circle_hit(pos2(100.0, 100.0), 5.0, pos2(108.0, 100.0)));
        assert!(!circle_hit(pos2(100.0, 100.0), 5.0, pos2(200.0, 200.0)));
    }

    #[test]
    fn entering_tooltip_pauses_and_opens_popup() {
        let mut scene = scene(
            HoverPolicy::TooltipWithPopup,
            vec![point_at(10.0, 10.0), with_tooltip(point_at(100.0, 100.0), 50.0, 20.0)],
        );

        let change = scene.pointer_moved(pos2(102.0, 102.0), vec2(200.0, 120.0));

        assert_eq!(change, Some(HoverChange::Entered(1)));
        assert!(scene.points()[1].is_paused);
        assert!(scene.tweens()[1].is_paused());
        assert_eq!(
            scene.overlay(),
            Overlay::Popup {
                point: 1,
                anchor: pos2(100.0, 100.0)
            }
        );
    }

    #[test]
    fn popup_region_keeps_point_paused() {
        let mut scene = scene(
            HoverPolicy::TooltipWithPopup,
            vec![with_tooltip(point_at(100.0, 100.0), 50.0, 20.0)],
        );
        let popup = vec2(200.0, 120.0);
        scene.pointer_moved(pos2(102.0, 102.0), popup);

        // Outside the tooltip but over the popup.
        assert_eq!(scene.pointer_moved(pos2(250.0, 200.0), popup), None);
        assert!(scene.points()[0].is_paused);

        assert_eq!(
            scene.pointer_moved(pos2(400.0, 400.0), popup),
            Some(HoverChange::Left(0))
        );
        assert!(!scene.points()[0].is_paused);
        assert!(!scene.tweens()[0].is_paused());
        assert_eq!(scene.overlay(), Overlay::None);
    }

    #[test]
    fn first_match_wins_over_closer_later_point() {
        let mut scene = scene(
            HoverPolicy::TooltipWithPopup,
            vec![
                with_tooltip(point_at(100.0, 100.0), 80.0, 80.0),
                with_tooltip(point_at(150.0, 150.0), 50.0, 20.0),
            ],
        );

        let change = scene.pointer_moved(pos2(151.0, 151.0), vec2(10.0, 10.0));
        assert_eq!(change, Some(HoverChange::Entered(0)));
        assert!(!scene.points()[1].is_paused);
    }

    #[test]
    fn paused_point_blocks_later_points_until_released() {
        let mut scene = scene(
            HoverPolicy::TooltipWithPopup,
            vec![
                with_tooltip(point_at(100.0, 100.0), 50.0, 20.0),
                with_tooltip(point_at(300.0, 300.0), 50.0, 20.0),
            ],
        );
        let popup = vec2(60.0, 40.0);
        scene.pointer_moved(pos2(102.0, 102.0), popup);

        // Leaving point 0 lands on point 1, but the scan stops at the release.
        assert_eq!(
            scene.pointer_moved(pos2(302.0, 302.0), popup),
            Some(HoverChange::Left(0))
        );
        assert!(!scene.points()[1].is_paused);

        assert_eq!(
            scene.pointer_moved(pos2(302.0, 302.0), popup),
            Some(HoverChange::Entered(1))
        );
    }

    #[test]
    fn points_without_tooltip_are_ignored_by_popup_policy() {
        let mut scene = scene(HoverPolicy::TooltipWithPopup, vec![point_at(100.0, 100.0)]);
        assert_eq!(scene.pointer_moved(pos2(101.0, 101.0), vec2(50.0, 50.0)), None);
    }

    #[test]
    fn simple_policy_pauses_any_circle_without_overlay() {
        let mut scene = scene(HoverPolicy::SimpleHoverPause, vec![point_at(100.0, 100.0)]);

        assert_eq!(
            scene.pointer_moved(pos2(102.0, 102.0), Vec2::ZERO),
            Some(HoverChange::Entered(0))
        );
        assert_eq!(scene.overlay(), Overlay::None);
        assert!(scene.tweens()[0].is_paused());

        assert_eq!(
            scene.pointer_moved(pos2(130.0, 130.0), Vec2::ZERO),
            Some(HoverChange::Left(0))
        );
        assert!(!scene.tweens()[0].is_paused());
    }

    #[test]
    fn bubble_policy_needs_content() {
        let mut scene = scene(
            HoverPolicy::BubbleOnHover,
            vec![point_at(100.0, 100.0), with_tooltip(point_at(200.0, 200.0), 10.0, 10.0)],
        );

        assert_eq!(scene.pointer_moved(pos2(101.0, 101.0), Vec2::ZERO), None);
        assert_eq!(
            scene.pointer_moved(pos2(201.0, 201.0), Vec2::ZERO),
            Some(HoverChange::Entered(1))
        );
        assert_eq!(
            scene.overlay(),
            Overlay::Bubble {
                point: 1,
                anchor: pos2(200.0, 200.0)
            }
        );
    }

    #[test]
    fn entering_an_earlier_tooltip_releases_the_held_point() {
        // Point 0's tooltip lies inside point 1's popup, and point 0 is scanned first.
        let mut scene = scene(
            HoverPolicy::TooltipWithPopup,
            vec![
                with_tooltip(point_at(300.0, 150.0), 50.0, 20.0),
                with_tooltip(point_at(100.0, 100.0), 50.0, 20.0),
            ],
        );
        let popup = vec2(260.0, 120.0);

        assert_eq!(
            scene.pointer_moved(pos2(102.0, 102.0), popup),
            Some(HoverChange::Entered(1))
        );
        assert_eq!(
            scene.pointer_moved(pos2(305.0, 155.0), popup),
            Some(HoverChange::Entered(0))
        );

        let paused = scene.points().iter().map(|p| p.is_paused).collect::<Vec<_>>();
        assert_eq!(paused, vec![true, false]);
        assert!(!scene.tweens()[1].is_paused());
        assert_eq!(
            scene.overlay(),
            Overlay::Popup {
                point: 0,
                anchor: pos2(300.0, 150.0)
            }
        );

        assert_eq!(scene.pointer_left(), Some(HoverChange::Left(0)));
        assert!(scene.points().iter().all(|p| !p.is_paused));
        assert!(scene.tweens().iter().all(|t| !t.is_paused()));
        assert_eq!(scene.overlay(), Overlay::None);
    }

    #[test]
    fn leaving_the_surface_releases_the_held_point() {
        let mut scene = scene(HoverPolicy::SimpleHoverPause, vec![point_at(100.0, 100.0)]);
        scene.pointer_moved(pos2(100.0, 100.0), Vec2::ZERO);

        assert_eq!(scene.pointer_left(), Some(HoverChange::Left(0)));
        assert_eq!(scene.pointer_left(), None);
        assert!(!scene.tweens()[0].is_paused());
    }
}
