use eframe::egui::{self, Align2, Color32, Context, FontId, Id, Order, Pos2, Rect, RichText, vec2};

use crate::scene::Overlay;

use super::DotFieldApp;
use super::render_utils::canvas_to_screen;

const POPUP_WIDTH: f32 = 260.0;
const BUBBLE_OFFSET: f32 = 12.0;

impl DotFieldApp {
    /// Tooltips sit at their point's live position; their measured size
    /// feeds back into the hover regions.
    pub(super) fn show_tooltips(&mut self, ctx: &Context, rect: Rect) {
        let tooltips = self
            .scene
            .points()
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                point
                    .tooltip
                    .as_ref()
                    .map(|tooltip| (index, tooltip.text.clone(), tooltip.anchor))
            })
            .collect::<Vec<_>>();

        for (index, text, anchor) in tooltips {
            let response = egui::Area::new(Id::new(("dot-tooltip", index)))
                .order(Order::Foreground)
                .interactable(false)
                .fixed_pos(canvas_to_screen(rect, anchor))
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 28))
                        .inner_margin(egui::Margin::symmetric(6, 3))
                        .corner_radius(3.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(text).size(12.0).color(Color32::from_gray(235)));
                        });
                })
                .response;

            self.scene.set_tooltip_size(index, response.rect.size());
        }
    }

    pub(super) fn show_overlay(&mut self, ctx: &Context, rect: Rect) {
        match self.scene.overlay() {
            Overlay::None => {}
            Overlay::Popup { point, anchor } => {
                let Some(block) = self.scene.content(point).cloned() else {
                    return;
                };

                let response = egui::Area::new(Id::new("dot-popup"))
                    .order(Order::Tooltip)
                    .interactable(false)
                    .fixed_pos(canvas_to_screen(rect, anchor))
                    .show(ctx, |ui| {
                        egui::Frame::popup(ui.style()).show(ui, |ui| {
                            ui.set_max_width(POPUP_WIDTH);
                            ui.heading(block.title.as_str());
                            if !block.body.is_empty() {
                                ui.add_space(4.0);
                                ui.label(block.body.as_str());
                            }
                        });
                    })
                    .response;

                self.popup_size = response.rect.size();
            }
            Overlay::Bubble { point, anchor } => {
                let Some(block) = self.scene.content(point) else {
                    return;
                };
                let text = block.tooltip.as_deref().unwrap_or(block.title.as_str());

                let painter = ctx.layer_painter(egui::LayerId::new(Order::Tooltip, Id::new("dot-bubble")));
                let position: Pos2 = canvas_to_screen(rect, anchor) + vec2(0.0, -BUBBLE_OFFSET);
                let galley = painter.layout_no_wrap(
                    text.to_owned(),
                    FontId::proportional(13.0),
                    Color32::from_gray(20),
                );
                let bubble = Align2::CENTER_BOTTOM
                    .anchor_size(position, galley.size())
                    .expand2(vec2(8.0, 4.0));
                painter.rect_filled(bubble, 6.0, Color32::from_gray(240));
                painter.galley(bubble.shrink2(vec2(8.0, 4.0)).min, galley, Color32::from_gray(20));
            }
        }
    }
}
