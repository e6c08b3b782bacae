use eframe::egui::{self, Align2, Color32, Context, FontId, Key, Pos2, Rect, Sense, Ui, Vec2, vec2};
use rand::rngs::StdRng;

use crate::scene::{AnimationLoop, HoverChange, Scene};

mod overlay;
mod render_utils;
mod stats;
mod surface;

use render_utils::screen_to_canvas;
use stats::FrameStats;
use surface::PainterSurface;

pub struct DotFieldApp {
    scene: Scene,
    animation: AnimationLoop,
    rng: StdRng,
    last_pointer: Option<Pos2>,
    hovered: Option<usize>,
    popup_size: Vec2,
    show_fps: bool,
    stats: FrameStats,
}

impl DotFieldApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        mut scene: Scene,
        mut rng: StdRng,
        show_fps: bool,
    ) -> Self {
        let mut animation = AnimationLoop::new();
        animation.start(&mut scene, &mut rng);

        Self {
            scene,
            animation,
            rng,
            last_pointer: None,
            hovered: None,
            popup_size: Vec2::ZERO,
            show_fps,
            stats: FrameStats::default(),
        }
    }

    fn handle_keys(&mut self, ui: &Ui) {
        if !ui.input(|input| input.key_pressed(Key::Space)) {
            return;
        }

        if self.animation.is_running() {
            self.animation.stop();
        } else {
            self.animation.start(&mut self.scene, &mut self.rng);
        }
    }

    fn handle_pointer(&mut self, ui: &Ui, rect: Rect) {
        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .filter(|position| rect.contains(*position));

        let change = match pointer {
            Some(position) if self.last_pointer != Some(position) => {
                self.last_pointer = Some(position);
                self.scene
                    .pointer_moved(screen_to_canvas(rect, position), self.popup_size)
            }
            Some(_) => None,
            None => self.last_pointer.take().and_then(|_| self.scene.pointer_left()),
        };

        match change {
            Some(HoverChange::Entered(point)) => {
                self.hovered = Some(point);
                self.popup_size = Vec2::ZERO;
            }
            Some(HoverChange::Left(point)) => {
                if self.hovered == Some(point) {
                    self.hovered = None;
                }
                self.popup_size = Vec2::ZERO;
            }
            None => {}
        }

        if self.hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        if rect.size() != self.scene.size() {
            self.scene.resize(rect.size());
        }

        self.handle_keys(ui);
        self.handle_pointer(ui, rect);

        let frame_delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let mut surface = PainterSurface::new(ui.painter_at(rect), rect);
        if self.animation.tick(&mut self.scene, &mut surface, frame_delta_seconds) {
            ui.ctx().request_repaint();
        } else {
            // Immediate mode: a stopped loop still needs its last frame painted.
            self.scene.draw_frame(&mut surface);
        }

        if self.show_fps {
            self.stats.record(ui.ctx().input(|input| input.stable_dt));
            if let Some(text) = self.stats.display_text(self.animation.frames()) {
                ui.painter_at(rect).text(
                    rect.left_top() + vec2(10.0, 10.0),
                    Align2::LEFT_TOP,
                    text,
                    FontId::monospace(12.0),
                    Color32::from_gray(200),
                );
            }
        }

        let ctx = ui.ctx().clone();
        self.show_tooltips(&ctx, rect);
        self.show_overlay(&ctx, rect);
    }
}

impl eframe::App for DotFieldApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_canvas(ui));
    }
}
