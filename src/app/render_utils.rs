use eframe::egui::{Color32, Pos2, Rect};

pub(super) const BACKGROUND: Color32 = Color32::from_rgb(19, 23, 29);

pub(super) fn canvas_to_screen(rect: Rect, canvas: Pos2) -> Pos2 {
    rect.min + canvas.to_vec2()
}

pub(super) fn screen_to_canvas(rect: Rect, screen: Pos2) -> Pos2 {
    (screen - rect.min).to_pos2()
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    #[test]
    fn canvas_and_screen_round_trip_through_rect_origin() {
        let rect = Rect::from_min_max(pos2(40.0, 25.0), pos2(540.0, 525.0));
        assert_eq!(canvas_to_screen(rect, pos2(10.0, 10.0)), pos2(50.0, 35.0));
        assert_eq!(screen_to_canvas(rect, pos2(50.0, 35.0)), pos2(10.0, 10.0));
    }
}
