use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2, vec2};

pub(super) const REGION_DEFAULT: Color32 = Color32::from_rgb(59, 130, 246);
pub(super) const REGION_HOVER: Color32 = Color32::from_rgb(239, 68, 68);
pub(super) const REGION_HAS_RESULTS: Color32 = Color32::from_rgb(245, 158, 11);
pub(super) const REGION_SELECTED: Color32 = Color32::from_rgb(16, 185, 129);
pub(super) const COMPANY_PIN: Color32 = Color32::from_rgb(168, 85, 247);
pub(super) const LAB_PIN: Color32 = Color32::from_rgb(236, 72, 153);

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct RegionMarkerState {
    pub(super) selected: bool,
    pub(super) hovered: bool,
    pub(super) has_results: bool,
}

/// Selection beats hover, hover beats the has-results tag.
pub(super) fn region_color(state: RegionMarkerState) -> Color32 {
    if state.selected {
        REGION_SELECTED
    } else if state.hovered {
        REGION_HOVER
    } else if state.has_results {
        REGION_HAS_RESULTS
    } else {
        REGION_DEFAULT
    }
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = (56.0 * zoom.clamp(0.6, 1.8)).max(20.0);
    let origin = rect.center() + pan;

    let mut x = origin.x.rem_euclid(step);
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70)),
        );
        x += step;
    }

    let mut y = origin.y.rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70)),
        );
        y += step;
    }
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.center() + pan + world * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.center() - pan) / zoom
}

/// Marker radius grows with the number of projects in a region.
pub(super) fn region_radius(project_count: usize) -> f32 {
    9.0 + ((project_count as f32).sqrt() * 4.0).min(22.0)
}

pub(super) fn draw_tooltip(painter: &Painter, anchor: Pos2, text: &str) {
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(13.0),
        Color32::WHITE,
    );
    let origin = anchor + vec2(15.0, -30.0);
    let frame = Rect::from_min_size(origin, galley.size()).expand(5.0);
    painter.rect_filled(frame, 4.0, Color32::from_rgba_unmultiplied(15, 23, 42, 230));
    painter.galley(origin, galley, Color32::WHITE);
}

pub(super) fn draw_label(painter: &Painter, position: Pos2, text: &str, zoom: f32) {
    painter.text(
        position,
        Align2::CENTER_TOP,
        text,
        FontId::proportional((11.0 * zoom.sqrt()).clamp(9.0, 16.0)),
        Color32::from_rgb(226, 232, 240),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_and_world_transforms_are_inverse() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), vec2(800.0, 600.0));
        let pan = vec2(-35.0, 12.5);
        let zoom = 1.75;
        let world = vec2(412.0, -88.0);

        let screen = world_to_screen(rect, pan, zoom, world);
        let back = screen_to_world(rect, pan, zoom, screen);
        assert!((back - world).length() < 1e-3);
    }

    #[test]
    fn selected_region_color_wins() {
        let state = RegionMarkerState {
            selected: true,
            hovered: true,
            has_results: true,
        };
        assert_eq!(region_color(state), REGION_SELECTED);
        assert_eq!(
            region_color(RegionMarkerState {
                has_results: true,
                ..Default::default()
            }),
            REGION_HAS_RESULTS
        );
        assert_eq!(region_color(RegionMarkerState::default()), REGION_DEFAULT);
    }
}
