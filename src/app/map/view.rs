use eframe::egui::{self, Color32, Sense, Stroke, Ui, vec2};

use super::super::ViewModel;
use super::super::render_utils::{
    COMPANY_PIN, LAB_PIN, RegionMarkerState, circle_visible, draw_background, draw_label,
    draw_tooltip, region_color,
};
use super::{MapMarker, MarkerTarget};

impl ViewModel {
    pub(in crate::app) fn draw_map(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.pan, self.zoom);

        self.handle_map_zoom(ui, rect, &response);
        self.handle_map_pan(&response);

        let markers = self.collect_markers(rect);
        let hovered = self.hovered_marker(ui, rect, &markers).cloned();
        self.hovered_region = match &hovered {
            Some(MapMarker {
                target: MarkerTarget::Region(region),
                ..
            }) => Some(region.clone()),
            _ => None,
        };

        let hovering = hovered.is_some();
        if hovering {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let selected_region = self.explorer.state().selected_region.clone();
        for marker in markers
            .iter()
            .filter(|marker| circle_visible(rect, marker.position, marker.radius))
        {
            match &marker.target {
                MarkerTarget::Region(region) => {
                    let state = RegionMarkerState {
                        selected: selected_region.as_deref() == Some(region.as_str()),
                        hovered: self.hovered_region.as_deref() == Some(region.as_str()),
                        has_results: self.sidebar.is_highlighted(region),
                    };
                    painter.circle(
                        marker.position,
                        marker.radius,
                        region_color(state),
                        Stroke::new(1.5, Color32::from_rgb(226, 232, 240)),
                    );
                    draw_label(
                        &painter,
                        marker.position + vec2(0.0, marker.radius + 2.0),
                        region,
                        self.zoom,
                    );
                }
                MarkerTarget::Laboratory(_) => {
                    let r = marker.radius;
                    let p = marker.position;
                    painter.add(egui::Shape::convex_polygon(
                        vec![
                            p + vec2(0.0, -r),
                            p + vec2(r, 0.0),
                            p + vec2(0.0, r),
                            p + vec2(-r, 0.0),
                        ],
                        LAB_PIN,
                        Stroke::new(1.0, Color32::WHITE),
                    ));
                }
                MarkerTarget::Company(_) => {
                    painter.circle(
                        marker.position,
                        marker.radius * 0.7,
                        COMPANY_PIN,
                        Stroke::new(1.0, Color32::WHITE),
                    );
                }
            }
        }

        if let Some(marker) = &hovered {
            draw_tooltip(&painter, marker.position, &marker.label);
        }

        if response.clicked_by(egui::PointerButton::Primary)
            && let Some(marker) = hovered
        {
            self.activate_marker(&marker.target);
        }

        if response.dragged() || hovering {
            ui.ctx().request_repaint();
        }

        if self.explorer.directory().is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Aucune donnée chargée",
                egui::FontId::proportional(16.0),
                Color32::from_gray(160),
            );
        }
    }
}
