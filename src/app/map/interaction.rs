use eframe::egui::{self, Pos2, Rect, Ui};

use super::super::ViewModel;
use super::super::render_utils::{circle_visible, screen_to_world};
use super::{MapMarker, MarkerTarget};

impl ViewModel {
    pub(in crate::app) fn handle_map_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.3, 6.0);
        self.pan = pointer - rect.center() - (world_before * self.zoom);
    }

    pub(in crate::app) fn handle_map_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    /// Topmost marker under the pointer. Pins are drawn above regions, so they win.
    pub(in crate::app) fn hovered_marker<'m>(
        &self,
        ui: &Ui,
        rect: Rect,
        markers: &'m [MapMarker],
    ) -> Option<&'m MapMarker> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        if !rect.contains(pointer) {
            return None;
        }

        markers
            .iter()
            .filter(|marker| circle_visible(rect, marker.position, marker.radius))
            .filter(|marker| marker.position.distance(pointer) <= marker.radius)
            .max_by(|a, b| {
                a.layer()
                    .cmp(&b.layer())
                    .then_with(|| distance_to(b, pointer).total_cmp(&distance_to(a, pointer)))
            })
    }

    pub(in crate::app) fn activate_marker(&mut self, target: &MarkerTarget) {
        match target {
            MarkerTarget::Region(region) => {
                tracing::debug!(%region, "region clicked");
                self.select_region(region);
            }
            MarkerTarget::Company(index) => {
                let company = self.explorer.companies().get(*index).map(|c| (*c).clone());
                if let Some(company) = company {
                    self.sidebar.show_company(&company);
                }
            }
            MarkerTarget::Laboratory(index) => {
                let project = self.explorer.laboratory_projects().get(*index).cloned();
                if let Some(project) = project {
                    self.open_project_detail(&project);
                }
            }
        }
    }
}

fn distance_to(marker: &MapMarker, pointer: Pos2) -> f32 {
    marker.position.distance(pointer)
}
