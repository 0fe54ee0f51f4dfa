use eframe::egui::{Pos2, Rect, Vec2};

use super::ViewModel;
use super::render_utils::{region_radius, world_to_screen};

mod interaction;
mod layout;
mod view;

use self::layout::{MAP_CENTER, lab_position, project_lat_lon, region_anchor};

#[derive(Clone, Debug, PartialEq)]
pub(super) enum MarkerTarget {
    Region(String),
    /// Index into the currently filtered companies.
    Company(usize),
    /// Index into the laboratory projects.
    Laboratory(usize),
}

#[derive(Clone, Debug)]
pub(super) struct MapMarker {
    pub(super) target: MarkerTarget,
    pub(super) position: Pos2,
    pub(super) radius: f32,
    pub(super) label: String,
}

impl MapMarker {
    fn layer(&self) -> u8 {
        match self.target {
            MarkerTarget::Region(_) => 0,
            MarkerTarget::Laboratory(_) => 1,
            MarkerTarget::Company(_) => 2,
        }
    }
}

impl ViewModel {
    /// Screen-space markers for regions, company pins and lab pins, in draw order.
    fn collect_markers(&self, rect: Rect) -> Vec<MapMarker> {
        let to_screen = |world: Vec2| world_to_screen(rect, self.pan, self.zoom, world - MAP_CENTER);
        let pin_radius = (7.0 * self.zoom.sqrt()).clamp(5.0, 14.0);
        let directory = self.explorer.directory();
        let mut markers = Vec::new();

        for region in directory.regions() {
            let count = directory.region_project_count(region);
            markers.push(MapMarker {
                target: MarkerTarget::Region(region.clone()),
                position: to_screen(region_anchor(region)),
                radius: region_radius(count) * self.zoom.sqrt(),
                label: format!("{region}\n{count} projet(s)"),
            });
        }

        for (index, project) in self.explorer.laboratory_projects().iter().enumerate() {
            let Some(world) = lab_position(&project.institution) else {
                continue;
            };
            markers.push(MapMarker {
                target: MarkerTarget::Laboratory(index),
                position: to_screen(world),
                radius: pin_radius,
                label: project.institution.clone(),
            });
        }

        for (index, company) in self.explorer.companies().iter().enumerate() {
            markers.push(MapMarker {
                target: MarkerTarget::Company(index),
                position: to_screen(project_lat_lon(company.lat, company.lon)),
                radius: pin_radius,
                label: company.name.clone(),
            });
        }

        markers
    }
}
