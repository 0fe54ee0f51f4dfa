use eframe::egui::{Vec2, vec2};

use crate::filter::normalize_region;
use crate::util::stable_pair;

/// Side of the square map space, in map units.
pub(super) const MAP_SIZE: f32 = 980.0;

/// Map centre used as the origin of the default view.
pub(super) const MAP_CENTER: Vec2 = vec2(MAP_SIZE * 0.6, MAP_SIZE * 0.45);

/// Approximate centroids (lat, lon) of the metropolitan regions.
const REGION_ANCHORS: [(&str, f64, f64); 13] = [
    ("Auvergne-Rhône-Alpes", 45.5, 4.5),
    ("Bourgogne-Franche-Comté", 47.2, 4.8),
    ("Bretagne", 48.2, -2.9),
    ("Centre-Val de Loire", 47.5, 1.7),
    ("Corse", 42.1, 9.1),
    ("Grand Est", 48.7, 5.6),
    ("Hauts-de-France", 50.0, 2.8),
    ("Île-de-France", 48.7, 2.5),
    ("Normandie", 49.1, 0.1),
    ("Nouvelle-Aquitaine", 45.2, 0.2),
    ("Occitanie", 43.7, 2.2),
    ("Pays de la Loire", 47.5, -0.8),
    ("Provence-Alpes-Côte d'Azur", 43.9, 6.1),
];

const LAB_LOCATIONS: [(&str, f64, f64); 3] = [
    ("INRIA Paris", 48.84, 2.35),
    ("Sorbonne Université", 48.85, 2.34),
    ("Université de Caen", 49.19, -0.37),
];

/// Equirectangular projection of metropolitan France onto map space.
pub(super) fn project_lat_lon(lat: f64, lon: f64) -> Vec2 {
    let x = f64::from(MAP_SIZE) * (lon + 5.5) / 11.0;
    let y = f64::from(MAP_SIZE) * (50.5 - lat) / 12.0;
    vec2(x as f32, y as f32)
}

/// Map position of a region marker. Unknown regions get a stable spot off the
/// south-west coast so they stay clickable.
pub(super) fn region_anchor(region: &str) -> Vec2 {
    let slug = normalize_region(region);
    if let Some((_, lat, lon)) = REGION_ANCHORS
        .iter()
        .find(|(name, _, _)| normalize_region(name) == slug)
    {
        return project_lat_lon(*lat, *lon);
    }

    let (jx, jy) = stable_pair(&slug);
    vec2(90.0 + jx * 70.0, MAP_SIZE * 0.8 + jy * 90.0)
}

pub(super) fn lab_position(institution: &str) -> Option<Vec2> {
    LAB_LOCATIONS
        .iter()
        .find(|(name, _, _)| *name == institution)
        .map(|(_, lat, lon)| project_lat_lon(*lat, *lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_matches_reference_points() {
        let origin = project_lat_lon(50.5, -5.5);
        assert!(origin.length() < 1e-3);

        let far = project_lat_lon(38.5, 5.5);
        assert!((far.x - MAP_SIZE).abs() < 1e-3);
        assert!((far.y - MAP_SIZE).abs() < 1e-3);
    }

    #[test]
    fn region_anchor_ignores_accents_and_case() {
        assert_eq!(region_anchor("ile-de-france"), region_anchor("Île-de-France"));
        assert_eq!(region_anchor("Atlantide"), region_anchor("Atlantide"));
        assert!(region_anchor("Atlantide").x < 200.0);
    }

    #[test]
    fn only_known_institutions_have_lab_pins() {
        assert!(lab_position("INRIA Paris").is_some());
        assert!(lab_position("Institut inconnu").is_none());
    }
}
