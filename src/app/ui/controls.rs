use eframe::egui::{self, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::directory::ProjectStatus;

use super::super::{FilterTab, ViewModel};

const BUDGET_OPTIONS: [(&str, &str); 3] = [
    ("0-1", "< 1 M€"),
    ("1-3", "1 - 3 M€"),
    ("3-+", "> 3 M€"),
];
const REGION_FINDER_LIMIT: usize = 8;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

/// Regions ranked by fuzzy score against `query`, best first.
pub(in crate::app) fn rank_regions<'a>(regions: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut ranked = regions
        .iter()
        .filter_map(|region| {
            fuzzy_match_score(&matcher, region, query).map(|score| (score, region.as_str()))
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    ranked.into_iter().map(|(_, region)| region).collect()
}

/// Combo box over `(value, label)` pairs, with an "all" entry mapped to the empty value.
fn filter_combo(
    ui: &mut Ui,
    id: &str,
    label: &str,
    all_label: &str,
    current: &mut String,
    options: &[(String, String)],
) -> bool {
    let selected_text = options
        .iter()
        .find(|(value, _)| value == current)
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| all_label.to_owned());

    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected_text)
            .width(190.0)
            .show_ui(ui, |ui| {
                changed |= ui
                    .selectable_value(current, String::new(), all_label)
                    .changed();
                for (value, option_label) in options {
                    changed |= ui
                        .selectable_value(current, value.clone(), option_label)
                        .changed();
                }
            });
    });
    changed
}

fn same_options(values: &[String]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.clone(), v.clone())).collect()
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Recherche et filtres");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Recherche (titre, institution, description, domaine)")
            .on_hover_text("Ctrl+F pour placer le curseur ici.");
        let search_response = ui.text_edit_singleline(&mut self.search);
        if self.focus_search {
            search_response.request_focus();
            self.focus_search = false;
        }
        if search_response.changed() {
            self.explorer.set_search_query(&self.search);
        }

        if let Some(region) = self.explorer.state().selected_region.clone() {
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("Région : {region}"));
                if ui.small_button("Désélectionner").clicked() {
                    self.deselect_region();
                }
            });
        }

        ui.separator();
        ui.label("Acteurs affichés");
        let mut visibility_changed = false;
        visibility_changed |= ui
            .checkbox(&mut self.controls.laboratories, "Laboratoires")
            .changed();
        visibility_changed |= ui
            .checkbox(&mut self.controls.industries, "Industriels")
            .changed();
        visibility_changed |= ui
            .checkbox(&mut self.controls.projects, "Projets")
            .changed();
        if visibility_changed {
            self.apply_visibility();
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.filter_tab, FilterTab::Projects, "Projets");
            ui.selectable_value(&mut self.filter_tab, FilterTab::Companies, "Entreprises");
        });
        ui.add_space(4.0);

        match self.filter_tab {
            FilterTab::Projects => self.draw_project_filters(ui),
            FilterTab::Companies => self.draw_company_filters(ui),
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .button("Effacer les filtres")
                .on_hover_text("Vide la recherche et les filtres; la région reste sélectionnée.")
                .clicked()
            {
                self.clear_filters();
            }
            if ui
                .button("Réinitialiser")
                .on_hover_text("Revient à l'écran d'accueil.")
                .clicked()
            {
                self.reset_all();
            }
        });

        ui.separator();
        self.draw_region_finder(ui);
    }

    fn draw_project_filters(&mut self, ui: &mut Ui) {
        let domains = same_options(&self.options.project_domains);
        let budgets = BUDGET_OPTIONS
            .iter()
            .map(|(value, label)| ((*value).to_owned(), (*label).to_owned()))
            .collect::<Vec<_>>();
        let statuses = ProjectStatus::ALL
            .iter()
            .map(|status| (status.slug().to_owned(), status.label().to_owned()))
            .collect::<Vec<_>>();
        let years = self
            .options
            .years
            .iter()
            .map(|year| (year.to_string(), year.to_string()))
            .collect::<Vec<_>>();

        let mut changed = false;
        changed |= filter_combo(
            ui,
            "domain_filter",
            "Domaine",
            "Tous les domaines",
            &mut self.controls.domain,
            &domains,
        );
        changed |= filter_combo(
            ui,
            "budget_filter",
            "Budget",
            "Tous les budgets",
            &mut self.controls.budget,
            &budgets,
        );
        changed |= filter_combo(
            ui,
            "status_filter",
            "Statut",
            "Tous les statuts",
            &mut self.controls.status,
            &statuses,
        );
        changed |= filter_combo(
            ui,
            "year_filter",
            "Année",
            "Toutes les années",
            &mut self.controls.year,
            &years,
        );

        if changed {
            self.apply_project_controls();
        }
    }

    fn draw_company_filters(&mut self, ui: &mut Ui) {
        let domains = same_options(&self.options.company_domains);
        let regions = self.options.company_regions.clone();

        let mut changed = false;
        changed |= filter_combo(
            ui,
            "technique_filter",
            "Domaine",
            "Tous les domaines",
            &mut self.controls.company_domain,
            &domains,
        );
        changed |= filter_combo(
            ui,
            "location_filter",
            "Région",
            "Toutes les régions",
            &mut self.controls.company_region,
            &regions,
        );

        ui.label("Type d'entreprise");
        changed |= ui.checkbox(&mut self.controls.startup, "Startup").changed();
        changed |= ui.checkbox(&mut self.controls.pme, "PME").changed();
        changed |= ui
            .checkbox(&mut self.controls.large, "Grande entreprise")
            .changed();

        if changed {
            self.apply_company_controls();
        }
    }

    fn draw_region_finder(&mut self, ui: &mut Ui) {
        ui.label("Aller à une région")
            .on_hover_text("Recherche approximative parmi les régions chargées.");
        ui.text_edit_singleline(&mut self.region_finder);

        let matches = rank_regions(self.explorer.directory().regions(), &self.region_finder)
            .into_iter()
            .take(REGION_FINDER_LIMIT)
            .map(str::to_owned)
            .collect::<Vec<_>>();

        let mut picked = None;
        for region in &matches {
            let count = self.explorer.directory().region_project_count(region);
            if ui.link(format!("{region} ({count})")).clicked() {
                picked = Some(region.clone());
            }
        }

        if let Some(region) = picked {
            self.region_finder.clear();
            self.select_region(&region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_finder_tolerates_missing_letters_and_case() {
        let regions = vec![
            "Normandie".to_owned(),
            "Bretagne".to_owned(),
            "Île-de-France".to_owned(),
        ];

        assert_eq!(rank_regions(&regions, "nrmdie"), ["Normandie"]);
        assert_eq!(rank_regions(&regions, "BRET"), ["Bretagne"]);
        assert!(rank_regions(&regions, "  ").is_empty());
        assert!(rank_regions(&regions, "xyz").is_empty());
    }
}
