use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use eframe::egui::{self, Align, Color32, Context, Key, Layout, Modifiers, RichText, Vec2};

use crate::assistant::Assistant;
use crate::directory::{Directory, DirectoryStats, LoadOutcome};
use crate::filter::{CompanyCriteria, ProjectCriteria, Visibility};
use crate::selection::Explorer;

use super::super::{FilterControls, FilterOptions, FilterTab, Toast, ViewModel};
use super::sidebar::Sidebar;

const TOAST_SECS: f64 = 3.0;

impl Default for FilterControls {
    fn default() -> Self {
        Self {
            domain: String::new(),
            budget: String::new(),
            status: String::new(),
            year: String::new(),
            company_domain: String::new(),
            company_region: String::new(),
            startup: true,
            pme: true,
            large: true,
            laboratories: true,
            industries: true,
            projects: true,
        }
    }
}

impl FilterControls {
    fn project_criteria(&self) -> ProjectCriteria {
        ProjectCriteria::from_controls(&self.domain, &self.budget, &self.status, &self.year)
    }

    fn company_criteria(&self) -> CompanyCriteria {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_owned());
        CompanyCriteria {
            domain: non_empty(&self.company_domain),
            region: non_empty(&self.company_region),
            startup: self.startup,
            pme: self.pme,
            large: self.large,
        }
    }

    fn visibility(&self) -> Visibility {
        Visibility {
            laboratories: self.laboratories,
            industries: self.industries,
            projects: self.projects,
        }
    }

    fn clear_project_filters(&mut self) {
        self.domain.clear();
        self.budget.clear();
        self.status.clear();
        self.year.clear();
        self.company_domain.clear();
    }
}

impl FilterOptions {
    pub(in crate::app) fn collect(directory: &Directory) -> Self {
        let project_domains = directory
            .projects()
            .iter()
            .map(|project| project.domain.as_str())
            .filter(|domain| !domain.is_empty())
            .collect::<BTreeSet<_>>();

        let mut years = directory
            .projects()
            .iter()
            .map(|project| project.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        years.reverse();

        let company_domains = directory
            .companies()
            .iter()
            .map(|company| company.domain.as_str())
            .filter(|domain| !domain.is_empty())
            .collect::<BTreeSet<_>>();

        // Slug -> first spelling seen, so "Ile de France" and "Île-de-France" share an entry.
        let mut company_regions = BTreeMap::new();
        for company in directory.companies() {
            if company.region.is_empty() {
                continue;
            }
            company_regions
                .entry(company.region_slug())
                .or_insert_with(|| company.region.clone());
        }
        let mut company_regions = company_regions.into_iter().collect::<Vec<_>>();
        company_regions.sort_by(|a, b| a.1.cmp(&b.1));

        Self {
            project_domains: project_domains.into_iter().map(str::to_owned).collect(),
            years,
            company_domains: company_domains.into_iter().map(str::to_owned).collect(),
            company_regions,
        }
    }
}

impl ViewModel {
    pub(in crate::app) fn new(outcome: LoadOutcome) -> Self {
        let LoadOutcome { directory, notice } = outcome;
        let stats = DirectoryStats::collect(&directory);
        let options = FilterOptions::collect(&directory);

        Self {
            explorer: Explorer::new(directory),
            stats,
            load_notice: notice,
            sidebar: Sidebar::new(),
            projected_revision: None,
            search: String::new(),
            focus_search: false,
            filter_tab: FilterTab::Projects,
            controls: FilterControls::default(),
            options,
            region_finder: String::new(),
            pan: Vec2::ZERO,
            zoom: 1.0,
            hovered_region: None,
            detail: None,
            contact: None,
            submission: None,
            show_dashboard: false,
            assistant: Assistant::default(),
            assistant_input: String::new(),
            show_assistant: false,
            toast: None,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        self.handle_shortcuts(ctx);
        self.project_if_stale();

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Atlas de la recherche");
                    ui.separator();
                    ui.label(format!("projets : {}", self.stats.total_projects));
                    ui.label(format!("entreprises : {}", self.stats.total_companies));

                    let dashboard_label = if self.show_dashboard {
                        "Cacher le Dashboard"
                    } else {
                        "Afficher le Dashboard"
                    };
                    if ui.button(dashboard_label).clicked() {
                        self.show_dashboard = !self.show_dashboard;
                    }
                    if ui.button("Assistant").clicked() {
                        self.show_assistant = !self.show_assistant;
                    }
                    if ui.button("Proposer un projet").clicked() {
                        self.open_submission();
                    }
                    if ui.button("Recentrer la carte").clicked() {
                        self.pan = Vec2::ZERO;
                        self.zoom = 1.0;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(notice) = &self.load_notice {
                            ui.label(RichText::new(notice).color(Color32::from_rgb(239, 68, 68)));
                        }
                        if let Some(message) = self.active_toast(ctx) {
                            ui.label(RichText::new(message).color(Color32::from_rgb(16, 185, 129)));
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("controls_scroll")
                    .show(ui, |ui| self.draw_controls(ui));
            });

        egui::SidePanel::right("results")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| self.draw_sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_map(ui));

        self.draw_detail(ctx);
        self.draw_forms(ctx);
        self.draw_dashboard(ctx);
        self.draw_assistant(ctx);

        // Interactions above may have changed the selection this frame.
        if self.projected_revision != Some(self.explorer.revision()) {
            ctx.request_repaint();
        }
    }

    fn project_if_stale(&mut self) {
        let revision = self.explorer.revision();
        if self.projected_revision == Some(revision) {
            return;
        }
        self.explorer.refresh(&mut self.sidebar);
        self.projected_revision = Some(revision);
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        if ctx.input_mut(|input| input.consume_key(Modifiers::NONE, Key::Escape)) {
            self.contact = None;
            self.submission = None;
            self.detail = None;
        }
        if ctx.input_mut(|input| input.consume_key(Modifiers::COMMAND, Key::F)) {
            self.focus_search = true;
        }
    }

    fn active_toast(&mut self, ctx: &Context) -> Option<String> {
        let now = ctx.input(|input| input.time);
        let toast = self.toast.as_ref()?;
        if now >= toast.expires_at {
            self.toast = None;
            return None;
        }
        ctx.request_repaint_after(Duration::from_secs_f64(toast.expires_at - now));
        Some(toast.message.clone())
    }

    pub(in crate::app) fn show_toast(&mut self, ctx: &Context, message: &str) {
        let now = ctx.input(|input| input.time);
        self.toast = Some(Toast {
            message: message.to_owned(),
            expires_at: now + TOAST_SECS,
        });
    }

    /// Region selection also empties the search box and the filter widgets it resets.
    pub(in crate::app) fn select_region(&mut self, region: &str) {
        self.explorer.select_region(region);
        self.search.clear();
        self.controls.clear_project_filters();
    }

    pub(in crate::app) fn deselect_region(&mut self) {
        self.explorer.deselect_region();
    }

    pub(in crate::app) fn apply_project_controls(&mut self) {
        self.explorer
            .set_project_criteria(self.controls.project_criteria());
    }

    pub(in crate::app) fn apply_company_controls(&mut self) {
        self.explorer
            .set_company_criteria(self.controls.company_criteria());
    }

    pub(in crate::app) fn apply_visibility(&mut self) {
        self.explorer.set_visibility(self.controls.visibility());
    }

    pub(in crate::app) fn clear_filters(&mut self) {
        self.explorer.clear_filters();
        self.search.clear();
        self.controls.clear_project_filters();
    }

    pub(in crate::app) fn reset_all(&mut self) {
        self.explorer.reset();
        self.search.clear();
        self.region_finder.clear();
        self.controls = FilterControls::default();
        self.detail = None;
        self.pan = Vec2::ZERO;
        self.zoom = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::{company, project};
    use crate::selection::ViewKind;

    fn model() -> ViewModel {
        let mut older = project("B", "Bretagne", "Robotique");
        older.year = 2021;
        let directory = Directory::new(
            vec![
                ("Normandie".to_owned(), vec![project("A", "Normandie", "IA")]),
                ("Bretagne".to_owned(), vec![older]),
            ],
            vec![
                company("X", "Île-de-France", "PME"),
                company("Y", "Ile de France", "Startup"),
            ],
        );
        ViewModel::new(LoadOutcome {
            directory,
            notice: None,
        })
    }

    #[test]
    fn options_are_distinct_and_years_descend() {
        let model = model();
        assert_eq!(model.options.project_domains, ["IA", "Robotique"]);
        assert_eq!(model.options.company_domains, ["IA"]);
        assert_eq!(model.options.years, [2023, 2021]);
        assert_eq!(
            model.options.company_regions,
            [("ile-de-france".to_owned(), "Île-de-France".to_owned())]
        );
    }

    #[test]
    fn region_selection_clears_widgets_and_criteria() {
        let mut model = model();
        model.controls.domain = "IA".to_owned();
        model.apply_project_controls();
        model.search = "robot".to_owned();
        model.explorer.set_search_query("robot");

        model.select_region("Normandie");

        assert!(model.search.is_empty());
        assert!(model.controls.domain.is_empty());
        assert_eq!(model.explorer.view().kind, ViewKind::Results);
        assert_eq!(model.explorer.view().title, "Normandie");
    }

    #[test]
    fn deselecting_keeps_search_text() {
        let mut model = model();
        model.select_region("Bretagne");
        model.search = "robot".to_owned();
        model.explorer.set_search_query("robot");

        model.deselect_region();

        assert_eq!(model.explorer.state().selected_region, None);
        assert_eq!(model.search, "robot");
        assert_eq!(model.explorer.view().kind, ViewKind::Results);
    }

    #[test]
    fn reset_returns_to_welcome_and_default_controls() {
        let mut model = model();
        model.select_region("Bretagne");
        model.controls.startup = false;
        model.apply_company_controls();

        model.reset_all();

        assert_eq!(model.explorer.view().kind, ViewKind::Welcome);
        assert!(model.controls.startup);
        assert!(model.explorer.state().company_criteria.startup);
    }

    #[test]
    fn stale_projection_is_refreshed_once() {
        let mut model = model();
        model.project_if_stale();
        assert_eq!(model.projected_revision, Some(model.explorer.revision()));

        model.select_region("Normandie");
        assert_ne!(model.projected_revision, Some(model.explorer.revision()));
        model.project_if_stale();
        assert!(model.sidebar.is_highlighted("Normandie"));
    }
}
