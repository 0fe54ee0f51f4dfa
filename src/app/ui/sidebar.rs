use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::directory::{Company, Project, ProjectStatus};
use crate::util::{results_count_text, truncate_chars};
use crate::view::Renderer;

use super::super::ViewModel;

const DESCRIPTION_PREVIEW_CHARS: usize = 220;

/// Right-hand result panel. Receives views through [`Renderer`] and keeps
/// them until the next projection.
pub(in crate::app) struct Sidebar {
    title: String,
    subtitle: String,
    body: SidebarBody,
    highlighted: BTreeSet<String>,
}

enum SidebarBody {
    Welcome,
    Empty,
    Projects(Vec<Project>),
    Company(Box<Company>),
}

enum CardAction {
    Details(Project),
    CompanyDetails(Company),
    Contact(String),
}

impl Sidebar {
    pub(in crate::app) fn new() -> Self {
        let mut sidebar = Self {
            title: String::new(),
            subtitle: String::new(),
            body: SidebarBody::Welcome,
            highlighted: BTreeSet::new(),
        };
        sidebar.render_welcome();
        sidebar
    }

    pub(in crate::app) fn is_highlighted(&self, region: &str) -> bool {
        self.highlighted.contains(region)
    }

    pub(in crate::app) fn show_company(&mut self, company: &Company) {
        self.title = company.name.clone();
        self.subtitle = "Détails de l'entreprise".to_owned();
        self.body = SidebarBody::Company(Box::new(company.clone()));
    }
}

impl Renderer for Sidebar {
    fn render_result_list(&mut self, title: &str, results: &[&Project]) {
        self.title = title.to_owned();
        self.subtitle = results_count_text(results.len());
        self.body = SidebarBody::Projects(results.iter().map(|p| (*p).clone()).collect());
    }

    fn highlight_regions(&mut self, regions: &BTreeSet<String>) {
        self.highlighted = regions.clone();
    }

    fn render_welcome(&mut self) {
        self.title = "Recherche interactive".to_owned();
        self.subtitle = "Sélectionnez une région ou effectuez une recherche".to_owned();
        self.body = SidebarBody::Welcome;
    }

    fn render_empty(&mut self, title: &str) {
        self.title = title.to_owned();
        self.subtitle = results_count_text(0);
        self.body = SidebarBody::Empty;
    }
}

fn status_color(status: ProjectStatus) -> Color32 {
    match status {
        ProjectStatus::InProgress => Color32::from_rgb(16, 185, 129),
        ProjectStatus::Planned => Color32::from_rgb(59, 130, 246),
        ProjectStatus::Completed => Color32::from_rgb(148, 163, 184),
    }
}

fn project_card(ui: &mut Ui, project: &Project) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&project.title).strong());
            ui.label(
                RichText::new(project.status.label())
                    .small()
                    .color(status_color(project.status)),
            );
        });
        ui.label(format!("{} · {}", project.institution, project.year));
        ui.small(format!("{} • {}", project.domain, project.kind));
        ui.label(truncate_chars(&project.description, DESCRIPTION_PREVIEW_CHARS));
        ui.label(format!("Budget : {}", project.budget));

        ui.horizontal_wrapped(|ui| {
            if !project.website.is_empty() {
                ui.hyperlink_to("Site web", &project.website);
            }
            if ui.button("Contact").clicked() {
                action = Some(CardAction::Contact(project.title.clone()));
            }
            if ui.button("Détails").clicked() {
                action = Some(CardAction::Details(project.clone()));
            }
        });
        ui.small(format!("Fiche PDF : {}", project.fiche_file_name()));
    });

    action
}

fn optional_line(ui: &mut Ui, label: &str, value: Option<&str>, fallback: &str) {
    ui.label(format!("{label} : {}", value.unwrap_or(fallback)));
}

fn company_card(ui: &mut Ui, company: &Company) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&company.name).strong());
        ui.label(&company.region);
        ui.small(format!("{} • {}", company.domain, company.kind));
        ui.separator();
        optional_line(ui, "Expertises", company.expertise.as_deref(), "Non spécifiées");
        optional_line(ui, "Adresse", company.address.as_deref(), "Non spécifiée");
        optional_line(ui, "Contact", company.contact.as_deref(), "Non spécifié");
        match company.mail.as_deref() {
            Some(mail) => {
                ui.horizontal(|ui| {
                    ui.label("Mail :");
                    ui.hyperlink_to(mail, format!("mailto:{mail}"));
                });
            }
            None => optional_line(ui, "Mail", None, "Non spécifié"),
        }

        ui.horizontal_wrapped(|ui| {
            if let Some(website) = company.website.as_deref() {
                ui.hyperlink_to("Site web", website);
            }
            if ui.button("Contact").clicked() {
                action = Some(CardAction::Contact(company.name.clone()));
            }
            if ui.button("Détails").clicked() {
                action = Some(CardAction::CompanyDetails(company.clone()));
            }
        });
    });

    action
}

fn welcome_text(ui: &mut Ui) {
    ui.label(RichText::new("Comment utiliser :").strong());
    ui.label("• Utilisez la barre de recherche pour trouver des projets spécifiques");
    ui.label("• Filtrez par domaine, budget, statut ou année");
    ui.label("• Cliquez sur une région pour voir tous ses projets");
    ui.label("• Contactez directement les équipes de recherche");
}

impl ViewModel {
    pub(in crate::app) fn draw_sidebar(&mut self, ui: &mut Ui) {
        ui.heading(&self.sidebar.title);
        ui.label(&self.sidebar.subtitle);
        ui.separator();

        let mut action = None;
        egui::ScrollArea::vertical()
            .id_salt("sidebar_results_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| match &self.sidebar.body {
                SidebarBody::Welcome => welcome_text(ui),
                SidebarBody::Empty => {
                    ui.label(RichText::new("Aucun projet trouvé").strong());
                    ui.label("Essayez de modifier vos critères de recherche");
                }
                SidebarBody::Projects(projects) => {
                    for project in projects {
                        if let Some(next) = project_card(ui, project) {
                            action = Some(next);
                        }
                        ui.add_space(6.0);
                    }
                }
                SidebarBody::Company(company) => action = company_card(ui, company),
            });

        match action {
            Some(CardAction::Details(project)) => self.open_project_detail(&project),
            Some(CardAction::CompanyDetails(company)) => self.open_company_detail(&company),
            Some(CardAction::Contact(context)) => self.open_contact(&context),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::{company, project};

    #[test]
    fn renderer_calls_update_panel_content() {
        let mut sidebar = Sidebar::new();
        assert!(matches!(sidebar.body, SidebarBody::Welcome));

        let a = project("A", "Normandie", "IA");
        sidebar.render_result_list("Normandie", &[&a]);
        assert_eq!(sidebar.title, "Normandie");
        assert_eq!(sidebar.subtitle, "1 projet(s) trouvé(s)");
        assert!(matches!(&sidebar.body, SidebarBody::Projects(list) if list.len() == 1));

        sidebar.highlight_regions(&BTreeSet::from(["Normandie".to_owned()]));
        assert!(sidebar.is_highlighted("Normandie"));
        assert!(!sidebar.is_highlighted("Bretagne"));

        sidebar.render_empty("Projets");
        assert_eq!(sidebar.subtitle, "0 projet(s) trouvé(s)");
        assert!(matches!(sidebar.body, SidebarBody::Empty));
    }

    #[test]
    fn company_details_replace_results() {
        let mut sidebar = Sidebar::new();
        sidebar.show_company(&company("X", "Normandie", "PME"));
        assert_eq!(sidebar.title, "X");
        assert!(matches!(sidebar.body, SidebarBody::Company(_)));
    }
}
