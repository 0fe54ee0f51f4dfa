use eframe::egui::{self, Context, RichText, Ui};

use crate::directory::{Company, Project};

use super::super::{Detail, ViewModel};

fn field(ui: &mut Ui, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(format!("{label} :")).strong());
        ui.label(value);
    });
}

fn project_details(ui: &mut Ui, project: &Project) -> bool {
    field(ui, "Région", &project.region);
    field(ui, "Institution", &project.institution);
    field(ui, "Domaine", &project.domain);
    field(ui, "Type", &project.kind);
    field(ui, "Statut", project.status.label());
    field(ui, "Année", &project.year.to_string());
    field(ui, "Budget", &project.budget);
    ui.separator();
    ui.label(&project.description);
    ui.separator();
    field(ui, "Contact", &project.contact);
    field(ui, "Fiche", &project.fiche_file_name());

    let mut contact_requested = false;
    ui.horizontal(|ui| {
        if !project.website.is_empty() {
            ui.hyperlink_to("Site web", &project.website);
        }
        contact_requested = ui.button("Contacter l'équipe").clicked();
    });
    contact_requested
}

fn company_details(ui: &mut Ui, company: &Company) -> bool {
    field(ui, "Région", &company.region);
    field(ui, "Domaine", &company.domain);
    field(ui, "Type", &company.kind);
    field(ui, "Expertises", company.expertise.as_deref().unwrap_or_default());
    field(ui, "Adresse", company.address.as_deref().unwrap_or_default());
    field(ui, "Contact", company.contact.as_deref().unwrap_or_default());
    field(ui, "Mail", company.mail.as_deref().unwrap_or_default());
    field(ui, "Coordonnées", &format!("{:.4}, {:.4}", company.lat, company.lon));

    let mut contact_requested = false;
    ui.horizontal(|ui| {
        if let Some(website) = company.website.as_deref() {
            ui.hyperlink_to("Site web", website);
        }
        contact_requested = ui.button("Contacter").clicked();
    });
    contact_requested
}

impl ViewModel {
    pub(in crate::app) fn open_project_detail(&mut self, project: &Project) {
        self.detail = Some(Detail::Project(Box::new(project.clone())));
    }

    pub(in crate::app) fn open_company_detail(&mut self, company: &Company) {
        self.detail = Some(Detail::Company(Box::new(company.clone())));
    }

    pub(in crate::app) fn draw_detail(&mut self, ctx: &Context) {
        let Some(detail) = &self.detail else {
            return;
        };

        let (title, context) = match detail {
            Detail::Project(project) => (project.title.clone(), project.title.clone()),
            Detail::Company(company) => (company.name.clone(), company.name.clone()),
        };

        let mut open = true;
        let mut contact_requested = false;
        egui::Window::new(title)
            .id(egui::Id::new("detail_window"))
            .open(&mut open)
            .default_width(420.0)
            .show(ctx, |ui| {
                contact_requested = match detail {
                    Detail::Project(project) => project_details(ui, project),
                    Detail::Company(company) => company_details(ui, company),
                };
            });

        if contact_requested {
            self.open_contact(&context);
        }
        if !open {
            self.detail = None;
        }
    }
}
