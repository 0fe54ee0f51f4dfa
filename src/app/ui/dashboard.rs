use eframe::egui::{self, Context, RichText, Ui};

use super::super::ViewModel;

fn domain_bars(ui: &mut Ui, heading: &str, counts: &[(String, usize)], total: usize) {
    ui.label(RichText::new(heading).strong());
    if counts.is_empty() {
        ui.label("Aucune donnée");
        return;
    }

    for (domain, count) in counts {
        let fraction = if total == 0 {
            0.0
        } else {
            *count as f32 / total as f32
        };
        let name = if domain.is_empty() { "Non renseigné" } else { domain };
        ui.add(
            egui::ProgressBar::new(fraction)
                .desired_width(280.0)
                .text(format!("{name} ({count})")),
        );
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_dashboard(&mut self, ctx: &Context) {
        if !self.show_dashboard {
            return;
        }

        let stats = &self.stats;
        egui::Window::new("Tableau de bord")
            .open(&mut self.show_dashboard)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Projets : {}", stats.total_projects));
                    ui.separator();
                    ui.label(format!("Entreprises : {}", stats.total_companies));
                });
                ui.separator();
                domain_bars(
                    ui,
                    "Projets par domaine",
                    &stats.projects_by_domain,
                    stats.total_projects,
                );
                ui.add_space(8.0);
                domain_bars(
                    ui,
                    "Entreprises par domaine",
                    &stats.companies_by_domain,
                    stats.total_companies,
                );
            });
    }
}
