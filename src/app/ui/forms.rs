use eframe::egui::{self, Context};

use super::super::ViewModel;

/// Local-only contact form. Submitting never leaves the application.
#[derive(Clone, Debug, Default)]
pub(in crate::app) struct ContactForm {
    context: String,
    name: String,
    email: String,
    message: String,
}

#[derive(Clone, Debug, Default)]
pub(in crate::app) struct SubmissionForm {
    title: String,
    institution: String,
    region: String,
    description: String,
    contact: String,
}

enum FormOutcome {
    Open,
    Closed,
    Submitted,
}

impl ContactForm {
    pub(in crate::app) fn new(context: &str) -> Self {
        Self {
            context: context.to_owned(),
            ..Default::default()
        }
    }

    fn window_title(&self) -> String {
        if self.context.is_empty() {
            "Contacter l'équipe".to_owned()
        } else {
            format!("Contacter l'équipe : {}", self.context)
        }
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }
}

impl SubmissionForm {
    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.institution.trim().is_empty()
    }
}

fn labeled_line(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.text_edit_singleline(value);
}

impl ViewModel {
    pub(in crate::app) fn open_contact(&mut self, context: &str) {
        self.contact = Some(ContactForm::new(context));
    }

    pub(in crate::app) fn open_submission(&mut self) {
        self.submission = Some(SubmissionForm::default());
    }

    pub(in crate::app) fn draw_forms(&mut self, ctx: &Context) {
        if let Some(form) = self.contact.as_mut() {
            let mut outcome = FormOutcome::Open;
            let mut open = true;
            egui::Window::new(form.window_title())
                .id(egui::Id::new("contact_window"))
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    labeled_line(ui, "Nom", &mut form.name);
                    labeled_line(ui, "Email", &mut form.email);
                    ui.label("Message");
                    ui.text_edit_multiline(&mut form.message);
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(form.is_complete(), egui::Button::new("Envoyer"))
                            .clicked()
                        {
                            outcome = FormOutcome::Submitted;
                        }
                        if ui.button("Annuler").clicked() {
                            outcome = FormOutcome::Closed;
                        }
                    });
                });

            if !open {
                outcome = FormOutcome::Closed;
            }
            match outcome {
                FormOutcome::Open => {}
                FormOutcome::Closed => self.contact = None,
                FormOutcome::Submitted => {
                    tracing::info!(context = %form.context, "contact message recorded locally");
                    self.contact = None;
                    self.show_toast(ctx, "Message envoyé avec succès !");
                }
            }
        }

        if let Some(form) = self.submission.as_mut() {
            let mut outcome = FormOutcome::Open;
            let mut open = true;
            egui::Window::new("Soumettre un projet")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    labeled_line(ui, "Titre du projet", &mut form.title);
                    labeled_line(ui, "Institution", &mut form.institution);
                    labeled_line(ui, "Région", &mut form.region);
                    labeled_line(ui, "Contact", &mut form.contact);
                    ui.label("Description");
                    ui.text_edit_multiline(&mut form.description);
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(form.is_complete(), egui::Button::new("Soumettre"))
                            .clicked()
                        {
                            outcome = FormOutcome::Submitted;
                        }
                        if ui.button("Annuler").clicked() {
                            outcome = FormOutcome::Closed;
                        }
                    });
                });

            if !open {
                outcome = FormOutcome::Closed;
            }
            match outcome {
                FormOutcome::Open => {}
                FormOutcome::Closed => self.submission = None,
                FormOutcome::Submitted => {
                    tracing::info!(title = %form.title, "project submission recorded locally");
                    self.submission = None;
                    self.show_toast(ctx, "Projet soumis avec succès !");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_title_includes_context() {
        assert_eq!(ContactForm::new("").window_title(), "Contacter l'équipe");
        assert_eq!(
            ContactForm::new("Projet A").window_title(),
            "Contacter l'équipe : Projet A"
        );
    }

    #[test]
    fn forms_require_their_key_fields() {
        let mut contact = ContactForm::new("A");
        assert!(!contact.is_complete());
        contact.name = "Camille".to_owned();
        contact.email = "camille@example.org".to_owned();
        contact.message = "Bonjour".to_owned();
        assert!(contact.is_complete());

        let mut submission = SubmissionForm::default();
        submission.title = "Projet".to_owned();
        assert!(!submission.is_complete());
        submission.institution = "INRIA Paris".to_owned();
        assert!(submission.is_complete());
    }
}
