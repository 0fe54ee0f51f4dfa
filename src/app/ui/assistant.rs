use eframe::egui::{self, Align, Color32, Context, Key, Layout, RichText};

use crate::assistant::Speaker;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_assistant(&mut self, ctx: &Context) {
        if !self.show_assistant {
            return;
        }

        let mut submit = false;
        egui::Window::new("Assistant")
            .open(&mut self.show_assistant)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("assistant_scroll")
                    .max_height(260.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if self.assistant.messages().is_empty() {
                            ui.weak("Posez une question sur les projets, les entreprises ou les domaines.");
                        }
                        for message in self.assistant.messages() {
                            match message.speaker {
                                Speaker::User => {
                                    ui.with_layout(Layout::top_down(Align::Max), |ui| {
                                        ui.label(
                                            RichText::new(&message.text)
                                                .color(Color32::from_rgb(147, 197, 253)),
                                        );
                                    });
                                }
                                Speaker::Assistant => {
                                    ui.label(&message.text);
                                }
                            }
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    let input = ui.text_edit_singleline(&mut self.assistant_input);
                    let entered =
                        input.lost_focus() && ui.input(|state| state.key_pressed(Key::Enter));
                    if entered || ui.button("Envoyer").clicked() {
                        submit = true;
                        input.request_focus();
                    }
                });
            });

        if submit && self.assistant.send(&self.stats, &self.assistant_input) {
            self.assistant_input.clear();
        }
    }
}
