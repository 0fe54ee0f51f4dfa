use std::sync::mpsc::{self, Receiver};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::assistant::Assistant;
use crate::directory::{
    Company, DataSources, DirectoryStats, LoadOutcome, Project, load_directory_or_empty,
};
use crate::selection::Explorer;

mod map;
mod render_utils;
mod ui;

use self::ui::forms::{ContactForm, SubmissionForm};
use self::ui::sidebar::Sidebar;

pub struct AtlasApp {
    state: AppState,
}

enum AppState {
    Loading { rx: Receiver<LoadOutcome> },
    Ready(Box<ViewModel>),
}

struct ViewModel {
    explorer: Explorer,
    stats: DirectoryStats,
    load_notice: Option<String>,
    sidebar: Sidebar,
    projected_revision: Option<u64>,
    search: String,
    focus_search: bool,
    filter_tab: FilterTab,
    controls: FilterControls,
    options: FilterOptions,
    region_finder: String,
    pan: Vec2,
    zoom: f32,
    hovered_region: Option<String>,
    detail: Option<Detail>,
    contact: Option<ContactForm>,
    submission: Option<SubmissionForm>,
    show_dashboard: bool,
    assistant: Assistant,
    assistant_input: String,
    show_assistant: bool,
    toast: Option<Toast>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterTab {
    Projects,
    Companies,
}

/// Raw widget values, turned into criteria whenever one of them changes.
#[derive(Clone, Debug)]
struct FilterControls {
    domain: String,
    budget: String,
    status: String,
    year: String,
    company_domain: String,
    company_region: String,
    startup: bool,
    pme: bool,
    large: bool,
    laboratories: bool,
    industries: bool,
    projects: bool,
}

/// Choices offered by the filter combos, derived once from the loaded data.
struct FilterOptions {
    project_domains: Vec<String>,
    years: Vec<i32>,
    company_domains: Vec<String>,
    company_regions: Vec<(String, String)>,
}

enum Detail {
    Project(Box<Project>),
    Company(Box<Company>),
}

struct Toast {
    message: String,
    expires_at: f64,
}

impl AtlasApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, sources: DataSources) -> Self {
        Self {
            state: Self::start_load(sources),
        }
    }

    fn start_load(sources: DataSources) -> AppState {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(load_directory_or_empty(&sources));
        });

        AppState::Loading { rx }
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(outcome) => {
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(outcome))));
                    }
                    Err(mpsc::TryRecvError::Disconnected) => {
                        tracing::error!("background load worker disconnected");
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(
                            LoadOutcome {
                                directory: Default::default(),
                                notice: Some("Chargement interrompu".to_owned()),
                            },
                        ))));
                    }
                    Err(mpsc::TryRecvError::Empty) => ctx.request_repaint(),
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Chargement des projets et entreprises...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
