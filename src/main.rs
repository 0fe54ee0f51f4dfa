mod app;
mod assistant;
mod directory;
mod filter;
mod selection;
mod util;
mod view;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::directory::DataSources;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Projects grouped by region, as a JSON object.
    #[arg(long, default_value = "data.json")]
    projects: PathBuf,
    /// Flat JSON array of companies.
    #[arg(long, default_value = "companies.json")]
    companies: PathBuf,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let sources = DataSources {
        projects: args.projects,
        companies: args.companies,
    };
    tracing::info!(?sources, "starting research atlas");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "research-atlas",
        options,
        Box::new(move |cc| Ok(Box::new(app::AtlasApp::new(cc, sources.clone())))),
    )
}
