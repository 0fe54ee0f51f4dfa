use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result, anyhow};

use super::model::Directory;
use super::parse::{parse_companies, parse_grouped_projects};

#[derive(Clone, Debug)]
pub struct DataSources {
    pub projects: PathBuf,
    pub companies: PathBuf,
}

/// Result of the startup load. `notice` is set when the data fell back to empty.
#[derive(Debug)]
pub struct LoadOutcome {
    pub directory: Directory,
    pub notice: Option<String>,
}

pub fn load_directory(sources: &DataSources) -> Result<Directory> {
    let (projects_raw, companies_raw) = thread::scope(|scope| {
        let projects = scope.spawn(|| read_source(&sources.projects));
        let companies = scope.spawn(|| read_source(&sources.companies));
        (
            projects
                .join()
                .map_err(|_| anyhow!("projects reader thread panicked")),
            companies
                .join()
                .map_err(|_| anyhow!("companies reader thread panicked")),
        )
    });

    let projects_raw = projects_raw??;
    let companies_raw = companies_raw??;

    let grouped = parse_grouped_projects(&projects_raw).with_context(|| {
        format!("failed to parse projects from {}", sources.projects.display())
    })?;
    let companies = parse_companies(&companies_raw).with_context(|| {
        format!("failed to parse companies from {}", sources.companies.display())
    })?;

    let directory = Directory::new(grouped, companies);
    tracing::info!(
        regions = directory.regions().len(),
        projects = directory.projects().len(),
        companies = directory.companies().len(),
        "directory loaded"
    );
    Ok(directory)
}

pub fn load_directory_or_empty(sources: &DataSources) -> LoadOutcome {
    match load_directory(sources) {
        Ok(directory) => LoadOutcome {
            directory,
            notice: None,
        },
        Err(error) => {
            tracing::warn!("data load failed, continuing with empty collections: {error:#}");
            LoadOutcome {
                directory: Directory::empty(),
                notice: Some(format!("Données indisponibles : {error:#}")),
            }
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
