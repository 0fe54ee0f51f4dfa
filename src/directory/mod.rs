mod load;
mod model;
mod parse;
mod stats;

pub use load::{DataSources, LoadOutcome, load_directory_or_empty};
pub use model::{Company, Directory, LegalType, Project, ProjectStatus};
pub use stats::DirectoryStats;

#[cfg(test)]
pub(crate) use model::tests as fixtures;
