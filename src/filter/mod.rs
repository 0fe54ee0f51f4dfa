mod companies;
mod criteria;
mod normalize;
mod projects;
mod search;

pub use companies::filter_companies;
pub use criteria::{CompanyCriteria, ProjectCriteria, Visibility};
pub use normalize::normalize_region;
pub use projects::filter_projects;
pub use search::{normalize_query, search_projects};
