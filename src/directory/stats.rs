use super::model::Directory;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryStats {
    pub total_projects: usize,
    pub total_companies: usize,
    pub projects_by_domain: Vec<(String, usize)>,
    pub companies_by_domain: Vec<(String, usize)>,
}

impl DirectoryStats {
    pub fn collect(directory: &Directory) -> Self {
        Self {
            total_projects: directory.projects().len(),
            total_companies: directory.companies().len(),
            projects_by_domain: count_by_first_seen(
                directory.projects().iter().map(|p| p.domain.as_str()),
            ),
            companies_by_domain: count_by_first_seen(
                directory.companies().iter().map(|c| c.domain.as_str()),
            ),
        }
    }
}

fn count_by_first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(key, _)| key == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_owned(), 1)),
        }
    }
    counts
}
