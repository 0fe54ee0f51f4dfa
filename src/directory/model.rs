use serde::Deserialize;

use crate::filter::normalize_region;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "en-cours")]
    InProgress,
    #[serde(rename = "planifie")]
    Planned,
    #[serde(rename = "termine")]
    Completed,
}

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::InProgress, Self::Planned, Self::Completed];

    pub fn slug(self) -> &'static str {
        match self {
            Self::InProgress => "en-cours",
            Self::Planned => "planifie",
            Self::Completed => "termine",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "En cours",
            Self::Planned => "Planifié",
            Self::Completed => "Terminé",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.slug() == value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub region: String,
    pub institution: String,
    pub domain: String,
    pub status: ProjectStatus,
    pub year: i32,
    pub budget: String,
    pub budget_value: f64,
    pub kind: String,
    pub description: String,
    pub website: String,
    pub contact: String,
}

impl Project {
    /// Name of the downloadable project sheet, relative to the data directory.
    pub fn fiche_file_name(&self) -> String {
        format!("fiches/{}.pdf", self.title.to_lowercase().replace(' ', "_"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalType {
    Startup,
    Pme,
    Large,
    Other,
}

impl LegalType {
    pub fn classify(kind: &str) -> Self {
        let kind = kind.to_lowercase();
        if kind == "startup" {
            Self::Startup
        } else if kind == "pme" {
            Self::Pme
        } else if kind.contains("grande") {
            Self::Large
        } else {
            Self::Other
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default, rename = "Expertises particulires", alias = "expertise")]
    pub expertise: Option<String>,
    #[serde(default, rename = "Adresse", alias = "address")]
    pub address: Option<String>,
    #[serde(default, rename = "Contact", alias = "contact")]
    pub contact: Option<String>,
    #[serde(default, rename = "Mail", alias = "mail")]
    pub mail: Option<String>,
    #[serde(default, rename = "Site web", alias = "website")]
    pub website: Option<String>,
}

impl Company {
    pub fn legal_type(&self) -> LegalType {
        LegalType::classify(&self.kind)
    }

    pub fn region_slug(&self) -> String {
        normalize_region(&self.region)
    }
}

/// Loaded projects and companies. Read-only for the rest of the session.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    regions: Vec<String>,
    projects: Vec<Project>,
    companies: Vec<Company>,
}

impl Directory {
    pub fn new(grouped: Vec<(String, Vec<Project>)>, companies: Vec<Company>) -> Self {
        let regions = grouped.iter().map(|(region, _)| region.clone()).collect();
        Self {
            regions,
            projects: flatten(grouped),
            companies,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.companies.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Region keys in the order they appeared in the projects source.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn region_projects<'a>(&'a self, region: &str) -> impl Iterator<Item = &'a Project> {
        self.projects
            .iter()
            .filter(move |project| project.region == region)
    }

    pub fn region_project_count(&self, region: &str) -> usize {
        self.region_projects(region).count()
    }
}

/// Concatenates grouped projects in key order, stamping each with its group key.
pub fn flatten(grouped: Vec<(String, Vec<Project>)>) -> Vec<Project> {
    let total = grouped.iter().map(|(_, projects)| projects.len()).sum();
    let mut flat = Vec::with_capacity(total);
    for (region, projects) in grouped {
        flat.extend(projects.into_iter().map(|mut project| {
            project.region = region.clone();
            project
        }));
    }
    flat
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(title: &str, region: &str, domain: &str) -> Project {
        Project {
            title: title.to_owned(),
            region: region.to_owned(),
            institution: String::new(),
            domain: domain.to_owned(),
            status: ProjectStatus::InProgress,
            year: 2023,
            budget: String::new(),
            budget_value: 0.0,
            kind: String::new(),
            description: String::new(),
            website: String::new(),
            contact: String::new(),
        }
    }

    pub(crate) fn company(name: &str, region: &str, kind: &str) -> Company {
        Company {
            name: name.to_owned(),
            domain: "IA".to_owned(),
            region: region.to_owned(),
            kind: kind.to_owned(),
            lat: 48.85,
            lon: 2.35,
            expertise: None,
            address: None,
            contact: None,
            mail: None,
            website: None,
        }
    }

    #[test]
    fn flatten_assigns_group_key_and_keeps_order() {
        let grouped = vec![
            (
                "Normandie".to_owned(),
                vec![project("A", "", "IA"), project("B", "stale", "IA")],
            ),
            ("Bretagne".to_owned(), vec![project("C", "", "Santé")]),
        ];

        let flat = flatten(grouped);
        let titles = flat.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(flat[1].region, "Normandie");
        assert_eq!(flat[2].region, "Bretagne");
    }

    #[test]
    fn directory_keeps_region_key_order() {
        let directory = Directory::new(
            vec![
                ("Occitanie".to_owned(), vec![project("A", "", "IA")]),
                ("Bretagne".to_owned(), Vec::new()),
            ],
            Vec::new(),
        );

        assert_eq!(directory.regions(), ["Occitanie", "Bretagne"]);
        assert_eq!(directory.region_project_count("Occitanie"), 1);
        assert_eq!(directory.region_project_count("Bretagne"), 0);
        assert!(!directory.is_empty());
        assert!(Directory::empty().is_empty());
    }

    #[test]
    fn legal_type_matches_large_by_substring() {
        assert_eq!(LegalType::classify("Startup"), LegalType::Startup);
        assert_eq!(LegalType::classify("PME"), LegalType::Pme);
        assert_eq!(LegalType::classify("Grande Entreprise"), LegalType::Large);
        assert_eq!(LegalType::classify("grande-entreprise"), LegalType::Large);
        assert_eq!(LegalType::classify("ETI"), LegalType::Other);
    }

    #[test]
    fn status_slugs_round_trip_and_fiche_name() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_slug(status.slug()), Some(status));
        }
        assert_eq!(ProjectStatus::from_slug("abandonne"), None);
        assert_eq!(ProjectStatus::Planned.label(), "Planifié");

        let sheet = project("Vision Marine Autonome", "Bretagne", "IA");
        assert_eq!(sheet.fiche_file_name(), "fiches/vision_marine_autonome.pdf");
    }
}
