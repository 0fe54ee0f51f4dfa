use std::collections::BTreeSet;

use crate::directory::{Company, Directory, Project};
use crate::filter::{
    CompanyCriteria, ProjectCriteria, Visibility, filter_companies, filter_projects,
    normalize_query, search_projects,
};
use crate::view::{Renderer, project_view};

pub const HIDDEN_TITLE: &str = "Projets";
pub const FILTERED_TITLE: &str = "Résultats filtrés";

/// Everything the user has chosen, as one value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub selected_region: Option<String>,
    pub search_query: String,
    pub project_criteria: ProjectCriteria,
    pub company_criteria: CompanyCriteria,
    pub visibility: Visibility,
}

/// Where the unfiltered project set comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BaseSet {
    Search(String),
    Region(String),
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Results,
    Hidden,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedView<'a> {
    pub kind: ViewKind,
    pub title: String,
    pub results: Vec<&'a Project>,
    pub highlighted_regions: BTreeSet<String>,
}

impl SelectionState {
    /// A non-empty search wins over a selected region, which wins over all projects.
    pub fn base_set(&self) -> BaseSet {
        let query = normalize_query(&self.search_query);
        if !query.is_empty() {
            BaseSet::Search(query)
        } else if let Some(region) = &self.selected_region {
            BaseSet::Region(region.clone())
        } else {
            BaseSet::All
        }
    }
}

pub fn base_projects<'a>(directory: &'a Directory, base: &BaseSet) -> Vec<&'a Project> {
    match base {
        BaseSet::Search(query) => search_projects(directory.projects(), query),
        BaseSet::Region(region) => directory.region_projects(region).collect(),
        BaseSet::All => directory.projects().iter().collect(),
    }
}

pub fn resolve<'a>(directory: &'a Directory, state: &SelectionState) -> ResolvedView<'a> {
    let base = state.base_set();

    if !state.visibility.projects {
        return ResolvedView {
            kind: ViewKind::Hidden,
            title: HIDDEN_TITLE.to_owned(),
            results: Vec::new(),
            highlighted_regions: BTreeSet::new(),
        };
    }

    let filtered = state.project_criteria.is_active();
    if base == BaseSet::All && !filtered {
        return ResolvedView {
            kind: ViewKind::Welcome,
            title: String::new(),
            results: Vec::new(),
            highlighted_regions: BTreeSet::new(),
        };
    }

    let results = filter_projects(base_projects(directory, &base), &state.project_criteria);
    let title = match (&base, filtered) {
        (BaseSet::Search(_), true) => FILTERED_TITLE.to_owned(),
        (BaseSet::Search(query), false) => format!("Résultats de recherche: \"{query}\""),
        (BaseSet::Region(region), true) => format!("{region} - Filtré"),
        (BaseSet::Region(region), false) => region.clone(),
        (BaseSet::All, _) => FILTERED_TITLE.to_owned(),
    };
    let highlighted_regions = results.iter().map(|p| p.region.clone()).collect();

    ResolvedView {
        kind: ViewKind::Results,
        title,
        results,
        highlighted_regions,
    }
}

pub fn resolve_companies<'a>(directory: &'a Directory, state: &SelectionState) -> Vec<&'a Company> {
    filter_companies(
        directory.companies(),
        &state.company_criteria,
        state.visibility.industries,
    )
}

/// Owns the loaded directory and the selection; every user interaction goes
/// through one of its mutation methods.
pub struct Explorer {
    directory: Directory,
    state: SelectionState,
    revision: u64,
}

impl Explorer {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            state: SelectionState::default(),
            revision: 0,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Increases on every state change that can alter the resolved view.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn update(&mut self, apply: impl FnOnce(&mut SelectionState)) {
        let before = self.state.clone();
        apply(&mut self.state);
        if self.state != before {
            self.revision = self.revision.wrapping_add(1);
            tracing::debug!(revision = self.revision, state = ?self.state, "selection changed");
        }
    }

    /// Selecting a region resets search and domain filters, keeping the region.
    pub fn select_region(&mut self, region: &str) {
        self.update(|state| {
            state.selected_region = Some(region.to_owned());
            state.search_query.clear();
            state.project_criteria = ProjectCriteria::default();
            state.company_criteria.domain = None;
        });
    }

    pub fn deselect_region(&mut self) {
        self.update(|state| state.selected_region = None);
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.update(|state| {
            if state.search_query != query {
                state.search_query = query.to_owned();
            }
        });
    }

    pub fn set_project_criteria(&mut self, criteria: ProjectCriteria) {
        self.update(|state| state.project_criteria = criteria);
    }

    pub fn set_company_criteria(&mut self, criteria: CompanyCriteria) {
        self.update(|state| state.company_criteria = criteria);
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.update(|state| state.visibility = visibility);
    }

    /// Clears search and criteria. A selected region stays selected.
    pub fn clear_filters(&mut self) {
        self.update(|state| {
            state.search_query.clear();
            state.project_criteria = ProjectCriteria::default();
            state.company_criteria.domain = None;
        });
    }

    /// Back to the welcome state.
    pub fn reset(&mut self) {
        self.update(|state| *state = SelectionState::default());
    }

    pub fn view(&self) -> ResolvedView<'_> {
        resolve(&self.directory, &self.state)
    }

    pub fn companies(&self) -> Vec<&Company> {
        resolve_companies(&self.directory, &self.state)
    }

    /// Projects whose laboratory pins should be drawn.
    pub fn laboratory_projects(&self) -> &[Project] {
        if self.state.visibility.laboratories {
            self.directory.projects()
        } else {
            &[]
        }
    }

    pub fn refresh(&self, renderer: &mut impl Renderer) {
        project_view(&self.view(), renderer);
    }
}
