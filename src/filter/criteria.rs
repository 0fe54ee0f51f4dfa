use crate::directory::{LegalType, ProjectStatus};

/// Budget bounds in the same unit as `Project::budget_value`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl BudgetRange {
    /// Parses `"min-max"`, `"min-+"` or a bare `"min"`.
    ///
    /// An unparseable or missing max leaves the range open-ended. An unparseable
    /// min yields `None`, which callers treat as no budget filter at all.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let (min_raw, max_raw) = match token.split_once('-') {
            Some((min, max)) => (min, Some(max)),
            None => (token, None),
        };

        let min = min_raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let max = max_raw
            .map(str::trim)
            .filter(|raw| *raw != "+")
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|v| !v.is_nan());

        Some(Self { min, max })
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && self.max.is_none_or(|max| value <= max)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectCriteria {
    pub domain: Option<String>,
    pub budget: Option<BudgetRange>,
    pub status: Option<ProjectStatus>,
    pub year: Option<i32>,
}

impl ProjectCriteria {
    /// Builds criteria from raw control values. Empty or malformed values mean
    /// "no filter" for that field.
    pub fn from_controls(domain: &str, budget: &str, status: &str, year: &str) -> Self {
        Self {
            domain: non_empty(domain),
            budget: BudgetRange::parse(budget),
            status: ProjectStatus::from_slug(status.trim()),
            year: year.trim().parse::<i32>().ok(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.domain.is_some() || self.budget.is_some() || self.status.is_some() || self.year.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompanyCriteria {
    pub domain: Option<String>,
    /// Canonical region slug, compared against normalized company regions.
    pub region: Option<String>,
    pub startup: bool,
    pub pme: bool,
    pub large: bool,
}

impl Default for CompanyCriteria {
    fn default() -> Self {
        Self {
            domain: None,
            region: None,
            startup: true,
            pme: true,
            large: true,
        }
    }
}

impl CompanyCriteria {
    pub fn allows(&self, legal_type: LegalType) -> bool {
        match legal_type {
            LegalType::Startup => self.startup,
            LegalType::Pme => self.pme,
            LegalType::Large => self.large,
            LegalType::Other => true,
        }
    }
}

/// Category-wide show/hide switches, distinct from narrowing filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub laboratories: bool,
    pub industries: bool,
    pub projects: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            laboratories: true,
            industries: true,
            projects: true,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_closed_and_open_ranges() {
        assert_eq!(
            BudgetRange::parse("1-3"),
            Some(BudgetRange { min: 1.0, max: Some(3.0) })
        );
        assert_eq!(
            BudgetRange::parse("3-+"),
            Some(BudgetRange { min: 3.0, max: None })
        );
        assert_eq!(
            BudgetRange::parse("0.5-1.5"),
            Some(BudgetRange { min: 0.5, max: Some(1.5) })
        );
    }

    #[test]
    fn bare_minimum_and_garbage_max_are_open_ended() {
        assert_eq!(BudgetRange::parse("3"), Some(BudgetRange { min: 3.0, max: None }));
        assert_eq!(BudgetRange::parse("7"), Some(BudgetRange { min: 7.0, max: None }));
        assert_eq!(
            BudgetRange::parse("2-lots"),
            Some(BudgetRange { min: 2.0, max: None })
        );
    }

    #[test]
    fn unparseable_minimum_disables_the_filter() {
        assert_eq!(BudgetRange::parse(""), None);
        assert_eq!(BudgetRange::parse("cheap-3"), None);
        assert_eq!(BudgetRange::parse("NaN-3"), None);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = BudgetRange::parse("1-3").expect("valid");
        assert!(range.contains(1.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(3.01));
        assert!(!range.contains(0.99));
        assert!(BudgetRange::parse("3-+").expect("valid").contains(1e9));
    }

    #[test]
    fn controls_degrade_to_no_filter() {
        let criteria = ProjectCriteria::from_controls("", "oops", "unknown", "20x3");
        assert_eq!(criteria, ProjectCriteria::default());
        assert!(!criteria.is_active());

        let criteria = ProjectCriteria::from_controls("IA", "", "termine", " 2022 ");
        assert_eq!(criteria.domain.as_deref(), Some("IA"));
        assert_eq!(criteria.status, Some(ProjectStatus::Completed));
        assert_eq!(criteria.year, Some(2022));
        assert!(criteria.is_active());
    }
}
