use crate::directory::Project;

use super::criteria::ProjectCriteria;

/// Keeps the projects of `base` that satisfy every set field of `criteria`,
/// preserving input order.
pub fn filter_projects<'a, I>(base: I, criteria: &ProjectCriteria) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    base.into_iter()
        .filter(|project| matches_project(project, criteria))
        .collect()
}

pub fn matches_project(project: &Project, criteria: &ProjectCriteria) -> bool {
    if let Some(domain) = &criteria.domain
        && &project.domain != domain
    {
        return false;
    }

    if let Some(status) = criteria.status
        && project.status != status
    {
        return false;
    }

    if let Some(year) = criteria.year
        && project.year != year
    {
        return false;
    }

    if let Some(budget) = criteria.budget
        && !budget.contains(project.budget_value)
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::ProjectStatus;
    use crate::directory::fixtures::project;
    use crate::filter::criteria::BudgetRange;

    fn scenario() -> Vec<Project> {
        let mut a = project("A", "Normandie", "IA");
        a.budget_value = 2.0;
        a.status = ProjectStatus::InProgress;
        a.year = 2023;

        let mut b = project("B", "Normandie", "Santé");
        b.budget_value = 5.0;
        b.status = ProjectStatus::Completed;
        b.year = 2022;

        vec![a, b]
    }

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn unset_criteria_is_identity() {
        let projects = scenario();
        let filtered = filter_projects(&projects, &ProjectCriteria::default());
        assert_eq!(filtered, projects.iter().collect::<Vec<_>>());
    }

    #[test]
    fn domain_equality() {
        let projects = scenario();
        for p in &projects {
            let same = ProjectCriteria {
                domain: Some(p.domain.clone()),
                ..Default::default()
            };
            assert_eq!(filter_projects([p], &same), vec![p]);

            let other = ProjectCriteria {
                domain: Some("other".to_owned()),
                ..Default::default()
            };
            assert!(filter_projects([p], &other).is_empty());
        }

        let ia = ProjectCriteria::from_controls("IA", "", "", "");
        assert_eq!(titles(&filter_projects(&projects, &ia)), ["A"]);
    }

    #[test]
    fn open_ended_budget_keeps_large_projects() {
        let projects = scenario();
        let criteria = ProjectCriteria::from_controls("", "3-+", "", "");
        assert_eq!(titles(&filter_projects(&projects, &criteria)), ["B"]);
    }

    #[test]
    fn closed_budget_range() {
        let projects = scenario();
        let criteria = ProjectCriteria {
            budget: Some(BudgetRange {
                min: 1.0,
                max: Some(3.0),
            }),
            ..Default::default()
        };
        assert_eq!(titles(&filter_projects(&projects, &criteria)), ["A"]);
    }

    #[test]
    fn status_and_year_combine_with_and() {
        let projects = scenario();

        let criteria = ProjectCriteria::from_controls("", "", "termine", "2022");
        assert_eq!(titles(&filter_projects(&projects, &criteria)), ["B"]);

        let criteria = ProjectCriteria::from_controls("", "", "termine", "2023");
        assert!(filter_projects(&projects, &criteria).is_empty());

        let criteria = ProjectCriteria::from_controls("IA", "3-+", "", "");
        assert!(filter_projects(&projects, &criteria).is_empty());
    }

    #[test]
    fn malformed_tokens_do_not_filter() {
        let projects = scenario();
        let criteria = ProjectCriteria::from_controls("", "lots", "", "soon");
        assert_eq!(filter_projects(&projects, &criteria).len(), 2);
    }
}
