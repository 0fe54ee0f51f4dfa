use crate::directory::Project;

/// Trimmed, lowercased form of a search input. Empty means no search.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring search over title, institution, description and
/// domain. An empty query matches nothing; callers fall back to another base set.
pub fn search_projects<'a, I>(all: I, query: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    all.into_iter()
        .filter(|project| {
            [
                &project.title,
                &project.institution,
                &project.description,
                &project.domain,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::project;

    #[test]
    fn matches_any_field_ignoring_case() {
        let mut a = project("A", "Normandie", "IA");
        a.institution = "Université de Caen Normandie".to_owned();
        let mut b = project("B", "normandie", "Santé");
        b.description = "Cohorte suivie en NORMANDIE depuis 2015".to_owned();
        let c = project("C", "Normandie", "Énergie");
        let projects = vec![a, b, c];

        let results = search_projects(&projects, "  Normandie ");
        let titles = results.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["A", "B"]);

        let results = search_projects(&projects, "énergie");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let projects = vec![project("A", "Normandie", "IA")];
        assert!(search_projects(&projects, "   ").is_empty());
        assert_eq!(normalize_query("  MiXeD "), "mixed");
    }
}
