use crate::directory::Company;

use super::criteria::CompanyCriteria;
use super::normalize::normalize_region;

/// Applies the company filters. When `industries_visible` is off the whole
/// category is hidden and nothing is returned.
pub fn filter_companies<'a, I>(
    all: I,
    criteria: &CompanyCriteria,
    industries_visible: bool,
) -> Vec<&'a Company>
where
    I: IntoIterator<Item = &'a Company>,
{
    if !industries_visible {
        return Vec::new();
    }

    let region_slug = criteria.region.as_deref().map(normalize_region);

    all.into_iter()
        .filter(|company| {
            if let Some(domain) = &criteria.domain
                && &company.domain != domain
            {
                return false;
            }

            if let Some(slug) = &region_slug
                && &company.region_slug() != slug
            {
                return false;
            }

            criteria.allows(company.legal_type())
        })
        .collect()
}
