use unicode_normalization::UnicodeNormalization;

/// Turns a human-readable region name into its canonical slug:
/// diacritics stripped, lowercased, spaces replaced with hyphens.
pub fn normalize_region(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "-")
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_slugifies() {
        assert_eq!(normalize_region("Île-de-France"), "ile-de-france");
        assert_eq!(
            normalize_region("Provence-Alpes-Côte d'Azur"),
            "provence-alpes-cote-d'azur"
        );
        assert_eq!(normalize_region("Grand Est"), "grand-est");
        assert_eq!(normalize_region("Auvergne-Rhône-Alpes"), "auvergne-rhone-alpes");
    }

    #[test]
    fn normalization_is_idempotent() {
        for value in [
            "Île-de-France",
            "Bourgogne-Franche-Comté",
            "Centre-Val de Loire",
            "already-a-slug",
            "",
            "  Hauts de  France ",
        ] {
            let once = normalize_region(value);
            assert_eq!(normalize_region(&once), once, "input {value:?}");
        }
    }
}
