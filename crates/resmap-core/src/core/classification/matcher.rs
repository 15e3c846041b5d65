use super::rules::{CategoryRule, FILTER_CATEGORIES};

/// Decides whether a record with this type label passes the category filter.
///
/// An empty selection matches nothing. Otherwise the label matches if any
/// selected category has a keyword occurring in it, case-insensitively.
/// Identifiers without a rule in `rules` contribute nothing.
pub fn matches_selected<I, S>(label: &str, selected: I, rules: &[CategoryRule]) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lower = label.to_lowercase();
    selected.into_iter().any(|id| {
        rules
            .iter()
            .find(|rule| rule.id == id.as_ref())
            .is_some_and(|rule| rule.matches_lowercase(&lower))
    })
}

/// Every filter category the label matches, in table order.
pub fn matching_categories(label: &str) -> Vec<&'static CategoryRule> {
    let lower = label.to_lowercase();
    FILTER_CATEGORIES
        .iter()
        .filter(|rule| rule.matches_lowercase(&lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(label: &str, selected: &[&str]) -> bool {
        matches_selected(label, selected.iter(), FILTER_CATEGORIES)
    }

    #[test]
    fn empty_selection_matches_nothing() {
        assert!(!matches("H-bond", &[]));
        assert!(!matches("", &[]));
    }

    #[test]
    fn record_of_other_type_is_excluded() {
        assert!(!matches("Salt-bridge", &["h-bond"]));
        assert!(matches("Salt-bridge", &["h-bond", "salt-bridge"]));
    }

    #[test]
    fn any_selected_category_is_enough() {
        assert!(matches("H-bond; Salt-bridge", &["salt-bridge"]));
        assert!(matches("H-bond; Salt-bridge", &["h-bond"]));
        assert!(matches("Water mediated H-bond", &["water"]));
    }

    #[test]
    fn unknown_identifiers_are_ignored() {
        assert!(!matches("H-bond", &["hydrophobic"]));
        assert!(matches("H-bond", &["hydrophobic", "h-bond"]));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(matches("APOLAR VDW", &["apolar-vdw"]));
        assert!(matches("π-π stacking", &["pi-pi"]));
    }

    #[test]
    fn one_label_can_match_several_categories() {
        let ids: Vec<_> = matching_categories("Apolar vdW; Clash")
            .iter()
            .map(|rule| rule.id)
            .collect();
        assert_eq!(ids, ["polar-vdw", "apolar-vdw", "clash"]);
    }

    #[test]
    fn custom_rule_lists_are_respected() {
        let rules = [CategoryRule {
            id: "custom",
            label: "Custom",
            keywords: &["zz"],
        }];
        assert!(matches_selected("ZZ-contact", ["custom"], &rules));
        assert!(!matches_selected("ZZ-contact", ["h-bond"], &rules));
    }
}
