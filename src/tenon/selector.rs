use crate::model::Component;

/// A user input selecting components: an exact id, or a case-insensitive
/// name substring when the input matches no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentSelector {
    Id(String),
    Name(String),
}

impl std::fmt::Display for ComponentSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentSelector::Id(id) => write!(f, "{}", id),
            ComponentSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl ComponentSelector {
    /// Components matched by this selector within `components`.
    ///
    /// Id selectors match at most one component; name selectors match every
    /// component whose name contains the term.
    pub fn select<'a>(&self, components: &'a [Component]) -> Vec<&'a Component> {
        match self {
            ComponentSelector::Id(id) => components.iter().filter(|c| &c.id == id).collect(),
            ComponentSelector::Name(term) => {
                let needle = term.to_lowercase();
                components
                    .iter()
                    .filter(|c| c.name.to_lowercase().contains(&needle))
                    .collect()
            }
        }
    }
}

/// Classifies raw inputs against the known id set: anything that is an
/// existing id selects by id, everything else becomes a name search.
pub fn classify_selectors<I: AsRef<str>>(
    inputs: &[I],
    components: &[Component],
) -> Vec<ComponentSelector> {
    inputs
        .iter()
        .map(|input| {
            let s = input.as_ref();
            if components.iter().any(|c| c.id == s) {
                ComponentSelector::Id(s.to_string())
            } else {
                ComponentSelector::Name(s.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(id: &str, name: &str) -> Component {
        let mut c = Component::new("ju-001".into(), name.into(), "panel".into());
        c.id = id.to_string();
        c
    }

    #[test]
    fn id_selector_matches_exactly_one() {
        let components = vec![comp("comp-001", "Door"), comp("comp-002", "Door")];
        let sel = ComponentSelector::Id("comp-001".into());
        let matched = sel.select(&components);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "comp-001");
    }

    #[test]
    fn name_selector_matches_substring_case_insensitive() {
        let components = vec![comp("a", "Drawer Box - Large"), comp("b", "Cabinet Door")];
        let sel = ComponentSelector::Name("drawer".into());
        let matched = sel.select(&components);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "a");
    }

    #[test]
    fn classification_prefers_ids() {
        let components = vec![comp("comp-001", "Door")];
        let selectors = classify_selectors(&["comp-001", "door"], &components);
        assert_eq!(selectors[0], ComponentSelector::Id("comp-001".into()));
        assert_eq!(selectors[1], ComponentSelector::Name("door".into()));
    }
}
