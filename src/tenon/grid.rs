//! # Component Grid Transform
//!
//! Turns the flat component collection into the ordered, depth-annotated row
//! sequence the grid view renders: filter, stable sort, then flatten the
//! parent/child tree honoring per-node expansion state.
//!
//! Everything here is a pure function of its inputs. Filtering ignores
//! hierarchy (a child can match while its parent does not), the sort governs
//! root order only (children follow their parent's `child_ids` order), and a
//! collapsed node hides its entire subtree. Hosts that re-run the transform
//! on every state change (reactive UIs) may want to memoize by input
//! identity; a CLI invocation computes once, so this module does not.

use crate::model::{Component, ComponentStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// Filter predicates for the grid. All provided fields are ANDed; an absent
/// field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentFilter {
    /// Exact status match.
    pub status: Option<ComponentStatus>,
    /// Exact complexity match.
    pub complexity: Option<crate::model::Complexity>,
    /// Case-insensitive substring match against `material.type`.
    pub material: Option<String>,
    /// Case-insensitive substring match against `name` or `type`.
    pub search: Option<String>,
}

impl ComponentFilter {
    pub fn is_empty(&self) -> bool {
        *self == ComponentFilter::default()
    }

    pub fn matches(&self, component: &Component) -> bool {
        if let Some(status) = self.status {
            if component.status != status {
                return false;
            }
        }
        if let Some(complexity) = self.complexity {
            if component.complexity != complexity {
                return false;
            }
        }
        if let Some(material) = &self.material {
            let needle = material.to_lowercase();
            if !component.material.kind.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !component.name.to_lowercase().contains(&needle)
                && !component.kind.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Type,
    Complexity,
    EstimatedTime,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "type" => Ok(SortKey::Type),
            "complexity" => Ok(SortKey::Complexity),
            "time" | "estimated-time" => Ok(SortKey::EstimatedTime),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction: {}", other)),
        }
    }
}

/// Sort key and direction for the grid's top level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    fn compare(&self, a: &Component, b: &Component) -> Ordering {
        let ord = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Type => a.kind.to_lowercase().cmp(&b.kind.to_lowercase()),
            SortKey::Complexity => a.complexity.ordinal().cmp(&b.complexity.ordinal()),
            SortKey::EstimatedTime => a.estimated_time.cmp(&b.estimated_time),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Which nodes are expanded in the grid view. Ids absent from the map are
/// collapsed.
///
/// This is presentation-owned state with copy-on-write semantics: toggles
/// return a new value rather than mutating in place, so a host always gets a
/// clean "new state in, new output out" contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expansion(HashMap<String, bool>);

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expansion state expanding every component that has children.
    pub fn all(components: &[Component]) -> Self {
        Self(
            components
                .iter()
                .filter(|c| !c.child_ids.is_empty())
                .map(|c| (c.id.clone(), true))
                .collect(),
        )
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn toggled(&self, id: &str) -> Self {
        let mut map = self.0.clone();
        let entry = map.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        Self(map)
    }

    pub fn with_expanded(&self, id: &str) -> Self {
        let mut map = self.0.clone();
        map.insert(id.to_string(), true);
        Self(map)
    }

    pub fn with_collapsed(&self, id: &str) -> Self {
        let mut map = self.0.clone();
        map.insert(id.to_string(), false);
        Self(map)
    }

    /// Ids currently expanded, for persistence.
    pub fn expanded_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .0
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.clone())
            .collect();
        ids.sort();
        ids
    }
}

impl FromIterator<String> for Expansion {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().map(|id| (id, true)).collect())
    }
}

/// One renderable grid row: a component at its indentation depth.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub component: Component,
    /// 0 for root-level components.
    pub depth: usize,
}

/// Filters, sorts, and flattens the component tree into grid rows.
///
/// Child ids are resolved against the filtered subset, so a child whose
/// parent was filtered out is unreachable (it is neither a root nor a
/// resolvable descendant) — deliberate, matching the grid's behavior.
/// Dangling child ids are silently skipped. A visited set on the current
/// path truncates cyclic `child_ids` graphs instead of recursing forever.
pub fn flatten_components(
    components: &[Component],
    filter: &ComponentFilter,
    sort: &SortOrder,
    expansion: &Expansion,
) -> Vec<GridRow> {
    let mut filtered: Vec<&Component> = components.iter().filter(|c| filter.matches(c)).collect();
    // sort_by is stable: ties keep their original relative order
    filtered.sort_by(|a, b| sort.compare(a, b));

    let by_id: HashMap<&str, &Component> =
        filtered.iter().map(|c| (c.id.as_str(), *c)).collect();

    let mut rows = Vec::new();
    let mut path: HashSet<&str> = HashSet::new();
    for root in filtered.iter().filter(|c| c.parent_id.is_none()) {
        emit(root, 0, &by_id, expansion, &mut path, &mut rows);
    }
    rows
}

fn emit<'a>(
    component: &'a Component,
    depth: usize,
    by_id: &HashMap<&str, &'a Component>,
    expansion: &Expansion,
    path: &mut HashSet<&'a str>,
    rows: &mut Vec<GridRow>,
) {
    if !path.insert(component.id.as_str()) {
        return;
    }
    rows.push(GridRow {
        component: component.clone(),
        depth,
    });
    if expansion.is_expanded(&component.id) {
        for child_id in &component.child_ids {
            if let Some(child) = by_id.get(child_id.as_str()) {
                emit(child, depth + 1, by_id, expansion, path, rows);
            }
        }
    }
    path.remove(component.id.as_str());
}

/// Per-status component totals, for the status navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub to_review: usize,
    pub approved: usize,
    pub modified: usize,
    pub discarded: usize,
    pub unclear: usize,
}

impl StatusCounts {
    pub fn get(&self, status: ComponentStatus) -> usize {
        match status {
            ComponentStatus::ToReview => self.to_review,
            ComponentStatus::Approved => self.approved,
            ComponentStatus::Modified => self.modified,
            ComponentStatus::Discarded => self.discarded,
            ComponentStatus::Unclear => self.unclear,
        }
    }

    pub fn total(&self) -> usize {
        self.to_review + self.approved + self.modified + self.discarded + self.unclear
    }
}

pub fn status_counts(components: &[Component]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for c in components {
        match c.status {
            ComponentStatus::ToReview => counts.to_review += 1,
            ComponentStatus::Approved => counts.approved += 1,
            ComponentStatus::Modified => counts.modified += 1,
            ComponentStatus::Discarded => counts.discarded += 1,
            ComponentStatus::Unclear => counts.unclear += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Complexity;

    fn comp(id: &str, name: &str) -> Component {
        let mut c = Component::new("ju-001".into(), name.into(), "panel".into());
        c.id = id.to_string();
        c
    }

    fn child_of(mut c: Component, parent: &str) -> Component {
        c.parent_id = Some(parent.to_string());
        c
    }

    #[test]
    fn status_filter_keeps_only_matching_components() {
        let mut a = comp("a", "Door");
        a.status = ComponentStatus::Approved;
        let b = comp("b", "Drawer");

        let filter = ComponentFilter {
            status: Some(ComponentStatus::Approved),
            ..Default::default()
        };
        let rows = flatten_components(
            &[a, b],
            &filter,
            &SortOrder::default(),
            &Expansion::new(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].component.id, "a");
    }

    #[test]
    fn search_matches_name_or_type_case_insensitive() {
        let mut a = comp("a", "Cabinet Base");
        a.kind = "base-cabinet".into();
        let b = comp("b", "Shelf");

        let filter = ComponentFilter {
            search: Some("CABINET".into()),
            ..Default::default()
        };
        let rows = flatten_components(
            &[a, b.clone()],
            &filter,
            &SortOrder::default(),
            &Expansion::new(),
        );
        assert_eq!(rows.len(), 1);

        // type-only match
        let filter = ComponentFilter {
            search: Some("base-cab".into()),
            ..Default::default()
        };
        let mut c = comp("c", "Plinth");
        c.kind = "base-cabinet".into();
        let rows =
            flatten_components(&[b, c], &filter, &SortOrder::default(), &Expansion::new());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].component.id, "c");
    }

    #[test]
    fn material_filter_is_substring_match() {
        let mut a = comp("a", "Door");
        a.material.kind = "Moisture-resistant MDF".into();
        let mut b = comp("b", "Drawer");
        b.material.kind = "Plywood".into();

        let filter = ComponentFilter {
            material: Some("mdf".into()),
            ..Default::default()
        };
        let rows = flatten_components(
            &[a, b],
            &filter,
            &SortOrder::default(),
            &Expansion::new(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].component.id, "a");
    }

    #[test]
    fn name_sort_is_stable_for_ties() {
        let b1 = comp("b1", "B");
        let a = comp("a", "A");
        let b2 = comp("b2", "B");

        let rows = flatten_components(
            &[b1, a, b2],
            &ComponentFilter::default(),
            &SortOrder::default(),
            &Expansion::new(),
        );
        let ids: Vec<&str> = rows.iter().map(|r| r.component.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b1", "b2"]);
    }

    #[test]
    fn complexity_sorts_by_ordinal() {
        let mut h = comp("h", "High");
        h.complexity = Complexity::High;
        let mut s = comp("s", "Standard");
        s.complexity = Complexity::Standard;
        let mut c = comp("c", "Custom");
        c.complexity = Complexity::Custom;

        let sort = SortOrder::new(SortKey::Complexity, SortDirection::Asc);
        let rows = flatten_components(
            &[h, s, c],
            &ComponentFilter::default(),
            &sort,
            &Expansion::new(),
        );
        let ids: Vec<&str> = rows.iter().map(|r| r.component.id.as_str()).collect();
        assert_eq!(ids, vec!["s", "c", "h"]);
    }

    #[test]
    fn descending_sort_reverses_but_keeps_tie_order() {
        let mut a = comp("a", "Tie");
        a.estimated_time = 30;
        let mut b = comp("b", "Tie");
        b.estimated_time = 30;
        let mut c = comp("c", "Long");
        c.estimated_time = 90;

        let sort = SortOrder::new(SortKey::EstimatedTime, SortDirection::Desc);
        let rows = flatten_components(
            &[a, b, c],
            &ComponentFilter::default(),
            &sort,
            &Expansion::new(),
        );
        let ids: Vec<&str> = rows.iter().map(|r| r.component.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn depth_follows_expansion_through_grandchildren() {
        let mut root = comp("r", "Root");
        root.child_ids = vec!["c1".into()];
        let mut c1 = child_of(comp("c1", "Child"), "r");
        c1.child_ids = vec!["c2".into()];
        let c2 = child_of(comp("c2", "Grandchild"), "c1");

        let components = [root, c1, c2];
        let both = Expansion::new().with_expanded("r").with_expanded("c1");
        let rows = flatten_components(
            &components,
            &ComponentFilter::default(),
            &SortOrder::default(),
            &both,
        );
        let got: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.component.id.as_str(), r.depth))
            .collect();
        assert_eq!(got, vec![("r", 0), ("c1", 1), ("c2", 2)]);

        // collapsing c1 hides the grandchild
        let only_root = Expansion::new().with_expanded("r");
        let rows = flatten_components(
            &components,
            &ComponentFilter::default(),
            &SortOrder::default(),
            &only_root,
        );
        let got: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.component.id.as_str(), r.depth))
            .collect();
        assert_eq!(got, vec![("r", 0), ("c1", 1)]);
    }

    #[test]
    fn all_collapsed_emits_only_roots() {
        let mut root = comp("r", "Root");
        root.child_ids = vec!["c1".into()];
        let c1 = child_of(comp("c1", "Child"), "r");

        let rows = flatten_components(
            &[root, c1],
            &ComponentFilter::default(),
            &SortOrder::default(),
            &Expansion::new(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].component.id, "r");
    }

    #[test]
    fn dangling_child_id_is_silently_skipped() {
        let mut root = comp("r", "Root");
        root.child_ids = vec!["missing-id".into()];

        let rows = flatten_components(
            &[root],
            &ComponentFilter::default(),
            &SortOrder::default(),
            &Expansion::new().with_expanded("r"),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].component.id, "r");
        assert_eq!(rows[0].depth, 0);
    }

    #[test]
    fn filtered_out_child_is_omitted_from_subtree() {
        let mut root = comp("r", "Root");
        root.status = ComponentStatus::Approved;
        root.child_ids = vec!["c1".into()];
        let c1 = child_of(comp("c1", "Child"), "r"); // still to-review

        let filter = ComponentFilter {
            status: Some(ComponentStatus::Approved),
            ..Default::default()
        };
        let rows = flatten_components(
            &[root, c1],
            &filter,
            &SortOrder::default(),
            &Expansion::new().with_expanded("r"),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].component.id, "r");
    }

    #[test]
    fn cyclic_links_terminate() {
        let mut a = comp("a", "A");
        a.child_ids = vec!["b".into()];
        let mut b = child_of(comp("b", "B"), "a");
        b.child_ids = vec!["a".into()];

        let expansion = Expansion::new().with_expanded("a").with_expanded("b");
        let rows = flatten_components(
            &[a, b],
            &ComponentFilter::default(),
            &SortOrder::default(),
            &expansion,
        );
        // a at depth 0, b at depth 1; the back-edge to a is cut
        let got: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.component.id.as_str(), r.depth))
            .collect();
        assert_eq!(got, vec![("a", 0), ("b", 1)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let rows = flatten_components(
            &[],
            &ComponentFilter::default(),
            &SortOrder::default(),
            &Expansion::new(),
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn toggled_returns_a_new_value() {
        let base = Expansion::new();
        let toggled = base.toggled("x");
        assert!(!base.is_expanded("x"));
        assert!(toggled.is_expanded("x"));
        assert!(!toggled.toggled("x").is_expanded("x"));
    }

    #[test]
    fn counts_cover_every_status() {
        let mut components = Vec::new();
        for (i, status) in ComponentStatus::ALL.iter().enumerate() {
            for j in 0..=i {
                let mut c = comp(&format!("{}-{}", i, j), "X");
                c.status = *status;
                components.push(c);
            }
        }
        let counts = status_counts(&components);
        assert_eq!(counts.to_review, 1);
        assert_eq!(counts.approved, 2);
        assert_eq!(counts.modified, 3);
        assert_eq!(counts.discarded, 4);
        assert_eq!(counts.unclear, 5);
        assert_eq!(counts.total(), 15);
    }
}
