//! # Storage Layer
//!
//! The [`DataStore`] trait decouples the command layer from persistence:
//! every data source is an injected repository behind this trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in a project data dir
//!   (`components.json` and `units.json`, each a map keyed by id)
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Integrity
//!
//! The data model does not enforce referential integrity: `child_ids` may
//! dangle, `parent_id` may point nowhere, and the two need not be inverses.
//! Readers degrade gracefully (the grid transform skips what it cannot
//! resolve); [`DataStore::doctor`] is the repair pass that makes the links
//! consistent again.

use crate::error::Result;
use crate::model::{Component, JoineryUnit};

pub mod fs;
pub mod memory;

/// Report from the `doctor` consistency pass.
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// `child_ids` entries removed because no such component exists.
    pub dropped_child_refs: usize,
    /// `parent_id` references cleared because the parent does not exist.
    pub cleared_parent_refs: usize,
    /// Children re-added to a parent's `child_ids` that omitted them.
    pub relinked_children: usize,
    /// Components whose joinery unit does not exist.
    pub orphaned_components: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.dropped_child_refs == 0
            && self.cleared_parent_refs == 0
            && self.relinked_children == 0
            && self.orphaned_components == 0
    }
}

/// Abstract interface for component and joinery-unit storage.
pub trait DataStore {
    /// Save a component (create or update)
    fn save_component(&mut self, component: &Component) -> Result<()>;

    /// Get a component by id
    fn get_component(&self, id: &str) -> Result<Component>;

    /// List components, optionally restricted to one joinery unit
    fn list_components(&self, unit_id: Option<&str>) -> Result<Vec<Component>>;

    /// Delete a component permanently
    fn delete_component(&mut self, id: &str) -> Result<()>;

    /// Save a joinery unit (create or update)
    fn save_unit(&mut self, unit: &JoineryUnit) -> Result<()>;

    /// Get a joinery unit by id
    fn get_unit(&self, id: &str) -> Result<JoineryUnit>;

    /// List all joinery units
    fn list_units(&self) -> Result<Vec<JoineryUnit>>;

    /// Verify and repair tree links and unit membership
    fn doctor(&mut self) -> Result<DoctorReport>;
}

/// Shared doctor logic: repairs `components` in place and counts what
/// changed. Store implementations persist the result.
pub(crate) fn repair_links(
    components: &mut Vec<Component>,
    units: &[JoineryUnit],
) -> DoctorReport {
    let mut report = DoctorReport::default();
    let ids: std::collections::HashSet<String> =
        components.iter().map(|c| c.id.clone()).collect();
    let unit_ids: std::collections::HashSet<&str> =
        units.iter().map(|u| u.id.as_str()).collect();

    for c in components.iter_mut() {
        let before = c.child_ids.len();
        let own_id = c.id.clone();
        c.child_ids
            .retain(|child| child != &own_id && ids.contains(child));
        report.dropped_child_refs += before - c.child_ids.len();

        if let Some(parent) = &c.parent_id {
            if parent == &c.id || !ids.contains(parent) {
                c.parent_id = None;
                report.cleared_parent_refs += 1;
            }
        }

        if !unit_ids.contains(c.unit_id.as_str()) {
            report.orphaned_components += 1;
        }
    }

    // Second pass: every child's parent must list it
    let links: Vec<(String, String)> = components
        .iter()
        .filter_map(|c| c.parent_id.clone().map(|p| (p, c.id.clone())))
        .collect();
    for (parent_id, child_id) in links {
        if let Some(parent) = components.iter_mut().find(|c| c.id == parent_id) {
            if !parent.child_ids.contains(&child_id) {
                parent.child_ids.push(child_id);
                report.relinked_children += 1;
            }
        }
    }

    report
}
