use super::{repair_links, DataStore, DoctorReport};
use crate::error::{Result, TenonError};
use crate::model::{Component, JoineryUnit};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    components: HashMap<String, Component>,
    units: HashMap<String, JoineryUnit>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_component(&mut self, component: &Component) -> Result<()> {
        self.components
            .insert(component.id.clone(), component.clone());
        Ok(())
    }

    fn get_component(&self, id: &str) -> Result<Component> {
        self.components
            .get(id)
            .cloned()
            .ok_or_else(|| TenonError::ComponentNotFound(id.to_string()))
    }

    fn list_components(&self, unit_id: Option<&str>) -> Result<Vec<Component>> {
        let mut components: Vec<Component> = self
            .components
            .values()
            .filter(|c| unit_id.map_or(true, |u| c.unit_id == u))
            .cloned()
            .collect();
        components.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(components)
    }

    fn delete_component(&mut self, id: &str) -> Result<()> {
        if self.components.remove(id).is_none() {
            return Err(TenonError::ComponentNotFound(id.to_string()));
        }
        for c in self.components.values_mut() {
            c.child_ids.retain(|child| child != id);
        }
        Ok(())
    }

    fn save_unit(&mut self, unit: &JoineryUnit) -> Result<()> {
        self.units.insert(unit.id.clone(), unit.clone());
        Ok(())
    }

    fn get_unit(&self, id: &str) -> Result<JoineryUnit> {
        self.units
            .get(id)
            .cloned()
            .ok_or_else(|| TenonError::UnitNotFound(id.to_string()))
    }

    fn list_units(&self) -> Result<Vec<JoineryUnit>> {
        let mut units: Vec<JoineryUnit> = self.units.values().cloned().collect();
        units.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(units)
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        let mut components = self.list_components(None)?;
        let units = self.list_units()?;
        let report = repair_links(&mut components, &units);
        self.components = components.into_iter().map(|c| (c.id.clone(), c)).collect();
        Ok(report)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Complexity, ComponentStatus, Dimensions};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_unit(mut self, id: &str, name: &str) -> Self {
            let unit = JoineryUnit {
                id: id.to_string(),
                name: name.to_string(),
                description: format!("{} assembly", name),
                location: "Kitchen".to_string(),
                joinery_number: format!("J-{}", id),
                status: ComponentStatus::ToReview,
                dimensions: Dimensions {
                    width: 2400,
                    height: 900,
                    depth: 650,
                },
                notes: None,
            };
            self.store.save_unit(&unit).unwrap();
            self
        }

        pub fn with_component(mut self, id: &str, unit_id: &str, name: &str) -> Self {
            let mut c = Component::new(unit_id.to_string(), name.to_string(), "panel".to_string());
            c.id = id.to_string();
            c.material.kind = "MDF".to_string();
            c.estimated_time = 60;
            self.store.save_component(&c).unwrap();
            self
        }

        pub fn with_status(mut self, id: &str, status: ComponentStatus) -> Self {
            let mut c = self.store.get_component(id).unwrap();
            c.status = status;
            self.store.save_component(&c).unwrap();
            self
        }

        pub fn with_complexity(mut self, id: &str, complexity: Complexity) -> Self {
            let mut c = self.store.get_component(id).unwrap();
            c.complexity = complexity;
            self.store.save_component(&c).unwrap();
            self
        }

        /// Links `child` under `parent`, keeping both sides of the relation.
        pub fn with_link(mut self, parent: &str, child: &str) -> Self {
            let mut p = self.store.get_component(parent).unwrap();
            if !p.child_ids.contains(&child.to_string()) {
                p.child_ids.push(child.to_string());
            }
            self.store.save_component(&p).unwrap();

            let mut c = self.store.get_component(child).unwrap();
            c.parent_id = Some(parent.to_string());
            self.store.save_component(&c).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn fixture_builds_linked_tree() {
        let fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("base", "ju-001", "Cabinet Base")
            .with_component("drawer", "ju-001", "Drawer Box")
            .with_link("base", "drawer");

        let base = fixture.store.get_component("base").unwrap();
        assert_eq!(base.child_ids, vec!["drawer".to_string()]);
        let drawer = fixture.store.get_component("drawer").unwrap();
        assert_eq!(drawer.parent_id.as_deref(), Some("base"));
    }

    #[test]
    fn delete_is_an_error_for_unknown_id() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.delete_component("nope"),
            Err(TenonError::ComponentNotFound(_))
        ));
    }
}
