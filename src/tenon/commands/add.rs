use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Complexity, Component};
use crate::store::DataStore;

use super::helpers::resolve_one;

/// Inputs for manually adding a component missed by detection.
#[derive(Debug, Clone)]
pub struct NewComponent {
    pub unit_id: String,
    pub name: String,
    pub kind: String,
    pub material: Option<String>,
    pub complexity: Option<Complexity>,
    pub estimated_time: Option<u32>,
    pub quantity: Option<u32>,
    /// Selector for the parent to nest under, if any.
    pub parent: Option<String>,
}

/// Creates a component with a generated id, keeping `child_ids` the inverse
/// of `parent_id` when attaching under a parent.
pub fn run<S: DataStore>(store: &mut S, new: NewComponent) -> Result<CmdResult> {
    // Unit must exist before we attach anything to it
    let unit = store.get_unit(&new.unit_id)?;

    let mut component = Component::new(new.unit_id.clone(), new.name, new.kind);
    if let Some(material) = new.material {
        component.material.kind = material;
    }
    if let Some(complexity) = new.complexity {
        component.complexity = complexity;
    }
    if let Some(time) = new.estimated_time {
        component.estimated_time = time;
    }
    if let Some(quantity) = new.quantity {
        component.quantity = quantity;
    }

    if let Some(parent_input) = &new.parent {
        let mut parent = resolve_one(store, Some(&new.unit_id), parent_input)?;
        component.parent_id = Some(parent.id.clone());
        parent.child_ids.push(component.id.clone());
        store.save_component(&parent)?;
    }

    store.save_component(&component)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Component added to {} ({}): {}",
        unit.name, component.id, component.name
    )));
    result.affected_components.push(component);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TenonError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn new_component(unit: &str, name: &str) -> NewComponent {
        NewComponent {
            unit_id: unit.to_string(),
            name: name.to_string(),
            kind: "shelf".to_string(),
            material: None,
            complexity: None,
            estimated_time: None,
            quantity: None,
            parent: None,
        }
    }

    #[test]
    fn adds_root_component_with_generated_id() {
        let mut fixture = StoreFixture::new().with_unit("ju-001", "Island");

        let result = run(&mut fixture.store, new_component("ju-001", "Shelf")).unwrap();
        let added = &result.affected_components[0];
        assert!(added.id.starts_with("comp-"));
        assert!(added.parent_id.is_none());
        assert!(fixture.store.get_component(&added.id).is_ok());
    }

    #[test]
    fn attaching_keeps_links_inverse() {
        let mut fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("base", "ju-001", "Cabinet Base");

        let mut new = new_component("ju-001", "Shelf");
        new.parent = Some("base".into());
        let result = run(&mut fixture.store, new).unwrap();

        let added = &result.affected_components[0];
        assert_eq!(added.parent_id.as_deref(), Some("base"));
        let parent = fixture.store.get_component("base").unwrap();
        assert!(parent.child_ids.contains(&added.id));
    }

    #[test]
    fn unknown_unit_is_an_error() {
        let mut fixture = StoreFixture::new();
        let err = run(&mut fixture.store, new_component("ju-404", "Shelf")).unwrap_err();
        assert!(matches!(err, TenonError::UnitNotFound(_)));
    }
}
