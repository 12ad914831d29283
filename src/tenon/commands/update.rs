use crate::commands::{CmdMessage, CmdResult, ComponentUpdate};
use crate::error::{Result, TenonError};
use crate::model::ComponentStatus;
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::resolve_one;

/// Applies field edits to one component and marks it `modified`, the grid's
/// signal that a human changed the detected values.
pub fn run<S: DataStore>(
    store: &mut S,
    unit_id: Option<&str>,
    input: &str,
    update: &ComponentUpdate,
) -> Result<CmdResult> {
    if update.is_empty() {
        return Err(TenonError::Api("Nothing to update".to_string()));
    }

    let mut component = resolve_one(store, unit_id, input)?;

    if let Some(name) = &update.name {
        component.name = name.clone();
    }
    if let Some(material) = &update.material {
        component.material.kind = material.clone();
    }
    if let Some(complexity) = update.complexity {
        component.complexity = complexity;
    }
    if let Some(time) = update.estimated_time {
        component.estimated_time = time;
    }
    if let Some(quantity) = update.quantity {
        component.quantity = quantity;
    }
    if let Some(notes) = &update.notes {
        component.notes = Some(notes.clone());
    }

    component.status = ComponentStatus::Modified;
    component.reviewed_at = Some(Utc::now());
    store.save_component(&component)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Component updated ({}): {}",
        component.id, component.name
    )));
    result.affected_components.push(component);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Complexity;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn edits_fields_and_marks_modified() {
        let mut fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("a", "ju-001", "Door");

        let update = ComponentUpdate {
            material: Some("Walnut veneer".into()),
            complexity: Some(Complexity::High),
            estimated_time: Some(180),
            ..Default::default()
        };
        run(&mut fixture.store, None, "a", &update).unwrap();

        let c = fixture.store.get_component("a").unwrap();
        assert_eq!(c.material.kind, "Walnut veneer");
        assert_eq!(c.complexity, Complexity::High);
        assert_eq!(c.estimated_time, 180);
        assert_eq!(c.status, ComponentStatus::Modified);
    }

    #[test]
    fn empty_update_is_rejected() {
        let mut fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("a", "ju-001", "Door");

        let err = run(
            &mut fixture.store,
            None,
            "a",
            &ComponentUpdate::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Nothing to update"));
    }
}
