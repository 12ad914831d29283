use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ComponentStatus;
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::resolve_selectors;

/// Moves components to a review verdict, stamping `reviewed_at` and
/// attaching the optional note.
pub fn run<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    unit_id: Option<&str>,
    inputs: &[I],
    status: ComponentStatus,
    note: Option<&str>,
) -> Result<CmdResult> {
    let components = resolve_selectors(store, unit_id, inputs)?;
    let mut result = CmdResult::default();

    for mut component in components {
        component.status = status;
        component.reviewed_at = Some(Utc::now());
        if let Some(note) = note {
            component.notes = Some(note.to_string());
        }
        store.save_component(&component)?;

        result.add_message(CmdMessage::success(format!(
            "{} ({}): {}",
            status.label(),
            component.id,
            component.name
        )));
        result.affected_components.push(component);
    }

    Ok(result)
}
