use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TenonError};
use crate::model::{Component, ComponentStatus};
use crate::store::DataStore;
use std::io::{self, Write};

use super::helpers::resolve_selectors;

/// Permanently removes discarded components. With no selectors, targets
/// everything currently discarded.
pub fn run<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    unit_id: Option<&str>,
    inputs: &[I],
    skip_confirm: bool,
) -> Result<CmdResult> {
    let targets: Vec<Component> = if inputs.is_empty() {
        store
            .list_components(unit_id)?
            .into_iter()
            .filter(|c| c.status == ComponentStatus::Discarded)
            .collect()
    } else {
        let resolved = resolve_selectors(store, unit_id, inputs)?;
        if let Some(kept) = resolved
            .iter()
            .find(|c| c.status != ComponentStatus::Discarded)
        {
            return Err(TenonError::Api(format!(
                "{} is not discarded; discard it first",
                kept.id
            )));
        }
        resolved
    };

    if targets.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No components to purge."));
        return Ok(res);
    }

    if !skip_confirm {
        println!("This will permanently remove the following components:");
        for c in &targets {
            println!("  {} {}", c.id, c.name);
        }
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(TenonError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(TenonError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    let mut result = CmdResult::default();
    for c in targets {
        store.delete_component(&c.id)?;
        result.add_message(CmdMessage::success(format!("Purged: {} {}", c.id, c.name)));
    }

    Ok(result)
}
