use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.doctor()?;
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result);
    }

    result.add_message(CmdMessage::warning("Inconsistencies found:"));
    if report.dropped_child_refs > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - Removed {} child reference(s) pointing to missing components.",
            report.dropped_child_refs
        )));
    }
    if report.cleared_parent_refs > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - Cleared {} parent reference(s) pointing to missing components.",
            report.cleared_parent_refs
        )));
    }
    if report.relinked_children > 0 {
        result.add_message(CmdMessage::success(format!(
            "  - Re-linked {} child(ren) missing from their parent's list.",
            report.relinked_children
        )));
    }
    if report.orphaned_components > 0 {
        result.add_message(CmdMessage::warning(format!(
            "  - {} component(s) belong to joinery units that do not exist.",
            report.orphaned_components
        )));
    }

    Ok(result)
}
