use crate::commands::CmdResult;
use crate::error::Result;
use crate::grid::status_counts;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, unit_id: Option<&str>) -> Result<CmdResult> {
    let components = store.list_components(unit_id)?;
    Ok(CmdResult::default().with_counts(status_counts(&components)))
}
