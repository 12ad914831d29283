use crate::commands::{CmdResult, UnitSummary};
use crate::error::Result;
use crate::grid::status_counts;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut summaries = Vec::new();
    for unit in store.list_units()? {
        let components = store.list_components(Some(&unit.id))?;
        summaries.push(UnitSummary {
            unit,
            counts: status_counts(&components),
        });
    }
    Ok(CmdResult::default().with_units(summaries))
}
