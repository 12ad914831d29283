use crate::commands::CmdResult;
use crate::error::Result;
use crate::grid::{flatten_components, status_counts, ComponentFilter, Expansion, SortOrder};
use crate::store::DataStore;

/// The grid listing: fetch, filter, sort, flatten.
pub fn run<S: DataStore>(
    store: &S,
    unit_id: Option<&str>,
    filter: &ComponentFilter,
    sort: &SortOrder,
    expansion: &Expansion,
) -> Result<CmdResult> {
    let components = store.list_components(unit_id)?;
    let rows = flatten_components(&components, filter, sort, expansion);
    let counts = status_counts(&components);

    Ok(CmdResult::default()
        .with_grid_rows(rows)
        .with_counts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentStatus;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_roots_sorted_by_name() {
        let fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("b", "ju-001", "Side Panel")
            .with_component("a", "ju-001", "Cabinet Base");

        let result = run(
            &fixture.store,
            Some("ju-001"),
            &ComponentFilter::default(),
            &SortOrder::default(),
            &Expansion::new(),
        )
        .unwrap();

        let names: Vec<&str> = result
            .grid_rows
            .iter()
            .map(|r| r.component.name.as_str())
            .collect();
        assert_eq!(names, vec!["Cabinet Base", "Side Panel"]);
    }

    #[test]
    fn expansion_reveals_children_with_depth() {
        let fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("base", "ju-001", "Cabinet Base")
            .with_component("drawer", "ju-001", "Drawer Box")
            .with_link("base", "drawer");

        let collapsed = run(
            &fixture.store,
            None,
            &ComponentFilter::default(),
            &SortOrder::default(),
            &Expansion::new(),
        )
        .unwrap();
        assert_eq!(collapsed.grid_rows.len(), 1);

        let expanded = run(
            &fixture.store,
            None,
            &ComponentFilter::default(),
            &SortOrder::default(),
            &Expansion::new().with_expanded("base"),
        )
        .unwrap();
        assert_eq!(expanded.grid_rows.len(), 2);
        assert_eq!(expanded.grid_rows[1].depth, 1);
    }

    #[test]
    fn counts_reflect_the_whole_unit_not_the_filter() {
        let fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("a", "ju-001", "Door")
            .with_component("b", "ju-001", "Shelf")
            .with_status("b", ComponentStatus::Approved);

        let filter = ComponentFilter {
            status: Some(ComponentStatus::Approved),
            ..Default::default()
        };
        let result = run(
            &fixture.store,
            Some("ju-001"),
            &filter,
            &SortOrder::default(),
            &Expansion::new(),
        )
        .unwrap();

        assert_eq!(result.grid_rows.len(), 1);
        let counts = result.counts.unwrap();
        assert_eq!(counts.to_review, 1);
        assert_eq!(counts.approved, 1);
    }
}
