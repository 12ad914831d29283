use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore, I: AsRef<str>>(
    store: &S,
    unit_id: Option<&str>,
    inputs: &[I],
) -> Result<CmdResult> {
    let components = resolve_selectors(store, unit_id, inputs)?;
    Ok(CmdResult::default().with_detailed_components(components))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_selected_components() {
        let fixture = StoreFixture::new()
            .with_unit("ju-001", "Island")
            .with_component("a", "ju-001", "Door")
            .with_component("b", "ju-001", "Shelf");

        let result = run(&fixture.store, None, &["a"]).unwrap();
        assert_eq!(result.detailed_components.len(), 1);
        assert_eq!(result.detailed_components[0].name, "Door");
    }
}
