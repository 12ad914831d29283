use crate::error::{Result, TenonError};
use crate::model::Component;
use crate::selector::{classify_selectors, ComponentSelector};
use crate::store::DataStore;

/// Resolves raw selector inputs against the store. Each input must match at
/// least one component; name selectors may match several.
pub fn resolve_selectors<S: DataStore, I: AsRef<str>>(
    store: &S,
    unit_id: Option<&str>,
    inputs: &[I],
) -> Result<Vec<Component>> {
    let components = store.list_components(unit_id)?;
    let selectors = classify_selectors(inputs, &components);

    let mut resolved: Vec<Component> = Vec::new();
    for selector in &selectors {
        let matched = selector.select(&components);
        if matched.is_empty() {
            return Err(TenonError::Api(format!(
                "No component matches {}",
                selector
            )));
        }
        for component in matched {
            if !resolved.iter().any(|c| c.id == component.id) {
                resolved.push(component.clone());
            }
        }
    }
    Ok(resolved)
}

/// Like [`resolve_selectors`] but requires exactly one match per input,
/// for operations where ambiguity is unacceptable.
pub fn resolve_one<S: DataStore>(
    store: &S,
    unit_id: Option<&str>,
    input: &str,
) -> Result<Component> {
    let components = store.list_components(unit_id)?;
    let selectors = classify_selectors(&[input], &components);
    let matched = selectors[0].select(&components);
    match matched.len() {
        0 => Err(TenonError::Api(format!("No component matches {}", input))),
        1 => Ok(matched[0].clone()),
        n => Err(TenonError::Api(format!(
            "\"{}\" is ambiguous ({} matches); use an id",
            input, n
        ))),
    }
}
