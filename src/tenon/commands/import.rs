use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TenonError};
use crate::model::{Component, JoineryUnit};
use crate::store::DataStore;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted file shapes: a full payload with units and components, or a
/// bare component array (the shape of per-unit fixture exports).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportPayload {
    Full {
        #[serde(default)]
        units: Vec<JoineryUnit>,
        #[serde(default)]
        components: Vec<Component>,
    },
    Components(Vec<Component>),
}

pub fn run<S: DataStore>(store: &mut S, paths: Vec<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported_units = 0;
    let mut imported_components = 0;

    for path in paths {
        if !path.is_file() {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
            continue;
        }
        match import_file(store, &path) {
            Ok((units, components)) => {
                imported_units += units;
                imported_components += components;
                result.add_message(CmdMessage::info(format!("Imported: {}", path.display())));
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "Failed to import {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {} unit(s), {} component(s)",
        imported_units, imported_components
    )));
    Ok(result)
}

fn import_file<S: DataStore>(store: &mut S, path: &Path) -> Result<(usize, usize)> {
    let content = fs::read_to_string(path).map_err(TenonError::Io)?;
    let payload: ImportPayload =
        serde_json::from_str(&content).map_err(TenonError::Serialization)?;

    let (units, components) = match payload {
        ImportPayload::Full { units, components } => (units, components),
        ImportPayload::Components(components) => (Vec::new(), components),
    };

    let counts = (units.len(), components.len());
    for unit in &units {
        store.save_unit(unit)?;
    }
    for component in &components {
        store.save_component(component)?;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    const FIXTURE: &str = r#"{
        "units": [{
            "id": "ju-001",
            "name": "Kitchen Island",
            "joineryNumber": "J-101",
            "status": "to-review",
            "dimensions": {"width": 2400, "height": 900, "depth": 650}
        }],
        "components": [{
            "id": "comp-001",
            "unitId": "ju-001",
            "name": "Cabinet Base",
            "type": "base-cabinet",
            "quantity": 1,
            "dimensions": {"width": 2400, "height": 720, "depth": 650},
            "material": {"type": "MDF", "finish": "paint", "color": "White", "thickness": 18},
            "complexity": "standard",
            "estimatedTime": 240,
            "status": "to-review",
            "confidence": 0.88,
            "childIds": ["comp-002"]
        }, {
            "id": "comp-002",
            "unitId": "ju-001",
            "name": "Drawer Box - Large",
            "type": "drawer",
            "quantity": 3,
            "dimensions": {"width": 800, "height": 200, "depth": 600},
            "material": {"type": "Plywood", "finish": "melamine"},
            "complexity": "standard",
            "estimatedTime": 90,
            "status": "to-review",
            "confidence": 0.92,
            "parentId": "comp-001"
        }]
    }"#;

    #[test]
    fn imports_units_and_components_from_full_payload() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("island.json");
        fs::write(&file, FIXTURE).unwrap();

        let mut store = InMemoryStore::new();
        let result = run(&mut store, vec![file]).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("1 unit(s), 2 component(s)")));
        assert_eq!(store.list_units().unwrap().len(), 1);
        let base = store.get_component("comp-001").unwrap();
        assert_eq!(base.child_ids, vec!["comp-002".to_string()]);
    }

    #[test]
    fn imports_bare_component_array() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("components.json");
        fs::write(
            &file,
            r#"[{
                "id": "comp-009",
                "unitId": "ju-001",
                "name": "End Panel",
                "type": "panel",
                "quantity": 2,
                "dimensions": {"width": 650, "height": 900, "depth": 18},
                "material": {"type": "Oak veneer", "finish": "veneer"},
                "complexity": "custom",
                "estimatedTime": 45,
                "status": "to-review",
                "confidence": 0.8
            }]"#,
        )
        .unwrap();

        let mut store = InMemoryStore::new();
        run(&mut store, vec![file]).unwrap();
        assert!(store.get_component("comp-009").is_ok());
    }

    #[test]
    fn malformed_file_warns_but_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "not json").unwrap();
        let good = dir.path().join("good.json");
        fs::write(&good, FIXTURE).unwrap();

        let mut store = InMemoryStore::new();
        let result = run(&mut store, vec![bad, good]).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Failed to import")));
        assert!(store.get_component("comp-001").is_ok());
    }
}
