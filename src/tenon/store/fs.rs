use super::{repair_links, DataStore, DoctorReport};
use crate::error::{Result, TenonError};
use crate::model::{Component, JoineryUnit};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const COMPONENTS_FILE: &str = "components.json";
const UNITS_FILE: &str = "units.json";

/// File-based storage: two JSON maps keyed by id under the project data dir.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TenonError::Io)?;
        }
        Ok(())
    }

    fn load_map<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<HashMap<String, T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(path).map_err(TenonError::Io)?;
        serde_json::from_str(&content).map_err(TenonError::Serialization)
    }

    fn save_map<T: serde::Serialize>(&self, file: &str, map: &HashMap<String, T>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(map).map_err(TenonError::Serialization)?;
        fs::write(self.root.join(file), content).map_err(TenonError::Io)
    }
}

impl DataStore for FileStore {
    fn save_component(&mut self, component: &Component) -> Result<()> {
        let mut map: HashMap<String, Component> = self.load_map(COMPONENTS_FILE)?;
        map.insert(component.id.clone(), component.clone());
        self.save_map(COMPONENTS_FILE, &map)
    }

    fn get_component(&self, id: &str) -> Result<Component> {
        let map: HashMap<String, Component> = self.load_map(COMPONENTS_FILE)?;
        map.get(id)
            .cloned()
            .ok_or_else(|| TenonError::ComponentNotFound(id.to_string()))
    }

    fn list_components(&self, unit_id: Option<&str>) -> Result<Vec<Component>> {
        let map: HashMap<String, Component> = self.load_map(COMPONENTS_FILE)?;
        let mut components: Vec<Component> = map
            .into_values()
            .filter(|c| unit_id.map_or(true, |u| c.unit_id == u))
            .collect();
        // Map iteration order is arbitrary; id order keeps listings and
        // sort tie-breaking deterministic across invocations.
        components.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(components)
    }

    fn delete_component(&mut self, id: &str) -> Result<()> {
        let mut map: HashMap<String, Component> = self.load_map(COMPONENTS_FILE)?;
        if map.remove(id).is_none() {
            return Err(TenonError::ComponentNotFound(id.to_string()));
        }
        // Drop references from any parent that listed it
        for c in map.values_mut() {
            c.child_ids.retain(|child| child != id);
        }
        self.save_map(COMPONENTS_FILE, &map)
    }

    fn save_unit(&mut self, unit: &JoineryUnit) -> Result<()> {
        let mut map: HashMap<String, JoineryUnit> = self.load_map(UNITS_FILE)?;
        map.insert(unit.id.clone(), unit.clone());
        self.save_map(UNITS_FILE, &map)
    }

    fn get_unit(&self, id: &str) -> Result<JoineryUnit> {
        let map: HashMap<String, JoineryUnit> = self.load_map(UNITS_FILE)?;
        map.get(id)
            .cloned()
            .ok_or_else(|| TenonError::UnitNotFound(id.to_string()))
    }

    fn list_units(&self) -> Result<Vec<JoineryUnit>> {
        let map: HashMap<String, JoineryUnit> = self.load_map(UNITS_FILE)?;
        let mut units: Vec<JoineryUnit> = map.into_values().collect();
        units.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(units)
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        let mut components = self.list_components(None)?;
        let units = self.list_units()?;
        let report = repair_links(&mut components, &units);
        if !report.is_clean() {
            let map: HashMap<String, Component> = components
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect();
            self.save_map(COMPONENTS_FILE, &map)?;
        }
        Ok(report)
    }
}
