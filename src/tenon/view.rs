//! Persisted grid view state for the CLI host.
//!
//! Expand/collapse is presentation state, not data: the library's
//! [`Expansion`] value is rebuilt from this file on every invocation and the
//! whole file is replaced on every toggle, keeping the copy-on-write
//! contract even across processes.

use crate::error::{Result, TenonError};
use crate::grid::Expansion;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const VIEW_FILENAME: &str = "view.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewState {
    #[serde(default)]
    pub expanded: Vec<String>,
}

impl ViewState {
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(VIEW_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(TenonError::Io)?;
        serde_json::from_str(&content).map_err(TenonError::Serialization)
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(TenonError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(TenonError::Serialization)?;
        fs::write(dir.join(VIEW_FILENAME), content).map_err(TenonError::Io)?;
        Ok(())
    }

    pub fn expansion(&self) -> Expansion {
        self.expanded.iter().cloned().collect()
    }

    /// A new state with the given expansion applied wholesale.
    pub fn from_expansion(expansion: &Expansion) -> Self {
        Self {
            expanded: expansion.expanded_ids(),
        }
    }
}
