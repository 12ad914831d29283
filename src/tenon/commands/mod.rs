use crate::config::TenonConfig;
use crate::error::{Result, TenonError};
use crate::grid::{GridRow, StatusCounts};
use crate::model::{Complexity, Component, JoineryUnit};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod counts;
pub mod doctor;
pub mod export;
pub mod grid;
pub mod helpers;
pub mod import;
pub mod init;
pub mod purge;
pub mod review;
pub mod show;
pub mod units;
pub mod update;

/// Resolved store locations: the project `.tenon` dir when inside a
/// project, plus the user-wide fallback.
#[derive(Debug, Clone)]
pub struct TenonPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl TenonPaths {
    /// The directory backing the store: project-local when available.
    pub fn data_dir(&self) -> PathBuf {
        self.project.clone().unwrap_or_else(|| self.global.clone())
    }

    pub fn project_dir(&self) -> Result<PathBuf> {
        self.project
            .clone()
            .ok_or_else(|| TenonError::Store("No project directory available".to_string()))
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A joinery unit together with the component totals derived from
/// `Component::unit_id`.
#[derive(Debug, Clone)]
pub struct UnitSummary {
    pub unit: JoineryUnit,
    pub counts: StatusCounts,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_components: Vec<Component>,
    pub grid_rows: Vec<GridRow>,
    pub detailed_components: Vec<Component>,
    pub units: Vec<UnitSummary>,
    pub counts: Option<StatusCounts>,
    pub config: Option<TenonConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_grid_rows(mut self, rows: Vec<GridRow>) -> Self {
        self.grid_rows = rows;
        self
    }

    pub fn with_detailed_components(mut self, components: Vec<Component>) -> Self {
        self.detailed_components = components;
        self
    }

    pub fn with_units(mut self, units: Vec<UnitSummary>) -> Self {
        self.units = units;
        self
    }

    pub fn with_counts(mut self, counts: StatusCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_config(mut self, config: TenonConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field edits applied by the `update` command. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct ComponentUpdate {
    pub name: Option<String>,
    pub material: Option<String>,
    pub complexity: Option<Complexity>,
    pub estimated_time: Option<u32>,
    pub quantity: Option<u32>,
    pub notes: Option<String>,
}

impl ComponentUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.material.is_none()
            && self.complexity.is_none()
            && self.estimated_time.is_none()
            && self.quantity.is_none()
            && self.notes.is_none()
    }
}
