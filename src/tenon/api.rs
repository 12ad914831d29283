//! # API Facade
//!
//! Thin entry point over the command layer: dispatches, normalizes raw
//! inputs (selector strings, paths), and returns structured `CmdResult`s.
//! No business logic, no I/O formatting, no terminal assumptions — any
//! client (this repo's CLI, a web backend, a test harness) goes through
//! here and renders the result itself.
//!
//! `TenonApi<S: DataStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::grid::{ComponentFilter, Expansion, SortOrder};
use crate::model::ComponentStatus;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct TenonApi<S: DataStore> {
    store: S,
    paths: commands::TenonPaths,
}

impl<S: DataStore> TenonApi<S> {
    pub fn new(store: S, paths: commands::TenonPaths) -> Self {
        Self { store, paths }
    }

    /// The grid listing, optionally scoped to one joinery unit.
    pub fn grid(
        &self,
        unit_id: Option<&str>,
        filter: &ComponentFilter,
        sort: &SortOrder,
        expansion: &Expansion,
    ) -> Result<commands::CmdResult> {
        commands::grid::run(&self.store, unit_id, filter, sort, expansion)
    }

    pub fn counts(&self, unit_id: Option<&str>) -> Result<commands::CmdResult> {
        commands::counts::run(&self.store, unit_id)
    }

    pub fn review<I: AsRef<str>>(
        &mut self,
        unit_id: Option<&str>,
        selectors: &[I],
        status: ComponentStatus,
        note: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::review::run(&mut self.store, unit_id, selectors, status, note)
    }

    pub fn update(
        &mut self,
        unit_id: Option<&str>,
        selector: &str,
        update: &commands::ComponentUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, unit_id, selector, update)
    }

    pub fn add(&mut self, new: commands::add::NewComponent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, new)
    }

    pub fn show<I: AsRef<str>>(
        &self,
        unit_id: Option<&str>,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, unit_id, selectors)
    }

    pub fn units(&self) -> Result<commands::CmdResult> {
        commands::units::run(&self.store)
    }

    pub fn import(&mut self, paths: Vec<PathBuf>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, paths)
    }

    pub fn export(&self, unit_id: Option<&str>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, unit_id)
    }

    pub fn purge<I: AsRef<str>>(
        &mut self,
        unit_id: Option<&str>,
        selectors: &[I],
        skip_confirm: bool,
    ) -> Result<commands::CmdResult> {
        commands::purge::run(&mut self.store, unit_id, selectors, skip_confirm)
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    /// All components visible to the host, for building expansion state.
    pub fn components(&self, unit_id: Option<&str>) -> Result<Vec<crate::model::Component>> {
        self.store.list_components(unit_id)
    }

    pub fn paths(&self) -> &commands::TenonPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::add::NewComponent;
pub use crate::commands::{
    CmdMessage, CmdResult, ComponentUpdate, MessageLevel, TenonPaths, UnitSummary,
};
