use crate::api::{TenonApi, TenonPaths};
use crate::config::TenonConfig;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub struct TenonContext {
    pub api: TenonApi<FileStore>,
    pub config: TenonConfig,
}

/// Find the project root by walking up from cwd looking for a directory
/// containing `.tenon`. Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(".tenon").exists() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return None;
            }
        }
    }
}

/// Resolved store paths for a working directory: the enclosing project's
/// `.tenon` dir (falling back to `cwd/.tenon`), plus the user-wide data dir.
pub fn resolve_paths(cwd: &Path) -> TenonPaths {
    let project_dir = find_project_root(cwd)
        .map(|root| root.join(".tenon"))
        .unwrap_or_else(|| cwd.join(".tenon"));

    let global_dir = ProjectDirs::from("com", "tenon", "tenon")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".tenon"));

    TenonPaths {
        project: Some(project_dir),
        global: global_dir,
    }
}

pub fn initialize(cwd: &Path) -> TenonContext {
    let paths = resolve_paths(cwd);
    let data_dir = paths.data_dir();
    let config = TenonConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir);
    let api = TenonApi::new(store, paths);

    TenonContext { api, config }
}
