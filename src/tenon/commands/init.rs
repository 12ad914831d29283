use crate::commands::{CmdMessage, CmdResult, TenonPaths};
use crate::config::TenonConfig;
use crate::error::Result;

pub fn run(paths: &TenonPaths) -> Result<CmdResult> {
    let dir = paths.data_dir();
    let existed = dir.join("config.json").exists();
    TenonConfig::load(&dir).unwrap_or_default().save(&dir)?;

    let mut result = CmdResult::default();
    if existed {
        result.add_message(CmdMessage::info(format!(
            "Store already initialized at {}",
            dir.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Initialized store at {}",
            dir.display()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_config_in_project_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = TenonPaths {
            project: Some(tmp.path().join(".tenon")),
            global: tmp.path().join("global"),
        };

        let result = run(&paths).unwrap();
        assert!(result.messages[0].content.contains("Initialized"));
        assert!(tmp.path().join(".tenon/config.json").exists());

        let again = run(&paths).unwrap();
        assert!(again.messages[0].content.contains("already initialized"));
    }
}
