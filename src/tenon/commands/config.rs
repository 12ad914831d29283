use crate::commands::{CmdMessage, CmdResult, TenonPaths};
use crate::config::TenonConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &TenonPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.data_dir();
    match action {
        ConfigAction::ShowAll => {
            let config = TenonConfig::load(&dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = TenonConfig::load(&dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = TenonConfig::load(&dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(&dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(dir: &std::path::Path) -> TenonPaths {
        TenonPaths {
            project: Some(dir.join(".tenon")),
            global: dir.join("global"),
        }
    }

    #[test]
    fn set_then_show_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = paths(tmp.path());

        run(
            &paths,
            ConfigAction::Set("sort-by".into(), "complexity".into()),
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowKey("sort-by".into())).unwrap();
        assert_eq!(result.messages[0].content, "complexity");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().sort_by, "complexity");
    }

    #[test]
    fn invalid_value_reports_error_without_saving() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = paths(tmp.path());

        let result = run(
            &paths,
            ConfigAction::Set("sort-by".into(), "bogus".into()),
        )
        .unwrap();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Error
        ));

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().sort_by, "name");
    }
}
