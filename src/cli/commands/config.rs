use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            edit(&Config::config_file(), editor.as_deref())?;
        }
    }

    Ok(())
}

/// Editors to try, in order: `--editor`, then $EDITOR / $VISUAL or the
/// platform default. Duplicates are dropped.
pub fn editor_candidates(requested: Option<&str>, from_env: Option<String>) -> Vec<String> {
    let fallback = from_env.unwrap_or_else(|| {
        if cfg!(target_os = "windows") {
            "notepad".to_string()
        } else {
            "nano".to_string()
        }
    });

    let mut editors: Vec<String> = requested.map(str::to_string).into_iter().collect();
    if !editors.contains(&fallback) {
        editors.push(fallback);
    }
    editors
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} does not exist, run `moveup init` first",
            path.display()
        )));
    }

    let from_env = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .ok();

    for editor in editor_candidates(requested, from_env) {
        match Command::new(&editor).arg(path).status() {
            Ok(status) if status.success() => {
                success(format!("Configuration edited with '{}'", editor));
                return Ok(());
            }
            Ok(status) => warning(format!("'{}' exited with {}", editor, status)),
            Err(e) => warning(format!("'{}' could not be started: {}", editor, e)),
        }
    }

    Err(AppError::Config(format!(
        "no editor could open {}",
        path.display()
    )))
}
