use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::activity::ActivitySession;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::separator;

/// Log an activity and/or list the activity log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { log } = cmd {
        let store = cfg.record_store();
        let mut session = ActivitySession::load(&store);

        if let Some(text) = log {
            let mut input = text.clone();
            session.log(&mut input);
            success("Atividade registrada com sucesso!");
        }

        if session.activities.is_empty() {
            info("Nenhuma atividade registrada.");
            return Ok(());
        }

        println!("📋 Registro de Atividades:\n");
        println!("{}", separator(&cfg.separator_char, 40));
        for (i, activity) in session.activities.iter().enumerate() {
            println!("{:>3}. {}", i + 1, activity);
        }
        println!("{}", separator(&cfg.separator_char, 40));
    }

    Ok(())
}
