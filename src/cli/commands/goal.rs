use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::goal::GoalSession;
use crate::errors::AppResult;
use crate::models::goal::{GoalKind, UserGoal};
use crate::ui::messages::{info, success};

/// Show the current goal or confirm a new one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { set, custom } = cmd {
        let store = cfg.record_store();
        let mut session = GoalSession::load(&store);

        match set {
            Some(kind) => {
                // The custom field keeps its loaded content unless replaced.
                let custom_input = custom
                    .clone()
                    .unwrap_or_else(|| session.custom_input().to_string());
                let saved = session.confirm(*kind, &custom_input);
                success("Objetivo salvo com sucesso!");
                print_goal(saved);
            }
            None => {
                info("Escolha seu objetivo:");
                for kind in GoalKind::ALL {
                    let marker = if session.current.kind() == Some(kind) {
                        "●"
                    } else {
                        "○"
                    };
                    println!("  {} {}", marker, kind.label());
                }
                println!();
                print_goal(&session.current);
            }
        }
    }

    Ok(())
}

fn print_goal(goal: &UserGoal) {
    println!("🎯 Objetivo: {}", goal.goal);
    if let Some(custom) = goal.custom_goal.as_deref().filter(|c| !c.is_empty()) {
        println!("✏️  Personalizado: {}", custom);
    }
    println!("➡️  Meta atual: {}", goal.effective());
}
