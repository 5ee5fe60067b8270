use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plan::PlanSession;
use crate::errors::AppResult;
use crate::models::plan::TrainingPlan;
use crate::ui::messages::{info, success};

/// Show the current plan or choose a new one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { choose } = cmd {
        let store = cfg.record_store();
        let mut session = PlanSession::load(&store);

        if let Some(plan) = choose {
            session.choose(*plan);
            success(format!("{} escolhido.", plan.title()));
        } else {
            info("Escolha seu nível de habilidade:");
            let current = session.selected_plan();
            for plan in TrainingPlan::ALL {
                let marker = if current == Some(plan) { "●" } else { "○" };
                println!("  {} {}", marker, plan.title());
            }
            println!();
        }

        match &session.selected {
            Some(text) => println!("🏋️  Plano selecionado: {}", text),
            None => info("Nenhum plano selecionado."),
        }
    }

    Ok(())
}
