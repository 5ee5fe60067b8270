use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::records;
use crate::ui::messages::{info, success};

/// Delete the selected records so the next load falls back to defaults.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset {
        all,
        goal,
        activities,
        plan,
        rewards,
    } = cmd
    {
        let mut targets: Vec<&str> = Vec::new();
        if *all {
            targets.extend(records::ALL);
        }
        if !*all && *goal {
            targets.push(records::USER_GOAL);
        }
        if !*all && *activities {
            targets.push(records::ACTIVITIES);
        }
        if !*all && *plan {
            targets.push(records::TRAINING_PLAN);
        }
        if !*all && *rewards {
            targets.push(records::SCORE);
            targets.push(records::REDEEMED_REWARDS);
        }

        if targets.is_empty() {
            info("Nothing to reset. Use --all or pick records (--goal, --activities, --plan, --rewards).");
            return Ok(());
        }

        let store = cfg.record_store();
        for name in targets {
            if store.reset(name)? {
                success(format!("Removed {}", store.path_for(name).display()));
            } else {
                info(format!("{} was already empty", name));
            }
        }
    }

    Ok(())
}
