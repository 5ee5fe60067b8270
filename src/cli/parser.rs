use crate::models::goal::GoalKind;
use crate::models::plan::TrainingPlan;
use clap::{Parser, Subcommand};

/// Command-line interface definition for MoveUp
/// CLI application to track fitness goals, activities, plans and rewards
#[derive(Parser)]
#[command(
    name = "moveup",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track your fitness goal, log activities, pick a training plan and redeem rewards",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a separate profile)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or choose your fitness goal
    Goal {
        #[arg(long = "set", value_enum, help = "Goal to confirm")]
        set: Option<GoalKind>,

        #[arg(
            long = "custom",
            requires = "set",
            help = "Custom goal text (kept for any goal, used with 'custom')"
        )]
        custom: Option<String>,
    },

    /// Log an activity or list the logged ones
    Activity {
        #[arg(
            long = "log",
            value_name = "TEXT",
            allow_hyphen_values = true,
            help = "Activity to append (empty text is accepted)"
        )]
        log: Option<String>,
    },

    /// Show or choose a training plan
    Plan {
        #[arg(long = "choose", value_enum, help = "Training plan to choose")]
        choose: Option<TrainingPlan>,
    },

    /// Show points and rewards, redeem a reward or manage points
    Rewards {
        #[arg(
            long = "redeem",
            value_name = "REWARD",
            help = "Reward name or its position in the list"
        )]
        redeem: Option<String>,

        #[arg(
            long = "award",
            value_name = "POINTS",
            allow_negative_numbers = true,
            conflicts_with = "set_score",
            help = "Add points to the score"
        )]
        award: Option<i64>,

        #[arg(
            long = "set-score",
            value_name = "POINTS",
            allow_negative_numbers = true,
            help = "Overwrite the score"
        )]
        set_score: Option<i64>,
    },

    /// Delete stored records
    Reset {
        #[arg(long = "all", help = "Delete every record")]
        all: bool,

        #[arg(long = "goal")]
        goal: bool,

        #[arg(long = "activities")]
        activities: bool,

        #[arg(long = "plan")]
        plan: bool,

        #[arg(long = "rewards", help = "Delete score and redeemed rewards")]
        rewards: bool,
    },
}
