use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Goals offered by the goal picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GoalKind {
    WeightLoss, // Perda de peso
    MuscleGain, // Ganho muscular
    Endurance,  // Aumento da resistência
    Custom,     // Personalizado
}

impl GoalKind {
    pub const ALL: [GoalKind; 4] = [
        GoalKind::WeightLoss,
        GoalKind::MuscleGain,
        GoalKind::Endurance,
        GoalKind::Custom,
    ];

    /// Label stored in `user_goal.json`.
    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::WeightLoss => "Perda de peso",
            GoalKind::MuscleGain => "Ganho muscular",
            GoalKind::Endurance => "Aumento da resistência",
            GoalKind::Custom => "Personalizado",
        }
    }

    /// Convert stored label → enum
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == s)
    }
}

/// The persisted goal record.
///
/// `goal` is kept as free text so a record written by another build still
/// loads even when its label is not one of [`GoalKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoal {
    pub goal: String,
    pub custom_goal: Option<String>,
}

impl Default for UserGoal {
    fn default() -> Self {
        Self {
            goal: GoalKind::WeightLoss.label().to_string(),
            custom_goal: None,
        }
    }
}

impl UserGoal {
    pub fn new(kind: GoalKind, custom_goal: Option<String>) -> Self {
        Self {
            goal: kind.label().to_string(),
            custom_goal,
        }
    }

    pub fn kind(&self) -> Option<GoalKind> {
        GoalKind::from_label(&self.goal)
    }

    /// Text describing what the user is working towards.
    pub fn effective(&self) -> &str {
        match (&self.kind(), self.custom_goal.as_deref()) {
            (Some(GoalKind::Custom), Some(custom)) if !custom.trim().is_empty() => custom,
            _ => self.goal.as_str(),
        }
    }
}
