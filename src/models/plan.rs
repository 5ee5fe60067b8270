use clap::ValueEnum;

/// The fixed training plans. Only the description is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrainingPlan {
    Beginner,
    Intermediate,
    Advanced,
}

impl TrainingPlan {
    pub const ALL: [TrainingPlan; 3] = [
        TrainingPlan::Beginner,
        TrainingPlan::Intermediate,
        TrainingPlan::Advanced,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TrainingPlan::Beginner => "Plano para Iniciantes",
            TrainingPlan::Intermediate => "Plano Intermediário",
            TrainingPlan::Advanced => "Plano Avançado",
        }
    }

    /// Full text written to `training_plan.json`.
    pub fn description(&self) -> &'static str {
        match self {
            TrainingPlan::Beginner => {
                "Plano para Iniciantes: 30 min de caminhada, 15 min de treino de força."
            }
            TrainingPlan::Intermediate => {
                "Plano Intermediário: 45 min de corrida, 30 min de treino de força."
            }
            TrainingPlan::Advanced => {
                "Plano Avançado: 60 min de corrida, 45 min de treino de força."
            }
        }
    }

    pub fn from_description(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.description() == s)
    }
}
