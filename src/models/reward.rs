/// A redeemable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub name: String,
    pub points_required: i64,
}

impl Reward {
    pub fn new(name: &str, points_required: i64) -> Self {
        Self {
            name: name.to_string(),
            points_required,
        }
    }
}

/// Built-in catalog: (name, points required).
pub const DEFAULT_CATALOG: [(&str, i64); 3] = [
    ("Badge de Iniciante", 10),
    ("Cupom de Desconto de 20%", 20),
    ("Equipamento de Treino", 30),
];

pub fn default_catalog() -> Vec<Reward> {
    DEFAULT_CATALOG
        .iter()
        .map(|(name, points)| Reward::new(name, *points))
        .collect()
}

/// Redemption state of a reward, derived from score and redeemed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardState {
    Available,
    Redeemed,
    Locked,
}

impl RewardState {
    pub fn of(reward: &Reward, score: i64, redeemed: &[String]) -> Self {
        if redeemed.iter().any(|r| r == &reward.name) {
            RewardState::Redeemed
        } else if reward.points_required <= score {
            RewardState::Available
        } else {
            RewardState::Locked
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardState::Available => "available",
            RewardState::Redeemed => "redeemed",
            RewardState::Locked => "locked",
        }
    }
}
