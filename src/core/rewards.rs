use crate::errors::{AppError, AppResult};
use crate::models::reward::{Reward, RewardState, default_catalog};
use crate::store::{RecordStore, records};

pub const REFUSED_MESSAGE: &str =
    "Você não tem pontos suficientes ou já resgatou esta recompensa.";

pub fn redeemed_message(name: &str) -> String {
    format!("Recompensa resgatada: {}!", name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedeemOutcome {
    Redeemed,
    Refused,
}

/// Score, redeemed list and catalog for the rewards screen.
pub struct RewardSession<'a> {
    store: &'a RecordStore,
    pub catalog: Vec<Reward>,
    pub score: i64,
    pub redeemed: Vec<String>,
    /// Last user-facing notice, empty until something happens.
    pub message: String,
}

impl<'a> RewardSession<'a> {
    pub fn load(store: &'a RecordStore) -> Self {
        Self::with_catalog(store, default_catalog())
    }

    pub fn with_catalog(store: &'a RecordStore, catalog: Vec<Reward>) -> Self {
        let score = store.load(records::SCORE, 0i64);
        let redeemed = store.load(records::REDEEMED_REWARDS, Vec::new());
        Self {
            store,
            catalog,
            score,
            redeemed,
            message: String::new(),
        }
    }

    pub fn state_of(&self, reward: &Reward) -> RewardState {
        RewardState::of(reward, self.score, &self.redeemed)
    }

    /// Find a catalog entry by name (case-insensitive) or 1-based position.
    pub fn find(&self, reference: &str) -> Option<&Reward> {
        let reference = reference.trim();
        if let Some(r) = self
            .catalog
            .iter()
            .find(|r| r.name.to_lowercase() == reference.to_lowercase())
        {
            return Some(r);
        }
        reference
            .parse::<usize>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.catalog.get(i))
    }

    /// Redeem `reward` if it is available.
    ///
    /// The redeemed list and the score are written as two separate records,
    /// list first. A failed second write leaves the files out of step while
    /// the session itself stays consistent.
    pub fn redeem(&mut self, reward: &Reward) -> RedeemOutcome {
        if self.state_of(reward) != RewardState::Available {
            self.message = REFUSED_MESSAGE.to_string();
            return RedeemOutcome::Refused;
        }

        self.score -= reward.points_required;
        self.redeemed.push(reward.name.clone());
        self.message = redeemed_message(&reward.name);

        self.store.save(records::REDEEMED_REWARDS, &self.redeemed);
        self.store.save(records::SCORE, &self.score);

        log::info!(
            "redeemed '{}' for {} points, {} left",
            reward.name,
            reward.points_required,
            self.score
        );
        RedeemOutcome::Redeemed
    }

    /// Add points. A total past `i64::MAX` is refused and nothing changes.
    pub fn award(&mut self, points: i64) -> AppResult<()> {
        self.score = self
            .score
            .checked_add(points)
            .ok_or(AppError::ScoreOverflow(points))?;
        self.store.save(records::SCORE, &self.score);
        Ok(())
    }

    pub fn set_score(&mut self, points: i64) {
        self.score = points;
        self.store.save(records::SCORE, &self.score);
    }
}
