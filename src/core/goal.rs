use crate::models::goal::{GoalKind, UserGoal};
use crate::store::{RecordStore, records};

pub struct GoalSession<'a> {
    store: &'a RecordStore,
    pub current: UserGoal,
}

impl<'a> GoalSession<'a> {
    pub fn load(store: &'a RecordStore) -> Self {
        let current = store.load(records::USER_GOAL, UserGoal::default());
        Self { store, current }
    }

    /// Text currently in the custom goal field.
    pub fn custom_input(&self) -> &str {
        self.current.custom_goal.as_deref().unwrap_or_default()
    }

    /// Confirm a goal together with the custom field content. The field is
    /// stored as-is for every goal, even when empty.
    pub fn confirm(&mut self, kind: GoalKind, custom_input: &str) -> &UserGoal {
        self.current = UserGoal::new(kind, Some(custom_input.to_string()));
        self.store.save(records::USER_GOAL, &self.current);
        &self.current
    }
}
