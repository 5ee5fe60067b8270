use crate::models::plan::TrainingPlan;
use crate::store::{RecordStore, records};

pub struct PlanSession<'a> {
    store: &'a RecordStore,
    pub selected: Option<String>,
}

impl<'a> PlanSession<'a> {
    pub fn load(store: &'a RecordStore) -> Self {
        let selected = store.load(records::TRAINING_PLAN, None::<String>);
        Self { store, selected }
    }

    pub fn choose(&mut self, plan: TrainingPlan) -> &str {
        let text = plan.description();
        self.selected = Some(text.to_string());
        self.store.save(records::TRAINING_PLAN, text);
        text
    }

    pub fn selected_plan(&self) -> Option<TrainingPlan> {
        self.selected
            .as_deref()
            .and_then(TrainingPlan::from_description)
    }
}
