use crate::store::{RecordStore, records};

pub struct ActivitySession<'a> {
    store: &'a RecordStore,
    pub activities: Vec<String>,
}

impl<'a> ActivitySession<'a> {
    pub fn load(store: &'a RecordStore) -> Self {
        let activities = store.load(records::ACTIVITIES, Vec::new());
        Self { store, activities }
    }

    /// Append `input` (empty text included) and persist the whole log.
    /// The input buffer is left empty.
    pub fn log(&mut self, input: &mut String) {
        self.activities.push(std::mem::take(input));
        self.store.save(records::ACTIVITIES, &self.activities);
    }
}
