use crate::storage::StudentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: StudentStore,
}

impl AppState {
    pub fn new(store: StudentStore) -> Self {
        Self { store }
    }
}
