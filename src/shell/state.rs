use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::adapters::outbound::students_in_memory::InMemoryStudents;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    /// In memory store, optionally pre-filled with the seed records.
    pub fn in_memory(seeded: bool) -> Self {
        let students = if seeded {
            InMemoryStudents::seeded()
        } else {
            InMemoryStudents::new()
        };
        Self::new(Arc::new(students))
    }
}
