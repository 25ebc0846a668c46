// In memory student repository.
//
// Purpose
// - Serve the API without a database; all state is lost on restart.
//
// Responsibilities
// - Store students in insertion order behind a lock.
// - Hold the write guard across every read-modify-write so id generation,
//   merges and removals never interleave.

use tokio::sync::RwLock;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::seed::seed_students;
use crate::modules::students::core::student::{Student, StudentFields, StudentId};

#[derive(Default)]
pub struct InMemoryStudents {
    rows: RwLock<Vec<Student>>,
}

impl InMemoryStudents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            rows: RwLock::new(students),
        }
    }

    pub fn seeded() -> Self {
        Self::with_students(seed_students())
    }
}

fn next_id(rows: &[Student]) -> StudentId {
    rows.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

#[async_trait::async_trait]
impl StudentRepository for InMemoryStudents {
    async fn get_all(&self) -> Vec<Student> {
        self.rows.read().await.clone()
    }

    async fn get_by_id(&self, id: StudentId) -> Option<Student> {
        self.rows.read().await.iter().find(|s| s.id == id).cloned()
    }

    async fn create(&self, fields: StudentFields) -> Student {
        let mut guard = self.rows.write().await;
        let student = Student::new(next_id(&guard), fields);
        guard.push(student.clone());
        student
    }

    async fn update(&self, id: StudentId, fields: StudentFields) -> Option<Student> {
        let mut guard = self.rows.write().await;
        let student = guard.iter_mut().find(|s| s.id == id)?;
        student.merge(fields);
        Some(student.clone())
    }

    async fn remove(&self, id: StudentId) -> Option<Student> {
        let mut guard = self.rows.write().await;
        let index = guard.iter().position(|s| s.id == id)?;
        Some(guard.remove(index))
    }
}
