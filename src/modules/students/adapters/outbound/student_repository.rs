// Port for the canonical student collection.
//
// Purpose
// - Let use cases work against a trait so tests can inject isolated stores.
//
// Responsibilities
// - Keep insertion order and hand out copies, never references to internal state.
// - Apply each mutation atomically with respect to other mutations.

use async_trait::async_trait;

use crate::modules::students::core::student::{Student, StudentFields, StudentId};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn get_all(&self) -> Vec<Student>;

    async fn get_by_id(&self, id: StudentId) -> Option<Student>;

    /// Stores a new student under `max(existing ids) + 1`, or `1` when empty.
    async fn create(&self, fields: StudentFields) -> Student;

    /// Merges `fields` over the stored student, keeping its id.
    async fn update(&self, id: StudentId, fields: StudentFields) -> Option<Student>;

    async fn remove(&self, id: StudentId) -> Option<Student>;
}
