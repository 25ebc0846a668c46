// Composition root for the students service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the repository and wire it into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
