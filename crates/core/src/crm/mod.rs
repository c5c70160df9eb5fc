//! Client and project domain types.

pub mod types;

pub use types::{Client, ClientStatus, Project, ProjectStatus};
