//! Collaborator-facing interfaces

pub mod http;
