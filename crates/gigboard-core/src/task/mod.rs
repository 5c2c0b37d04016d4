//! Accepted-task domain: jobs a non-owner has committed to perform.

pub mod model;

pub use model::{AcceptedTask, JobAcceptance};
