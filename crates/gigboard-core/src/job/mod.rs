//! Job domain: the posted-job model and the remote gateway seam.

pub mod gateway;
pub mod model;

pub use gateway::JobGateway;
pub use model::{Job, JobUpdate, NewJob, SortOrder, JOB_CATEGORIES};
