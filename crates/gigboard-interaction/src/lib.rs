pub mod dto;
pub mod identity_api;
pub mod job_api;

pub use identity_api::HttpIdentityProvider;
pub use job_api::HttpJobGateway;
