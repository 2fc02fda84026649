pub mod metrics;
pub mod organization;
pub mod plan;
pub mod response;
pub mod retry;
pub mod session;
pub mod template;
pub mod validation;
