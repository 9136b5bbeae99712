//! Service layer for business logic and orchestration.
//!
//! The service sits between the presentation boundary and the repository:
//! it enforces the invariants that span multiple entities (referential
//! pre-checks, date ordering) and exposes one entry point independent of
//! the concrete entity kind.

pub mod error;
pub mod gym;


pub use error::{ServiceError, ServiceResult};
pub use gym::GymService;
