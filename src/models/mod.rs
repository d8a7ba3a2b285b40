//! Data models for the hiring portal.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod candidate;
mod form;
mod job;

pub use candidate::*;
pub use form::*;
pub use job::*;
