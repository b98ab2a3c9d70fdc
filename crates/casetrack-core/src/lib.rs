//! Domain layer for casetrack.
//!
//! Holds the types and seams shared by the infrastructure and application
//! crates: roles and the role store, the route guard, API models, the
//! `CaseApi` trait, and client-side validation.

pub mod api;
pub mod error;
pub mod model;
pub mod navigation;
pub mod session;
pub mod ui;
pub mod validation;

pub use api::{ApiResult, CaseApi};
pub use error::{ApiError, CaseTrackError, Result};
pub use session::{Role, SessionRoleStore};
