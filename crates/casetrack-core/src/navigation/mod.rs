//! Navigation: routes, the guard that gates them, and the navigator seam.

mod guard;
mod navigator;
mod route;

pub use guard::{GUARD_REDIRECT_TARGET, GuardDecision, RouteGuard, decide};
pub use navigator::{NavigationMode, Navigator};
pub use route::{ComplainantScreen, OfficerScreen, Route};
