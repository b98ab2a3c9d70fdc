//! Application layer for casetrack.
//!
//! Screens as plain state holders: each view owns a fetch gate, talks to the
//! server through [`CaseApi`](casetrack_core::CaseApi) and reports to the
//! user through a [`Notifier`](casetrack_core::ui::Notifier).

pub mod analytics_view;
pub mod auth;
pub mod debounce;
pub mod detail_view;
pub mod fetch_state;
pub mod forms;
pub mod list_view;
pub mod profile;
pub mod shell;
pub mod sources;

pub use analytics_view::{AnalyticsState, AnalyticsView};
pub use auth::AuthService;
pub use detail_view::{DetailMode, DetailState, FirDetail, FirDetailView};
pub use fetch_state::{FetchGate, FetchOutcome};
pub use forms::{FilterOptions, FormOptions, FormService};
pub use list_view::{ListSource, ListState, ListView, RemovableSource, RemoveOutcome, TextQuery};
pub use profile::ProfileService;
pub use shell::{Shell, Visit};
pub use sources::{
    ComplainantSource, FirQuery, FirSearchSource, MyFirsSource, OfficerQuery, OfficerSource,
    StationSource,
};
