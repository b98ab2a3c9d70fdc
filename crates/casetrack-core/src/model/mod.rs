//! Domain models exchanged with the API.

mod analytics;
mod envelope;
mod fir;
mod forms;
mod reference;
mod time;

pub use analytics::{AnalyticsDataset, AnalyticsRow, TimeGranularity};
pub use envelope::{Ack, Envelope};
pub use fir::{
    Arrest, ComplainantRef, CrimeTypeRef, Evidence, Fir, FirStatus, HistoryEntry, OfficerRef,
    StationRef, Suspect, SuspectRef,
};
pub use forms::{
    FirFilters, FirSearchRequest, LoginCredentials, NewArrest, NewComplainant, NewEvidence,
    NewFir, NewHistoryEntry, NewOfficer, NewStation, NewSuspect, StatusChange,
};
pub use reference::{Complainant, CrimeCategory, CrimeType, Officer, PoliceStation, Profile};
pub use time::display_timestamp;

use serde::{Deserialize, Deserializer};

/// Text fields the server fills from nullable columns. `null` reads as `""`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
