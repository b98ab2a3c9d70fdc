//! FIR aggregate and its child collections.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Investigation state of a FIR. Any status may move to any other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirStatus {
    Pending,
    Investigation,
    Solved,
    Closed,
}

/// Officer as joined onto a FIR or arrest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OfficerRef {
    #[serde(default)]
    pub officer_id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub badge_no: Option<String>,
    #[serde(default)]
    pub cnic: Option<String>,
    #[serde(default)]
    pub officer_rank: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplainantRef {
    #[serde(default)]
    pub complainant_id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cnic: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StationRef {
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrimeTypeRef {
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
}

/// First Information Report. Server-owned; the client holds read copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fir {
    pub fir_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub description: String,
    pub status: FirStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "Officer", default)]
    pub officer: Option<OfficerRef>,
    #[serde(rename = "Complainant", default)]
    pub complainant: Option<ComplainantRef>,
    #[serde(rename = "PoliceStation", default)]
    pub station: Option<StationRef>,
    #[serde(rename = "CrimeType", default)]
    pub crime_type: Option<CrimeTypeRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub evidence_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub evidence_type: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub file_url: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suspect {
    pub suspect_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub cnic: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Suspect as joined onto an arrest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuspectRef {
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub cnic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrest {
    pub arrest_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub description: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "Officer", default)]
    pub officer: Option<OfficerRef>,
    #[serde(rename = "Suspect", default)]
    pub suspect: Option<SuspectRef>,
}

/// Status log entry. Recorded by the server, never computed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub history_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}
