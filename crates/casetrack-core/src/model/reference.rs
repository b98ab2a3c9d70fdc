//! Lookup entities: officers, complainants, stations, crime types.
//!
//! These are fetched for selection controls and joined display. They are
//! never cached; every screen re-fetches on mount.

use serde::{Deserialize, Serialize};

use super::fir::StationRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Officer {
    pub officer_id: String,
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
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "PoliceStation", default)]
    pub station: Option<StationRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complainant {
    pub complainant_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cnic: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoliceStation {
    pub station_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeType {
    pub type_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeCategory {
    pub category_id: String,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
}

/// The logged-in actor's own record, as returned by `/user`.
///
/// Officers and complainants share this endpoint shape loosely, so every
/// field beyond the name is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, alias = "officer_id", alias = "complainant_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cnic: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub badge_no: Option<String>,
    #[serde(default)]
    pub officer_rank: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "PoliceStation", default)]
    pub station: Option<StationRef>,
}
