//! Request payloads and their client-side rules.

use serde::{Deserialize, Serialize};

use super::fir::FirStatus;
use crate::validation::{CNIC_PATTERN, PHONE_PATTERN, Validate, ValidationErrors, field};

/// Login form. The identifier may be an email, CNIC or phone number; the
/// server receives it under `email`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginCredentials {
    #[serde(rename = "email")]
    pub identifier: String,
    pub password: String,
}

impl Validate for LoginCredentials {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "identifier", &self.identifier)
            .required("Email, CNIC, or Phone is required");
        field(&mut errors, "password", &self.password)
            .required("Password is required")
            .min_len(3, "Password must be at least 3 characters");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFir {
    /// CNIC of the complainant the FIR is filed for.
    pub complainant_id: String,
    pub officer_id: String,
    pub station_id: String,
    pub type_id: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
}

impl Validate for NewFir {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "complainant_id", &self.complainant_id).required("Please enter CNIC");
        field(&mut errors, "officer_id", &self.officer_id).required("Please select an officer");
        field(&mut errors, "station_id", &self.station_id).required("Please select a station");
        field(&mut errors, "type_id", &self.type_id).required("Please select a crime type");
        field(&mut errors, "description", &self.description)
            .required("Please enter description");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOfficer {
    pub station_id: String,
    pub name: String,
    pub badge_no: String,
    pub cnic: String,
    pub officer_rank: String,
    pub email: String,
    pub password: String,
}

impl Validate for NewOfficer {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "station_id", &self.station_id).required("Please select a station");
        field(&mut errors, "name", &self.name).required("Name is required");
        field(&mut errors, "badge_no", &self.badge_no).required("Badge number is required");
        field(&mut errors, "cnic", &self.cnic)
            .required("CNIC is required")
            .pattern(&CNIC_PATTERN, "Invalid CNIC format");
        field(&mut errors, "officer_rank", &self.officer_rank).required("Rank is required");
        field(&mut errors, "email", &self.email)
            .required("Email is required")
            .email("Invalid email");
        field(&mut errors, "password", &self.password)
            .required("Password is required")
            .min_len(4, "Minimum 4 characters");
        errors.into_result()
    }
}

/// Used both by officer-side creation and public self-registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewComplainant {
    pub name: String,
    pub phone: String,
    pub cnic: String,
    pub email: String,
    pub password: String,
    pub address: String,
}

impl Validate for NewComplainant {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "name", &self.name)
            .required("Name is required")
            .min_len(3, "Name must be at least 3 characters");
        field(&mut errors, "phone", &self.phone)
            .required("Phone number is required")
            .pattern(
                &PHONE_PATTERN,
                "Phone must be in Pakistani format (+92 XXX XXXXXX)",
            );
        field(&mut errors, "cnic", &self.cnic)
            .required("CNIC is required")
            .pattern(&CNIC_PATTERN, "CNIC format: 42231-5495533-9");
        field(&mut errors, "email", &self.email)
            .required("Email is required")
            .email("Enter a valid email address");
        field(&mut errors, "password", &self.password)
            .required("Password is required")
            .min_len(4, "Password must be at least 4 characters");
        field(&mut errors, "address", &self.address)
            .required("Address is required")
            .min_len(5, "Address is too short");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStation {
    pub name: String,
    pub district: String,
    pub province: String,
    pub city: String,
}

impl Validate for NewStation {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "name", &self.name).required("Station name is required");
        field(&mut errors, "district", &self.district).required("District is required");
        field(&mut errors, "province", &self.province).required("Province is required");
        field(&mut errors, "city", &self.city).required("City is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvidence {
    pub evidence_type: String,
    pub file_url: String,
}

impl Validate for NewEvidence {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "evidence_type", &self.evidence_type)
            .required("Evidence type is required");
        field(&mut errors, "file_url", &self.file_url).required("File URL is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSuspect {
    pub name: String,
    pub cnic: String,
    pub description: String,
}

impl Validate for NewSuspect {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "name", &self.name).required("Name is required");
        field(&mut errors, "cnic", &self.cnic).required("CNIC is required");
        field(&mut errors, "description", &self.description)
            .required("Description is required");
        errors.into_result()
    }
}

/// Arrest against an existing suspect. `fir_id` is filled in by the detail
/// view before submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewArrest {
    #[serde(default)]
    pub fir_id: String,
    pub suspect_id: String,
    pub officer_id: String,
    pub description: String,
}

impl Validate for NewArrest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        field(&mut errors, "suspect_id", &self.suspect_id).required("Please select a suspect");
        field(&mut errors, "officer_id", &self.officer_id).required("Please select an officer");
        field(&mut errors, "description", &self.description)
            .required("Description is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHistoryEntry {
    pub status: Option<FirStatus>,
    pub description: String,
}

impl Validate for NewHistoryEntry {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.status.is_none() {
            errors.push("status", "Status is required");
        }
        field(&mut errors, "description", &self.description)
            .required("Description is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: FirStatus,
}

/// Officer-side FIR filters. Empty strings mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirFilters {
    pub officer_id: String,
    pub station_id: String,
    pub type_id: String,
    pub status: String,
}

/// Body of `POST /api/firs/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirSearchRequest {
    pub filters: FirFilters,
    pub search: String,
    #[serde(rename = "sortField")]
    pub sort_field: String,
    #[serde(rename = "sortOrder")]
    pub sort_order: String,
}

impl FirSearchRequest {
    /// Newest first, as the FIR table shows them.
    pub fn new(filters: FirFilters, search: impl Into<String>) -> Self {
        Self {
            filters,
            search: search.into(),
            sort_field: "date_filed".to_string(),
            sort_order: "desc".to_string(),
        }
    }
}
