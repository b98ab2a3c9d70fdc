//! Actor roles.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Who the current actor is logged in as.
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
pub enum Role {
    Complainant,
    Officer,
}

impl Role {
    /// Landing page of the role's dashboard subtree.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Complainant => "/complainant/dashboard",
            Role::Officer => "/officer/dashboard",
        }
    }

    /// API collection prefix for role-specific auth endpoints.
    pub fn api_segment(&self) -> &'static str {
        match self {
            Role::Complainant => "complainants",
            Role::Officer => "officers",
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Complainant => "/",
            Role::Officer => "/officer/login",
        }
    }
}
