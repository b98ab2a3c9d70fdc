//! Analytics datasets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// One chart row. Shapes differ per dataset and are only interpreted by the
/// chart layer, so rows stay as JSON objects.
pub type AnalyticsRow = Map<String, Value>;

/// Time bucket for the crime-rate series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeGranularity {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

/// The seven aggregate datasets, in the order they are requested.
///
/// `FirsByStatus` is listed first: its success flag gates the whole batch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum AnalyticsDataset {
    FirsByStatus,
    CrimeRate,
    OfficerWorkload,
    OfficerSolvedFirs,
    StationFirs,
    FirsByCrimeType,
    FirsByCrimeCategory,
}

impl AnalyticsDataset {
    /// Path below `/api/analytics/`.
    pub fn endpoint(&self, granularity: TimeGranularity) -> String {
        match self {
            AnalyticsDataset::CrimeRate => {
                format!("/api/analytics/crime-rate?filter={}", granularity)
            }
            other => format!("/api/analytics/{}", other.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_endpoints() {
        assert_eq!(
            AnalyticsDataset::FirsByStatus.endpoint(TimeGranularity::Day),
            "/api/analytics/firs-by-status"
        );
        assert_eq!(
            AnalyticsDataset::CrimeRate.endpoint(TimeGranularity::Month),
            "/api/analytics/crime-rate?filter=month"
        );
        assert_eq!(
            AnalyticsDataset::OfficerSolvedFirs.endpoint(TimeGranularity::Day),
            "/api/analytics/officer-solved-firs"
        );
    }

    #[test]
    fn test_first_dataset_is_status() {
        assert_eq!(AnalyticsDataset::iter().next(), Some(AnalyticsDataset::FirsByStatus));
        assert_eq!(AnalyticsDataset::iter().count(), 7);
    }
}
