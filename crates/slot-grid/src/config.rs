//! Salon configuration: opening hours, time zone, and offered services.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::grid::daily_time_slots;
use crate::local::parse_timezone;
use crate::time_of_day::TimeOfDay;

/// Services offered when the config does not list any.
pub const DEFAULT_SERVICES: [&str; 6] = [
    "Cut",
    "Blow-dry",
    "Cut & color",
    "Beard trim",
    "Cut & beard trim",
    "Extensions",
];

/// Opening hours in whole local hours, and the IANA zone they are local to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalonHours {
    pub opens_at: u32,
    pub closes_at: u32,
    pub timezone: String,
}

impl Default for SalonHours {
    fn default() -> Self {
        SalonHours {
            opens_at: 9,
            closes_at: 11,
            timezone: "UTC".to_string(),
        }
    }
}

impl SalonHours {
    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }

    /// The day's half-hour slots; see [`daily_time_slots`].
    pub fn time_slots(&self) -> Vec<TimeOfDay> {
        daily_time_slots(self.opens_at, self.closes_at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalonConfig {
    pub hours: SalonHours,
    pub selectable_services: Vec<String>,
}

impl Default for SalonConfig {
    fn default() -> Self {
        SalonConfig {
            hours: SalonHours::default(),
            selectable_services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SalonConfig {
    /// Parse from JSON. Missing fields take their defaults; the time zone
    /// must be a valid IANA name.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidConfig`] for malformed JSON or
    /// [`SlotError::InvalidTimezone`] for an unknown zone.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SalonConfig =
            serde_json::from_str(json).map_err(|e| SlotError::InvalidConfig(e.to_string()))?;
        config.hours.tz()?;
        Ok(config)
    }

    pub fn offers(&self, service: &str) -> bool {
        self.selectable_services.iter().any(|s| s == service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SalonConfig::default();
        assert_eq!(config.hours.opens_at, 9);
        assert_eq!(config.hours.closes_at, 11);
        assert_eq!(config.hours.tz().unwrap(), chrono_tz::UTC);
        assert_eq!(config.selectable_services.len(), 6);
        assert!(config.offers("Cut & beard trim"));
        assert!(!config.offers("Manicure"));
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            SalonConfig::from_json(r#"{"hours": {"closesAt": 17, "timezone": "Europe/Dublin"}}"#)
                .unwrap();
        assert_eq!(config.hours.opens_at, 9);
        assert_eq!(config.hours.closes_at, 17);
        assert_eq!(config.hours.tz().unwrap(), chrono_tz::Europe::Dublin);
        assert_eq!(config.selectable_services, SalonConfig::default().selectable_services);
    }

    #[test]
    fn test_from_json_services() {
        let config = SalonConfig::from_json(r#"{"selectableServices": ["Fade"]}"#).unwrap();
        assert_eq!(config.selectable_services, ["Fade"]);
    }

    #[test]
    fn test_from_json_bad_zone() {
        let err = SalonConfig::from_json(r#"{"hours": {"timezone": "Nowhere/Land"}}"#).unwrap_err();
        assert!(matches!(err, SlotError::InvalidTimezone(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = SalonConfig::from_json("{hours: 9").unwrap_err();
        assert!(err.to_string().contains("Invalid config"), "got: {err}");
    }

    #[test]
    fn test_time_slots_from_hours() {
        let hours = SalonHours {
            opens_at: 9,
            closes_at: 17,
            ..Default::default()
        };
        assert_eq!(hours.time_slots().len(), 16);
    }
}
