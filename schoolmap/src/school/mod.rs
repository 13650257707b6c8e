//! School record model
//!
//! Defines the [`School`] record as served by the Schools API. The map core
//! only interprets `id`, `name`, `latitude` and `longitude`; the remaining
//! descriptive fields are carried as opaque payload so the detail overlay
//! can present them without a second fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single school record.
///
/// Records are immutable values fetched from the API. `id` is the unique,
/// stable identity; `latitude`/`longitude` are WGS84 degrees. Everything
/// else is optional descriptive data (address, enrollment, contact,
/// provenance timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Unique, stable record identity.
    pub id: i64,

    /// Object ID carried over from the source dataset.
    #[serde(default)]
    pub objectid: i64,

    /// Display name of the school.
    pub name: String,

    /// Latitude in WGS84 degrees.
    pub latitude: f64,

    /// Longitude in WGS84 degrees.
    pub longitude: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countyfips: Option<String>,

    /// School level (elementary, middle, high, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ft_teacher: Option<i64>,

    /// Numeric facility type code from the source dataset.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub school_type: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncesid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub districtid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// Provenance: date of the source record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcedate: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelter_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl School {
    /// Create a record with only the fields the map core interprets.
    ///
    /// All descriptive fields are left empty. Primarily useful for local
    /// datasets and tests.
    pub fn new(id: i64, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            objectid: id,
            name: name.into(),
            latitude,
            longitude,
            address: None,
            city: None,
            state: None,
            zip: None,
            country: None,
            county: None,
            countyfips: None,
            level: None,
            st_grade: None,
            end_grade: None,
            enrollment: None,
            ft_teacher: None,
            school_type: None,
            status: None,
            population: None,
            ncesid: None,
            districtid: None,
            naics_code: None,
            naics_desc: None,
            website: None,
            telephone: None,
            sourcedate: None,
            val_date: None,
            val_method: None,
            source: None,
            shelter_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Single-line address summary, omitting missing parts.
    pub fn address_line(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(a) = self.address.as_deref() {
            parts.push(a);
        }
        if let Some(c) = self.city.as_deref() {
            parts.push(c);
        }
        if let Some(s) = self.state.as_deref() {
            parts.push(s);
        }
        let mut line = parts.join(", ");
        if let Some(z) = self.zip.as_deref() {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(z);
        }
        line
    }
}

impl std::fmt::Display for School {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (#{}) at {:.6}, {:.6}",
            self.name, self.id, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "id": 42,
            "objectid": 1042,
            "name": "Lincoln Elementary",
            "latitude": 40.7128,
            "longitude": -74.006
        }"#;

        let school: School = serde_json::from_str(json).unwrap();
        assert_eq!(school.id, 42);
        assert_eq!(school.objectid, 1042);
        assert_eq!(school.name, "Lincoln Elementary");
        assert!(school.address.is_none());
        assert!(school.enrollment.is_none());
        assert!(school.created_at.is_none());
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 7,
            "objectid": 907,
            "name": "Washington High",
            "address": "100 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701",
            "latitude": 39.7817,
            "longitude": -89.6501,
            "level": "HIGH",
            "enrollment": 1250,
            "ft_teacher": 85,
            "type": 1,
            "status": 1,
            "website": "https://example.org",
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-02T12:00:00Z"
        }"#;

        let school: School = serde_json::from_str(json).unwrap();
        assert_eq!(school.enrollment, Some(1250));
        assert_eq!(school.school_type, Some(1));
        assert_eq!(school.level.as_deref(), Some("HIGH"));
        assert!(school.created_at.is_some());
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let school = School::new(1, "Test School", 40.0, -74.0);
        let json = serde_json::to_string(&school).unwrap();

        assert!(json.contains("\"name\":\"Test School\""));
        // Optional fields are omitted, not emitted as null
        assert!(!json.contains("address"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_type_field_round_trips_under_wire_name() {
        let mut school = School::new(3, "Typed", 40.0, -74.0);
        school.school_type = Some(2);

        let json = serde_json::to_string(&school).unwrap();
        assert!(json.contains("\"type\":2"));

        let back: School = serde_json::from_str(&json).unwrap();
        assert_eq!(back.school_type, Some(2));
    }

    #[test]
    fn test_address_line() {
        let mut school = School::new(1, "Test", 40.0, -74.0);
        assert_eq!(school.address_line(), "");

        school.address = Some("100 Main St".to_string());
        school.city = Some("Springfield".to_string());
        school.state = Some("IL".to_string());
        school.zip = Some("62701".to_string());
        assert_eq!(school.address_line(), "100 Main St, Springfield, IL 62701");
    }

    #[test]
    fn test_display() {
        let school = School::new(42, "Lincoln Elementary", 40.7128, -74.006);
        let s = format!("{}", school);
        assert!(s.contains("Lincoln Elementary"));
        assert!(s.contains("#42"));
    }
}
