//! GeoJSON dataset parsing
//!
//! Parses a GeoJSON `FeatureCollection` of school point features into
//! [`School`] records. The source dataset uses lowercase snake_case property
//! keys and Point geometries with `[longitude, latitude]` coordinates;
//! `objectid` appears as either a string or a number depending on the export.
//!
//! Parsed records feed [`crate::api::LocalSchoolsApi`] and the CLI's dataset
//! inspection commands.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::school::School;

/// Errors that can occur while loading a GeoJSON dataset.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The document is valid JSON but not a FeatureCollection.
    #[error("not a FeatureCollection: found \"{0}\"")]
    NotFeatureCollection(String),
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    collection_type: String,
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Properties,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    geometry_type: String,
    coordinates: Vec<f64>,
}

/// `objectid` appears as a string in some exports and a number in others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ObjectId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ObjectId {
    fn as_i64(&self) -> Option<i64> {
        match self {
            ObjectId::Int(v) => Some(*v),
            ObjectId::Float(v) => Some(*v as i64),
            ObjectId::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    objectid: Option<ObjectId>,
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    country: Option<String>,
    county: Option<String>,
    countyfips: Option<String>,
    level: Option<String>,
    st_grade: Option<String>,
    end_grade: Option<String>,
    enrollment: Option<f64>,
    ft_teacher: Option<f64>,
    #[serde(rename = "type")]
    school_type: Option<f64>,
    status: Option<f64>,
    population: Option<f64>,
    ncesid: Option<String>,
    districtid: Option<String>,
    naics_code: Option<String>,
    naics_desc: Option<String>,
    website: Option<String>,
    telephone: Option<String>,
    sourcedate: Option<String>,
    val_date: Option<String>,
    val_method: Option<String>,
    source: Option<String>,
    shelter_id: Option<String>,
}

/// Parse an RFC 3339 timestamp, returning `None` for absent or unparseable
/// values. Source dates are provenance metadata, not required fields.
fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a GeoJSON FeatureCollection document into school records.
///
/// Features without a Point geometry or a name are skipped with a warning;
/// the dataset contains a handful of such entries and they cannot be
/// rendered or selected. Record ids come from `objectid` when present,
/// otherwise from the feature's position in the collection.
pub fn parse_feature_collection(json: &str) -> Result<Vec<School>, GeoJsonError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    if collection.collection_type != "FeatureCollection" {
        return Err(GeoJsonError::NotFeatureCollection(
            collection.collection_type,
        ));
    }

    let mut schools = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let Some(geometry) = feature.geometry else {
            warn!(index, "skipping feature without geometry");
            continue;
        };
        if geometry.geometry_type != "Point" || geometry.coordinates.len() < 2 {
            warn!(
                index,
                geometry_type = %geometry.geometry_type,
                "skipping feature with non-point geometry"
            );
            continue;
        }
        let Some(name) = feature.properties.name.clone() else {
            warn!(index, "skipping feature without name");
            continue;
        };

        // GeoJSON coordinate order is [longitude, latitude]
        let longitude = geometry.coordinates[0];
        let latitude = geometry.coordinates[1];

        let props = feature.properties;
        let objectid = props
            .objectid
            .as_ref()
            .and_then(ObjectId::as_i64)
            .unwrap_or(index as i64 + 1);

        let mut school = School::new(objectid, name, latitude, longitude);
        school.address = props.address;
        school.city = props.city;
        school.state = props.state;
        school.zip = props.zip;
        school.country = props.country;
        school.county = props.county;
        school.countyfips = props.countyfips;
        school.level = props.level;
        school.st_grade = props.st_grade;
        school.end_grade = props.end_grade;
        school.enrollment = props.enrollment.map(|v| v as i64);
        school.ft_teacher = props.ft_teacher.map(|v| v as i64);
        school.school_type = props.school_type.map(|v| v as i64);
        school.status = props.status.map(|v| v as i64);
        school.population = props.population.map(|v| v as i64);
        school.ncesid = props.ncesid;
        school.districtid = props.districtid;
        school.naics_code = props.naics_code;
        school.naics_desc = props.naics_desc;
        school.website = props.website;
        school.telephone = props.telephone;
        school.sourcedate = parse_timestamp(props.sourcedate.as_deref());
        school.val_date = parse_timestamp(props.val_date.as_deref());
        school.val_method = props.val_method;
        school.source = props.source;
        school.shelter_id = props.shelter_id;

        schools.push(school);
    }

    Ok(schools)
}

/// Load school records from a GeoJSON file on disk.
pub fn load_schools(path: impl AsRef<Path>) -> Result<Vec<School>, GeoJsonError> {
    let json = fs::read_to_string(path)?;
    parse_feature_collection(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "objectid": "101",
                    "name": "Lincoln Elementary",
                    "city": "Springfield",
                    "state": "IL",
                    "enrollment": 430.0,
                    "type": 1,
                    "sourcedate": "2018-09-21T00:00:00Z"
                },
                "geometry": {"type": "Point", "coordinates": [-89.6501, 39.7817]}
            },
            {
                "type": "Feature",
                "properties": {
                    "objectid": 102,
                    "name": "Washington High"
                },
                "geometry": {"type": "Point", "coordinates": [-74.006, 40.7128]}
            },
            {
                "type": "Feature",
                "properties": {"name": "No Geometry School"},
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": {"objectid": 104},
                "geometry": {"type": "Point", "coordinates": [-80.0, 35.0]}
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample_collection() {
        let schools = parse_feature_collection(SAMPLE).unwrap();

        // Features without geometry or name are skipped
        assert_eq!(schools.len(), 2);

        let lincoln = &schools[0];
        assert_eq!(lincoln.id, 101);
        assert_eq!(lincoln.name, "Lincoln Elementary");
        assert!((lincoln.latitude - 39.7817).abs() < 1e-9);
        assert!((lincoln.longitude - (-89.6501)).abs() < 1e-9);
        assert_eq!(lincoln.enrollment, Some(430));
        assert_eq!(lincoln.school_type, Some(1));
        assert!(lincoln.sourcedate.is_some());
    }

    #[test]
    fn test_objectid_accepted_as_string_or_number() {
        let schools = parse_feature_collection(SAMPLE).unwrap();
        assert_eq!(schools[0].id, 101); // from "101"
        assert_eq!(schools[1].id, 102); // from 102
    }

    #[test]
    fn test_rejects_non_feature_collection() {
        let err = parse_feature_collection(r#"{"type": "Feature", "features": []}"#).unwrap_err();
        assert!(matches!(err, GeoJsonError::NotFeatureCollection(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = parse_feature_collection("not json").unwrap_err();
        assert!(matches!(err, GeoJsonError::Decode(_)));
    }

    #[test]
    fn test_load_schools_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let schools = load_schools(file.path()).unwrap();
        assert_eq!(schools.len(), 2);
    }

    #[test]
    fn test_load_schools_missing_file() {
        let err = load_schools("/nonexistent/schools.geojson").unwrap_err();
        assert!(matches!(err, GeoJsonError::Io(_)));
    }
}
