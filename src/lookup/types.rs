//! Host lookup data structures.

use serde::Deserialize;

/// Location and network owner of a host, as returned by the lookup service.
///
/// Every field is optional: the provider sends `null` for anything it does not
/// know, and a genuine `0.0` coordinate stays distinguishable from a missing
/// one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HostLocation {
    #[serde(rename = "country_name", default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub isp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_host_response() {
        let body = r#"{
            "ip_str": "1.2.3.4",
            "country_name": "United States",
            "country_code": "US",
            "city": "Ashburn",
            "longitude": -77.4,
            "latitude": 39.0,
            "isp": "ExampleNet",
            "ports": [22, 80]
        }"#;
        let location: HostLocation = serde_json::from_str(body).expect("valid body");
        assert_eq!(
            location,
            HostLocation {
                country: Some("United States".to_string()),
                city: Some("Ashburn".to_string()),
                longitude: Some(-77.4),
                latitude: Some(39.0),
                isp: Some("ExampleNet".to_string()),
            }
        );
    }

    #[test]
    fn test_nulls_and_missing_fields_are_none() {
        let body = r#"{"country_name": "Nigeria", "city": null, "latitude": 0.0}"#;
        let location: HostLocation = serde_json::from_str(body).expect("valid body");
        assert_eq!(location.country.as_deref(), Some("Nigeria"));
        assert_eq!(location.city, None);
        assert_eq!(location.latitude, Some(0.0));
        assert_eq!(location.longitude, None);
        assert_eq!(location.isp, None);
    }
}
