use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Carrier code -> airline display name, as returned by the search API.
pub type CarrierDictionary = HashMap<String, String>;

/// Aircraft code -> aircraft model name.
pub type AircraftDictionary = HashMap<String, String>;

/// Currency code -> currency display name.
pub type CurrencyDictionary = HashMap<String, String>;

/// Location code -> city/country codes.
pub type LocationDictionary = HashMap<String, LocationEntry>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    pub city_code: String,
    pub country_code: String,
}

/// Lookup dictionaries attached to a search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiDictionaries {
    pub locations: LocationDictionary,
    pub aircraft: AircraftDictionary,
    pub currencies: CurrencyDictionary,
    pub carriers: CarrierDictionary,
}

/// Resolves an airline name from its carrier code, falling back to the code
/// itself when the dictionary has no entry.
pub fn airline_name(carrier_code: &str, carriers: Option<&CarrierDictionary>) -> String {
    carriers
        .and_then(|dict| dict.get(carrier_code))
        .cloned()
        .unwrap_or_else(|| carrier_code.to_string())
}

/// Resolves an aircraft model name from its code. Dictionary entries win,
/// then the built-in table, then a generic `Aircraft {code}` label.
pub fn aircraft_name(code: &str, aircraft: Option<&AircraftDictionary>) -> String {
    if code.is_empty() {
        return String::new();
    }
    if let Some(name) = aircraft.and_then(|dict| dict.get(code)) {
        return name.clone();
    }
    match builtin_aircraft_name(code) {
        Some(name) => name.to_string(),
        None => format!("Aircraft {}", code),
    }
}

fn builtin_aircraft_name(code: &str) -> Option<&'static str> {
    match code {
        "744" => Some("BOEING 747-400"),
        "777" => Some("BOEING 777"),
        "788" => Some("BOEING 787-8"),
        "789" => Some("BOEING 787-9"),
        "320" => Some("AIRBUS A320"),
        "321" => Some("AIRBUS A321"),
        "350" => Some("AIRBUS A350"),
        "380" => Some("AIRBUS A380"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airline_name_prefers_dictionary() {
        let mut carriers = CarrierDictionary::new();
        carriers.insert("KL".to_string(), "KLM ROYAL DUTCH AIRLINES".to_string());

        assert_eq!(airline_name("KL", Some(&carriers)), "KLM ROYAL DUTCH AIRLINES");
        assert_eq!(airline_name("W3", Some(&carriers)), "W3");
        assert_eq!(airline_name("W3", None), "W3");
    }

    #[test]
    fn test_aircraft_name_fallback_chain() {
        let mut aircraft = AircraftDictionary::new();
        aircraft.insert("7M8".to_string(), "BOEING 737 MAX 8".to_string());

        assert_eq!(aircraft_name("7M8", Some(&aircraft)), "BOEING 737 MAX 8");
        assert_eq!(aircraft_name("320", Some(&aircraft)), "AIRBUS A320");
        assert_eq!(aircraft_name("E95", None), "Aircraft E95");
        assert_eq!(aircraft_name("", None), "");
    }

    #[test]
    fn test_dictionaries_deserialize_camel_case() {
        let json = r#"
            {
                "locations": {
                    "LOS": { "cityCode": "LOS", "countryCode": "NG" }
                },
                "carriers": { "KL": "KLM ROYAL DUTCH AIRLINES" }
            }
        "#;
        let dicts: ApiDictionaries = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(dicts.locations["LOS"].country_code, "NG");
        assert_eq!(dicts.carriers["KL"], "KLM ROYAL DUTCH AIRLINES");
        assert!(dicts.aircraft.is_empty());
    }
}
