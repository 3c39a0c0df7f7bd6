//! Risk-query request payload

use crate::types::warehouse::Ambito;
use serde::{Deserialize, Serialize};

/// Payload for `POST /api/consultar-riesgo`.
///
/// Exactly these five keys go on the wire; client-side metadata must never
/// leak into the payload. `scenarios` and `security_measures` carry backend
/// codes from the fixed vocabularies, never human-readable labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskQueryRequest {
    /// Warehouse address (fulfillment sites prefix their code)
    pub address: String,

    /// Zone type
    pub ambito: Ambito,

    /// Backend scenario codes
    pub scenarios: Vec<String>,

    /// Backend security-measure codes
    pub security_measures: Vec<String>,

    /// Free-text comments
    pub comments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> RiskQueryRequest {
        RiskQueryRequest {
            address: "MXCD02 - Carretera Méx-Qro km 42".to_string(),
            ambito: Ambito::Urbano,
            scenarios: vec!["intrusion_armada".to_string()],
            security_measures: vec!["camaras".to_string(), "guardias".to_string()],
            comments: String::new(),
        }
    }

    #[test]
    fn test_payload_has_exactly_five_keys() {
        let json = serde_json::to_value(sample_request()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for key in ["address", "ambito", "scenarios", "security_measures", "comments"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn test_ambito_travels_lowercase() {
        let json = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(json["ambito"], "urbano");
    }

    #[test]
    fn test_round_trip() {
        let request = sample_request();
        let json = serde_json::to_string(&request).unwrap();
        let back: RiskQueryRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
