//! Raw backend response types
//!
//! The backend controls these shapes and does not guarantee them; every
//! field defaults when absent so deserialization never fails on a missing
//! block. Unknown keys inside the passthrough blocks are preserved via
//! flattened maps, since presentation consumers render them as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Crime statistics for the queried location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrimeData {
    #[serde(default)]
    pub robo: f64,

    #[serde(default)]
    pub homicidio: f64,

    #[serde(default)]
    pub extorsion: f64,

    /// Data source name (e.g. "SESNSP")
    #[serde(default)]
    pub fuente: String,

    /// Reliability grade of the source
    #[serde(default)]
    pub confiabilidad: String,

    #[serde(default)]
    pub total_delitos: f64,

    /// Extra keys the backend may add, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata block describing what was analyzed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Location string echoed by the backend
    #[serde(default)]
    pub location: Option<String>,

    /// Scenario codes the engine actually scored
    #[serde(default)]
    pub scenarios_analyzed: Vec<String>,

    /// Number of security measures considered
    #[serde(default)]
    pub security_measures_count: u32,

    /// Engine version string
    #[serde(default)]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Analysis block naming the engine that produced the result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInfo {
    /// Scoring engine identifier (e.g. "scientific_risk_engine_v4")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_usado: Option<String>,

    /// Confidence grade of the analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confiabilidad: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw response from `POST /api/consultar-riesgo`, shape not guaranteed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRiskResponse {
    /// Absent counts as failure
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub crime_data: CrimeData,

    #[serde(default)]
    pub metadata: ResponseMetadata,

    #[serde(default)]
    pub analysis: AnalysisInfo,

    /// Free-text recommendations; some embed percentages that are
    /// authoritative over the structured fields
    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Passthrough, not interpreted
    #[serde(default)]
    pub timestamp: Option<Value>,

    /// Passthrough, not interpreted
    #[serde(default)]
    pub security_assessment: Option<Value>,
}
