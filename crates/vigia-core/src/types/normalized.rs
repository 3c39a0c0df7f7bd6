//! Canonical normalized result
//!
//! The shape presentation consumers read. Several fields are deliberately
//! redundant (four probability spellings, two crime-data keys); consumers
//! exist for each name, so all of them are populated with the same value.

use crate::types::response::{AnalysisInfo, CrimeData, ResponseMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the result summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Scenario code that was scored
    pub escenario: String,

    /// Location the score applies to
    pub address: String,

    /// "CIENTÍFICO" when the v4 scientific engine produced the result,
    /// "REAL" otherwise
    pub nivel_riesgo: String,

    pub probabilidad: f64,

    /// Same value as `probabilidad`
    pub riesgo_general: f64,

    pub medidas_seguridad_count: u32,

    pub nivel_vulnerabilidad: String,

    pub warehouse_code: String,

    pub warehouse_name: String,

    /// Same value as `probabilidad`
    pub probabilidad_escenario: f64,

    /// Same value as `probabilidad`
    pub probabilidad_numerica: f64,

    pub reduccion_por_medidas: f64,
}

/// Nested results block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub summary: Vec<SummaryEntry>,

    pub datos_criminalidad: CrimeData,

    pub scenario_analysis: AnalysisInfo,
}

/// Canonical result assembled from a raw backend response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub results: ResultSet,

    pub summary: Vec<SummaryEntry>,

    #[serde(rename = "datosCriminalidad")]
    pub datos_criminalidad: CrimeData,

    /// Legacy consumers read the snake_case spelling; both keys are emitted
    #[serde(rename = "datos_criminalidad")]
    pub datos_criminalidad_legacy: CrimeData,

    /// Scoring engine that produced the result
    pub motor: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,

    pub analysis: AnalysisInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_assessment: Option<Value>,

    pub recommendations: Vec<String>,

    pub metadata: ResponseMetadata,
}
