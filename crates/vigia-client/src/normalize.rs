//! Response normalization
//!
//! Turns an unpredictably-shaped backend response into exactly one
//! `NormalizedResult`, defensively, without failing on missing fields.
//!
//! Two scalar values only exist embedded in free-text recommendation
//! sentences; when the matching sentence is present, its percentage is
//! authoritative over the structured field. That is a contract smell on the
//! backend side, so the extraction lives in one pure function with the
//! pattern spelled out, and nothing else in the crate parses prose.

use regex::Regex;
use vigia_core::{NormalizedResult, RawRiskResponse, ResultSet, SummaryEntry};

/// Recommendation sentence carrying the scenario probability
const SCENARIO_PROBABILITY_MARKER: &str = "Probabilidad específica del escenario";

/// Recommendation sentence carrying the achieved risk reduction
const RISK_REDUCTION_MARKER: &str = "Reducción de riesgo alcanzada";

/// Engine id that marks a scientifically scored result
const SCIENTIFIC_ENGINE: &str = "scientific_risk_engine_v4";

/// Extract the first `<number>%` from a sentence.
///
/// Pattern: `(\d+\.?\d*)%`, first match wins. Returns `None` when the text
/// carries no percentage, in which case callers keep their structured
/// fallback.
pub fn extract_percent(text: &str) -> Option<f64> {
    let pattern = Regex::new(r"(\d+\.?\d*)%").ok()?;
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn percent_from_marked(recommendations: &[String], marker: &str) -> Option<f64> {
    recommendations
        .iter()
        .find(|rec| rec.contains(marker))
        .and_then(|rec| extract_percent(rec))
}

/// Normalize a raw backend response.
///
/// Returns `None` when `success` is falsy or absent — callers must treat
/// that as "no data", not as an error. Feeding the same response twice
/// yields identical results; the only timestamp is the backend's own
/// passthrough field.
pub fn normalize_response(raw: &RawRiskResponse) -> Option<NormalizedResult> {
    if !raw.success {
        return None;
    }

    let crime_data = raw.crime_data.clone();
    let metadata = raw.metadata.clone();
    let analysis = raw.analysis.clone();
    let recommendations = raw.recommendations.clone();

    // The recommendation-embedded value wins over crime_data.robo.
    let probability = percent_from_marked(&recommendations, SCENARIO_PROBABILITY_MARKER)
        .unwrap_or(crime_data.robo);
    let reduction =
        percent_from_marked(&recommendations, RISK_REDUCTION_MARKER).unwrap_or(0.0);

    let nivel_riesgo = if analysis.motor_usado.as_deref() == Some(SCIENTIFIC_ENGINE) {
        "CIENTÍFICO"
    } else {
        "REAL"
    };

    let location = metadata.location.clone();
    let entry = SummaryEntry {
        escenario: metadata
            .scenarios_analyzed
            .first()
            .cloned()
            .unwrap_or_else(|| "incidencia_general".to_string()),
        address: location
            .clone()
            .unwrap_or_else(|| "Ubicación desconocida".to_string()),
        nivel_riesgo: nivel_riesgo.to_string(),
        probabilidad: probability,
        riesgo_general: probability,
        medidas_seguridad_count: metadata.security_measures_count,
        nivel_vulnerabilidad: analysis
            .confiabilidad
            .clone()
            .unwrap_or_else(|| "MEDIUM".to_string()),
        warehouse_code: location.clone().unwrap_or_default(),
        warehouse_name: location.unwrap_or_default(),
        probabilidad_escenario: probability,
        probabilidad_numerica: probability,
        reduccion_por_medidas: reduction,
    };
    let summary = vec![entry];

    Some(NormalizedResult {
        results: ResultSet {
            summary: summary.clone(),
            datos_criminalidad: crime_data.clone(),
            scenario_analysis: analysis.clone(),
        },
        summary,
        datos_criminalidad: crime_data.clone(),
        datos_criminalidad_legacy: crime_data,
        motor: analysis
            .motor_usado
            .clone()
            .unwrap_or_else(|| "real_data_engine".to_string()),
        version: metadata
            .version
            .clone()
            .unwrap_or_else(|| "4.0.0".to_string()),
        timestamp: raw.timestamp.clone(),
        analysis,
        security_assessment: raw.security_assessment.clone(),
        recommendations,
        metadata,
    })
}
