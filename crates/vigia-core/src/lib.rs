//! Vigia Core - Contract types for the warehouse risk-query backend
//!
//! This crate owns the wire contract with the external "4V" scoring engine:
//! - Scenario and security-measure vocabularies (label -> backend code)
//! - The warehouse model and per-submission form selections
//! - The `RiskQueryRequest` payload and its builder
//! - Raw backend response types and the canonical `NormalizedResult`

pub mod builder;
pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use builder::{build_risk_query, AssessmentSelection};
pub use error::{CoreError, Result};
pub use types::normalized::{NormalizedResult, ResultSet, SummaryEntry};
pub use types::request::RiskQueryRequest;
pub use types::response::{AnalysisInfo, CrimeData, RawRiskResponse, ResponseMetadata};
pub use types::warehouse::{Ambito, Warehouse, WarehouseKind};
