//! Vigia SDK
//!
//! High-level API for the warehouse risk-assessment client: configuration,
//! the assessment session (current-result slot with stale-response
//! discarding), and re-exports of the contract types.

pub mod config;
pub mod error;
pub mod session;

// Re-export main types
pub use config::ClientConfig;
pub use error::{Result, SdkError};
pub use session::{AssessmentSession, QueryOutcome};

// Re-export commonly used types from dependencies
pub use vigia_client::{CatalogClient, ChatClient, HttpRiskClient, MockRiskApi, RiskApi};
pub use vigia_core::{
    build_risk_query, Ambito, AssessmentSelection, NormalizedResult, RiskQueryRequest,
    SummaryEntry, Warehouse, WarehouseKind,
};
