//! Vigia Client - Transport and normalization
//!
//! HTTP clients for the risk-query backend, the warehouse catalog and the
//! AI chat service, plus the response normalizer that turns unpredictable
//! backend shapes into the canonical `NormalizedResult`.

pub mod catalog;
pub mod chat;
pub mod error;
pub mod mock;
pub mod normalize;
pub mod risk;

// Re-export core types
pub use catalog::{CatalogClient, CatalogMeasure, CatalogScenario, WarehouseInfo};
pub use chat::ChatClient;
pub use error::{ClientError, Result};
pub use mock::MockRiskApi;
pub use normalize::{extract_percent, normalize_response};
pub use risk::{HttpRiskClient, RiskApi, DEFAULT_TIMEOUT_SECS, RISK_QUERY_PATH};
