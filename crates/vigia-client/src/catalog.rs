//! Warehouse catalog client
//!
//! Read-only GETs against the `/api/ml/*` endpoints. These feed warehouse
//! selection; the risk-query contract itself lives in `risk.rs`.

use crate::error::{ClientError, Result};
use crate::risk::DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// One warehouse from the catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseInfo {
    pub codigo: String,
    pub nombre: String,
    pub municipio: String,
    pub estado: String,
    #[serde(default)]
    pub coordenadas: HashMap<String, f64>,
}

/// Scenario catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogScenario {
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub criticidad: String,
}

/// Security-measure catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeasure {
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub efectividad: String,
    #[serde(default)]
    pub tipo: String,
}

#[derive(Debug, Deserialize)]
struct ScenarioCatalogBody {
    #[serde(default)]
    escenarios_ml: Vec<CatalogScenario>,
}

#[derive(Debug, Deserialize)]
struct MeasureCatalogBody {
    #[serde(default)]
    medidas_ml: Vec<CatalogMeasure>,
}

/// Client for the warehouse catalog endpoints
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a catalog client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching catalog");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, DEFAULT_TIMEOUT_SECS))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("catalog response: {e}")))
    }

    /// `GET /api/ml/warehouses`
    pub async fn warehouses(&self) -> Result<Vec<WarehouseInfo>> {
        self.get_json("/api/ml/warehouses").await
    }

    /// `GET /api/ml/warehouse/{code}` — per-warehouse details vary by site,
    /// returned as-is
    pub async fn warehouse_details(&self, code: &str) -> Result<Value> {
        self.get_json(&format!("/api/ml/warehouse/{code}")).await
    }

    /// `GET /api/ml/scenarios`
    pub async fn scenarios(&self) -> Result<Vec<CatalogScenario>> {
        let body: ScenarioCatalogBody = self.get_json("/api/ml/scenarios").await?;
        Ok(body.escenarios_ml)
    }

    /// `GET /api/ml/security-measures`
    pub async fn security_measures(&self) -> Result<Vec<CatalogMeasure>> {
        let body: MeasureCatalogBody = self.get_json("/api/ml/security-measures").await?;
        Ok(body.medidas_ml)
    }
}
