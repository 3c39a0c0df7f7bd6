//! Assessment session
//!
//! Owns the single "current normalized result" slot. Every submission takes
//! a ticket from a monotonically increasing sequence counter; a completed
//! response is committed only while its ticket is still the latest issued,
//! so the displayed result always corresponds to the most recent query
//! regardless of resolution order.

use crate::config::ClientConfig;
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use vigia_client::{normalize_response, HttpRiskClient, RiskApi};
use vigia_core::{build_risk_query, AssessmentSelection, NormalizedResult, RiskQueryRequest, Warehouse};

/// Outcome of one submission
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Result committed to the session slot
    Updated(NormalizedResult),

    /// Backend reported no usable data (`success: false` or absent).
    /// The previous result, if any, stays in the slot.
    NoData,

    /// A newer query was issued while this one was in flight; the response
    /// was discarded
    Superseded,
}

struct CurrentResult {
    seq: u64,
    result: NormalizedResult,
}

/// Session holding the current result and the request sequence counter
pub struct AssessmentSession {
    api: Arc<dyn RiskApi>,
    seq: AtomicU64,
    in_flight: AtomicU64,
    current: Mutex<Option<CurrentResult>>,
}

impl AssessmentSession {
    /// Create a session over any risk backend
    pub fn new(api: Arc<dyn RiskApi>) -> Self {
        Self {
            api,
            seq: AtomicU64::new(0),
            in_flight: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Create a session over the HTTP backend described by `config`
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let client = HttpRiskClient::with_timeout(&config.base_url, config.timeout_secs)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Whether a submission is outstanding. UIs disable resubmission while
    /// this is true (debounce-by-disabling, not queueing).
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Clone of the current result, if any
    pub async fn current_result(&self) -> Option<NormalizedResult> {
        let slot = self.current.lock().await;
        slot.as_ref().map(|current| current.result.clone())
    }

    /// Build and submit a query from a warehouse and form selections.
    ///
    /// Validation failures block before any request is sent.
    pub async fn submit(
        &self,
        warehouse: Option<&Warehouse>,
        selection: &AssessmentSelection,
    ) -> Result<QueryOutcome> {
        let request = build_risk_query(warehouse, selection)?;
        self.submit_request(&request).await
    }

    /// Submit an already-built query
    pub async fn submit_request(&self, request: &RiskQueryRequest) -> Result<QueryOutcome> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let outcome = self.run_query(ticket, request).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }

    async fn run_query(&self, ticket: u64, request: &RiskQueryRequest) -> Result<QueryOutcome> {
        // Transport errors propagate; the slot keeps the previous result.
        let raw = self.api.query_risk(request).await?;

        if ticket != self.seq.load(Ordering::SeqCst) {
            tracing::warn!(ticket, "discarding stale risk response");
            return Ok(QueryOutcome::Superseded);
        }

        let result = match normalize_response(&raw) {
            Some(result) => result,
            None => {
                tracing::debug!(ticket, "backend returned no usable data");
                return Ok(QueryOutcome::NoData);
            }
        };

        let mut slot = self.current.lock().await;
        // Re-checked under the lock: a later ticket may have committed in
        // the meantime.
        if let Some(current) = slot.as_ref() {
            if current.seq > ticket {
                tracing::warn!(ticket, "discarding stale risk response");
                return Ok(QueryOutcome::Superseded);
            }
        }
        *slot = Some(CurrentResult {
            seq: ticket,
            result: result.clone(),
        });
        Ok(QueryOutcome::Updated(result))
    }
}
