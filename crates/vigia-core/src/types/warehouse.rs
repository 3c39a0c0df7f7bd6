//! Warehouse model

use serde::{Deserialize, Serialize};

/// Zone type of a warehouse, sent to the backend as `ambito`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ambito {
    #[default]
    Urbano,
    Suburbano,
    Industrial,
    Rural,
}

/// Warehouse category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseKind {
    /// Fulfillment center with an official code (e.g. "MXCD02")
    Fulfillment,
    /// Regional / cross-dock site
    #[default]
    Regional,
}

/// A selectable warehouse record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Official warehouse code (e.g. "MXCD02")
    pub code: String,

    /// Display name
    pub name: String,

    /// Street address
    pub address: String,

    /// Region or state
    #[serde(default)]
    pub region: String,

    /// Zone type sent to the backend
    #[serde(default)]
    pub ambito: Ambito,

    /// Warehouse category
    #[serde(default)]
    pub kind: WarehouseKind,
}

impl Warehouse {
    /// Create a new warehouse record
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            address: address.into(),
            region: String::new(),
            ambito: Ambito::default(),
            kind: WarehouseKind::default(),
        }
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the zone type
    pub fn with_ambito(mut self, ambito: Ambito) -> Self {
        self.ambito = ambito;
        self
    }

    /// Set the warehouse category
    pub fn with_kind(mut self, kind: WarehouseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Address as it travels on the wire.
    ///
    /// Fulfillment warehouses prefix their official code onto the address
    /// ("MXCD02 - <address>") so the backend can detect the site and route
    /// the query to the specialized engine.
    pub fn wire_address(&self) -> String {
        match self.kind {
            WarehouseKind::Fulfillment if !self.code.is_empty() => {
                format!("{} - {}", self.code, self.address)
            }
            _ => self.address.clone(),
        }
    }
}
