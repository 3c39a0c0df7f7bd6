//! Wire and canonical types for the risk-query contract

pub mod normalized;
pub mod request;
pub mod response;
pub mod warehouse;
