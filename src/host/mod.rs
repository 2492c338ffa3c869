//! Host-facing contract and JSON-lines bridge for native app integration.

pub mod contract;
pub mod handler;
pub mod stdio;
