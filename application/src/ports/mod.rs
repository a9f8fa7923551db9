//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod backend_gateway;
pub mod clock;
pub mod completion_gateway;
