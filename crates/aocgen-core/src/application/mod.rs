//! Application layer: orchestration on top of the domain.
//!
//! Contains the driven ports (traits the adapters implement) and the
//! services that coordinate them.  No I/O happens here directly.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GenerateReport, ScaffoldService};
