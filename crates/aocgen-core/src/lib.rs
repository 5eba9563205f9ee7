//! aocgen core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the aocgen
//! puzzle-scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           aocgen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ScaffoldService                │
//! │   plan (pure) ──► apply (writes)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Ports: TemplateSource, Renderer,      │
//! │          Filesystem                     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    aocgen-adapters (infrastructure)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Domain: Day, Layout, RenderContext,   │
//! │           ScaffoldPlan (pure logic)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use aocgen_core::{
//!     application::ScaffoldService,
//!     domain::{Day, Layout},
//! };
//! # fn adapters() -> (Box<dyn aocgen_core::application::ports::TemplateSource>,
//! #                   Box<dyn aocgen_core::application::ports::TemplateRenderer>,
//! #                   Box<dyn aocgen_core::application::ports::Filesystem>) { unimplemented!() }
//!
//! let day: Day = "5".parse().unwrap();
//! let (templates, renderer, filesystem) = adapters();
//! let service = ScaffoldService::new(templates, renderer, filesystem);
//! service.generate(day, &Layout::default(), 2021, Path::new(".")).unwrap();
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, ScaffoldService,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{Day, Layout, PlannedFile, RenderContext, ScaffoldPlan, WriteMode};
    pub use crate::error::{AocgenError, AocgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
