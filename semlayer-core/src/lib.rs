// semlayer-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Dataset, SemanticModelBuilder, LoadLogger
pub mod ports;

// 2. Domain
// Semantic definitions, expressions, the semantic table
pub mod domain;

// 3. Infrastructure (Adapters)
// DataFusion datasets, catalog configuration, tracing logger
pub mod infrastructure;

// 4. Application (Use Cases)
// Catalog, hook lifecycle, load interception
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::SemanticLayerError;
