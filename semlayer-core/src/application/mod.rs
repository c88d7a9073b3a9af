// semlayer-core/src/application/mod.rs

pub mod catalog;
pub mod hooks;
pub mod interceptor;
pub mod semantic_hook;

#[cfg(test)]
pub(crate) mod test_support;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use semlayer_core::application::{create_catalog, HookManager, SemanticLayerHook};`

pub use catalog::{DataCatalog, create_catalog};
pub use hooks::{CatalogHooks, HookManager};
pub use interceptor::{SemanticLoadInterceptor, wrap_load};
pub use semantic_hook::SemanticLayerHook;
