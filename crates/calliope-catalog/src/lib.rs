//! Catalog boundary for the Calliope platform.
//!
//! The matching engine is a pure computation; everything that touches the
//! outside world to obtain candidate voices lives here. A `VoiceProvider`
//! fetches raw records (from a JSON file or an HTTP endpoint), validation
//! drops malformed entries with a diagnostic, and `CatalogStore` holds the
//! current catalog as an immutable snapshot behind an atomic swap so an
//! in-flight matching call always sees a consistent catalog even while a
//! periodic refresh is running.

mod error;
mod provider;
mod store;

pub use error::CatalogError;
pub use provider::{validate_records, HttpProvider, JsonFileProvider, VoiceProvider};
pub use store::{start_refresh_task, Catalog, CatalogStore};
