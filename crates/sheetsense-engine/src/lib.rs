//! # sheetsense-engine
//!
//! Deterministic prompt-driven table analysis. A free-text prompt is
//! classified into one of a fixed set of operation kinds, prompt fragments
//! are resolved to concrete columns, and the selected operation runs over
//! the table to produce a new table plus a one-line summary.
//!
//! The engine is pure and synchronous: no I/O, no shared state, and no
//! mutation of input tables. An optional [`remote::InsightProvider`] can
//! supply supplementary text, but the computed result never depends on it.

pub mod error;
pub mod insights;
pub mod intent;
pub mod ops;
pub mod remote;
pub mod resolve;
pub mod suggest;

pub use error::{EngineError, EngineResult};
pub use insights::generate_insights;
pub use intent::{classify_intent, Intent};
pub use ops::{analyze, OperationResult};
pub use remote::{InsightProvider, NoRemote, RemoteConfig};
pub use resolve::{resolve_field, resolve_sort_field, CATEGORY_KEYWORDS, NUMERIC_KEYWORDS};
pub use suggest::{suggest_formula, FormulaSuggestion};
