//! # attr-selector
//!
//! Single-select attribute picker node for a node-graph host.
//!
//! Given an upstream element, the node discovers the attributes exposed by
//! the element and its associated type-object, presents them for single
//! selection, persists the choice across save/reload cycles, and contributes
//! the selection's canonical key to the host's generated expression tree.
//!
//! ## Architecture
//!
//! - `discovery`: two-tier (instance + type) attribute discovery with a
//!   deterministic ordering contract.
//! - `selection`: candidate list plus active selection, reacting to upstream
//!   connectivity.
//! - `persistence`: `+`-separated codec and the `paramWrapper` XML element.
//! - `emitter`: null or string-literal output per evaluation pass.
//! - `node`: the integration struct the host embeds.
//!
//! The host is consumed only through the trait seams in `host`; the selector
//! itself is synchronous and single-threaded, driven by host callbacks.

pub mod discovery;
#[cfg(test)]
mod discovery_test;
pub mod emitter;
#[cfg(test)]
mod emitter_test;
pub mod host;
pub mod node;
pub mod persistence;
pub mod selection;
pub mod types;

pub use discovery::{DiscoveryError, discover};
pub use emitter::emit;
pub use node::AttributeSelectorNode;
pub use selection::SelectionState;
pub use types::{AttributeScope, AttributeWrapper, OutputAssignment, OutputExpr};
