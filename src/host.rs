//! Trait seams for the hosting graph: element model, document context, and
//! input resolution.
//!
//! The selector never reaches into the host directly; everything external is
//! consumed through these interfaces, and the "current document" lookup is an
//! explicit [DocumentContext] argument rather than process-wide state.

use std::sync::Arc;
use thiserror::Error;

/// Error raised by the host object model while enumerating attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attribute enumeration failed: {0}")]
pub struct HostError(pub String);

/// One attribute as reported by the host object model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
  /// Human display name of the attribute.
  pub display_name: String,
  /// Whether the attribute carries a concrete value. Attributes with an
  /// unset/none storage category are not selectable.
  pub has_value: bool,
  /// Stable internal identifier, when the attribute defines one.
  pub canonical_id: Option<String>,
}

/// An upstream domain object whose attributes can be enumerated.
pub trait Element {
  /// Enumerates the object's own attributes. A host failure surfaces as
  /// [HostError]; it is never mapped to an empty list.
  fn attributes(&self) -> Result<Vec<AttributeInfo>, HostError>;

  /// Identifier of the associated type-object, when the element supports one.
  fn type_object_id(&self) -> Option<String>;
}

/// Resolves elements by identifier within the current document.
pub trait DocumentContext {
  fn element_by_id(&self, id: &str) -> Option<Arc<dyn Element>>;
}

/// Result of resolving the node's connected input through the host's
/// already-evaluated graph state.
#[derive(Clone)]
pub enum ResolvedInput {
  /// A single resolved element.
  Element(Arc<dyn Element>),
  /// The input evaluates to a collection; discovery proceeds only for a
  /// single non-collection object.
  Collection,
  /// No evaluation of the upstream graph exists yet.
  NotEvaluated,
}

/// Evaluate-and-fetch capability for the node's input ports.
pub trait InputResolver {
  fn resolve_input(&self, port: usize) -> ResolvedInput;
}
