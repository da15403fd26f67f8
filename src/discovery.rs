//! Two-tier attribute discovery: instance attributes plus type-object
//! attributes, canonicalized and sorted.

use crate::host::{DocumentContext, Element, HostError};
use crate::types::{AttributeScope, AttributeWrapper};
use thiserror::Error;
use tracing::{instrument, trace};

/// Error surfaced from a discovery pass.
///
/// The caller keeps its previous candidate list on failure; a transient host
/// failure never erases a valid selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
  #[error(transparent)]
  Host(#[from] HostError),
}

/// Wraps one object's attributes at one scope, keeping only attributes that
/// carry a concrete value and define a canonical identifier.
pub(crate) fn scoped_attributes(
  element: &dyn Element,
  scope: AttributeScope,
) -> Result<Vec<AttributeWrapper>, DiscoveryError> {
  let mut items = Vec::new();
  for attr in element.attributes()? {
    if !attr.has_value {
      continue;
    }
    let Some(key) = attr.canonical_id else {
      continue;
    };
    items.push(AttributeWrapper::scoped(scope, &attr.display_name, key));
  }
  Ok(items)
}

/// Discovers the selectable attributes of `element`: its own attributes
/// (scope "Instance") plus those of its type-object resolved through
/// `document` (scope "Type"), sorted by display name ascending.
///
/// A missing or unresolvable type-object is skipped silently. Duplicate
/// display names across scopes are kept; the canonical key disambiguates.
/// Pure read of external state, no side effects.
#[instrument(level = "trace", skip(element, document))]
pub fn discover(
  element: &dyn Element,
  document: &dyn DocumentContext,
) -> Result<Vec<AttributeWrapper>, DiscoveryError> {
  let mut items = scoped_attributes(element, AttributeScope::Instance)?;

  if let Some(type_id) = element.type_object_id() {
    if let Some(type_object) = document.element_by_id(&type_id) {
      items.extend(scoped_attributes(type_object.as_ref(), AttributeScope::Type)?);
    }
  }

  items.sort_by(|a, b| a.display_name.cmp(&b.display_name));
  trace!(count = items.len(), "discovery pass complete");
  Ok(items)
}
