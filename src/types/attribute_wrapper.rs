//! Selectable attribute: display name plus stable canonical key.

use serde::{Deserialize, Serialize};

use super::AttributeScope;

/// An immutable pair of human-readable display name and stable canonical key.
///
/// Constructed fresh on every discovery pass or deserialization and never
/// mutated afterwards. Identity for persistence purposes is the full pair:
/// the display name alone is not unique across scopes, the canonical key
/// disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeWrapper {
  /// Human-readable name, formed as `"<scope> | <attribute-name>"`.
  pub display_name: String,
  /// Stable, locale-independent machine identifier for the attribute.
  pub canonical_key: String,
}

impl AttributeWrapper {
  pub fn new(display_name: impl Into<String>, canonical_key: impl Into<String>) -> Self {
    Self {
      display_name: display_name.into(),
      canonical_key: canonical_key.into(),
    }
  }

  /// Builds a wrapper with the scope-prefixed display name.
  pub fn scoped(scope: AttributeScope, name: &str, canonical_key: impl Into<String>) -> Self {
    Self {
      display_name: format!("{} | {}", scope, name),
      canonical_key: canonical_key.into(),
    }
  }
}
