//! Scope of a discovered attribute: bound to the instance or to its type-object.

use std::fmt;

/// Scope of a discovered attribute: bound to the instance or to its type-object.
///
/// The scope prefixes the display name (`"Instance | Comments"`), so two
/// attributes with the same raw name at different scopes stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeScope {
  Instance,
  Type,
}

impl fmt::Display for AttributeScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AttributeScope::Instance => write!(f, "Instance"),
      AttributeScope::Type => write!(f, "Type"),
    }
  }
}
