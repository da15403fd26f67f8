//! Output emission: the node's contribution to the host's expression tree.

use crate::node::OUTPUT_SLOT;
use crate::types::{AttributeWrapper, OutputAssignment, OutputExpr};
use tracing::instrument;

/// Emits the node's single output assignment.
///
/// A disconnected input or absent selection yields a null literal; otherwise
/// the active selection's canonical key is emitted as a string literal. Pure
/// given its two inputs; performs no discovery and no I/O. Invoked once per
/// graph evaluation pass.
#[instrument(level = "trace", skip(active))]
pub fn emit(is_input_connected: bool, active: Option<&AttributeWrapper>) -> OutputAssignment {
  let expr = match active {
    Some(w) if is_input_connected => OutputExpr::StringLiteral(w.canonical_key.clone()),
    _ => OutputExpr::Null,
  };
  OutputAssignment {
    slot: OUTPUT_SLOT,
    expr,
  }
}
