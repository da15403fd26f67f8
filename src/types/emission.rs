//! Expression fragments the node contributes to the host's generated AST.

use serde::{Deserialize, Serialize};

/// Expression assigned to an output slot: a null literal or a string literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputExpr {
  Null,
  StringLiteral(String),
}

/// One assignment into the host's expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputAssignment {
  /// Index of the output slot being assigned.
  pub slot: usize,
  pub expr: OutputExpr,
}
