//! Value types shared across the selector: attribute wrappers, scopes, and
//! the expression fragments emitted into the host's AST.

mod attribute_scope;
mod attribute_wrapper;
mod emission;

pub use attribute_scope::AttributeScope;
pub use attribute_wrapper::AttributeWrapper;
pub use emission::{OutputAssignment, OutputExpr};
