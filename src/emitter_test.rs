//! Tests for `emitter`.

use crate::emitter::emit;
use crate::node::OUTPUT_SLOT;
use crate::types::{AttributeWrapper, OutputExpr};

fn wrapper() -> AttributeWrapper {
  AttributeWrapper::new("Instance | Comments", "COMMENTS_BIP")
}

#[test]
fn disconnected_input_emits_null_regardless_of_selection() {
  let w = wrapper();
  assert_eq!(emit(false, Some(&w)).expr, OutputExpr::Null);
  assert_eq!(emit(false, None).expr, OutputExpr::Null);
}

#[test]
fn connected_without_selection_emits_null() {
  assert_eq!(emit(true, None).expr, OutputExpr::Null);
}

#[test]
fn connected_with_selection_emits_canonical_key() {
  let w = wrapper();
  assert_eq!(
    emit(true, Some(&w)).expr,
    OutputExpr::StringLiteral("COMMENTS_BIP".to_string())
  );
}

#[test]
fn assignment_targets_the_single_output_slot() {
  assert_eq!(emit(true, None).slot, OUTPUT_SLOT);
}
