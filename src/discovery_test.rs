//! Tests for `discovery`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::discovery::discover;
use crate::host::{AttributeInfo, DocumentContext, Element, HostError};

struct FakeElement {
  attrs: Vec<AttributeInfo>,
  type_id: Option<String>,
  fail: bool,
}

impl FakeElement {
  fn with_attrs(attrs: Vec<AttributeInfo>) -> Self {
    Self {
      attrs,
      type_id: None,
      fail: false,
    }
  }
}

impl Element for FakeElement {
  fn attributes(&self) -> Result<Vec<AttributeInfo>, HostError> {
    if self.fail {
      return Err(HostError("element model unavailable".to_string()));
    }
    Ok(self.attrs.clone())
  }

  fn type_object_id(&self) -> Option<String> {
    self.type_id.clone()
  }
}

struct FakeDocument {
  elements: HashMap<String, Arc<dyn Element>>,
}

impl DocumentContext for FakeDocument {
  fn element_by_id(&self, id: &str) -> Option<Arc<dyn Element>> {
    self.elements.get(id).cloned()
  }
}

fn attr(name: &str, id: &str) -> AttributeInfo {
  AttributeInfo {
    display_name: name.to_string(),
    has_value: true,
    canonical_id: Some(id.to_string()),
  }
}

fn empty_document() -> FakeDocument {
  FakeDocument {
    elements: HashMap::new(),
  }
}

fn document_with_type(id: &str, attrs: Vec<AttributeInfo>) -> FakeDocument {
  let mut elements: HashMap<String, Arc<dyn Element>> = HashMap::new();
  elements.insert(id.to_string(), Arc::new(FakeElement::with_attrs(attrs)));
  FakeDocument { elements }
}

#[test]
fn instance_attribute_without_type_object() {
  let element = FakeElement::with_attrs(vec![attr("Comments", "COMMENTS_BIP")]);
  let items = discover(&element, &empty_document()).unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].display_name, "Instance | Comments");
  assert_eq!(items[0].canonical_key, "COMMENTS_BIP");
}

#[test]
fn skips_attributes_without_value() {
  let mut unset = attr("Area", "AREA");
  unset.has_value = false;
  let element = FakeElement::with_attrs(vec![unset, attr("Comments", "COMMENTS_BIP")]);
  let items = discover(&element, &empty_document()).unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].canonical_key, "COMMENTS_BIP");
}

#[test]
fn skips_attributes_without_canonical_id() {
  let mut external = attr("Custom", "ignored");
  external.canonical_id = None;
  let element = FakeElement::with_attrs(vec![external, attr("Mark", "MARK")]);
  let items = discover(&element, &empty_document()).unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].canonical_key, "MARK");
}

#[test]
fn combines_instance_and_type_attributes_sorted() {
  let mut element = FakeElement::with_attrs(vec![attr("Mark", "MARK"), attr("Comments", "COMMENTS_BIP")]);
  element.type_id = Some("wall-type-1".to_string());
  let document = document_with_type(
    "wall-type-1",
    vec![attr("Width", "TYPE_WIDTH"), attr("Mark", "TYPE_MARK")],
  );

  let items = discover(&element, &document).unwrap();
  let names: Vec<&str> = items.iter().map(|w| w.display_name.as_str()).collect();
  assert_eq!(
    names,
    vec![
      "Instance | Comments",
      "Instance | Mark",
      "Type | Mark",
      "Type | Width",
    ]
  );
}

#[test]
fn counts_n_plus_m() {
  let mut element = FakeElement::with_attrs(vec![attr("A", "A1"), attr("B", "B1"), attr("C", "C1")]);
  element.type_id = Some("t".to_string());
  let document = document_with_type("t", vec![attr("D", "D1"), attr("E", "E1")]);
  let items = discover(&element, &document).unwrap();
  assert_eq!(items.len(), 5);
}

#[test]
fn unresolvable_type_object_is_skipped_silently() {
  let mut element = FakeElement::with_attrs(vec![attr("Comments", "COMMENTS_BIP")]);
  element.type_id = Some("missing-type".to_string());
  let items = discover(&element, &empty_document()).unwrap();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].display_name, "Instance | Comments");
}

#[test]
fn duplicate_display_names_across_scopes_are_kept() {
  let mut element = FakeElement::with_attrs(vec![attr("Mark", "MARK")]);
  element.type_id = Some("t".to_string());
  let document = document_with_type("t", vec![attr("Mark", "TYPE_MARK")]);
  let items = discover(&element, &document).unwrap();
  assert_eq!(items.len(), 2);
  assert_eq!(items[0].display_name, "Instance | Mark");
  assert_eq!(items[1].display_name, "Type | Mark");
  assert_ne!(items[0].canonical_key, items[1].canonical_key);
}

#[test]
fn instance_enumeration_failure_surfaces() {
  let element = FakeElement {
    attrs: vec![],
    type_id: None,
    fail: true,
  };
  assert!(discover(&element, &empty_document()).is_err());
}

#[test]
fn type_enumeration_failure_surfaces() {
  let mut element = FakeElement::with_attrs(vec![attr("Comments", "COMMENTS_BIP")]);
  element.type_id = Some("t".to_string());
  let mut elements: HashMap<String, Arc<dyn Element>> = HashMap::new();
  elements.insert(
    "t".to_string(),
    Arc::new(FakeElement {
      attrs: vec![],
      type_id: None,
      fail: true,
    }),
  );
  let document = FakeDocument { elements };
  assert!(discover(&element, &document).is_err());
}
