//! Selection persistence: the flat `+`-separated codec plus the
//! `paramWrapper` XML child element written into the node's saved
//! representation.

use crate::types::AttributeWrapper;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, instrument};

/// Tag of the child element appended to the node's serialized representation.
pub const PARAM_WRAPPER_TAG: &str = "paramWrapper";

/// Separator between display name and canonical key in the encoded form.
/// Reserved but not escaped: a field containing `+` misparses on decode.
pub const FIELD_SEPARATOR: char = '+';

/// Error writing the `paramWrapper` element through the host's XML writer.
#[derive(Debug, Error)]
pub enum PersistError {
  #[error("failed to write paramWrapper element: {0}")]
  Write(#[from] std::io::Error),
}

/// Encodes the active selection as `"<display_name>+<canonical_key>"`, or the
/// empty string when there is none.
pub fn encode(active: Option<&AttributeWrapper>) -> String {
  match active {
    Some(w) => format!("{}{}{}", w.display_name, FIELD_SEPARATOR, w.canonical_key),
    None => String::new(),
  }
}

/// Decodes a persisted selection.
///
/// The first two `+`-separated fields become display name and canonical key;
/// anything past the second field is ignored. A missing second field
/// (including the empty string) is "no selection". Total: never fails, never
/// panics.
pub fn decode(raw: &str) -> Option<AttributeWrapper> {
  let mut fields = raw.splitn(3, FIELD_SEPARATOR);
  let display_name = fields.next()?;
  let canonical_key = fields.next()?;
  Some(AttributeWrapper::new(display_name, canonical_key))
}

/// Appends the `<paramWrapper>` child with the encoded selection to the
/// node's serialized representation.
#[instrument(level = "trace", skip(writer, active))]
pub fn write_param_wrapper<W: Write>(
  writer: &mut Writer<W>,
  active: Option<&AttributeWrapper>,
) -> Result<(), PersistError> {
  let encoded = encode(active);
  writer.write_event(Event::Start(BytesStart::new(PARAM_WRAPPER_TAG)))?;
  writer.write_event(Event::Text(BytesText::new(&encoded)))?;
  writer.write_event(Event::End(BytesEnd::new(PARAM_WRAPPER_TAG)))?;
  Ok(())
}

/// Extracts and decodes the `paramWrapper` child of a node's serialized XML.
///
/// Absence of the element, unreadable XML, and undecodable content all yield
/// `None`; a poisoned document never fails the load.
#[instrument(level = "trace", skip(node_xml))]
pub fn read_param_wrapper(node_xml: &str) -> Option<AttributeWrapper> {
  let mut reader = Reader::from_str(node_xml);
  loop {
    match reader.read_event() {
      Ok(Event::Start(start)) if start.name().as_ref() == PARAM_WRAPPER_TAG.as_bytes() => {
        let text = reader.read_text(start.name()).ok()?;
        let restored = decode(&text);
        if restored.is_none() {
          debug!("persisted selection undecodable; loading with no selection");
        }
        return restored;
      }
      Ok(Event::Empty(start)) if start.name().as_ref() == PARAM_WRAPPER_TAG.as_bytes() => {
        return None;
      }
      Ok(Event::Eof) | Err(_) => return None,
      Ok(_) => {}
    }
  }
}
