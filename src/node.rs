//! The selector node the host embeds: port metadata, refresh fan-out,
//! modified flag, serialization hooks, and output building.

use crate::discovery::DiscoveryError;
use crate::emitter;
use crate::host::{DocumentContext, InputResolver};
use crate::persistence::{self, PersistError};
use crate::selection::SelectionState;
use crate::types::{AttributeWrapper, OutputAssignment};
use quick_xml::Writer;
use std::io::Write;
use tracing::{debug, instrument};

/// Node display name shown by the host library.
pub const NODE_NAME: &str = "Attribute Selector";
/// Host library category.
pub const NODE_CATEGORY: &str = "Graph.Attributes";
/// Node description shown by the host library.
pub const NODE_DESCRIPTION: &str =
  "Selects one attribute exposed by the connected element or its type-object.";

/// Index of the single input port.
pub const INPUT_PORT: usize = 0;
pub const INPUT_PORT_NAME: &str = "Element";
pub const INPUT_PORT_DESCRIPTION: &str = "Input element.";

/// Index of the single output slot.
pub const OUTPUT_SLOT: usize = 0;
pub const OUTPUT_PORT_NAME: &str = "attributeKey";
pub const OUTPUT_PORT_DESCRIPTION: &str = "Canonical key of the selected attribute.";

/// The selector node. The host owns one per graph node instance, delivers
/// connectivity events and populate requests on its single evaluation thread,
/// and reads the output assignment on every evaluation pass.
#[derive(Default)]
pub struct AttributeSelectorNode {
  state: SelectionState,
  modified: bool,
  refresh_listeners: Vec<Box<dyn FnMut()>>,
}

impl AttributeSelectorNode {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn candidates(&self) -> &[AttributeWrapper] {
    self.state.candidates()
  }

  pub fn active(&self) -> Option<&AttributeWrapper> {
    self.state.active()
  }

  pub fn is_input_connected(&self) -> bool {
    self.state.is_connected()
  }

  /// Registers a payload-free callback raised on every connectivity change,
  /// so an open selection view can refresh or close.
  pub fn subscribe_refresh(&mut self, listener: impl FnMut() + 'static) {
    self.refresh_listeners.push(Box::new(listener));
  }

  fn raise_refresh(&mut self) {
    for listener in &mut self.refresh_listeners {
      listener();
    }
  }

  /// Drains the modified flag. The host schedules a re-evaluation when true.
  pub fn take_modified(&mut self) -> bool {
    std::mem::take(&mut self.modified)
  }

  /// Entry point for the host's connectivity notifications. See
  /// [SelectionState::on_connectivity_changed] for the clearing rules.
  #[instrument(level = "trace", skip(self))]
  pub fn on_connectivity_changed(&mut self, now_connected: bool) {
    self.state.on_connectivity_changed(now_connected);
    self.raise_refresh();
  }

  /// Repopulates the candidate list from the connected input. See
  /// [SelectionState::populate] for the skip and default-pick rules.
  pub fn populate(
    &mut self,
    resolver: &dyn InputResolver,
    document: &dyn DocumentContext,
  ) -> Result<(), DiscoveryError> {
    if self.state.populate(resolver, document)? {
      self.modified = true;
    }
    Ok(())
  }

  /// Explicit user selection; marks the node modified so the host schedules
  /// a re-evaluation.
  pub fn set_active(&mut self, choice: AttributeWrapper) {
    self.state.set_active(choice);
    self.modified = true;
  }

  /// Appends this node's `<paramWrapper>` child to its serialized element.
  pub fn serialize_core<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), PersistError> {
    persistence::write_param_wrapper(writer, self.state.active())
  }

  /// Restores the selection from the node's serialized XML.
  ///
  /// Absence of the `paramWrapper` child or undecodable content leaves the
  /// selection absent; loading never fails. The restored wrapper is not
  /// validated against live data.
  #[instrument(level = "trace", skip(self, node_xml))]
  pub fn deserialize_core(&mut self, node_xml: &str) {
    if let Some(restored) = persistence::read_param_wrapper(node_xml) {
      debug!(display_name = %restored.display_name, "selection restored from saved document");
      self.state.set_active(restored);
      self.modified = true;
    }
  }

  /// Builds the node's contribution to the host's expression tree: one
  /// assignment to the single output slot.
  pub fn build_output(&self) -> Vec<OutputAssignment> {
    vec![emitter::emit(self.state.is_connected(), self.state.active())]
  }
}
