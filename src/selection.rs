//! Selection state: the candidate list plus the single active selection.

use crate::discovery::{self, DiscoveryError};
use crate::host::{DocumentContext, InputResolver, ResolvedInput};
use crate::node::INPUT_PORT;
use crate::types::AttributeWrapper;
use tracing::{debug, instrument};

/// Candidate list plus the single active selection.
///
/// Lives through four informal states: empty (no connection), populated
/// (candidates present, nothing active), selected (active present), and stale
/// (active restored from a saved document but not confirmed against the
/// candidate list). Disconnecting returns to empty from any of them; a stale
/// selection becomes a regular one when a later populate happens to produce a
/// matching candidate.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
  connected: bool,
  candidates: Vec<AttributeWrapper>,
  active: Option<AttributeWrapper>,
}

impl SelectionState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_connected(&self) -> bool {
    self.connected
  }

  /// Current candidates, sorted by display name ascending.
  pub fn candidates(&self) -> &[AttributeWrapper] {
    &self.candidates
  }

  /// The active selection. Need not be a member of [SelectionState::candidates];
  /// restored selections may reference attributes no longer discoverable.
  pub fn active(&self) -> Option<&AttributeWrapper> {
    self.active.as_ref()
  }

  /// Records the host-delivered connectivity fact.
  ///
  /// Disconnecting clears both the candidate list and the active selection
  /// wholesale; a stale selection must never stay displayed as valid once its
  /// source is gone. Connecting does not repopulate here — repopulation is
  /// the separately invoked [SelectionState::populate].
  #[instrument(level = "trace", skip(self))]
  pub fn on_connectivity_changed(&mut self, now_connected: bool) {
    self.connected = now_connected;
    if !now_connected {
      self.candidates.clear();
      self.active = None;
      debug!("input disconnected; candidates and active selection cleared");
    }
  }

  /// Resolves the connected input and replaces the candidate list wholesale
  /// from a fresh discovery pass.
  ///
  /// Collection-valued and not-yet-evaluated inputs skip discovery, leaving
  /// the previous candidates in place, as does a discovery failure.
  /// Connectivity is re-checked before the new list is committed, so a
  /// disconnect delivered after this populate was requested cannot resurrect
  /// candidates.
  ///
  /// Default pick: when nothing is active afterwards, the first sorted
  /// candidate becomes active (none if the list is empty). An existing
  /// selection is never overridden. Returns true when the default pick
  /// installed a new active selection.
  #[instrument(level = "trace", skip(self, resolver, document))]
  pub fn populate(
    &mut self,
    resolver: &dyn InputResolver,
    document: &dyn DocumentContext,
  ) -> Result<bool, DiscoveryError> {
    if self.connected {
      if let ResolvedInput::Element(element) = resolver.resolve_input(INPUT_PORT) {
        let items = discovery::discover(element.as_ref(), document)?;
        if !self.connected {
          return Ok(false);
        }
        debug!(count = items.len(), "candidate list replaced");
        self.candidates = items;
      }
    }

    if self.active.is_none() {
      self.active = self.candidates.first().cloned();
      return Ok(self.active.is_some());
    }
    Ok(false)
  }

  /// Replaces the active selection unconditionally.
  pub fn set_active(&mut self, choice: AttributeWrapper) {
    self.active = Some(choice);
  }
}
