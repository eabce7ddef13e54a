//! Session state.
//!
//! A session owns the current roster snapshot, the transient selection, the
//! in-flight drag, and the store the roster is persisted to. Every accepted
//! change replaces the snapshot and, unless a shared roster is being
//! previewed, writes the persisted form back to the store.
//!
//! Rejected moves and edits are no-ops: the roster is left untouched and the
//! rejection is logged at `debug`.

use counterpick_engine::{
    ClickOutcome, Container, Move, Selection, Token, click_container, click_entity, resolve_drag,
};
use counterpick_foundation::{Entity, EntityId, Error, ErrorKind, Result};
use counterpick_storage::{Direction, Roster, SetId, SlotId};
use tracing::{debug, info, warn};

use crate::codec;
use crate::config::SessionConfig;
use crate::confirm::{Confirm, Prompt};
use crate::share::{self, Clipboard};
use crate::store::KeyValueStore;
use crate::transport;
use crate::view::RosterView;

/// Whether edits are being persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Working on the persisted roster.
    Editing,
    /// Showing a roster opened from a share link; edits are not persisted.
    Previewing,
}

/// An interactive editing session.
pub struct Session<S: KeyValueStore> {
    roster: Roster,
    selection: Option<Selection>,
    mode: Mode,
    active_drag: Option<String>,
    store: S,
    config: SessionConfig,
    location: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Starts a session.
    ///
    /// If `location` carries a share payload, it is consumed and the shared
    /// roster is previewed. Otherwise, or if the payload is unreadable, the
    /// persisted roster is loaded. A session never starts without a set.
    pub fn start(store: S, config: SessionConfig, location: Option<&str>) -> Self {
        let (payload, location) = match location {
            Some(url) => {
                let (payload, cleaned) = share::take_param(url, &config.share_param);
                (payload, Some(cleaned))
            }
            None => (None, None),
        };

        let shared = payload.and_then(|payload| match load_shared(&payload, &config) {
            Ok(roster) => {
                info!(sets = roster.len(), "previewing shared roster");
                Some(roster)
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable share link");
                None
            }
        });

        let (roster, mode) = match shared {
            Some(roster) => (roster, Mode::Previewing),
            None => (load_persisted(&store, &config), Mode::Editing),
        };

        Self {
            roster: non_empty(roster),
            selection: None,
            mode,
            active_drag: None,
            store,
            config,
            location,
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the selected entity, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Returns the persistence mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true while a shared roster is being previewed.
    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.mode == Mode::Previewing
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the opened URL with any share payload removed.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Builds the render model of the current state.
    #[must_use]
    pub fn view(&self) -> RosterView {
        RosterView::build(&self.roster, self.selection.as_ref(), self.is_previewing())
    }

    // ========== Drag and drop ==========

    /// Records the token of the item being dragged.
    pub fn on_drag_start(&mut self, token: &str) {
        debug!(token, "drag start");
        self.active_drag = Some(token.to_string());
    }

    /// Ends the drag over `destination` (`None` when dropped outside every
    /// zone). Returns true if the roster changed.
    pub fn on_drag_end(&mut self, destination: Option<&str>) -> bool {
        let Some(source) = self.active_drag.take() else {
            debug!("drag end without drag start");
            return false;
        };
        self.drag(&source, destination)
    }

    /// Abandons the drag in progress.
    pub fn cancel_drag(&mut self) {
        self.active_drag = None;
    }

    /// Returns the token being dragged.
    #[must_use]
    pub fn active_drag(&self) -> Option<&str> {
        self.active_drag.as_deref()
    }

    /// Returns the entity to draw as the drag preview.
    ///
    /// Entity tokens name their entity; a bare number is taken as a catalog
    /// key.
    #[must_use]
    pub fn active_drag_entity(&self) -> Option<&Entity> {
        let raw = self.active_drag.as_deref()?;
        let id = Token::parse(raw)
            .and_then(|token| token.entity())
            .or_else(|| raw.parse::<EntityId>().ok())?;
        self.roster.catalog().get(id)
    }

    /// Performs a whole drag from `source` to `destination`.
    /// Returns true if the roster changed.
    pub fn drag(&mut self, source: &str, destination: Option<&str>) -> bool {
        match resolve_drag(source, destination) {
            Some(movement) => self.apply(&movement),
            None => {
                debug!(source, ?destination, "drag has no effect");
                false
            }
        }
    }

    // ========== Selection ==========

    /// Handles a click on an entity shown in `set`.
    pub fn on_entity_click(&mut self, set: &SetId, entity: EntityId) {
        if self.roster.set(set).is_none() {
            debug!(%set, "click on entity of unknown set");
            return;
        }
        let ClickOutcome { selection, .. } = click_entity(self.selection.as_ref(), set, entity);
        self.selection = selection;
    }

    /// Handles a click on a slot or the pool of `set`.
    /// Returns true if the roster changed.
    pub fn on_container_click(&mut self, set: &SetId, container: &Container) -> bool {
        let outcome = click_container(&self.roster, self.selection.as_ref(), set, container);
        match outcome.movement {
            Some(movement) => self.apply(&movement),
            None => {
                self.selection = outcome.selection;
                false
            }
        }
    }

    fn apply(&mut self, movement: &Move) -> bool {
        match movement.apply(&self.roster) {
            Ok(next) => {
                debug!(%movement, "move applied");
                self.selection = None;
                self.replace(next)
            }
            Err(e) => {
                debug!(%movement, error = %e, "move rejected");
                false
            }
        }
    }

    // ========== Sets and slots ==========

    /// Appends a set with the default slots and returns its id.
    pub fn add_set(&mut self) -> SetId {
        let (next, id) = self.roster.add_set();
        info!(set = %id, "set added");
        self.replace(next);
        id
    }

    /// Deletes a set after confirmation. Returns true if it was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than a rejected edit.
    pub fn delete_set(&mut self, set: &SetId, confirm: &mut impl Confirm) -> Result<bool> {
        let Some(index) = self.roster.set_index(set) else {
            debug!(%set, "delete of unknown set");
            return Ok(false);
        };
        let prompt = Prompt::DeleteSet {
            name: self.set_name(index),
        };
        if !confirm.confirm(&prompt) {
            debug!(%set, "set deletion declined");
            return Ok(false);
        }
        let outcome = self.roster.delete_set(set);
        self.commit("delete set", outcome)
    }

    /// Moves a set one position. Returns true if it moved.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than a rejected edit.
    pub fn move_set(&mut self, set: &SetId, direction: Direction) -> Result<bool> {
        let outcome = self.roster.move_set(set, direction);
        self.commit("move set", outcome)
    }

    /// Renames a set; a blank name restores the positional default.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than a rejected edit.
    pub fn rename_set(&mut self, set: &SetId, name: &str) -> Result<bool> {
        let outcome = self.roster.rename_set(set, name);
        self.commit("rename set", outcome)
    }

    /// Inserts a slot after `after` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than a rejected edit.
    pub fn add_slot_after(
        &mut self,
        set: &SetId,
        after: &SlotId,
        label: &str,
    ) -> Result<Option<SlotId>> {
        match self.roster.add_slot_after(set, after, label) {
            Ok((next, id)) => {
                info!(%set, slot = %id, "slot added");
                self.replace(next);
                Ok(Some(id))
            }
            Err(e) if e.is_rejection() => {
                debug!(error = %e, "add slot rejected");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes a slot after confirmation; its members return to the pool.
    /// A set's last slot is never deleted. Returns true if it was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than a rejected edit.
    pub fn delete_slot(
        &mut self,
        set: &SetId,
        slot: &SlotId,
        confirm: &mut impl Confirm,
    ) -> Result<bool> {
        let Some(index) = self.roster.set_index(set) else {
            debug!(%set, "delete slot of unknown set");
            return Ok(false);
        };
        let Some(target) = self.roster.set(set).and_then(|s| s.slot(slot)) else {
            debug!(%set, %slot, "delete of unknown slot");
            return Ok(false);
        };
        if self.roster.set(set).is_some_and(|s| s.slots().len() <= 1) {
            debug!(%set, %slot, "last slot kept");
            return Ok(false);
        }
        let prompt = Prompt::DeleteSlot {
            set: self.set_name(index),
            label: target.label().to_string(),
        };
        if !confirm.confirm(&prompt) {
            debug!(%set, %slot, "slot deletion declined");
            return Ok(false);
        }
        let outcome = self.roster.delete_slot(set, slot);
        self.commit("delete slot", outcome)
    }

    /// Moves a slot one position within its set. Returns true if it moved.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than a rejected edit.
    pub fn move_slot(&mut self, set: &SetId, slot: &SlotId, direction: Direction) -> Result<bool> {
        let outcome = self.roster.move_slot(set, slot, direction);
        self.commit("move slot", outcome)
    }

    /// Relabels a slot; a blank label is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than a rejected edit.
    pub fn rename_slot(&mut self, set: &SetId, slot: &SlotId, label: &str) -> Result<bool> {
        let outcome = self.roster.rename_slot(set, slot, label);
        self.commit("rename slot", outcome)
    }

    /// Drops every set and the persisted document after confirmation.
    /// Also leaves preview mode. Returns true if the reset happened.
    pub fn reset(&mut self, confirm: &mut impl Confirm) -> bool {
        if !confirm.confirm(&Prompt::Reset) {
            debug!("reset declined");
            return false;
        }
        self.mode = Mode::Editing;
        self.selection = None;
        self.active_drag = None;
        self.roster = self.roster.clear();
        if let Err(e) = self.store.remove(&self.config.storage_key) {
            warn!(error = %e, key = %self.config.storage_key, "failed to remove saved roster");
        }
        info!("roster reset");
        true
    }

    // ========== Preview ==========

    /// Discards the previewed roster and reloads the persisted one.
    /// Returns false when not previewing.
    pub fn keep_own_data(&mut self) -> bool {
        if !self.is_previewing() {
            return false;
        }
        self.roster = non_empty(load_persisted(&self.store, &self.config));
        self.selection = None;
        self.active_drag = None;
        self.mode = Mode::Editing;
        info!("preview discarded");
        true
    }

    /// Replaces the persisted roster with the previewed one after
    /// confirmation. Returns false when not previewing or declined.
    pub fn adopt_preview(&mut self, confirm: &mut impl Confirm) -> bool {
        if !self.is_previewing() {
            return false;
        }
        if !confirm.confirm(&Prompt::AdoptPreview) {
            debug!("adopt preview declined");
            return false;
        }
        self.mode = Mode::Editing;
        info!("preview adopted");
        self.persist();
        true
    }

    // ========== Sharing ==========

    /// Builds a share link for the current roster.
    ///
    /// The link is based on the opened URL, or the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be serialized or compressed.
    pub fn share_url(&self) -> Result<String> {
        let json = codec::to_json(&self.roster)?;
        let payload = transport::encode(&json)?;
        let base = self.location.as_deref().unwrap_or(&self.config.base_url);
        Ok(share::share_url(base, &self.config.share_param, &payload))
    }

    /// Builds a share link and delivers it to `clipboard`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Share`] if the link cannot be built or delivered.
    /// The roster is never affected.
    pub fn share(&self, clipboard: &mut dyn Clipboard) -> Result<String> {
        let link = self
            .share_url()
            .map_err(|e| Error::new(ErrorKind::Share(e.kind.to_string())))?;
        share::deliver(clipboard, &link)?;
        info!(bytes = link.len(), "share link copied");
        Ok(link)
    }

    // ========== Internals ==========

    fn set_name(&self, index: usize) -> String {
        match self.roster.sets().get(index) {
            Some(set) => set.display_name(index, self.roster.labels()),
            None => self.roster.labels().set_name(index),
        }
    }

    fn commit(&mut self, operation: &str, outcome: Result<Roster>) -> Result<bool> {
        match outcome {
            Ok(next) => Ok(self.replace(next)),
            Err(e) if e.is_rejection() => {
                debug!(operation, error = %e, "edit rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Installs `next` and persists it. Returns true if anything changed.
    fn replace(&mut self, next: Roster) -> bool {
        if next == self.roster {
            return false;
        }
        self.roster = next;
        if let Some(selection) = &self.selection {
            let still_there = self
                .roster
                .set(&selection.set)
                .is_some_and(|_| self.roster.catalog().contains(selection.entity));
            if !still_there {
                self.selection = None;
            }
        }
        self.persist();
        true
    }

    fn persist(&mut self) {
        if self.is_previewing() {
            debug!("previewing; roster not saved");
            return;
        }
        let key = &self.config.storage_key;
        let written = if self.roster.is_empty() {
            self.store.remove(key)
        } else {
            codec::to_json(&self.roster).and_then(|json| self.store.set(key, &json))
        };
        match written {
            Ok(()) => info!(key = %key, sets = self.roster.len(), "roster saved"),
            Err(e) => warn!(error = %e, key = %key, "failed to save roster"),
        }
    }
}

fn load_shared(payload: &str, config: &SessionConfig) -> Result<Roster> {
    let json = transport::decode(payload)?;
    codec::from_json(&json, config.catalog.clone(), config.labels.clone())
}

fn load_persisted<S: KeyValueStore>(store: &S, config: &SessionConfig) -> Roster {
    let empty = || Roster::new(config.catalog.clone(), config.labels.clone());
    match store.get(&config.storage_key) {
        Ok(Some(text)) => match codec::from_json(&text, config.catalog.clone(), config.labels.clone()) {
            Ok(roster) => {
                info!(sets = roster.len(), "loaded saved roster");
                roster
            }
            Err(e) => {
                warn!(error = %e, "ignoring corrupt saved roster");
                empty()
            }
        },
        Ok(None) => empty(),
        Err(e) => {
            warn!(error = %e, "failed to read saved roster");
            empty()
        }
    }
}

fn non_empty(roster: Roster) -> Roster {
    if roster.is_empty() {
        Roster::with_default_set(roster.catalog().clone(), roster.labels().clone())
    } else {
        roster
    }
}
