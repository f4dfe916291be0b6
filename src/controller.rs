//! Ghost text suggestion controller
//!
//! Single authority for the suggestion lifecycle: Idle → Pending (debounce
//! armed) → Loading (fetch in flight) → Shown → Idle again on accept or
//! discard, or back to Pending on a new keystroke. Host edit, selection and
//! keystroke events come in through the `on_*` methods; fetch progress comes
//! back through `drain_fetch_events`; the host's event loop calls `tick`
//! to let the debounce timer fire.
//!
//! Fetch tasks are spawned with `tokio::task::spawn_local`, so the
//! controller must be driven from within a current-thread runtime's
//! `LocalSet`. Calling a fetch-triggering method outside one is a
//! programmer error and panics.

use std::rc::Rc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::commands::{CommandContext, Executable, InsertCommand, RemoveCommand};
use crate::config::GhostTextConfig;
use crate::debounce::Debouncer;
use crate::document::{DocumentSnapshot, HostDocument};
use crate::fetch::{ContentFetchAdapter, ContentFetcher, FetchEvent};
use crate::state::SuggestionState;

/// Orchestrates when suggestions are fetched, shown, accepted and discarded
pub struct GhostTextController {
    config: GhostTextConfig,
    state: SuggestionState,
    debouncer: Debouncer,
    adapter: ContentFetchAdapter,
    events_tx: UnboundedSender<FetchEvent>,
    events_rx: UnboundedReceiver<FetchEvent>,
    /// Cursor offset the shown (or pending) suggestion is anchored to; a
    /// suggestion is only valid while the cursor stays exactly here
    anchor: Option<usize>,
}

impl GhostTextController {
    /// Build a controller from configuration and an optional fetcher
    ///
    /// A missing fetcher is not an error here; it surfaces as a logged
    /// configuration error the first time a fetch is triggered.
    pub fn new(config: GhostTextConfig, fetcher: Option<Rc<dyn ContentFetcher>>) -> Self {
        let debouncer = Debouncer::new(config.debounce_delay());
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        GhostTextController {
            config,
            state: SuggestionState::new(),
            debouncer,
            adapter: ContentFetchAdapter::new(fetcher),
            events_tx,
            events_rx,
            anchor: None,
        }
    }

    pub fn config(&self) -> &GhostTextConfig {
        &self.config
    }

    /// Suggestion state for the rendering layer to read
    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// Content was typed or inserted at the cursor
    ///
    /// If the inserted text is exactly the next character of the shown
    /// suggestion (case-insensitive), the character is silently consumed
    /// from the suggestion and no re-fetch happens; the user is typing
    /// ahead of the ghost. Any other edit destroys the suggestion, cancels
    /// an in-flight fetch, and re-arms the debounce timer.
    pub fn on_content_inserted(&mut self, inserted: &str) {
        if self.state.consume_first_char(inserted) {
            // The cursor advanced past the consumed character; the
            // suggestion stays anchored right after it
            self.anchor = self.anchor.map(|anchor| anchor + 1);
            return;
        }

        self.adapter.cancel_in_flight();
        self.state.clear();
        self.anchor = None;
        self.debouncer.schedule();
    }

    /// Content was deleted; the suggestion is unconditionally discarded
    pub fn on_delete_content(&mut self) {
        self.discard();
    }

    /// The user moved the cursor (arrow keys, click)
    ///
    /// Only direct, user-initiated moves belong here, not cursor motion
    /// caused by typing. A suggestion is only valid while the cursor sits
    /// immediately before it, so any move off the anchor discards it.
    pub fn on_selection_moved(&mut self, cursor: usize) {
        if self.anchor != Some(cursor) {
            self.discard();
        }
    }

    /// Manual fetch trigger, equivalent to the debounce firing immediately
    pub fn on_insert_keystroke(&mut self, snapshot: &DocumentSnapshot) {
        self.debouncer.cancel();
        self.trigger_fetch(snapshot);
    }

    /// Accept the shown suggestion, committing it into the document
    ///
    /// Only valid when a suggestion is shown and no fetch is loading.
    /// Inserting the text and clearing the suggestion happen as one unit;
    /// no host event can observe the state in between. Returns whether the
    /// suggestion was applied.
    pub fn on_accept_keystroke<D: HostDocument>(&mut self, document: &mut D) -> bool {
        if !self.state.has_suggestion() {
            return false;
        }

        let value = self.state.text().to_string();
        InsertCommand.execute(
            CommandContext {
                state: &mut self.state,
                document,
            },
            value,
        );
        RemoveCommand.execute(
            CommandContext {
                state: &mut self.state,
                document,
            },
            (),
        );

        self.debouncer.cancel();
        self.adapter.cancel_in_flight();
        // Invalidate the old request id as well, so a chunk already queued
        // from a still-streaming fetch cannot repopulate the accepted ghost
        self.state.clear();
        self.anchor = None;
        true
    }

    /// Clicking the rendered ghost text accepts it
    pub fn on_suggestion_clicked<D: HostDocument>(&mut self, document: &mut D) -> bool {
        self.on_accept_keystroke(document)
    }

    /// Drive the debounce timer; call once per event-loop iteration
    ///
    /// Also drains any fetch events that arrived since the last call, so a
    /// host loop only needs this one method to keep state current.
    pub fn tick(&mut self, snapshot: &DocumentSnapshot) {
        self.drain_fetch_events();
        if self.debouncer.fire_if_elapsed() {
            self.trigger_fetch(snapshot);
        }
    }

    /// Apply all pending fetch events to suggestion state
    pub fn drain_fetch_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_fetch_event(event);
        }
    }

    /// Run a command against this controller's state and the host document
    pub fn execute<C, D>(&mut self, command: &C, document: &mut D, input: C::Input) -> C::Output
    where
        C: Executable<D>,
        D: HostDocument,
    {
        command.execute(
            CommandContext {
                state: &mut self.state,
                document,
            },
            input,
        )
    }

    /// Start a fetch for the document as captured in `snapshot`
    ///
    /// Guarded: while a wanted fetch is still in flight this is a no-op. A
    /// fetch that was cancelled by a newer edit no longer counts as wanted,
    /// so the follow-up trigger passes.
    fn trigger_fetch(&mut self, snapshot: &DocumentSnapshot) {
        if self.state.is_loading() && self.adapter.has_in_flight() {
            return;
        }

        let request_id = self.state.start_request();
        self.anchor = Some(snapshot.cursor);

        match self
            .adapter
            .begin(snapshot.clone(), request_id, self.events_tx.clone())
        {
            Ok(task) => {
                tokio::task::spawn_local(task);
            }
            Err(error) => {
                log::error!("ghost text fetch not started: {}", error);
                self.state.fail_request();
                self.anchor = None;
            }
        }
    }

    fn apply_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Chunk { text, request_id } => {
                if self.state.is_current(request_id) {
                    self.state.append_chunk(&text);
                } else {
                    log::debug!("ignoring stale chunk for request {}", request_id);
                }
            }
            FetchEvent::Complete { text, request_id } => {
                if self.state.is_current(request_id) {
                    self.state.complete_request(text);
                    self.adapter.settle();
                } else {
                    log::debug!("ignoring stale result for request {}", request_id);
                }
            }
            FetchEvent::Cancelled { request_id } => {
                // The superseding operation owns the state; nothing to do
                log::debug!("fetch {} settled as cancelled", request_id);
            }
            FetchEvent::Failed {
                message,
                request_id,
            } => {
                if self.state.is_current(request_id) {
                    log::error!("ghost text fetch failed: {}", message);
                    self.state.fail_request();
                    self.adapter.settle();
                } else {
                    log::debug!("ignoring stale failure for request {}", request_id);
                }
            }
        }
    }

    /// Cancel everything pending or in flight and reset to idle
    fn discard(&mut self) {
        self.debouncer.cancel();
        self.adapter.cancel_in_flight();
        self.state.clear();
        self.anchor = None;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
