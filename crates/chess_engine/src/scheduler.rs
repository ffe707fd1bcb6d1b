//! Off-thread search scheduling
//!
//! [`SearchScheduler`] runs one search at a time on a dedicated worker thread
//! and hands the [`SearchOutcome`] back over a single-slot channel. The
//! interactive side never blocks: it calls [`SearchScheduler::poll`] once per
//! frame and gets `None` until the worker has finished.
//!
//! ## Staleness
//!
//! Every request carries a [`SearchTicket`] naming the game revision and
//! position it was computed for. The scheduler only moves tickets around; it
//! is the game's job to compare the ticket against its current state and
//! drop outcomes that no longer apply (see `Game::apply_search_outcome`).
//!
//! ## Cancellation
//!
//! [`SearchScheduler::cancel`] forgets the pending search and raises the
//! worker's stop flag. The worker unwinds at its next node and exits without
//! sending anything. It only ever touches its private copy of the position,
//! so nothing it does can reach the game.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::hash::PositionKey;
use crate::position::Position;
use crate::search::{search_until_stopped, SearchResult};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Identity of the game state a search was requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket {
    /// Game revision at request time (bumped by every apply, undo and reset)
    pub revision: u64,
    /// Key of the searched position
    pub key: PositionKey,
}

/// Everything the worker needs, owned and detached from the game
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub position: Position,
    /// Keys of the positions before `position`, oldest first
    pub history: Vec<PositionKey>,
    pub depth: u8,
}

/// Result delivered back to the interactive side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub ticket: SearchTicket,
    pub result: SearchResult,
    pub elapsed: Duration,
}

struct PendingSearch {
    ticket: SearchTicket,
    receiver: Receiver<SearchOutcome>,
    stop: Arc<AtomicBool>,
}

/// Runs at most one search at a time off the calling thread
#[derive(Default)]
pub struct SearchScheduler {
    pending: Option<PendingSearch>,
}

impl SearchScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a search is outstanding
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the outstanding search, if any
    pub fn pending_ticket(&self) -> Option<SearchTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Start `request` on a new worker thread
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::SearchInFlight`] if a search is already
    ///   outstanding; poll it to completion or cancel it first
    /// - [`ChessEngineError::SearchWorker`] if the thread cannot be spawned
    pub fn request(&mut self, request: SearchRequest) -> ChessEngineResult<SearchTicket> {
        if self.pending.is_some() {
            return Err(ChessEngineError::SearchInFlight);
        }

        let ticket = request.ticket;
        let depth = request.depth;
        let (sender, receiver) = bounded(1);
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);

        thread::Builder::new()
            .name("chess-search".to_string())
            .spawn(move || {
                trace!(revision = request.ticket.revision, "[SCHEDULER] Worker started");
                let start = Instant::now();
                let result = search_until_stopped(
                    &request.position,
                    request.depth,
                    &request.history,
                    &worker_stop,
                );
                if worker_stop.load(Ordering::Relaxed) {
                    trace!(revision = request.ticket.revision, "[SCHEDULER] Worker stopped");
                    return;
                }
                let outcome = SearchOutcome {
                    ticket: request.ticket,
                    result,
                    elapsed: start.elapsed(),
                };
                if sender.send(outcome).is_err() {
                    trace!(
                        revision = request.ticket.revision,
                        "[SCHEDULER] Receiver gone, result dropped"
                    );
                }
            })
            .map_err(|e| ChessEngineError::SearchWorker {
                message: e.to_string(),
            })?;

        info!(
            revision = ticket.revision,
            depth,
            "[SCHEDULER] Search dispatched"
        );
        self.pending = Some(PendingSearch {
            ticket,
            receiver,
            stop,
        });
        Ok(ticket)
    }

    /// Non-blocking check for a finished search
    ///
    /// Returns `Ok(None)` while the worker is still thinking or when nothing
    /// is pending.
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::SearchWorker`] if the worker died without
    /// producing a result (it panicked). The pending slot is cleared so a new
    /// search can be requested.
    pub fn poll(&mut self) -> ChessEngineResult<Option<SearchOutcome>> {
        let Some(pending) = &self.pending else {
            return Ok(None);
        };

        match pending.receiver.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                debug!(revision = outcome.ticket.revision, "[SCHEDULER] Search result received");
                Ok(Some(outcome))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                warn!("[SCHEDULER] Worker exited without a result");
                Err(ChessEngineError::SearchWorker {
                    message: "worker exited without a result".to_string(),
                })
            }
        }
    }

    /// Block until the pending search finishes
    ///
    /// Returns `Ok(None)` when nothing is pending.
    ///
    /// # Errors
    ///
    /// Same as [`SearchScheduler::poll`].
    pub fn wait(&mut self) -> ChessEngineResult<Option<SearchOutcome>> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };

        pending
            .receiver
            .recv()
            .map(Some)
            .map_err(|_| ChessEngineError::SearchWorker {
                message: "worker exited without a result".to_string(),
            })
    }

    /// Forget the pending search and tell its worker to stop
    pub fn cancel(&mut self) -> Option<SearchTicket> {
        let pending = self.pending.take()?;
        pending.stop.store(true, Ordering::Relaxed);
        debug!(revision = pending.ticket.revision, "[SCHEDULER] Search cancelled");
        Some(pending.ticket)
    }
}

impl std::fmt::Debug for SearchScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScheduler")
            .field("pending", &self.pending_ticket())
            .finish()
    }
}
