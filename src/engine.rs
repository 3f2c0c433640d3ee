//! Asynchronous search boundary.
//!
//! A UI or game loop must never block on the search, so a request is
//! dispatched to a background thread and exactly one result comes back
//! over a one-shot channel. One session allows at most one outstanding
//! search; a second submission is rejected until the pending result has
//! been consumed.

use std::fmt;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::board::{Board, MoveSequence, Player, TurnPhase};
use crate::search::{find_best_sequence_with_report, SearchReport};
use crate::zobrist::HashingContext;

/// Everything the worker needs to run one search.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub board: Board,
    pub player: Player,
    pub phase: TurnPhase,
    pub depth: u32,
}

/// Result of one search request. `best` is `None` only when the position
/// had no legal turn for the requesting player.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub best: Option<MoveSequence>,
    pub report: SearchReport,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A search is already outstanding for this session.
    SearchPending,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SearchPending => {
                write!(f, "a search is already in flight for this session")
            }
        }
    }
}

impl std::error::Error for EngineError {}

enum SessionState {
    Idle,
    Searching {
        receiver: Receiver<SearchOutcome>,
        started: Instant,
    },
}

/// One engine session. Cheap to share behind a reference; the session
/// slot is internally locked so the UI thread and a poll timer may both
/// hold `&Engine`.
pub struct Engine {
    hasher: Arc<HashingContext>,
    state: Mutex<SessionState>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(HashingContext::new())
    }

    /// Session with reproducible position hashes.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_context(HashingContext::from_seed(seed))
    }

    #[must_use]
    pub fn with_context(hasher: HashingContext) -> Self {
        Engine {
            hasher: Arc::new(hasher),
            state: Mutex::new(SessionState::Idle),
        }
    }

    /// Dispatch one search to a background thread.
    pub fn submit(&self, request: SearchRequest) -> Result<(), EngineError> {
        let mut state = self.state.lock();
        if matches!(*state, SessionState::Searching { .. }) {
            return Err(EngineError::SearchPending);
        }
        let (sender, receiver) = channel();
        let hasher = Arc::clone(&self.hasher);
        thread::spawn(move || {
            let started = Instant::now();
            let (best, report) = find_best_sequence_with_report(
                &request.board,
                request.player,
                request.phase,
                request.depth,
                &hasher,
            );
            // The session may have been dropped while we searched; a dead
            // receiver just discards the result.
            let _ = sender.send(SearchOutcome {
                best,
                report,
                elapsed: started.elapsed(),
            });
        });
        *state = SessionState::Searching {
            receiver,
            started: Instant::now(),
        };
        Ok(())
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        matches!(*self.state.lock(), SessionState::Searching { .. })
    }

    /// Time since the outstanding search was submitted, if one is pending.
    #[must_use]
    pub fn pending_for(&self) -> Option<Duration> {
        match &*self.state.lock() {
            SessionState::Searching { started, .. } => Some(started.elapsed()),
            SessionState::Idle => None,
        }
    }

    /// Poll for the outstanding result without blocking. Returns `None`
    /// while the search is still running or when none is outstanding.
    pub fn try_result(&self) -> Option<SearchOutcome> {
        let mut state = self.state.lock();
        let SessionState::Searching { receiver, .. } = &*state else {
            return None;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                *state = SessionState::Idle;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("search worker exited without sending a result");
                *state = SessionState::Idle;
                None
            }
        }
    }

    /// Block until the outstanding search finishes. Returns `None` when no
    /// search is outstanding.
    pub fn wait(&self) -> Option<SearchOutcome> {
        let mut state = self.state.lock();
        let previous = std::mem::replace(&mut *state, SessionState::Idle);
        match previous {
            SessionState::Idle => None,
            SessionState::Searching { receiver, .. } => match receiver.recv() {
                Ok(outcome) => Some(outcome),
                Err(_) => {
                    log::error!("search worker exited without sending a result");
                    None
                }
            },
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening_request(depth: u32) -> SearchRequest {
        SearchRequest {
            board: Board::new(),
            player: Player::Red,
            phase: TurnPhase::Fresh,
            depth,
        }
    }

    #[test]
    fn submit_and_wait_returns_one_result() {
        let engine = Engine::with_seed(7);
        engine.submit(opening_request(3)).unwrap();
        let outcome = engine.wait().expect("search should produce a result");
        assert!(outcome.best.is_some());
        assert!(!engine.is_searching());
        // The slot is consumed: a second wait has nothing to return.
        assert!(engine.wait().is_none());
    }

    #[test]
    fn second_submit_is_rejected_while_pending() {
        let engine = Engine::with_seed(7);
        engine.submit(opening_request(5)).unwrap();
        let second = engine.submit(opening_request(2));
        assert_eq!(second, Err(EngineError::SearchPending));
        assert!(engine.wait().is_some());
    }

    #[test]
    fn try_result_eventually_delivers() {
        let engine = Engine::with_seed(7);
        engine.submit(opening_request(2)).unwrap();
        let deadline = Instant::now() + Duration::from_secs(30);
        loop {
            if let Some(outcome) = engine.try_result() {
                assert!(outcome.best.is_some());
                break;
            }
            assert!(Instant::now() < deadline, "search did not finish in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn searching_a_lost_position_reports_no_move() {
        // Black has no pieces at all.
        let board = Board::empty().with_piece(
            crate::board::Pos::new(5, 4),
            crate::board::Piece::new(Player::Red, crate::board::PieceKind::Man),
        );
        let engine = Engine::with_seed(7);
        engine
            .submit(SearchRequest {
                board,
                player: Player::Black,
                phase: TurnPhase::Fresh,
                depth: 4,
            })
            .unwrap();
        let outcome = engine.wait().expect("worker should still report");
        assert!(outcome.best.is_none());
    }
}
