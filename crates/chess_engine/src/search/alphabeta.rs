//! Recursive alpha-beta minimax
//!
//! Each child is searched on its own copy of the position, so there is no
//! make/unmake bookkeeping to get wrong on early (pruned) returns.
//!
//! A search started through [`search_until_stopped`] polls its stop flag at
//! every node and unwinds as soon as it is raised. The result of a stopped
//! search is meaningless and must be thrown away.

use super::SearchResult;
use crate::constants::*;
use crate::evaluation::evaluate;
use crate::hash::{is_repetition_draw, PositionKey};
use crate::move_gen::{is_in_check, legal_moves};
use crate::position::Position;
use crate::types::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Window bound, beyond any mate score
const INFINITY: i32 = MATE_SCORE * 2;

struct Searcher<'a> {
    prune: bool,
    stop: Option<&'a AtomicBool>,
    nodes: u64,
    /// Keys of every position from the start of the game down to the node
    /// being searched
    path: Vec<PositionKey>,
}

/// Search `position` to `depth` plies
///
/// # Examples
///
/// ```rust,ignore
/// let result = search(&Position::starting(), 3);
/// assert!(result.best_move.is_some());
/// ```
pub fn search(position: &Position, depth: u8) -> SearchResult {
    search_with_history(position, depth, &[])
}

/// Search with the keys of the positions that preceded `position` in the game
///
/// `history` excludes `position` itself. It lets the search see
/// threefold repetitions that started before the root.
pub fn search_with_history(position: &Position, depth: u8, history: &[PositionKey]) -> SearchResult {
    run(position, depth, history, true, None)
}

/// [`search_with_history`] that gives up once `stop` is set
///
/// Used by background workers whose result may no longer be wanted. Check
/// `stop` after the call: when it is set the returned result is not a real
/// search result.
pub fn search_until_stopped(
    position: &Position,
    depth: u8,
    history: &[PositionKey],
    stop: &AtomicBool,
) -> SearchResult {
    run(position, depth, history, true, Some(stop))
}

/// Minimax without pruning, same rules and tie-break as [`search`]
///
/// Exponentially slower; exists to check that pruning never changes the
/// chosen move or score.
pub fn search_unpruned(position: &Position, depth: u8) -> SearchResult {
    run(position, depth, &[], false, None)
}

fn run(
    position: &Position,
    depth: u8,
    history: &[PositionKey],
    prune: bool,
    stop: Option<&AtomicBool>,
) -> SearchResult {
    let start = Instant::now();
    let mut path = Vec::with_capacity(history.len() + depth as usize + 1);
    path.extend_from_slice(history);
    path.push(position.key());

    let mut searcher = Searcher {
        prune,
        stop,
        nodes: 0,
        path,
    };
    let result = searcher.root(position, depth);

    if searcher.stopped() {
        debug!(nodes = result.nodes, "[SEARCH] Search stopped early");
        return result;
    }

    info!(
        best_move = ?result.best_move.map(|m| m.to_string()),
        score = result.score,
        nodes = result.nodes,
        depth = result.depth,
        pruned = prune,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "[SEARCH] Search complete"
    );
    result
}

impl Searcher<'_> {
    fn root(&mut self, position: &Position, depth: u8) -> SearchResult {
        self.nodes += 1;
        let finish = |best_move, score, nodes| SearchResult {
            best_move,
            score,
            nodes,
            depth,
        };

        if depth == 0 {
            return finish(None, evaluate(position), self.nodes);
        }

        let moves = legal_moves(position);
        if moves.is_empty() {
            let score = self.no_moves_score(position, depth);
            debug!(score, "[SEARCH] Root position is terminal");
            return finish(None, score, self.nodes);
        }
        if self.is_draw(position) {
            debug!("[SEARCH] Root position is drawn");
            return finish(None, 0, self.nodes);
        }

        let maximizing = position.side_to_move == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let score = self.child(position, mv, depth - 1, alpha, beta);

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if self.stopped() {
                break;
            }
            if improves {
                best = Some((mv, score));
            }

            if self.prune {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        match best {
            Some((mv, score)) => finish(Some(mv), score, self.nodes),
            None => finish(None, 0, self.nodes),
        }
    }

    fn child(&mut self, parent: &Position, mv: Move, depth: u8, alpha: i32, beta: i32) -> i32 {
        let child = parent.after(mv);
        self.path.push(child.key());
        let score = self.minimax(&child, depth, alpha, beta);
        self.path.pop();
        score
    }

    fn minimax(&mut self, position: &Position, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if self.stopped() {
            return 0;
        }
        if depth == 0 {
            return evaluate(position);
        }

        let moves = legal_moves(position);
        if moves.is_empty() {
            return self.no_moves_score(position, depth);
        }
        if self.is_draw(position) {
            return 0;
        }

        let maximizing = position.side_to_move == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let score = self.child(position, mv, depth - 1, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.prune && alpha >= beta {
                break;
            }
        }

        best
    }

    /// Mate or stalemate score for a side with no legal move
    fn no_moves_score(&self, position: &Position, depth: u8) -> i32 {
        let mover = position.side_to_move;
        if is_in_check(position, mover) {
            // The side to move is mated
            -mover.sign() * (MATE_SCORE + depth as i32)
        } else {
            0
        }
    }

    fn stopped(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn is_draw(&self, position: &Position) -> bool {
        position.halfmove_clock >= FIFTY_MOVE_HALFMOVES
            || is_repetition_draw(&self.path, position.halfmove_clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn test_depth_zero_returns_static_evaluation() {
        let position = pos("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
        let result = search(&position, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, QUEEN_VALUE);
        assert_eq!(result.depth, 0);
    }

    #[test]
    fn test_captures_hanging_queen_at_depth_one() {
        let position = pos("4k3/8/8/3q4/8/4N3/8/4K3 w - - 0 1");
        let result = search(&position, 1);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("e3d5"));
        assert_eq!(result.score, KNIGHT_VALUE);
    }

    #[test]
    fn test_black_minimizes() {
        let position = pos("4k3/8/8/3n4/5Q2/8/8/4K3 b - - 0 1");
        let result = search(&position, 1);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("d5f4"));
        assert_eq!(result.score, -KNIGHT_VALUE);
    }

    #[test]
    fn test_mated_root_has_no_move() {
        // Fool's mate, White to move and mated
        let position = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        let result = search(&position, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -(MATE_SCORE + 3));
        assert_eq!(result.mate_in_plies(), Some(0));
    }

    #[test]
    fn test_stalemated_root_scores_zero() {
        let position = pos("k7/8/1Q6/8/8/8/8/7K b - - 0 1");
        let result = search(&position, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_fifty_move_root_is_drawn() {
        let position = pos("4k3/8/8/8/8/8/8/R3K3 w - - 100 80");
        let result = search(&position, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_finds_mate_in_one() {
        // Back-rank mate with Ra8#
        let position = pos("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let result = search(&position, 2);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("a1a8"));
        assert_eq!(result.score, MATE_SCORE + 1);
        assert_eq!(result.mate_in_plies(), Some(1));
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let position = Position::starting();
        let pruned = search(&position, 3);
        let full = search_unpruned(&position, 3);
        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.score, full.score);
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn test_repetition_history_scores_draw() {
        // White is up a rook; if the root already occurred twice it is a draw
        let position = pos("4k3/8/8/8/8/8/8/R3K3 w - - 8 20");
        let key = position.key();
        let drawn = search_with_history(&position, 2, &[key, key]);
        assert_eq!(drawn.best_move, None);
        assert_eq!(drawn.score, 0);

        let fresh = search(&position, 2);
        assert!(fresh.best_move.is_some());
        assert!(fresh.score > 0);
    }

    #[test]
    fn test_raised_stop_flag_ends_search_at_once() {
        let position = Position::starting();
        let stop = AtomicBool::new(true);
        let result = search_until_stopped(&position, 8, &[], &stop);
        // Root plus the first child, which sees the flag and returns
        assert_eq!(result.nodes, 2);
    }

    #[test]
    fn test_lowered_stop_flag_changes_nothing() {
        let position = pos("4k3/8/8/3q4/8/4N3/8/4K3 w - - 0 1");
        let stop = AtomicBool::new(false);
        assert_eq!(search_until_stopped(&position, 3, &[], &stop), search(&position, 3));
    }
}
