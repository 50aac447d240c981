use chess_core::{Color, GameState};
use log::{debug, error, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::evaluation::{terminal_score, Evaluator, MaterialEvaluator, Score, SCORE_INFINITY};

/// Minimax is alpha-beta with pruning switched off; both return the same scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAlgorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl SearchAlgorithm {
    fn prunes(self) -> bool {
        matches!(self, SearchAlgorithm::AlphaBeta)
    }
}

/// Counters for the last `search` or `best_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub best_move: M,
    pub score: Score,
    /// Every root move that reached `score`, in move generation order.
    pub candidates: Vec<M>,
    pub nodes: u64,
}

/// Fixed-depth game tree search.
///
/// Scores are always relative to one color per call: the side to move at the
/// root of `best_move`, or the color named by `maximizing` in `search`.
pub struct SearchEngine<E = MaterialEvaluator, R = StdRng> {
    algorithm: SearchAlgorithm,
    evaluator: E,
    rng: R,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self::with_parts(algorithm, MaterialEvaluator, StdRng::from_entropy())
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(config.algorithm, MaterialEvaluator, rng)
    }
}

impl<E, R: Rng> SearchEngine<E, R> {
    pub fn with_parts(algorithm: SearchAlgorithm, evaluator: E, rng: R) -> Self {
        Self {
            algorithm,
            evaluator,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Value of `state` searched `depth` plies deep inside the `[alpha, beta]` window.
    ///
    /// `maximizing` says whether the side to move is the one whose score is
    /// maximized. The state is back in its original condition on return,
    /// errors included.
    pub fn search<S>(
        &mut self,
        state: &mut S,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Result<Score, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats = SearchStats::default();
        let to_move = state.side_to_move();
        let perspective = if maximizing { to_move } else { !to_move };
        self.search_node(state, depth, alpha, beta, maximizing, perspective)
    }

    /// Picks the best move for the side to move, choosing at random among
    /// equally scored moves. `Ok(None)` means there is no legal move.
    ///
    /// Every root move is searched with a fresh full window, so pruning only
    /// happens inside each branch.
    pub fn best_move<S>(
        &mut self,
        state: &mut S,
        depth: u8,
    ) -> Result<Option<SearchResult<S::Move>>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats = SearchStats::default();
        let perspective = state.side_to_move();
        let child_depth = depth.saturating_sub(1);

        let mut best_value = -SCORE_INFINITY;
        let mut candidates = Vec::new();

        for mv in state.legal_moves() {
            state.apply(mv)?;
            let value = self.search_node(
                state,
                child_depth,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                false,
                perspective,
            );
            state.undo()?;
            let value = value?;
            trace!("root move {:?} scored {}", mv, value);

            if value > best_value {
                best_value = value;
                candidates.clear();
                candidates.push(mv);
            } else if value == best_value {
                candidates.push(mv);
            }
        }

        let best_move = match candidates.choose(&mut self.rng) {
            Some(&mv) => mv,
            None => {
                debug!("no legal move for {:?}", perspective);
                return Ok(None);
            }
        };

        debug!(
            "{:?} search depth {} picked {:?} (score {}, {} tied, {} nodes, {} cutoffs)",
            self.algorithm,
            depth,
            best_move,
            best_value,
            candidates.len(),
            self.stats.nodes,
            self.stats.cutoffs
        );

        Ok(Some(SearchResult {
            best_move,
            score: best_value,
            candidates,
            nodes: self.stats.nodes,
        }))
    }

    fn search_node<S>(
        &mut self,
        state: &mut S,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        perspective: Color,
    ) -> Result<Score, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes += 1;

        // Game-over scores take precedence over the static evaluation
        if let Some(score) = terminal_score(state, perspective) {
            return Ok(score);
        }
        if depth == 0 {
            return Ok(self.evaluator.evaluate(state, perspective));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            error!("rules engine gave no legal moves for a live position at depth {}", depth);
            return Err(SearchError::NoLegalMoves { depth });
        }

        let prunes = self.algorithm.prunes();
        let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

        for mv in moves {
            state.apply(mv)?;
            let value = self.search_node(state, depth - 1, alpha, beta, !maximizing, perspective);
            // Undo before looking at the result so errors leave the state intact too
            state.undo()?;
            let value = value?;

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if prunes && beta <= alpha {
                self.stats.cutoffs += 1;
                trace!("cutoff after {:?} at depth {} (alpha {}, beta {})", mv, depth, alpha, beta);
                break;
            }
        }

        Ok(best)
    }
}
