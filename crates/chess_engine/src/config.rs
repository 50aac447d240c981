use crate::search::SearchAlgorithm;

pub const DEFAULT_DEPTH: u8 = 3;
pub const MAX_DEPTH: u8 = 6;  // Full-width search without a TT gets slow past this

/// How the engine searches. `seed` fixes the tie-break order between equally scored moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub algorithm: SearchAlgorithm,
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth.min(MAX_DEPTH);
        self
    }

    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            algorithm: SearchAlgorithm::AlphaBeta,
            seed: None,
        }
    }
}
