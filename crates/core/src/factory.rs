//! Piece factory - uniform random piece generation
//!
//! Each call picks one of the seven catalog kinds with equal probability and
//! places it at the spawn position. The only state is the random source, which
//! is injected so games can be replayed from a seed.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::pieces::Piece;
use crate::types::ShapeKind;

#[derive(Debug, Clone)]
pub struct PieceFactory<R = StdRng> {
    rng: R,
}

impl PieceFactory<StdRng> {
    /// Factory backed by a seeded `StdRng`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> PieceFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a kind uniformly from the catalog
    pub fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.gen_range(0..ShapeKind::ALL.len())]
    }

    /// New piece at the spawn position
    pub fn create_piece(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }
}
