use crate::board::{MAX_SIZE, MAX_WRIGGLERS, Position, Wriggler};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Zobrist hash for wriggler bodies
pub struct Zobrist {
    cell_hashes: [[u64; MAX_SIZE]; MAX_SIZE],
    head_hashes: [[u64; MAX_SIZE]; MAX_SIZE],
    id_hashes: [u64; MAX_WRIGGLERS],
}

impl Zobrist {
    pub fn new() -> Self {
        // Use a seeded PRNG for reproducible Zobrist hashes
        let mut rng = ChaCha8Rng::seed_from_u64(0x123456789abcdef0);

        let mut cell_hashes = [[0u64; MAX_SIZE]; MAX_SIZE];
        for row in cell_hashes.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.next_u64();
            }
        }

        let mut head_hashes = [[0u64; MAX_SIZE]; MAX_SIZE];
        for row in head_hashes.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.next_u64();
            }
        }

        let mut id_hashes = [0u64; MAX_WRIGGLERS];
        for id in id_hashes.iter_mut() {
            *id = rng.next_u64();
        }

        Zobrist {
            cell_hashes,
            head_hashes,
            id_hashes,
        }
    }

    /// Get hash value for a body segment at a specific position
    pub fn cell_hash(&self, pos: Position) -> u64 {
        self.cell_hashes[pos.1 as usize][pos.0 as usize]
    }

    /// Get hash value for a head at a specific position
    pub fn head_hash(&self, pos: Position) -> u64 {
        self.head_hashes[pos.1 as usize][pos.0 as usize]
    }

    pub fn id_hash(&self, id: u8) -> u64 {
        self.id_hashes[id as usize]
    }

    /// Compute the hash for a wriggler: its id, its head, and every cell it covers.
    /// The head term separates a body from the same cells traversed in reverse.
    pub fn wriggler_hash(&self, wriggler: &Wriggler) -> u64 {
        let mut hash = self.id_hash(wriggler.id()) ^ self.head_hash(wriggler.head());
        for &pos in wriggler.positions() {
            hash ^= self.cell_hash(pos);
        }
        hash
    }
}

impl Default for Zobrist {
    fn default() -> Self {
        Self::new()
    }
}
