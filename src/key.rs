use crate::board::{Position, Wriggler};
use crate::zobrist::Zobrist;
use std::hash::{Hash, Hasher};

/// The full body of one wriggler, used to recognise a configuration that
/// already appears on the current search path.
///
/// Equality compares the id and every position in order. Hashing only feeds
/// the precomputed Zobrist value, which is a function of the same data.
#[derive(Debug, Clone)]
pub struct WrigglerKey {
    id: u8,
    positions: Vec<Position>,
    hash: u64,
}

impl WrigglerKey {
    pub fn new(zobrist: &Zobrist, wriggler: &Wriggler) -> Self {
        WrigglerKey {
            id: wriggler.id(),
            positions: wriggler.positions().iter().copied().collect(),
            hash: zobrist.wriggler_hash(wriggler),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl PartialEq for WrigglerKey {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id() && self.positions() == other.positions()
    }
}

impl Eq for WrigglerKey {}

impl Hash for WrigglerKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
