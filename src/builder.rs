use crate::board::{ALL_DIRECTIONS, ALL_ENDS, Board, Direction, Move};
use crate::key::WrigglerKey;
use crate::tree::{NodeId, SearchTree};
use crate::zobrist::Zobrist;
use std::collections::HashSet;
use tracing::{debug, info, warn};

const MOVES_PER_WRIGGLER: usize = ALL_DIRECTIONS.len() * ALL_ENDS.len();
const PROGRESS_INTERVAL: usize = 1 << 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildConfig {
    /// Stop growing the tree once it holds this many nodes, root included.
    pub max_nodes: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildStats {
    pub nodes: usize,
    pub max_depth: usize,
    /// False if the node budget cut the build short.
    pub complete: bool,
}

/// The `index`-th move tried from every node: wrigglers in id order, then
/// directions, then the head before the tail.
fn nth_move(index: usize) -> Move {
    let wriggler = index / MOVES_PER_WRIGGLER;
    let rest = index % MOVES_PER_WRIGGLER;
    Move::new(
        wriggler as u8,
        ALL_ENDS[rest % ALL_ENDS.len()],
        ALL_DIRECTIONS[rest / ALL_ENDS.len()],
    )
}

/// Move that created a node, kept so it can be undone when the node is left.
struct Entered {
    mv: Move,
    undo: Direction,
    key: WrigglerKey,
}

struct Frame {
    node: NodeId,
    next_move: usize,
    entered: Option<Entered>,
}

/// Enumerates every move sequence from the starting board into a tree.
///
/// A wriggler configuration is skipped only if it already occurs on the path
/// from the root to the current node, so the same configuration can appear
/// many times under different ancestors and the tree can grow exponentially
/// with the number of reachable configurations. `max_nodes` is the only bound.
pub struct TreeBuilder<'a> {
    zobrist: &'a Zobrist,
    config: BuildConfig,
    stats: BuildStats,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(zobrist: &'a Zobrist, config: BuildConfig) -> Self {
        TreeBuilder {
            zobrist,
            config,
            stats: BuildStats::default(),
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Build the move tree rooted at the current board. The board is mutated
    /// while building and restored before returning.
    ///
    /// Depth-first with an explicit stack; each frame remembers the next move
    /// to try from its node, which gives the same order as recursing into
    /// each child before trying the next move.
    pub fn build(&mut self, board: &mut Board) -> SearchTree {
        let mut tree = SearchTree::new();
        let move_count = board.wriggler_count() * MOVES_PER_WRIGGLER;

        let mut path: HashSet<WrigglerKey> = HashSet::new();

        let mut stack = vec![Frame {
            node: tree.root(),
            next_move: 0,
            entered: None,
        }];
        let mut max_depth = 0;
        let mut complete = true;

        info!(wrigglers = board.wriggler_count(), "building move tree");

        while let Some(frame) = stack.last_mut() {
            if frame.next_move < move_count && complete {
                let mv = nth_move(frame.next_move);
                frame.next_move += 1;
                let node = frame.node;

                let undo = board.undo_direction(mv.wriggler, mv.end);
                if !board.apply_move(mv.wriggler, mv.end, mv.direction) {
                    continue;
                }

                let key = board.state_key(mv.wriggler, self.zobrist);
                if path.contains(&key) {
                    board.move_back(mv.wriggler, mv.end, undo);
                    continue;
                }

                if self.config.max_nodes.is_some_and(|max| tree.len() >= max) {
                    warn!(nodes = tree.len(), "node budget reached, tree is incomplete");
                    complete = false;
                    board.move_back(mv.wriggler, mv.end, undo);
                    continue;
                }

                path.insert(key.clone());
                let wriggler = board.wriggler(mv.wriggler);
                let child = tree.add_node(node, mv, wriggler.head(), wriggler.tail());
                stack.push(Frame {
                    node: child,
                    next_move: 0,
                    entered: Some(Entered { mv, undo, key }),
                });

                max_depth = max_depth.max(stack.len() - 1);
                if tree.len() % PROGRESS_INTERVAL == 0 {
                    debug!(nodes = tree.len(), depth = stack.len() - 1, "building");
                }
                continue;
            }

            // Every move from this node has been tried: leave it.
            if let Some(Frame {
                entered: Some(entered),
                ..
            }) = stack.pop()
            {
                path.remove(&entered.key);
                board.move_back(entered.mv.wriggler, entered.mv.end, entered.undo);
            }
        }

        self.stats = BuildStats {
            nodes: tree.len(),
            max_depth,
            complete,
        };
        info!(
            nodes = self.stats.nodes,
            max_depth, complete, "move tree built"
        );

        tree
    }
}
