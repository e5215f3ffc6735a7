use crate::board::{Board, End, Move, Position};
use crate::builder::{BuildConfig, BuildStats, TreeBuilder};
use crate::tree::{GoalPredicate, Node, SearchTree};
use crate::zobrist::Zobrist;
use std::fmt;
use tracing::info;

/// A wriggler that has to get its head or tail onto a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub wriggler: u8,
    pub cell: Position,
}

impl Goal {
    pub fn new(wriggler: u8, cell: Position) -> Self {
        Goal { wriggler, cell }
    }

    /// The wriggler reaching the bottom-right cell of the board.
    pub fn bottom_right(wriggler: u8, board: &Board) -> Self {
        Goal {
            wriggler,
            cell: ((board.width() - 1) as u8, (board.height() - 1) as u8),
        }
    }
}

impl GoalPredicate for Goal {
    fn matches(&self, node: &Node) -> bool {
        node.transition().is_some_and(|t| {
            t.mv.wriggler == self.wriggler && (t.head == self.cell || t.tail == self.cell)
        })
    }
}

/// One move of a solution and the cell the moved end landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub mv: Move,
    pub position: Position,
}

impl fmt::Display for Step {
    /// `<wriggler> <1 if the tail moved, 0 for the head> <x> <y>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail_moved = self.mv.end == End::Tail;
        write!(
            f,
            "{} {} {} {}",
            self.mv.wriggler, tail_moved as u8, self.position.0, self.position.1
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Solved(Vec<Step>),
    /// The complete tree holds no goal node.
    NoSolution,
    /// The node budget stopped the build before a goal node was found.
    Cutoff,
}

pub struct Solver {
    initial: Board,
    board: Board,
    tree: SearchTree,
    goal: Goal,
    stats: BuildStats,
}

impl Solver {
    /// Build the complete move tree for `board`.
    pub fn new(board: Board, goal: Goal, config: BuildConfig) -> Self {
        let zobrist = Zobrist::new();
        let mut builder = TreeBuilder::new(&zobrist, config);
        let mut working = board.clone();
        let tree = builder.build(&mut working);

        Solver {
            initial: board,
            board: working,
            tree,
            goal,
            stats: builder.stats(),
        }
    }

    /// Search the tree breadth-first for the goal and replay the moves on
    /// the path, starting from the initial board each time.
    pub fn solve(&mut self) -> SolveResult {
        let path = self.tree.breadth_first_search(&self.goal);
        if path.is_empty() {
            info!(nodes = self.stats.nodes, "no goal node in tree");
            return if self.stats.complete {
                SolveResult::NoSolution
            } else {
                SolveResult::Cutoff
            };
        }

        self.board = self.initial.clone();
        let mut steps = Vec::with_capacity(path.len() - 1);
        for &id in &path[1..] {
            let t = self
                .tree
                .get(id)
                .transition()
                .expect("non-root node has a transition");
            let applied = self
                .board
                .apply_move(t.mv.wriggler, t.mv.end, t.mv.direction);
            assert!(applied, "Cannot replay {}", t.mv);
            steps.push(Step {
                mv: t.mv,
                position: t.moved_end(),
            });
        }

        info!(moves = steps.len(), "solution found");
        SolveResult::Solved(steps)
    }

    /// The initial board before `solve`, the solved board after a successful one.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    pub fn build_stats(&self) -> BuildStats {
        self.stats
    }
}
