use crate::board::{End, Move, Position};
use std::collections::VecDeque;

/// Index of a node in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The move leading into a node and where the moved wriggler ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub mv: Move,
    pub head: Position,
    pub tail: Position,
}

impl Transition {
    /// New cell of the end that moved.
    pub fn moved_end(&self) -> Position {
        match self.mv.end {
            End::Head => self.head,
            End::Tail => self.tail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    transition: Option<Transition>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// None for the root.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[cfg(test)]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Decides whether a node is the one a search is looking for.
pub trait GoalPredicate {
    fn matches(&self, node: &Node) -> bool;
}

impl<F: Fn(&Node) -> bool> GoalPredicate for F {
    fn matches(&self, node: &Node) -> bool {
        self(node)
    }
}

/// Parent-linked tree of board transitions, stored as an arena.
///
/// Nodes are only ever appended; the whole arena is dropped at once.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new() -> Self {
        SearchTree {
            nodes: vec![Node {
                transition: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child under `parent`, after any existing siblings.
    pub fn add_node(&mut self, parent: NodeId, mv: Move, head: Position, tail: Position) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            transition: Some(Transition { mv, head, tail }),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Number of edges between the root and `id`.
    #[cfg(test)]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id);
        while let Some(parent) = current.parent() {
            depth += 1;
            current = self.get(parent);
        }
        depth
    }

    /// Nodes from the root to `id`, both inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.get(current).parent() {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Visit nodes in level order, siblings in insertion order, and return the
    /// root-to-node path of the first node the goal matches. The root is
    /// offered to the goal like any other node. Returns an empty path if
    /// nothing matches.
    pub fn breadth_first_search<G: GoalPredicate + ?Sized>(&self, goal: &G) -> Vec<NodeId> {
        let mut queue = VecDeque::new();
        queue.push_back(self.root());

        while let Some(id) = queue.pop_front() {
            let node = self.get(id);
            if goal.matches(node) {
                return self.path_to(id);
            }
            queue.extend(node.children().iter().copied());
        }

        Vec::new()
    }
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}
