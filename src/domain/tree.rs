use generational_arena::{Arena, Index};
use std::fmt;
use termtree::Tree;
use tracing::instrument;

use crate::domain::problem::Action;

/// A node in the search tree: a reached state plus bookkeeping for path
/// reconstruction and ordering.
#[derive(Debug)]
pub struct SearchNode<S> {
    /// State this node represents
    pub state: S,
    /// Action that produced this state, None for the root
    pub action: Option<Action<S>>,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena
    pub children: Vec<Index>,
    /// Accumulated cost from the root (g)
    pub path_cost: f64,
    /// Heuristic estimate to the nearest goal (h)
    pub heuristic: f64,
}

impl<S> SearchNode<S> {
    /// Evaluation value used by informed strategies: f = g + h.
    pub fn f_cost(&self) -> f64 {
        self.path_cost + self.heuristic
    }
}

/// Arena-backed search tree.
///
/// Every state a strategy reaches is inserted here; parent indices record
/// how it was reached, so a solution path is a walk from a goal node back
/// to the root. The generational arena gives O(1) node access without
/// reference-counted back pointers.
#[derive(Debug)]
pub struct SearchTree<S> {
    arena: Arena<SearchNode<S>>,
    root: Option<Index>,
}

impl<S> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SearchTree<S> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert the root node. Replaces any previous root.
    pub fn insert_root(&mut self, state: S, heuristic: f64) -> Index {
        let node = SearchNode {
            state,
            action: None,
            parent: None,
            children: Vec::new(),
            path_cost: 0.0,
            heuristic,
        };
        let idx = self.arena.insert(node);
        self.root = Some(idx);
        idx
    }

    /// Insert a child reached from `parent` via `action`.
    pub fn insert_child(
        &mut self,
        parent: Index,
        action: Action<S>,
        heuristic: f64,
    ) -> Option<Index>
    where
        S: Clone,
    {
        let path_cost = self.arena.get(parent)?.path_cost + action.cost;
        let node = SearchNode {
            state: action.effect.clone(),
            action: Some(action),
            parent: Some(parent),
            children: Vec::new(),
            path_cost,
            heuristic,
        };
        let idx = self.arena.insert(node);
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(idx);
        }
        Some(idx)
    }

    pub fn get(&self, idx: Index) -> Option<&SearchNode<S>> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Indices from the root to `idx`, inclusive.
    pub fn path_to(&self, idx: Index) -> Vec<Index> {
        let mut path = Vec::new();
        let mut current = Some(idx);
        while let Some(i) = current {
            path.push(i);
            current = self.get(i).and_then(|node| node.parent);
        }
        path.reverse();
        path
    }

    /// Maximum depth of the tree, counted in nodes.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            if depth > max_depth {
                max_depth = depth;
            }
            if let Some(node) = self.get(idx) {
                for &child in &node.children {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }
}

impl<S: fmt::Display> SearchTree<S> {
    /// Render the explored tree for terminal display. Each label shows the
    /// producing action (or "start") and the node's g/h values.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self) -> Option<Tree<String>> {
        let root = self.root?;
        Some(self.render_node(root))
    }

    fn render_node(&self, idx: Index) -> Tree<String> {
        let node = match self.get(idx) {
            Some(node) => node,
            None => return Tree::new("<missing node>".to_string()),
        };
        let label = match &node.action {
            Some(action) => format!(
                "{} (g={}, h={})",
                action.name, node.path_cost, node.heuristic
            ),
            None => format!("start (h={})", node.heuristic),
        };
        let mut tree = Tree::new(label);
        for &child in &node.children {
            tree.push(self.render_node(child));
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (SearchTree<i32>, Index, Index) {
        let mut tree = SearchTree::new();
        let root = tree.insert_root(0, 2.0);
        let a = tree
            .insert_child(root, Action::new("A", 1.0, 1), 1.0)
            .unwrap();
        let b = tree
            .insert_child(a, Action::new("B", 1.0, 2), 0.0)
            .unwrap();
        (tree, root, b)
    }

    #[test]
    fn path_cost_accumulates_along_insertions() {
        let (tree, _, leaf) = sample_tree();
        assert_eq!(tree.get(leaf).unwrap().path_cost, 2.0);
        assert_eq!(tree.get(leaf).unwrap().f_cost(), 2.0);
    }

    #[test]
    fn path_to_walks_from_root_to_node() {
        let (tree, root, leaf) = sample_tree();
        let path = tree.path_to(leaf);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], root);
        assert_eq!(path[2], leaf);
    }

    #[test]
    fn depth_counts_nodes_on_longest_branch() {
        let (tree, _, _) = sample_tree();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn render_labels_root_as_start() {
        let (tree, _, _) = sample_tree();
        let rendered = tree.render().unwrap().to_string();
        assert!(rendered.contains("start"));
        assert!(rendered.contains("A (g=1, h=1)"));
    }
}
