//! Depth-first and breadth-first walks over a [`Tree`]. Every walk keeps its own stack (or
//! queue) of pending nodes instead of recursing, so a degenerate tree can't overflow the call
//! stack.

use super::{NodeId, Tree};
use crate::queue::Queue;

impl<K, V> Tree<K, V> {
    /// Iterates over the entries in ascending key order: left subtree, node, right subtree.
    /// Duplicate keys come out oldest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::Tree;
    ///
    /// let tree: Tree<_, _> = vec![(2, 'b'), (3, 'c'), (1, 'a')].into_iter().collect();
    /// let entries: Vec<_> = tree.in_order().collect();
    ///
    /// assert_eq!(entries, [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        let mut iter = InOrder {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Iterates over the entries node first, then the left subtree, then the right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Iterates over the entries left subtree first, then the right subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        PostOrder {
            tree: self,
            stack: self.root.map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Iterates over the entries one level at a time, top to bottom and left to right within a
    /// level.
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        LevelOrder {
            tree: self,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Collects the values of the tree in level order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [25, 15, 50, 10, 24, 35, 70] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// assert_eq!(tree.bfs(), [&250, &150, &500, &100, &240, &350, &700]);
    /// ```
    pub fn bfs(&self) -> Vec<&V> {
        self.level_order().map(|(_, value)| value).collect()
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order iterator over a [`Tree`]. Created by [`Tree::in_order`].
pub struct InOrder<'a, K, V> {
    tree: &'a Tree<K, V>,
    // Nodes whose left subtree is being (or has been) visited but which haven't been yielded.
    stack: Vec<NodeId>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.tree.node(id).left;
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        self.push_left_spine(tree.node(id).right);
        Some(tree.entry(id))
    }
}

/// Pre-order iterator over a [`Tree`]. Created by [`Tree::pre_order`].
pub struct PreOrder<'a, K, V> {
    tree: &'a Tree<K, V>,
    stack: Vec<NodeId>,
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(id);
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(tree.entry(id))
    }
}

/// Post-order iterator over a [`Tree`]. Created by [`Tree::post_order`].
pub struct PostOrder<'a, K, V> {
    tree: &'a Tree<K, V>,
    // The flag is set once a node's children have been pushed above it.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some((id, expanded)) = self.stack.pop() {
            if expanded {
                return Some(tree.entry(id));
            }

            let node = tree.node(id);
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }

        None
    }
}

/// Level-order (breadth-first) iterator over a [`Tree`]. Created by [`Tree::level_order`].
pub struct LevelOrder<'a, K, V> {
    tree: &'a Tree<K, V>,
    queue: Queue<NodeId>,
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }
        let id = self.queue.dequeue().ok()?;

        let tree = self.tree;
        let node = tree.node(id);
        if let Some(left) = node.left {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right {
            self.queue.enqueue(right);
        }

        Some(tree.entry(id))
    }
}
