//! An unbalanced BST whose nodes live in an arena and point back at their parents.
//!
//! Keys equal to an existing key are routed to its right subtree, so inserting a duplicate adds
//! a second node rather than overwriting the first. Lookups stop at the first match on the way
//! down, which is always the earliest inserted node holding that key.
//!
//! # Examples
//!
//! ```
//! use bst_search::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.find(&1), Ok(&"one"));
//!
//! // Duplicates don't overwrite - the original is still found first.
//! tree.insert(1, "uno");
//! assert_eq!(tree.find(&1), Ok(&"one"));
//! assert_eq!(tree.len(), 2);
//!
//! // Removing returns the value of the node that was removed.
//! assert_eq!(tree.remove(&1), Ok("one"));
//! assert_eq!(tree.find(&1), Ok(&"uno"));
//! ```

mod traverse;

use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, Result};

pub use traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// Index of a node in a [`Tree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
    // Non-owning. Only the parent's `left`/`right` own a node.
    parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

/// A Binary Search Tree. This can be used for inserting, finding, and removing keys and values.
/// It does not rebalance itself so inserting keys in sorted order degrades it into a list.
#[derive(Clone)]
pub struct Tree<K, V> {
    // Removed nodes leave a `None` behind whose index is recycled through `free`.
    nodes: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
    // `None` is the empty tree.
    root: Option<NodeId>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.in_order()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of nodes in the tree. Duplicate keys each count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node from the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::Tree;
    ///
    /// // Sorted input degrades the tree into a list.
    /// let tree: Tree<_, _> = (0..10).map(|x| (x, x)).collect();
    /// assert_eq!(tree.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }

        height
    }

    /// The entry with the smallest key, if any. With duplicate minimums this is the earliest
    /// inserted one.
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(self.leftmost(root)))
    }

    /// The entry with the largest key, if any. With duplicate maximums this is the latest
    /// inserted one.
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root.map(|root| {
            let mut id = root;
            while let Some(right) = self.node(id).right {
                id = right;
            }
            self.entry(id)
        })
    }

    /// Inserts the given value into the tree stored at the given key. A key equal to one already
    /// in the tree is placed in that node's right subtree; nothing is ever overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [25, 15, 50, 10, 24, 35, 70] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let keys: Vec<_> = tree.in_order().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [10, 15, 24, 25, 35, 50, 70]);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.alloc(Node::new(key, value, None)));
            self.len = 1;
            return;
        };

        loop {
            let node = self.node(current);
            let goes_left = key < node.key;
            let next = if goes_left { node.left } else { node.right };

            match next {
                Some(child) => current = child,
                None => {
                    let child = self.alloc(Node::new(key, value, Some(current)));
                    let parent = self.node_mut(current);
                    if goes_left {
                        parent.left = Some(child);
                    } else {
                        parent.right = Some(child);
                    }
                    self.len += 1;

                    if cfg!(debug_assertions) {
                        let parent = self.node(current);
                        let child = self.node(child);
                        assert!(child.parent == Some(current));
                        if goes_left {
                            assert!(child.key < parent.key);
                        } else {
                            assert!(child.key >= parent.key);
                        }
                    }
                    return;
                }
            }
        }
    }

    /// Finds the value associated with the given key.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node has the key. Use [`get`](Tree::get) for a lookup that
    /// returns an `Option` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.find(&42), Err(Error::KeyNotFound));
    /// ```
    pub fn find(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Potentially finds the value associated with the given key. If no node has the
    /// corresponding key, `None` is returned.
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.locate(key).map(|id| &self.node(id).value)
    }

    /// Whether any node holds the given key.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.locate(key).is_some()
    }

    /// Removes the first node found holding the given key and returns its value.
    ///
    /// A node with two children takes over the key and value of its in-order successor (the
    /// leftmost node of its right subtree) and the successor's node is spliced out instead.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node has the key. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Ok(2));
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let target = self.locate(key).ok_or(Error::KeyNotFound)?;

        let node = self.node(target);
        let doomed = match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                self.swap_entries(target, successor);
                successor
            }
            _ => target,
        };

        // `doomed` has at most one child: either it was `target` without two children, or it's
        // a leftmost node which has no left child.
        let node = self.node(doomed);
        let child = node.left.or(node.right);
        self.replace_with(doomed, child);

        let removed = self.release(doomed);
        self.len -= 1;
        Ok(removed.value)
    }

    /// Points whatever referenced `id` (its parent, or the tree's root) at `replacement` instead
    /// and fixes up `replacement`'s parent. `id` is left unreachable.
    fn replace_with(&mut self, id: NodeId, replacement: Option<NodeId>) {
        let parent = self.node(id).parent;
        match parent {
            Some(parent_id) => {
                let parent = self.node_mut(parent_id);
                if parent.left == Some(id) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
            None => self.root = replacement,
        }

        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }

        if cfg!(debug_assertions) {
            if let Some(parent_id) = parent {
                let parent = self.node(parent_id);
                assert!(parent.left != Some(id) && parent.right != Some(id));
            }
        }
    }

    /// Exchanges the keys and values of two distinct nodes, leaving their links alone.
    fn swap_entries(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        let (Some(first), Some(second)) = (head[lo].as_mut(), tail[0].as_mut()) else {
            panic!("live `NodeId` refers to a vacant slot");
        };

        std::mem::swap(&mut first.key, &mut second.key);
        std::mem::swap(&mut first.value, &mut second.value);
    }

    /// Walks down from the root the way `find` does and returns the first node with `key`.
    fn locate(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Greater => node.right,
            };
        }

        None
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    fn entry(&self, id: NodeId) -> (&K, &V) {
        let node = self.node(id);
        (&node.key, &node.value)
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.nodes[id.0]
            .take()
            .expect("released `NodeId` refers to a vacant slot");
        self.free.push(id);
        node
    }

    /// ## Panics
    ///
    /// When `id` was released. Only ids reachable from `root` may be passed.
    fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes[id.0]
            .as_ref()
            .expect("live `NodeId` refers to a vacant slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes[id.0]
            .as_mut()
            .expect("live `NodeId` refers to a vacant slot")
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
impl<K, V> Tree<K, V>
where
    K: Ord + fmt::Debug,
{
    /// Walks the whole tree checking ordering, parent links, the root's lack of a parent and
    /// that `len` matches the number of reachable nodes.
    pub(crate) fn assert_valid(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.len, 0);
            return;
        };
        assert_eq!(self.node(root).parent, None);

        let mut seen = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            seen += 1;
            let node = self.node(id);
            if let Some(left) = node.left {
                let child = self.node(left);
                assert_eq!(child.parent, Some(id));
                assert!(child.key < node.key, "{:?} left of {:?}", child.key, node.key);
                stack.push(left);
            }
            if let Some(right) = node.right {
                let child = self.node(right);
                assert_eq!(child.parent, Some(id));
                assert!(child.key >= node.key, "{:?} right of {:?}", child.key, node.key);
                stack.push(right);
            }
        }
        assert_eq!(seen, self.len);

        let keys: Vec<_> = self.in_order().map(|(k, _)| k).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]), "{:?}", keys);
    }
}
