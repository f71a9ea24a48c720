//! An owning wrapper around a single [`Tree`] root.
//!
//! # Examples
//!
//! ```
//! use bst_pq::SearchTree;
//!
//! let mut tree: SearchTree<_> = [3, 1, 2].into_iter().collect();
//! assert!(tree.contains(&2));
//!
//! // Cloning is cheap and keeps the old version around.
//! let snapshot = tree.clone();
//! tree.remove(&2);
//!
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
//! assert_eq!(snapshot.iter().collect::<Vec<_>>(), [&1, &2, &3]);
//! ```

use std::cmp;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::tree::{Iter, Node, Tree};

/// A set of ordered values backed by a persistent [`Tree`]. `insert` and `remove` swap in a new
/// root that shares every untouched subtree with the previous one.
pub struct SearchTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SearchTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for SearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for SearchTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SearchTree<T> where T: Eq {}

impl<T> SearchTree<T> {
    /// Generates a new, empty `SearchTree`.
    pub fn new() -> Self {
        Self {
            root: Tree::new(),
            len: 0,
        }
    }

    /// Wraps a tree whose size is already known.
    pub(crate) fn from_root(root: Tree<T>, len: usize) -> Self {
        Self { root, len }
    }

    /// The current version of the underlying tree.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns `true` if the tree holds `val`.
    pub fn contains(&self, val: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.root.contains(val)
    }

    /// Adds `val` to the tree. Returns `false` if it was already present, in which case nothing
    /// changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_pq::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, val: T) -> bool
    where
        T: cmp::Ord,
    {
        self.insert_rc(Rc::new(val))
    }

    pub(crate) fn insert_rc(&mut self, val: Rc<T>) -> bool
    where
        T: cmp::Ord,
    {
        let new_root = self.root.insert_rc(val);
        if new_root.ptr_eq(&self.root) {
            return false;
        }
        self.replace_root(new_root, self.len + 1);
        true
    }

    /// Removes `val` from the tree. Returns `false` if it wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_pq::SearchTree;
    ///
    /// let mut tree: SearchTree<_> = [1, 2].into_iter().collect();
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove(&mut self, val: &T) -> bool
    where
        T: cmp::Ord,
    {
        let new_root = self.root.remove(val);
        if new_root.ptr_eq(&self.root) {
            return false;
        }
        self.replace_root(new_root, self.len - 1);
        true
    }

    /// Removes the smallest value, handing back the shared reference to it.
    pub(crate) fn pop_smallest(&mut self) -> Option<Rc<T>>
    where
        T: cmp::Ord,
    {
        let (smallest, new_root) = self.root.remove_smallest()?;
        self.replace_root(new_root, self.len - 1);
        Some(smallest)
    }

    /// Returns an iterator visiting the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.root.iter()
    }

    fn replace_root(&mut self, root: Tree<T>, len: usize)
    where
        T: cmp::Ord,
    {
        self.root = root;
        self.len = len;

        // In tests, re-check the ordering and the element count after every change.
        if cfg!(test) {
            assert!(self.root.is_search_tree());
            assert_eq!(self.root.iter().count(), self.len);
        }
    }
}

impl<T> From<Tree<T>> for SearchTree<T> {
    /// Wraps an existing tree. Counting its values takes `O(n)`.
    fn from(root: Tree<T>) -> Self {
        let len = root.iter().count();
        Self { root, len }
    }
}

impl<T> FromIterator<T> for SearchTree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for SearchTree<T>
where
    T: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.insert(val);
        }
    }
}

impl<'a, T> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SearchTree<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

/// An owning in-order iterator over a [`SearchTree`]. Values are cloned out of the tree since other
/// versions may still share them.
pub struct IntoIter<T> {
    stack: Vec<Rc<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn new(tree: SearchTree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut tree: Tree<T>) {
        while let Tree::Node(node) = tree {
            tree = node.left().clone();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right().clone());
        self.remaining -= 1;
        Some(node.value().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> where T: Clone {}

impl<T> FusedIterator for IntoIter<T> where T: Clone {}
