//! A priority queue on top of [`SearchTree`]: the smallest value has the highest priority.
//!
//! # Examples
//!
//! ```
//! use bst_pq::PriorityQueue;
//!
//! let mut queue: PriorityQueue<_> = [3, 1, 2].into_iter().collect();
//!
//! assert_eq!(queue.min_val(), Ok(&1));
//! assert_eq!(queue.delete_min(), Ok(1));
//! assert_eq!(queue.delete_min(), Ok(2));
//! assert_eq!(queue.delete_min(), Ok(3));
//! assert!(queue.delete_min().is_err());
//! ```

use std::cmp;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::search_tree::{IntoIter, SearchTree};
use crate::tree::{Iter, Tree};

/// A [`SearchTree`] read as a priority queue.
pub struct PriorityQueue<T> {
    tree: SearchTree<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T> fmt::Debug for PriorityQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PriorityQueue").field(&self.tree).finish()
    }
}

impl<T> PartialEq for PriorityQueue<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T> Eq for PriorityQueue<T> where T: Eq {}

impl<T> PriorityQueue<T> {
    /// Generates a new, empty `PriorityQueue`.
    pub fn new() -> Self {
        Self {
            tree: SearchTree::new(),
        }
    }

    pub(crate) fn from_root(root: Tree<T>, len: usize) -> Self {
        Self {
            tree: SearchTree::from_root(root, len),
        }
    }

    /// Returns the smallest value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if the queue is empty.
    pub fn min_val(&self) -> Result<&T> {
        self.tree.root().leftmost().map_err(|_| Error::EmptyQueue)
    }

    /// Removes the smallest value and returns it. The value is moved out of the queue unless an
    /// older version of the queue still shares it, in which case it is cloned.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_pq::PriorityQueue;
    ///
    /// let mut queue: PriorityQueue<_> = [2, 1].into_iter().collect();
    /// let snapshot = queue.clone();
    ///
    /// assert_eq!(queue.delete_min(), Ok(1));
    /// assert_eq!(queue.len(), 1);
    /// assert_eq!(snapshot.len(), 2);
    /// ```
    pub fn delete_min(&mut self) -> Result<T>
    where
        T: cmp::Ord + Clone,
    {
        let smallest = self.tree.pop_smallest().ok_or(Error::EmptyQueue)?;
        Ok(Rc::try_unwrap(smallest).unwrap_or_else(|shared| T::clone(&shared)))
    }

    /// The queue viewed as a plain search tree.
    pub fn as_search_tree(&self) -> &SearchTree<T> {
        &self.tree
    }

    /// Unwraps the underlying search tree.
    pub fn into_search_tree(self) -> SearchTree<T> {
        self.tree
    }

    /// See [`SearchTree::root`].
    pub fn root(&self) -> &Tree<T> {
        self.tree.root()
    }

    /// See [`SearchTree::len`].
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// See [`SearchTree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// See [`SearchTree::contains`].
    pub fn contains(&self, val: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.tree.contains(val)
    }

    /// See [`SearchTree::insert`].
    pub fn insert(&mut self, val: T) -> bool
    where
        T: cmp::Ord,
    {
        self.tree.insert(val)
    }

    pub(crate) fn insert_rc(&mut self, val: Rc<T>) -> bool
    where
        T: cmp::Ord,
    {
        self.tree.insert_rc(val)
    }

    /// See [`SearchTree::remove`].
    pub fn remove(&mut self, val: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.tree.remove(val)
    }

    /// Iterates the values in ascending order, i.e. from highest to lowest priority.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }
}

impl<T> From<SearchTree<T>> for PriorityQueue<T> {
    fn from(tree: SearchTree<T>) -> Self {
        Self { tree }
    }
}

impl<T> FromIterator<T> for PriorityQueue<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for PriorityQueue<T>
where
    T: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for PriorityQueue<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}
