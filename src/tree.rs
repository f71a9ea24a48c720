//! The tree algebra. A [`Tree`] is an unbalanced, persistent Binary Search Tree modeled after one
//! you would see in a functional language like Haskell. Operations that one would expect to modify
//! the tree (e.g. `insert` or `remove`) instead return a new tree that shares every subtree the
//! operation didn't touch with the original.
//!
//! # Examples
//!
//! ```
//! use bst_pq::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1);
//!
//! // The new tree has this new value but the old one doesn't.
//! assert!(new_tree.contains(&1));
//! assert!(!tree.contains(&1));
//!
//! // Remove it again for good measure.
//! let newer_tree = new_tree.remove(&1);
//!
//! // All history is preserved.
//! assert!(!newer_tree.contains(&1));
//! assert!(new_tree.contains(&1));
//! ```

use std::cmp;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A persistent Binary Search Tree holding a set of values. Note that this data structure is
/// functional - operations that would modify the tree instead return a new tree.
///
/// Cloning a `Tree` only clones a reference to its root.
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A shared, immutable [`Node`] with a value and two children.
    Node(Rc<Node<T>>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so we don't require `T: Clone` to clone a reference.
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(Rc::clone(n)),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Returns `true` if both trees are the same version, i.e. they are both empty or share the
    /// same root node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_pq::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// // Inserting a value that is already present hands back the very same tree.
    /// assert!(tree.insert(1).ptr_eq(&tree));
    /// assert!(!tree.insert(2).ptr_eq(&tree));
    /// ```
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf, Self::Leaf) => true,
            (Self::Node(a), Self::Node(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&**n),
        }
    }

    /// Returns `true` if the tree holds `val`.
    pub fn contains(&self, val: &T) -> bool
    where
        T: cmp::Ord,
    {
        let mut tree = self;
        while let Some(n) = tree.root() {
            tree = match val.cmp(n.value()) {
                cmp::Ordering::Less => &n.left,
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => &n.right,
            };
        }
        false
    }

    /// Returns a new tree that also holds `val`. If `val` is already present the returned tree is
    /// this same tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_pq::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert(1);
    /// let newer_tree = new_tree.insert(2);
    ///
    /// assert_eq!(newer_tree.iter().collect::<Vec<_>>(), [&1, &2]);
    /// assert_eq!(new_tree.iter().collect::<Vec<_>>(), [&1]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn insert(&self, val: T) -> Self
    where
        T: cmp::Ord,
    {
        self.insert_rc(Rc::new(val))
    }

    /// [`Tree::insert`] for a value that may already be shared with other trees.
    pub(crate) fn insert_rc(&self, val: Rc<T>) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::Node(Rc::new(Node::new(val))),
            Self::Node(n) => match Ord::cmp(&*val, n.value()) {
                cmp::Ordering::Less => {
                    let new_left = n.left.insert_rc(val);
                    n.with_left(new_left)
                }
                cmp::Ordering::Equal => self.clone(),
                cmp::Ordering::Greater => {
                    let new_right = n.right.insert_rc(val);
                    n.with_right(new_right)
                }
            },
        }
    }

    /// Returns a new tree without `val`. If the tree never held `val` the returned tree is this
    /// same tree.
    ///
    /// A node with two children is replaced by its predecessor, the largest value in its left
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_pq::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    /// let newer_tree = tree.remove(&2);
    ///
    /// // All history is preserved.
    /// assert!(!newer_tree.contains(&2));
    /// assert!(tree.contains(&2));
    /// ```
    pub fn remove(&self, val: &T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => match val.cmp(n.value()) {
                cmp::Ordering::Less => {
                    let new_left = n.left.remove(val);
                    n.with_left(new_left)
                }
                cmp::Ordering::Equal => match (&n.left, &n.right) {
                    (Self::Leaf, _) => n.right.clone(),
                    (_, Self::Leaf) => n.left.clone(),
                    (Self::Node(left), _) => {
                        let (pred, new_left) = left.remove_largest();
                        Self::from_parts(pred, new_left, n.right.clone())
                    }
                },
                cmp::Ordering::Greater => {
                    let new_right = n.right.remove(val);
                    n.with_right(new_right)
                }
            },
        }
    }

    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree is empty.
    pub fn rightmost(&self) -> Result<&T> {
        let mut node = self.root().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right.root() {
            node = right;
        }
        Ok(node.value())
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree is empty.
    pub fn leftmost(&self) -> Result<&T> {
        let mut node = self.root().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left.root() {
            node = left;
        }
        Ok(node.value())
    }

    /// Removes the largest value in one descent, returning it together with the remaining tree.
    pub(crate) fn remove_largest(&self) -> Option<(Rc<T>, Self)> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n.remove_largest()),
        }
    }

    /// Removes the smallest value in one descent, returning it together with the remaining tree.
    pub(crate) fn remove_smallest(&self) -> Option<(Rc<T>, Self)> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n.remove_smallest()),
        }
    }

    /// Builds a tree from a root value and two subtrees. The caller is responsible for every value
    /// in `left` being smaller, and every value in `right` being larger, than `value`.
    pub(crate) fn from_parts(value: Rc<T>, left: Self, right: Self) -> Self {
        Self::Node(Rc::new(Node { value, left, right }))
    }

    /// Returns an iterator visiting the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Checks the search tree ordering by walking the tree in order.
    pub(crate) fn is_search_tree(&self) -> bool
    where
        T: cmp::Ord,
    {
        self.iter().zip(self.iter().skip(1)).all(|(a, b)| a < b)
    }

    fn into_node(self) -> Option<Rc<Node<T>>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` has a value and always has two children although those children may be
/// [`Leaf`][Tree::Leaf]s. Nodes are never modified after they are built.
pub struct Node<T> {
    value: Rc<T>,
    left: Tree<T>,
    right: Tree<T>,
}

/// Releases the subtrees nobody else references with an explicit stack so that dropping a
/// degenerate (list shaped) tree can't overflow the call stack.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.take_children().collect();
        while let Some(node) = stack.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                stack.extend(node.take_children());
            }
        }
    }
}

impl<T> Node<T> {
    fn new(value: Rc<T>) -> Self {
        Self {
            value,
            left: Tree::Leaf,
            right: Tree::Leaf,
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree of values smaller than this node's.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The subtree of values larger than this node's.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    pub(crate) fn shared_value(&self) -> Rc<T> {
        Rc::clone(&self.value)
    }

    /// Returns this node if `left` is already its left child, otherwise a copy of this node with
    /// the given left child.
    fn with_left(self: &Rc<Self>, left: Tree<T>) -> Tree<T> {
        if left.ptr_eq(&self.left) {
            return Tree::Node(Rc::clone(self));
        }
        Tree::from_parts(Rc::clone(&self.value), left, self.right.clone())
    }

    /// Mirror of [`Node::with_left`].
    fn with_right(self: &Rc<Self>, right: Tree<T>) -> Tree<T> {
        if right.ptr_eq(&self.right) {
            return Tree::Node(Rc::clone(self));
        }
        Tree::from_parts(Rc::clone(&self.value), self.left.clone(), right)
    }

    /// Returns the largest value and a new subtree without that largest node.
    fn remove_largest(self: &Rc<Self>) -> (Rc<T>, Tree<T>) {
        match &self.right {
            Tree::Leaf => (Rc::clone(&self.value), self.left.clone()),
            Tree::Node(r) => {
                let (value, new_right) = r.remove_largest();
                (value, self.with_right(new_right))
            }
        }
    }

    /// Returns the smallest value and a new subtree without that smallest node.
    fn remove_smallest(self: &Rc<Self>) -> (Rc<T>, Tree<T>) {
        match &self.left {
            Tree::Leaf => (Rc::clone(&self.value), self.right.clone()),
            Tree::Node(l) => {
                let (value, new_left) = l.remove_smallest();
                (value, self.with_left(new_left))
            }
        }
    }

    fn take_children(&mut self) -> impl Iterator<Item = Rc<Node<T>>> {
        let left = mem::take(&mut self.left).into_node();
        let right = mem::take(&mut self.right).into_node();
        left.into_iter().chain(right)
    }
}

/// An in-order iterator over the values of a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been pushed but whose value hasn't been yielded yet.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &n.left;
        }
    }

    /// Yields the next node in order, exposing its shared value.
    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::value)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}
