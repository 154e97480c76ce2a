use std::cmp::Ordering;

use log::trace;

use crate::error::{Error, Result};
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::interval::Interval;
use crate::iter::{Iter, Range};
use crate::node::{Color, Node};

/// A map from closed intervals to values.
///
/// Keys are resolved with [`Interval::overlap_cmp`]: a query matches a stored
/// interval when neither is strictly ordered before the other on both bounds.
/// Every insertion of an interval that matches nothing adds a node, so no two
/// stored intervals ever match each other. Stored intervals therefore have
/// strictly increasing `min` and `max` in tree order, and the intervals that
/// match a query always form one contiguous run.
///
/// The map is a plain container with no interior mutability; share it across
/// threads behind the caller's own lock.
#[derive(Debug)]
pub struct IntervalMap<T, V, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<T, V, Ix>>,
    /// Root of the red-black tree
    pub(crate) root: NodeIndex<Ix>,
    /// Number of elements in the map
    pub(crate) len: usize,
}

impl<T, V, Ix> IntervalMap<T, V, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// Creates a new `IntervalMap` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = vec![Node::sentinel()];
        nodes.reserve(capacity);
        IntervalMap {
            nodes,
            root: Self::sentinel(),
            len: 0,
        }
    }

    /// Map `interval` to `value`.
    ///
    /// If a stored interval matches `interval`, its value is replaced and the
    /// previous value is returned. The stored bounds are kept and the bounds of
    /// `interval` are discarded. Otherwise `interval` is stored and `None` is
    /// returned.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for its index
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Interval, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// assert_eq!(map.insert(Interval::new(1, 10), "a"), None);
    /// // [2, 5] lies within [1, 10]: the value changes, the bounds do not
    /// assert_eq!(map.insert(Interval::new(2, 5), "b"), Some("a"));
    /// assert_eq!(map.find(&Interval::point(9)), Some((&Interval::new(1, 10), &"b")));
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, interval: Interval<T>, value: V) -> Option<V> {
        if let Some(node_idx) = self.search(&interval) {
            trace!("interval map: replacing value at {node_idx:?}");
            return Some(self.node_mut(node_idx, Node::set_value(value)));
        }
        let node_idx = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != node_idx,
            "Reached maximum number of nodes"
        );
        self.nodes.push(Node::leaf(interval, value, Self::sentinel()));
        self.insert_inner(node_idx);
        trace!("interval map: stored new interval at {node_idx:?}");
        None
    }

    /// Map [min, max] to `value`, see [`IntervalMap::insert`].
    #[inline]
    pub fn insert_range(&mut self, min: T, max: T, value: V) -> Option<V> {
        self.insert(Interval::new(min, max), value)
    }

    /// Find the stored interval matching `interval`, with its value.
    ///
    /// When several stored intervals match, the last one in iteration order wins.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Interval, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// map.insert(Interval::new(1, 4), 1);
    /// map.insert(Interval::new(6, 9), 2);
    /// assert_eq!(map.find(&Interval::new(7, 8)), Some((&Interval::new(6, 9), &2)));
    /// assert_eq!(map.find(&Interval::point(5)), None);
    /// ```
    #[inline]
    pub fn find(&self, interval: &Interval<T>) -> Option<(&Interval<T>, &V)> {
        self.search(interval)
            .map(|idx| self.node_ref(idx, Node::entry))
    }

    /// Check if a stored interval matches `interval`.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Interval, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// map.insert(Interval::new(71, 79), 'C');
    /// map.insert(Interval::new(81, 90), 'B');
    /// assert!(map.is_in_range(&Interval::point(79)));
    /// assert!(!map.is_in_range(&Interval::point(80)));
    /// ```
    #[inline]
    pub fn is_in_range(&self, interval: &Interval<T>) -> bool {
        self.search(interval).is_some()
    }

    /// Return a reference to the value of the stored interval matching `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no stored interval matches.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Error, Interval, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// map.insert(Interval::new(1, 3), 1);
    /// map.insert(Interval::new(7, 11), 4);
    /// assert_eq!(map.get(&Interval::new(1, 3)), Ok(&1));
    /// assert_eq!(map.get(&Interval::new(8, 9)), Ok(&4));
    /// assert_eq!(map.get(&Interval::new(4, 6)), Err(Error::KeyNotFound));
    /// ```
    #[inline]
    pub fn get(&self, interval: &Interval<T>) -> Result<&V> {
        match self.search(interval) {
            Some(idx) => Ok(self.node_ref(idx, Node::value)),
            None => {
                trace!("interval map: lookup missed");
                Err(Error::KeyNotFound)
            }
        }
    }

    /// Return a mutable reference to the value of the stored interval matching `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no stored interval matches.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Interval, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// map.insert(Interval::new(3, 5), 0);
    /// if let Ok(v) = map.get_mut(&Interval::point(4)) {
    ///     *v += 1;
    /// }
    /// assert_eq!(map.get(&Interval::new(3, 5)), Ok(&1));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, interval: &Interval<T>) -> Result<&mut V> {
        match self.search(interval) {
            Some(idx) => Ok(self.node_mut(idx, Node::value_mut)),
            None => {
                trace!("interval map: lookup missed");
                Err(Error::KeyNotFound)
            }
        }
    }

    /// Value of the stored interval matching [min, max], see [`IntervalMap::get`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no stored interval matches.
    #[inline]
    pub fn get_range(&self, min: T, max: T) -> Result<&V> {
        self.get(&Interval::new(min, max))
    }

    /// Ordered view of the stored entries that sort between `lo` and `hi`.
    ///
    /// An entry is included unless it compares `Less` than `lo` or `Greater`
    /// than `hi` under [`Interval::overlap_cmp`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSliceBounds`] if `lo` sorts after `hi`.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Interval, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// map.insert(Interval::new(1, 2), 'a');
    /// map.insert(Interval::new(4, 6), 'b');
    /// map.insert(Interval::new(8, 9), 'c');
    /// let hi = Interval::point(8);
    /// let values: Vec<_> = map
    ///     .slice_between(&Interval::point(5), &hi)
    ///     .unwrap()
    ///     .map(|(_, v)| *v)
    ///     .collect();
    /// assert_eq!(values, vec!['b', 'c']);
    /// ```
    #[inline]
    pub fn slice_between<'a>(
        &'a self,
        lo: &Interval<T>,
        hi: &'a Interval<T>,
    ) -> Result<Range<'a, T, V, Ix>> {
        if lo.overlap_cmp(hi) == Ordering::Greater {
            return Err(Error::InvalidSliceBounds);
        }
        Ok(Range::new(self, lo, hi))
    }

    /// Get an iterator over the entries of the map, sorted by key.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, V, Ix> {
        Iter::new(self)
    }

    /// Return the number of elements in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the map contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, V, Ix> IntervalMap<T, V, Ix>
where
    T: Ord + Clone,
    Ix: IndexType,
{
    /// Map the single point `key` to `value`, storing [key, key] when nothing matches.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Interval, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// map.insert_point(100, "A+");
    /// assert_eq!(map.get(&Interval::new(100, 100)), Ok(&"A+"));
    /// ```
    #[inline]
    pub fn insert_point(&mut self, key: T, value: V) -> Option<V> {
        self.insert(Interval::point(key), value)
    }

    /// Value of the stored interval containing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no stored interval contains `key`.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Error, IntervalMap};
    ///
    /// let mut map = IntervalMap::new();
    /// map.insert_range(91, 99, "A");
    /// assert_eq!(map.get_point(&91), Ok(&"A"));
    /// assert_eq!(map.get_point(&100), Err(Error::KeyNotFound));
    /// ```
    #[inline]
    pub fn get_point(&self, key: &T) -> Result<&V> {
        self.get(&Interval::point(key.clone()))
    }
}

impl<T, V> IntervalMap<T, V>
where
    T: Ord,
{
    /// Create an empty `IntervalMap`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            root: Self::sentinel(),
            len: 0,
        }
    }
}

impl<T, V> Default for IntervalMap<T, V>
where
    T: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<'a, T, V, Ix> IntoIterator for &'a IntervalMap<T, V, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Item = (&'a Interval<T>, &'a V);
    type IntoIter = Iter<'a, T, V, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, V, Ix> IntervalMap<T, V, Ix>
where
    Ix: IndexType,
{
    /// Get the sentinel node index
    pub(crate) fn sentinel() -> NodeIndex<Ix> {
        NodeIndex::new(0)
    }
}

impl<T, V, Ix> IntervalMap<T, V, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    /// Link a freshly pushed node into the tree.
    ///
    /// The node must match no stored interval, which makes `overlap_cmp` a
    /// total order along the search path.
    fn insert_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y = Self::sentinel();
        let mut x = self.root;

        while !self.node_ref(x, Node::is_sentinel) {
            y = x;
            if self.goes_left(z, x) {
                x = self.node_ref(x, Node::left);
            } else {
                x = self.node_ref(x, Node::right);
            }
        }
        self.node_mut(z, Node::set_parent(y));
        if self.node_ref(y, Node::is_sentinel) {
            self.root = z;
        } else if self.goes_left(z, y) {
            self.node_mut(y, Node::set_left(z));
        } else {
            self.node_mut(y, Node::set_right(z));
        }
        self.node_mut(z, Node::set_color(Color::Red));

        self.insert_fixup(z);

        self.len = self.len.wrapping_add(1);
    }

    /// Whether node `z` belongs in the left subtree of node `x`.
    fn goes_left(&self, z: NodeIndex<Ix>, x: NodeIndex<Ix>) -> bool {
        self.node_ref(z, Node::interval)
            .overlap_cmp(self.node_ref(x, Node::interval))
            == Ordering::Less
    }

    /// Search for the last stored interval matching `interval`.
    ///
    /// Stored intervals sorting `Less` than the query form a prefix of the
    /// tree order and those sorting `Greater` a suffix, so the last node not
    /// `Greater` is either the last match or proves there is none.
    fn search(&self, interval: &Interval<T>) -> Option<NodeIndex<Ix>> {
        let mut x = self.root;
        let mut candidate = None;
        while !self.node_ref(x, Node::is_sentinel) {
            if self.node_ref(x, Node::interval).overlap_cmp(interval) == Ordering::Greater {
                x = self.node_ref(x, Node::left);
            } else {
                candidate = Some(x);
                x = self.node_ref(x, Node::right);
            }
        }
        candidate.filter(|&c| {
            self.node_ref(c, Node::interval).overlap_cmp(interval) != Ordering::Less
        })
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while self.parent_ref(z, Node::is_red) {
            if self.grand_parent_ref(z, Node::is_sentinel) {
                break;
            }
            if self.is_left_child(self.node_ref(z, Node::parent)) {
                let y = self.grand_parent_ref(z, Node::right);
                if self.node_ref(y, Node::is_red) {
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_right_child(z) {
                        z = self.node_ref(z, Node::parent);
                        self.left_rotate(z);
                    }
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.right_rotate(self.parent_ref(z, Node::parent));
                }
            } else {
                let y = self.grand_parent_ref(z, Node::left);
                if self.node_ref(y, Node::is_red) {
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_left_child(z) {
                        z = self.node_ref(z, Node::parent);
                        self.right_rotate(z);
                    }
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.left_rotate(self.parent_ref(z, Node::parent));
                }
            }
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.right_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::right);
        self.node_mut(x, Node::set_right(self.node_ref(y, Node::left)));
        if !self.left_ref(y, Node::is_sentinel) {
            self.left_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(x));
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.left_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::left);
        self.node_mut(x, Node::set_left(self.node_ref(y, Node::right)));
        if !self.right_ref(y, Node::is_sentinel) {
            self.right_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(x));
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.parent_ref(x, Node::is_sentinel) {
            self.root = y;
        } else if self.is_left_child(x) {
            self.parent_mut(x, Node::set_left(y));
        } else {
            self.parent_mut(x, Node::set_right(y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Check if a node is a left child of its parent.
    fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::left) == node
    }

    /// Check if a node is a right child of its parent.
    fn is_right_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::right) == node
    }
}

// Convenient methods for reference or mutate current/parent/left/right node
impl<'a, T, V, Ix> IntervalMap<T, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, V, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, V, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&self.nodes[idx])
    }

    fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    fn grand_parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, V, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&self.nodes[grand_parent_idx])
    }

    fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&mut self.nodes[idx])
    }

    fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&mut self.nodes[idx])
    }

    fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, V, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }

    fn grand_parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, V, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&mut self.nodes[grand_parent_idx])
    }
}
