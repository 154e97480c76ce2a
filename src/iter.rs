use std::cmp::Ordering;

use crate::index::{IndexType, NodeIndex};
use crate::interval::Interval;
use crate::intervalmap::IntervalMap;
use crate::node::Node;

/// Pushes a link of nodes on the left to stack.
fn left_link<T, V, Ix>(map_ref: &IntervalMap<T, V, Ix>, mut x: NodeIndex<Ix>) -> Vec<NodeIndex<Ix>>
where
    Ix: IndexType,
{
    let mut nodes = vec![];
    while !map_ref.node_ref(x, Node::is_sentinel) {
        nodes.push(x);
        x = map_ref.node_ref(x, Node::left);
    }
    nodes
}

/// Pushes the nodes on the path to the first node not `Less` than `lo`,
/// skipping those that sort before it.
fn lower_link<T, V, Ix>(map_ref: &IntervalMap<T, V, Ix>, lo: &Interval<T>) -> Vec<NodeIndex<Ix>>
where
    T: Ord,
    Ix: IndexType,
{
    let mut nodes = vec![];
    let mut x = map_ref.root;
    while !map_ref.node_ref(x, Node::is_sentinel) {
        if map_ref.node_ref(x, Node::interval).overlap_cmp(lo) == Ordering::Less {
            x = map_ref.node_ref(x, Node::right);
        } else {
            nodes.push(x);
            x = map_ref.node_ref(x, Node::left);
        }
    }
    nodes
}

/// An iterator over the entries of a `IntervalMap`.
#[derive(Debug)]
pub struct Iter<'a, T, V, Ix> {
    /// Reference to the map
    map_ref: &'a IntervalMap<T, V, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
}

impl<'a, T, V, Ix> Iter<'a, T, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(map_ref: &'a IntervalMap<T, V, Ix>) -> Self {
        Iter {
            map_ref,
            stack: left_link(map_ref, map_ref.root),
        }
    }
}

impl<'a, T, V, Ix> Iterator for Iter<'a, T, V, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a Interval<T>, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        self.stack.extend(left_link(
            self.map_ref,
            self.map_ref.node_ref(x, Node::right),
        ));
        Some(self.map_ref.node_ref(x, Node::entry))
    }
}

/// An ordered view over the entries of a `IntervalMap` between two bounds,
/// see [`IntervalMap::slice_between`].
#[derive(Debug)]
pub struct Range<'a, T, V, Ix> {
    /// Reference to the map
    map_ref: &'a IntervalMap<T, V, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
    /// Entries sorting `Greater` than this end the view
    hi: &'a Interval<T>,
}

impl<'a, T, V, Ix> Range<'a, T, V, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    pub(crate) fn new(
        map_ref: &'a IntervalMap<T, V, Ix>,
        lo: &Interval<T>,
        hi: &'a Interval<T>,
    ) -> Self {
        Range {
            map_ref,
            stack: lower_link(map_ref, lo),
            hi,
        }
    }
}

impl<'a, T, V, Ix> Iterator for Range<'a, T, V, Ix>
where
    T: Ord,
    Ix: IndexType,
{
    type Item = (&'a Interval<T>, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        if self.map_ref.node_ref(x, Node::interval).overlap_cmp(self.hi) == Ordering::Greater {
            self.stack.clear();
            return None;
        }
        self.stack.extend(left_link(
            self.map_ref,
            self.map_ref.node_ref(x, Node::right),
        ));
        Some(self.map_ref.node_ref(x, Node::entry))
    }
}
