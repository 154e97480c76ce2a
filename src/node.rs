use crate::index::{IndexType, NodeIndex};
use crate::interval::Interval;

/// Node of the red-black tree.
///
/// Slot 0 of the arena is the sentinel: it carries neither interval nor value
/// and stands in for every missing child and for the root's parent.
#[derive(Debug)]
pub struct Node<T, V, Ix> {
    /// Left child
    pub left: Option<NodeIndex<Ix>>,
    /// Right child
    pub right: Option<NodeIndex<Ix>>,
    /// Parent
    pub parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub color: Color,

    /// Stored interval, the key of the node
    pub interval: Option<Interval<T>>,
    /// Value mapped to `interval`
    pub value: Option<V>,
}

impl<T, V, Ix> Node<T, V, Ix>
where
    Ix: IndexType,
{
    /// The shared black sentinel.
    pub fn sentinel() -> Self {
        Node {
            left: None,
            right: None,
            parent: None,
            color: Color::Black,
            interval: None,
            value: None,
        }
    }

    /// A red leaf hanging off `nil`.
    pub fn leaf(interval: Interval<T>, value: V, nil: NodeIndex<Ix>) -> Self {
        Node {
            left: Some(nil),
            right: Some(nil),
            parent: Some(nil),
            color: Color::Red,
            interval: Some(interval),
            value: Some(value),
        }
    }

    #[cfg(test)]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn interval(&self) -> &Interval<T> {
        self.interval.as_ref().unwrap()
    }

    pub fn left(&self) -> NodeIndex<Ix> {
        self.left.unwrap()
    }

    pub fn right(&self) -> NodeIndex<Ix> {
        self.right.unwrap()
    }

    pub fn parent(&self) -> NodeIndex<Ix> {
        self.parent.unwrap()
    }

    pub fn is_sentinel(&self) -> bool {
        self.interval.is_none()
    }

    #[cfg(test)]
    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub fn value(&self) -> &V {
        self.value.as_ref().unwrap()
    }

    pub fn value_mut(&mut self) -> &mut V {
        self.value.as_mut().unwrap()
    }

    /// Interval and value of a non-sentinel node.
    pub fn entry(&self) -> (&Interval<T>, &V) {
        (self.interval(), self.value())
    }

    pub fn set_value(value: V) -> impl FnOnce(&mut Node<T, V, Ix>) -> V {
        move |node: &mut Node<T, V, Ix>| node.value.replace(value).unwrap()
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<T, V, Ix>) {
        move |node: &mut Node<T, V, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, V, Ix>) {
        move |node: &mut Node<T, V, Ix>| {
            let _ignore = node.left.replace(left);
        }
    }

    pub fn set_right(right: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, V, Ix>) {
        move |node: &mut Node<T, V, Ix>| {
            let _ignore = node.right.replace(right);
        }
    }

    pub fn set_parent(parent: NodeIndex<Ix>) -> impl FnOnce(&mut Node<T, V, Ix>) {
        move |node: &mut Node<T, V, Ix>| {
            let _ignore = node.parent.replace(parent);
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy)]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}
