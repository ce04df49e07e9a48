use core::fmt::{self, Formatter, Display, Debug};

/// The coloring attribute of a node.
///
/// The node layer treats this as a passive attribute: no coloring invariant is checked here.
/// Maintaining the red-black properties (black root, no two adjacent reds, equal black-height
/// on all paths) is entirely the responsibility of the balancing layer built on top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// The red color, carried by nodes which do not count towards black-height.
    Red,
    /// The black color, the default for newly constructed nodes.
    Black,
}
impl Color {
    /// Returns `true` if the color is [`Red`].
    ///
    /// [`Red`]: #variant.Red " "
    #[inline(always)]
    pub fn is_red(self) -> bool {
        self == Self::Red
    }
    /// Returns `true` if the color is [`Black`].
    ///
    /// [`Black`]: #variant.Black " "
    #[inline(always)]
    pub fn is_black(self) -> bool {
        self == Self::Black
    }
    /// Returns the other color.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}
impl Default for Color {
    #[inline(always)]
    fn default() -> Self {
        Self::Black
    }
}
impl Display for Color {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Red => "red",
            Self::Black => "black",
        })
    }
}

/// One of the two child slots of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot, holding keys ordered before the node's own.
    Left,
    /// The right child slot, holding keys ordered after the node's own.
    Right,
}
impl Side {
    /// Returns the other side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
impl Display for Side {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// A node of a red-black tree.
///
/// Carries the ordering key, the opaque data payload, the [`Color`] attribute and the three
/// structural links. The `left` and `right` links are the *owning* edges — removing a subtree
/// releases everything reachable through them — while `parent` is a pure back-reference for
/// upward navigation and carries no ownership weight.
///
/// A node is constructed detached: no links are set until it is inserted into a
/// [`NodeArena`] and wired up through [`NodeRefMut`]. The key is fixed at construction and
/// can only be read afterwards; replacing a key means replacing the node.
///
/// All constructors produce a **black** node. The classic insertion algorithm colors freshly
/// inserted nodes red before running fixup — a balancing layer following it should construct
/// with [`with_color`] or recolor after attaching, rather than assume either convention.
///
/// [`Color`]: enum.Color.html " "
/// [`NodeArena`]: struct.NodeArena.html " "
/// [`NodeRefMut`]: struct.NodeRefMut.html " "
/// [`with_color`]: #method.with_color " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<K, D, Ix = usize>
where Ix: Clone + Debug + Eq,
{
    pub(super) key: K,
    pub(super) data: D,
    pub(super) color: Color,
    pub(super) left: Option<Ix>,
    pub(super) right: Option<Ix>,
    pub(super) parent: Option<Ix>,
}
impl<K, D, Ix> Node<K, D, Ix>
where Ix: Clone + Debug + Eq,
{
    /// Creates a detached black node with the specified key and data payload.
    #[inline]
    pub fn new(key: K, data: D) -> Self {
        Self {
            key,
            data,
            color: Color::Black,
            left: None,
            right: None,
            parent: None,
        }
    }
    /// Creates a detached black node with the specified key and a default data payload.
    #[inline]
    pub fn with_key(key: K) -> Self
    where D: Default {
        Self::new(key, D::default())
    }
    /// Overrides the color of the node, consuming and returning it builder-style.
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
    /// Returns a reference to the ordering key of the node.
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Returns a reference to the data payload of the node.
    #[inline(always)]
    pub fn data(&self) -> &D {
        &self.data
    }
    /// Returns a *mutable* reference to the data payload of the node.
    ///
    /// The payload has no structural meaning — mutating it cannot corrupt the tree.
    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }
    /// Returns the color of the node.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(super) fn child(&self, side: Side) -> &Option<Ix> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
    #[inline]
    pub(super) fn child_mut(&mut self, side: Side) -> &mut Option<Ix> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
impl<K, D, Ix> Default for Node<K, D, Ix>
where
    K: Default,
    D: Default,
    Ix: Clone + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new(K::default(), D::default())
    }
}
