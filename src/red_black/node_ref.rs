use core::fmt::{self, Formatter, Display, Debug};
use crate::{
    storage::{Storage, DefaultStorage},
    util::Stack,
};
use super::{
    NodeArena,
    Node,
    Color,
    Side,
    AscendError,
};

const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_GREEN: &str = "\u{1b}[32m";
const ANSI_RESET: &str = "\u{1b}[0m";

/// A reference to a node in an arena.
///
/// Since this type does not point to the node directly, but rather the arena the node is in
/// and the key of the node in the storage, it can be used to navigate around the tree.
#[derive(Debug)]
pub struct NodeRef<'a, K, D, Ix = usize, S = DefaultStorage<Node<K, D, Ix>>>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    arena: &'a NodeArena<K, D, Ix, S>,
    key: Ix,
}
impl<'a, K, D, Ix, S> NodeRef<'a, K, D, Ix, S>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's
    /// not present.
    #[inline]
    pub fn new_raw(arena: &'a NodeArena<K, D, Ix, S>, key: Ix) -> Option<Self> {
        if arena.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(arena, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing a
    /// key check.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the
    /// storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(arena: &'a NodeArena<K, D, Ix, S>, key: Ix) -> Self {
        Self { arena, key }
    }
    /// Returns a reference to the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &Ix {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> Ix {
        self.key
    }
    /// Returns a reference to the ordering key of the node.
    #[inline(always)]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }
    /// Returns a reference to the data payload of the node.
    #[inline(always)]
    pub fn data(&self) -> &'a D {
        &self.node().data
    }
    /// Returns the color of the node.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.node().color
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it has no parent,
    /// i.e. is the root or detached.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.as_ref().map(|x| unsafe {
            // SAFETY: parent links can never dangle
            Self::new_raw_unchecked(self.arena, x.clone())
        })
    }
    /// Returns `true` if the node is the designated root of the arena, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.arena.root.as_ref() == Some(&self.key)
    }
    /// Returns `true` if the node is a *leaf*, i.e. has no child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
    /// Returns a reference to the child on the specified side, or `None` if that slot is
    /// empty.
    pub fn child(&self, side: Side) -> Option<Self> {
        self.node().child(side).as_ref().map(|x| unsafe {
            // SAFETY: child keys are guaranteed to be valid; a key check to make sure that
            // properly holds is below.
            debug_assert!(
                self.arena.storage.contains_key(x),
                "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
                x,
            );
            Self::new_raw_unchecked(self.arena, x.clone())
        })
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline(always)]
    pub fn left_child(&self) -> Option<Self> {
        self.child(Side::Left)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline(always)]
    pub fn right_child(&self) -> Option<Self> {
        self.child(Side::Right)
    }
    /// Returns the side of the parent on which this node is stored, or `None` if the node has
    /// no parent.
    pub fn side(&self) -> Option<Side> {
        let parent = self.parent()?;
        let parent_node = parent.node();
        if parent_node.left.as_ref() == Some(&self.key) {
            Some(Side::Left)
        } else if parent_node.right.as_ref() == Some(&self.key) {
            Some(Side::Right)
        } else {
            // the mutators keep both directions of every link consistent
            unreachable!(
                "the parent back-reference points at a node which does not list the pointee \
as a child",
            )
        }
    }
    /// Returns whether this node is stored as its parent's left child, or `None` if the node
    /// has no parent.
    ///
    /// A `None` here is the *is this the root?* probe of the classic algorithms, made
    /// explicit instead of being a precondition violation.
    #[inline]
    pub fn is_left(&self) -> Option<bool> {
        self.side().map(|side| side == Side::Left)
    }
    /// Returns whether this node is stored as its parent's right child, or `None` if the node
    /// has no parent.
    #[inline]
    pub fn is_right(&self) -> Option<bool> {
        self.side().map(|side| side == Side::Right)
    }
    /// Walks `levels` parent links upward and returns the ancestor reached.
    ///
    /// `ascend(0)` returns the node itself; `ascend(depth())` returns the topmost ancestor.
    /// Asking for more levels than there are ancestors is reported as an [`AscendError`]
    /// rather than undefined behavior or a crash, so boundary conditions can be probed.
    ///
    /// [`AscendError`]: struct.AscendError.html " "
    pub fn ascend(&self, levels: usize) -> Result<Self, AscendError> {
        let mut curr = self.clone();
        for climbed in 0..levels {
            curr = curr.parent().ok_or(AscendError {
                levels,
                climbed,
            })?;
        }
        Ok(curr)
    }
    /// Returns the number of parent links between this node and its topmost ancestor.
    ///
    /// For a node wired into the tree this is its depth below the root; for the root itself
    /// and for detached nodes it is zero.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut curr = self.clone();
        while let Some(parent) = curr.parent() {
            depth += 1;
            curr = parent;
        }
        depth
    }
    /// Returns an adapter which [`Display`]s the whole subtree below this node, one node per
    /// line with box-drawing indentation and `[R]`/`[B]` color tags. Empty child slots of
    /// branch nodes show up as `[B] NIL`.
    ///
    /// The alternate flag (`{:#}`) renders the tags with ANSI color codes.
    ///
    /// [`Display`]: https://doc.rust-lang.org/core/fmt/trait.Display.html " "
    #[inline]
    pub fn display_subtree(&self) -> DisplaySubtree<'a, K, D, Ix, S> {
        DisplaySubtree {
            node: self.clone(),
        }
    }

    #[inline(always)]
    fn node(&self) -> &'a Node<K, D, Ix> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.arena.storage.get_unchecked(&self.key)
        }
    }
}
impl<K, D, Ix, S> Copy for NodeRef<'_, K, D, Ix, S>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Copy + Debug + Eq,
{}
impl<K, D, Ix, S> Clone for NodeRef<'_, K, D, Ix, S>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            key: self.key.clone(),
        }
    }
}
/// Displays the key and color of the node, in the `key = 5 (black)` shape. The alternate flag
/// (`{:#}`) colorizes the output with ANSI escapes for interactive debugging.
impl<K, D, Ix, S> Display for NodeRef<'_, K, D, Ix, S>
where
    K: Display,
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "key = {}{}{} (", ANSI_GREEN, self.key(), ANSI_RESET)?;
            match self.color() {
                Color::Red => write!(f, "{}red{}", ANSI_RED, ANSI_RESET)?,
                Color::Black => f.write_str("black")?,
            }
            f.write_str(")")
        } else {
            write!(f, "key = {} ({})", self.key(), self.color())
        }
    }
}

/// The [`Display`] adapter returned by [`NodeRef::display_subtree`].
///
/// [`Display`]: https://doc.rust-lang.org/core/fmt/trait.Display.html " "
/// [`NodeRef::display_subtree`]: struct.NodeRef.html#method.display_subtree " "
#[derive(Clone, Debug)]
pub struct DisplaySubtree<'a, K, D, Ix = usize, S = DefaultStorage<Node<K, D, Ix>>>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    node: NodeRef<'a, K, D, Ix, S>,
}
impl<K, D, Ix, S> Display for DisplaySubtree<'_, K, D, Ix, S>
where
    K: Display,
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut markers = Stack::new();
        fmt_subtree(f, Some(self.node.clone()), &mut markers, true)
    }
}

fn fmt_subtree<K, D, Ix, S>(
    f: &mut Formatter<'_>,
    node: Option<NodeRef<'_, K, D, Ix, S>>,
    // One entry per ancestor level, `true` where the walk is inside a last child and the
    // connecting rule is omitted. Grows with the walk, so depth is unbounded.
    markers: &mut Stack<bool>,
    is_last: bool,
) -> fmt::Result
where
    K: Display,
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    for &inside_last in &*markers {
        if inside_last {
            f.write_str("  ")?;
        } else {
            f.write_str("| ")?;
        }
    }
    let node = if let Some(node) = node {
        node
    } else {
        return f.write_str("[B] NIL\n");
    };
    let tag = match node.color() {
        Color::Red => "R",
        Color::Black => "B",
    };
    if f.alternate() {
        match node.color() {
            Color::Red => write!(f, "[{}{}{}]", ANSI_RED, tag, ANSI_RESET)?,
            Color::Black => write!(f, "[{}]", tag)?,
        }
        writeln!(f, " {}{}{}", ANSI_GREEN, node.key(), ANSI_RESET)?;
    } else {
        writeln!(f, "[{}] {}", tag, node.key())?;
    }
    if node.is_leaf() {
        return Ok(());
    }
    markers.push(is_last);
    fmt_subtree(f, node.left_child(), markers, false)?;
    fmt_subtree(f, node.right_child(), markers, true)?;
    markers.pop();
    Ok(())
}
