//! The node substrate of a red-black tree.
//!
//! This module implements everything a red-black balancing algorithm needs *below* itself:
//! colored nodes with keys and payloads, arena-backed owning child links and non-owning parent
//! back-references, the local navigation queries (`is_left`, `is_right`, `ascend`), and the
//! link-rewiring primitives rotations and fixups are made of. The balancing itself — when to
//! rotate, how to recolor — is left to the layer on top.
//!
//! The [Wikipedia article] on red-black trees covers the balancing invariants in more detail.
//!
//! # Example
//! ```rust
//! use ebony::red_black::{NodeArena, Node, NodeRef, Color};
//!
//! // Create the arena and give it a root. The turbofish there is needed to state that we
//! // are using the default storage method instead of asking the compiler to infer it, which
//! // would be impossible.
//! let mut arena = NodeArena::<_, _>::new();
//! arena.insert_root(Node::new(5_u32, "five"));
//!
//! // Freshly constructed nodes are black. A balancing layer following the classic insertion
//! // algorithm would recolor them to red before running fixup.
//! let mut root = arena.root_mut().unwrap();
//! assert_eq!(root.color(), Color::Black);
//!
//! // Hang children off the root, red as the classic algorithm would color them.
//! let left = root
//!     .attach_left(Node::new(3_u32, "three").with_color(Color::Red))
//!     .unwrap();
//! root.attach_right(Node::new(8_u32, "eight").with_color(Color::Red))
//!     .unwrap();
//!
//! // Navigate around. Side queries answer with `Option`, so probing the root for its side
//! // is an observable `None` rather than a crash.
//! let left_ref = NodeRef::new_raw(&arena, left).unwrap();
//! assert_eq!(left_ref.is_left(), Some(true));
//! assert_eq!(left_ref.is_right(), Some(false));
//! assert_eq!(left_ref.ascend(1).unwrap().key(), &5);
//! assert_eq!(arena.root().unwrap().is_left(), None);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree " "

use core::fmt::{self, Formatter, Debug, Display};

mod base;
mod node;
mod node_ref;
mod node_ref_mut;

#[cfg(test)]
mod tests;

pub use base::NodeArena;
pub use node::{Node, Color, Side};
pub use node_ref::{NodeRef, DisplaySubtree};
pub use node_ref_mut::NodeRefMut;

/// The error type returned by [`NodeRef::ascend`] when more levels are requested than the node
/// has ancestors.
///
/// [`NodeRef::ascend`]: struct.NodeRef.html#method.ascend " "
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct AscendError {
    /// The number of levels that was requested.
    pub levels: usize,
    /// The number of parent links that were walked before a node without a parent was
    /// reached.
    pub climbed: usize,
}
impl Display for AscendError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot ascend {} levels: a parentless node was reached after {}",
            self.levels, self.climbed,
        )
    }
}
#[cfg(feature = "std")]
impl std::error::Error for AscendError {}

/// The error type returned by [`NodeRefMut::attach`] and its single-side shorthands, which
/// occurs when the targeted child slot is already occupied.
///
/// [`NodeRefMut::attach`]: struct.NodeRefMut.html#method.attach " "
#[derive(Copy, Clone, Debug, Hash)]
pub struct AttachError<K, D, Ix = usize>
where Ix: Clone + Debug + Eq,
{
    /// The side whose child slot was occupied.
    pub side: Side,
    /// The node which was passed to the function and was deemed useless because the call
    /// failed, provided here so that it doesn't get dropped if it could instead be reused.
    pub node: Node<K, D, Ix>,
}
impl<K, D, Ix> AttachError<K, D, Ix>
where Ix: Clone + Debug + Eq,
{
    /// Extracts the node which could not be attached.
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_node(self) -> Node<K, D, Ix> {
        self.node
    }
}
impl<K, D, Ix> Display for AttachError<K, D, Ix>
where Ix: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Left => f.pad("the left child slot was already occupied"),
            Side::Right => f.pad("the right child slot was already occupied"),
        }
    }
}
#[cfg(feature = "std")]
impl<K, D, Ix> std::error::Error for AttachError<K, D, Ix>
where
    K: Debug,
    D: Debug,
    Ix: Clone + Debug + Eq,
{}

/// A node arena which uses a *sparse* `Vec` as backing storage.
///
/// The default `NodeArena` type already uses this, so this is only provided for explicitness
/// and consistency.
#[cfg(feature = "alloc")]
#[allow(unused_qualifications)]
pub type SparseVecNodeArena<K, D> =
    NodeArena<K, D, usize, crate::storage::SparseVec<Node<K, D, usize>>>;

/// A node arena which uses a `SlotMap` as backing storage.
#[cfg(feature = "slotmap")]
pub type SlotMapNodeArena<K, D> = NodeArena<
    K,
    D,
    slotmap::DefaultKey,
    slotmap::SlotMap<slotmap::DefaultKey, Node<K, D, slotmap::DefaultKey>>,
>;
