use core::fmt::Debug;
use crate::storage::{Storage, DefaultStorage};
use super::{Node, NodeRef, NodeRefMut};

/// An arena holding the nodes of one red-black tree.
///
/// The arena owns the backing [`Storage`] and the *root designation* — the key of the node
/// currently considered the root, if any. Everything else about the tree's shape lives in the
/// nodes themselves, as keys into the storage; the arena never interprets colors or keys and
/// performs no balancing.
///
/// Node access goes through [`NodeRef`] and [`NodeRefMut`] handles, which borrow the arena
/// and address a single node by its storage key.
///
/// [`Storage`]: ../storage/trait.Storage.html " "
/// [`NodeRef`]: struct.NodeRef.html " "
/// [`NodeRefMut`]: struct.NodeRefMut.html " "
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeArena<K, D, Ix = usize, S = DefaultStorage<Node<K, D, Ix>>>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: Option<Ix>,
}
impl<K, D, Ix, S> NodeArena<K, D, Ix, S>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    /// Creates an empty arena with no root designated. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty arena with the specified storage capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }
    /// Adds the node to the arena and designates it as the root, returning its key.
    ///
    /// # Panics
    /// Panics if a root is already designated — a tree has exactly one root. Use
    /// [`NodeRefMut::make_root`] to transfer the designation during restructuring.
    ///
    /// [`NodeRefMut::make_root`]: struct.NodeRefMut.html#method.make_root " "
    pub fn insert_root(&mut self, node: Node<K, D, Ix>) -> Ix {
        assert!(
            self.root.is_none(),
            "cannot insert a root node into an arena which already has one",
        );
        let key = self.storage.add(node);
        self.root = Some(key.clone());
        key
    }
    /// Adds the node to the arena without linking it anywhere, returning its key.
    ///
    /// The node stays detached — no parent, no children, not the root — until it is wired
    /// into the structure through [`NodeRefMut`].
    ///
    /// [`NodeRefMut`]: struct.NodeRefMut.html " "
    #[inline]
    pub fn insert_detached(&mut self, node: Node<K, D, Ix>) -> Ix {
        self.storage.add(node)
    }
    /// Returns a reference to the root node, or `None` if no root is designated.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, K, D, Ix, S>> {
        self.root.clone().map(|key| unsafe {
            // SAFETY: the root key always refers to a live node
            NodeRef::new_raw_unchecked(self, key)
        })
    }
    /// Returns a *mutable* reference to the root node, or `None` if no root is designated.
    #[inline]
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, K, D, Ix, S>> {
        self.root.clone().map(move |key| unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self, key)
        })
    }
    /// Returns the number of nodes currently in the arena, including detached ones.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the arena holds no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves storage for at least `additional` more nodes.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the backing storage as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}
