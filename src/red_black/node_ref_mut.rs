use core::{
    fmt::Debug,
    mem, // replace
};
use crate::{
    storage::{Storage, DefaultStorage},
    util::Stack,
};
use super::{
    NodeArena,
    Node,
    NodeRef,
    Color,
    Side,
    AttachError,
};

/// A *mutable* reference to a node in an arena.
///
/// This is the privileged surface a balancing layer manipulates the tree through: payload and
/// color mutation, child attachment, and the link-rewiring primitives rotations are made of.
/// Every method leaves parent and child references mutually consistent — a node is listed as
/// its parent's child exactly when its back-reference names that parent — so the structure is
/// observable mid-restructuring without ever reading a half-written link pair.
#[derive(Debug)]
pub struct NodeRefMut<'a, K, D, Ix = usize, S = DefaultStorage<Node<K, D, Ix>>>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    arena: &'a mut NodeArena<K, D, Ix, S>,
    key: Ix,
}
impl<'a, K, D, Ix, S> NodeRefMut<'a, K, D, Ix, S>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if
    /// it's not present.
    #[inline]
    pub fn new_raw(arena: &'a mut NodeArena<K, D, Ix, S>, key: Ix) -> Option<Self> {
        if arena.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(arena, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage without doing a
    /// key check.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the
    /// storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(arena: &'a mut NodeArena<K, D, Ix, S>, key: Ix) -> Self {
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
    /// Reborrows into an immutable reference to the same node.
    #[inline]
    pub fn as_ref(&self) -> NodeRef<'_, K, D, Ix, S> {
        unsafe {
            // SAFETY: the pointee of a live NodeRefMut cannot dangle
            NodeRef::new_raw_unchecked(self.arena, self.key.clone())
        }
    }
    /// Returns a reference to the ordering key of the node.
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.node().key
    }
    /// Returns a reference to the data payload of the node.
    #[inline(always)]
    pub fn data(&self) -> &D {
        &self.node().data
    }
    /// Returns a *mutable* reference to the data payload of the node.
    ///
    /// The payload has no structural meaning — mutating it cannot corrupt the tree.
    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.node_mut().data
    }
    /// Returns the color of the node.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.node().color
    }
    /// Sets the color of the node, returning the previous one.
    #[inline]
    pub fn set_color(&mut self, color: Color) -> Color {
        mem::replace(&mut self.node_mut().color, color)
    }
    /// Flips the color of the node, returning the new one.
    #[inline]
    pub fn recolor(&mut self) -> Color {
        let new = self.node().color.opposite();
        self.node_mut().color = new;
        new
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

    /// Adds the node to the arena as a new child on the specified side, wiring the link in
    /// both directions and returning the new child's key.
    ///
    /// If the slot is already occupied the structure is left untouched and the node is handed
    /// back inside the error.
    pub fn attach(
        &mut self,
        side: Side,
        node: Node<K, D, Ix>,
    ) -> Result<Ix, AttachError<K, D, Ix>> {
        if self.node().child(side).is_some() {
            return Err(AttachError { side, node });
        }
        let child_key = self.arena.storage.add(node);
        let child = unsafe {
            // SAFETY: the key was just produced by the storage
            self.arena.storage.get_unchecked_mut(&child_key)
        };
        child.parent = Some(self.key.clone());
        *self.node_mut().child_mut(side) = Some(child_key.clone());
        Ok(child_key)
    }
    /// Adds the node to the arena as the new left child. See [`attach`].
    ///
    /// [`attach`]: #method.attach " "
    #[inline(always)]
    pub fn attach_left(&mut self, node: Node<K, D, Ix>) -> Result<Ix, AttachError<K, D, Ix>> {
        self.attach(Side::Left, node)
    }
    /// Adds the node to the arena as the new right child. See [`attach`].
    ///
    /// [`attach`]: #method.attach " "
    #[inline(always)]
    pub fn attach_right(&mut self, node: Node<K, D, Ix>) -> Result<Ix, AttachError<K, D, Ix>> {
        self.attach(Side::Right, node)
    }
    /// Rewires the child slot on the specified side to the given node, returning the key of
    /// the child it displaced, if any.
    ///
    /// This is the restructuring primitive rotations are built from. It moves links with both
    /// directions in lockstep:
    /// - the displaced occupant of the slot, if any, becomes detached (its back-reference is
    ///   cleared);
    /// - the new child is unhooked from its previous parent, if any, and if it was the
    ///   designated root, the designation is cleared — a root may not have a parent. Use
    ///   [`make_root`] to name the new root afterwards;
    /// - `None` simply empties the slot, which makes this a superset of [`detach_child`].
    ///
    /// The nodes themselves stay in the arena throughout; only links change.
    ///
    /// # Panics
    /// Panics if the child key is not present in the storage or names the node itself.
    ///
    /// [`make_root`]: #method.make_root " "
    /// [`detach_child`]: #method.detach_child " "
    pub fn link_child(&mut self, side: Side, new_child: Option<Ix>) -> Option<Ix> {
        if let Some(child_key) = &new_child {
            assert!(
                self.arena.storage.contains_key(child_key),
                "tried to link the key {:?} which is not present in the storage",
                child_key,
            );
            assert!(
                *child_key != self.key,
                "a node cannot be its own child",
            );
            self.debug_check_not_ancestor(child_key);
        }
        let displaced = self.node().child(side).clone();
        if let Some(displaced_key) = &displaced {
            let displaced_node = unsafe {
                // SAFETY: child keys are always live
                self.arena.storage.get_unchecked_mut(displaced_key)
            };
            displaced_node.parent = None;
        }
        if let Some(child_key) = &new_child {
            let old_parent = unsafe {
                // SAFETY: key checked at the top
                self.arena.storage.get_unchecked_mut(child_key)
            }
            .parent
            .take();
            if let Some(old_parent_key) = old_parent {
                let old_parent_node = unsafe {
                    // SAFETY: parent links can never dangle
                    self.arena.storage.get_unchecked_mut(&old_parent_key)
                };
                if old_parent_node.left.as_ref() == Some(child_key) {
                    old_parent_node.left = None;
                } else if old_parent_node.right.as_ref() == Some(child_key) {
                    old_parent_node.right = None;
                }
            }
            if self.arena.root.as_ref() == Some(child_key) {
                // A root may not have a parent; the caller designates the new root
                self.arena.root = None;
            }
            let child = unsafe {
                // SAFETY: as above
                self.arena.storage.get_unchecked_mut(child_key)
            };
            child.parent = Some(self.key.clone());
        }
        *self.node_mut().child_mut(side) = new_child;
        displaced
    }
    /// Empties the child slot on the specified side, returning the key of the now-detached
    /// child, if there was one.
    ///
    /// The child and its subtree stay in the arena; use [`remove_subtree`] on it to release
    /// them.
    ///
    /// [`remove_subtree`]: #method.remove_subtree " "
    #[inline]
    pub fn detach_child(&mut self, side: Side) -> Option<Ix> {
        self.link_child(side, None)
    }
    /// Detaches the node from its parent, if any, and designates it as the root of the arena,
    /// replacing the previous designation.
    ///
    /// The subtree hanging off the previously designated root, if it is a different node and
    /// still linked elsewhere, is unaffected — only the designation moves.
    pub fn make_root(&mut self) {
        let parent = self.node_mut().parent.take();
        if let Some(parent_key) = parent {
            let parent_node = unsafe {
                // SAFETY: parent links can never dangle
                self.arena.storage.get_unchecked_mut(&parent_key)
            };
            if parent_node.left.as_ref() == Some(&self.key) {
                parent_node.left = None;
            } else if parent_node.right.as_ref() == Some(&self.key) {
                parent_node.right = None;
            }
        }
        self.arena.root = Some(self.key.clone());
    }
    /// Removes the node and every node reachable from it through owning edges, consuming the
    /// reference and returning how many nodes were released.
    ///
    /// The subtree is detached from its parent (or the root designation is cleared) first, so
    /// the remaining structure never holds a key to a removed node. Back-references into the
    /// removed subtree cannot exist afterwards either — the only links into a subtree from
    /// the outside are the parent's child slot and the root designation.
    pub fn remove_subtree(self) -> usize {
        let Self { arena, key } = self;
        let parent = unsafe {
            // SAFETY: the pointee of a live NodeRefMut cannot dangle
            arena.storage.get_unchecked_mut(&key)
        }
        .parent
        .take();
        if let Some(parent_key) = parent {
            let parent_node = unsafe {
                // SAFETY: parent links can never dangle
                arena.storage.get_unchecked_mut(&parent_key)
            };
            if parent_node.left.as_ref() == Some(&key) {
                parent_node.left = None;
            } else if parent_node.right.as_ref() == Some(&key) {
                parent_node.right = None;
            }
        } else if arena.root.as_ref() == Some(&key) {
            arena.root = None;
        }
        let mut stack = Stack::<Ix>::new();
        stack.push(key);
        let mut removed = 0;
        while let Some(curr) = stack.pop() {
            let node = arena.storage.remove(&curr);
            if let Some(left) = node.left {
                stack.push(left);
            }
            if let Some(right) = node.right {
                stack.push(right);
            }
            removed += 1;
        }
        removed
    }

    // Walks the ancestors of the pointee and checks that none of them is the key about to be
    // linked as a child, which would create an ownership cycle. Debug builds only.
    fn debug_check_not_ancestor(&self, child_key: &Ix) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut curr = self.node().parent.clone();
        while let Some(ancestor) = curr {
            debug_assert!(
                ancestor != *child_key,
                "linking the ancestor {:?} as a child would create an ownership cycle",
                child_key,
            );
            curr = unsafe {
                // SAFETY: parent links can never dangle
                self.arena.storage.get_unchecked(&ancestor)
            }
            .parent
            .clone();
        }
    }
    #[inline(always)]
    fn node(&self) -> &Node<K, D, Ix> {
        unsafe {
            // SAFETY: all existing NodeRefMuts are guaranteed to not be dangling
            self.arena.storage.get_unchecked(&self.key)
        }
    }
    #[inline(always)]
    fn node_mut(&mut self) -> &mut Node<K, D, Ix> {
        unsafe {
            // SAFETY: as above
            self.arena.storage.get_unchecked_mut(&self.key)
        }
    }
}
impl<'a, K, D, Ix, S> From<NodeRefMut<'a, K, D, Ix, S>> for NodeRef<'a, K, D, Ix, S>
where
    S: Storage<Element = Node<K, D, Ix>, Key = Ix>,
    Ix: Clone + Debug + Eq,
{
    #[inline]
    fn from(op: NodeRefMut<'a, K, D, Ix, S>) -> Self {
        unsafe {
            // SAFETY: the pointee of a live NodeRefMut cannot dangle
            Self::new_raw_unchecked(op.arena, op.key)
        }
    }
}
