use core::mem;
use super::{ListStorage, Storage};

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[cfg(feature = "alloc")]
pub type SparseVec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;
/// A `VecDeque` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[cfg(feature = "alloc")]
pub type SparseVecDeque<T> = SparseStorage<T, alloc::collections::VecDeque<Slot<T>>>;

/// A wrapper around a list-like storage type which keeps element keys stable across removals.
///
/// Sparse storage with element type `E` wraps a normal list storage which stores `Slot<E>`,
/// a tagged union storing either an element or a "hole". Removing an element does not shift
/// its successors down — the element is replaced with a hole, and the hole is pushed onto an
/// intrusive free list threaded through the holes themselves. Adding an element pops the most
/// recently punched hole off that list and reuses its index, falling back to a plain push when
/// the storage is dense.
///
/// As a result, the key of an element never changes for as long as the element is in the
/// storage, which is the property node links rely on: a node records its parent and children
/// as keys, and a key silently moving to a different node would corrupt the whole tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    /// Most recently punched hole, start of the intrusive free list.
    hole_head: Option<usize>,
    hole_count: usize,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Returns the number of holes in the storage. This operation returns immediately instead
    /// of looping through the entire storage, since the sparse storage automatically tracks
    /// the number of holes it creates and destroys.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_count
    }
    /// Consumes the sparse storage and returns its inner storage.
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.storage
    }
}

static HOLE_PANIC_MSG: &str = "\
the element at the specified key was a hole in the sparse storage";

unsafe impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Key = usize;
    type Element = E;

    fn add(&mut self, element: Self::Element) -> usize {
        if let Some(index) = self.hole_head {
            let slot = unsafe {
                // SAFETY: the hole list only ever stores in-bounds indices
                self.storage.get_unchecked_mut(index)
            };
            self.hole_head = match slot {
                Slot::Hole(next) => *next,
                Slot::Element(..) => unreachable!("the hole list pointed at a live element"),
            };
            *slot = Slot::Element(element);
            self.hole_count -= 1;
            index
        } else {
            self.storage.push(Slot::Element(element));
            self.storage.len() - 1
        }
    }
    #[track_caller]
    fn remove(&mut self, key: &usize) -> Self::Element {
        assert!(
            self.contains_key(key),
            "the element at key {} is not present in the storage",
            *key,
        );
        let slot = unsafe {
            // SAFETY: contains_key implies being in bounds
            self.storage.get_unchecked_mut(*key)
        };
        let old = mem::replace(slot, Slot::Hole(self.hole_head));
        self.hole_head = Some(*key);
        self.hole_count += 1;
        match old {
            Slot::Element(element) => element,
            // contains_key checked for this arm above
            Slot::Hole(..) => unreachable!(),
        }
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.hole_count
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            hole_head: None,
            hole_count: 0,
        }
    }
    #[inline]
    unsafe fn get_unchecked(&self, key: &usize) -> &Self::Element {
        self.storage.get_unchecked(*key).element().expect(HOLE_PANIC_MSG)
    }
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut Self::Element {
        self.storage.get_unchecked_mut(*key).element_mut().expect(HOLE_PANIC_MSG)
    }
    #[inline]
    fn contains_key(&self, key: &usize) -> bool {
        self.storage.get(*key).map_or(false, Slot::is_element)
    }
    #[inline(always)]
    fn new() -> Self {
        Self {
            storage: S::new(),
            hole_head: None,
            hole_count: 0,
        }
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}

/// A storage slot — either a live element or a hole left behind by a removed one.
///
/// Managed by [`SparseStorage`] and only publicly exposed so that sparse storages' generic
/// arguments could be specified.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot<E> {
    /// A live element.
    Element(E),
    /// A hole, storing the index of the next hole in the free list, if any.
    Hole(Option<usize>),
}
impl<E> Slot<E> {
    /// Returns `true` if the slot holds a live element, `false` if it's a hole.
    #[inline]
    pub fn is_element(&self) -> bool {
        match self {
            Self::Element(..) => true,
            Self::Hole(..) => false,
        }
    }
    /// Returns `true` if the slot is a hole, `false` if it holds a live element.
    #[inline(always)]
    pub fn is_hole(&self) -> bool {
        !self.is_element()
    }
    /// Returns a reference to the element, or `None` if the slot is a hole.
    #[inline]
    pub fn element(&self) -> Option<&E> {
        match self {
            Self::Element(element) => Some(element),
            Self::Hole(..) => None,
        }
    }
    /// Returns a *mutable* reference to the element, or `None` if the slot is a hole.
    #[inline]
    pub fn element_mut(&mut self) -> Option<&mut E> {
        match self {
            Self::Element(element) => Some(element),
            Self::Hole(..) => None,
        }
    }
    /// Extracts the element, or `None` if the slot is a hole.
    #[inline]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_element(self) -> Option<E> {
        match self {
            Self::Element(element) => Some(element),
            Self::Hole(..) => None,
        }
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::{Slot, SparseVec};
    use crate::storage::Storage;

    #[test]
    fn holes_are_reused() {
        let mut storage = SparseVec::<u32>::new();
        let a = storage.add(10);
        let b = storage.add(20);
        let c = storage.add(30);
        assert_eq!(storage.len(), 3);

        assert_eq!(storage.remove(&b), 20);
        assert!(!storage.contains_key(&b));
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.num_holes(), 1);

        let d = storage.add(40);
        assert_eq!(d, b);
        assert_eq!(storage.num_holes(), 0);
        assert_eq!(storage.get(&d), Some(&40));
        assert_eq!(storage.get(&a), Some(&10));
        assert_eq!(storage.get(&c), Some(&30));
    }

    #[test]
    fn holes_pop_in_reverse_punch_order() {
        let mut storage = SparseVec::<u32>::new();
        let keys = [storage.add(0), storage.add(1), storage.add(2), storage.add(3)];
        storage.remove(&keys[1]);
        storage.remove(&keys[3]);
        assert_eq!(storage.num_holes(), 2);
        assert_eq!(storage.add(13), keys[3]);
        assert_eq!(storage.add(11), keys[1]);
        assert_eq!(storage.num_holes(), 0);
        assert_eq!(storage.len(), 4);
    }

    #[test]
    #[should_panic(expected = "not present in the storage")]
    fn removing_a_hole_panics() {
        let mut storage = SparseVec::<u32>::new();
        let a = storage.add(1);
        storage.remove(&a);
        storage.remove(&a);
    }

    #[test]
    fn slot_queries() {
        let mut slot = Slot::Element(5_u32);
        assert!(slot.is_element());
        assert_eq!(slot.element(), Some(&5));
        assert_eq!(slot.element_mut(), Some(&mut 5));
        assert_eq!(slot.into_element(), Some(5));

        let hole = Slot::<u32>::Hole(None);
        assert!(hole.is_hole());
        assert_eq!(hole.element(), None);
        assert_eq!(hole.into_element(), None);
    }
}
