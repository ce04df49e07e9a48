use core::fmt::Debug;
use slotmap::{SlotMap, HopSlotMap, DenseSlotMap, Key, Slottable};
use super::Storage;

unsafe impl<K, V> Storage for SlotMap<K, V>
where
    K: Key + Debug + Eq,
    V: Slottable,
{
    type Key = K;
    type Element = V;
    // Those methods clone the keys which have been fed into them — this is perfectly fine,
    // since slotmap keys are actually Copy
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> Self::Key {
        self.insert(element)
    }
    #[inline(always)]
    fn remove(&mut self, key: &Self::Key) -> Self::Element {
        self.remove(key.clone())
            .expect("the element with this key has already been removed")
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element {
        self.get_unchecked(key.clone())
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element {
        self.get_unchecked_mut(key.clone())
    }
    #[inline(always)]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.contains_key(key.clone())
    }
    #[inline(always)]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        self.get(key.clone())
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        self.get_mut(key.clone())
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

unsafe impl<K, V> Storage for HopSlotMap<K, V>
where
    K: Key + Debug + Eq,
    V: Slottable,
{
    type Key = K;
    type Element = V;
    // Key cloning is as cheap as a Copy here as well
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> Self::Key {
        self.insert(element)
    }
    #[inline(always)]
    fn remove(&mut self, key: &Self::Key) -> Self::Element {
        self.remove(key.clone())
            .expect("the element with this key has already been removed")
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element {
        self.get_unchecked(key.clone())
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element {
        self.get_unchecked_mut(key.clone())
    }
    #[inline(always)]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.contains_key(key.clone())
    }
    #[inline(always)]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        self.get(key.clone())
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        self.get_mut(key.clone())
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

unsafe impl<K, V> Storage for DenseSlotMap<K, V>
where
    K: Key + Debug + Eq,
    V: Slottable,
{
    type Key = K;
    type Element = V;
    // Key cloning is as cheap as a Copy here as well
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> Self::Key {
        self.insert(element)
    }
    #[inline(always)]
    fn remove(&mut self, key: &Self::Key) -> Self::Element {
        self.remove(key.clone())
            .expect("the element with this key has already been removed")
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element {
        self.get_unchecked(key.clone())
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element {
        self.get_unchecked_mut(key.clone())
    }
    #[inline(always)]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.contains_key(key.clone())
    }
    #[inline(always)]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        self.get(key.clone())
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        self.get_mut(key.clone())
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

#[cfg(test)]
mod tests {
    use slotmap::{SlotMap, HopSlotMap, DenseSlotMap, DefaultKey};
    use super::Storage;
    use crate::red_black::{SlotMapNodeArena, Node, NodeRef};

    fn round_trip<S: Storage<Element = u32>>() {
        let mut storage = S::new();
        let a = storage.add(10);
        let b = storage.add(20);
        assert_eq!(storage.len(), 2);
        assert!(storage.contains_key(&a));
        assert_eq!(storage.get(&b), Some(&20));

        assert_eq!(storage.remove(&a), 10);
        assert!(!storage.contains_key(&a));
        assert_eq!(storage.get(&a), None);
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(&b), Some(&20));
    }

    #[test]
    fn slot_map_round_trip() {
        round_trip::<SlotMap<DefaultKey, u32>>();
    }

    #[test]
    fn hop_slot_map_round_trip() {
        round_trip::<HopSlotMap<DefaultKey, u32>>();
    }

    #[test]
    fn dense_slot_map_round_trip() {
        round_trip::<DenseSlotMap<DefaultKey, u32>>();
    }

    #[test]
    fn slot_map_arena_attach_and_ascend() {
        let mut arena = SlotMapNodeArena::<u32, &str>::new();
        arena.insert_root(Node::new(5, "five"));
        let mut root = arena.root_mut().expect("a root was just inserted");
        let left = root
            .attach_left(Node::new(3, "three"))
            .expect("the left slot of the root starts out empty");
        let three = NodeRef::new_raw(&arena, left).expect("the node was just attached");
        assert_eq!(three.is_left(), Some(true));
        assert_eq!(
            three.ascend(1).expect("the node is one level below the root").key(),
            &5,
        );
        assert_eq!(arena.len(), 2);
    }
}
