#[cfg(any(feature = "smallvec", not(feature = "alloc")))]
const INLINE_STACK_SIZE: usize = 128;

/// Scratch stack for subtree walks, picked by feature flags.
///
/// Without an allocator the stack is bounded, which bounds the depth of subtrees one call can
/// walk.
#[cfg(feature = "smallvec")]
pub(crate) type Stack<T> = smallvec::SmallVec<[T; INLINE_STACK_SIZE]>;
#[cfg(all(feature = "alloc", not(feature = "smallvec")))]
pub(crate) type Stack<T> = alloc::vec::Vec<T>;
#[cfg(all(
    not(feature = "smallvec"),
    not(feature = "alloc"),
))]
pub(crate) type Stack<T> = arrayvec::ArrayVec<[T; INLINE_STACK_SIZE]>;
