//! Arena-allocated node substrate for red-black trees.
//!
//! ------------------------
//!
//! # Overview
//! Ebony implements the *node layer* of a red-black tree: keys, payloads, the red/black
//! coloring attribute, owning child links and non-owning parent back-references, together with
//! the local navigation queries (`is_left`, `is_right`, `ascend`) that every red-black
//! algorithm leans on. The balancing layer itself — insertion and deletion with fixup,
//! rotations, search, traversal, comparators — is deliberately *not* part of this crate: it is
//! meant to be written on top, using the privileged link-rewiring surface exposed by
//! [`NodeRefMut`].
//!
//! Nodes are stored in an arena and refer to each other through stable keys into that arena
//! instead of pointers, a technique described in the ["arena-allocated trees" blog post][arena tree blog post]
//! by Ben Lovy. Parent-to-child keys are the owning edges — removing a subtree releases every
//! node below it — while the child-to-parent key is a pure observation link with no lifetime
//! weight. This makes ownership cycles structurally impossible: there is no reference counting
//! anywhere, so a parent back-reference can never keep a removed subtree alive.
//!
//! # Storage
//! The trait used for defining the arena type is [`Storage`]. Implementing it directly isn't
//! the only way to get your type to be supported by the node arena — [`ListStorage`] is a
//! trait which allows you to define an arena in terms of a list-like collection, which
//! [`SparseStorage`] then wraps to keep keys stable across removals.
//!
//! Several types from both the standard library and external crates already implement
//! [`Storage`] or [`ListStorage`] out of the box:
//! - [`Vec`], [`SmallVec`] and [`ArrayVec`] — `ListStorage`
//! - [`VecDeque`] — `ListStorage`, does not use `VecDeque` semantics and is simply provided
//!   for convenience
//! - [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`] — `Storage`
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std`
//!   for the crate. Currently, this only adds [`Error`] trait implementations for the error
//!   types.
//! - `alloc` (**enabled by default**) — adds [`ListStorage`] implementations for standard
//!   library containers and switches [`DefaultStorage`] to a sparse [`Vec`]. *This does not
//!   require standard library support and will only panic at runtime in `no_std` environments
//!   without an allocator.*
//! - `smallvec` — adds a [`ListStorage`] implementation for [`SmallVec`].
//! - `slotmap` — adds [`Storage`] implementations for [`SlotMap`], [`HopSlotMap`] and
//!   [`DenseSlotMap`].
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (*optional*) — `^1.4`
//! - `slotmap` (*optional*) — `^0.4`
//!
//! [`Storage`]: storage/trait.Storage.html " "
//! [`ListStorage`]: storage/trait.ListStorage.html " "
//! [`SparseStorage`]: storage/struct.SparseStorage.html " "
//! [`DefaultStorage`]: storage/type.DefaultStorage.html " "
//! [`NodeRefMut`]: red_black/struct.NodeRefMut.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`HopSlotMap`]: https://docs.rs/slotmap/*/slotmap/hop/struct.HopSlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod red_black;
#[doc(no_inline)]
pub use red_black::{
    NodeArena,
    Node,
    NodeRef,
    NodeRefMut,
    Color,
    Side,
    AscendError,
    AttachError,
};

/// A prelude for using Ebony, containing the most used types in a renamed form for safe
/// glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as ArenaStorage,
        SparseStorage as SparseArenaStorage,
        DefaultStorage as DefaultArenaStorage,
    };
    #[doc(no_inline)]
    pub use crate::red_black::{
        NodeArena as RedBlackNodeArena,
        NodeRef as RedBlackNodeRef,
        NodeRefMut as RedBlackNodeRefMut,
        Color as NodeColor,
        Side as NodeSide,
    };
}

pub(crate) mod util;
