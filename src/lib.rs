//! An arena-allocated point quadtree with pre-order and level-order cursors.
//!
//! # Overview
//! A point quadtree associates points on the plane with labels. Every node stores one point, and that point splits the rest of its subtree into four quadrants, one per child slot. The tree supports insertion, exact-point lookup and two traversal orders, each exposed both as a cursor (a position which is advanced one step at a time and compared against an end position) and as a standard iterator.
//!
//! Like the other trees in this family, the quadtree uses a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The nodes live in a backing storage, a [`Vec`] by default, and instead of using pointers to link to children and parents, keys into the storage are used instead. Dropping or cloning a tree is thus a flat operation on the storage, no matter how deep the tree is, and every other operation is written as a loop over those keys rather than as recursion.
//!
//! # Storage
//! The trait used for defining the "arena" type used is `Storage`. Several types already implement it out of the box:
//! - [`Vec`]: the default, addressed by `usize` indices
//! - [`SlotMap`] and [`DenseSlotMap`]: with the `slotmap` feature
//!
//! # Feature flags
//! - `render` (**enabled by default**): adds the [`render`] module, which draws trees with integer ordinates and character labels as text.
//! - `tracing` (**enabled by default**): emits [`tracing`] events from insertion, level-order precomputation and rendering.
//! - `unwind_safety` (**enabled by default**): aborts the process instead of unwinding when tree corruption is detected in debug builds.
//! - `slotmap`: adds `Storage` trait implementations for [`SlotMap`] and [`DenseSlotMap`].
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//! - `slotmap` (*optional*): `^1.0`
//!
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [`render`]: render/index.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
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
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
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
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[macro_use]
pub(crate) mod util;

pub mod point;
pub use point::{Point, Quadrant};

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod quadtree;
pub use quadtree::{Quadtree, NodeRef, Cursor, BreadthCursor, Iter, BreadthIter};

#[cfg(feature = "render")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "render")))]
pub mod render;
#[cfg(feature = "render")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "render")))]
pub use render::PlotError;

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as QuadtreeStorage,
        DefaultStorage as DefaultQuadtreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::point::{
        Point as QuadtreePoint,
        Quadrant,
    };
    #[doc(no_inline)]
    pub use crate::quadtree::{
        Quadtree,
        NodeRef as QuadtreeNodeRef,
        Cursor as QuadtreeCursor,
        BreadthCursor as QuadtreeBreadthCursor,
    };
}
