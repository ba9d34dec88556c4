//! A minimal, fixed-size enum set with compile-time enumerator discovery.
//! `no_std`, no heap / `alloc`, no `unsafe` — just `core`.
//!
//! Declare an enumeration through [`reflect_enum!`] and the crate discovers
//! its enumerators by probing every candidate discriminant in a bounded
//! range, entirely at compile time. The discovered count then sizes
//! [`EnumSet`], a stack-only bit vector with one bit per enumerator.
//!
//! # Examples
//! ```
//! use enum_bitset::{enum_count, reflect_enum, EnumSet};
//!
//! reflect_enum! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Color {
//!         Red = 0,
//!         Green = 1,
//!         Blue = 2,
//!     }
//! }
//!
//! assert_eq!(enum_count::<Color>(), 3);
//!
//! let warm = Color::Red | Color::Green;
//! assert!(warm.contains(Color::Red));
//! assert!(!warm.contains(Color::Blue));
//! assert_eq!((!warm).len(), 1);
//! ```
//!
//! # Use Cases
//!
//! - Flag and option sets keyed by an enum, with no dynamic allocation
//! - Enums with sparse or negative discriminants (bits are indexed by an
//!   enumerator's dense position, never by its raw discriminant)
//! - Compile-time sizing: [`enum_count`] is usable as an array length
//! - Not a general reflection framework; only enumerators inside the
//!   configured discovery range are visible
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - [`reflect_enum!`]: declare an enum once, no separate registration table
//! - Per-type discovery range, default `[-128, 128]`, rejected at build time
//!   when `max <= min`
//! - Discovery queries: [`enum_count`], [`enum_values`], [`name_of`],
//!   [`is_valid`], [`position_of`]
//! - [`EnumSet`] operations:
//!   - `|`, `&`, `^`, `!` plus `|=`, `&=`, `^=`, with set and value operands
//!   - `insert`, `remove`, `contains`, `len`, `capacity`, `is_empty`
//!   - Iteration over members in ascending discriminant order

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod reflect;
mod scan;
mod set;

pub use reflect::{
    DEFAULT_MAX, DEFAULT_MIN, Enumerated, is_valid, name_of, pretty_name, signature_of,
};
pub use scan::{compile_assert_range, enum_count, enum_values, position_of, runtime_assert_range};
pub use set::{BitStore, EnumSet, EnumSetIter, bucket_count};
