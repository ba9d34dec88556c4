use crate::reflect::{Enumerated, is_valid};

/// Rejects an invalid discovery range in const context.
///
/// [`reflect_enum!`] expands a `const _` evaluation of this for every
/// declared type. A violation prevents compilation with an unintuitive
/// message like `evaluation of constant value failed` and `index out of
/// bounds: the length is 1 but the index is 1`.
///
/// [`reflect_enum!`]: crate::reflect_enum
#[allow(clippy::no_effect)]
#[allow(clippy::unnecessary_operation)]
pub const fn compile_assert_range(min: i32, max: i32) {
    // This will cause a compile-time error if max <= min
    ["discovery range requires max > min."][(max <= min) as usize];
}

/// Rejects an invalid discovery range with a readable panic message.
///
/// Called by the scanner entry points, so a bad manual [`Enumerated`]
/// implementation fails during const evaluation of its first query.
pub const fn runtime_assert_range(min: i32, max: i32) {
    assert!(max > min, "discovery range requires max > min.");
}

/// Counts the enumerators of `E` discovered in `[E::MIN, E::MAX]`.
///
/// Probes every integer in the range, inclusive on both ends. Zero is a
/// legal result: an enumeration whose declared discriminants all lie
/// outside the range simply has no discoverable enumerators.
///
/// Usable wherever a compile-time constant is required, e.g. as an array
/// length.
///
/// # Panics
/// Panics if `E::MAX <= E::MIN`.
///
/// # Examples
/// ```
/// use enum_bitset::{enum_count, reflect_enum};
///
/// reflect_enum! {
///     range(0, 10);
///     pub enum Gapped {
///         A = 0,
///         B = 5,
///         C = 10,
///     }
/// }
///
/// const COUNT: usize = enum_count::<Gapped>();
/// assert_eq!(COUNT, 3);
/// ```
pub const fn enum_count<E: Enumerated>() -> usize {
    runtime_assert_range(E::MIN, E::MAX);
    let mut count = 0;
    let mut v = E::MIN;
    loop {
        if is_valid::<E>(v) {
            count += 1;
        }
        if v == E::MAX {
            break;
        }
        v += 1;
    }
    count
}

/// Collects the discriminants of every discovered enumerator of `E`, in
/// ascending order.
///
/// `N` should only be set via const expression with [`enum_count`] to avoid
/// unnecessary panics:
///
/// ```
/// use enum_bitset::{enum_count, enum_values, reflect_enum};
///
/// reflect_enum! {
///     pub enum Color {
///         Red = 0,
///         Green = 1,
///         Blue = 2,
///     }
/// }
///
/// const VALUES: [i32; enum_count::<Color>()] = enum_values::<Color, { enum_count::<Color>() }>();
/// assert_eq!(VALUES, [0, 1, 2]);
/// ```
///
/// # Panics
/// Panics if `N != enum_count::<E>()` or if `E::MAX <= E::MIN`.
pub const fn enum_values<E: Enumerated, const N: usize>() -> [i32; N] {
    runtime_assert_range(E::MIN, E::MAX);
    assert!(
        N == enum_count::<E>(),
        "N must match the discovered enumerator count."
    );
    let mut values = [0i32; N];
    let mut slot = 0;
    let mut v = E::MIN;
    loop {
        if is_valid::<E>(v) {
            values[slot] = v;
            slot += 1;
        }
        if v == E::MAX {
            break;
        }
        v += 1;
    }
    values
}

/// Returns the dense position of the discriminant `v` within `E::VALUES`,
/// or `None` if `v` was not discovered.
///
/// The dense position is the 0-based rank of an enumerator in the
/// ascending list of discovered discriminants. It is the bit index used by
/// [`EnumSet`], which is why a discriminant outside the discovery range
/// has no position even when it belongs to a declared enumerator.
///
/// # Examples
/// ```
/// use enum_bitset::{position_of, reflect_enum};
///
/// reflect_enum! {
///     range(0, 10);
///     pub enum Gapped {
///         A = 0,
///         B = 5,
///         C = 10,
///     }
/// }
///
/// assert_eq!(position_of::<Gapped>(5), Some(1));
/// assert_eq!(position_of::<Gapped>(7), None);
/// ```
///
/// [`EnumSet`]: crate::EnumSet
pub const fn position_of<E: Enumerated>(v: i32) -> Option<usize> {
    let values = E::VALUES;
    let mut i = 0;
    while i < values.len() {
        if values[i] == v {
            return Some(i);
        }
        i += 1;
    }
    None
}
