use crate::set::BitStore;

/// Default inclusive lower bound of the discovery range.
pub const DEFAULT_MIN: i32 = -128;

/// Default inclusive upper bound of the discovery range.
pub const DEFAULT_MAX: i32 = 128;

/// An enumeration whose enumerators can be discovered by probing.
///
/// Implemented by [`reflect_enum!`], which records one raw signature per
/// declared enumerator and computes the discovery results once per type.
/// Manual implementations are possible but rarely needed; the macro keeps
/// the registry in sync with the declaration so adding an enumerator never
/// requires updating a separate table.
///
/// The probed discriminant domain is `i32`. Enumerators whose discriminant
/// lies outside `[MIN, MAX]` are silently treated as absent: discovery
/// queries skip them and [`EnumSet`] operations reject their values. Callers
/// needing guaranteed coverage must widen the range.
///
/// [`reflect_enum!`]: crate::reflect_enum
/// [`EnumSet`]: crate::EnumSet
pub trait Enumerated: Copy + 'static {
    /// Inclusive lower bound of the discovery range.
    const MIN: i32 = DEFAULT_MIN;

    /// Inclusive upper bound of the discovery range. Must be greater than
    /// [`MIN`](Self::MIN); violations are rejected at build time.
    const MAX: i32 = DEFAULT_MAX;

    /// Raw `(discriminant, signature)` pairs, one per declared enumerator.
    ///
    /// A signature is compiler-rendered path text such as
    /// `"my_app::Color::Red"`; [`pretty_name`] trims it down to the bare
    /// enumerator name.
    const SIGNATURES: &'static [(i32, &'static str)];

    /// Ascending discriminants of every discovered enumerator.
    const VALUES: &'static [i32];

    /// Number of discovered enumerators.
    const COUNT: usize = Self::VALUES.len();

    /// Backing storage for an [`EnumSet`] of this type, sized to exactly
    /// [`COUNT`](Self::COUNT) bits.
    ///
    /// [`EnumSet`]: crate::EnumSet
    type Store: BitStore;

    /// Returns the underlying discriminant of this enumerator.
    fn discriminant(self) -> i32;

    /// Returns the enumerator with the given discriminant, or `None` if no
    /// enumerator is declared with that value.
    fn from_discriminant(v: i32) -> Option<Self>;
}

const fn is_ident_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

const fn is_ident_start(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

/// Extracts the trailing identifier from a raw signature, or `""` if the
/// signature does not end in one.
///
/// Scans from the end and cuts at the first character that is not
/// alphanumeric or an underscore. The trailing token only counts as an
/// identifier if its first character is a letter or underscore, so the
/// numeric text a cast rendering ends in (e.g. `"(Color)47"`) is rejected.
///
/// # Examples
/// ```
/// use enum_bitset::pretty_name;
///
/// assert_eq!(pretty_name("my_app::Color::Red"), "Red");
/// assert_eq!(pretty_name("(Color)47"), "");
/// assert_eq!(pretty_name(""), "");
/// ```
pub const fn pretty_name(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut start = 0;
    let mut i = bytes.len();
    while i > 0 {
        if !is_ident_byte(bytes[i - 1]) {
            start = i;
            break;
        }
        i -= 1;
    }
    let (_, tail) = bytes.split_at(start);
    if tail.is_empty() || !is_ident_start(tail[0]) {
        return "";
    }
    match core::str::from_utf8(tail) {
        Ok(name) => name,
        Err(_) => "",
    }
}

/// Returns the raw signature recorded for the candidate discriminant `v`,
/// or `""` if no enumerator of `E` has that discriminant.
///
/// This is the probe input; [`name_of`] applies [`pretty_name`] to it.
///
/// # Examples
/// ```
/// use enum_bitset::{reflect_enum, signature_of};
///
/// reflect_enum! {
///     pub enum Flag {
///         On = 1,
///     }
/// }
///
/// assert!(signature_of::<Flag>(1).ends_with("Flag::On"));
/// assert_eq!(signature_of::<Flag>(2), "");
/// ```
pub const fn signature_of<E: Enumerated>(v: i32) -> &'static str {
    let sigs = E::SIGNATURES;
    let mut i = 0;
    while i < sigs.len() {
        let (value, raw) = sigs[i];
        if value == v {
            return raw;
        }
        i += 1;
    }
    ""
}

/// Returns the bare name of the enumerator of `E` with discriminant `v`,
/// or `""` if `v` names no enumerator.
///
/// The result is a subslice of the recorded signature: exactly as long as
/// the name, immutable, `'static`.
///
/// # Examples
/// ```
/// use enum_bitset::{name_of, reflect_enum};
///
/// reflect_enum! {
///     pub enum Color {
///         Red = 0,
///         Green = 1,
///     }
/// }
///
/// assert_eq!(name_of::<Color>(1), "Green");
/// assert_eq!(name_of::<Color>(47), "");
/// ```
pub const fn name_of<E: Enumerated>(v: i32) -> &'static str {
    pretty_name(signature_of::<E>(v))
}

/// Returns `true` if the candidate discriminant `v` is a declared
/// enumerator of `E`.
///
/// Pure in `(E, v)`; the discovery range is not consulted here, only the
/// declaration itself.
///
/// # Examples
/// ```
/// use enum_bitset::{is_valid, reflect_enum};
///
/// reflect_enum! {
///     pub enum Color {
///         Red = 0,
///         Green = 1,
///     }
/// }
///
/// assert!(is_valid::<Color>(0));
/// assert!(!is_valid::<Color>(2));
/// ```
pub const fn is_valid<E: Enumerated>(v: i32) -> bool {
    !name_of::<E>(v).is_empty()
}

/// Declares a C-like enum and implements [`Enumerated`] for it in the same
/// expansion.
///
/// Every variant must carry an explicit discriminant. `Clone` and `Copy`
/// are derived automatically; further derives and attributes pass through.
/// An optional leading `range(min, max);` clause overrides the default
/// discovery range of `[-128, 128]`; `max > min` is enforced at build time.
///
/// Besides the trait impl, the macro generates `Variant | Variant` and
/// `Variant | set` operators returning an [`EnumSet`].
///
/// # Examples
/// ```
/// use enum_bitset::{enum_count, reflect_enum};
///
/// reflect_enum! {
///     #[derive(Debug, PartialEq)]
///     pub enum Color {
///         Red = 0,
///         Green = 1,
///         Blue = 2,
///     }
/// }
///
/// reflect_enum! {
///     range(0, 1024);
///     pub enum Block {
///         Small = 16,
///         Large = 512,
///     }
/// }
///
/// assert_eq!(enum_count::<Color>(), 3);
/// assert_eq!(enum_count::<Block>(), 2);
/// assert_eq!((Color::Red | Color::Blue).len(), 2);
/// ```
///
/// [`Enumerated`]: crate::Enumerated
/// [`EnumSet`]: crate::EnumSet
#[macro_export]
macro_rules! reflect_enum {
    (
        range($min:expr, $max:expr);
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $crate::reflect_enum! {
            @declare ($min, $max);
            $(#[$meta])*
            $vis enum $name {
                $($(#[$vmeta])* $variant = $value),+
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $crate::reflect_enum! {
            @declare ($crate::DEFAULT_MIN, $crate::DEFAULT_MAX);
            $(#[$meta])*
            $vis enum $name {
                $($(#[$vmeta])* $variant = $value),+
            }
        }
    };
    (
        @declare ($min:expr, $max:expr);
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $crate::Enumerated for $name {
            const MIN: i32 = $min;
            const MAX: i32 = $max;

            const SIGNATURES: &'static [(i32, &'static str)] = &[
                $((
                    $value,
                    concat!(module_path!(), "::", stringify!($name), "::", stringify!($variant)),
                )),+
            ];

            const VALUES: &'static [i32] = {
                const N: usize = $crate::enum_count::<$name>();
                const VALS: [i32; N] = $crate::enum_values::<$name, N>();
                &VALS
            };

            type Store = [u8; $crate::bucket_count($crate::enum_count::<$name>())];

            fn discriminant(self) -> i32 {
                self as i32
            }

            fn from_discriminant(v: i32) -> Option<Self> {
                $(if v == $value {
                    return Some($name::$variant);
                })+
                None
            }
        }

        const _: () = $crate::compile_assert_range(
            <$name as $crate::Enumerated>::MIN,
            <$name as $crate::Enumerated>::MAX,
        );

        impl ::core::ops::BitOr for $name {
            type Output = $crate::EnumSet<$name>;

            fn bitor(self, rhs: Self) -> Self::Output {
                $crate::EnumSet::from(self) | rhs
            }
        }

        impl ::core::ops::BitOr<$crate::EnumSet<$name>> for $name {
            type Output = $crate::EnumSet<$name>;

            fn bitor(self, rhs: $crate::EnumSet<$name>) -> Self::Output {
                rhs | self
            }
        }
    };
}
