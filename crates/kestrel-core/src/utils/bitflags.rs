// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A declarative macro for strongly-typed bitmask sets.

/// Declares a `Copy` newtype over an integer with a fixed set of named flags.
///
/// The generated type supports set queries (`contains`, `intersects`), the usual
/// bitwise operators, and a `Debug` rendering of the form `Name { A | B }`.
///
/// ```
/// kestrel_core::kestrel_bitflags! {
///     /// Access rights.
///     pub struct Access: u8 {
///         /// Read access.
///         const READ = 1 << 0;
///         /// Write access.
///         const WRITE = 1 << 1;
///     }
/// }
///
/// let rw = Access::READ | Access::WRITE;
/// assert!(rw.contains(Access::READ));
/// assert_eq!(format!("{rw:?}"), "Access { READ | WRITE }");
/// ```
#[macro_export]
macro_rules! kestrel_bitflags {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident: $ty:ty {
            $(
                $(#[$flag_attr:meta])*
                const $flag_name:ident = $flag_value:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name {
            bits: $ty,
        }

        impl $name {
            $(
                $(#[$flag_attr])*
                pub const $flag_name: Self = Self { bits: $flag_value };
            )*

            /// The set containing no flags.
            pub const EMPTY: Self = Self { bits: 0 };

            /// The union of every named flag.
            pub const ALL: Self = Self { bits: 0 $(| $flag_value)* };

            const NAMED: &'static [(&'static str, Self)] = &[
                $((stringify!($flag_name), Self { bits: $flag_value }),)*
            ];

            /// Builds a set from raw bits, dropping any bit that no named flag covers.
            pub const fn from_bits_truncate(bits: $ty) -> Self {
                Self { bits: bits & Self::ALL.bits }
            }

            /// Builds a set from raw bits, or `None` if an unknown bit is set.
            pub const fn from_bits(bits: $ty) -> Option<Self> {
                if bits & !Self::ALL.bits == 0 {
                    Some(Self { bits })
                } else {
                    None
                }
            }

            /// Returns the raw bits of this set.
            pub const fn bits(&self) -> $ty {
                self.bits
            }

            /// Returns `true` if no flag is set.
            pub const fn is_empty(&self) -> bool {
                self.bits == 0
            }

            /// Returns `true` if every flag of `other` is also set in `self`.
            pub const fn contains(&self, other: Self) -> bool {
                (self.bits & other.bits) == other.bits
            }

            /// Returns `true` if at least one flag of `other` is set in `self`.
            pub const fn intersects(&self, other: Self) -> bool {
                (self.bits & other.bits) != 0
            }

            /// Sets every flag of `other`.
            pub fn insert(&mut self, other: Self) {
                self.bits |= other.bits;
            }

            /// Clears every flag of `other`.
            pub fn remove(&mut self, other: Self) {
                self.bits &= !other.bits;
            }

            /// Returns a copy of `self` with the flags of `other` set.
            #[must_use]
            pub const fn with(self, other: Self) -> Self {
                Self { bits: self.bits | other.bits }
            }

            /// Iterates the named, non-empty flags fully contained in `self`.
            pub fn iter_names(self) -> impl Iterator<Item = (&'static str, Self)> {
                Self::NAMED
                    .iter()
                    .copied()
                    .filter(move |(_, flag)| !flag.is_empty() && self.contains(*flag))
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                Self { bits: self.bits | other.bits }
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self { bits: self.bits & other.bits }
            }
        }

        impl core::ops::BitXor for $name {
            type Output = Self;
            fn bitxor(self, other: Self) -> Self {
                Self { bits: self.bits ^ other.bits }
            }
        }

        impl core::ops::Not for $name {
            type Output = Self;
            fn not(self) -> Self {
                Self::from_bits_truncate(!self.bits)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                self.bits |= other.bits;
            }
        }

        impl core::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, other: Self) {
                self.bits &= other.bits;
            }
        }

        impl core::ops::BitXorAssign for $name {
            fn bitxor_assign(&mut self, other: Self) {
                self.bits ^= other.bits;
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{} {{ ", stringify!($name))?;

                if self.bits == 0 {
                    return write!(f, "EMPTY }}");
                }

                // Composite flags are skipped once their components were printed.
                let mut remaining = self.bits;
                let mut first = true;
                for (flag_name, flag) in Self::NAMED {
                    if flag.bits != 0 && remaining & flag.bits == flag.bits {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        f.write_str(flag_name)?;
                        remaining &= !flag.bits;
                        first = false;
                    }
                }

                write!(f, " }}")
            }
        }
    };
}

#[cfg(test)]
mod tests {
    kestrel_bitflags! {
        /// Flags used only by these tests.
        pub struct TestFlags: u32 {
            const FLAG_A = 1 << 0;
            const FLAG_B = 1 << 1;
            const FLAG_C = 1 << 2;
            const COMBINED_AC = Self::FLAG_A.bits() | Self::FLAG_C.bits();
            const HIGH = 1 << 20;
        }
    }

    #[test]
    fn test_empty_set() {
        let flags = TestFlags::EMPTY;
        assert!(flags.is_empty());
        assert_eq!(TestFlags::default(), TestFlags::EMPTY);
        assert!(flags.contains(TestFlags::EMPTY));
        assert!(!flags.intersects(TestFlags::FLAG_A));
        assert_eq!(format!("{flags:?}"), "TestFlags { EMPTY }");
    }

    #[test]
    fn test_all_is_union_of_named_flags() {
        assert_eq!(TestFlags::ALL.bits(), 0b111 | (1 << 20));
    }

    #[test]
    fn test_contains_requires_every_bit() {
        let flags = TestFlags::FLAG_A | TestFlags::FLAG_B;
        assert!(flags.contains(TestFlags::FLAG_A));
        assert!(flags.contains(TestFlags::FLAG_A | TestFlags::FLAG_B));
        assert!(!flags.contains(TestFlags::FLAG_A | TestFlags::FLAG_C));
    }

    #[test]
    fn test_intersects_requires_any_bit() {
        let flags = TestFlags::FLAG_A | TestFlags::FLAG_B;
        assert!(flags.intersects(TestFlags::FLAG_B | TestFlags::FLAG_C));
        assert!(!flags.intersects(TestFlags::FLAG_C | TestFlags::HIGH));
        assert!(!flags.intersects(TestFlags::EMPTY));
    }

    #[test]
    fn test_from_bits_rejects_unknown_bits() {
        assert_eq!(TestFlags::from_bits(0b101), Some(TestFlags::COMBINED_AC));
        assert_eq!(TestFlags::from_bits(1 << 8), None);
        assert_eq!(
            TestFlags::from_bits_truncate((1 << 8) | 1),
            TestFlags::FLAG_A
        );
    }

    #[test]
    fn test_not_stays_within_named_flags() {
        let inverted = !TestFlags::FLAG_A;
        assert_eq!(
            inverted,
            TestFlags::FLAG_B | TestFlags::FLAG_C | TestFlags::HIGH
        );
    }

    #[test]
    fn test_mutating_operations() {
        let mut flags = TestFlags::FLAG_A;
        flags.insert(TestFlags::FLAG_B);
        assert_eq!(flags, TestFlags::FLAG_A | TestFlags::FLAG_B);

        flags.remove(TestFlags::FLAG_A | TestFlags::HIGH);
        assert_eq!(flags, TestFlags::FLAG_B);

        flags |= TestFlags::FLAG_C;
        flags &= TestFlags::FLAG_C | TestFlags::HIGH;
        assert_eq!(flags, TestFlags::FLAG_C);

        flags ^= TestFlags::FLAG_C;
        assert!(flags.is_empty());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let base = TestFlags::FLAG_A;
        let extended = base.with(TestFlags::HIGH);
        assert_eq!(base, TestFlags::FLAG_A);
        assert_eq!(extended.bits(), 1 | (1 << 20));
    }

    #[test]
    fn test_iter_names_lists_contained_flags() {
        let names: Vec<&str> = (TestFlags::FLAG_A | TestFlags::FLAG_C)
            .iter_names()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["FLAG_A", "FLAG_C", "COMBINED_AC"]);
    }

    #[test]
    fn test_debug_formatting() {
        assert_eq!(
            format!("{:?}", TestFlags::FLAG_A | TestFlags::FLAG_C),
            "TestFlags { FLAG_A | FLAG_C }"
        );
        assert_eq!(format!("{:?}", TestFlags::HIGH), "TestFlags { HIGH }");
    }
}
