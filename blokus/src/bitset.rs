/// Macro to help with defining bitset types.
///
/// The type needs a `bits` field and a `VALID_BITS` associated constant,
/// which `Not` uses to keep unused bits cleared.
macro_rules! bitset_traits {
    ($name:ident) => {
        impl std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits & rhs.bits,
                }
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits | rhs.bits,
                }
            }
        }

        impl std::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.bits &= rhs.bits;
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.bits |= rhs.bits;
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self {
                    bits: !self.bits & Self::VALID_BITS,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { bits: 0 }
            }
        }
    };
}
pub(crate) use bitset_traits;
