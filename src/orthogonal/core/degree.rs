//! Polynomial degree / quadrature size as a validated newtype.
//!
//! Facade operations accept any integer convertible into [`Degree`]. Signed
//! inputs are checked for negativity so that a request such as `build(-1)`
//! fails with [`PolyError::NegativeDegree`] instead of wrapping around.
//! Values beyond `usize::MAX` saturate and are then rejected by the family
//! ceiling check.
use crate::orthogonal::errors::PolyError;

/// A non-negative polynomial degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(usize);

impl Degree {
    pub const fn new(value: usize) -> Self {
        Degree(value)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! degree_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Degree {
            type Error = PolyError;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                if value < 0 {
                    return Err(PolyError::NegativeDegree { degree: value as i64 });
                }
                Ok(Degree(usize::try_from(value).unwrap_or(usize::MAX)))
            }
        }
    )*};
}

macro_rules! degree_from_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Degree {
            type Error = PolyError;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                Ok(Degree(usize::try_from(value).unwrap_or(usize::MAX)))
            }
        }
    )*};
}

degree_from_signed!(i32, i64, isize);
degree_from_unsigned!(u32, u64, usize);
