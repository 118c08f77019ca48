//! Strongly typed, zero-cost identifier wrappers.
//!
//! Catalog entries and analysis sessions are addressed by small integers;
//! the wrappers keep the two from being mixed up at call sites.  The inner
//! value is `pub` so stores can index parallel `Vec`s directly.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a catalog or query image.
    pub struct ImageId;
}

typed_id! {
    /// Identifier of one analysis session (a single query-and-rank run).
    pub struct SessionId;
}
