//! Pre-defined page sizes for the paper formats a carpet can be printed on.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! expressed in millimetres.
//!
//! # Example
//!
//! ```
//! use carpet::pagesize::{A4, PageOrientation};
//! use carpet::Mm;
//!
//! assert_eq!(A4, (Mm(210.0), Mm(297.0)));
//! assert_eq!(A4.landscape(), (Mm(297.0), Mm(210.0)));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

// iso a-series
pub const A3: PageSize = (Mm(297.0), Mm(420.0));
pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const A5: PageSize = (Mm(148.0), Mm(210.0));

// north american sizes (converted from inches to mm)
pub const LETTER: PageSize = (Mm(8.5 * 25.4), Mm(11.0 * 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
