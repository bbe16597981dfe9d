//! Length units used by the drawing surface.
//!
//! Layout is computed in millimetres ([`Mm`]) while PDF content streams are
//! expressed in points ([`Pt`], 1/72 of an inch).

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Mul, Sub};

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;
/// Points per inch
pub const PT_PER_INCH: f64 = 72.0;

/// A length in millimetres
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Mul, Deref, Display, From, Into,
)]
#[display("{_0}mm")]
pub struct Mm(pub f64);

/// A length in PDF points
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Mul, Deref, Display, From, Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt((mm.0 * PT_PER_INCH / MM_PER_INCH) as f32)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 as f64 * MM_PER_INCH / PT_PER_INCH)
    }
}
