//! Converts a carpet type into cell widths and works out margins that let the
//! grid tile the page evenly.
//!
//! Every bold cell holds 10 × 10 normal cells. The bold cell width is derived
//! from the carpet type (`120 → 20mm`, `140 → 18mm`, `160 → 16mm`, `180 → 14mm`,
//! `200 → 12mm`) and the margins are then nudged so a whole number of bold cells
//! fits between them.
//!
//! ```
//! use carpet::{compute_grid_spec, compute_widths, CarpetConfig};
//!
//! let config = CarpetConfig::default();
//! let widths = compute_widths(&config, 120).expect("type 120 is valid");
//! let spec = compute_grid_spec(&config, widths).expect("A4 can be tiled");
//!
//! assert_eq!(spec.bold_width, 20.0);
//! assert_eq!(spec.vertical_margin, 5.0);
//! assert_eq!(spec.horizontal_margin, 8.5);
//! ```

use crate::config::CarpetConfig;
use crate::error::{CarpetError, CarpetResult};

/// The two cell widths of a carpet, in millimetres
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellWidths {
    /// Width of one bold (major) cell
    pub bold_width: f64,
    /// Width of one normal (minor) cell, a tenth of the bold cell
    pub cell_width: f64,
}

/// The computed layout of a carpet grid on its page. All lengths are in millimetres.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridSpec {
    pub bold_width: f64,
    pub cell_width: f64,
    /// Margin on the left and right of the page
    pub vertical_margin: f64,
    /// Margin on the top and bottom of the page
    pub horizontal_margin: f64,
    /// Position of the last vertical line
    pub max_width: f64,
    /// Position of the last horizontal line
    pub max_height: f64,
}

/// Quantizes a length to two decimal places, truncating toward zero.
///
/// This never rounds: `1.239` becomes `1.23` and `-1.239` becomes `-1.23`.
pub fn truncate(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Calculates the bold and normal cell widths for a carpet type.
///
/// Fails with [`CarpetError::InvalidType`] when the type would produce a bold
/// cell that is zero or negative in width, i.e. whenever
/// `type_value >= 10 * config.conversion_factor`.
pub fn compute_widths(config: &CarpetConfig, type_value: i64) -> CarpetResult<CellWidths> {
    let bold_width = truncate(config.conversion_factor - type_value as f64 / 10.0);

    if bold_width <= 0.0 {
        return Err(CarpetError::InvalidType {
            type_value,
            bold_width,
        });
    }

    Ok(CellWidths {
        bold_width,
        cell_width: bold_width / 10.0,
    })
}

/// Whether `value` is a whole multiple of `step`, within `tolerance`.
///
/// `%` on an exact multiple may land just under `step` rather than at zero,
/// so both ends of the range count.
pub fn is_multiple(value: f64, step: f64, tolerance: f64) -> bool {
    let rest = (value % step).abs();
    rest <= tolerance || step - rest <= tolerance
}

/// Finds the smallest margin no smaller than `min_margin` for which
/// `page_extent - 2 * margin` is a multiple of `step`.
///
/// Only two candidates are ever tried: `min_margin` itself, and `min_margin`
/// grown by half of the remainder left over by the first. If neither tiles the
/// page, [`CarpetError::InvalidMargin`] is returned.
pub fn compute_margin(
    step: f64,
    page_extent: f64,
    min_margin: f64,
    tolerance: f64,
) -> CarpetResult<f64> {
    let invalid = || CarpetError::InvalidMargin {
        extent: page_extent,
        step,
        min_margin,
    };

    if !step.is_finite() || step <= 0.0 {
        return Err(invalid());
    }

    let available = page_extent - 2.0 * min_margin;
    if !available.is_finite() || available < 0.0 {
        return Err(invalid());
    }

    if is_multiple(available, step, tolerance) {
        return Ok(min_margin);
    }

    let rest = available % step;
    let margin = min_margin + rest / 2.0;

    if is_multiple(page_extent - 2.0 * margin, step, tolerance) {
        return Ok(margin);
    }

    Err(invalid())
}

/// Computes margins for both page axes and the resulting drawing extents.
///
/// The vertical margin tiles the page width, the horizontal margin tiles the
/// page height; the first axis that cannot be tiled aborts the computation.
pub fn compute_grid_spec(config: &CarpetConfig, widths: CellWidths) -> CarpetResult<GridSpec> {
    let page_width = config.page_width();
    let page_height = config.page_height();

    let vertical_margin = compute_margin(
        widths.bold_width,
        page_width,
        *config.min_vertical_margin,
        config.tolerance,
    )?;
    let horizontal_margin = compute_margin(
        widths.bold_width,
        page_height,
        *config.min_horizontal_margin,
        config.tolerance,
    )?;

    Ok(GridSpec {
        bold_width: widths.bold_width,
        cell_width: widths.cell_width,
        vertical_margin,
        horizontal_margin,
        max_width: page_width - vertical_margin,
        max_height: page_height - horizontal_margin,
    })
}
