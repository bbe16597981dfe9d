//! Puts the pieces together: computes a carpet's layout, labels it and draws it.
//!
//! ```no_run
//! use carpet::CarpetConfig;
//!
//! carpet::generate_to_file(&CarpetConfig::default(), 120, "carpet.pdf").expect("can write carpet");
//! ```

use crate::config::CarpetConfig;
use crate::dimensions::{compute_grid_spec, compute_widths, GridSpec};
use crate::document::PdfSurface;
use crate::error::CarpetResult;
use crate::grid::{draw_grid, GridSummary};
use crate::info::Info;
use crate::surface::Surface;
use crate::units::Mm;
use std::path::Path;
use tracing::info;

/// A fully laid out carpet, ready to be drawn
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Carpet {
    pub type_value: i64,
    pub spec: GridSpec,
}

impl Carpet {
    /// Work out the grid for a carpet type on the configured page
    pub fn new(config: &CarpetConfig, type_value: i64) -> CarpetResult<Carpet> {
        let widths = compute_widths(config, type_value)?;
        let spec = compute_grid_spec(config, widths)?;

        info!(
            type_value,
            bold_width = spec.bold_width,
            cell_width = spec.cell_width,
            vertical_margin = spec.vertical_margin,
            horizontal_margin = spec.horizontal_margin,
            "computed carpet layout"
        );

        Ok(Carpet { type_value, spec })
    }

    /// The text printed above the top-left corner of the grid
    pub fn label(&self) -> String {
        self.type_value.to_string()
    }

    /// Where the label's baseline starts: at the left margin, just above the top margin
    pub fn label_position(&self, config: &CarpetConfig) -> (Mm, Mm) {
        (
            Mm(self.spec.vertical_margin),
            Mm(self.spec.horizontal_margin) - config.label_offset,
        )
    }

    /// Draw the label, then every vertical line, then every horizontal line
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, config: &CarpetConfig) -> GridSummary {
        surface.text(self.label_position(config), &self.label());
        draw_grid(surface, config, &self.spec)
    }
}

/// Lay out and draw a carpet onto a fresh PDF page, without saving it anywhere
pub fn generate(config: &CarpetConfig, type_value: i64) -> CarpetResult<PdfSurface> {
    let carpet = Carpet::new(config, type_value)?;

    let mut pdf = PdfSurface::new(config.page_size, config.label_font_size);
    pdf.set_info(Info::for_carpet(&carpet));
    let summary = carpet.draw(&mut pdf, config);

    info!(
        vertical_lines = summary.vertical.lines,
        horizontal_lines = summary.horizontal.lines,
        "drew carpet"
    );

    Ok(pdf)
}

/// Lay out and draw a carpet, then save it as a PDF at `path`.
/// The file is only created once the layout has been computed successfully.
pub fn generate_to_file<P: AsRef<Path>>(
    config: &CarpetConfig,
    type_value: i64,
    path: P,
) -> CarpetResult<()> {
    let pdf = generate(config, type_value)?;
    pdf.save(path.as_ref())?;
    info!(path = %path.as_ref().display(), "saved carpet");
    Ok(())
}
