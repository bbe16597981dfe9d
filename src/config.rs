use crate::pagesize::{self, PageSize};
use crate::units::Mm;

/// Everything the layout calculator and the renderer need to know about the
/// page they're drawing on. Built once and handed around by reference; use the
/// `with_*` helpers to derive alternate configurations.
#[derive(Debug, Clone, PartialEq)]
pub struct CarpetConfig {
    /// The page size, in portrait or landscape orientation
    pub page_size: PageSize,
    /// The smallest allowed margin on the left and right of the page
    pub min_vertical_margin: Mm,
    /// The smallest allowed margin on the top and bottom of the page
    pub min_horizontal_margin: Mm,
    /// Stroke width of every tenth line
    pub bold_line_width: Mm,
    /// Stroke width of all other lines
    pub line_width: Mm,
    /// Converts a carpet type into a bold cell width: `factor - type / 10`
    pub conversion_factor: f64,
    /// How close to an exact multiple a page extent must be to count as evenly tiled
    pub tolerance: f64,
    /// Font size of the type label, in points
    pub label_font_size: f32,
    /// How far above the top of the grid the type label's baseline sits
    pub label_offset: Mm,
}

impl Default for CarpetConfig {
    fn default() -> Self {
        CarpetConfig {
            page_size: pagesize::A4,
            min_vertical_margin: Mm(5.0),
            min_horizontal_margin: Mm(8.0),
            bold_line_width: Mm(0.5),
            line_width: Mm(0.2),
            conversion_factor: 32.0,
            tolerance: 1e-6,
            label_font_size: 8.0,
            label_offset: Mm(2.0),
        }
    }
}

impl CarpetConfig {
    /// Page width in millimetres
    pub fn page_width(&self) -> f64 {
        *self.page_size.0
    }

    /// Page height in millimetres
    pub fn page_height(&self) -> f64 {
        *self.page_size.1
    }

    /// Returns a copy of this configuration drawing on a different page size
    pub fn with_page_size(&self, page_size: PageSize) -> CarpetConfig {
        CarpetConfig {
            page_size,
            ..self.clone()
        }
    }

    /// Returns a copy of this configuration with different minimum margins
    pub fn with_min_margins(&self, vertical: Mm, horizontal: Mm) -> CarpetConfig {
        CarpetConfig {
            min_vertical_margin: vertical,
            min_horizontal_margin: horizontal,
            ..self.clone()
        }
    }
}
