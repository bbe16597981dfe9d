use crate::units::Mm;

/// A point on the page, in millimetres from the top-left corner
pub type Point = (Mm, Mm);

/// Something a carpet can be drawn onto.
///
/// Coordinates are in millimetres with the origin at the top-left corner of
/// the page and y growing downward. Calls must be applied in the order they
/// are made: the stroke width set by [`Surface::set_line_width`] applies to
/// every following [`Surface::line`] until it is changed again.
pub trait Surface {
    /// Set the stroke width for subsequent lines
    fn set_line_width(&mut self, width: Mm);

    /// Draw a straight line segment between two points
    fn line(&mut self, from: Point, to: Point);

    /// Draw a single line of text with its baseline starting at `at`
    fn text(&mut self, at: Point, text: &str);
}

/// A single call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    LineWidth(Mm),
    Line { from: Point, to: Point },
    Text { at: Point, text: String },
}

/// A [`Surface`] that draws nothing and remembers every call made to it, in order.
/// Useful for dry runs and for inspecting what a renderer would have drawn.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    /// All recorded line segments, paired with the stroke width they were drawn with
    pub fn lines(&self) -> Vec<(Mm, Point, Point)> {
        let mut width = Mm(0.0);
        let mut lines = Vec::new();
        for call in self.calls.iter() {
            match call {
                SurfaceCall::LineWidth(w) => width = *w,
                SurfaceCall::Line { from, to } => lines.push((width, *from, *to)),
                SurfaceCall::Text { .. } => {}
            }
        }
        lines
    }
}

impl Surface for RecordingSurface {
    fn set_line_width(&mut self, width: Mm) {
        self.calls.push(SurfaceCall::LineWidth(width));
    }

    fn line(&mut self, from: Point, to: Point) {
        self.calls.push(SurfaceCall::Line { from, to });
    }

    fn text(&mut self, at: Point, text: &str) {
        self.calls.push(SurfaceCall::Text {
            at,
            text: text.to_string(),
        });
    }
}
