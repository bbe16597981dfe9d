//! Draws the lines of a carpet grid, one axis at a time.

use crate::config::CarpetConfig;
use crate::dimensions::{truncate, GridSpec};
use crate::surface::Surface;
use crate::units::Mm;
use tracing::{debug, trace};

/// Which set of grid lines to draw
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Lines running from the top of the grid to the bottom, stepping left to right
    Vertical,
    /// Lines running from the left of the grid to the right, stepping top to bottom
    Horizontal,
}

/// How heavy a grid line is drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineWeight {
    Bold,
    Normal,
}

impl LineWeight {
    /// Every tenth line is bold, starting with the first
    pub fn for_index(index: usize) -> LineWeight {
        if index % 10 == 0 {
            LineWeight::Bold
        } else {
            LineWeight::Normal
        }
    }

    /// The stroke width configured for this weight
    pub fn stroke_width(self, config: &CarpetConfig) -> Mm {
        match self {
            LineWeight::Bold => config.bold_line_width,
            LineWeight::Normal => config.line_width,
        }
    }
}

/// Everything needed to draw the lines of a single axis. All lengths are in millimetres.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisLineJob {
    pub bold_width: f64,
    pub cell_width: f64,
    /// Position of the first line along the drawn axis
    pub start_offset: f64,
    /// Where each line starts on the perpendicular axis
    pub cross_margin: f64,
    /// Lines are drawn at positions up to and including this one
    pub axis_extent: f64,
    /// Where each line stops on the perpendicular axis
    pub cross_extent: f64,
}

impl GridSpec {
    /// Build the line job for one axis of this grid
    pub fn axis_job(&self, axis: Axis) -> AxisLineJob {
        match axis {
            Axis::Vertical => AxisLineJob {
                bold_width: self.bold_width,
                cell_width: self.cell_width,
                start_offset: self.vertical_margin,
                cross_margin: self.horizontal_margin,
                axis_extent: self.max_width,
                cross_extent: self.max_height,
            },
            Axis::Horizontal => AxisLineJob {
                bold_width: self.bold_width,
                cell_width: self.cell_width,
                start_offset: self.horizontal_margin,
                cross_margin: self.vertical_margin,
                axis_extent: self.max_height,
                cross_extent: self.max_width,
            },
        }
    }
}

/// How many lines were drawn for an axis
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AxisSummary {
    pub lines: usize,
    pub bold_lines: usize,
}

/// How many lines were drawn for a whole grid
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GridSummary {
    pub vertical: AxisSummary,
    pub horizontal: AxisSummary,
}

/// Draws every line of one axis onto the surface.
///
/// Positions start at `job.start_offset` and advance by `job.cell_width`, each
/// step truncated to two decimal places, for as long as they stay within
/// `job.axis_extent` (give or take `config.tolerance`). Every line is preceded
/// by exactly one line width change.
pub fn draw_axis<S: Surface + ?Sized>(
    surface: &mut S,
    config: &CarpetConfig,
    axis: Axis,
    job: &AxisLineJob,
) -> AxisSummary {
    let mut summary = AxisSummary::default();

    if !job.cell_width.is_finite() || job.cell_width <= 0.0 {
        debug!(?axis, cell_width = job.cell_width, "nothing to draw");
        return summary;
    }

    let mut i = job.start_offset;
    while i <= job.axis_extent + config.tolerance {
        let weight = LineWeight::for_index(summary.lines);
        surface.set_line_width(weight.stroke_width(config));

        let (from, to) = match axis {
            Axis::Vertical => ((Mm(i), Mm(job.cross_margin)), (Mm(i), Mm(job.cross_extent))),
            Axis::Horizontal => ((Mm(job.cross_margin), Mm(i)), (Mm(job.cross_extent), Mm(i))),
        };
        trace!(?axis, ?weight, position = i, "line");
        surface.line(from, to);

        summary.lines += 1;
        if weight == LineWeight::Bold {
            summary.bold_lines += 1;
        }

        i = next_position(i, job.cell_width, config.tolerance);
    }

    debug!(
        ?axis,
        lines = summary.lines,
        bold_lines = summary.bold_lines,
        bold_width = job.bold_width,
        "drew axis"
    );
    summary
}

/// The position one cell after `position`, truncated to two decimal places.
///
/// `tolerance` is added before truncating so a sum that lands a float error
/// short of a hundredth (`5.02 + 0.01 == 5.029999…`) still reaches it. Cells
/// narrower than a hundredth advance to the next hundredth.
pub fn next_position(position: f64, cell_width: f64, tolerance: f64) -> f64 {
    let next = truncate(position + cell_width + tolerance);
    if next > position {
        next
    } else {
        (((position + tolerance) * 100.0).trunc() + 1.0) / 100.0
    }
}

/// Draws the vertical lines of a grid, then the horizontal ones
pub fn draw_grid<S: Surface + ?Sized>(
    surface: &mut S,
    config: &CarpetConfig,
    spec: &GridSpec,
) -> GridSummary {
    let vertical = draw_axis(surface, config, Axis::Vertical, &spec.axis_job(Axis::Vertical));
    let horizontal = draw_axis(
        surface,
        config,
        Axis::Horizontal,
        &spec.axis_job(Axis::Horizontal),
    );
    GridSummary {
        vertical,
        horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{compute_grid_spec, compute_widths};
    use crate::surface::{RecordingSurface, SurfaceCall};

    fn spec_for(type_value: i64) -> GridSpec {
        let config = CarpetConfig::default();
        let widths = compute_widths(&config, type_value).unwrap();
        compute_grid_spec(&config, widths).unwrap()
    }

    #[test]
    fn weights_repeat_every_ten_lines() {
        let weights: Vec<LineWeight> = (0..21).map(LineWeight::for_index).collect();
        for (i, weight) in weights.iter().enumerate() {
            let expected = if i == 0 || i == 10 || i == 20 {
                LineWeight::Bold
            } else {
                LineWeight::Normal
            };
            assert_eq!(*weight, expected, "line {i}");
        }
    }

    #[test]
    fn axis_jobs_swap_margins_and_extents() {
        let spec = spec_for(120);

        let vertical = spec.axis_job(Axis::Vertical);
        assert_eq!(vertical.start_offset, 5.0);
        assert_eq!(vertical.cross_margin, 8.5);
        assert_eq!(vertical.axis_extent, 205.0);
        assert_eq!(vertical.cross_extent, 288.5);

        let horizontal = spec.axis_job(Axis::Horizontal);
        assert_eq!(horizontal.start_offset, 8.5);
        assert_eq!(horizontal.cross_margin, 5.0);
        assert_eq!(horizontal.axis_extent, 288.5);
        assert_eq!(horizontal.cross_extent, 205.0);
    }

    #[test]
    fn vertical_lines_for_type_120() {
        let config = CarpetConfig::default();
        let spec = spec_for(120);
        let mut surface = RecordingSurface::new();

        let summary = draw_axis(
            &mut surface,
            &config,
            Axis::Vertical,
            &spec.axis_job(Axis::Vertical),
        );
        assert_eq!(
            summary,
            AxisSummary {
                lines: 101,
                bold_lines: 11
            }
        );

        let lines = surface.lines();
        assert_eq!(lines.len(), 101);
        assert_eq!(
            lines[0],
            (Mm(0.5), (Mm(5.0), Mm(8.5)), (Mm(5.0), Mm(288.5)))
        );
        assert_eq!(
            lines[1],
            (Mm(0.2), (Mm(7.0), Mm(8.5)), (Mm(7.0), Mm(288.5)))
        );
        assert_eq!(lines[10].0, Mm(0.5));
        assert_eq!((lines[10].1).0, Mm(25.0));
        assert_eq!(
            lines[100],
            (Mm(0.5), (Mm(205.0), Mm(8.5)), (Mm(205.0), Mm(288.5)))
        );
    }

    #[test]
    fn horizontal_lines_for_type_120() {
        let config = CarpetConfig::default();
        let spec = spec_for(120);
        let mut surface = RecordingSurface::new();

        let summary = draw_axis(
            &mut surface,
            &config,
            Axis::Horizontal,
            &spec.axis_job(Axis::Horizontal),
        );
        assert_eq!(summary.lines, 141);
        assert_eq!(summary.bold_lines, 15);

        let lines = surface.lines();
        assert_eq!(
            lines[0],
            (Mm(0.5), (Mm(5.0), Mm(8.5)), (Mm(205.0), Mm(8.5)))
        );
        assert_eq!(
            lines[140],
            (Mm(0.5), (Mm(5.0), Mm(288.5)), (Mm(205.0), Mm(288.5)))
        );
    }

    #[test]
    fn every_line_has_its_own_width_call() {
        let config = CarpetConfig::default();
        let spec = spec_for(120);
        let mut surface = RecordingSurface::new();
        draw_axis(
            &mut surface,
            &config,
            Axis::Vertical,
            &spec.axis_job(Axis::Vertical),
        );

        for pair in surface.calls.chunks(2) {
            assert!(matches!(pair[0], SurfaceCall::LineWidth(_)));
            assert!(matches!(pair[1], SurfaceCall::Line { .. }));
        }
    }

    #[test]
    fn drawing_is_deterministic() {
        let config = CarpetConfig::default();
        for type_value in [120, 140, 173, 250] {
            let spec = spec_for(type_value);
            let mut first = RecordingSurface::new();
            let mut second = RecordingSurface::new();
            draw_grid(&mut first, &config, &spec);
            draw_grid(&mut second, &config, &spec);
            assert_eq!(first, second, "type {type_value}");
        }
    }

    #[test]
    fn lines_never_leave_the_grid() {
        let config = CarpetConfig::default();
        for type_value in [100, 140, 160, 199, 300] {
            let spec = spec_for(type_value);
            let mut surface = RecordingSurface::new();
            let summary = draw_grid(&mut surface, &config, &spec);
            assert!(summary.vertical.lines > 0 && summary.horizontal.lines > 0);

            for (_, from, to) in surface.lines() {
                for (x, y) in [from, to] {
                    assert!(*x >= spec.vertical_margin);
                    assert!(*x <= spec.max_width + config.tolerance);
                    assert!(*y >= spec.horizontal_margin);
                    assert!(*y <= spec.max_height + config.tolerance);
                }
            }
        }
    }

    #[test]
    fn tiny_cells_still_terminate() {
        let config = CarpetConfig::default();
        let job = AxisLineJob {
            bold_width: 0.1,
            cell_width: 0.01,
            start_offset: 5.0,
            cross_margin: 8.0,
            axis_extent: 6.0,
            cross_extent: 289.0,
        };
        let mut surface = RecordingSurface::new();
        let summary = draw_axis(&mut surface, &config, Axis::Vertical, &job);
        assert_eq!(summary.lines, 101);
        assert_eq!(summary.bold_lines, 11);
    }

    #[test]
    fn next_position_lands_on_hundredths() {
        assert_eq!(next_position(5.02, 0.01, 1e-6), 5.03);
        assert_eq!(next_position(8.5, 2.0, 1e-6), 10.5);
        assert_eq!(next_position(6.8, 1.8, 1e-6), 8.6);
        // cells narrower than a hundredth still move forward
        assert_eq!(next_position(5.0, 0.001, 1e-6), 5.01);
    }

    #[test]
    fn hundredth_cells_step_one_cell_at_a_time() {
        let config = CarpetConfig::default();
        let spec = spec_for(319);
        assert_eq!(spec.cell_width, 0.01);

        for (axis, expected) in [(Axis::Vertical, 20_001), (Axis::Horizontal, 28_101)] {
            let job = spec.axis_job(axis);
            let mut surface = RecordingSurface::new();
            let summary = draw_axis(&mut surface, &config, axis, &job);
            assert_eq!(summary.lines, expected, "{axis:?}");

            let positions: Vec<f64> = surface
                .lines()
                .iter()
                .map(|(_, from, _)| match axis {
                    Axis::Vertical => *from.0,
                    Axis::Horizontal => *from.1,
                })
                .collect();
            for pair in positions.windows(2) {
                assert!(
                    (pair[1] - pair[0] - 0.01).abs() < 1e-9,
                    "{axis:?}: {} follows {}",
                    pair[1],
                    pair[0]
                );
            }

            let tenth = surface.lines()[10];
            assert_eq!(tenth.0, config.bold_line_width);
            let tenth_position = match axis {
                Axis::Vertical => *(tenth.1).0,
                Axis::Horizontal => *(tenth.1).1,
            };
            assert!((tenth_position - (job.start_offset + 0.1)).abs() < 1e-9);
        }
    }

    #[test]
    fn float_noise_in_margins_keeps_the_last_line() {
        let config = CarpetConfig::default();
        let spec = spec_for(101);
        let mut surface = RecordingSurface::new();
        let summary = draw_grid(&mut surface, &config, &spec);

        // 21.9mm bold cells: 9 across and 12 down
        assert_eq!(summary.vertical.lines, 91);
        assert_eq!(summary.vertical.bold_lines, 10);
        assert_eq!(summary.horizontal.lines, 121);
        assert_eq!(summary.horizontal.bold_lines, 13);
    }

    #[test]
    fn degenerate_cell_width_draws_nothing() {
        let config = CarpetConfig::default();
        let mut job = spec_for(120).axis_job(Axis::Vertical);
        job.cell_width = 0.0;
        let mut surface = RecordingSurface::new();
        assert_eq!(
            draw_axis(&mut surface, &config, Axis::Vertical, &job),
            AxisSummary::default()
        );
        assert!(surface.calls.is_empty());
    }
}
