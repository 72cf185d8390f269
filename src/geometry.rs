/// Grid geometry: column params, height policies and the flow layout pass.
/// Units are whatever the host measures its container in.
use tracing::trace;

use crate::error::{GridError, Result};

/// Column count plus the horizontal insets and spacing of a grid section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricParams {
    cell_count: usize,
    left_inset: f64,
    right_inset: f64,
    cell_spacing: f64,
}

impl GeometricParams {
    pub fn new(
        cell_count: usize,
        left_inset: f64,
        right_inset: f64,
        cell_spacing: f64,
    ) -> Result<Self> {
        if cell_count == 0 {
            return Err(GridError::invalid("cell_count", "must be at least 1"));
        }
        check_length("left_inset", left_inset)?;
        check_length("right_inset", right_inset)?;
        check_length("cell_spacing", cell_spacing)?;
        Ok(Self {
            cell_count,
            left_inset,
            right_inset,
            cell_spacing,
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn left_inset(&self) -> f64 {
        self.left_inset
    }

    pub fn right_inset(&self) -> f64 {
        self.right_inset
    }

    pub fn cell_spacing(&self) -> f64 {
        self.cell_spacing
    }

    /// Total horizontal space not available to cells: both insets plus the
    /// gaps between columns.
    pub fn padding_width(&self) -> f64 {
        self.left_inset + self.right_inset + self.cell_spacing * (self.cell_count - 1) as f64
    }

    /// Width of a single cell in a container `available_width` wide.
    ///
    /// Clamps to zero when the container is narrower than the padding.
    pub fn cell_width(&self, available_width: f64) -> f64 {
        ((available_width - self.padding_width()) / self.cell_count as f64).max(0.0)
    }

    pub fn cell_size(&self, available_width: f64, aspect_ratio: f64) -> CellSize {
        let width = self.cell_width(available_width);
        CellSize {
            width,
            height: width * aspect_ratio,
        }
    }
}

fn check_length(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GridError::invalid(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(GridError::invalid(field, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

/// Position and size of one item, relative to the container's top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellFrame {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Supplies the height-to-width ratio for the item at a given position.
pub trait HeightPolicy {
    fn aspect_ratio(&self, index: usize) -> f64;
}

impl<F> HeightPolicy for F
where
    F: Fn(usize) -> f64,
{
    fn aspect_ratio(&self, index: usize) -> f64 {
        self(index)
    }
}

/// Every item gets the same ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAspect(pub f64);

impl Default for FixedAspect {
    fn default() -> Self {
        Self(2.0 / 3.0)
    }
}

impl HeightPolicy for FixedAspect {
    fn aspect_ratio(&self, _index: usize) -> f64 {
        self.0
    }
}

/// Repeating pattern of six: the first three positions are tall, the next
/// three short. With three columns this yields alternating row heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlternatingAspect {
    pub tall: f64,
    pub short: f64,
}

impl Default for AlternatingAspect {
    fn default() -> Self {
        Self {
            tall: 2.0 / 3.0,
            short: 1.0 / 3.0,
        }
    }
}

impl HeightPolicy for AlternatingAspect {
    fn aspect_ratio(&self, index: usize) -> f64 {
        if index % 6 < 3 { self.tall } else { self.short }
    }
}

/// Vertical section insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionInsets {
    pub top: f64,
    pub bottom: f64,
}

impl Default for SectionInsets {
    fn default() -> Self {
        Self {
            top: 10.0,
            bottom: 10.0,
        }
    }
}

/// Row-major flow layout over a single section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    params: GeometricParams,
    insets: SectionInsets,
    line_spacing: f64,
}

impl GridLayout {
    pub fn new(params: GeometricParams, insets: SectionInsets, line_spacing: f64) -> Result<Self> {
        check_length("top_inset", insets.top)?;
        check_length("bottom_inset", insets.bottom)?;
        check_length("line_spacing", line_spacing)?;
        Ok(Self {
            params,
            insets,
            line_spacing,
        })
    }

    pub fn params(&self) -> &GeometricParams {
        &self.params
    }

    pub fn insets(&self) -> SectionInsets {
        self.insets
    }

    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    /// Frames for `count` items laid out in a container `width` wide.
    ///
    /// Each row is as tall as its tallest cell; cells in shorter rows keep
    /// their own height and sit at the row's top edge.
    pub fn frames(&self, count: usize, width: f64, policy: &dyn HeightPolicy) -> Vec<CellFrame> {
        let columns = self.params.cell_count();
        let cell_width = self.params.cell_width(width);
        let stride = cell_width + self.params.cell_spacing();

        let mut frames = Vec::new();
        let mut row_top = self.insets.top;
        for row_start in (0..count).step_by(columns) {
            let row_end = (row_start + columns).min(count);
            let mut row_height: f64 = 0.0;
            for index in row_start..row_end {
                let column = index - row_start;
                let height = cell_width * policy.aspect_ratio(index);
                row_height = row_height.max(height);
                frames.push(CellFrame {
                    x: self.params.left_inset() + column as f64 * stride,
                    y: row_top,
                    width: cell_width,
                    height,
                });
            }
            row_top += row_height + self.line_spacing;
        }
        trace!(count, width, cell_width, "laid out grid");
        frames
    }

    /// Height needed to show `count` items including both section insets.
    pub fn content_height(&self, count: usize, width: f64, policy: &dyn HeightPolicy) -> f64 {
        let frames = self.frames(count, width, policy);
        let rows_bottom = frames
            .iter()
            .map(CellFrame::bottom)
            .fold(self.insets.top, f64::max);
        rows_bottom + self.insets.bottom
    }

    /// Row and column of the item at `index`.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        let columns = self.params.cell_count();
        (index / columns, index % columns)
    }
}
