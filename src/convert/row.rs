use crate::{
    convert::{
        config::ConversionConfig,
        wave::{calculate_wave_params, darkness},
    },
    foundation::core::{BezPath, Point},
    raster::grid::PixelGrid,
};

/// Ordered points traced along one image row.
///
/// An empty path means the row has nothing to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowPath {
    points: Vec<Point>,
}

impl RowPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` when every point lies exactly on `baseline`.
    pub fn is_flat_at(&self, baseline: f64) -> bool {
        self.points.iter().all(|p| p.y == baseline)
    }

    /// Polyline through the points (`move_to` then `line_to`), empty for an empty row.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter().copied();
        if let Some(first) = it.next() {
            path.move_to(first);
            for p in it {
                path.line_to(p);
            }
        }
        path
    }

    fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    fn last_y(&self) -> Option<f64> {
        self.points.last().map(|p| p.y)
    }
}

/// Trace `row` of `grid` over columns `0..width`.
///
/// White pixels (`brightness >= white_threshold`) emit a baseline point only when the previously
/// emitted point is not already on the baseline; every other pixel emits
/// `(x, baseline + amplitude * sin(x * frequency_factor * 0.1))`.
///
/// `width` is clamped to the grid width. Rows past the bottom of the grid yield an empty path.
pub fn generate_row_path(
    grid: &PixelGrid,
    row: u32,
    width: u32,
    config: &ConversionConfig,
) -> RowPath {
    let Some(pixels) = grid.row(row) else {
        return RowPath::new();
    };
    let y_base = config.baseline(row);
    let mut path = RowPath {
        points: Vec::with_capacity(width.min(grid.width()) as usize),
    };

    for (x, &brightness) in (0u32..width).zip(pixels) {
        if config.is_white(brightness) {
            if path.last_y() != Some(y_base) {
                path.push(Point::new(f64::from(x), y_base));
            }
            continue;
        }

        let params = calculate_wave_params(darkness(brightness), x, row, config);
        path.push(Point::new(f64::from(x), y_base + params.offset_at(x)));
    }

    path
}

#[cfg(test)]
#[path = "../../tests/unit/convert/row.rs"]
mod tests;
