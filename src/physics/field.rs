/// A point charge on the sandbox canvas.
///
/// Position is in canvas units; `q` is the signed magnitude in nanocoulombs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    pub x: f64,
    pub y: f64,
    pub q: f64,
}

impl PointCharge {
    pub fn new(x: f64, y: f64, q: f64) -> Self {
        Self { x, y, q }
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    pub fn is_positive(&self) -> bool {
        self.q > 0.0
    }
}

/// Field direction sample at a grid point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldArrow {
    pub x: f64,
    pub y: f64,
    pub fx: f64,
    pub fy: f64,
    /// `atan2(fy, fx)` in radians, canvas orientation (y grows downwards)
    pub angle: f64,
}

impl FieldArrow {
    pub fn is_finite(&self) -> bool {
        self.angle.is_finite()
    }
}

/// Regular sampling grid over the canvas, excluding the tray strip at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGrid {
    pub width: f64,
    pub height: f64,
    pub spacing: f64,
    pub tray_margin: f64,
}

impl FieldGrid {
    pub fn new(width: f64, height: f64, spacing: f64, tray_margin: f64) -> Self {
        Self { width, height, spacing, tray_margin }
    }

    /// Grid points start half a cell in from the top-left corner.
    pub fn sample_points(&self) -> Vec<(f64, f64)> {
        if self.spacing <= 0.0 || !self.spacing.is_finite() {
            return Vec::new();
        }
        let bottom = self.height - self.tray_margin;
        let mut points = Vec::new();
        let mut row = 0usize;
        loop {
            let y = self.spacing / 2.0 + row as f64 * self.spacing;
            if y >= bottom {
                break;
            }
            let mut col = 0usize;
            loop {
                let x = self.spacing / 2.0 + col as f64 * self.spacing;
                if x >= self.width {
                    break;
                }
                points.push((x, y));
                col += 1;
            }
            row += 1;
        }
        points
    }
}

/// Summed field vector at `(x, y)` from every charge.
///
/// Each charge contributes `q / d²` along the unit-ish direction
/// `(dx, dy) / (d + 1)`. The `+ 1` keeps the direction term finite near a
/// charge but biases short-range magnitudes; arrows only show direction so
/// the bias is kept. A sample landing exactly on a charge yields NaN.
pub fn field_at(charges: &[PointCharge], x: f64, y: f64) -> (f64, f64) {
    let mut fx = 0.0;
    let mut fy = 0.0;
    for c in charges {
        let dx = x - c.x;
        let dy = y - c.y;
        let d2 = dx * dx + dy * dy;
        let mag = c.q / d2;
        let norm = d2.sqrt() + 1.0;
        fx += mag * dx / norm;
        fy += mag * dy / norm;
    }
    (fx, fy)
}

/// Recompute the whole arrow grid. O(grid points × charges), no caching.
pub fn sample_field(grid: &FieldGrid, charges: &[PointCharge]) -> Vec<FieldArrow> {
    grid.sample_points()
        .into_iter()
        .map(|(x, y)| {
            let (fx, fy) = field_at(charges, x, y);
            FieldArrow { x, y, fx, fy, angle: fy.atan2(fx) }
        })
        .collect()
}
