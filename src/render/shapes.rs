use crate::foundation::core::{Canvas, Rgba8};

fn default_outline_width() -> u32 {
    1
}

/// Filled (and optionally outlined) rounded rectangle with inclusive pixel bounds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedRectSpec {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge (inclusive).
    pub x1: i32,
    /// Bottom edge (inclusive).
    pub y1: i32,
    /// Corner radius; clamped to half the shorter side when drawn.
    pub radius: u32,
    /// Interior color.
    pub fill: Rgba8,
    /// Outline color; no outline when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Rgba8>,
    /// Outline width in pixels.
    #[serde(default = "default_outline_width")]
    pub outline_width: u32,
}

impl RoundedRectSpec {
    /// Rounded rectangle over `[x0, y0, x1, y1]` without an outline.
    pub fn new(bounds: [i32; 4], radius: u32, fill: Rgba8) -> Self {
        let [x0, y0, x1, y1] = bounds;
        Self {
            x0,
            y0,
            x1,
            y1,
            radius,
            fill,
            outline: None,
            outline_width: 1,
        }
    }

    /// Same rectangle with an outline stroked inside its boundary.
    pub fn outline(mut self, color: Rgba8, width: u32) -> Self {
        self.outline = Some(color);
        self.outline_width = width;
        self
    }

    /// Geometry after the clamp policy: corners ordered, radius at most half the shorter side.
    pub fn geometry(&self) -> RoundedGeom {
        let (x0, x1) = ordered(self.x0, self.x1);
        let (y0, y1) = ordered(self.y0, self.y1);
        let half_min = (x1 - x0).min(y1 - y0) / 2;
        RoundedGeom {
            x0,
            y0,
            x1,
            y1,
            r: i64::from(self.radius).min(half_min),
        }
    }
}

/// Normalized rounded-rectangle geometry used for per-pixel membership tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundedGeom {
    /// Left edge.
    pub x0: i64,
    /// Top edge.
    pub y0: i64,
    /// Right edge (inclusive).
    pub x1: i64,
    /// Bottom edge (inclusive).
    pub y1: i64,
    /// Effective corner radius.
    pub r: i64,
}

impl RoundedGeom {
    /// Whether pixel `(x, y)` lies inside the rounded boundary.
    ///
    /// Corner cutouts are the parts of the box outside a quarter circle of radius `r` centred
    /// `r` pixels in from both adjacent edges.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return false;
        }
        let r = self.r;
        if r == 0 {
            return true;
        }
        let cx = if x < self.x0 + r {
            self.x0 + r
        } else if x > self.x1 - r {
            self.x1 - r
        } else {
            return true;
        };
        let cy = if y < self.y0 + r {
            self.y0 + r
        } else if y > self.y1 - r {
            self.y1 - r
        } else {
            return true;
        };
        let (dx, dy) = (x - cx, y - cy);
        dx * dx + dy * dy <= r * r
    }

    /// Geometry shrunk by `by` pixels on every side, or `None` when nothing is left.
    pub fn inset(&self, by: i64) -> Option<Self> {
        let g = Self {
            x0: self.x0 + by,
            y0: self.y0 + by,
            x1: self.x1 - by,
            y1: self.y1 - by,
            r: (self.r - by).max(0),
        };
        (g.x0 <= g.x1 && g.y0 <= g.y1).then_some(g)
    }
}

/// Filled axis-aligned ellipse inscribed in inclusive bounds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EllipseSpec {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge (inclusive).
    pub x1: i32,
    /// Bottom edge (inclusive).
    pub y1: i32,
    /// Fill color.
    pub fill: Rgba8,
}

impl EllipseSpec {
    /// Ellipse inscribed in `[x0, y0, x1, y1]`.
    pub fn new(bounds: [i32; 4], fill: Rgba8) -> Self {
        let [x0, y0, x1, y1] = bounds;
        Self {
            x0,
            y0,
            x1,
            y1,
            fill,
        }
    }
}

/// Paint a rounded rectangle, then stroke its outline ring over the fill.
///
/// Pixels in the corner cutouts are never touched. The outline occupies the `outline_width`
/// innermost pixels of the boundary and is blended over the already painted fill, so a
/// translucent outline mixes with the fill color.
pub fn draw_rounded_rect(canvas: &mut Canvas, spec: &RoundedRectSpec) {
    let outer = spec.geometry();
    let stroke = spec
        .outline
        .filter(|c| spec.outline_width > 0 && c.a > 0)
        .map(|color| (color, outer.inset(i64::from(spec.outline_width))));

    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for y in outer.y0.max(0)..=outer.y1.min(h - 1) {
        for x in outer.x0.max(0)..=outer.x1.min(w - 1) {
            if !outer.contains(x, y) {
                continue;
            }
            canvas.blend_pixel(x, y, spec.fill, 255);
            match stroke {
                Some((outline, Some(inner))) if !inner.contains(x, y) => {
                    canvas.blend_pixel(x, y, outline, 255)
                }
                Some((outline, None)) => canvas.blend_pixel(x, y, outline, 255),
                _ => {}
            }
        }
    }
}

/// Paint a filled ellipse, clipped to the canvas.
pub fn draw_ellipse(canvas: &mut Canvas, spec: &EllipseSpec) {
    let (x0, x1) = ordered(spec.x0, spec.x1);
    let (y0, y1) = ordered(spec.y0, spec.y1);
    let cx = (x0 + x1) as f64 / 2.0;
    let cy = (y0 + y1) as f64 / 2.0;
    let rx = ((x1 - x0) as f64 / 2.0).max(0.5);
    let ry = ((y1 - y0) as f64 / 2.0).max(0.5);

    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for y in y0.max(0)..=y1.min(h - 1) {
        let ny = (y as f64 - cy) / ry;
        for x in x0.max(0)..=x1.min(w - 1) {
            let nx = (x as f64 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                canvas.blend_pixel(x, y, spec.fill, 255);
            }
        }
    }
}

fn ordered(a: i32, b: i32) -> (i64, i64) {
    let (a, b) = (i64::from(a), i64::from(b));
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
