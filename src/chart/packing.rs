//! Circle-packing layout.
//!
//! Produces non-overlapping circles whose areas are proportional to the
//! input weights, packed greedily (largest first, each next circle placed
//! tangent to a pair of already-placed circles at the position closest to
//! the origin) and scaled to fit the unit enclosure centered at the origin.

const EPS: f64 = 1e-9;

/// A laid-out circle in enclosure coordinates (enclosure radius 1 at origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    fn distance_to(&self, other: &Circle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn overlaps(&self, other: &Circle) -> bool {
        self.distance_to(other) < self.r + other.r - EPS
    }
}

/// Pack one circle per weight. Output order matches input order; weights
/// must be positive. Deterministic for a given input.
pub fn pack_circles(weights: &[f64]) -> Vec<Circle> {
    if weights.is_empty() {
        return Vec::new();
    }

    // Pack largest-first for a compact layout, then restore input order.
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        weights[b]
            .partial_cmp(&weights[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut placed: Vec<Circle> = Vec::with_capacity(weights.len());
    for &idx in &order {
        let r = weights[idx].sqrt();
        let (x, y) = place_next(&placed, r);
        placed.push(Circle { x, y, r });
    }

    // Scale everything into the unit enclosure.
    let limit = placed
        .iter()
        .map(|c| c.x.hypot(c.y) + c.r)
        .fold(0.0, f64::max);
    if limit > EPS {
        for c in &mut placed {
            c.x /= limit;
            c.y /= limit;
            c.r /= limit;
        }
    }

    let mut out = vec![Circle { x: 0.0, y: 0.0, r: 0.0 }; weights.len()];
    for (slot, &idx) in order.iter().enumerate() {
        out[idx] = placed[slot];
    }
    out
}

/// Choose a center for a new circle of radius `r` among the placed ones.
fn place_next(placed: &[Circle], r: f64) -> (f64, f64) {
    match placed.len() {
        0 => return (0.0, 0.0),
        1 => return (placed[0].r + r, 0.0),
        _ => {}
    }

    let mut best: Option<(f64, f64)> = None;
    let mut best_dist = f64::MAX;

    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            for (x, y) in tangent_positions(&placed[i], &placed[j], r) {
                let candidate = Circle { x, y, r };
                if placed.iter().any(|c| candidate.overlaps(c)) {
                    continue;
                }
                let dist = x.hypot(y);
                if dist < best_dist {
                    best_dist = dist;
                    best = Some((x, y));
                }
            }
        }
    }

    // Fallback: off to the right of everything. Not reachable for sane
    // inputs, but keeps the layout total.
    best.unwrap_or_else(|| {
        let right = placed
            .iter()
            .map(|c| c.x + c.r)
            .fold(f64::MIN, f64::max);
        (right + r, 0.0)
    })
}

/// The (up to two) centers of a circle of radius `r` externally tangent to
/// both `a` and `b`.
fn tangent_positions(a: &Circle, b: &Circle, r: f64) -> Vec<(f64, f64)> {
    let d1 = a.r + r;
    let d2 = b.r + r;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d = dx.hypot(dy);

    if d < EPS || d > d1 + d2 || d < (d1 - d2).abs() {
        return Vec::new();
    }

    let along = (d1 * d1 - d2 * d2 + d * d) / (2.0 * d);
    let h_sq = d1 * d1 - along * along;
    if h_sq < 0.0 {
        return Vec::new();
    }
    let h = h_sq.sqrt();

    let px = a.x + along * dx / d;
    let py = a.y + along * dy / d;

    vec![
        (px + h * dy / d, py - h * dx / d),
        (px - h * dy / d, py + h * dx / d),
    ]
}
