use super::Point;

/// Signed area of the parallelogram spanned by vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point, b: Point) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Does the open segment `p1–p2` properly cross the open segment `p3–p4`?
///
/// Both endpoints of each segment must lie strictly on opposite sides of the
/// other segment's supporting line. A zero orientation (collinear point,
/// touching endpoint, shared endpoint, zero-length segment) makes the
/// corresponding product zero and the answer `false`.
pub fn crosses(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d34 = p4 - p3;
    let v1 = parallelogram_area(d34, p1 - p3);
    let v2 = parallelogram_area(d34, p2 - p3);
    let d12 = p2 - p1;
    let v3 = parallelogram_area(d12, p3 - p1);
    let v4 = parallelogram_area(d12, p4 - p1);
    v1 * v2 < 0.0 && v3 * v4 < 0.0
}
