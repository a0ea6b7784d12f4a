/// Calculate the sum of the absolute coordinate differences between two points, each raised to
/// the power `p`:
///
///   $ \sum_{i=1}^{M} |a_i - b_i|^p $
///
/// This is the Minkowski distance without the outer root. Some indicators apply the root only
/// once, after summing the contribution of multiple points.
///
/// # Arguments
///
/// * `a`: The first point.
/// * `b`: The second point.
/// * `p`: The exponent.
///
/// returns: `f64`
pub fn raw_power(a: &[f64], b: &[f64], p: f64) -> f64 {
    a.iter()
        .zip(b)
        .map(|(a_i, b_i)| (a_i - b_i).abs().powf(p))
        .sum()
}

/// Calculate the Minkowski distance of order `p` between two points:
///
///   $ \left( \sum_{i=1}^{M} |a_i - b_i|^p \right)^{1/p} $
///
/// With `p = 1` this is the Manhattan distance and with `p = 2` the Euclidean distance.
///
/// # Arguments
///
/// * `a`: The first point.
/// * `b`: The second point.
/// * `p`: The exponent.
///
/// returns: `f64`
pub fn minkowski(a: &[f64], b: &[f64], p: f64) -> f64 {
    raw_power(a, b, p).powf(1.0 / p)
}

/// The Euclidean distance between two points.
///
/// # Arguments
///
/// * `a`: The first point.
/// * `b`: The second point.
///
/// returns: `f64`
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    minkowski(a, b, 2.0)
}

/// Get the smallest value of `distance(point, other)` for all the points in `set`. Points
/// coinciding with `point` are included, therefore this returns `0` when `point` belongs to `set`.
///
/// # Arguments
///
/// * `point`: The point.
/// * `set`: The points to compare against.
/// * `distance`: The distance function.
///
/// returns: `Option<f64>`. `None` when `set` is empty.
pub fn nearest_distance<F>(point: &[f64], set: &[Vec<f64>], distance: F) -> Option<f64>
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    set.iter()
        .map(|other| distance(point, other))
        .min_by(|a, b| a.total_cmp(b))
}

/// Get the Minkowski distance of order `p` between `point` and its nearest neighbour in `set`.
/// Points coinciding with `point` (including `point` itself) are not considered neighbours; if
/// all the points in `set` coincide with `point`, the distance is `0`.
///
/// # Arguments
///
/// * `point`: The point.
/// * `set`: The points to search.
/// * `p`: The exponent of the Minkowski distance.
///
/// returns: `f64`
pub fn nearest_neighbour_distance(point: &[f64], set: &[Vec<f64>], p: f64) -> f64 {
    set.iter()
        .map(|other| minkowski(point, other, p))
        .filter(|d| *d > 0.0)
        .min_by(|a, b| a.total_cmp(b))
        .unwrap_or(0.0)
}
