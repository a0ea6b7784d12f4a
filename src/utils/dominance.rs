use crate::core::ObjectiveDirection;

/// Check whether the point `a` Pareto-dominates the point `b` using only the first
/// `number_of_objectives` objectives. `a` dominates `b` if it is not worse than `b` in any of the
/// objectives and strictly better in at least one of them. A point never dominates itself.
///
/// # Arguments
///
/// * `a`: The first point.
/// * `b`: The second point.
/// * `number_of_objectives`: The number of leading objectives to compare. This is capped to the
///    size of the shortest point.
/// * `direction`: Whether the objectives are minimised or maximised.
///
/// returns: `bool`
///
/// # Example
/// ```
/// use optirustic_indicators::core::ObjectiveDirection;
/// use optirustic_indicators::utils::dominates;
///
/// let a = [1.0, 2.0, 9.0];
/// let b = [2.0, 2.0, 0.0];
/// assert!(dominates(&a, &b, 2, ObjectiveDirection::Minimise));
/// assert!(!dominates(&a, &b, 3, ObjectiveDirection::Minimise));
/// ```
pub fn dominates(
    a: &[f64],
    b: &[f64],
    number_of_objectives: usize,
    direction: ObjectiveDirection,
) -> bool {
    let mut better_in_any = false;
    for (a_k, b_k) in a.iter().zip(b).take(number_of_objectives) {
        if direction.is_better(*b_k, *a_k) {
            return false;
        }
        if direction.is_better(*a_k, *b_k) {
            better_in_any = true;
        }
    }
    better_in_any
}

/// Check whether `point` is dominated by at least one point in `points` using all objectives.
///
/// # Arguments
///
/// * `point`: The point to check.
/// * `points`: The candidate dominating points.
/// * `direction`: Whether the objectives are minimised or maximised.
///
/// returns: `bool`
pub fn is_dominated_by_any(point: &[f64], points: &[Vec<f64>], direction: ObjectiveDirection) -> bool {
    points
        .iter()
        .any(|other| dominates(other, point, other.len(), direction))
}
