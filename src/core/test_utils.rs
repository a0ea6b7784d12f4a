#[cfg(test)]
use float_cmp::{approx_eq, F64Margin};
#[cfg(test)]
use rand::{Rng, SeedableRng};
#[cfg(test)]
use rand_chacha::ChaCha8Rng;

#[cfg(test)]
use crate::core::Front;

#[cfg(test)]
/// Compare two arrays of f64
pub(crate) fn assert_approx_array_eq(
    calculated_values: &[f64],
    expected_values: &[f64],
    epsilon: Option<f64>,
) {
    let margins = F64Margin {
        epsilon: epsilon.unwrap_or(1e-6),
        ulps: 4,
    };
    assert_eq!(
        calculated_values.len(),
        expected_values.len(),
        "the arrays have different sizes"
    );
    for (i, (calculated, expected)) in calculated_values.iter().zip(expected_values).enumerate() {
        if !approx_eq!(f64, *calculated, *expected, margins) {
            panic!(
                r#"assertion failed on item #{i:?}
                    actual: `{calculated:?}`,
                    expected: `{expected:?}`"#,
            )
        }
    }
}

/// Build a front from fixed-size objective vectors.
///
/// # Arguments
///
/// * `objective_values`: The objective values of each solution.
///
/// returns: `Front`
#[cfg(test)]
pub(crate) fn front_from<const N: usize>(objective_values: &[[f64; N]]) -> Front {
    Front::from_solutions(objective_values.iter()).unwrap()
}

/// Generate a front with random objective values between 0 and 1 using a seeded generator.
///
/// # Arguments
///
/// * `number_of_points`: The number of solutions.
/// * `number_of_objectives`: The number of objectives.
/// * `seed`: The seed of the random number generator.
///
/// returns: `Front`
#[cfg(test)]
pub(crate) fn random_front(number_of_points: usize, number_of_objectives: usize, seed: u64) -> Front {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..number_of_points)
        .map(|_| {
            (0..number_of_objectives)
                .map(|_| rng.gen_range(0.0..1.0))
                .collect()
        })
        .collect();
    Front::new(points).unwrap()
}
