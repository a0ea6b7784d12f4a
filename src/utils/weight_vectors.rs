use serde::{Deserialize, Serialize};

use crate::core::OError;

/// Calculate the binomial coefficient. This gives the number of `k`-subsets possible out of a
/// set of `n` distinct items. See <https://mathworld.wolfram.com/BinomialCoefficient.html>.
///
/// # Arguments
///
/// * `n`: The number of possibilities.
/// * `k`: The number of outcomes.
///
/// returns: `u64`
pub(crate) fn binomial_coefficient(mut n: u64, k: u64) -> u64 {
    let mut r: u64 = 1;
    if k > n {
        0
    } else {
        for d in 1..=k {
            r *= n;
            n -= 1;
            r /= d;
        }
        r
    }
}

/// The set of uniformly-spaced weight vectors on the unit simplex used by the utility-based
/// indicators. Each vector has `number_of_objectives` non-negative coordinates, taken from
/// $\{0/H, 1/H, ..., H/H\}$, whose sum is 1.
///
/// The vectors are generated with the lattice approach described in Section 5.2 of:
///
/// > Indraneel Das and J. E. Dennis. Normal-Boundary Intersection: A New Method for Generating the
/// > Pareto Surface in Nonlinear Multicriteria Optimization Problems. SIAM Journal on Optimization.
/// > 1998 8:3, 631-657. <https://doi.org/10.1137/S1052623496307510>
///
/// The set equals the one obtained by enumerating all the $(H+1)^M$ tuples and keeping those
/// summing to 1, without the exponential enumeration.
///
/// # Example
/// ```
/// use optirustic_indicators::utils::WeightVectors;
/// use optirustic_indicators::core::OError;
///
/// fn main() -> Result<(), OError> {
///     let w = WeightVectors::new(2, 2)?;
///     assert_eq!(w.vectors(), &[vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]]);
///     Ok(())
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WeightVectors {
    /// The number of objectives.
    number_of_objectives: usize,
    /// The resolution or number of uniform gaps along each objective axis.
    resolution: usize,
    /// The generated vectors.
    vectors: Vec<Vec<f64>>,
}

impl WeightVectors {
    /// Generate the weight vectors. This returns an error if `resolution` or
    /// `number_of_objectives` is zero.
    ///
    /// # Arguments
    ///
    /// * `number_of_objectives`: The number of objectives `M`.
    /// * `resolution`: The number of uniform gaps `H` between two consecutive points along all
    ///    objective axis.
    ///
    /// returns: `Result<WeightVectors, OError>`
    pub fn new(number_of_objectives: usize, resolution: usize) -> Result<Self, OError> {
        let name = "Weight vectors".to_string();
        if resolution == 0 {
            return Err(OError::IndicatorConfig(
                name,
                "The resolution H must be larger than 0".to_string(),
            ));
        }
        if number_of_objectives == 0 {
            return Err(OError::IndicatorConfig(
                name,
                "The number of objectives must be larger than 0".to_string(),
            ));
        }
        // the binomial coefficient C(H + M - 1, M - 1) must be defined
        if number_of_objectives - 1 > resolution + number_of_objectives - 1 {
            return Err(OError::IndicatorConfig(
                name,
                format!(
                    "Cannot generate the vectors with {} objectives and resolution {}",
                    number_of_objectives, resolution
                ),
            ));
        }

        let mut vectors: Vec<Vec<f64>> = vec![];
        let mut weight: Vec<usize> = vec![0; number_of_objectives];
        Self::recursive_weights(
            &mut vectors,
            &mut weight,
            resolution,
            resolution,
            0,
            number_of_objectives,
        );

        Ok(Self {
            number_of_objectives,
            resolution,
            vectors,
        })
    }

    /// The number of vectors on the `M`-dimensional unit simplex with `H` gaps. This is the
    /// binomial coefficient of `M + H - 1` and `H`.
    ///
    /// returns: `u64`
    pub fn number_of_points(&self) -> u64 {
        binomial_coefficient(
            (self.number_of_objectives + self.resolution - 1) as u64,
            self.resolution as u64,
        )
    }

    /// The number of objectives.
    ///
    /// returns: `usize`
    pub fn number_of_objectives(&self) -> usize {
        self.number_of_objectives
    }

    /// The resolution `H`.
    ///
    /// returns: `usize`
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// The weight vectors.
    ///
    /// returns: `&[Vec<f64>]`
    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// Calculate the coordinates of each vector recursively for each objective and partition
    /// index.
    ///
    /// # Arguments
    ///
    /// * `final_weights`: The vector collecting the weights.
    /// * `weight`: The weight being built, in number of partitions per objective.
    /// * `left_partitions`: The number of partitions left to assign.
    /// * `number_of_partitions`: The total number of partitions.
    /// * `obj_index`: The objective index being processed.
    /// * `number_of_objectives`: The number of objectives.
    ///
    /// returns: `()`
    fn recursive_weights(
        final_weights: &mut Vec<Vec<f64>>,
        weight: &mut Vec<usize>,
        left_partitions: usize,
        number_of_partitions: usize,
        obj_index: usize,
        number_of_objectives: usize,
    ) {
        if obj_index == number_of_objectives - 1 {
            // the last coordinate takes all the partitions left
            weight[obj_index] = left_partitions;
            final_weights.push(
                weight
                    .iter()
                    .map(|v| *v as f64 / number_of_partitions as f64)
                    .collect(),
            );
            return;
        }
        for k in 0..=left_partitions {
            weight[obj_index] = k;
            Self::recursive_weights(
                final_weights,
                weight,
                left_partitions - k,
                number_of_partitions,
                obj_index + 1,
                number_of_objectives,
            )
        }
    }
}
