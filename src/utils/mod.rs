pub use distance::{euclidean, minkowski, nearest_distance, nearest_neighbour_distance, raw_power};
pub use dominance::{dominates, is_dominated_by_any};
pub use vectors::{mean, vector_max, vector_min};
pub use weight_vectors::WeightVectors;

mod distance;
mod dominance;
mod vectors;
mod weight_vectors;
