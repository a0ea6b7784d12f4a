use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::OError;

/// An approximated Pareto front. This is an ordered collection of solutions, where each solution
/// is the vector of its objective values. All solutions have the same number of objectives; the
/// front may be empty.
///
/// # Example
/// ```
/// use optirustic_indicators::core::{Front, OError};
///
/// fn main() -> Result<(), OError> {
///     let front = Front::new(vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]])?;
///     assert_eq!(front.len(), 3);
///     assert_eq!(front.number_of_objectives(), Some(2));
///     Ok(())
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Front {
    /// The objective values. The size of this vector is the number of solutions and the size of
    /// the nested vectors is the number of objectives.
    points: Vec<Vec<f64>>,
}

impl Front {
    /// Create a new front. This returns an error if the solutions do not all have the same
    /// number of objectives.
    ///
    /// # Arguments
    ///
    /// * `points`: The objective values of each solution.
    ///
    /// returns: `Result<Front, OError>`
    pub fn new(points: Vec<Vec<f64>>) -> Result<Self, OError> {
        if let Some(first) = points.first() {
            let number_of_objectives = first.len();
            for (idx, point) in points.iter().enumerate() {
                if point.len() != number_of_objectives {
                    return Err(OError::RaggedFront(
                        idx + 1,
                        point.len(),
                        number_of_objectives,
                    ));
                }
            }
        }
        Ok(Self { points })
    }

    /// Create a front without solutions.
    ///
    /// returns: `Front`
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a front from a list of evaluated solutions by collecting their objective vectors.
    ///
    /// # Arguments
    ///
    /// * `solutions`: An iterator over the objective vectors of the solutions.
    ///
    /// returns: `Result<Front, OError>`
    pub fn from_solutions<I, S>(solutions: I) -> Result<Self, OError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[f64]>,
    {
        Self::new(
            solutions
                .into_iter()
                .map(|s| s.as_ref().to_vec())
                .collect(),
        )
    }

    /// Load a front from a text file. Each line contains the objective values of one solution
    /// separated by a comma. The first line may be a header; this is detected when its first
    /// value is not a number. Empty lines are ignored.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the file.
    ///
    /// returns: `Result<Front, OError>`. An error is returned if the file cannot be read, a value
    /// is not a number or a line does not have the same number of values as the previous ones.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self, OError> {
        let path = file.as_ref().to_path_buf();
        info!("Loading front from {:?}", path);
        let handle = File::open(&path).map_err(|e| OError::FrontFile {
            path: path.clone(),
            line: 0,
            message: e.to_string(),
        })?;
        Self::parse(BufReader::new(handle), path)
    }

    /// Load a front from a reader with the same format described in [`Front::from_file`].
    ///
    /// # Arguments
    ///
    /// * `reader`: The reader.
    ///
    /// returns: `Result<Front, OError>`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, OError> {
        Self::parse(BufReader::new(reader), PathBuf::from("<reader>"))
    }

    /// Parse the lines of a front file.
    ///
    /// # Arguments
    ///
    /// * `reader`: The buffered reader.
    /// * `path`: The source name used in the error messages.
    ///
    /// returns: `Result<Front, OError>`
    fn parse<R: BufRead>(reader: R, path: PathBuf) -> Result<Self, OError> {
        let mut points: Vec<Vec<f64>> = Vec::new();
        let mut number_of_objectives: Option<usize> = None;

        for (line_idx, line) in reader.lines().enumerate() {
            let line_number = line_idx + 1;
            let line = line.map_err(|e| OError::FrontFile {
                path: path.clone(),
                line: line_number,
                message: e.to_string(),
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split(',').map(|t| t.trim()).collect();
            if line_number == 1 && tokens[0].parse::<f64>().is_err() {
                debug!("Skipping header '{}'", line);
                continue;
            }

            let point = tokens
                .iter()
                .map(|t| {
                    t.parse::<f64>().map_err(|_| OError::FrontFile {
                        path: path.clone(),
                        line: line_number,
                        message: format!("the value '{}' is not a number", t),
                    })
                })
                .collect::<Result<Vec<f64>, OError>>()?;

            match number_of_objectives {
                None => number_of_objectives = Some(point.len()),
                Some(expected) if expected != point.len() => {
                    return Err(OError::FrontFile {
                        path: path.clone(),
                        line: line_number,
                        message: format!(
                            "the line has {} values, but {} objectives were expected",
                            point.len(),
                            expected
                        ),
                    });
                }
                Some(_) => {}
            }
            points.push(point);
        }

        debug!("Loaded {} solutions from {:?}", points.len(), path);
        Ok(Self { points })
    }

    /// The number of solutions in the front.
    ///
    /// returns: `usize`
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the front has no solutions.
    ///
    /// returns: `bool`
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of objectives. This is `None` when the front is empty.
    ///
    /// returns: `Option<usize>`
    pub fn number_of_objectives(&self) -> Option<usize> {
        self.points.first().map(|p| p.len())
    }

    /// The objective values of all solutions.
    ///
    /// returns: `&[Vec<f64>]`
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Iterate over the objective vectors.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<f64>> {
        self.points.iter()
    }

    /// Get the minimum and maximum value of each objective.
    ///
    /// returns: `Option<Vec<(f64, f64)>>`. The `(min, max)` pair for each objective or `None`
    /// if the front is empty.
    pub fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        let first = self.points.first()?;
        let mut bounds: Vec<(f64, f64)> = first.iter().map(|v| (*v, *v)).collect();
        for point in self.points.iter().skip(1) {
            for (bound, value) in bounds.iter_mut().zip(point) {
                bound.0 = bound.0.min(*value);
                bound.1 = bound.1.max(*value);
            }
        }
        Some(bounds)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Front {
    type Error = OError;

    fn try_from(points: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Front::new(points)
    }
}

impl From<Front> for Vec<Vec<f64>> {
    fn from(front: Front) -> Self {
        front.points
    }
}

impl<'a> IntoIterator for &'a Front {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
