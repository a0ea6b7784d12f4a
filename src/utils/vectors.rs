use crate::core::OError;

/// Calculate the vector minimum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, OError>`
pub fn vector_min(v: &[f64]) -> Result<f64, OError> {
    Ok(*v
        .iter()
        .min_by(|a, b| a.total_cmp(b))
        .ok_or(OError::Generic(
            "Cannot calculate vector min value".to_string(),
        ))?)
}

/// Calculate the vector maximum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, OError>`
pub fn vector_max(v: &[f64]) -> Result<f64, OError> {
    Ok(*v
        .iter()
        .max_by(|a, b| a.total_cmp(b))
        .ok_or(OError::Generic(
            "Cannot calculate vector max value".to_string(),
        ))?)
}

/// Calculate the arithmetic mean of a vector.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, OError>`
pub fn mean(v: &[f64]) -> Result<f64, OError> {
    if v.is_empty() {
        return Err(OError::Generic(
            "Cannot calculate the mean of an empty vector".to_string(),
        ));
    }
    Ok(v.iter().sum::<f64>() / v.len() as f64)
}

#[cfg(test)]
mod test {
    use crate::utils::{mean, vector_max, vector_min};

    #[test]
    fn test_min_max_mean() {
        let v = vec![99.0, 11.0, 456.2, 19.0, 0.5];
        assert_eq!(vector_min(&v).unwrap(), 0.5);
        assert_eq!(vector_max(&v).unwrap(), 456.2);
        assert_eq!(mean(&[1.0, 2.0, 6.0]).unwrap(), 3.0);

        assert!(vector_min(&[]).is_err());
        assert!(vector_max(&[]).is_err());
        assert!(mean(&[]).is_err());
    }
}
