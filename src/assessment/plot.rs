use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::core::{Front, OError};

/// Generate and save a scatter chart with the objective values of a bi-objective front and,
/// optionally, of the reference front.
///
/// # Arguments
///
/// * `front`: The front to plot.
/// * `reference_front`: The reference or true Pareto front.
/// * `file_name`: The path to the PNG file.
///
/// returns: `Result<(), OError>`
pub fn plot_fronts<P: AsRef<Path>>(
    front: &Front,
    reference_front: Option<&Front>,
    file_name: P,
) -> Result<(), OError> {
    let fronts: Vec<&Front> = std::iter::once(front).chain(reference_front).collect();
    for f in &fronts {
        if let Some(n) = f.number_of_objectives() {
            if n != 2 {
                return Err(OError::Generic(
                    "Plotting is available when the number of objectives is 2".to_string(),
                ));
            }
        }
    }
    draw(front, reference_front, file_name.as_ref()).map_err(|e| OError::Generic(e.to_string()))
}

/// The axis range of an objective with a 10% padding.
fn axis_range(fronts: &[&Front], objective: usize) -> (f64, f64) {
    let (min, max) = fronts
        .iter()
        .flat_map(|f| f.iter().map(|p| p[objective]))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let padding = if max > min { 0.1 * (max - min) } else { 0.1 };
    (min - padding, max + padding)
}

fn draw(
    front: &Front,
    reference_front: Option<&Front>,
    file_name: &Path,
) -> Result<(), Box<dyn Error>> {
    let fronts: Vec<&Front> = std::iter::once(front).chain(reference_front).collect();
    let (x_min, x_max) = axis_range(&fronts, 0);
    let (y_min, y_max) = axis_range(&fronts, 1);

    let root = BitMapBackend::new(file_name, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(65)
        .y_label_area_size(65)
        .margin_top(5)
        .margin_left(10)
        .margin_right(30)
        .margin_bottom(5)
        .caption("Pareto fronts", ("sans-serif", 30.0))
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .bold_line_style(WHITE.mix(0.3))
        .y_desc("Objective #2")
        .x_desc("Objective #1")
        .axis_desc_style(("sans-serif", 25, &BLACK))
        .label_style(("sans-serif", 20, &BLACK))
        .draw()?;

    if let Some(reference_front) = reference_front {
        chart
            .draw_series(reference_front.iter().map(|p| {
                Circle::new(
                    (p[0], p[1]),
                    4,
                    ShapeStyle {
                        color: Palette99::pick(0).to_rgba(),
                        filled: false,
                        stroke_width: 1,
                    },
                )
            }))?
            .label("Reference front")
            .legend(|(x, y)| Circle::new((x, y), 4, Palette99::pick(0).stroke_width(1)));
    }

    chart
        .draw_series(front.iter().map(|p| {
            Circle::new(
                (p[0], p[1]),
                5,
                ShapeStyle {
                    color: Palette99::pick(1).to_rgba(),
                    filled: true,
                    stroke_width: 1,
                },
            )
        }))?
        .label("Front")
        .legend(|(x, y)| Circle::new((x, y), 5, Palette99::pick(1).filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::assessment::plot_fronts;
    use crate::core::test_utils::front_from;
    use crate::core::OError;

    #[test]
    fn test_wrong_number_of_objectives() {
        let front = front_from(&[[0.1, 0.2, 0.3]]);
        assert!(matches!(
            plot_fronts(&front, None, "front.png").unwrap_err(),
            OError::Generic(_)
        ));
    }
}
