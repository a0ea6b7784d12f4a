use std::error::Error;
use std::path::PathBuf;

use log::LevelFilter;

use optirustic_indicators::assessment::{Assessment, IndicatorConfig};
use optirustic_indicators::core::{Arity, Front, ObjectiveDirection};
use optirustic_indicators::metrics::IndicatorKind;

/// Assess an approximation of the Pareto front of the ZDT1 problem, where both objectives are
/// minimised, against a sample of its true front. The fronts are loaded from the CSV files in
/// `test_data` and the report is printed and saved as JSON.
///
/// `cargo run --example assess_fronts`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data");
    let front = Front::from_file(data_dir.join("zdt1_approximation.csv"))?;
    let true_front = Front::from_file(data_dir.join("zdt1_front.csv"))?;

    // Calculate the indicators comparing up to two fronts with their default options
    let mut indicators: Vec<IndicatorConfig> = IndicatorKind::ALL
        .into_iter()
        .filter(|kind| kind.arity() != Arity::Three)
        .filter(|kind| !matches!(kind, IndicatorKind::R2 | IndicatorKind::R3))
        .map(IndicatorConfig::new)
        .collect();
    // the utility indicators need the reference point and the weight vector resolution
    indicators.push(
        IndicatorConfig::new(IndicatorKind::R2)
            .with_ref_point("0, 0")
            .with_h(20),
    );
    indicators.push(
        IndicatorConfig::new(IndicatorKind::R3)
            .with_ref_point("0, 0")
            .with_h(20),
    );

    let assessment = Assessment::new(front, ObjectiveDirection::Minimise)
        .with_reference_front(true_front)
        .with_indicators(indicators);
    let report = assessment.run();

    for entry in &report.indicators {
        match &entry.error {
            Some(error) => println!("{:>30}: failed ({})", entry.kind.name(), error),
            None if entry.computed => println!("{:>30}: {}", entry.kind.name(), entry.result),
            None => println!("{:>30}: not computed", entry.kind.name()),
        }
    }

    #[cfg(feature = "plot")]
    optirustic_indicators::assessment::plot_fronts(
        assessment.front(),
        assessment.reference_front(),
        std::env::temp_dir().join("zdt1_fronts.png"),
    )?;

    report.save_to_json(std::env::temp_dir().join("zdt1_assessment.json"))?;
    Ok(())
}
