//! Step-by-step least-squares walk-through
//!
//! This demo fits systolic blood pressure against age by hand, printing
//! every intermediate quantity of the closed-form estimator:
//! - Step 1: means of x and y
//! - Step 2: deviations from the means
//! - Step 3: slope from the summed cross-products and squared deviations
//! - Step 4: intercept from the means and the slope
//!
//! It then runs the same data through the fluent API with diagnostics and
//! intervals, and finishes with a grouped summary of a small heart-rate table.
//!
//! Run with `RUST_LOG=debug` to see the library's tracing events.

#[cfg(feature = "std")]
use linreg::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), RegressionError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    manual_walkthrough()?;
    fluent_report()?;
    grouped_summary()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn age_and_pressure() -> (Vec<f64>, Vec<f64>) {
    let x = vec![25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0];
    let y = vec![
        110.0, 115.0, 118.0, 122.0, 128.0, 135.0, 140.0, 145.0, 150.0, 155.0, 160.0,
    ];
    (x, y)
}

#[cfg(feature = "std")]
fn manual_walkthrough() -> Result<(), RegressionError> {
    let (x, y) = age_and_pressure();

    println!("DATA:");
    println!("x (age):            {:?}", x);
    println!("y (blood pressure): {:?}", y);

    let line = LinearFit::fit_ols(&x, &y)?;

    println!("\nSTEP 1: MEANS");
    println!("x̄ (mean age):            {:.1} years", line.x_mean);
    println!("ȳ (mean blood pressure): {:.1} mmHg", line.y_mean);

    let dev = Deviations::from_fit(&line, &x, &y);
    println!("\nSTEP 2: DEVIATIONS FROM THE MEAN");
    println!("(x - x̄): {:?}", dev.dx);
    println!(
        "(y - ȳ): {:?}",
        dev.dy.iter().map(|d| format!("{d:.2}")).collect::<Vec<_>>()
    );

    println!("\nSTEP 3: SLOPE (m)");
    println!("Numerator:   Σ(x-x̄)(y-ȳ) = {:.1}", dev.numerator());
    println!("Denominator: Σ(x-x̄)²      = {:.1}", dev.denominator());
    println!("Slope:       m = {:.4} mmHg/year", line.slope);

    println!("\nSTEP 4: INTERCEPT (b)");
    println!("b = ȳ - m·x̄");
    println!("b = {:.1} - {:.4}·{:.1}", line.y_mean, line.slope, line.x_mean);
    println!("b = {:.2} mmHg", line.intercept);

    println!("\n{}", "=".repeat(50));
    println!("RESULT");
    println!("{}", "=".repeat(50));
    println!("Regression line: {}", line);
    println!("\nInterpretation:");
    println!(
        "  - Each additional year of age raises blood pressure by {:.4} mmHg",
        line.slope
    );
    println!(
        "  - At age 0 the line predicts {:.2} mmHg (extrapolation)",
        line.intercept
    );
    println!("{}", "=".repeat(50));

    Ok(())
}

#[cfg(feature = "std")]
fn fluent_report() -> Result<(), RegressionError> {
    let (x, y) = age_and_pressure();

    let model = LinearRegression::new()
        .return_residuals()
        .return_diagnostics()
        .confidence_intervals(0.95)
        .prediction_intervals(0.95)
        .build()?;

    let result = model.fit(&x, &y)?;
    println!("\n{}", result);

    Ok(())
}

#[cfg(feature = "std")]
fn grouped_summary() -> Result<(), RegressionError> {
    // gender: 0 = female, 1 = male
    let gender = [0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0];
    let heart_rate = [
        136.1, 131.8, 119.6, 101.9, 96.3, 84.2, 121.7, 142.0, 108.8, 92.5, 88.1, 113.4,
    ];

    let groups = GroupedSummary::by_label(&heart_rate, &gender)?;

    println!("Heart rate by gender:");
    print!("{}", groups);
    if let (Some(female), Some(male)) = (groups.get(&0), groups.get(&1)) {
        println!(
            "Difference of means (male - female): {:.1} bpm",
            male.mean - female.mean
        );
    }

    Ok(())
}
