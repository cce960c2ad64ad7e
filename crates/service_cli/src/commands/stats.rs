//! Stats command implementation
//!
//! Descriptive statistics from the function layer.

use super::parse_numbers;
use crate::{OutputFormat, Result};
use calc_functions::statistics::{kurtosis, mean, median, quartiles, skewness, std_dev, variance};
use tracing::info;

/// Run the stats command.
pub fn run(data: &str, format: OutputFormat) -> Result<()> {
    let sample = parse_numbers(data, "data point")?;
    info!("Computing statistics over {} data points", sample.len());

    let mean_value = mean(&sample)?;
    let median_value = median(&sample)?;
    let q = quartiles(&sample)?;

    // Higher moments need more data; report them only when defined
    let variance_value = variance(&sample).ok();
    let std_dev_value = std_dev(&sample).ok();
    let skewness_value = skewness(&sample).ok();
    let kurtosis_value = kurtosis(&sample).ok();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "count": sample.len(),
                    "mean": mean_value,
                    "median": median_value,
                    "variance": variance_value,
                    "std_dev": std_dev_value,
                    "q1": q.q1,
                    "q2": q.q2,
                    "q3": q.q3,
                    "iqr": q.iqr(),
                    "skewness": skewness_value,
                    "kurtosis": kurtosis_value,
                }))?
            );
        }
        OutputFormat::Table => {
            println!("Count    = {}", sample.len());
            println!("Mean     = {}", mean_value);
            println!("Median   = {}", median_value);
            if let Some(v) = variance_value {
                println!("Variance = {}", v);
            }
            if let Some(sd) = std_dev_value {
                println!("Std Dev  = {}", sd);
            }
            println!("Q1       = {}", q.q1);
            println!("Q3       = {}", q.q3);
            println!("IQR      = {}", q.iqr());
            if let Some(s) = skewness_value {
                println!("Skewness = {}", s);
            }
            if let Some(k) = kurtosis_value {
                println!("Kurtosis = {}", k);
            }
        }
    }
    Ok(())
}
