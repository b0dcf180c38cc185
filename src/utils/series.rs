use std::io;
use csv::WriterBuilder;
use hashbrown::HashMap;
use serde::Serialize;
use super::error::Result;


#[derive(Serialize)]
struct SeriesRow {
    iteration: usize,
    mean_cost: Option<f64>,
    smoothed: Option<f64>,
}

/// Sliding mean over full windows only.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return vec![];
    }
    values.windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Smooths the defined entries of `means`. Each average is attached to the
/// iteration that closes its window.
pub fn smooth(means: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let (iterations, values): (Vec<usize>, Vec<f64>) = means.iter()
        .enumerate()
        .filter_map(|(iteration, mean)| mean.map(|mean| (iteration, mean)))
        .unzip();
    let closing: HashMap<usize, f64> = moving_average(&values, window)
        .into_iter()
        .enumerate()
        .map(|(nth, average)| (iterations[nth + window - 1], average))
        .collect();
    (0..means.len())
        .map(|iteration| closing.get(&iteration).cloned())
        .collect()
}

/// Writes `iteration,mean_cost,smoothed` rows; absent values are left empty.
pub fn write_series<W: io::Write>(writer: W, means: &[Option<f64>], window: usize) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    let smoothed = smooth(means, window);
    for (iteration, (&mean_cost, &smoothed)) in means.iter().zip(&smoothed).enumerate() {
        writer.serialize(SeriesRow { iteration, mean_cost, smoothed })?;
    }
    writer.flush()?;
    Ok(())
}
