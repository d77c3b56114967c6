use crate::utils::error::{KataError, Result};
use serde::Serialize;

const KATA: &str = "statistics";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub modes: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// 母體變異數
    pub variance: f64,
    pub std_dev: f64,
}

fn check(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(KataError::invalid_input(KATA, "at least one value is required"));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(KataError::invalid_input(KATA, format!("{} is not a finite number", bad)));
    }
    Ok(())
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// 結果超出 f64 範圍時回報錯誤，而不是輸出 inf
fn finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KataError::invalid_input(KATA, format!("{} exceeds the f64 range", what)))
    }
}

/// 同號時相減不會溢位，異號時相加不會溢位
fn midpoint(a: f64, b: f64) -> f64 {
    if (a >= 0.0) == (b >= 0.0) {
        a + (b - a) / 2.0
    } else {
        (a + b) / 2.0
    }
}

pub fn mean(values: &[f64]) -> Result<f64> {
    check(values)?;
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mean = if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    };
    finite(mean, "mean")
}

pub fn median(values: &[f64]) -> Result<f64> {
    check(values)?;
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok(midpoint(sorted[mid - 1], sorted[mid]))
    } else {
        Ok(sorted[mid])
    }
}

/// 出現次數最多的值（由小到大）；每個值都只出現一次時回傳空陣列
pub fn modes(values: &[f64]) -> Result<Vec<f64>> {
    check(values)?;
    let sorted = sorted(values);

    let mut runs: Vec<(f64, usize)> = Vec::new();
    for value in sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => runs.push((value, 1)),
        }
    }

    let best = runs.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if best <= 1 {
        return Ok(Vec::new());
    }

    Ok(runs
        .into_iter()
        .filter(|(_, count)| *count == best)
        .map(|(value, _)| value)
        .collect())
}

pub fn summarize(values: &[f64]) -> Result<Summary> {
    let mean = mean(values)?;
    let median = median(values)?;
    let modes = modes(values)?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = finite(max - min, "range")?;
    let variance = finite(
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64,
        "variance",
    )?;

    Ok(Summary {
        count: values.len(),
        mean,
        median,
        modes,
        min,
        max,
        range,
        variance,
        std_dev: variance.sqrt(),
    })
}
