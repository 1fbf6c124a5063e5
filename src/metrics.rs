/// Engagement rate as a percentage: `(likes + comments) / views * 100`,
/// rounded to 2 decimals. Zero views yields `0.0`.
pub fn compute_engagement_rate(views: u64, likes: u64, comments: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }

    let interactions = likes as f64 + comments as f64;
    round2(interactions / views as f64 * 100.0)
}

/// Rounds to 2 decimal places, ties to even (`3.125` becomes `3.12`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0u64), |(sum, count), value| (sum + value, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
