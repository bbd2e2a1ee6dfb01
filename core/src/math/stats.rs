pub struct StatsHelper;

impl StatsHelper {
    /// Arithmetic mean of the finite samples, accumulated in f64.
    pub fn finite_mean(samples: &[f32]) -> Option<f64> {
        let (sum, count) = samples
            .iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0_usize), |(sum, count), &v| {
                (sum + f64::from(v), count + 1)
            });
        if count == 0 {
            return None;
        }
        Some(sum / count as f64)
    }
}
