/// Index of the element closest to `target` by absolute difference.
///
/// Ties go to the lowest index. NaN distances never win. Returns `None` for an
/// empty slice or when no distance is comparable.
pub fn argmin_abs_diff(values: &[f32], target: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &value) in values.iter().enumerate() {
        let distance = (value - target).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((idx, distance)),
        }
    }
    best.map(|(idx, _)| idx)
}
