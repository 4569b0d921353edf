use crate::models::VolunteerRequest;

/// Index of the smallest distance. Scans left to right, so the first of
/// several equal minima wins. NaN never wins.
pub fn select_nearest(distances: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &d) in distances.iter().enumerate() {
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if d >= current => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Nearest candidate among those whose distance has been computed.
pub fn nearest_candidate(candidates: &[VolunteerRequest]) -> Option<usize> {
    let distances: Vec<f64> = candidates
        .iter()
        .map(|c| c.distance.as_ref().map_or(f64::NAN, |d| d.straight_line_km))
        .collect();
    select_nearest(&distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_nearest() {
        assert_eq!(select_nearest(&[]), None);
    }

    #[test]
    fn nan_is_skipped() {
        assert_eq!(select_nearest(&[f64::NAN, 3.0, 1.0]), Some(2));
        assert_eq!(select_nearest(&[f64::NAN]), None);
    }
}
