use ember_core::event::{IntakeContext, IntakeEvent};

/// Per-context event counts, indexed by `IntakeContext::index`.
pub fn context_counts(events: &[IntakeEvent]) -> [u64; 5] {
    let mut counts = [0u64; 5];
    for event in events {
        counts[event.context.index()] += 1;
    }
    counts
}

/// Context predictability factor: `1 − H(contexts) / log2(5)`.
///
/// Range: 0.0 – 1.0. A single dominant context has zero entropy and
/// scores 1; a perfectly uniform spread over all 5 labels scores 0.
pub fn calculate(counts: &[u64; 5]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for &count in counts {
        if count == 0 {
            continue;
        }
        let p = count as f64 / total as f64;
        entropy -= p * p.log2();
    }

    let max_entropy = (IntakeContext::ALL.len() as f64).log2();
    (1.0 - entropy / max_entropy).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_context_is_fully_predictable() {
        assert_eq!(calculate(&[12, 0, 0, 0, 0]), 1.0);
    }

    #[test]
    fn uniform_spread_is_unpredictable() {
        let factor = calculate(&[4, 4, 4, 4, 4]);
        assert!(factor.abs() < 1e-12);
    }

    #[test]
    fn partial_concentration_lands_between() {
        let factor = calculate(&[10, 2, 0, 0, 0]);
        assert!(factor > 0.0 && factor < 1.0);
    }
}
