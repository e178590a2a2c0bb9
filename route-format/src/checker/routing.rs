#[cfg(test)]
#[path = "../../tests/unit/checker/routing_test.rs"]
mod routing_test;

use super::*;
use route_core::utils::is_approx_equal;

/// Checks that steps chain ordered stops and distances agree with the distance metric.
pub fn check_routing(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let stops = ctx.stops();
    let steps = ctx.solution.plan.steps.as_slice();

    if steps.len() + 1 != stops.len() {
        let expected = stops.len().saturating_sub(1);
        return Err(vec![format!("expected {expected} steps for {} stops, got: {}", stops.len(), steps.len())]);
    }

    let mut errors = steps
        .iter()
        .zip(stops.windows(2))
        .enumerate()
        .filter_map(|(step_idx, (step, pair))| {
            let (from, to) = (&pair[0], &pair[1]);

            if step.from != from.id || step.to != to.id {
                return Some(format!(
                    "step {step_idx} does not follow stops: expected '{}'->'{}', got '{}'->'{}'",
                    from.id, to.id, step.from, step.to
                ));
            }

            let expected = ctx.distance(from, to);
            if !is_approx_equal(step.distance_km, expected, DISTANCE_TOLERANCE) {
                return Some(format!(
                    "step {step_idx} distance mismatch: expected {expected}, got {}",
                    step.distance_km
                ));
            }

            None
        })
        .collect::<Vec<_>>();

    let total = steps.iter().map(|step| step.distance_km).sum::<f64>();
    if !is_approx_equal(ctx.solution.plan.total_distance_km, total, DISTANCE_TOLERANCE) {
        errors.push(format!(
            "total distance mismatch: expected sum of steps {total}, got {}",
            ctx.solution.plan.total_distance_km
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
