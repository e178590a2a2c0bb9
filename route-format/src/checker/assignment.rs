#[cfg(test)]
#[path = "../../tests/unit/checker/assignment_test.rs"]
mod assignment_test;

use super::*;
use rustc_hash::FxHashMap;

/// Checks that route starts at origin, finishes at end and visits every destination exactly once.
pub fn check_assignment(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let errors = check_endpoints(ctx)
        .err()
        .into_iter()
        .chain(check_destinations(ctx).err())
        .flatten()
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_endpoints(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let stops = ctx.stops();
    if stops.len() < 2 {
        return Err(vec![format!("expected at least 2 stops, got: {}", stops.len())]);
    }

    let check_endpoint = |name: &str, stop: &ApiPoint, expected: &Point| {
        if stop.id == expected.id && has_same_location(stop, expected) {
            None
        } else {
            Some(format!("{name} mismatch: expected '{}', got '{}'", expected.id, stop.id))
        }
    };

    let errors = check_endpoint("origin", &stops[0], &ctx.request.origin)
        .into_iter()
        .chain(check_endpoint("end", &stops[stops.len() - 1], &ctx.request.end))
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_destinations(ctx: &CheckerContext) -> Result<(), Vec<String>> {
    let stops = ctx.stops();
    let interior = if stops.len() < 2 { &[][..] } else { &stops[1..stops.len() - 1] };

    let destinations =
        ctx.request.destinations.iter().map(|point| (point.id.as_str(), point)).collect::<FxHashMap<_, _>>();

    let mut visited = FxHashSet::default();
    let mut errors = interior
        .iter()
        .filter_map(|stop| match destinations.get(stop.id.as_str()) {
            None => Some(format!("unknown stop in the route: '{}'", stop.id)),
            Some(_) if !visited.insert(stop.id.as_str()) => Some(format!("stop is visited twice: '{}'", stop.id)),
            Some(point) if !has_same_location(stop, point) => {
                Some(format!("stop '{}' has different coordinates than in the problem", stop.id))
            }
            Some(_) => None,
        })
        .collect::<Vec<_>>();

    errors.extend(
        ctx.request
            .destinations
            .iter()
            .filter(|point| !visited.contains(point.id.as_str()))
            .map(|point| format!("stop is not visited: '{}'", point.id)),
    );

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
