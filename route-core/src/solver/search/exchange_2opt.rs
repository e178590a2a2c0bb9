#[cfg(test)]
#[path = "../../../tests/unit/solver/search/exchange_2opt_test.rs"]
mod exchange_2opt_test;

use super::{SearchContext, TourImprover};
use crate::models::solution::Tour;
use crate::solver::ResourceLimit;

/// Implements a classical TSP's two opt swap operation using first improvement strategy: an
/// exchange is applied as soon as it shortens the tour and scanning continues from the same
/// position. Passes are repeated until one of them makes no change.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
#[derive(Clone, Debug, Default)]
pub struct ExchangeTwoOpt {}

impl TourImprover for ExchangeTwoOpt {
    fn improve(&self, search_ctx: &SearchContext, mut tour: Tour) -> Result<Tour, ResourceLimit> {
        let total = tour.total();

        // NOTE at least two interior stops are needed to have something to exchange
        if total < 4 {
            return Ok(tour);
        }

        let metric = search_ctx.metric.as_ref();
        let distance = |tour: &Tour, from: usize, to: usize| {
            let stops = tour.stops();
            metric.distance(&stops[from], &stops[to])
        };

        let mut passes = 0;
        let mut has_improvement = true;
        while has_improvement {
            search_ctx.check_budget(passes)?;

            has_improvement = false;
            passes += 1;

            for i in 1..=(total - 3) {
                for k in (i + 1)..=(total - 2) {
                    let before = distance(&tour, i - 1, i) + distance(&tour, k, k + 1);
                    let after = distance(&tour, i - 1, k) + distance(&tour, i, k + 1);

                    if after < before {
                        tour.reverse(i, k);
                        has_improvement = true;
                    }
                }
            }
        }

        (search_ctx.logger)(&format!("2-opt converged after {passes} pass(es)"));

        Ok(tour)
    }
}
