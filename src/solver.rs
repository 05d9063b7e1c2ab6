use log::{debug, info};

pub mod checker;
pub mod edge;
pub mod error;
pub mod nut;
mod trace;

use edge::open_edges;
use error::SolverError;
use nut::{labels, Nut};
use trace::{TraceNode, TraceOutcome};

/// A feasible way to begin the ring: `center` and `second` matched up on
/// their shared starting value, with the nuts that could continue the ring
/// on each side. Feasibility needs both option lists non-empty.
#[derive(Clone, Debug)]
pub struct StartingPair {
    pub center: Nut,
    pub second: Nut,
    pub left_options: Vec<Nut>,
    pub right_options: Vec<Nut>,
}

/// RingSolver: main struct. initialize this with the full nut pool ->
/// run .solve() for the exhaustive search, or .starting_pairs() for the
/// one-step feasibility report
pub struct RingSolver {
    nuts: Vec<Nut>,
}

impl RingSolver {
    pub fn new(mut nuts: Vec<Nut>) -> Self {
        // name order decides every iteration order below
        nuts.sort();
        Self { nuts }
    }

    // getter for private field
    pub fn nuts(&self) -> &[Nut] {
        &self.nuts
    }

    /// One-step feasibility for a fixed center: pair it with every other
    /// nut, matching both up on their starting value, and keep the pairs
    /// where each open edge has at least one taker in the rest of the pool.
    pub fn starting_pairs_for(&self, center: &Nut) -> Result<Vec<StartingPair>, SolverError> {
        let mut pairs = vec![];
        for second in &self.nuts {
            if second == center {
                continue;
            }
            // match up on the starting values; unequal ones mean bad data
            let open = open_edges(center, 0, second, 0)?;
            let available: Vec<Nut> = self
                .nuts
                .iter()
                .filter(|nut| *nut != center && *nut != second)
                .cloned()
                .collect();
            let left_options: Vec<Nut> = available
                .iter()
                .filter(|nut| nut.has_edge(open.left))
                .cloned()
                .collect();
            let right_options: Vec<Nut> = available
                .iter()
                .filter(|nut| nut.has_edge(open.right))
                .cloned()
                .collect();
            debug!(
                "center {} with {}: left edge {:?} matches [{}], right edge {:?} matches [{}]",
                center,
                second,
                open.left,
                labels(&left_options),
                open.right,
                labels(&right_options)
            );
            if !left_options.is_empty() && !right_options.is_empty() {
                pairs.push(StartingPair {
                    center: center.clone(),
                    second: second.clone(),
                    left_options,
                    right_options,
                });
            }
        }
        Ok(pairs)
    }

    /// Feasible starting pairs for every center, in name order.
    pub fn starting_pairs(&self) -> Result<Vec<StartingPair>, SolverError> {
        let mut pairs = vec![];
        for center in &self.nuts {
            pairs.extend(self.starting_pairs_for(center)?);
        }
        info!("found {} feasible starting pairs", pairs.len());
        Ok(pairs)
    }

    /// Try every ordered (center, second) pair and trace each attempt to
    /// its end. Returns all placement orders that closed the ring; an empty
    /// Vec means this nut set has no solution. Err is reserved for
    /// inconsistent input data, never for a failed search.
    pub fn solve(&self) -> Result<Vec<Vec<Nut>>, SolverError> {
        let mut solutions = vec![];
        let mut attempts = 0;
        for center in &self.nuts {
            debug!("trying center nut {}", center);
            for second in &self.nuts {
                if second == center {
                    continue;
                }
                attempts += 1;
                let remaining: Vec<Nut> = self
                    .nuts
                    .iter()
                    .filter(|nut| *nut != center && *nut != second)
                    .cloned()
                    .collect();
                let node = TraceNode::new(center.clone(), second.clone(), remaining);
                match node.trace()? {
                    TraceOutcome::Solved(path) => {
                        info!(
                            "starting pair ({}, {}) closed the ring: [{}]",
                            center,
                            second,
                            labels(&path)
                        );
                        solutions.push(path);
                    }
                    TraceOutcome::Exhausted(path) => {
                        debug!(
                            "starting pair ({}, {}) ran dry after [{}]",
                            center,
                            second,
                            labels(&path)
                        );
                    }
                }
            }
        }
        info!(
            "search finished: {} of {} starting pairs closed the ring",
            solutions.len(),
            attempts
        );
        Ok(solutions)
    }
}
