use log::{debug, trace};

use crate::solver::edge::open_edges;
use crate::solver::error::SolverError;
use crate::solver::nut::{labels, Nut};

/// One attempt at closing the ring from a fixed starting pair. The center
/// nut stays put while the search walks its rim one position per step,
/// chasing the open right edge into the pool of unplaced nuts.
#[derive(Clone, Debug)]
pub struct TraceNode {
    center: Nut,
    center_index: i64,
    second: Nut,
    remaining: Vec<Nut>,
    path: Vec<Nut>,
}

/// How an attempt ended. Both outcomes carry the placement order so far,
/// center first; only `Solved` means every nut found a seat.
#[derive(Debug, PartialEq)]
pub enum TraceOutcome {
    Solved(Vec<Nut>),
    Exhausted(Vec<Nut>),
}

impl TraceNode {
    /// `remaining` is the pool minus the two starting nuts. It is re-sorted
    /// here so the match scan below always runs in name order, whatever
    /// order the caller passed.
    pub fn new(center: Nut, second: Nut, mut remaining: Vec<Nut>) -> Self {
        remaining.sort();
        let path = vec![center.clone(), second.clone()];
        Self {
            center,
            center_index: 0,
            second,
            remaining,
            path,
        }
    }

    /// Chase the open right edge around the center until the pool runs dry.
    /// At each step exactly one candidate is taken: the first nut in name
    /// order carrying the wanted edge. There is no backtracking; a step
    /// with no match ends the attempt.
    pub fn trace(mut self) -> Result<TraceOutcome, SolverError> {
        loop {
            if self.remaining.is_empty() {
                debug!("every nut placed, the ring is closed: [{}]", labels(&self.path));
                return Ok(TraceOutcome::Solved(self.path));
            }

            let pivot = self.center.value_at(self.center_index);
            let second_index = self.second.index_of(pivot)? as i64;
            let open = open_edges(&self.center, self.center_index, &self.second, second_index)?;
            trace!(
                "center {}[{}] = {} against {}[{}], open right edge {:?}",
                self.center,
                self.center_index,
                pivot,
                self.second,
                second_index,
                open.right
            );
            trace!("available nuts: [{}]", labels(&self.remaining));

            let found = self
                .remaining
                .iter()
                .position(|nut| nut.has_edge(open.right));
            match found {
                Some(position) => {
                    let next = self.remaining.remove(position);
                    trace!(
                        "right edge {:?} found on nut {}, extending the chain",
                        open.right,
                        next
                    );
                    self.path.push(next.clone());
                    self.second = next;
                    self.center_index += 1;
                }
                None => {
                    trace!("no available nut carries {:?}", open.right);
                    return Ok(TraceOutcome::Exhausted(self.path));
                }
            }
        }
    }
}
