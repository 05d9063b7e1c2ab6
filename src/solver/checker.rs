use log::debug;

use crate::solver::edge::open_edges;
use crate::solver::error::SolverError;
use crate::solver::nut::{labels, Nut};

/// Independent validation for a claimed arrangement. Where the search only
/// ever chases the right edge forward, the checker walks the whole ring and
/// demands both open edges of every alignment are honored, wraparound
/// included, so it accepts nothing the physical puzzle would not.
#[derive(Clone, Debug)]
pub struct Checker {
    nuts: Vec<Nut>,
}

impl Checker {
    pub fn new(mut nuts: Vec<Nut>) -> Self {
        nuts.sort();
        Self { nuts }
    }

    /// `path[0]` is the center nut, `path[1..]` the surrounding ring in
    /// placement order. True only for a complete, closed arrangement of the
    /// full nut set.
    pub fn check(&self, path: &[Nut]) -> Result<bool, SolverError> {
        if !self.is_permutation(path) {
            debug!(
                "[{}] is not an arrangement of [{}]",
                labels(path),
                labels(&self.nuts)
            );
            return Ok(false);
        }
        if path.len() < 2 {
            debug!("a ring needs a center and at least one more nut");
            return Ok(false);
        }

        let center = &path[0];
        let ring = &path[1..];
        for position in 0..ring.len() {
            let pivot = center.value_at(position as i64);
            let second_index = ring[position].index_of(pivot)? as i64;
            let open = open_edges(center, position as i64, &ring[position], second_index)?;

            let next = &ring[(position + 1) % ring.len()];
            if !next.has_edge(open.right) {
                debug!(
                    "ring open at position {}: {} does not carry the right edge {:?}",
                    position, next, open.right
                );
                return Ok(false);
            }
            let previous = &ring[(position + ring.len() - 1) % ring.len()];
            if !previous.has_edge(open.left) {
                debug!(
                    "ring open at position {}: {} does not carry the left edge {:?}",
                    position, previous, open.left
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    // every nut exactly once, nothing foreign
    fn is_permutation(&self, path: &[Nut]) -> bool {
        let mut path_names: Vec<&str> = path.iter().map(Nut::name).collect();
        path_names.sort_unstable();
        let pool_names: Vec<&str> = self.nuts.iter().map(Nut::name).collect();
        path_names == pool_names
    }
}
