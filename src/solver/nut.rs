use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::solver::edge::Edge;
use crate::solver::error::SolverError;

/// One hexagonal puzzle piece: a ring of numbers read counter-clockwise
/// around the rim, plus the directed edge pairs derived from it once at
/// construction. Rim lookups wrap in both directions so callers can walk
/// off either end freely.
#[derive(Clone, Debug)]
pub struct Nut {
    numbers: Vec<u8>,
    name: String,
    edges_list: Vec<Edge>,
    edges_set: HashSet<Edge>,
}

impl Nut {
    pub fn new(numbers: Vec<u8>, name: &str) -> Result<Self, SolverError> {
        if numbers.is_empty() {
            return Err(SolverError::InvalidPiece {
                name: name.to_string(),
            });
        }
        let mut edges_list = Vec::with_capacity(numbers.len());
        for i in 0..numbers.len() - 1 {
            edges_list.push((numbers[i], numbers[i + 1]));
        }
        // wraparound edge from the last value back to the first
        edges_list.push((numbers[numbers.len() - 1], numbers[0]));
        // repeated adjacent pairs collapse in the set; the list keeps them all
        let edges_set = edges_list.iter().copied().collect();
        Ok(Self {
            numbers,
            name: name.to_string(),
            edges_list,
            edges_set,
        })
    }

    // getter for private field
    pub fn name(&self) -> &str {
        &self.name
    }

    // getter for private field
    #[allow(dead_code)]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Directed edges in rim order, one per position.
    #[allow(dead_code)]
    pub fn edges(&self) -> &[Edge] {
        &self.edges_list
    }

    /// Rim value at `index`, wrapping in both directions: on a six-sided nut,
    /// index 6 reads the same value as index 0 and index -1 reads the last.
    pub fn value_at(&self, index: i64) -> u8 {
        let len = self.numbers.len() as i64;
        self.numbers[index.rem_euclid(len) as usize]
    }

    /// Position of `value` on the rim. Callers pass a pivot value already
    /// read off another nut; a miss means the nut set is inconsistent.
    pub fn index_of(&self, value: u8) -> Result<usize, SolverError> {
        self.numbers
            .iter()
            .position(|&number| number == value)
            .ok_or_else(|| SolverError::ValueNotFound {
                name: self.name.clone(),
                value,
            })
    }

    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edges_set.contains(&edge)
    }
}

// nuts are identified, compared, and sorted by name alone; sorting a pool
// by name is what fixes the scan order everywhere the solver walks one
impl PartialEq for Nut {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Nut {}

impl Hash for Nut {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Nut {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nut {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Nut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Comma-separated nut names, for narration and reports.
pub fn labels(nuts: &[Nut]) -> String {
    nuts.iter().map(Nut::name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_edges_derived_from_numbers() {
        let nut = Nut::new(vec![1, 2, 3, 4, 5, 6], "a").unwrap();
        assert_eq!(
            nut.edges(),
            [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)]
        );
        assert!(nut.has_edge((1, 2)));
        assert!(nut.has_edge((6, 1)));
        // directed: the reverse of a present edge is not present here
        assert!(!nut.has_edge((2, 1)));
        assert!(!nut.has_edge((1, 3)));
    }

    #[test]
    fn test_edges_keep_repeated_adjacent_pairs() {
        let nut = Nut::new(vec![1, 2, 1, 2], "x").unwrap();
        assert_eq!(nut.edges(), [(1, 2), (2, 1), (1, 2), (2, 1)]);
        assert_eq!(nut.edges().len(), nut.numbers().len());
        assert!(nut.has_edge((1, 2)));
        assert!(nut.has_edge((2, 1)));
    }

    #[test]
    fn test_single_number_wraps_to_itself() {
        let nut = Nut::new(vec![9], "x").unwrap();
        assert_eq!(nut.edges(), [(9, 9)]);
        assert_eq!(nut.value_at(5), 9);
        assert_eq!(nut.value_at(-5), 9);
    }

    #[test]
    fn test_value_at_wraps_both_directions() {
        let nut = Nut::new(vec![1, 2, 3, 4, 5, 6], "a").unwrap();
        assert_eq!(nut.value_at(0), 1);
        assert_eq!(nut.value_at(5), 6);
        assert_eq!(nut.value_at(6), 1);
        assert_eq!(nut.value_at(7), 2);
        assert_eq!(nut.value_at(-1), 6);
        assert_eq!(nut.value_at(-6), 1);
        assert_eq!(nut.value_at(-7), 6);
        for index in -3..3 {
            assert_eq!(nut.value_at(index), nut.value_at(index + 6));
            assert_eq!(nut.value_at(index), nut.value_at(index - 12));
        }
    }

    #[test]
    fn test_index_of_present_and_missing() {
        let nut = Nut::new(vec![1, 3, 5, 4, 2, 6], "d").unwrap();
        assert_eq!(nut.index_of(1).unwrap(), 0);
        assert_eq!(nut.index_of(5).unwrap(), 2);
        assert_eq!(nut.index_of(6).unwrap(), 5);
        match nut.index_of(9) {
            Ok(_) => panic!("Test failed, should error"),
            Err(error) => assert_eq!(error.to_string(), "nut d has no rim value 9"),
        }
    }

    #[test]
    fn empty_number_sequence() {
        match Nut::new(vec![], "empty") {
            Ok(_) => panic!("Test failed, should error"),
            Err(error) => assert_eq!(
                error.to_string(),
                "invalid nut \"empty\": the number sequence is empty"
            ),
        }
    }

    #[test]
    fn test_nuts_sort_by_name() {
        let mut nuts = vec![
            Nut::new(vec![1, 3, 5, 2, 4, 6], "c").unwrap(),
            Nut::new(vec![1, 2, 3, 4, 5, 6], "a").unwrap(),
            Nut::new(vec![1, 2, 5, 6, 3, 4], "b").unwrap(),
        ];
        nuts.sort();
        assert_eq!(labels(&nuts), "a, b, c");
    }

    #[test]
    fn test_labels() {
        let nuts = vec![
            Nut::new(vec![1, 2, 3, 4, 5, 6], "a").unwrap(),
            Nut::new(vec![1, 2, 5, 6, 3, 4], "b").unwrap(),
        ];
        assert_eq!(labels(&nuts), "a, b");
        assert_eq!(labels(&[]), "");
    }
}
