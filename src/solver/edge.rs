use crate::solver::error::SolverError;
use crate::solver::nut::Nut;

/// A directed pair of adjacent rim values on one nut.
pub type Edge = (u8, u8);

/// The two connections left unmatched after two nuts are aligned on a
/// shared pivot value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenEdges {
    pub left: Edge,
    pub right: Edge,
}

/// Suppose `nut_1` and `nut_2` sit next to each other, matched up at
/// `index_1` and `index_2`. The pairing leaves one open edge on each side
/// of the pivot: a third nut closes the left side by carrying `left`, or
/// the right side by carrying `right`. Swapping the two nuts (with their
/// indices) swaps left and right.
///
/// The rim positions must hold the same value, otherwise the alignment is
/// nonsense and this errors out.
pub fn open_edges(
    nut_1: &Nut,
    index_1: i64,
    nut_2: &Nut,
    index_2: i64,
) -> Result<OpenEdges, SolverError> {
    let value_1 = nut_1.value_at(index_1);
    let value_2 = nut_2.value_at(index_2);
    if value_1 != value_2 {
        return Err(SolverError::Mismatch {
            name_1: nut_1.name().to_string(),
            index_1,
            name_2: nut_2.name().to_string(),
            index_2,
        });
    }

    Ok(OpenEdges {
        left: (nut_2.value_at(index_2 + 1), nut_1.value_at(index_1 - 1)),
        right: (nut_1.value_at(index_1 + 1), nut_2.value_at(index_2 - 1)),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_nuts() -> (Nut, Nut, Nut) {
        (
            Nut::new(vec![1, 2, 3, 4, 5, 6], "a").unwrap(),
            Nut::new(vec![1, 2, 5, 6, 3, 4], "b").unwrap(),
            Nut::new(vec![1, 3, 5, 2, 4, 6], "c").unwrap(),
        )
    }

    #[test]
    fn test_open_edges_on_shared_one() {
        let (a, b, c) = sample_nuts();
        assert_eq!(
            open_edges(&a, 0, &b, 0).unwrap(),
            OpenEdges {
                left: (2, 6),
                right: (2, 4),
            }
        );
        assert_eq!(
            open_edges(&a, 0, &c, 0).unwrap(),
            OpenEdges {
                left: (3, 6),
                right: (2, 6),
            }
        );
    }

    #[test]
    fn test_open_edges_away_from_index_zero() {
        let (a, _, c) = sample_nuts();
        // a[1] == c[3] == 2
        assert_eq!(
            open_edges(&a, 1, &c, 3).unwrap(),
            OpenEdges {
                left: (4, 1),
                right: (3, 5),
            }
        );
    }

    #[test]
    fn test_open_edges_with_wrapped_index() {
        let (a, _, c) = sample_nuts();
        // index -5 on a reads the same rim position as index 1
        assert_eq!(
            open_edges(&a, -5, &c, 3).unwrap(),
            OpenEdges {
                left: (4, 1),
                right: (3, 5),
            }
        );
    }

    #[test]
    fn test_open_edges_swaps_sides_with_arguments() {
        let (a, _, c) = sample_nuts();
        let forward = open_edges(&a, 1, &c, 3).unwrap();
        let backward = open_edges(&c, 3, &a, 1).unwrap();
        assert_eq!(forward.left, backward.right);
        assert_eq!(forward.right, backward.left);
    }

    #[test]
    fn unequal_pivot_values() {
        let (a, _, c) = sample_nuts();
        // a[0] == 1 but c[1] == 3
        match open_edges(&a, 0, &c, 1) {
            Ok(_) => panic!("Test failed, should error"),
            Err(error) => assert_eq!(error.to_string(), "nuts do not match: a[0] != c[1]"),
        }
    }

    #[test]
    fn test_open_edges_succeeds_on_every_shared_pivot() {
        let (a, _, c) = sample_nuts();
        // both nuts carry all of 1..=6, so every alignment through index_of
        // lands on equal values and must succeed
        for index in 0..6 {
            let pivot = a.value_at(index);
            let other = c.index_of(pivot).unwrap() as i64;
            assert!(open_edges(&a, index, &c, other).is_ok());
        }
    }
}
