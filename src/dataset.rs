use lazy_static::lazy_static;
use serde::Deserialize;

use crate::solver::nut::Nut;

// The nut set from the physical puzzle, sorted by name. Numbers are read
// counter-clockwise around the rim, starting from the 1 stamped on each nut.
const CANONICAL_JSON: &str = r#"[
    {"name": "a", "numbers": [1, 2, 3, 4, 5, 6]},
    {"name": "b", "numbers": [1, 2, 5, 6, 3, 4]},
    {"name": "c", "numbers": [1, 3, 5, 2, 4, 6]},
    {"name": "d", "numbers": [1, 3, 5, 4, 2, 6]},
    {"name": "e", "numbers": [1, 4, 2, 3, 5, 6]},
    {"name": "f", "numbers": [1, 5, 3, 2, 6, 4]},
    {"name": "g", "numbers": [1, 6, 5, 4, 3, 2]}
]"#;

#[derive(Deserialize)]
struct RawNut {
    name: String,
    numbers: Vec<u8>,
}

lazy_static! {
    static ref CANONICAL_NUTS: Vec<Nut> = {
        let raw: Vec<RawNut> =
            serde_json::from_str(CANONICAL_JSON).expect("embedded nut data parses");
        raw.into_iter()
            .map(|nut| Nut::new(nut.numbers, &nut.name).expect("embedded nut data is valid"))
            .collect()
    };
}

/// A fresh copy of the built-in seven nut set.
pub fn canonical_nuts() -> Vec<Nut> {
    CANONICAL_NUTS.clone()
}
