//! Reusable case fixtures.

use eurodiff_engine::{CaseConfig, RegionSpec};

/// The canonical sample document, terminated by `0`.
pub const CANONICAL_INPUT: &str = "\
3
France 1 4 4 6
Spain 3 1 6 3
Portugal 1 1 2 2
1
Luxembourg 1 1 1 1
2
Netherlands 1 3 2 4
Belgium 1 1 2 2
0
";

/// Published results for [`CANONICAL_INPUT`].
pub const CANONICAL_OUTPUT: &str = "\
Case Number 1
Spain 382
Portugal 416
France 1325
Case Number 2
Luxembourg 0
Case Number 3
Belgium 2
Netherlands 2";

/// Build a config whose declared count matches the supplied regions.
pub fn case(number: u32, regions: Vec<RegionSpec>) -> CaseConfig {
    CaseConfig::new(number, regions.len(), regions)
}

/// The three canonical cases as structured configs.
pub fn canonical_cases() -> Vec<CaseConfig> {
    vec![
        case(
            1,
            vec![
                RegionSpec::new("France", 1, 4, 4, 6),
                RegionSpec::new("Spain", 3, 1, 6, 3),
                RegionSpec::new("Portugal", 1, 1, 2, 2),
            ],
        ),
        case(2, vec![RegionSpec::new("Luxembourg", 1, 1, 1, 1)]),
        case(
            3,
            vec![
                RegionSpec::new("Netherlands", 1, 3, 2, 4),
                RegionSpec::new("Belgium", 1, 1, 2, 2),
            ],
        ),
    ]
}

/// Two single-city regions sharing an edge.
pub fn adjacent_pair() -> CaseConfig {
    case(
        1,
        vec![
            RegionSpec::new("West", 1, 1, 1, 1),
            RegionSpec::new("East", 2, 1, 2, 1),
        ],
    )
}

/// Two single-city regions touching only at a corner.
pub fn corner_touch() -> CaseConfig {
    case(
        1,
        vec![
            RegionSpec::new("Low", 1, 1, 1, 1),
            RegionSpec::new("High", 2, 2, 2, 2),
        ],
    )
}

/// Three regions where the second and third both overlap the first.
pub fn overlapping() -> CaseConfig {
    case(
        1,
        vec![
            RegionSpec::new("Base", 1, 1, 3, 3),
            RegionSpec::new("Corner", 3, 3, 4, 4),
            RegionSpec::new("Edge", 1, 3, 1, 5),
        ],
    )
}

/// Two bordering pairs with no path between them.
pub fn split_pairs() -> CaseConfig {
    case(
        1,
        vec![
            RegionSpec::new("A", 1, 1, 2, 2),
            RegionSpec::new("B", 3, 1, 4, 2),
            RegionSpec::new("C", 7, 7, 8, 8),
            RegionSpec::new("D", 9, 7, 10, 8),
        ],
    )
}

/// Vertical strips tiling the full 10x10 grid, `n` regions wide.
///
/// `n` must divide 10.
pub fn strips(n: i32) -> CaseConfig {
    let width = 10 / n;
    let regions = (0..n)
        .map(|i| {
            let xl = i * width + 1;
            RegionSpec::new(format!("Strip{i:02}"), xl, 1, xl + width - 1, 10)
        })
        .collect();
    case(1, regions)
}
