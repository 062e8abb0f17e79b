//! Property tests for the diffusion day loop.
//!
//! Layouts are generated as side-by-side vertical strips of random width
//! and height, which are always collision free and always connected.

use eurodiff_core::{Day, RegionId};
use eurodiff_engine::{Case, CaseConfig, RegionSpec};
use proptest::prelude::*;

fn arb_strips() -> impl Strategy<Value = CaseConfig> {
    prop::collection::vec((1i32..=3, 1i32..=10), 1..=4).prop_map(|strips| {
        let mut x = 1;
        let regions: Vec<RegionSpec> = strips
            .iter()
            .enumerate()
            .map(|(i, &(width, height))| {
                let spec = RegionSpec::new(format!("S{i}"), x, 1, x + width - 1, height);
                x += width;
                spec
            })
            .collect();
        CaseConfig::new(1, regions.len(), regions)
    })
}

fn initial_totals(case: &Case) -> Vec<u64> {
    case.regions()
        .iter()
        .map(|r| r.rect().cell_count() as u64 * 1_000_000)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_currency_is_conserved(cfg in arb_strips(), days in 1usize..40) {
        let mut case = Case::new(&cfg).unwrap();
        let expected = initial_totals(&case);
        for _ in 0..days {
            case.step_day();
            for (i, &total) in expected.iter().enumerate() {
                prop_assert_eq!(case.total_balance(RegionId(i as u32)), total);
            }
        }
    }

    #[test]
    fn completion_is_monotone(cfg in arb_strips()) {
        let mut case = Case::new(&cfg).unwrap();
        let mut seen: Vec<Option<Day>> = vec![None; case.regions().len()];
        while !case.check_completion() {
            for (slot, region) in seen.iter_mut().zip(case.regions()) {
                if let Some(day) = *slot {
                    prop_assert_eq!(region.complete_day(), Some(day));
                    prop_assert!(region.cells(case.arena()).iter().all(|c| c.is_complete()));
                }
                *slot = region.complete_day();
            }
            case.step_day();
        }
        for (slot, region) in seen.iter().zip(case.regions()) {
            if let Some(day) = *slot {
                prop_assert_eq!(region.complete_day(), Some(day));
            }
        }
    }

    #[test]
    fn runs_are_deterministic(cfg in arb_strips()) {
        let mut first = Case::new(&cfg).unwrap();
        let mut second = Case::new(&cfg).unwrap();
        prop_assert_eq!(first.run(), second.run());
        prop_assert_eq!(first.completions(), second.completions());
    }

    #[test]
    fn completions_are_sorted(cfg in arb_strips()) {
        let mut case = Case::new(&cfg).unwrap();
        case.run();
        let completions = case.completions();
        prop_assert_eq!(completions.len(), cfg.regions.len());
        for pair in completions.windows(2) {
            prop_assert!((pair[0].day, &pair[0].name) <= (pair[1].day, &pair[1].name));
        }
    }
}

#[test]
fn single_region_never_steps() {
    let cfg = CaseConfig::new(1, 1, vec![RegionSpec::new("Solo", 1, 1, 10, 10)]);
    let mut case = Case::new(&cfg).unwrap();
    assert_eq!(case.run(), Day(0));
    assert_eq!(case.day(), Day(0));
}
