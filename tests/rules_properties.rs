use proptest::prelude::*;
use termlife_core::rules::next_state;
use termlife_core::{engine, Grid, Variant};

fn arb_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

prop_compose! {
    fn arb_grid(max_side: u16)(
        width in 1..=max_side,
        height in 1..=max_side,
    )(
        cells in prop::collection::vec(any::<bool>(), (width as usize) * (height as usize)),
        width in Just(width),
        height in Just(height),
    ) -> Grid {
        let mut grid = Grid::new(width, height);
        for (idx, alive) in cells.into_iter().enumerate() {
            if alive {
                grid.set_alive((idx % width as usize) as i32, (idx / width as usize) as i32);
            }
        }
        grid
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_life_rule_matches_b3_s23(alive in any::<bool>(), n in 0u8..=8) {
        let expected = if alive { n == 2 || n == 3 } else { n == 3 };
        prop_assert_eq!(next_state(Variant::Life, alive, n), expected);
    }

    #[test]
    fn test_seed_cells_never_die(n in 0u8..=8) {
        prop_assert!(next_state(Variant::Seed, true, n));
        prop_assert_eq!(next_state(Variant::Seed, false, n), n == 2);
    }

    #[test]
    fn test_highlife_only_adds_six_to_births(alive in any::<bool>(), n in 0u8..=8) {
        let life = next_state(Variant::Life, alive, n);
        let high = next_state(Variant::HighLife, alive, n);
        if alive || n != 6 {
            prop_assert_eq!(life, high);
        } else {
            prop_assert!(high && !life);
        }
    }

    #[test]
    fn test_daynight_is_symmetric_under_inversion(alive in any::<bool>(), n in 0u8..=8) {
        // B3678/S34678 treats dead cells exactly like live ones.
        let direct = next_state(Variant::DayNight, alive, n);
        let inverted = !next_state(Variant::DayNight, !alive, 8 - n);
        prop_assert_eq!(direct, inverted);
    }

    #[test]
    fn test_neighbor_count_never_exceeds_eight(grid in arb_grid(12)) {
        let (width, height) = grid.dimensions();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                prop_assert!(grid.live_neighbors(x, y) <= 8);
            }
        }
    }

    #[test]
    fn test_tick_preserves_dimensions_and_counts(grid in arb_grid(16), variant in arb_variant()) {
        let mut next = grid.clone();
        let outcome = engine::tick(&mut next, variant);

        prop_assert_eq!(next.dimensions(), grid.dimensions());
        prop_assert_eq!(outcome.alive_before, grid.population());
        prop_assert_eq!(outcome.alive_after, next.population());
        prop_assert_eq!(
            outcome.alive_after,
            outcome.alive_before + outcome.births - outcome.deaths
        );
    }

    #[test]
    fn test_tick_matches_rule_per_cell(grid in arb_grid(10), variant in arb_variant()) {
        let mut next = grid.clone();
        engine::tick(&mut next, variant);

        let (width, height) = grid.dimensions();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let expected = next_state(variant, grid.is_alive(x, y), grid.live_neighbors(x, y));
                prop_assert_eq!(next.is_alive(x, y), expected, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_empty_grid_stays_empty(width in 1u16..40, height in 1u16..40, variant in arb_variant()) {
        let mut grid = Grid::new(width, height);
        let outcome = engine::tick(&mut grid, variant);
        prop_assert!(outcome.is_extinct());
        prop_assert_eq!(grid.population(), 0);
    }
}
