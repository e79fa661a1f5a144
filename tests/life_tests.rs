use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sparselife::CellSize;
use sparselife::cell::Cell;
use sparselife::config::Config;
use sparselife::generation::Generation;
use sparselife::init::initialize_from;
use sparselife::initialize;
use sparselife::transition;
use sparselife::world::World;

fn size(n: u32) -> CellSize {
    CellSize::new(n).unwrap()
}

fn soup(cells: &[(i64, i64)], cell_size: u32) -> Generation {
    cells
        .iter()
        .map(|&(c, r)| Cell::at(c, r, size(cell_size)))
        .collect()
}

#[test]
fn test_config_to_first_steps() -> anyhow::Result<()> {
    let config = Config {
        screen_width: 120,
        screen_height: 90,
        cell_size: size(3),
        live_chance: 35,
        ..Config::default()
    }
    .validate()?;

    let mut rng = StdRng::seed_from_u64(7);
    let world = World::new(&config);

    let mut generation = initialize_from(&config, &mut rng);
    assert!(generation.len() <= 40 * 30);

    for _ in 0..50 {
        let (next, evals) = world.transition_counted(&generation);

        // Every candidate neighbors a living cell, so there are at most 8 per living cell
        assert_eq!(evals.live, generation.len());
        assert!(evals.candidates <= 8 * generation.len());

        for cell in &next {
            assert_eq!(cell.x % 3, 0);
            assert_eq!(cell.y % 3, 0);
        }

        generation = next;
    }

    Ok(())
}

#[test]
fn test_full_grid_collapses_to_corners() {
    // A fully alive 4x4 square keeps only its corners: they have 3 neighbors, every other
    // cell has 5 or 8.
    let mut rng = StdRng::seed_from_u64(0);
    let full = initialize(4, 4, size(2), 100 + 1, &mut rng);

    assert_eq!(full.len(), 16);

    let next = transition(&full, size(2));

    assert!(next.contains(&Cell::at(0, 0, size(2))));
    assert!(next.contains(&Cell::at(3, 0, size(2))));
    assert!(next.contains(&Cell::at(0, 3, size(2))));
    assert!(next.contains(&Cell::at(3, 3, size(2))));
    assert!(!next.contains(&Cell::at(1, 1, size(2))));
}

#[test]
fn test_zero_cell_size_rejected_before_the_engine() {
    // Size 0 would make every cell its own neighbor; it can't be built, parsed, or configured.
    assert_eq!(CellSize::new(0), None);

    let err = Config::from_lookup(|var| (var == "LIFE_CELL_SIZE").then(|| "0".to_string()))
        .unwrap_err();
    assert!(err.to_string().contains("LIFE_CELL_SIZE"));

    // The smallest size still gives 8 distinct neighbors and a full 5x5 grid
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(initialize(5, 5, CellSize::MIN, 101, &mut rng).len(), 25);

    let block = soup(&[(0, 0), (1, 0), (0, 1), (1, 1)], 1);
    assert_eq!(transition(&block, CellSize::MIN), block);
}

#[test]
fn test_beehive_is_still() {
    let beehive = soup(&[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)], 5);

    assert_eq!(transition(&beehive, size(5)), beehive);
}

#[test]
fn test_sparse_work_is_population_bound() {
    // One blinker in a corner of a huge plane
    let blinker = soup(&[(1_000_000, 5), (1_000_001, 5), (1_000_002, 5)], 3);
    let (_, evals) = World::with_cell_size(size(3)).transition_counted(&blinker);

    assert_eq!(evals.live, 3);
    assert_eq!(evals.candidates, 12);
}

fn arb_generation() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-8i64..8, -8i64..8), 0..40)
}

proptest! {
    #[test]
    fn transition_is_deterministic(cells in arb_generation(), cell_size in 1u32..6) {
        let generation = soup(&cells, cell_size);

        prop_assert_eq!(
            transition(&generation, size(cell_size)),
            transition(&generation, size(cell_size))
        );
    }

    #[test]
    fn transition_commutes_with_translation(
        cells in arb_generation(),
        dx in -50i64..50,
        dy in -50i64..50,
    ) {
        let generation = soup(&cells, 1);
        let shifted: Generation = generation.iter().map(|c| Cell::new(c.x + dx, c.y + dy)).collect();

        let expected: Generation = transition(&generation, size(1))
            .iter()
            .map(|c| Cell::new(c.x + dx, c.y + dy))
            .collect();

        prop_assert_eq!(transition(&shifted, size(1)), expected);
    }

    #[test]
    fn cell_size_only_scales(cells in arb_generation(), cell_size in 2u32..9) {
        let unit = transition(&soup(&cells, 1), size(1));
        let scaled = transition(&soup(&cells, cell_size), size(cell_size));

        let s = cell_size as i64;
        let expected: Generation = unit.iter().map(|c| Cell::new(c.x * s, c.y * s)).collect();

        prop_assert_eq!(scaled, expected);
    }

    #[test]
    fn births_only_next_to_life(cells in arb_generation()) {
        let generation = soup(&cells, 1);
        let next = transition(&generation, size(1));

        for cell in &next {
            let touches_life = generation.contains(cell)
                || cell.neighbors(size(1)).iter().any(|n| generation.contains(n));

            prop_assert!(touches_life);
        }
    }
}
