use hexworld::grid::{grid_distance, grid_pos, neighbor, world_pos};
use hexworld::rings::{gp_to_spiral, spiral_to_gp};
use hexworld::sockets::{arp_to_sgap, canonical_sgapos, sgap_to_arp, supergrid_alternate};
use hexworld::supergrid::{
    SUPERTILE_CELLS, gp_to_sgp, is_valid_subindex, sgp_to_gp, sgp_to_ugp, ugp_to_sgp,
};
use hexworld::{
    Direction, Geometry, GridLayout, GridPos, Socket, SocketAddr, SubPos, SuperDirection,
    SuperPos, Vocabulary, WorldConfig, generate_supertile, generate_tile,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use std::ops::RangeInclusive;

/// The 37 interior slots, listed row by row (`y` fixed per row).
const FOOTPRINT_ROWS: [(i32, RangeInclusive<i32>); 7] = [
    (0, 0..=3),
    (1, 0..=4),
    (2, 0..=5),
    (3, 0..=6),
    (4, 1..=6),
    (5, 2..=6),
    (6, 3..=6),
];

#[test]
fn footprint_predicate_matches_listed_slots() {
    let mut listed = 0;
    for y in -1..=7 {
        for x in -1..=7 {
            let expected = FOOTPRINT_ROWS
                .iter()
                .any(|(row, span)| *row == y && span.contains(&x));
            listed += usize::from(expected);
            assert_eq!(is_valid_subindex(SubPos::new(x, y)), expected, "({x}, {y})");
        }
    }
    assert_eq!(listed, SUPERTILE_CELLS);
}

fn check_pipeline(x: i32, y: i32, config: &WorldConfig) -> Result<(), String> {
    let gp = GridPos::new(x, y);
    let wp = world_pos(gp, &config.geometry);
    if grid_pos(wp, &config.geometry) != gp {
        return Err(format!("world round trip failed for {gp:?}"));
    }

    let address = gp_to_sgp(gp);
    if sgp_to_gp(address) != gp {
        return Err(format!("supertile round trip failed for {gp:?}"));
    }

    let ultra = sgp_to_ugp(address.sgp, &config.layout);
    if ugp_to_sgp(ultra, &config.layout) != address.sgp {
        return Err(format!("ultratile round trip failed for {:?}", address.sgp));
    }

    for direction in SuperDirection::ALL {
        let socket = SocketAddr::new(address.sgp, Socket::Edge(direction));
        let arp = sgap_to_arp(socket, &config.layout);
        if arp != sgap_to_arp(supergrid_alternate(socket), &config.layout) {
            return Err(format!("both names of {socket:?} should share a region index"));
        }
        if arp_to_sgap(arp, &config.layout) != canonical_sgapos(socket) {
            return Err(format!("region round trip failed for {socket:?}"));
        }
    }

    for direction in Direction::ALL {
        if grid_distance(gp, neighbor(gp, direction)) != 1 {
            return Err(format!("{direction:?} neighbour of {gp:?} is not adjacent"));
        }
    }
    Ok(())
}

#[test]
fn addressing_pipeline_round_trips() {
    let config = WorldConfig {
        layout: GridLayout::new(12, 4, 64).expect("layout should validate"),
        geometry: Geometry { cell_size: 18.0, ..Geometry::default() },
        ..WorldConfig::default()
    };
    let mut runner = TestRunner::new(ProptestConfig::with_cases(2048));
    let coords = (-5_000_000_i32..5_000_000, -5_000_000_i32..5_000_000);

    runner
        .run(&coords, |(x, y)| {
            check_pipeline(x, y, &config).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("addressing pipeline should round trip");
}

#[test]
fn any_tile_can_be_generated_in_isolation() {
    let vocabulary = Vocabulary::english();
    let mut runner = TestRunner::new(ProptestConfig::with_cases(256));

    runner
        .run(&(any::<u32>(), any::<i32>(), any::<i32>()), |(seed, x, y)| {
            let gp = GridPos::new(x, y);
            let address = gp_to_sgp(gp);
            let content = generate_supertile(seed, &vocabulary, address.sgp);
            let expected = content.cell_at(address.sub).ok_or_else(|| {
                TestCaseError::fail(format!("{gp:?} mapped to invalid slot {:?}", address.sub))
            })?;
            if generate_tile(seed, &vocabulary, gp) != expected {
                return Err(TestCaseError::fail(format!("tile {gp:?} disagrees with supertile")));
            }
            Ok(())
        })
        .expect("tile generation should match supertile extraction");
}

#[test]
fn spiral_walk_covers_a_supertile_neighbourhood() {
    let geometry = Geometry::default();
    let center = GridPos::new(3, 3);
    for index in 0..(1 + 3 * 3 * 4) {
        let gp = spiral_to_gp(center, index);
        assert_eq!(gp_to_spiral(center, gp, &geometry), Some(index));
        assert_eq!(gp_to_sgp(gp).sgp, SuperPos::new(0, 0), "spiral index {index}");
    }
}
