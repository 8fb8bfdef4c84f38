use anarchy::{cohort_shuffle, prng, rev_cohort_shuffle, rev_prng};
use anyhow::{Result, ensure};
use clap::Parser;
use hexworld::rings::{gp_to_rp, rp_to_gp, rp_to_spiral, spiral_to_rp};
use hexworld::sockets::{arp_to_sgap, canonical_sgapos, sgap_to_arp, supergrid_alternate};
use hexworld::supergrid::{gp_to_sgp, is_valid_subindex, sgp_to_gp, sgp_to_ugp, ugp_to_sgp};
use hexworld::{
    GridPos, Socket, SocketAddr, SuperDirection, SuperPos, WorldConfig, generate_supertile,
    generate_tile,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    cases: u32,
}

fn coord(rng: &mut ChaCha8Rng, extent: i32) -> i32 {
    let span = 2 * extent as u64 + 1;
    (rng.next_u64() % span) as i32 - extent
}

fn check_mixing(rng: &mut ChaCha8Rng) -> Result<()> {
    let x = rng.next_u32();
    let seed = rng.next_u32();
    ensure!(rev_prng(prng(x, seed), seed) == x, "prng inverse failed for x={x} seed={seed}");

    let n = rng.next_u32() % 10_000 + 1;
    let index = rng.next_u32() % n;
    let shuffled = cohort_shuffle(index, n, seed);
    ensure!(shuffled < n, "cohort shuffle left range: {index} -> {shuffled} of {n}");
    ensure!(
        rev_cohort_shuffle(shuffled, n, seed) == index,
        "cohort shuffle inverse failed for index={index} n={n} seed={seed}"
    );
    Ok(())
}

fn check_addressing(rng: &mut ChaCha8Rng, config: &WorldConfig) -> Result<()> {
    let gp = GridPos::new(rng.next_u32() as i32, rng.next_u32() as i32);
    let address = gp_to_sgp(gp);
    ensure!(is_valid_subindex(address.sub), "{gp:?} mapped to invalid slot {:?}", address.sub);
    ensure!(sgp_to_gp(address) == gp, "{gp:?} did not survive supertile round trip");

    let ultra = sgp_to_ugp(address.sgp, &config.layout);
    ensure!(
        ugp_to_sgp(ultra, &config.layout) == address.sgp,
        "ultratile round trip failed for {:?}",
        address.sgp
    );

    let direction = SuperDirection::ALL[(rng.next_u32() % 6) as usize];
    let socket = SocketAddr::new(address.sgp, Socket::Edge(direction));
    ensure!(
        canonical_sgapos(socket) == canonical_sgapos(supergrid_alternate(socket)),
        "{socket:?} and its alternate disagree on canonical form"
    );
    let region = sgap_to_arp(socket, &config.layout);
    ensure!(
        arp_to_sgap(region, &config.layout) == canonical_sgapos(socket),
        "{socket:?} did not survive region round trip"
    );
    Ok(())
}

fn check_rings(rng: &mut ChaCha8Rng, config: &WorldConfig) -> Result<()> {
    let gp = GridPos::new(rng.next_u32() as i32, rng.next_u32() as i32);
    let rp = gp_to_rp(gp, &config.geometry);
    ensure!(rp.is_some(), "{gp:?} has no ring position");
    if let Some(rp) = rp {
        ensure!(rp_to_gp(rp) == gp, "{gp:?} -> {rp:?} did not round trip");
    }

    let spiral = rng.next_u64();
    let rp = spiral_to_rp(spiral);
    ensure!(rp_to_spiral(rp) == Some(spiral), "spiral index {spiral} -> {rp:?} did not round trip");
    Ok(())
}

fn check_generation(rng: &mut ChaCha8Rng, config: &WorldConfig) -> Result<()> {
    let gp = GridPos::new(coord(rng, 1_000_000), coord(rng, 1_000_000));
    let address = gp_to_sgp(gp);
    let whole = generate_supertile(config.seed, &config.vocabulary, address.sgp);
    let alone = generate_tile(config.seed, &config.vocabulary, gp);
    ensure!(
        whole.cell_at(address.sub).as_ref() == Some(&alone),
        "tile {gp:?} differs from its supertile {:?}",
        address.sgp
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} cases...", args.seed, args.cases);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let config = WorldConfig { seed: rng.next_u32(), ..WorldConfig::default() };
    log::debug!("world seed {}", config.seed);

    for case in 0..args.cases {
        check_mixing(&mut rng)?;
        check_addressing(&mut rng, &config)?;
        check_rings(&mut rng, &config)?;
        if case % 16 == 0 {
            check_generation(&mut rng, &config)?;
        }
        if case > 0 && case % 1000 == 0 {
            log::info!("{case} cases passed");
        }
    }

    let origin = generate_supertile(config.seed, &config.vocabulary, SuperPos::new(0, 0));
    println!(
        "Fuzz complete: {} cases, world seed {}, origin fingerprint 0x{:016x}",
        args.cases,
        config.seed,
        origin.fingerprint()
    );
    Ok(())
}
