use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use hexworld::grid::world_pos;
use hexworld::rings::{gp_to_rp, ring};
use hexworld::sockets::{
    canonical_sgapos, sgap_to_arp, supergrid_alternate, supergrid_asg_neighbors,
};
use hexworld::supergrid::{SUPERTILE_SIZE, cell_index, gp_to_sgp, is_valid_subindex, sgp_to_ugp};
use hexworld::{
    GridPos, RegionAddr, RingPos, Socket, SocketAddr, SubPos, SuperDirection, SuperPos,
    SupertileAddress, SupertileContent, UltraAddress, WorldConfig, WorldPos, generate_supertile,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML world configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the configured world seed
    #[arg(short, long)]
    seed: Option<u32>,
    /// Print machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one supertile and print its glyphs
    Supertile {
        #[arg(long, allow_negative_numbers = true)]
        x: i32,
        #[arg(long, allow_negative_numbers = true)]
        y: i32,
    },
    /// Show every coordinate space a tile belongs to
    Locate {
        #[arg(long, allow_negative_numbers = true)]
        x: i32,
        #[arg(long, allow_negative_numbers = true)]
        y: i32,
    },
    /// Show the canonical form, alternate, neighbours and region index of a socket
    Socket {
        #[arg(long, allow_negative_numbers = true)]
        x: i32,
        #[arg(long, allow_negative_numbers = true)]
        y: i32,
        #[arg(long, value_enum)]
        socket: SocketArg,
    },
    /// List the tiles of one ring around a centre
    Ring {
        #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
        x: i32,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
        y: i32,
        #[arg(long)]
        radius: u32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SocketArg {
    Ne,
    E,
    Se,
    Sw,
    W,
    Nw,
    Center,
}

impl From<SocketArg> for Socket {
    fn from(arg: SocketArg) -> Self {
        match arg {
            SocketArg::Ne => Socket::Edge(SuperDirection::NorthEast),
            SocketArg::E => Socket::Edge(SuperDirection::East),
            SocketArg::Se => Socket::Edge(SuperDirection::SouthEast),
            SocketArg::Sw => Socket::Edge(SuperDirection::SouthWest),
            SocketArg::W => Socket::Edge(SuperDirection::West),
            SocketArg::Nw => Socket::Edge(SuperDirection::NorthWest),
            SocketArg::Center => Socket::Center,
        }
    }
}

#[derive(Serialize)]
struct TileReport {
    gp: GridPos,
    world: WorldPos,
    supertile: SupertileAddress,
    cell_index: Option<usize>,
    ultratile: UltraAddress,
    ring: Option<RingPos>,
}

#[derive(Serialize)]
struct SocketReport {
    address: SocketAddr,
    canonical: SocketAddr,
    alternate: SocketAddr,
    neighbors: Vec<SocketAddr>,
    region: RegionAddr,
}

#[derive(Serialize)]
struct SupertileReport<'a> {
    seed: u32,
    fingerprint: String,
    content: &'a SupertileContent,
}

fn load_config(path: Option<&Path>, seed: Option<u32>) -> Result<WorldConfig> {
    let mut config = match path {
        Some(path) => WorldConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => WorldConfig::default(),
    };
    if let Some(seed) = seed {
        log::debug!("seed overridden: {} -> {seed}", config.seed);
        config.seed = seed;
    }
    Ok(config)
}

/// Lays the 7x7 interior box out row by row, north at the top, shifting each
/// row so hex neighbours line up. Invalid slots print as blanks.
fn render_grid(content: &SupertileContent) -> String {
    let mut out = String::new();
    for y in (0..SUPERTILE_SIZE).rev() {
        out.push_str(&" ".repeat(y as usize));
        let row: Vec<&str> = (0..SUPERTILE_SIZE)
            .map(|x| {
                let sub = SubPos::new(x, y);
                if is_valid_subindex(sub) { content.glyph_at(sub).unwrap_or("?") } else { " " }
            })
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize report")?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.seed)?;

    match cli.command {
        Commands::Supertile { x, y } => {
            let content = generate_supertile(config.seed, &config.vocabulary, SuperPos::new(x, y));
            if cli.json {
                return print_json(&SupertileReport {
                    seed: config.seed,
                    fingerprint: format!("0x{:016x}", content.fingerprint()),
                    content: &content,
                });
            }
            println!("Seed: {}  Supertile: ({x}, {y})", config.seed);
            print!("{}", render_grid(&content));
            println!("Fingerprint: 0x{:016x}", content.fingerprint());
        }
        Commands::Locate { x, y } => {
            let gp = GridPos::new(x, y);
            let supertile = gp_to_sgp(gp);
            let report = TileReport {
                gp,
                world: world_pos(gp, &config.geometry),
                supertile,
                cell_index: cell_index(supertile.sub),
                ultratile: sgp_to_ugp(supertile.sgp, &config.layout),
                ring: gp_to_rp(gp, &config.geometry),
            };
            if cli.json {
                return print_json(&report);
            }
            println!("Tile: ({}, {})", gp.x, gp.y);
            println!("World: ({:.3}, {:.3})", report.world.x, report.world.y);
            println!(
                "Supertile: ({}, {}) slot ({}, {}) cell {:?}",
                supertile.sgp.x,
                supertile.sgp.y,
                supertile.sub.x,
                supertile.sub.y,
                report.cell_index
            );
            println!(
                "Ultratile: ({}, {}) offset ({}, {})",
                report.ultratile.ugp.x,
                report.ultratile.ugp.y,
                report.ultratile.offset.x,
                report.ultratile.offset.y
            );
            match report.ring {
                Some(rp) => println!("Ring: radius {} index {}", rp.radius, rp.index),
                None => println!("Ring: unresolved"),
            }
        }
        Commands::Socket { x, y, socket } => {
            let socket = Socket::from(socket);
            if socket == Socket::Center && !config.layout.has_center_socket() {
                return Err(anyhow!(
                    "layout has {} sockets per supertile and no centre socket",
                    config.layout.sockets_per_supertile
                ));
            }
            let address = SocketAddr::new(SuperPos::new(x, y), socket);
            let report = SocketReport {
                address,
                canonical: canonical_sgapos(address),
                alternate: supergrid_alternate(address),
                neighbors: supergrid_asg_neighbors(address),
                region: sgap_to_arp(address, &config.layout),
            };
            if cli.json {
                return print_json(&report);
            }
            println!("Socket: {:?}", report.address);
            println!("Canonical: {:?}", report.canonical);
            println!("Alternate: {:?}", report.alternate);
            for neighbor in &report.neighbors {
                println!("Neighbour: {neighbor:?}");
            }
            println!(
                "Region: ({}, {}) index {}",
                report.region.region.x, report.region.region.y, report.region.index
            );
        }
        Commands::Ring { x, y, radius } => {
            let tiles: Vec<GridPos> = ring(GridPos::new(x, y), radius).collect();
            if cli.json {
                return print_json(&tiles);
            }
            for (index, tile) in tiles.iter().enumerate() {
                println!("{index}: ({}, {})", tile.x, tile.y);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}
