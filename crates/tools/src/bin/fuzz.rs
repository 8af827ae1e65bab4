use anyhow::{Result, bail};
use clap::Parser;
use levelgen::autotile::orientation_for;
use levelgen::config::CAVE_BORDER_THICKNESS;
use levelgen::dungeon::{MIN_DUNGEON_SIDE, macro_cell_bounds, macro_path, room_slot};
use levelgen::regions::compute_regions;
use levelgen::rng::SeededStream;
use levelgen::{GeneratedLayout, GenerationConfig, GenerationError, LayoutStrategy, TileKind};
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
}

fn pick_extent(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    min_value + rng.next_u64() as usize % (max_value - min_value + 1)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting layout fuzz on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut empty_levels = 0;

    for run in 0..args.runs {
        let config = GenerationConfig::new(
            rng.next_u64(),
            pick_extent(&mut rng, MIN_DUNGEON_SIDE, 96),
            pick_extent(&mut rng, MIN_DUNGEON_SIDE, 72),
        );
        let fraction = 0.30 + (rng.next_u64() % 26) as f64 / 100.0;
        debug!("run {run}: {config:?} cave fraction {fraction:.2}");

        for strategy in [
            LayoutStrategy::Cave { initial_wall_fraction: fraction },
            LayoutStrategy::Dungeon,
            LayoutStrategy::arena(),
        ] {
            let layout = match strategy.generate(&config) {
                Ok(layout) => layout,
                Err(GenerationError::EmptyLevel { .. }) => {
                    empty_levels += 1;
                    continue;
                }
                Err(error) => bail!("run {run}: {strategy:?} failed on {config:?}: {error}"),
            };
            check_invariants(&strategy, &config, &layout)
                .map_err(|message| anyhow::anyhow!("run {run}: {message} ({config:?})"))?;
        }
    }

    info!("{empty_levels} configurations produced empty levels");
    println!("Fuzzing completed successfully.");
    Ok(())
}

fn check_invariants(
    strategy: &LayoutStrategy,
    config: &GenerationConfig,
    layout: &GeneratedLayout,
) -> Result<(), String> {
    if compute_regions(&layout.grid).len() > 1 {
        return Err(format!("Invariant failed: {strategy:?} floor is disconnected"));
    }

    let thickness = match *strategy {
        LayoutStrategy::Cave { .. } => CAVE_BORDER_THICKNESS,
        LayoutStrategy::Arena { border_thickness } => border_thickness,
        LayoutStrategy::Dungeon => 1,
    };
    let open_border = layout
        .grid
        .positions()
        .find(|&pos| layout.grid.is_border(pos, thickness) && layout.tile_at(pos) == TileKind::Floor);
    if let Some(pos) = open_border {
        return Err(format!("Invariant failed: {strategy:?} border open at {pos:?}"));
    }

    if *strategy == LayoutStrategy::Dungeon {
        let path = macro_path(&mut SeededStream::new(config.seed));
        for (room, cell) in layout.rooms.iter().zip(path) {
            let bounds = macro_cell_bounds(config.width, config.height, cell);
            let slot = room_slot(bounds, config.width, config.height);
            if !room.rect.within(&slot) {
                return Err(format!("Invariant failed: room {} escapes {slot:?}", room.id));
            }
        }
    }

    if let Some(pos) =
        layout.grid.positions().find(|&pos| orientation_for(&layout.grid, pos) != layout.orientation_at(pos))
    {
        return Err(format!("Invariant failed: stale orientation code at {pos:?}"));
    }

    match strategy.generate(config) {
        Ok(again) if again.fingerprint() == layout.fingerprint() => Ok(()),
        _ => Err(format!("Invariant failed: {strategy:?} is not deterministic")),
    }
}
