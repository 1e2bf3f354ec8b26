mod config;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use glam::Vec2;
use isle_build::{ActionOutcome, IslandBuilder};
use isle_catalog::{Catalog, ShopTab};
use isle_common::WorldPosition;
use isle_input::{Action, DesktopInput, InputEvent};
use isle_placement::{PlacementBounds, PlacementEngine};
use isle_render::{AsciiRenderer, DebugTextRenderer, DrawKind, Renderer, SceneComposer};
use isle_scenery::{CloudRing, ScatterSeed, Scenery};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "isle-cli", about = "CLI tool for the island builder")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config with layout overrides and a scenery seed
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, layout and catalog summary
    Info,
    /// List catalog items
    Catalog {
        /// Only items on this shop tab
        #[arg(short, long)]
        tab: Option<ShopTab>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a scripted placement session and print the island
    Place {
        /// `ITEM@X,Z`, repeatable; applied in order
        #[arg(short = 'p', long = "place", required = true)]
        steps: Vec<Step>,
        /// Treat coordinates as window pixels picked through the default camera
        #[arg(long)]
        screen: bool,
        /// Also print the composed draw list
        #[arg(long)]
        frame: bool,
    },
    /// Scatter clouds and mountains and summarize them
    Scenery {
        /// Overrides the config seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// One scripted placement: an item id and where the pointer goes.
#[derive(Debug, Clone, PartialEq)]
struct Step {
    item: String,
    at: Vec2,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (item, at) = s
            .split_once('@')
            .ok_or_else(|| format!("expected ITEM@X,Z, got {s:?}"))?;
        let (x, z) = at
            .split_once(',')
            .ok_or_else(|| format!("expected X,Z after '@', got {at:?}"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f32>()
                .map_err(|e| format!("bad coordinate {v:?}: {e}"))
        };
        Ok(Self {
            item: item.trim().to_string(),
            at: Vec2::new(parse(x)?, parse(z)?),
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{},{}", self.item, self.at.x, self.at.y)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Info => info(&config),
        Commands::Catalog { tab, json } => catalog(tab, json)?,
        Commands::Place {
            steps,
            screen,
            frame,
        } => place(&config, &steps, screen, frame)?,
        Commands::Scenery { seed } => scenery(&config, seed),
    }

    Ok(())
}

fn info(config: &AppConfig) {
    let layout = &config.layout;
    let bounds = PlacementBounds::from(&layout.grid);
    println!("isle-cli v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "world: radius={} buildable_radius={} island_disc={}",
        layout.radius,
        layout.buildable_radius,
        layout.island_disc_radius()
    );
    println!(
        "grid: size={} cell={} placement={}..={}",
        layout.grid.size, layout.grid.cell_size, bounds.min, bounds.max
    );
    println!(
        "mountains: {}..{} clouds: {}..{} in {} rings",
        layout.mountains.inner_radius,
        layout.mountains.outer_radius,
        layout.clouds.inner_radius,
        layout.clouds.outer_radius,
        layout.cloud_rings
    );
    println!("catalog: {} items", Catalog::builtin().len());
}

fn catalog(tab: Option<ShopTab>, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let items: Vec<_> = match tab {
        Some(tab) => catalog.in_tab(tab).collect(),
        None => catalog.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for def in items {
        let f = def.footprint;
        println!(
            "{:<14} {:<16} {:<10} {:>5}  {}x{}x{}  {}",
            def.id,
            def.name,
            def.category.label(),
            def.cost,
            f.width,
            f.height,
            f.depth,
            def.color
        );
    }
    Ok(())
}

fn place(config: &AppConfig, steps: &[Step], screen: bool, frame: bool) -> anyhow::Result<()> {
    let layout = config.layout;
    let engine = PlacementEngine::new(PlacementBounds::from(&layout.grid));
    let mut builder = IslandBuilder::new(Catalog::builtin(), engine);
    let mut input = DesktopInput::default();

    for step in steps {
        builder.apply(&Action::SelectItem(step.item.clone()))?;

        let moved = if screen {
            input.handle(InputEvent::PointerMoved { position: step.at })
        } else {
            Some(Action::CursorMoved(WorldPosition::new(step.at.x, step.at.y)))
        };
        let Some(moved) = moved else {
            println!("{step}: pointer does not hit the ground");
            builder.apply(&Action::Cancel)?;
            continue;
        };
        if let ActionOutcome::Previewed(eval) = builder.apply(&moved)? {
            tracing::debug!(cell = %eval.cell, can_place = eval.can_place(), "preview");
        }

        let click = if screen {
            input.handle(InputEvent::Click { position: step.at })
        } else {
            Some(Action::Confirm)
        };
        match builder.apply(&click.unwrap_or(Action::Noop))? {
            ActionOutcome::Placed(placed) => {
                println!("{step}: placed [{}] at {}", placed.id.short(), placed.cell);
            }
            _ => {
                let reason = builder
                    .mode()
                    .preview()
                    .and_then(|eval| eval.rejection)
                    .map_or_else(|| "no preview".to_string(), |r| r.to_string());
                println!("{step}: rejected ({reason})");
                builder.apply(&Action::Cancel)?;
            }
        }
    }

    println!();
    print!("{}", AsciiRenderer::new(layout).render(&builder));
    println!();
    print!("{}", DebugTextRenderer::new().render(&builder));

    if frame {
        let scenery = Scenery::generate(&layout, ScatterSeed::from(config.scenery_seed));
        let scene = SceneComposer::new(layout).with_scenery(scenery).render(&builder);
        println!();
        println!(
            "Frame: {} draw items ({} peaks, {} clouds, {} placed)",
            scene.items.len(),
            scene.count(|k| *k == DrawKind::Peak),
            scene.count(|k| *k == DrawKind::Cloud),
            scene.count(|k| matches!(k, DrawKind::Placed { .. }))
        );
        for item in scene
            .items
            .iter()
            .filter(|i| matches!(i.kind, DrawKind::Placed { .. }))
        {
            let c = item.center;
            let e = item.extent;
            println!(
                "  center=({:.2}, {:.2}, {:.2}) extent=({:.2}, {:.2}, {:.2})",
                c.x, c.y, c.z, e.x, e.y, e.z
            );
        }
    }
    Ok(())
}

fn scenery(config: &AppConfig, seed: Option<u64>) {
    let seed = ScatterSeed::from(seed.or(config.scenery_seed));
    let scenery = Scenery::generate(&config.layout, seed);
    println!("Scenery: seed={}", scenery.seed);
    println!("Peaks: {}", scenery.peaks.len());
    println!("Clouds: {}", scenery.clouds.len());
    for ring in 0..config.layout.cloud_rings {
        let placed = scenery.clouds.iter().filter(|c| c.ring == ring).count();
        println!(
            "  ring {ring}: {placed} of {}",
            CloudRing::clouds_in_ring(ring)
        );
    }
}
