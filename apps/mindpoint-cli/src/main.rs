use anyhow::Context;
use clap::{Parser, Subcommand};
use mindpoint_camera::ViewMode;
use mindpoint_input::{ActionResult, parse_script};
use mindpoint_kernel::{AudioSink, Game, GameConfig, GameEvent, MoveOutcome, StatusSink, dispatch};
use mindpoint_levels::LevelPack;
use mindpoint_render::{DebugTextRenderer, sync_scene};
use mindpoint_tools::SessionInspector;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mindpoint-cli", about = "Headless driver for the mindpoint puzzle kernel")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the level catalog size
    Info,
    /// Print the default tuning as JSON, ready to edit for --config
    Config,
    /// List the levels of a pack (built-in campaign by default)
    Levels {
        /// JSON level pack to list instead of the built-in campaign
        #[arg(short, long)]
        pack: Option<PathBuf>,
    },
    /// Validate a JSON level pack
    Validate {
        /// Path to the pack
        file: PathBuf,
    },
    /// Write the built-in campaign out as a JSON level pack
    Export {
        /// Destination file
        file: PathBuf,
    },
    /// Replay an input script against a level
    Play {
        /// Level id to play
        #[arg(short, long, default_value = "1")]
        level: u32,
        /// JSON level pack to load instead of the built-in campaign
        #[arg(short, long)]
        pack: Option<PathBuf>,
        /// Input script, e.g. "drag 0,0 -10,0; wait 1; right; wait 0.5"
        #[arg(short, long, conflicts_with = "script_file")]
        script: Option<String>,
        /// Read the input script from a file
        #[arg(long)]
        script_file: Option<PathBuf>,
        /// JSON tuning overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Simulation step in seconds for waits
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Print an ASCII frame of the final view
        #[arg(short, long)]
        frame: bool,
        /// Print what each direction would resolve to from the final view
        #[arg(long)]
        probe: bool,
    },
}

/// Prints collaborator notifications to stdout.
struct Console;

impl AudioSink for Console {
    fn on_move(&mut self) {
        println!("  ♪ move");
    }
    fn on_snap(&mut self) {
        println!("  ♪ snap");
    }
    fn on_fail(&mut self) {
        println!("  ♪ fail");
    }
    fn on_win(&mut self) {
        println!("  ♪ win");
    }
}

impl StatusSink for Console {
    fn show(&mut self, label: &str, mode: ViewMode) {
        println!("  [{mode}] {label}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("mindpoint-cli v{}", env!("CARGO_PKG_VERSION"));
            let pack = LevelPack::builtin();
            println!("built-in levels: {}", pack.levels().len());
            let c = GameConfig::default();
            println!(
                "resolver: axis>={} candidate>={} tolerance={}",
                c.resolver.axis_confidence, c.resolver.candidate_alignment, c.resolver.step_tolerance
            );
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&GameConfig::default())?);
        }
        Commands::Levels { pack } => {
            let pack = load_pack(pack.as_deref())?;
            for level in pack.levels() {
                let steppable = level.steppable_blocks().count();
                println!(
                    "{:>3}  {:<26} blocks={:<3} steppable={:<3} {}",
                    level.id,
                    level.name,
                    level.blocks.len(),
                    steppable,
                    level.description
                );
            }
        }
        Commands::Validate { file } => {
            let pack = LevelPack::load(&file)
                .with_context(|| format!("validating {}", file.display()))?;
            println!("{}: {} levels OK", file.display(), pack.levels().len());
        }
        Commands::Export { file } => {
            LevelPack::builtin()
                .save(&file)
                .with_context(|| format!("writing {}", file.display()))?;
            println!("wrote {}", file.display());
        }
        Commands::Play {
            level,
            pack,
            script,
            script_file,
            config,
            dt,
            frame,
            probe,
        } => {
            let config = load_config(config.as_deref())?;
            let pack = load_pack(pack.as_deref())?;
            let index = pack
                .position_of(level)
                .with_context(|| format!("no level with id {level}"))?;
            let level = pack.level(index)?.clone();

            let source = match (script, script_file) {
                (Some(s), _) => s,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading script {}", path.display()))?,
                (None, None) => String::new(),
            };
            let actions = parse_script(&source)?;

            let mut game = Game::new(config, level)?;
            let mut renderer = DebugTextRenderer::default();
            println!("Level {} \"{}\"", game.level().id, game.level().name);
            flush(&mut game, &mut renderer);

            let _span = tracing::info_span!("play", actions = actions.len()).entered();
            for action in &actions {
                let result = action.apply(&mut game, dt);
                println!("{action:?} => {}", describe(&result));
                flush(&mut game, &mut renderer);
            }

            println!("{}", SessionInspector::summary(&game));
            if probe {
                for p in SessionInspector::probe(&game) {
                    println!("  {p}");
                }
            }
            if frame {
                print!(
                    "{}",
                    renderer.frame(
                        game.orientation(),
                        game.view_mode(),
                        game.player().visual_position
                    )
                );
            }
        }
    }

    Ok(())
}

fn load_pack(path: Option<&Path>) -> anyhow::Result<LevelPack> {
    match path {
        Some(path) => LevelPack::load(path)
            .with_context(|| format!("loading level pack {}", path.display())),
        None => Ok(LevelPack::builtin()),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Route freshly recorded events to the renderer and console.
fn flush(game: &mut Game, renderer: &mut DebugTextRenderer) {
    let events = game.drain_events();
    sync_scene(renderer, &events, game.level());
    for event in &events {
        match event {
            GameEvent::GoalReached { at } => println!("  goal reached at {at}"),
            GameEvent::LevelComplete => println!("  level complete"),
            GameEvent::ResetFinished => println!("  player rebuilt at start"),
            _ => {}
        }
    }
    dispatch(&events, &mut Console, &mut Console);
}

fn describe(result: &ActionResult) -> String {
    match result {
        ActionResult::Move(MoveOutcome::Started { target }) => format!("moving to {target}"),
        ActionResult::Move(MoveOutcome::Rejected(reason)) => format!("rejected: {reason}"),
        ActionResult::Move(MoveOutcome::Ignored) => "ignored".to_string(),
        ActionResult::Drag(accepted) => format!("drag {}", if *accepted { "ok" } else { "ignored" }),
        ActionResult::Waited(seconds) => format!("waited {seconds}s"),
        ActionResult::Reset(started) => {
            format!("reset {}", if *started { "started" } else { "ignored" })
        }
    }
}
