use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sort_visualiser_core::{Algorithm, AppConfig, Frame, RunRecord, Session};
use tracing_subscriber::EnvFilter;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn main() -> sort_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            run_list();
            Ok(())
        }
        Commands::Run {
            algorithm,
            input,
            output,
        } => run_once(&algorithm, &input, output.as_deref()),
        Commands::Play {
            algorithm,
            input,
            speed,
        } => run_play(&algorithm, &input, speed),
    }
}

fn run_list() {
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        println!(
            "{:<16} {:<16} time {}, space {}",
            info.slug, info.name, info.time_complexity, info.space_complexity
        );
    }
}

fn run_once(slug: &str, input: &InputArgs, output: Option<&Path>) -> sort_visualiser_core::Result<()> {
    let session = input.session(slug)?;
    let record = RunRecord::from_session(&session);
    let stats = record.final_stats();

    tracing::info!(
        algorithm = slug,
        size = record.input.len(),
        frames = record.frames.len(),
        "materialised run"
    );

    println!("algorithm:   {}", record.algorithm.name());
    println!("input:       {:?}", record.input);
    if let Some(last) = record.frames.last() {
        println!("output:      {:?}", last.array);
    }
    println!("frames:      {}", record.frames.len());
    println!("comparisons: {}", stats.comparisons);
    println!("swaps:       {}", stats.swaps);

    if let Some(path) = output {
        record.write_json(path)?;
        tracing::info!(?path, "exported run");
    }
    Ok(())
}

fn run_play(slug: &str, input: &InputArgs, speed: Option<u32>) -> sort_visualiser_core::Result<()> {
    let mut session = input.session(slug)?;
    if let Some(speed) = speed {
        session.set_speed(speed)?;
    }

    let playback = session.playback_mut();
    tracing::info!(
        algorithm = slug,
        frames = playback.len(),
        delay_ms = playback.frame_delay().as_millis() as u64,
        "starting playback"
    );

    if let Some(frame) = playback.current() {
        print_frame(0, frame);
    }

    playback.play();
    while playback.is_playing() {
        let delay = playback.frame_delay();
        std::thread::sleep(delay);
        if playback.tick(delay) > 0 {
            if let Some(frame) = playback.current() {
                print_frame(playback.position(), frame);
            }
        }
    }
    Ok(())
}

fn print_frame(index: usize, frame: &Frame) {
    println!(
        "{index:>5} {}  c={} s={}  {}",
        render_bars(frame),
        frame.stats.comparisons,
        frame.stats.swaps,
        frame.description
    );
    println!("      {}", render_roles(frame));
}

fn render_bars(frame: &Frame) -> String {
    let max = frame.array.iter().copied().max().unwrap_or(1).max(1);
    frame
        .array
        .iter()
        .map(|&value| {
            let level = (value.max(0) as usize * (BARS.len() - 1)) / max as usize;
            BARS[level.min(BARS.len() - 1)]
        })
        .collect()
}

fn render_roles(frame: &Frame) -> String {
    (0..frame.len())
        .map(|index| {
            if frame.is_active(index) {
                '^'
            } else if frame.is_secondary(index) {
                '*'
            } else if frame.is_sorted(index) {
                '='
            } else {
                ' '
            }
        })
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Step-by-step sorting algorithm visualiser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every available algorithm.
    List,
    /// Generate the full frame sequence for one run and summarise it.
    Run {
        /// Algorithm slug, e.g. `bubble-sort`.
        algorithm: String,
        #[command(flatten)]
        input: InputArgs,
        /// Export the run (input and every frame) as JSON.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Animate a run in the terminal.
    Play {
        /// Algorithm slug, e.g. `heap-sort`.
        algorithm: String,
        #[command(flatten)]
        input: InputArgs,
        /// Playback speed from 1 (slowest) to 100 (fastest).
        #[arg(long)]
        speed: Option<u32>,
    },
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Number of random values to generate.
    #[arg(short = 'n', long)]
    size: Option<usize>,
    /// Seed for reproducible input arrays.
    #[arg(long)]
    seed: Option<u64>,
    /// Explicit comma separated input, e.g. `5,3,8,1`.
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["size", "seed"])]
    values: Option<Vec<i32>>,
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl InputArgs {
    fn session(&self, slug: &str) -> sort_visualiser_core::Result<Session> {
        let algorithm = Algorithm::from_slug(slug)?;
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(values) = &self.values {
            return Session::with_input(algorithm, config, values.clone());
        }

        if let Some(size) = self.size {
            config.array.check_size(size)?;
            config.array.size = size;
        }
        Session::new(algorithm, config, self.seed)
    }
}
