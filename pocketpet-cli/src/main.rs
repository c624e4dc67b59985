mod report;
mod storage;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Duration;

use pocketpet_game::{
    Action, DecayLoop, EngineConfig, PetEngine, StartReport, SystemClock, share,
};
use report::{ReportFormat, render_action, render_status};
use storage::FileStorage;

type CliEngine = PetEngine<FileStorage, SystemClock>;

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the pet after catching up on time spent away
    Status,
    /// Feed the pet (+30 hunger, +10 exp)
    Feed,
    /// Play with the pet (+25 happiness, -15 energy, +15 exp)
    Play,
    /// Give the pet a drink (+15 health, +10 hunger)
    Drink,
    /// Put the pet to bed (+40 energy, +10 health) unless it is rested
    Sleep,
    /// Apply live decay ticks immediately
    Tick {
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Run the live decay loop and print the pet after every tick
    Watch {
        /// How long to keep the loop running
        #[arg(long, default_value_t = 60)]
        seconds: u64,
        /// Override the tick period from the config
        #[arg(long)]
        tick_ms: Option<u64>,
    },
    /// Forget the saved pet and hatch a new one
    Reset,
}

#[derive(Debug, Parser)]
#[command(name = "pocketpet", version)]
#[command(about = "Look after a virtual pet from the terminal")]
struct Args {
    /// Directory holding the saved pet
    #[arg(long, default_value = ".")]
    state_dir: PathBuf,

    /// Optional JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name for a newly hatched pet (overrides the config)
    #[arg(long)]
    name: Option<String>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    format: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;
    let mut engine = PetEngine::new(FileStorage::new(&args.state_dir), SystemClock, config);

    let report = engine.start();
    log::debug!(
        "start from {}: {report:?}",
        engine.storage().dir().display()
    );
    if let (StartReport::Restored { elapsed_units }, ReportFormat::Console) = (report, args.format)
        && elapsed_units > 0
    {
        eprintln!(
            "{}",
            format!("⏳ {elapsed_units} minute(s) passed while you were away").dimmed()
        );
    }

    let mut out = open_output(args.output.as_ref())?;
    match args.command {
        Command::Status => {
            writeln!(
                out,
                "{}",
                render_status(engine.current_state(), &engine.view(), args.format)?
            )?;
        }
        Command::Feed => run_action(&mut engine, Action::Feed, args.format, &mut out)?,
        Command::Play => run_action(&mut engine, Action::Play, args.format, &mut out)?,
        Command::Drink => run_action(&mut engine, Action::Drink, args.format, &mut out)?,
        Command::Sleep => run_action(&mut engine, Action::Sleep, args.format, &mut out)?,
        Command::Tick { count } => {
            for _ in 0..count {
                engine.tick();
            }
            writeln!(
                out,
                "{}",
                render_status(engine.current_state(), &engine.view(), args.format)?
            )?;
        }
        Command::Watch { seconds, tick_ms } => {
            engine = watch(engine, seconds, tick_ms, args.format, &mut out).await?;
        }
        Command::Reset => {
            engine.reset();
            writeln!(
                out,
                "{}",
                render_status(engine.current_state(), &engine.view(), args.format)?
            )?;
        }
    }
    out.flush()?;
    engine.stop();
    Ok(())
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default_config(),
    };
    if let Some(name) = &args.name {
        if name.trim().is_empty() {
            bail!("pet name must not be empty");
        }
        config.pet_name.clone_from(name);
    }
    Ok(config)
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(stdout())),
    })
}

fn run_action(
    engine: &mut CliEngine,
    action: Action,
    format: ReportFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = engine.perform(action);
    let text = render_action(action.as_str(), &outcome, &engine.view(), format)?;
    writeln!(out, "{text}")?;
    Ok(())
}

async fn watch(
    engine: CliEngine,
    seconds: u64,
    tick_ms: Option<u64>,
    format: ReportFormat,
    out: &mut dyn Write,
) -> Result<CliEngine> {
    let period_ms = tick_ms.unwrap_or(engine.config().tick_period_ms);
    if period_ms == 0 {
        bail!("tick period must be positive");
    }
    let period = Duration::from_millis(period_ms);
    let shared = share(engine);
    let decay = DecayLoop::start(shared.clone(), period);

    if format == ReportFormat::Console {
        writeln!(
            out,
            "{}",
            format!("👀 Watching for {seconds}s (tick every {period_ms} ms)")
                .bright_cyan()
                .bold()
        )?;
    }
    let deadline = tokio::time::Instant::now() + Duration::from_secs(seconds);
    let mut last_age = shared.lock().await.current_state().age;
    while tokio::time::Instant::now() < deadline {
        tokio::time::sleep(period.min(deadline - tokio::time::Instant::now())).await;
        let guard = shared.lock().await;
        let pet = guard.current_state();
        if pet.age != last_age {
            last_age = pet.age;
            writeln!(out, "{}", render_status(pet, &guard.view(), format)?)?;
            out.flush()?;
        }
    }
    decay.shutdown().await;

    let engine = std::sync::Arc::try_unwrap(shared)
        .map_err(|_| anyhow::anyhow!("decay loop still holds the engine"))?
        .into_inner();
    Ok(engine)
}
