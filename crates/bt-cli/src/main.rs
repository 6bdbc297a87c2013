//! `bt-drive` - run the autonomous-driving behavior-tree mission.
//!
//! Ticks the tree once per interval until the mission succeeds, fails, or the tick budget
//! runs out, printing the tree after every tick and the blackboard activity stream at the
//! end.

mod config;
mod rng;
mod scenario;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use bt_core::{AccessMode, ActivityFilter, Status};
use bt_nodes::Tree;
use bt_tools::{activity_report, render_tree, TreeSnapshot};

use crate::config::DriveConfig;
use crate::scenario::{DISTANCE_TO_GOAL, FAILURE_INFO};

#[derive(Parser)]
#[command(name = "bt-drive")]
#[command(about = "Autonomous-driving behavior-tree demo", version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the obstacle and dodge outcomes
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Pause between ticks, in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Emit one JSON object per tick instead of the ASCII tree
    #[arg(long)]
    json: bool,

    /// Only show activity of this access mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Only show activity on this key
    #[arg(long)]
    key: Option<String>,

    /// Only show activity of this node
    #[arg(long)]
    client: Option<String>,

    /// Only show the most recent N matching accesses
    #[arg(long)]
    max_len: Option<usize>,

    /// Print complex values in full
    #[arg(long)]
    expand: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Read,
    Write,
}

impl From<ModeArg> for AccessMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Read => AccessMode::Read,
            ModeArg::Write => AccessMode::Write,
        }
    }
}

impl Cli {
    fn apply(&self, config: &mut DriveConfig) {
        if let Some(seed) = self.seed {
            config.scenario.seed = seed;
        }
        if let Some(max_ticks) = self.max_ticks {
            config.scenario.max_ticks = max_ticks;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.scenario.interval_ms = interval_ms;
        }
        if self.no_color {
            config.render.color = false;
            config.activity.color = false;
        }
        if self.expand {
            config.activity.expand = true;
        }
    }

    fn activity_filter(&self) -> ActivityFilter {
        ActivityFilter {
            max_len: self.max_len,
            mode: self.mode.map(AccessMode::from),
            key: self.key.clone(),
            client: self.client.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = DriveConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    let mut tree = scenario::build(&config).context("Failed to assemble the mission tree")?;
    info!(
        seed = config.scenario.seed,
        max_ticks = config.scenario.max_ticks,
        "starting mission"
    );

    let interval = Duration::from_millis(config.scenario.interval_ms);
    while !tree.status().is_terminal() && tree.ticks() < config.scenario.max_ticks {
        let status = tree.tick().context("Tick aborted")?;
        report_tick(&tree, &config, cli.json)?;
        if !status.is_terminal() && !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }

    report_outcome(&tree)?;

    let filter = cli.activity_filter();
    let bb = tree.blackboard().borrow();
    if cli.json {
        let records = bb.get_activity(&filter);
        println!("{}", serde_json::json!({ "activity": records }));
    } else {
        println!("\nACTIVITY STREAM");
        print!("{}", activity_report(&bb, &filter, &config.activity));
    }
    Ok(())
}

fn report_tick(tree: &Tree, config: &DriveConfig, json: bool) -> Result<()> {
    let mut bb = tree.blackboard().borrow_mut();
    let distance = bb.read(DISTANCE_TO_GOAL)?.clone();
    if json {
        let line = serde_json::json!({
            "tick": tree.ticks(),
            "status": tree.status(),
            "distance_to_goal": distance,
            "tree": TreeSnapshot::capture(tree.root()),
        });
        println!("{line}");
    } else {
        println!("{}", render_tree(tree.root(), &config.render));
        println!("Remaining distance to goal :: {distance}\n");
    }
    Ok(())
}

fn report_outcome(tree: &Tree) -> Result<()> {
    match tree.status() {
        Status::Failure => {
            let mut bb = tree.blackboard().borrow_mut();
            let reason = bb.read(FAILURE_INFO)?;
            warn!(ticks = tree.ticks(), "mission failed");
            println!("Mission failed!\nReason :: {reason}");
        }
        Status::Success => {
            info!(ticks = tree.ticks(), "goal reached");
            println!("Goal reached!");
        }
        status => {
            warn!(ticks = tree.ticks(), %status, "tick budget exhausted");
            println!("Mission incomplete after {} ticks", tree.ticks());
        }
    }
    Ok(())
}
