//! `console`: ask the delivery day what it looks like at a given time.
//!
//! Run with:
//!   cargo run -p console --release
//!   cargo run -p console -- --at 10:25
//!
//! # Arguments
//!
//! | Flag                | Default               |
//! |---------------------|-----------------------|
//! | `--packages <csv>`  | `data/packages.csv`   |
//! | `--distances <csv>` | `data/distances.csv`  |
//! | `--plan <json>`     | built-in standard day |
//! | `--out <dir>`       | `output`              |
//! | `--at <time>`       | interactive menu      |
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod menu;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pd_core::parse_snapshot;
use pd_report::{ReportWriter, TextWriter};
use pd_sim::{Dataset, DayPlan, run_simulation};

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    packages:  PathBuf,
    distances: PathBuf,
    plan:      Option<PathBuf>,
    out:       PathBuf,
    at:        Option<String>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Args {
            packages:  PathBuf::from("data/packages.csv"),
            distances: PathBuf::from("data/distances.csv"),
            plan:      None,
            out:       PathBuf::from("output"),
            at:        None,
        };

        let mut it = std::env::args().skip(1);
        while let Some(flag) = it.next() {
            let mut value = || it.next().with_context(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--packages" => args.packages = value()?.into(),
                "--distances" => args.distances = value()?.into(),
                "--plan" => args.plan = Some(value()?.into()),
                "--out" => args.out = value()?.into(),
                "--at" => args.at = Some(value()?),
                other => bail!("unknown argument {other:?}"),
            }
        }
        Ok(args)
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse()?;

    let dataset = Dataset::load(&args.packages, &args.distances).with_context(|| {
        format!(
            "loading {} and {}",
            args.packages.display(),
            args.distances.display()
        )
    })?;

    let plan = match &args.plan {
        Some(path) => DayPlan::from_json_file(path)
            .with_context(|| format!("reading day plan {}", path.display()))?,
        None => DayPlan::standard(),
    };
    info!(trucks = plan.trucks.len(), "day plan ready");

    match &args.at {
        Some(at) => {
            let snapshot = parse_snapshot(at)?;
            let report = run_simulation(&dataset, &plan, snapshot)?;
            let stdout = io::stdout();
            let mut writer = TextWriter::new(stdout.lock());
            writer.write_report(&report)?;
            writer.finish()?;
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            menu::run(&dataset, &plan, &args.out, &mut stdin.lock(), &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
