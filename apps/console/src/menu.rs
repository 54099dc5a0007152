//! Line-oriented menu over any reader/writer pair.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::warn;

use pd_core::{PackageId, SimTime, parse_snapshot};
use pd_report::{CsvWriter, ReportWriter, TextWriter, package_line};
use pd_sim::{Dataset, DayPlan, lookup_package, run_simulation};

const MENU: &str = "\
1. Print all package status and total mileage
2. Get a single package status at a time
3. Export all package and truck status at a time to CSV
4. Exit";

/// Read one trimmed line.  `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Ask until the answer parses as a snapshot time.
fn prompt_time<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<SimTime>> {
    loop {
        let Some(answer) = prompt(input, out, "Enter a time (HH:MM, HH:MM:SS or EOD): ")? else {
            return Ok(None);
        };
        match parse_snapshot(&answer) {
            Ok(t) => return Ok(Some(t)),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

/// Run the menu until the user exits or input ends.
///
/// A failed run is reported and the menu continues; only I/O errors on the
/// console itself end the loop early.
pub fn run<R: BufRead, W: Write>(
    dataset: &Dataset,
    plan: &DayPlan,
    out_dir: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(choice) = prompt(input, out, "Choose an option (1-4): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(snapshot) = prompt_time(input, out)? else { return Ok(()) };
                match run_simulation(dataset, plan, snapshot) {
                    Ok(report) => {
                        let mut writer = TextWriter::new(&mut *out);
                        writer.write_report(&report)?;
                    }
                    Err(e) => writeln!(out, "Simulation failed: {e}")?,
                }
            }
            "2" => {
                let Some(answer) = prompt(input, out, "Enter a package id: ")? else { return Ok(()) };
                let Ok(id) = answer.parse::<u32>() else {
                    writeln!(out, "{answer:?} is not a package id")?;
                    continue;
                };
                let Some(snapshot) = prompt_time(input, out)? else { return Ok(()) };
                match lookup_package(dataset, plan, snapshot, PackageId(id)) {
                    Ok(Some(view)) => writeln!(out, "{}", package_line(&view))?,
                    Ok(None) => writeln!(out, "No package with id {id}")?,
                    Err(e) => writeln!(out, "Simulation failed: {e}")?,
                }
            }
            "3" => {
                let Some(snapshot) = prompt_time(input, out)? else { return Ok(()) };
                let written = run_simulation(dataset, plan, snapshot)
                    .map_err(anyhow::Error::from)
                    .and_then(|report| {
                        std::fs::create_dir_all(out_dir)?;
                        let mut writer = CsvWriter::new(out_dir)?;
                        writer.write_report(&report)?;
                        writer.finish()?;
                        Ok(())
                    });
                match written {
                    Ok(()) => writeln!(out, "Wrote packages.csv and trucks.csv to {}", out_dir.display())?,
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        writeln!(out, "Export failed: {e:#}")?;
                    }
                }
            }
            "4" | "q" | "exit" => return Ok(()),
            other => writeln!(out, "Unknown option {other:?}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pd_distance::load_distance_reader;
    use pd_registry::load_packages_reader;

    use super::*;

    const PACKAGES: &str = "\
1,10 A St,Salt Lake City,UT,84101,EOD,3
";
    const DISTANCES: &str = "\
Depot,HUB,0.0
Alpha,\"10 A St (84101)\",9.0,0.0
";

    fn dataset() -> Dataset {
        Dataset::new(
            load_packages_reader(Cursor::new(PACKAGES)).unwrap(),
            load_distance_reader(Cursor::new(DISTANCES)).unwrap(),
        )
    }

    fn one_truck() -> DayPlan {
        DayPlan::from_json_str(
            r#"{ "trucks": [ { "id": 1, "departure": { "rule": "at", "time": "08:00" }, "packages": [1] } ] }"#,
        )
        .unwrap()
    }

    fn session(script: &str, out_dir: &Path) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(&dataset(), &one_truck(), out_dir, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn print_all_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let text = session("1\nEOD\n4\n", dir.path());
        assert!(text.contains("Snapshot: 23:59:00"));
        assert!(text.contains("Total Mileage: 18.00"));
    }

    #[test]
    fn bad_time_is_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let text = session("2\n1\nnoon\n08:15\n", dir.path());
        assert!(text.contains("invalid snapshot time"));
        assert!(text.contains("Status: En Route"));
    }

    #[test]
    fn unknown_package_reported() {
        let dir = tempfile::tempdir().unwrap();
        let text = session("2\n7\nEOD\n4\n", dir.path());
        assert!(text.contains("No package with id 7"));
    }

    #[test]
    fn export_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("snap");
        let text = session("3\n10:00\n4\n", &out_dir);
        assert!(text.contains("Wrote packages.csv and trucks.csv"));
        assert!(out_dir.join("packages.csv").exists());
        assert!(out_dir.join("trucks.csv").exists());
    }
}
