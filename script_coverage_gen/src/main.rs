// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small CLI around the `script_coverage` tables.
//!
//! It regenerates the CLDR punctuation table checked into `script_coverage`, prints the
//! characters each script requires, and compares two coverage maps.

use std::collections::BTreeSet;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use script_coverage::tables::blocks;
use script_coverage::{
    punct, required_characters, CodePointSet, CoverageFilter, CoverageMap, CoveragePolicy,
    IcuClassifier, Phase, RequiredOptions, ScriptTag,
};
use tracing_subscriber::EnvFilter;

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = "script_coverage_gen", about = "Script coverage table tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the `SCRIPT_TO_PUNCT` table collected from a CLDR checkout.
    Punct {
        /// Root of the CLDR checkout, the directory holding `common/main`.
        cldr_root: PathBuf,
    },
    /// Print the characters each script requires, as a coverage map.
    Required {
        /// The coverage phase, 2 or 3.
        #[arg(long, default_value = "3")]
        phase: Phase,
        /// Only report each script's Unicode repertoire.
        #[arg(long)]
        unicode_only: bool,
        /// Scripts to report. Defaults to every script of the phase.
        scripts: Vec<ScriptTag>,
    },
    /// Compare two coverage maps.
    Compare {
        /// The base coverage map.
        base: PathBuf,
        /// The target coverage map.
        target: PathBuf,
        /// Only compare these scripts.
        #[arg(long, num_args = 1..)]
        scripts: Vec<ScriptTag>,
        /// Never compare these scripts.
        #[arg(long, num_args = 1..)]
        except_scripts: Vec<ScriptTag>,
        /// Only compare these code points, in range notation.
        #[arg(long)]
        ranges: Option<CodePointSet>,
        /// Never compare these code points, in range notation.
        #[arg(long)]
        except_ranges: Option<CodePointSet>,
        /// Do not report code points in the target but not the base.
        #[arg(long)]
        no_additions: bool,
        /// Do not report code points in the base but not the target.
        #[arg(long)]
        no_removals: bool,
        /// List every changed code point under its block.
        #[arg(long)]
        detailed: bool,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Also forwards `log` records from the library.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn run(command: Command) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        Command::Punct { cldr_root } => {
            let classifier = IcuClassifier::new();
            let by_script = punct::collect_by_script(&cldr_root, &classifier)?;
            log::info!("collected punctuation for {} scripts", by_script.len());
            writeln!(out, "pub const SCRIPT_TO_PUNCT: &[(ScriptTag, &str)] = &[")?;
            write!(out, "{}", punct::render_table(&by_script))?;
            writeln!(out, "];")?;
        }
        Command::Required {
            phase,
            unicode_only,
            scripts,
        } => {
            let policy = CoveragePolicy::new()?;
            let classifier = IcuClassifier::new();
            let scripts = if scripts.is_empty() {
                policy.scripts(phase, &classifier)
            } else {
                scripts
            };
            let options = RequiredOptions { unicode_only };
            let map: CoverageMap = scripts
                .into_iter()
                .map(|script| {
                    let chars = required_characters(&policy, &classifier, script, phase, options);
                    log::debug!("{script}: {} characters", chars.len());
                    (script, chars)
                })
                .collect();
            writeln!(out, "# {phase}")?;
            write!(out, "{map}")?;
        }
        Command::Compare {
            base,
            target,
            scripts,
            except_scripts,
            ranges,
            except_ranges,
            no_additions,
            no_removals,
            detailed,
        } => {
            let base_map = read_map(&base)?;
            let target_map = read_map(&target)?;
            let filter = CoverageFilter {
                scripts: (!scripts.is_empty()).then(|| scripts.into_iter().collect()),
                except_scripts: except_scripts.into_iter().collect::<BTreeSet<_>>(),
                code_points: ranges,
                except_code_points: except_ranges.unwrap_or_default(),
                no_additions,
                no_removals,
            };
            writeln!(out, "base: {}", base.display())?;
            writeln!(out, "target: {}", target.display())?;
            for (script, delta) in base_map.compare(&target_map, &filter) {
                if delta.is_unchanged() {
                    continue;
                }
                writeln!(out, "{script}")?;
                for (label, chars) in [("added", &delta.added), ("removed", &delta.removed)] {
                    if chars.is_empty() {
                        continue;
                    }
                    writeln!(out, "  {label} ({}): {chars}", chars.len())?;
                    if detailed {
                        write_detailed(&mut out, chars)?;
                    }
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn read_map(path: &Path) -> Result<CoverageMap> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let map = CoverageMap::parse(&text).map_err(|err| format!("{}: {err}", path.display()))?;
    Ok(map)
}

fn write_detailed(out: &mut impl Write, chars: &CodePointSet) -> io::Result<()> {
    let mut last_block = None;
    for cp in chars {
        let block = blocks::find_block(cp).map_or("(other)", |block| block.name);
        if last_block != Some(block) {
            writeln!(out, "    {block}")?;
            last_block = Some(block);
        }
        match char::from_u32(cp).filter(|ch| !ch.is_control()) {
            Some(ch) => writeln!(out, "    {cp:04X} {ch}")?,
            None => writeln!(out, "    {cp:04X}")?,
        }
    }
    Ok(())
}
