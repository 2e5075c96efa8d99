// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `cargo xtask` for the `LeadDesk` workspace.
//!
//! Each task is a fixed list of cargo invocations. `ci` chains the gate used
//! before merging: formatting, clippy, build, then every crate's tests. The
//! API tests start their own stub backend, so no service has to be running.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::WrapErr, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    /// Task to run
    #[arg(value_enum)]
    task: Task,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Task {
    /// Formatting, clippy, build and tests
    Ci,
    /// Build every target
    Build,
    /// Type-check every target
    Check,
    /// Clippy and formatting
    Lint,
    /// Clippy with warnings denied
    LintClippy,
    /// rustfmt in check mode (nightly)
    LintFormatting,
    /// Apply rustfmt (nightly)
    FixFormatting,
    /// Unit and integration tests for every crate
    Test,
    /// lcov report at target/lcov.info
    Coverage,
}

/// One cargo invocation.
#[derive(Clone, Copy, Debug)]
struct Step {
    args: &'static [&'static str],
    nightly: bool,
}

const BUILD: Step = Step {
    args: &["build", "--workspace", "--all-targets"],
    nightly: false,
};
const CHECK: Step = Step {
    args: &["check", "--workspace", "--all-targets"],
    nightly: false,
};
const CLIPPY: Step = Step {
    args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    nightly: false,
};
const FMT_CHECK: Step = Step {
    args: &["fmt", "--all", "--check"],
    nightly: true,
};
const FMT: Step = Step {
    args: &["fmt", "--all"],
    nightly: true,
};
const TEST: Step = Step {
    args: &["test", "--workspace", "--all-targets"],
    nightly: false,
};
const COVERAGE: Step = Step {
    args: &[
        "llvm-cov",
        "--workspace",
        "--lcov",
        "--output-path",
        "target/lcov.info",
    ],
    nightly: false,
};

impl Task {
    const fn steps(self) -> &'static [Step] {
        match self {
            Self::Ci => &[FMT_CHECK, CLIPPY, BUILD, TEST],
            Self::Build => &[BUILD],
            Self::Check => &[CHECK],
            Self::Lint => &[CLIPPY, FMT_CHECK],
            Self::LintClippy => &[CLIPPY],
            Self::LintFormatting => &[FMT_CHECK],
            Self::FixFormatting => &[FMT],
            Self::Test => &[TEST],
            Self::Coverage => &[COVERAGE],
        }
    }
}

impl Step {
    fn run(self) -> Result<()> {
        let mut expression: duct::Expression = cmd("cargo", self.args);
        if self.nightly {
            // rustup ignores the toolchain override while CARGO is set
            expression = expression
                .env_remove("CARGO")
                .env("RUSTUP_TOOLCHAIN", "nightly");
        }
        tracing::info!("cargo {}", self.args.join(" "));
        expression
            .run()
            .map(drop)
            .wrap_err_with(|| format!("`cargo {}` failed", self.args.join(" ")))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    let level: LevelFilter = args.verbosity.log_level_filter().as_trace();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .without_time()
        .init();

    for step in args.task.steps() {
        if let Err(err) = step.run() {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Step, Task};
    use clap::Parser;

    #[test]
    fn test_ci_runs_the_gate_in_order() {
        let args: Vec<&[&str]> = Task::Ci.steps().iter().map(|step| step.args).collect();
        let commands: Vec<&str> = args.iter().map(|args| args[0]).collect();
        assert_eq!(commands, vec!["fmt", "clippy", "build", "test"]);
    }

    #[test]
    fn test_only_formatting_uses_nightly() {
        let nightly: Vec<&Step> = Task::Ci
            .steps()
            .iter()
            .chain(Task::FixFormatting.steps())
            .filter(|step| step.nightly)
            .collect();
        assert_eq!(nightly.len(), 2);
        assert!(nightly.iter().all(|step| step.args[0] == "fmt"));
    }

    #[test]
    fn test_task_names_are_kebab_case() {
        let args: super::Args =
            super::Args::try_parse_from(["cargo xtask", "lint-clippy"]).unwrap();
        assert_eq!(args.task, Task::LintClippy);
        assert!(super::Args::try_parse_from(["cargo xtask", "lint-docs"]).is_err());
    }
}
