use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use nerdle_gen::generator::group_thousands;
use nerdle_gen::{
    Equation, EquationGenerator, GameMode, GenerationReport, GeneratorConfig, TableWriter,
    patterns_for,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Game mode selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Mini,
    Regular,
    All,
}

impl ModeArg {
    pub fn modes(self) -> Vec<GameMode> {
        match self {
            ModeArg::Mini => vec![GameMode::Mini],
            ModeArg::Regular => vec![GameMode::Regular],
            ModeArg::All => GameMode::ALL.to_vec(),
        }
    }
}

/// Nerdle-gen - Enumerate valid Nerdle-style equations
#[derive(Parser, Debug)]
#[command(name = "nerdle-gen")]
#[command(about = "Enumerate every valid hidden-answer equation for Nerdle-style games")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate every valid equation and write one table per mode
    Generate {
        /// Game mode to generate
        #[arg(short, long, value_enum, default_value = "all")]
        mode: ModeArg,

        /// Directory for `<mode>_equations.csv` files (default: stdout)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Stop after examining this many candidates per mode
        #[arg(long)]
        limit: Option<u64>,

        /// Scan candidates on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Check whether a single equation is valid
    Check {
        /// Equation such as `123+45=168`
        equation: String,
    },
    /// Print the candidate patterns and their sizes
    Patterns {
        /// Game mode to describe
        #[arg(short, long, value_enum, default_value = "all")]
        mode: ModeArg,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    match args.command {
        Command::Generate {
            mode,
            output_dir,
            limit,
            sequential,
        } => {
            let config = GeneratorConfig {
                parallel: !sequential,
                limit,
            };
            run_generate(mode, output_dir.as_deref(), config)
        }
        Command::Check { equation } => {
            run_check(&equation);
            Ok(())
        }
        Command::Patterns { mode } => run_patterns(mode),
    }
}

fn run_generate(mode: ModeArg, output_dir: Option<&Path>, config: GeneratorConfig) -> Result<()> {
    let mut generator = EquationGenerator::new(config);

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    for mode in mode.modes() {
        let report = match output_dir {
            Some(dir) => {
                let path = dir.join(format!("{}_equations.csv", mode));
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                info!("Writing {} mode equations to {}", mode, path.display());
                generate_into(&mut generator, mode, BufWriter::new(file))?
            }
            None => generate_into(&mut generator, mode, BufWriter::new(io::stdout().lock()))?,
        };

        if report.accepted == 0 {
            warn!("No equations accepted for {} mode", mode);
        }
        eprintln!("{}: {}", mode, report);
    }

    Ok(())
}

fn generate_into<W: Write>(
    generator: &mut EquationGenerator,
    mode: GameMode,
    writer: W,
) -> Result<GenerationReport> {
    let mut table = TableWriter::new(writer);
    generator
        .generate(mode, &mut table)
        .with_context(|| format!("Failed to generate {} mode equations", mode))
}

fn run_check(equation: &str) {
    match Equation::parse(equation) {
        Ok(equation) => {
            println!("{} is valid: both sides equal {}", equation, equation.value());
        }
        Err(rejection) => {
            warn!("Rejected '{}'", equation);
            println!("{} is not valid: {}", equation, rejection);
        }
    }
}

fn run_patterns(mode: ModeArg) -> Result<()> {
    for mode in mode.modes() {
        let patterns = patterns_for(mode)
            .with_context(|| format!("Invalid pattern configuration for {} mode", mode))?;
        for pattern in &patterns {
            println!(
                "{}\t{}\t{}",
                mode,
                pattern,
                group_thousands(pattern.candidate_count())
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_arg_expansion() {
        assert_eq!(ModeArg::Mini.modes(), vec![GameMode::Mini]);
        assert_eq!(ModeArg::Regular.modes(), vec![GameMode::Regular]);
        assert_eq!(ModeArg::All.modes(), vec![GameMode::Mini, GameMode::Regular]);
    }

    #[test]
    fn test_generate_args_parsing() {
        let args = CliArgs::try_parse_from([
            "nerdle-gen",
            "generate",
            "--mode",
            "mini",
            "--limit",
            "100",
            "--sequential",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Warn));
            assert!(matches!(
                args.command,
                Command::Generate {
                    mode: ModeArg::Mini,
                    output_dir: None,
                    limit: Some(100),
                    sequential: true,
                }
            ));
        }
    }

    #[test]
    fn test_check_args_parsing() {
        let args = CliArgs::try_parse_from(["nerdle-gen", "check", "12+3=15", "-l", "debug"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Debug));
            assert!(matches!(args.command, Command::Check { equation } if equation == "12+3=15"));
        }
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let args = CliArgs::try_parse_from(["nerdle-gen", "generate", "--mode", "huge"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_generate_into_writes_table() {
        let mut generator = EquationGenerator::new(GeneratorConfig::sequential().with_limit(2_000));
        let mut buffer = Vec::new();
        let report = generate_into(&mut generator, GameMode::Mini, &mut buffer);
        assert!(report.is_ok());
        if let Ok(report) = report {
            assert_eq!(report.examined, 2_000);
            let text = String::from_utf8(buffer).unwrap_or_default();
            assert_eq!(text.lines().count() as u64, report.accepted + 1);
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
