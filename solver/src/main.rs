use clap::{Parser, ValueEnum};
use line_scan::config::{ConfigManager, SolverConfig, Validate};
use line_scan::scan::{ScannerRegistry, WinningLine};
use line_scan::{SeedingMode, determine_winner_observed, log, logger, setup_scanners};

const DEFAULT_CONFIG_PATH: &str = "line_scan.yaml";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SeedingArg {
    Full,
    EdgeOnly,
}

impl From<SeedingArg> for SeedingMode {
    fn from(arg: SeedingArg) -> Self {
        match arg {
            SeedingArg::Full => SeedingMode::Full,
            SeedingArg::EdgeOnly => SeedingMode::EdgeOnly,
        }
    }
}

#[derive(Parser)]
#[command(name = "line_scan", about = "Finds a winning run of identical marks on a grid")]
struct Args {
    /// YAML file with `board`, `run_length` and optional `seeding`
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[arg(long)]
    run_length: Option<usize>,

    #[arg(long, value_enum)]
    seeding: Option<SeedingArg>,

    /// Write the default config to `--config` and exit
    #[arg(long)]
    write_default: bool,

    /// Log every scan round
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Solver".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = ConfigManager::<_, SolverConfig>::from_yaml_file(&args.config);

    if args.write_default {
        config_manager.set_config(&SolverConfig::default())?;
        log!("Default config written to {}", args.config);
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    if let Some(run_length) = args.run_length {
        config.run_length = run_length;
    }
    if let Some(seeding) = args.seeding {
        config.seeding = seeding.into();
    }
    config.validate()?;

    let grid = config.grid()?;
    log!(
        "Loaded {}x{} board, run length {}, {:?} seeding",
        grid.rows(),
        grid.cols(),
        config.run_length,
        config.seeding
    );

    println!("Your board:");
    println!("{}", grid);
    println!();

    let registry = setup_scanners(&grid, config.run_length, config.seeding);
    log!("Seeded {} scanners", registry.len());

    match solve(registry, args.verbose) {
        Some(line) => {
            log!(
                "Winning {:?} line from ({}, {}) to ({}, {})",
                line.direction,
                line.start.row,
                line.start.col,
                line.end.row,
                line.end.col
            );
            println!("{} Won!", line.mark.to_uppercase());
        }
        None => println!("Draw!"),
    }

    Ok(())
}

fn solve(registry: ScannerRegistry<'_, String>, verbose: bool) -> Option<WinningLine<String>> {
    determine_winner_observed(registry, |round, report| {
        if verbose {
            log!(
                "Round {}: {} alive, {} removed ({} out of bounds, {} empty, {} mismatched)",
                round,
                report.alive,
                report.removed(),
                report.out_of_bounds,
                report.empty_cell,
                report.value_mismatch
            );
        }
    })
}
