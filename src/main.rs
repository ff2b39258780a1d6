// portable-dirs - main.rs
//
// Diagnostic binary. Handles:
// 1. CLI argument parsing
// 2. Config file loading from the roaming data directory
// 3. Logging initialisation (debug mode support)
// 4. Resolving every role and printing the report (text or JSON)

use clap::{Parser, ValueEnum};
use portable_dirs::app::report::PathReport;
use portable_dirs::platform::config::{self, AppConfig, ReportFormat};
use portable_dirs::platform::dirs::native_table;
use portable_dirs::platform::fs::RealFs;
use portable_dirs::util;
use portable_dirs::{PortableDirsError, Role};
use std::io::Write;
use std::path::PathBuf;

/// Roles selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Roaming,
    Personal,
    Cache,
    Resources,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Roaming => Role::RoamingData,
            RoleArg::Personal => Role::PersonalData,
            RoleArg::Cache => Role::Cache,
            RoleArg::Resources => Role::AppResources,
        }
    }
}

/// portable-dirs - show where a portable-mode application keeps its data.
///
/// Resolves (and creates, where applicable) the roaming, personal, cache and
/// resource directories beside this executable and prints them.
#[derive(Parser, Debug)]
#[command(name = "portable-dirs", version, about)]
struct Cli {
    /// Only resolve these roles (repeatable). Defaults to all of them.
    #[arg(short = 'r', long = "role", value_enum)]
    roles: Vec<RoleArg>,

    /// Also ensure these directories exist before reporting (repeatable).
    #[arg(short = 'e', long = "ensure")]
    ensure: Vec<PathBuf>,

    /// Print the report as JSON (overrides [report] format).
    #[arg(long)]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // The config lives in the roaming directory, so resolve that first.
    // Anything logged before init is dropped; warnings are replayed below.
    let (config, warnings) = match portable_dirs::get_roaming_data_path() {
        Ok(dir) => config::load_config(&dir),
        Err(e) => (
            AppConfig::default(),
            vec![format!("Roaming data directory unavailable, config not loaded: {e}")],
        ),
    };

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "portable-dirs starting"
    );
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    match run(&cli, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!(error = %e, "portable-dirs failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the report contains failed roles.
fn run(cli: &Cli, config: &AppConfig) -> portable_dirs::Result<bool> {
    for dir in &cli.ensure {
        portable_dirs::ensure_path_exists(dir)?;
        tracing::info!(path = %dir.display(), "Directory ensured");
    }

    let roles: Vec<Role> = if cli.roles.is_empty() {
        Role::ALL.to_vec()
    } else {
        cli.roles.iter().copied().map(Role::from).collect()
    };

    let report = PathReport::build(
        &native_table(),
        &RealFs,
        &roles,
        &portable_dirs::executable_dir(),
        portable_dirs::base_dir(),
    );

    let json = cli.json || config.report_format == ReportFormat::Json;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = if json {
        serde_json::to_writer_pretty(&mut out, &report)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out))
    } else {
        out.write_all(report.render_text().as_bytes())
    };
    written.map_err(|source| PortableDirsError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write report",
        source,
    })?;

    Ok(!report.has_errors())
}
