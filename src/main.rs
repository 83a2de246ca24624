use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unitctl::{AppError, Bindings, Config, ControlPlane, Scope, UnitDirs, UnitInstaller};

#[derive(Parser)]
#[command(name = "unitctl")]
#[command(version)]
#[command(about = "Render, install, and control systemd service units", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory for system-wide unit files
    #[arg(long, global = true, value_name = "DIR")]
    system_dir: Option<PathBuf>,

    /// Directory for per-user unit files
    #[arg(long, global = true, value_name = "DIR")]
    user_dir: Option<PathBuf>,

    /// Control-plane executable
    #[arg(long, global = true, value_name = "PROGRAM")]
    systemctl: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a unit template and install it as <NAME>.service
    #[clap(visible_alias = "i")]
    Install {
        /// Unit name without the .service suffix
        name: String,
        #[command(flatten)]
        template: TemplateArgs,
        /// Install as a per-user unit
        #[arg(long)]
        user: bool,
    },
    /// Install pre-rendered unit content from a file, or stdin with '-'
    InstallFile {
        /// Unit name without the .service suffix
        name: String,
        /// Path to the unit content
        source: PathBuf,
        /// Install as a per-user unit
        #[arg(long)]
        user: bool,
    },
    /// Print a rendered unit template without installing it
    Render {
        #[command(flatten)]
        template: TemplateArgs,
    },
    /// Enable a unit
    Enable {
        unit: String,
        /// Address the per-user service manager
        #[arg(long)]
        user: bool,
    },
    /// Start a unit
    Start {
        unit: String,
        /// Address the per-user service manager
        #[arg(long)]
        user: bool,
    },
    /// Reload unit definitions
    DaemonReload,
    /// Install a unit, reload, enable, and start it
    Provision {
        /// Unit name without the .service suffix
        name: String,
        #[command(flatten)]
        template: TemplateArgs,
        /// Install and run as a per-user unit
        #[arg(long)]
        user: bool,
    },
}

#[derive(Args)]
struct TemplateArgs {
    /// Path to the unit template
    #[arg(short, long)]
    template: PathBuf,
    /// Working directory bound as Cwd
    #[arg(long)]
    cwd: Option<String>,
    /// Additional binding (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// TOML file of string bindings
    #[arg(short, long, value_name = "FILE")]
    bindings: Option<PathBuf>,
}

impl TemplateArgs {
    /// Bindings file first, then --set pairs, then --cwd.
    fn bindings(&self) -> Result<Bindings, AppError> {
        let mut bindings = match &self.bindings {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .map_err(|source| AppError::ReadInput { path: path.clone(), source })?;
                Bindings::from_toml_str(&content)?
            }
            None => Bindings::new(),
        };

        for pair in &self.set {
            let (key, value) = Bindings::parse_pair(pair)?;
            bindings.insert(key, value);
        }

        if let Some(cwd) = &self.cwd {
            bindings.insert(unitctl::domain::CWD_KEY, cwd.clone());
        }

        Ok(bindings)
    }
}

impl Cli {
    fn config(&self) -> Config {
        let defaults = UnitDirs::default();
        let dirs = UnitDirs::new(
            self.system_dir.clone().unwrap_or(defaults.system),
            self.user_dir.clone().unwrap_or(defaults.user),
        );
        let config = Config::default().with_unit_dirs(dirs);
        match &self.systemctl {
            Some(program) => config.with_systemctl(program.clone()),
            None => config,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.config();

    match &cli.command {
        Commands::Install { name, template, user } => {
            let installer = UnitInstaller::from_config(&config);
            let path = installer.install_from_template(
                name,
                &template.template,
                &template.bindings()?,
                Scope::from_user_flag(*user),
            )?;
            println!("✅ Installed {}", path.display());
        }
        Commands::InstallFile { name, source, user } => {
            let content = read_source(source)?;
            let installer = UnitInstaller::from_config(&config);
            let path = installer.install_raw(name, &content, Scope::from_user_flag(*user))?;
            println!("✅ Installed {}", path.display());
        }
        Commands::Render { template } => {
            let installer = UnitInstaller::from_config(&config);
            print!("{}", installer.render(&template.template, &template.bindings()?)?);
        }
        Commands::Enable { unit, user } => {
            ControlPlane::from_config(&config).enable(unit, Scope::from_user_flag(*user))?;
            println!("✅ Enabled {}", unit);
        }
        Commands::Start { unit, user } => {
            ControlPlane::from_config(&config).start(unit, Scope::from_user_flag(*user))?;
            println!("✅ Started {}", unit);
        }
        Commands::DaemonReload => {
            ControlPlane::from_config(&config).daemon_reload()?;
            println!("✅ Reloaded unit definitions");
        }
        Commands::Provision { name, template, user } => {
            let path = unitctl::provision(
                &config,
                name,
                &template.template,
                &template.bindings()?,
                Scope::from_user_flag(*user),
            )?;
            println!("✅ Installed {}, enabled and started {}", path.display(), name);
        }
    }

    Ok(())
}

fn read_source(source: &Path) -> Result<Vec<u8>, AppError> {
    let result = if source == Path::new("-") {
        let mut content = Vec::new();
        io::stdin().read_to_end(&mut content).map(|_| content)
    } else {
        fs::read(source)
    };
    result.map_err(|e| AppError::ReadInput { path: source.to_path_buf(), source: e })
}
