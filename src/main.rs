use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use version_checker::config::{
    DEFAULT_GITHUB_API_URL, DEFAULT_PYPI_URL, PackageResolverConfig, TagResolverConfig,
};
use version_checker::logging::{self, LogFormat};
use version_checker::version::resolver::{latest_package_version, latest_tag};

#[derive(Parser)]
#[command(name = "version-checker")]
#[command(version, about = "Find the latest released version of a repository or package")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log output format (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Print the highest semantic version tag of a GitHub repository
    GithubTag(GithubTagArgs),
    /// Print `<package>=<version>` for the version currently published on PyPI
    PypiPackage(PypiPackageArgs),
}

#[derive(Args)]
struct GithubTagArgs {
    /// Repository in "owner/name" form
    #[arg(value_name = "OWNER/NAME", env = "GITHUB_REPO")]
    repository: Option<String>,

    /// Token sent as `Authorization: Bearer <token>`
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, value_name = "URL", env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    api_url: String,
}

#[derive(Args)]
struct PypiPackageArgs {
    /// Package name as published on the index
    #[arg(value_name = "PACKAGE", env = "PIP_PACKAGE")]
    package: Option<String>,

    /// Package index base URL
    #[arg(long, value_name = "URL", env = "PYPI_URL", default_value = DEFAULT_PYPI_URL)]
    index_url: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Command::GithubTag(args) => {
            let config = match TagResolverConfig::new(args.repository, args.token, args.api_url) {
                Ok(config) => config,
                Err(e) => {
                    debug!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            let version = runtime.block_on(latest_tag(&config))?;
            println!("{version}");
        }
        Command::PypiPackage(args) => {
            let config = match PackageResolverConfig::new(args.package, args.index_url) {
                Ok(config) => config,
                Err(e) => {
                    debug!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            let version = runtime.block_on(latest_package_version(&config))?;
            println!("{}={}", config.package, version);
        }
    }

    Ok(ExitCode::SUCCESS)
}
