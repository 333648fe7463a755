use clap::{Args, Parser, Subcommand};
use provision_agent::config::loader::load_config;
use provision_agent::store::FileStore;
use provision_agent::utils::logging::{self, LogLevel};
use provision_agent::{Provisioner, ProvisioningRequest};
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "provision-agent",
    about = "Provision or cancel partner-hosted Jetpack plans"
)]
struct Cli {
    /// Path to the service configuration file
    #[arg(long, default_value = "config.yaml", env = "PROVISION_AGENT_CONFIG")]
    config: PathBuf,

    /// Override the configured log level
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Provision a plan for a site
    Create(OrderArgs),
    /// Cancel the plan held by a site
    Cancel(OrderArgs),
}

#[derive(Args)]
struct OrderArgs {
    /// One of: free, personal, premium, professional
    #[arg(long)]
    plan: String,

    #[arg(long)]
    site_url: String,

    /// Local WordPress user the plan is provisioned for
    #[arg(long)]
    local_user: String,

    #[arg(long)]
    order_id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Load YAML config
    let cfg = load_config(&cli.config)?;
    logging::run(&cfg, cli.log_level);

    // 2. Build the request from the order arguments and partner credentials
    let args = match &cli.command {
        Command::Create(args) | Command::Cancel(args) => args,
    };
    let request = ProvisioningRequest {
        plan: args.plan.clone(),
        site_url: args.site_url.clone(),
        local_user: args.local_user.clone(),
        order_id: args.order_id.clone(),
        client_id: cfg.partner.client_id.resolve()?,
        client_secret: cfg.partner.client_secret.resolve()?,
    };

    // 3. Run the pipeline against the configured endpoints and store
    let store = FileStore::new(&cfg.store.path);
    let timeout = Duration::from_secs(cfg.settings.timeout_seconds());
    let provisioner = Provisioner::new(&cfg.endpoints, timeout, store)?;

    let result = match &cli.command {
        Command::Create(_) => provisioner.provision(&request).await.map(|_| ()),
        Command::Cancel(_) => provisioner.cancel(&request).await,
    };

    // The caller only gets a success marker or a displayable message.
    match result {
        Ok(()) => {
            println!("success");
            Ok(())
        }
        Err(e) => {
            error!(request = ?request, "operation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
