mod commands;

use clap::{Parser, Subcommand};
use fleetnet_core::{NetworkManager, RegionRef};
use fleetnet_devops::DevopsRunner;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "fleetnet")]
#[command(about = "リージョンのネットワークを構築・確認・撤去する", long_about = None)]
struct Cli {
    /// 設定ファイルのパス (FLEETNET_CONFIG_PATH 環境変数)
    #[arg(short, long, global = true, env = "FLEETNET_CONFIG_PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// リージョンのネットワークを構築
    Bootstrap {
        /// リージョン UUID
        region: RegionRef,
        /// 既存のホスト VPC を使う（省略時は新規作成）
        #[arg(long = "host-vpc-id")]
        host_vpc_id: Option<String>,
    },
    /// リージョンのネットワーク状態を表示
    Query {
        /// リージョン UUID
        region: RegionRef,
    },
    /// リージョンのネットワークを撤去
    Cleanup {
        /// リージョン UUID
        region: RegionRef,
    },
    /// 設定済みリージョンの一覧を表示
    Regions,
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout は JSON 専用なのでログは stderr へ
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Versionコマンドは設定ファイル不要
    if matches!(cli.command, Commands::Version) {
        println!("fleetnet {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = fleetnet_config::load_config(cli.config.as_deref())?;
    tracing::debug!(devops_home = %config.devops_home.display(), "設定を読み込みました");

    if matches!(cli.command, Commands::Regions) {
        commands::regions::handle(&config);
        return Ok(());
    }

    let runner = DevopsRunner::from_config(&config);
    let manager = NetworkManager::new(Arc::new(runner));

    match cli.command {
        Commands::Bootstrap {
            region,
            host_vpc_id,
        } => commands::network::handle_bootstrap(&manager, region, host_vpc_id.as_deref()).await,
        Commands::Query { region } => commands::network::handle_query(&manager, region).await,
        Commands::Cleanup { region } => commands::network::handle_cleanup(&manager, region).await,
        Commands::Regions | Commands::Version => Ok(()),
    }
}
