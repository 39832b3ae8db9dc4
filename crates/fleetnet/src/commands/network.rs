use colored::Colorize;
use fleetnet_core::{CommandResult, NetworkManager, RegionRef};

pub async fn handle_bootstrap(
    manager: &NetworkManager,
    region: RegionRef,
    host_vpc_id: Option<&str>,
) -> anyhow::Result<()> {
    eprintln!("{}", "ネットワークを構築中...".yellow());
    eprintln!("リージョン: {}", region.to_string().cyan());
    match host_vpc_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => eprintln!("ホスト VPC: {}", id.cyan()),
        None => eprintln!("ホスト VPC: {}", "新規作成".dimmed()),
    }

    let result = manager.bootstrap(region, host_vpc_id).await?;
    print_result(&result)?;

    eprintln!("{}", "✓ 構築完了".green());
    Ok(())
}

pub async fn handle_query(manager: &NetworkManager, region: RegionRef) -> anyhow::Result<()> {
    eprintln!("{}", "ネットワーク状態を取得中...".blue());
    eprintln!("リージョン: {}", region.to_string().cyan());

    let result = manager.query(region).await?;
    print_result(&result)?;
    Ok(())
}

pub async fn handle_cleanup(manager: &NetworkManager, region: RegionRef) -> anyhow::Result<()> {
    eprintln!("{}", "ネットワークを撤去中...".yellow());
    eprintln!("リージョン: {}", region.to_string().cyan());

    let result = manager.cleanup(region).await?;
    print_result(&result)?;

    eprintln!("{}", "✓ 撤去完了".green());
    Ok(())
}

fn print_result(result: &CommandResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result.value())?);
    Ok(())
}
