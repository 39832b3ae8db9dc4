use colored::Colorize;
use fleetnet_config::FleetNetConfig;

pub fn handle(config: &FleetNetConfig) {
    if config.regions.is_empty() {
        eprintln!("{}", "リージョンが登録されていません".yellow());
        return;
    }

    println!(
        "{}",
        format!("リージョン一覧 ({} 個):", config.regions.len()).bold()
    );
    for region in &config.regions {
        println!(
            "  • {}  {} / {}",
            region.uuid.to_string().cyan(),
            region.provider,
            region.code.green()
        );
    }
}
