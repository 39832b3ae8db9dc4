pub mod error;
pub mod model;

pub use error::*;
pub use model::{DEFAULT_SCRIPT, DEFAULT_TIMEOUT_SECS, FleetNetConfig, RegionEntry};

use std::path::{Path, PathBuf};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = "fleetnet.yaml";

/// 設定ファイルのパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "FLEETNET_CONFIG_PATH";

/// FleetNetの設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("fleetnet");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// fleetnet.yaml を探す
///
/// 以下の優先順位で設定ファイルを検索:
/// 1. 環境変数 FLEETNET_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: fleetnet.yaml
/// 3. ./.fleetnet/ ディレクトリ内: fleetnet.yaml
/// 4. ~/.config/fleetnet/fleetnet.yaml (グローバル設定)
pub fn find_config_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    let current_dir = std::env::current_dir()?;

    // 2. カレントディレクトリで検索
    let path = current_dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Ok(path);
    }

    // 3. ./.fleetnet/ ディレクトリで検索
    let path = current_dir.join(".fleetnet").join(CONFIG_FILE_NAME);
    if path.exists() {
        return Ok(path);
    }

    // 4. グローバル設定ファイル
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("fleetnet").join(CONFIG_FILE_NAME);
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    Err(ConfigError::ConfigNotFound)
}

/// 設定を読み込む
///
/// `explicit` が指定された場合は検索せずにそのファイルを使う。
pub fn load_config(explicit: Option<&Path>) -> Result<FleetNetConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };
    FleetNetConfig::load(&path)
}
