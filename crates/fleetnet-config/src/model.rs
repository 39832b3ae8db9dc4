//! 設定ファイルのモデル

use crate::error::{ConfigError, Result};
use fleetnet_core::RegionRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// devops スクリプトのデフォルトパス (devops_home からの相対)
pub const DEFAULT_SCRIPT: &str = "bin/ybcloud.sh";

/// プロセスのデフォルトタイムアウト (秒)
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// fleetnet.yaml の内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetNetConfig {
    /// クラウド自動化スクリプトが置かれたディレクトリ
    pub devops_home: PathBuf,

    /// 実行するスクリプト (devops_home からの相対パスまたは絶対パス)
    #[serde(default = "default_script")]
    pub script: PathBuf,

    /// 1回の実行に許す時間 (秒)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 既知のリージョン
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
}

/// リージョン定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub uuid: RegionRef,

    /// プロバイダコード (aws, gcp, azu など)
    pub provider: String,

    /// プロバイダ側のリージョンコード (us-west-2 など)
    pub code: String,

    /// 子プロセスに渡す追加の環境変数
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

fn default_script() -> PathBuf {
    PathBuf::from(DEFAULT_SCRIPT)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl FleetNetConfig {
    /// YAML 文字列から読み込んで検証する
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// ファイルから読み込んで検証する
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.devops_home.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("devops_home が空です".to_string()));
        }
        if self.script.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("script が空です".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs は 1 以上を指定してください".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for region in &self.regions {
            if !seen.insert(region.uuid) {
                return Err(ConfigError::DuplicateRegion(region.uuid.to_string()));
            }
            if region.provider.trim().is_empty() || region.code.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "リージョン {} の provider/code が空です",
                    region.uuid
                )));
            }
        }

        Ok(())
    }

    /// スクリプトの実体パス
    pub fn script_path(&self) -> PathBuf {
        self.devops_home.join(&self.script)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
