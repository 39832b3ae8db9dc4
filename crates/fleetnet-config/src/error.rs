use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "設定ファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: fleetnet.yaml\n\
        - ./.fleetnet/ ディレクトリ\n\
        - ~/.config/fleetnet/fleetnet.yaml\n\
        または FLEETNET_CONFIG_PATH 環境変数で直接指定できます"
    )]
    ConfigNotFound,

    #[error("リージョンが重複しています: {0}")]
    DuplicateRegion(String),

    #[error("設定が不正です: {0}")]
    Invalid(String),

    #[error("YAML パースエラー: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
