// src/error.rs

use thiserror::Error;

/// シナリオ生成で発生するエラー
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("不明な難易度です: {0}（easy, normal, hard, ohno のいずれか）")]
    UnknownDifficulty(String),

    #[error("操縦可能な機体ではありません: {0}")]
    UnknownAircraft(String),

    #[error("地形 {0} には輸送船団シナリオが定義されていません")]
    UnsupportedTerrain(String),

    #[error("ノードが見つかりません: {0}")]
    NodeNotFound(String),

    #[error("条件を満たすノードがありません")]
    NoRatedNodes,

    #[error("{attempts} 回試行しましたが出発ノードが見つかりません")]
    NoFeasibleStartNode { attempts: usize },

    #[error("{from} から {to} への経路がありません")]
    NoRoute { from: String, to: String },

    #[error("経路が短すぎます（{0} ノード）")]
    PathTooShort(usize),

    #[error("国が見つかりません: {0}")]
    CountryNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
