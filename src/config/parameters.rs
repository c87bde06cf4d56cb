// src/config/parameters.rs

use serde::Deserialize;

/// シナリオ生成の定数群
///
/// YAMLで一部の値だけを上書きできるよう、欠けた項目は既定値で補う。
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorParameters {
    pub min_start_distance: f64,    // 出発ノードと目的地の最小距離 (m)
    pub max_start_attempts: usize,  // 出発ノード抽選の最大試行回数
    pub convoy_base_size: usize,    // 船団の基本車両数
    pub convoy_growth: usize,       // 難易度による追加車両の上限
    pub spawn_radius: f64,          // 出発ノードからの配置半径 (m)
    pub convoy_spread: f64,         // 船団の散開半径 (m)
    pub convoy_speed: f64,          // 船団の移動速度 (km/h)
    pub path_proximity: f64,        // 経路近傍とみなす距離 (m)
    pub defence_spread: f64,        // 対空陣地の散開半径 (m)
    pub sam_threshold: f64,         // SA-11 を配置する難易度の閾値
    pub sam_offset: f64,            // SA-11 陣地のノードからの距離 (m)
    pub sam_jitter: f64,            // SA-11 陣地の最小距離 (m)
    pub sam_radius: f64,            // SA-11 発射機の配置半径 (m)
    pub notify_zone_radius: f64,    // 通報ゾーンの半径 (m)
    pub notify_segment: [usize; 2], // 通報ノードを選ぶ経路インデックス範囲 [開始, 終了)
    pub client_group_size: usize,   // マルチプレイ時の編隊機数
    pub goal_score: u32,            // 目標達成時のスコア
}

impl Default for GeneratorParameters {
    fn default() -> Self {
        GeneratorParameters {
            min_start_distance: 70000.0,
            max_start_attempts: 1000,
            convoy_base_size: 3,
            convoy_growth: 10,
            spawn_radius: 50.0,
            convoy_spread: 50.0,
            convoy_speed: 60.0,
            path_proximity: 50.0,
            defence_spread: 10.0,
            sam_threshold: 0.5,
            sam_offset: 80.0,
            sam_jitter: 30.0,
            sam_radius: 120.0,
            notify_zone_radius: 300.0,
            notify_segment: [2, 6],
            client_group_size: 2,
            goal_score: 100,
        }
    }
}
