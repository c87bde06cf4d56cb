// src/generation/mod.rs

pub mod air_defence;
pub mod convoy;
pub mod flights;
pub mod framework;
pub mod load_parameters;
pub mod objectives;
pub mod stats;

use crate::mission::{Mission, TriggerZoneId};
use crate::models::GroupId;

pub use framework::generate_mission;

/// 1回の生成に与える入力
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub difficulty: f64,         // 0〜1 の難易度値
    pub player_aircraft: String, // シングルプレイ時の機体
    pub multiplayer: bool,
    pub unhide: bool,            // 敵をブリーフィング時点で表示する
}

/// 生成結果（ミッション本体と、生成したグループ等の識別子）
#[derive(Debug, Clone)]
pub struct GeneratedMission {
    pub mission: Mission,
    pub start_node: String,
    pub path: Vec<String>,
    pub convoy: GroupId,
    pub defences: Vec<GroupId>,
    pub sam_site: Option<GroupId>,
    pub player_group: Option<GroupId>,
    pub notify_zone: TriggerZoneId,
    pub notify_node: String,
}
