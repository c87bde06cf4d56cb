// src/config/scenario.rs

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::graph::city_graph::CityGraphData;
use crate::math::{Point, Polygon};

/// 生成対象の地形
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Terrain {
    Caucasus,
    Nevada,
}

impl Terrain {
    pub fn name(self) -> &'static str {
        match self {
            Terrain::Caucasus => "caucasus",
            Terrain::Nevada => "nevada",
        }
    }

    /// 同梱されている地形シナリオ（YAML）
    pub fn bundled_data(self) -> Option<&'static str> {
        match self {
            Terrain::Caucasus => Some(include_str!("../../data/terrains/caucasus.yaml")),
            Terrain::Nevada => None,
        }
    }

    /// ミッションファイルの既定の保存先
    pub fn default_output_path(self, home: &Path) -> PathBuf {
        let saved_games = match self {
            Terrain::Caucasus => "DCS",
            Terrain::Nevada => "DCS.openalpha",
        };
        home.join("Saved Games")
            .join(saved_games)
            .join("Missions")
            .join("oil_transport.miz")
    }
}

/// 出撃空港
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Airport {
    pub id: u32,
    pub name: String,
    pub position: Point,
    pub runway_heading: f64, // 滑走路方位（度）
}

/// 地形ごとのシナリオ設定
#[derive(Debug, Deserialize, Clone)]
pub struct TerrainScenario {
    pub terrain: String,
    pub red_country: String,
    pub blue_country: String,
    pub spawn_zone: Polygon,   // 船団の出発ゾーン
    pub destination: String,   // 船団の目的地ノード名
    pub airport: Airport,      // プレイヤーの出撃空港
    pub graph: CityGraphData,
}
