// src/graph/mod.rs

pub mod city_graph;

use serde::Deserialize;

use crate::error::GenerationError;
use crate::math::{Point, Polygon};
use crate::models::Group;

pub use city_graph::{CityGraph, CityGraphData};

/// 道路網上の都市ノード
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub position: Point,
    #[serde(default)]
    pub air_defence_pos_small: Vec<Point>, // 小型対空陣地の設置候補位置
}

/// 経路近傍の条件
#[derive(Debug, Clone, Copy)]
pub struct PathProximity<'a> {
    pub path: &'a [String],
    pub distance: f64,
}

/// 経路計算の結果
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub length: f64,      // 経路長 (m)
    pub travel_time: f64, // 所要時間 (s)
}

/// 道路網の問い合わせインターフェース
pub trait GraphProvider {
    /// 名前でノードを取得する
    fn node(&self, name: &str) -> Result<&Node, GenerationError>;

    /// 多角形内（かつ指定があれば経路近傍）のノード
    fn rated_nodes_within(&self, polygon: &Polygon, proximity: Option<&PathProximity<'_>>) -> Vec<&Node>;

    /// グループを `start` から `destination` まで道路沿いに移動させる
    ///
    /// # 戻り値
    /// - 経路の概要と、通過するノード名の列（出発・到着ノードを含む）
    fn travel(
        &self,
        group: &mut Group,
        start: &str,
        destination: &str,
        speed: f64,
    ) -> Result<(RouteSummary, Vec<String>), GenerationError>;
}
