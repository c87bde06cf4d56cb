// src/graph/city_graph.rs

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Deserialize;

use crate::error::GenerationError;
use crate::graph::{GraphProvider, Node, PathProximity, RouteSummary};
use crate::math::{Point, Polygon};
use crate::models::{Group, PointAction};

/// YAMLから読み込む道路網データ
#[derive(Debug, Deserialize, Clone)]
pub struct CityGraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<[String; 2]>, // 双方向の道路
}

/// ダイクストラ法の探索状態
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap を最小ヒープとして使うため逆順
        other.cost.total_cmp(&self.cost).then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// メモリ上の都市道路網
#[derive(Debug, Clone)]
pub struct CityGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl CityGraph {
    pub fn from_data(data: &CityGraphData) -> Result<Self, GenerationError> {
        let nodes = data.nodes.clone();
        let index: HashMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.name.clone(), i))
            .collect();
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for [a, b] in &data.edges {
            let ia = *index.get(a).ok_or_else(|| GenerationError::NodeNotFound(a.clone()))?;
            let ib = *index.get(b).ok_or_else(|| GenerationError::NodeNotFound(b.clone()))?;
            let length = nodes[ia].position.distance_to(&nodes[ib].position);
            adjacency[ia].push((ib, length));
            adjacency[ib].push((ia, length));
        }
        Ok(CityGraph { nodes, index, adjacency })
    }

    fn node_index(&self, name: &str) -> Result<usize, GenerationError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GenerationError::NodeNotFound(name.to_string()))
    }

    /// 最短経路（ノード番号列と経路長）
    fn shortest_path(&self, start: usize, goal: usize) -> Option<(Vec<usize>, f64)> {
        let mut dist = vec![f64::INFINITY; self.nodes.len()];
        let mut prev: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut heap = BinaryHeap::new();

        dist[start] = 0.0;
        heap.push(State { cost: 0.0, node: start });

        while let Some(State { cost, node }) = heap.pop() {
            if node == goal {
                break;
            }
            if cost > dist[node] {
                continue;
            }
            for &(next, length) in &self.adjacency[node] {
                let next_cost = cost + length;
                if next_cost < dist[next] {
                    dist[next] = next_cost;
                    prev[next] = Some(node);
                    heap.push(State { cost: next_cost, node: next });
                }
            }
        }

        if !dist[goal].is_finite() {
            return None;
        }
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(p) = prev[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some((path, dist[goal]))
    }

    /// 経路（ノード名列）上の座標
    fn path_positions(&self, path: &[String]) -> Vec<Point> {
        path.iter()
            .filter_map(|name| self.index.get(name).map(|&i| self.nodes[i].position))
            .collect()
    }
}

/// 点から折れ線までの最短距離
fn distance_to_polyline(point: &Point, line: &[Point]) -> f64 {
    match line {
        [] => f64::INFINITY,
        [single] => point.distance_to(single),
        _ => line
            .windows(2)
            .map(|w| point.distance_to_segment(&w[0], &w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

impl GraphProvider for CityGraph {
    fn node(&self, name: &str) -> Result<&Node, GenerationError> {
        Ok(&self.nodes[self.node_index(name)?])
    }

    fn rated_nodes_within(&self, polygon: &Polygon, proximity: Option<&PathProximity<'_>>) -> Vec<&Node> {
        let line = proximity.map(|p| (self.path_positions(p.path), p.distance));
        self.nodes
            .iter()
            .filter(|n| polygon.contains(&n.position))
            .filter(|n| match &line {
                Some((points, distance)) => distance_to_polyline(&n.position, points) <= *distance,
                None => true,
            })
            .collect()
    }

    fn travel(
        &self,
        group: &mut Group,
        start: &str,
        destination: &str,
        speed: f64,
    ) -> Result<(RouteSummary, Vec<String>), GenerationError> {
        let from = self.node_index(start)?;
        let to = self.node_index(destination)?;
        let (path, length) = self.shortest_path(from, to).ok_or_else(|| GenerationError::NoRoute {
            from: start.to_string(),
            to: destination.to_string(),
        })?;

        for &i in &path[1..] {
            group.add_waypoint(self.nodes[i].position, PointAction::OnRoad, speed);
        }

        let summary = RouteSummary {
            length,
            travel_time: if speed > 0.0 { length / (speed / 3.6) } else { f64::INFINITY },
        };
        let names = path.iter().map(|&i| self.nodes[i].name.clone()).collect();
        Ok((summary, names))
    }
}
