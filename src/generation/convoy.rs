// src/generation/convoy.rs

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::config::{GeneratorParameters, TerrainScenario};
use crate::error::GenerationError;
use crate::graph::{GraphProvider, Node};
use crate::math::Polygon;
use crate::mission::Mission;
use crate::models::unit_type::{AAA_ZU_23_ON_URAL_375, FUEL_TRUCK_ATZ_10, SPAAA_ZSU_23_4_SHILKA};
use crate::models::{GroupId, PointAction, Skill, UnitType};

pub const CONVOY_NAME: &str = "Oil Convoy";

/// 船団に随伴しうる対空車両
pub const CONVOY_AIR_DEFENCE: [UnitType; 2] = [AAA_ZU_23_ON_URAL_375, SPAAA_ZSU_23_4_SHILKA];

/// 初期経路点での速度 (km/h)
const INITIAL_WAYPOINT_SPEED: f64 = 32.0;

/// 目的地から十分離れた出発ノードを抽選する
///
/// # 引数
/// - `graph`: 道路網
/// - `zone`: 出発ゾーン
/// - `destination`: 目的地ノード
/// - `params`: 最小距離と最大試行回数
/// - `rng`: 乱数源
///
/// # 戻り値
/// - 目的地までの距離が最小距離を超えるノード
pub fn select_start_node<'g, G, R>(
    graph: &'g G,
    zone: &Polygon,
    destination: &Node,
    params: &GeneratorParameters,
    rng: &mut R,
) -> Result<&'g Node, GenerationError>
where
    G: GraphProvider,
    R: Rng + ?Sized,
{
    let candidates = graph.rated_nodes_within(zone, None);
    if candidates.is_empty() {
        return Err(GenerationError::NoRatedNodes);
    }

    for attempt in 1..=params.max_start_attempts {
        let Some(&node) = candidates.choose(rng) else {
            break;
        };
        let distance = node.position.distance_to(&destination.position);
        if distance > params.min_start_distance {
            debug!(node = %node.name, distance, attempt, "出発ノードを決定しました");
            return Ok(node);
        }
    }
    Err(GenerationError::NoFeasibleStartNode {
        attempts: params.max_start_attempts,
    })
}

/// 難易度に応じた船団の車両構成
///
/// 燃料車 `convoy_base_size` 台に `floor(min(難易度, U) * convoy_growth)` 台を加え、
/// 確率 `難易度` で対空車両を1台随伴させる。
pub fn compose_convoy<R: Rng + ?Sized>(difficulty: f64, params: &GeneratorParameters, rng: &mut R) -> Vec<UnitType> {
    let extra = (difficulty.min(rng.gen::<f64>()) * params.convoy_growth as f64) as usize;
    let mut vehicles = vec![FUEL_TRUCK_ATZ_10; params.convoy_base_size + extra];
    if rng.gen::<f64>() < difficulty {
        vehicles.push(CONVOY_AIR_DEFENCE[rng.gen_range(0..CONVOY_AIR_DEFENCE.len())]);
    }
    vehicles
}

/// 船団を出発ノード付近に配置し、目的地までの経路を設定する
///
/// # 戻り値
/// - 船団のグループIDと、経路上のノード名の列
#[allow(clippy::too_many_arguments)]
pub fn place_convoy<G, R>(
    mission: &mut Mission,
    graph: &G,
    scenario: &TerrainScenario,
    start: &Node,
    destination: &Node,
    vehicles: &[UnitType],
    difficulty: f64,
    unhide: bool,
    params: &GeneratorParameters,
    rng: &mut R,
) -> Result<(GroupId, Vec<String>), GenerationError>
where
    G: GraphProvider,
    R: Rng + ?Sized,
{
    let position = start.position.random_point_within(params.spawn_radius, 0.0, rng);
    let mut convoy = mission.vehicle_group_platoon(CONVOY_NAME, vehicles, position, 0.0);
    convoy.hidden = !unhide;
    convoy.set_skill(Skill::from_percentage(difficulty));
    convoy.formation_scattered(0.0, params.convoy_spread, rng);
    convoy.add_waypoint(start.position, PointAction::OnRoad, INITIAL_WAYPOINT_SPEED);

    let (route, path) = graph.travel(&mut convoy, &start.name, &destination.name, params.convoy_speed)?;
    info!(
        vehicles = vehicles.len(),
        from = %start.name,
        to = %destination.name,
        length = route.length,
        travel_time = route.travel_time,
        "船団を配置しました"
    );

    let id = mission.add_group(&scenario.red_country, convoy)?;
    Ok((id, path))
}
