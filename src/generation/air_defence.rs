// src/generation/air_defence.rs

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::config::{GeneratorParameters, TerrainScenario};
use crate::error::GenerationError;
use crate::graph::{GraphProvider, PathProximity};
use crate::math::Point;
use crate::mission::Mission;
use crate::models::unit_type::{
    AAA_ZU_23_EMPLACEMENT, SAM_SA_11_BUK_CC, SAM_SA_11_BUK_LN, SAM_SA_11_BUK_SR, SAM_SA_18_IGLA_COMM,
    SAM_SA_18_IGLA_MANPADS,
};
use crate::models::{Group, GroupId, Skill, UnitType};

/// 小型対空陣地の編成（どちらか一方を等確率で選ぶ）
pub const SMALL_DEFENCE_LOADOUTS: [&[UnitType]; 2] = [
    &[AAA_ZU_23_EMPLACEMENT],
    &[SAM_SA_18_IGLA_MANPADS, SAM_SA_18_IGLA_COMM],
];

pub const SAM_SITE_NAME: &str = "SA-11 Site";

/// SA-11 発射機の数
const SA11_LAUNCHERS: usize = 4;

/// 経路沿いの都市に小型対空陣地を置く
///
/// 各都市で `floor(min(難易度, U) * 設置候補数)` 箇所を重複なしで選ぶ。
#[allow(clippy::too_many_arguments)]
pub fn place_roadside_defences<G, R>(
    mission: &mut Mission,
    graph: &G,
    scenario: &TerrainScenario,
    path: &[String],
    difficulty: f64,
    unhide: bool,
    params: &GeneratorParameters,
    rng: &mut R,
) -> Result<Vec<GroupId>, GenerationError>
where
    G: GraphProvider,
    R: Rng + ?Sized,
{
    let proximity = PathProximity {
        path,
        distance: params.path_proximity,
    };
    let skill = Skill::from_percentage(difficulty);
    let mut placed = Vec::new();

    for city in graph.rated_nodes_within(&scenario.spawn_zone, Some(&proximity)) {
        let mut free_slots: Vec<Point> = city.air_defence_pos_small.clone();
        let use_slots = (difficulty.min(rng.gen::<f64>()) * free_slots.len() as f64) as usize;

        for _ in 0..use_slots {
            let slot = free_slots.remove(rng.gen_range(0..free_slots.len()));
            let loadout = SMALL_DEFENCE_LOADOUTS[rng.gen_range(0..SMALL_DEFENCE_LOADOUTS.len())];
            let name = format!("{} AAA #{}", city.name, free_slots.len());

            let mut group = mission.vehicle_group_platoon(&name, loadout, slot, 0.0);
            group.set_skill(skill);
            group.hidden = !unhide;
            group.formation_scattered(rng.gen_range(0.0..360.0), params.defence_spread, rng);
            placed.push(mission.add_group(&scenario.red_country, group)?);
        }
        debug!(city = %city.name, slots = use_slots, "対空陣地を配置しました");
    }

    info!(count = placed.len(), "経路沿いの対空陣地");
    Ok(placed)
}

/// SA-11 陣地の部隊編成
///
/// 捜索レーダーを中心に指揮車を置き、発射機を半径 `radius` の円周上に等間隔で並べる。
pub fn sa11_site(mission: &mut Mission, position: Point, radius: f64, skill: Skill) -> Group {
    let mut types = vec![SAM_SA_11_BUK_SR, SAM_SA_11_BUK_CC];
    types.extend(std::iter::repeat(SAM_SA_11_BUK_LN).take(SA11_LAUNCHERS));

    let mut group = mission.vehicle_group_platoon(SAM_SITE_NAME, &types, position, 0.0);
    group.units[1].position = position.point_from_heading(180.0, radius / 4.0);
    for (i, launcher) in group.units[2..].iter_mut().enumerate() {
        let heading = 360.0 / SA11_LAUNCHERS as f64 * i as f64;
        launcher.position = position.point_from_heading(heading, radius);
        launcher.heading = heading;
    }
    group.set_skill(skill);
    group
}

/// 難易度が閾値を超える場合に限り、経路沿いの都市付近に SA-11 陣地を1つ置く
#[allow(clippy::too_many_arguments)]
pub fn place_sam_site<G, R>(
    mission: &mut Mission,
    graph: &G,
    scenario: &TerrainScenario,
    path: &[String],
    difficulty: f64,
    unhide: bool,
    params: &GeneratorParameters,
    rng: &mut R,
) -> Result<Option<GroupId>, GenerationError>
where
    G: GraphProvider,
    R: Rng + ?Sized,
{
    if difficulty <= params.sam_threshold {
        return Ok(None);
    }
    let proximity = PathProximity {
        path,
        distance: params.path_proximity,
    };
    let candidates = graph.rated_nodes_within(&scenario.spawn_zone, Some(&proximity));
    let node = *candidates.choose(rng).ok_or(GenerationError::NoRatedNodes)?;

    let position = node.position.random_point_within(params.sam_offset, params.sam_jitter, rng);
    let mut site = sa11_site(mission, position, params.sam_radius, Skill::from_percentage(difficulty));
    site.hidden = !unhide;
    let id = mission.add_group(&scenario.red_country, site)?;
    info!(near = %node.name, "SA-11 陣地を配置しました");
    Ok(Some(id))
}
