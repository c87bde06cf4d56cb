// src/generation/framework.rs

use rand::Rng;
use tracing::info;

use crate::config::{GeneratorParameters, TerrainScenario};
use crate::error::GenerationError;
use crate::generation::air_defence::{place_roadside_defences, place_sam_site};
use crate::generation::convoy::{compose_convoy, place_convoy, select_start_node};
use crate::generation::flights::place_aircraft;
use crate::generation::objectives::{add_convoy_goal, add_convoy_notification, set_narrative};
use crate::generation::{GeneratedMission, GenerationOptions};
use crate::graph::GraphProvider;
use crate::mission::{CivilTraffic, Mission, MissionStart};
use crate::models::unit_type::find_flyable;

/// 石油輸送船団ミッションを1つ生成する
///
/// 乱数源は呼び出し側が与えるため、同じシードからは同じミッションが得られる。
///
/// # 引数
/// - `options`: 難易度・機体・マルチプレイ指定
/// - `scenario`: 地形ごとのシナリオ設定
/// - `graph`: 道路網
/// - `params`: 生成パラメータ
/// - `rng`: 乱数源
///
/// # 戻り値
/// - 生成したミッションと主要グループの識別子
pub fn generate_mission<G, R>(
    options: &GenerationOptions,
    scenario: &TerrainScenario,
    graph: &G,
    params: &GeneratorParameters,
    rng: &mut R,
) -> Result<GeneratedMission, GenerationError>
where
    G: GraphProvider,
    R: Rng + ?Sized,
{
    // 機体名の誤りは配置を始める前に検出する
    let player_aircraft = if options.multiplayer {
        None
    } else {
        Some(find_flyable(&options.player_aircraft)?)
    };
    let difficulty = options.difficulty;

    let mut mission = Mission::new(&scenario.terrain);
    mission.random_weather = true;
    mission.start = MissionStart::random_day(rng);

    let destination = graph.node(&scenario.destination)?;
    let start = select_start_node(graph, &scenario.spawn_zone, destination, params, rng)?;
    let vehicles = compose_convoy(difficulty, params, rng);
    let (convoy, path) = place_convoy(
        &mut mission,
        graph,
        scenario,
        start,
        destination,
        &vehicles,
        difficulty,
        options.unhide,
        params,
        rng,
    )?;

    let defences = place_roadside_defences(&mut mission, graph, scenario, &path, difficulty, options.unhide, params, rng)?;
    let sam_site = place_sam_site(&mut mission, graph, scenario, &path, difficulty, options.unhide, params, rng)?;
    let player_group = place_aircraft(&mut mission, scenario, player_aircraft, params, rng)?;

    let (notify_zone, notify_node) = add_convoy_notification(&mut mission, graph, convoy, &path, params, rng)?;
    mission.forced_options.civil_traffic = Some(CivilTraffic::Low);
    add_convoy_goal(&mut mission, convoy, player_group, params);
    set_narrative(&mut mission);

    info!(
        terrain = %scenario.terrain,
        difficulty,
        start = %start.name,
        nodes = path.len(),
        defences = defences.len(),
        sam = sam_site.is_some(),
        "ミッションを生成しました"
    );

    Ok(GeneratedMission {
        mission,
        start_node: start.name.clone(),
        path,
        convoy,
        defences,
        sam_site,
        player_group,
        notify_zone,
        notify_node,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Airport, Difficulty, Terrain};
    use crate::generation::convoy::CONVOY_NAME;
    use crate::generation::load_parameters::load_terrain_scenario;
    use crate::graph::{CityGraph, CityGraphData, Node};
    use crate::math::{Point, Polygon};
    use crate::mission::{Condition, MissionWriter, YamlMissionWriter};
    use crate::models::unit_type::flyable_aircraft;
    use crate::models::{GroupKind, Skill};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// 目的地 Port から北へ 10km 間隔で都市が並ぶ一本道のシナリオ
    fn corridor_scenario() -> TerrainScenario {
        let mut nodes = vec![Node {
            name: "Port".to_string(),
            position: Point::new(0.0, 0.0),
            air_defence_pos_small: Vec::new(),
        }];
        let mut edges = Vec::new();
        let mut previous = "Port".to_string();
        for i in 0..10u32 {
            let name = format!("Town{}", i);
            let y = f64::from(i + 1) * 10000.0;
            nodes.push(Node {
                name: name.clone(),
                position: Point::new(0.0, y),
                air_defence_pos_small: (0..10u32).map(|k| Point::new(200.0 + f64::from(k) * 50.0, y)).collect(),
            });
            edges.push([previous.clone(), name.clone()]);
            previous = name;
        }

        TerrainScenario {
            terrain: "caucasus".to_string(),
            red_country: "Abkhazia".to_string(),
            blue_country: "USA".to_string(),
            spawn_zone: Polygon::new(vec![
                Point::new(-5000.0, 5000.0),
                Point::new(-5000.0, 200000.0),
                Point::new(5000.0, 200000.0),
                Point::new(5000.0, 5000.0),
            ]),
            destination: "Port".to_string(),
            airport: Airport {
                id: 23,
                name: "Senaki-Kolkhi".to_string(),
                position: Point::new(-50000.0, 40000.0),
                runway_heading: 95.0,
            },
            graph: CityGraphData { nodes, edges },
        }
    }

    fn options(difficulty: Difficulty, multiplayer: bool) -> GenerationOptions {
        GenerationOptions {
            difficulty: difficulty.value(),
            player_aircraft: "A-10C".to_string(),
            multiplayer,
            unhide: false,
        }
    }

    /// test_generate_mission_hard
    /// 難易度 hard（0.7）では船団・対空陣地・SA-11・プレイヤー機・目標が揃う
    #[test]
    fn test_generate_mission_hard() {
        let scenario = corridor_scenario();
        let graph = CityGraph::from_data(&scenario.graph).unwrap();
        let params = GeneratorParameters::default();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generate_mission(&options(Difficulty::Hard, false), &scenario, &graph, &params, &mut rng).unwrap();
            let mission = &generated.mission;

            let start = graph.node(&generated.start_node).unwrap();
            assert!(start.position.distance_to(&Point::new(0.0, 0.0)) > params.min_start_distance);
            assert!(generated.path.len() >= 3);
            assert_eq!(generated.path.last().map(String::as_str), Some("Port"));

            let convoy = mission.group(generated.convoy).unwrap();
            assert_eq!(convoy.name, CONVOY_NAME);
            assert!(convoy.hidden);
            assert!(convoy.units.iter().all(|u| u.skill == Skill::High));

            let abkhazia = mission.country("Abkhazia").unwrap();
            assert_eq!(abkhazia.groups(GroupKind::Vehicle).iter().filter(|g| g.name == CONVOY_NAME).count(), 1);
            assert!(!generated.defences.is_empty());
            assert!(mission.group(generated.sam_site.unwrap()).unwrap().hidden);

            let usa = mission.country("USA").unwrap();
            assert_eq!(usa.groups(GroupKind::Plane).len(), 1);
            let player = mission.group(generated.player_group.unwrap()).unwrap();
            assert_eq!(player.units[0].skill, Skill::Player);
            assert_eq!(player.units[0].type_id, "A-10C");

            let goal = &mission.goals.blue[0];
            assert_eq!(goal.rules[0], Condition::GroupDead { group: generated.convoy });
            assert_eq!(mission.goals.offline.len(), 1);
            assert_eq!(mission.triggers.len(), 1);
            assert_eq!(mission.forced_options.civil_traffic, Some(CivilTraffic::Low));
            assert!(mission.random_weather);
            assert!(mission.trigger_zone(generated.notify_zone).unwrap().hidden);
        }
    }

    /// unhide 指定時は船団・対空陣地・SA-11 が表示され、通報ゾーンだけは隠したまま
    #[test]
    fn test_generate_mission_unhidden() {
        let scenario = corridor_scenario();
        let graph = CityGraph::from_data(&scenario.graph).unwrap();
        let mut opts = options(Difficulty::OhNo, false);
        opts.unhide = true;

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generate_mission(&opts, &scenario, &graph, &GeneratorParameters::default(), &mut rng).unwrap();
            let mission = &generated.mission;

            assert!(!mission.group(generated.convoy).unwrap().hidden);
            assert!(!generated.defences.is_empty());
            assert!(generated.defences.iter().all(|id| !mission.group(*id).unwrap().hidden));
            assert!(!mission.group(generated.sam_site.unwrap()).unwrap().hidden);
            assert!(mission.trigger_zone(generated.notify_zone).unwrap().hidden);
        }
    }

    /// 難易度が閾値以下なら SA-11 陣地は置かない
    #[test]
    fn test_generate_mission_without_sam() {
        let scenario = corridor_scenario();
        let graph = CityGraph::from_data(&scenario.graph).unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Normal] {
            let mut rng = StdRng::seed_from_u64(7);
            let generated =
                generate_mission(&options(difficulty, false), &scenario, &graph, &GeneratorParameters::default(), &mut rng)
                    .unwrap();
            assert!(generated.sam_site.is_none());
        }
    }

    /// マルチプレイでは操縦可能な機種ごとにクライアント枠ができる
    #[test]
    fn test_generate_mission_multiplayer() {
        let scenario = corridor_scenario();
        let graph = CityGraph::from_data(&scenario.graph).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let generated =
            generate_mission(&options(Difficulty::OhNo, true), &scenario, &graph, &GeneratorParameters::default(), &mut rng)
                .unwrap();

        assert!(generated.player_group.is_none());
        let usa = generated.mission.country("USA").unwrap();
        let flights = usa.groups(GroupKind::Plane).len() + usa.groups(GroupKind::Helicopter).len();
        assert_eq!(flights, flyable_aircraft().count());
        assert!(usa
            .groups(GroupKind::Plane)
            .iter()
            .all(|g| g.units.len() == 2 && g.units.iter().all(|u| u.skill == Skill::Client)));
        assert_eq!(
            generated.mission.goals.blue[0].rules,
            vec![Condition::GroupDead { group: generated.convoy }]
        );
    }

    /// 未知の機体は何も配置せずに失敗する
    #[test]
    fn test_generate_mission_unknown_aircraft() {
        let scenario = corridor_scenario();
        let graph = CityGraph::from_data(&scenario.graph).unwrap();
        let mut opts = options(Difficulty::Normal, false);
        opts.player_aircraft = "Sopwith Camel".to_string();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_mission(&opts, &scenario, &graph, &GeneratorParameters::default(), &mut rng),
            Err(GenerationError::UnknownAircraft(_))
        ));
    }

    /// 同じシードからは同じミッションが得られる
    #[test]
    fn test_generate_mission_reproducible() {
        let scenario = corridor_scenario();
        let graph = CityGraph::from_data(&scenario.graph).unwrap();
        let params = GeneratorParameters::default();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generate_mission(&options(Difficulty::Hard, false), &scenario, &graph, &params, &mut rng).unwrap();
            serde_yaml::to_string(&serde_yaml::Value::Mapping(generated.mission.serialize())).unwrap()
        };
        assert_eq!(run(11), run(11));
    }

    /// 同梱のコーカサス地形でアドレル行きの船団ミッションを生成し、書き出せる
    #[test]
    fn test_generate_mission_bundled_caucasus() {
        let scenario = load_terrain_scenario(Terrain::Caucasus).unwrap();
        let graph = CityGraph::from_data(&scenario.graph).unwrap();
        let mut rng = StdRng::seed_from_u64(2016);
        let generated =
            generate_mission(&options(Difficulty::Hard, false), &scenario, &graph, &GeneratorParameters::default(), &mut rng)
                .unwrap();
        assert_eq!(generated.path.last().map(String::as_str), Some("Adler"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Missions").join("oil_transport.miz");
        YamlMissionWriter.write(&generated.mission, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Oil Convoy"));
        assert!(text.contains("NotifyConvoyPosition"));
    }
}
