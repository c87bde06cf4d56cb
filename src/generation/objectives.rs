// src/generation/objectives.rs

use rand::Rng;
use tracing::debug;

use crate::config::GeneratorParameters;
use crate::error::GenerationError;
use crate::graph::GraphProvider;
use crate::mission::{Action, Condition, Goal, Mission, Side, Trigger, TriggerZoneId};
use crate::models::GroupId;

pub const NOTIFY_ZONE_NAME: &str = "notify_zone";
pub const CONVOY_GOAL_NAME: &str = "convoy destroyed";

/// 通報メッセージの表示秒数
const MESSAGE_SECONDS: u32 = 10;

const SORTIE: &str = "Search and destroy the oil convoy";

const DESCRIPTION: &str = "Abkhazia is selling oil to Russia to silently finance their military investments.

US and Georgia forces decided to prevent these oil transports.";

const BLUE_TASK: &str = "You are tasked to search and destroy a current oil convoy.

The position of the convoy is unknown, but we have several agents in Abkhazia that will look out
for the current route of the oil convoy.
Last known position will be transmitted to you while in flight.
Keep in mind that there are man pads and several AAA air defences around cities in Abkazia that are just waiting
to shoot down an American or Georgian aircraft.

Mission objectives:
  * Find the convoy
  * Destroy the convoy
  * Head back in one piece to Senaki airport.";

/// 経路の中ほどのノードに通報ゾーンを置き、船団の到着を味方に知らせるトリガーを登録する
///
/// # 戻り値
/// - 通報ゾーンのIDと通報ノード名
pub fn add_convoy_notification<G, R>(
    mission: &mut Mission,
    graph: &G,
    convoy: GroupId,
    path: &[String],
    params: &GeneratorParameters,
    rng: &mut R,
) -> Result<(TriggerZoneId, String), GenerationError>
where
    G: GraphProvider,
    R: Rng + ?Sized,
{
    let [first, last] = params.notify_segment;
    let last = last.min(path.len());
    if first >= last {
        return Err(GenerationError::PathTooShort(path.len()));
    }
    let node = graph.node(&path[rng.gen_range(first..last)])?;

    let zone = mission.add_trigger_zone(node.position, params.notify_zone_radius, true, NOTIFY_ZONE_NAME);
    let mut trigger = Trigger::once("NotifyConvoyPosition");
    trigger.add_condition(Condition::PartOfGroupInZone { group: convoy, zone });
    trigger.add_action(Action::MessageToCoalition {
        side: Side::Blue,
        text: format!("An agent just reported that the convoy just arrived at {}", node.name),
        seconds: MESSAGE_SECONDS,
    });
    mission.triggers.push(trigger);
    debug!(node = %node.name, "通報トリガーを登録しました");

    Ok((zone, node.name.clone()))
}

/// 「船団撃破」目標を青陣営とオフライン評価に登録する
///
/// シングルプレイではプレイヤー編隊の生存も条件に加える。
pub fn add_convoy_goal(mission: &mut Mission, convoy: GroupId, player: Option<GroupId>, params: &GeneratorParameters) {
    let mut goal = Goal::new(CONVOY_GOAL_NAME, params.goal_score);
    goal.rules.push(Condition::GroupDead { group: convoy });
    if let Some(player) = player {
        goal.rules.push(Condition::GroupAlive { group: player });
    }
    mission.goals.add_blue(goal.clone());
    mission.goals.add_offline(goal);
}

/// ブリーフィング文
pub fn set_narrative(mission: &mut Mission) {
    mission.set_sortie_text(SORTIE);
    mission.set_description_text(DESCRIPTION);
    mission.set_description_bluetask_text(BLUE_TASK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CityGraph, CityGraphData, Node};
    use crate::math::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_graph(count: usize) -> (CityGraph, Vec<String>) {
        let nodes: Vec<Node> = (0..count)
            .map(|i| Node {
                name: format!("N{}", i),
                position: Point::new(0.0, i as f64 * 1000.0),
                air_defence_pos_small: Vec::new(),
            })
            .collect();
        let path = nodes.iter().map(|n| n.name.clone()).collect();
        let graph = CityGraph::from_data(&CityGraphData { nodes, edges: Vec::new() }).unwrap();
        (graph, path)
    }

    /// 通報ノードは経路の [2, 6) の範囲から選ばれる
    #[test]
    fn test_notification_node_in_middle_segment() {
        let (graph, path) = line_graph(10);
        let params = GeneratorParameters::default();
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut mission = Mission::new("caucasus");
            let (zone, name) =
                add_convoy_notification(&mut mission, &graph, GroupId(1), &path, &params, &mut rng).unwrap();
            let index = path.iter().position(|p| *p == name).unwrap();
            assert!((2..6).contains(&index));

            let zone = mission.trigger_zone(zone).unwrap();
            assert!(zone.hidden);
            assert_eq!(zone.radius, 300.0);
            assert_eq!(mission.triggers.len(), 1);
        }
    }

    /// 経路が3ノードなら3番目が選ばれる
    #[test]
    fn test_notification_short_path() {
        let (graph, path) = line_graph(3);
        let mut rng = StdRng::seed_from_u64(0);
        let mut mission = Mission::new("caucasus");
        let (_, name) =
            add_convoy_notification(&mut mission, &graph, GroupId(1), &path, &GeneratorParameters::default(), &mut rng)
                .unwrap();
        assert_eq!(name, "N2");
    }

    #[test]
    fn test_notification_path_too_short() {
        let (graph, path) = line_graph(2);
        let mut rng = StdRng::seed_from_u64(0);
        let mut mission = Mission::new("caucasus");
        assert!(matches!(
            add_convoy_notification(&mut mission, &graph, GroupId(1), &path, &GeneratorParameters::default(), &mut rng),
            Err(GenerationError::PathTooShort(2))
        ));
        assert!(mission.triggers.is_empty());
    }

    #[test]
    fn test_convoy_goal_single_and_multiplayer() {
        let params = GeneratorParameters::default();

        let mut mission = Mission::new("caucasus");
        add_convoy_goal(&mut mission, GroupId(1), Some(GroupId(5)), &params);
        assert_eq!(mission.goals.blue.len(), 1);
        assert_eq!(mission.goals.offline.len(), 1);
        assert_eq!(
            mission.goals.blue[0].rules,
            vec![Condition::GroupDead { group: GroupId(1) }, Condition::GroupAlive { group: GroupId(5) }]
        );

        let mut mission = Mission::new("caucasus");
        add_convoy_goal(&mut mission, GroupId(1), None, &params);
        assert_eq!(mission.goals.blue[0].rules, vec![Condition::GroupDead { group: GroupId(1) }]);
        assert_eq!(mission.goals.blue[0].score, 100);
    }
}
