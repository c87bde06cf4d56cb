// src/mission/goals.rs

use serde_yaml::Mapping;

use crate::mission::triggers::{Condition, WorldState};

/// 得点付きの達成条件
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: String,
    pub score: u32,
    pub rules: Vec<Condition>,
}

impl Goal {
    pub fn new(name: &str, score: u32) -> Self {
        Goal {
            name: name.to_string(),
            score,
            rules: Vec::new(),
        }
    }

    /// すべての条件が成立していれば達成（条件なしは未達成）
    pub fn is_met<W: WorldState + ?Sized>(&self, world: &W) -> bool {
        !self.rules.is_empty() && self.rules.iter().all(|r| r.is_satisfied(world))
    }

    pub fn serialize(&self, side: &str) -> Mapping {
        let mut rules = Mapping::new();
        for (i, rule) in self.rules.iter().enumerate() {
            rules.insert((i + 1).into(), rule.serialize().into());
        }
        let mut d = Mapping::new();
        d.insert("comment".into(), self.name.clone().into());
        d.insert("score".into(), self.score.into());
        d.insert("side".into(), side.into());
        d.insert("rules".into(), rules.into());
        d
    }
}

/// 陣営ごとの目標一覧
#[derive(Debug, Clone, Default)]
pub struct Goals {
    pub blue: Vec<Goal>,
    pub red: Vec<Goal>,
    pub offline: Vec<Goal>,
}

impl Goals {
    pub fn add_blue(&mut self, goal: Goal) {
        self.blue.push(goal);
    }

    pub fn add_offline(&mut self, goal: Goal) {
        self.offline.push(goal);
    }

    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        let sides = [("BLUE", &self.blue), ("RED", &self.red), ("OFFLINE", &self.offline)];
        let mut i = 1;
        for (side, goals) in sides {
            for goal in goals {
                d.insert(i.into(), goal.serialize(side).into());
                i += 1;
            }
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::triggers::TriggerZoneId;
    use crate::models::GroupId;
    use serde_yaml::Value;

    struct DeadGroups(Vec<GroupId>);

    impl WorldState for DeadGroups {
        fn is_group_dead(&self, group: GroupId) -> bool {
            self.0.contains(&group)
        }

        fn is_part_of_group_in_zone(&self, _group: GroupId, _zone: TriggerZoneId) -> bool {
            false
        }
    }

    fn convoy_goal() -> Goal {
        let mut goal = Goal::new("convoy destroyed", 100);
        goal.rules.push(Condition::GroupDead { group: GroupId(1) });
        goal.rules.push(Condition::GroupAlive { group: GroupId(7) });
        goal
    }

    /// 船団全滅かつプレイヤー生存で達成
    #[test]
    fn test_goal_is_met() {
        let goal = convoy_goal();
        assert!(!goal.is_met(&DeadGroups(vec![])));
        assert!(goal.is_met(&DeadGroups(vec![GroupId(1)])));
        assert!(!goal.is_met(&DeadGroups(vec![GroupId(1), GroupId(7)])));
    }

    #[test]
    fn test_empty_goal_is_never_met() {
        assert!(!Goal::new("nothing", 10).is_met(&DeadGroups(vec![])));
    }

    #[test]
    fn test_goals_serialize_all_sides() {
        let mut goals = Goals::default();
        goals.add_blue(convoy_goal());
        goals.add_offline(convoy_goal());
        let d = goals.serialize();
        assert_eq!(d.len(), 2);
        let second = d.get(&Value::from(2)).unwrap();
        assert_eq!(second.get("side"), Some(&Value::from("OFFLINE")));
        assert_eq!(second.get("score"), Some(&Value::from(100)));
    }
}
