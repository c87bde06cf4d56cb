// src/mission/triggers.rs

use serde_yaml::{Mapping, Value};

use crate::math::Point;
use crate::mission::Side;
use crate::models::GroupId;

/// トリガーゾーン識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerZoneId(pub u32);

impl From<TriggerZoneId> for Value {
    fn from(id: TriggerZoneId) -> Self {
        Value::from(id.0)
    }
}

/// 円形のトリガーゾーン
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerZone {
    pub id: TriggerZoneId,
    pub name: String,
    pub position: Point,
    pub radius: f64,
    pub hidden: bool,
}

impl TriggerZone {
    pub fn contains(&self, point: &Point) -> bool {
        self.position.distance_to(point) <= self.radius
    }

    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        d.insert("zoneId".into(), self.id.into());
        d.insert("name".into(), self.name.clone().into());
        d.insert("x".into(), self.position.x.into());
        d.insert("y".into(), self.position.y.into());
        d.insert("radius".into(), self.radius.into());
        d.insert("hidden".into(), self.hidden.into());
        d
    }
}

/// 条件の評価に必要なミッション実行中の状態
pub trait WorldState {
    fn is_group_dead(&self, group: GroupId) -> bool;

    fn is_group_alive(&self, group: GroupId) -> bool {
        !self.is_group_dead(group)
    }

    /// グループの一部がゾーン内にいるか
    fn is_part_of_group_in_zone(&self, group: GroupId, zone: TriggerZoneId) -> bool;
}

/// トリガー・目標の条件
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    PartOfGroupInZone { group: GroupId, zone: TriggerZoneId },
    GroupDead { group: GroupId },
    GroupAlive { group: GroupId },
}

impl Condition {
    pub fn is_satisfied<W: WorldState + ?Sized>(&self, world: &W) -> bool {
        match *self {
            Condition::PartOfGroupInZone { group, zone } => world.is_part_of_group_in_zone(group, zone),
            Condition::GroupDead { group } => world.is_group_dead(group),
            Condition::GroupAlive { group } => world.is_group_alive(group),
        }
    }

    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        match *self {
            Condition::PartOfGroupInZone { group, zone } => {
                d.insert("predicate".into(), "c_part_of_group_in_zone".into());
                d.insert("group".into(), group.into());
                d.insert("zone".into(), zone.into());
            }
            Condition::GroupDead { group } => {
                d.insert("predicate".into(), "c_group_dead".into());
                d.insert("group".into(), group.into());
            }
            Condition::GroupAlive { group } => {
                d.insert("predicate".into(), "c_group_alive".into());
                d.insert("group".into(), group.into());
            }
        }
        d
    }
}

/// トリガーの動作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    MessageToCoalition { side: Side, text: String, seconds: u32 },
}

impl Action {
    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        match self {
            Action::MessageToCoalition { side, text, seconds } => {
                d.insert("predicate".into(), "a_out_text_delay_s".into());
                d.insert("coalitionlist".into(), side.as_str().into());
                d.insert("text".into(), text.clone().into());
                d.insert("seconds".into(), (*seconds).into());
            }
        }
        d
    }
}

/// 発火方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Once,
    Continuous,
}

impl TriggerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerKind::Once => "triggerOnce",
            TriggerKind::Continuous => "triggerContinious",
        }
    }
}

/// 条件と動作の組
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub comment: String,
    pub kind: TriggerKind,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
    fired: bool,
}

impl Trigger {
    /// 一度だけ発火するトリガー
    pub fn once(comment: &str) -> Self {
        Self::new(comment, TriggerKind::Once)
    }

    pub fn continuous(comment: &str) -> Self {
        Self::new(comment, TriggerKind::Continuous)
    }

    fn new(comment: &str, kind: TriggerKind) -> Self {
        Trigger {
            comment: comment.to_string(),
            kind,
            conditions: Vec::new(),
            actions: Vec::new(),
            fired: false,
        }
    }

    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn is_active(&self) -> bool {
        !(self.kind == TriggerKind::Once && self.fired)
    }

    /// 1ティック分の評価
    ///
    /// # 戻り値
    /// - 発火した場合は実行すべき動作、それ以外は `None`
    pub fn evaluate<W: WorldState + ?Sized>(&mut self, world: &W) -> Option<&[Action]> {
        if !self.is_active() {
            return None;
        }
        if self.conditions.is_empty() || !self.conditions.iter().all(|c| c.is_satisfied(world)) {
            return None;
        }
        self.fired = true;
        Some(&self.actions)
    }

    pub fn serialize(&self) -> Mapping {
        let mut rules = Mapping::new();
        for (i, condition) in self.conditions.iter().enumerate() {
            rules.insert((i + 1).into(), condition.serialize().into());
        }
        let mut actions = Mapping::new();
        for (i, action) in self.actions.iter().enumerate() {
            actions.insert((i + 1).into(), action.serialize().into());
        }
        let mut d = Mapping::new();
        d.insert("predicate".into(), self.kind.as_str().into());
        d.insert("comment".into(), self.comment.clone().into());
        d.insert("rules".into(), rules.into());
        d.insert("actions".into(), actions.into());
        d
    }
}

/// ミッションのトリガー一覧（登録順）
#[derive(Debug, Clone, Default)]
pub struct TriggerRules {
    triggers: Vec<Trigger>,
}

impl TriggerRules {
    pub fn push(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// 全トリガーを1ティック評価し、発火した動作を登録順に返す
    pub fn tick<W: WorldState + ?Sized>(&mut self, world: &W) -> Vec<Action> {
        let mut fired = Vec::new();
        for trigger in &mut self.triggers {
            if let Some(actions) = trigger.evaluate(world) {
                fired.extend_from_slice(actions);
            }
        }
        fired
    }

    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        for (i, trigger) in self.triggers.iter().enumerate() {
            d.insert((i + 1).into(), trigger.serialize().into());
        }
        d
    }
}
