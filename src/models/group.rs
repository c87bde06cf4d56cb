// src/models/group.rs

use std::fmt;

use rand::Rng;
use serde_yaml::{Mapping, Value};

use crate::config::Airport;
use crate::math::Point;
use crate::models::{Skill, Unit};

/// 散開隊形での最小半径 (m)
const MIN_SCATTER_RADIUS: f64 = 15.0;
/// ユニット同士の最小間隔 (m)
const UNIT_CLEARANCE: f64 = 14.0;
/// 1ユニットあたりの配置試行回数
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// グループ識別子（トリガー・目標から参照される）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GroupId> for Value {
    fn from(id: GroupId) -> Self {
        Value::from(id.0)
    }
}

/// グループの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Vehicle,
    Ship,
    Plane,
    Helicopter,
    Static,
}

impl GroupKind {
    /// シリアライズ順
    pub const ALL: [GroupKind; 5] = [
        GroupKind::Vehicle,
        GroupKind::Ship,
        GroupKind::Plane,
        GroupKind::Helicopter,
        GroupKind::Static,
    ];

    pub fn key(self) -> &'static str {
        match self {
            GroupKind::Vehicle => "vehicle",
            GroupKind::Ship => "ship",
            GroupKind::Plane => "plane",
            GroupKind::Helicopter => "helicopter",
            GroupKind::Static => "static",
        }
    }

    pub fn index(self) -> usize {
        match self {
            GroupKind::Vehicle => 0,
            GroupKind::Ship => 1,
            GroupKind::Plane => 2,
            GroupKind::Helicopter => 3,
            GroupKind::Static => 4,
        }
    }

    pub fn is_flying(self) -> bool {
        matches!(self, GroupKind::Plane | GroupKind::Helicopter)
    }
}

/// 経路点での行動
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointAction {
    TurningPoint,
    FromRunway,
    OnRoad,
    OffRoad,
}

impl PointAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PointAction::TurningPoint => "Turning Point",
            PointAction::FromRunway => "From Runway",
            PointAction::OnRoad => "On Road",
            PointAction::OffRoad => "Off Road",
        }
    }
}

/// 経路点
#[derive(Debug, Clone, PartialEq)]
pub struct MovingPoint {
    pub kind: &'static str,
    pub action: PointAction,
    pub position: Point,
    pub alt: f64,
    pub alt_type: &'static str,
    pub speed: f64, // m/s
    pub airdrome_id: Option<u32>,
}

impl MovingPoint {
    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        d.insert("type".into(), self.kind.into());
        d.insert("action".into(), self.action.as_str().into());
        d.insert("x".into(), self.position.x.into());
        d.insert("y".into(), self.position.y.into());
        d.insert("alt".into(), self.alt.into());
        d.insert("alt_type".into(), self.alt_type.into());
        d.insert("speed".into(), self.speed.into());
        d.insert("ETA_locked".into(), false.into());
        if let Some(airdrome_id) = self.airdrome_id {
            d.insert("airdromeId".into(), airdrome_id.into());
        }
        d
    }
}

/// 隊形
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formation {
    Scattered { heading: f64, radius: f64 },
}

/// ユニットの集まり
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub kind: GroupKind,
    pub hidden: bool,
    pub task: Option<String>,
    pub frequency: Option<f64>,
    pub formation: Option<Formation>,
    pub units: Vec<Unit>,
    pub points: Vec<MovingPoint>,
}

impl Group {
    pub fn new(id: GroupId, name: &str, kind: GroupKind) -> Self {
        Group {
            id,
            name: name.to_string(),
            kind,
            hidden: false,
            task: None,
            frequency: None,
            formation: None,
            units: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn add_unit(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    pub fn add_point(&mut self, point: MovingPoint) {
        self.points.push(point);
    }

    /// 先頭ユニットの位置
    pub fn position(&self) -> Option<Point> {
        self.units.first().map(|u| u.position)
    }

    pub fn set_skill(&mut self, skill: Skill) {
        for unit in &mut self.units {
            unit.skill = skill;
        }
    }

    /// 先頭ユニットを中心にユニットをランダムに散開させる
    ///
    /// # 引数
    /// - `heading`: 全ユニットの向き（度）
    /// - `max_radius`: 散開半径（15m 未満は 15m として扱う）
    /// - `rng`: 乱数源
    pub fn formation_scattered<R: Rng + ?Sized>(&mut self, heading: f64, max_radius: f64, rng: &mut R) {
        let radius = max_radius.max(MIN_SCATTER_RADIUS);
        let Some(start) = self.position() else {
            return;
        };
        let half = UNIT_CLEARANCE / 2.0;

        for i in 1..self.units.len() {
            let mut candidate = start;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                candidate = start.point_from_heading(
                    rng.gen_range(0.0..360.0),
                    rng.gen_range(UNIT_CLEARANCE..radius),
                );
                let collision = self.units[..i].iter().any(|u| {
                    (u.position.x - candidate.x).abs() <= half && (u.position.y - candidate.y).abs() <= half
                });
                if !collision {
                    break;
                }
            }
            self.units[i].position = candidate;
        }
        for unit in &mut self.units {
            unit.heading = heading;
        }
        self.formation = Some(Formation::Scattered { heading, radius });
    }

    /// 地上部隊の経路点を追加する
    ///
    /// # 引数
    /// - `position`: 経路点の位置
    /// - `action`: 移動方法（道路上など）
    /// - `speed`: 速度 (km/h)
    pub fn add_waypoint(&mut self, position: Point, action: PointAction, speed: f64) -> &MovingPoint {
        self.add_point(MovingPoint {
            kind: "Turning Point",
            action,
            position,
            alt: 0.0,
            alt_type: "BARO",
            speed: speed / 3.6,
            airdrome_id: None,
        });
        &self.points[self.points.len() - 1]
    }

    /// 滑走路方位に沿った離陸後の経路点を追加する
    pub fn add_runway_waypoint<R: Rng + ?Sized>(&mut self, airport: &Airport, rng: &mut R) -> &MovingPoint {
        // 6000〜8000m を 100m 刻みで選ぶ
        let distance = f64::from(rng.gen_range(60u32..80) * 100);
        self.add_point(MovingPoint {
            kind: "Turning Point",
            action: PointAction::TurningPoint,
            position: airport.position.point_from_heading(airport.runway_heading, distance),
            alt: 300.0,
            alt_type: "RADIO",
            speed: 200.0 / 3.6,
            airdrome_id: None,
        });
        &self.points[self.points.len() - 1]
    }

    /// 全ユニットをクライアント（マルチプレイ参加枠）にする
    pub fn set_client(&mut self) {
        self.set_skill(Skill::Client);
    }

    /// 先頭ユニットをプレイヤー機にする
    pub fn set_player(&mut self) {
        if let Some(lead) = self.units.first_mut() {
            lead.skill = Skill::Player;
        }
    }

    pub fn has_human(&self) -> bool {
        self.units.iter().any(Unit::is_human)
    }

    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        d.insert("name".into(), self.name.clone().into());
        d.insert("groupId".into(), self.id.into());
        d.insert("hidden".into(), self.hidden.into());
        if let Some(task) = &self.task {
            d.insert("task".into(), task.clone().into());
        }
        if let Some(frequency) = self.frequency {
            d.insert("frequency".into(), frequency.into());
        }
        if let Some(pos) = self.position() {
            d.insert("x".into(), pos.x.into());
            d.insert("y".into(), pos.y.into());
            let mut units = Mapping::new();
            for (i, unit) in self.units.iter().enumerate() {
                units.insert((i + 1).into(), unit.serialize().into());
            }
            d.insert("units".into(), units.into());
        }
        if !self.points.is_empty() {
            let mut points = Mapping::new();
            for (i, point) in self.points.iter().enumerate() {
                points.insert((i + 1).into(), point.serialize().into());
            }
            let mut route = Mapping::new();
            route.insert("points".into(), points.into());
            d.insert("route".into(), route.into());
        }
        d
    }
}
