// src/mission/mod.rs

pub mod goals;
pub mod triggers;
pub mod writer;

use rand::Rng;
use serde_yaml::Mapping;

use crate::config::Airport;
use crate::error::GenerationError;
use crate::math::Point;
use crate::models::{Country, Group, GroupId, GroupKind, MovingPoint, PointAction, Unit, UnitCategory, UnitType};

pub use goals::{Goal, Goals};
pub use triggers::{Action, Condition, Trigger, TriggerKind, TriggerRules, TriggerZone, TriggerZoneId, WorldState};
pub use writer::{MissionWriter, YamlMissionWriter};

/// 陣営
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Blue => "blue",
            Side::Red => "red",
        }
    }
}

/// 陣営とその所属国
#[derive(Debug, Clone)]
pub struct Coalition {
    pub side: Side,
    pub countries: Vec<Country>,
}

impl Coalition {
    pub fn serialize(&self) -> Mapping {
        let mut countries = Mapping::new();
        for (i, country) in self.countries.iter().enumerate() {
            countries.insert((i + 1).into(), country.serialize().into());
        }
        let mut d = Mapping::new();
        d.insert("name".into(), self.side.as_str().into());
        d.insert("country".into(), countries.into());
        d
    }
}

/// ミッション開始日時
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionStart {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub start_time: u32, // 0時からの秒数
}

impl Default for MissionStart {
    fn default() -> Self {
        MissionStart { year: 2011, month: 6, day: 1, start_time: 12 * 3600 }
    }
}

impl MissionStart {
    /// 日中（8時〜17時）のランダムな日時
    pub fn random_day<R: Rng + ?Sized>(rng: &mut R) -> Self {
        MissionStart {
            year: rng.gen_range(1990..=2016),
            month: rng.gen_range(1..=12),
            day: rng.gen_range(1..=28),
            start_time: rng.gen_range(8 * 3600..17 * 3600),
        }
    }
}

/// 民間交通量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CivilTraffic {
    Off,
    Low,
    Medium,
    High,
}

impl CivilTraffic {
    pub fn as_str(self) -> &'static str {
        match self {
            CivilTraffic::Off => "false",
            CivilTraffic::Low => "low",
            CivilTraffic::Medium => "medium",
            CivilTraffic::High => "true",
        }
    }
}

/// 全プレイヤーに強制されるオプション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForcedOptions {
    pub civil_traffic: Option<CivilTraffic>,
}

/// 生成中のミッション全体
#[derive(Debug, Clone)]
pub struct Mission {
    pub terrain: String,
    pub start: MissionStart,
    pub random_weather: bool,
    pub coalitions: Vec<Coalition>,
    pub trigger_zones: Vec<TriggerZone>,
    pub triggers: TriggerRules,
    pub goals: Goals,
    pub forced_options: ForcedOptions,
    pub sortie: String,
    pub description: String,
    pub description_bluetask: String,
    current_group_id: u32,
    current_unit_id: u32,
    current_zone_id: u32,
}

impl Mission {
    pub fn new(terrain: &str) -> Self {
        let blue = Coalition {
            side: Side::Blue,
            countries: vec![Country::new(2, "USA"), Country::new(16, "Georgia")],
        };
        let red = Coalition {
            side: Side::Red,
            countries: vec![
                Country::new(0, "Russia"),
                Country::new(18, "Abkhazia"),
                Country::new(19, "South Ossetia"),
            ],
        };
        Mission {
            terrain: terrain.to_string(),
            start: MissionStart::default(),
            random_weather: false,
            coalitions: vec![blue, red],
            trigger_zones: Vec::new(),
            triggers: TriggerRules::default(),
            goals: Goals::default(),
            forced_options: ForcedOptions::default(),
            sortie: String::new(),
            description: String::new(),
            description_bluetask: String::new(),
            current_group_id: 0,
            current_unit_id: 0,
            current_zone_id: 0,
        }
    }

    pub fn next_group_id(&mut self) -> GroupId {
        self.current_group_id += 1;
        GroupId(self.current_group_id)
    }

    pub fn next_unit_id(&mut self) -> u32 {
        self.current_unit_id += 1;
        self.current_unit_id
    }

    pub fn country(&self, name: &str) -> Result<&Country, GenerationError> {
        self.coalitions
            .iter()
            .flat_map(|c| c.countries.iter())
            .find(|c| c.name == name)
            .ok_or_else(|| GenerationError::CountryNotFound(name.to_string()))
    }

    pub fn country_mut(&mut self, name: &str) -> Result<&mut Country, GenerationError> {
        self.coalitions
            .iter_mut()
            .flat_map(|c| c.countries.iter_mut())
            .find(|c| c.name == name)
            .ok_or_else(|| GenerationError::CountryNotFound(name.to_string()))
    }

    /// 全陣営からIDでグループを探す
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.coalitions
            .iter()
            .flat_map(|c| c.countries.iter())
            .find_map(|c| c.group(id))
    }

    /// 同じ位置に並べた地上部隊を作成する（隊形は呼び出し側で整える）
    pub fn vehicle_group_platoon(&mut self, name: &str, unit_types: &[UnitType], position: Point, heading: f64) -> Group {
        let id = self.next_group_id();
        let mut group = Group::new(id, name, GroupKind::Vehicle);
        group.task = Some("Ground Nothing".to_string());
        for (i, unit_type) in unit_types.iter().enumerate() {
            let mut unit = Unit::new(
                self.next_unit_id(),
                format!("{} Unit #{}", name, i + 1),
                unit_type.id,
                position,
            );
            unit.heading = heading;
            group.add_unit(unit);
        }
        group
    }

    /// 空港の滑走路から離陸する編隊を作成する
    ///
    /// # 引数
    /// - `country`: 所属国（コールサイン番号の払い出し元）
    /// - `name`: グループ名
    /// - `aircraft`: 機体
    /// - `airport`: 出撃空港
    /// - `task`: 任務
    /// - `group_size`: 機数
    pub fn flight_group_from_airport(
        &mut self,
        country: &str,
        name: &str,
        aircraft: &UnitType,
        airport: &Airport,
        task: &str,
        group_size: usize,
    ) -> Result<Group, GenerationError> {
        let kind = aircraft.category.group_kind();
        let id = self.next_group_id();
        let mut group = Group::new(id, name, kind);
        group.task = Some(task.to_string());
        group.frequency = Some(match aircraft.category {
            UnitCategory::Helicopter => 127.5,
            _ => 251.0,
        });

        for i in 0..group_size {
            let callsign = self.country_mut(country)?.next_callsign_id();
            let mut unit = Unit::new(
                self.next_unit_id(),
                format!("{} Pilot #{}", name, i + 1),
                aircraft.id,
                airport.position,
            );
            unit.heading = airport.runway_heading;
            unit.callsign = Some(callsign);
            unit.alt = Some(0.0);
            group.add_unit(unit);
        }

        group.add_point(MovingPoint {
            kind: "TakeOff",
            action: PointAction::FromRunway,
            position: airport.position,
            alt: 0.0,
            alt_type: "BARO",
            speed: 0.0,
            airdrome_id: Some(airport.id),
        });
        Ok(group)
    }

    /// グループを国に登録し、そのIDを返す
    pub fn add_group(&mut self, country: &str, group: Group) -> Result<GroupId, GenerationError> {
        let id = group.id;
        self.country_mut(country)?.add_group(group);
        Ok(id)
    }

    pub fn add_trigger_zone(&mut self, position: Point, radius: f64, hidden: bool, name: &str) -> TriggerZoneId {
        self.current_zone_id += 1;
        let id = TriggerZoneId(self.current_zone_id);
        self.trigger_zones.push(TriggerZone {
            id,
            name: name.to_string(),
            position,
            radius,
            hidden,
        });
        id
    }

    pub fn trigger_zone(&self, id: TriggerZoneId) -> Option<&TriggerZone> {
        self.trigger_zones.iter().find(|z| z.id == id)
    }

    pub fn set_sortie_text(&mut self, text: &str) {
        self.sortie = text.to_string();
    }

    pub fn set_description_text(&mut self, text: &str) {
        self.description = text.to_string();
    }

    pub fn set_description_bluetask_text(&mut self, text: &str) {
        self.description_bluetask = text.to_string();
    }

    pub fn serialize(&self) -> Mapping {
        let mut coalition = Mapping::new();
        for c in &self.coalitions {
            coalition.insert(c.side.as_str().into(), c.serialize().into());
        }

        let mut zones = Mapping::new();
        for (i, zone) in self.trigger_zones.iter().enumerate() {
            zones.insert((i + 1).into(), zone.serialize().into());
        }
        let mut triggers = Mapping::new();
        triggers.insert("zones".into(), zones.into());

        let mut date = Mapping::new();
        date.insert("Year".into(), self.start.year.into());
        date.insert("Month".into(), self.start.month.into());
        date.insert("Day".into(), self.start.day.into());

        let mut weather = Mapping::new();
        weather.insert("random".into(), self.random_weather.into());

        let mut forced = Mapping::new();
        if let Some(traffic) = self.forced_options.civil_traffic {
            forced.insert("civTraffic".into(), traffic.as_str().into());
        }

        let mut d = Mapping::new();
        d.insert("theatre".into(), self.terrain.clone().into());
        d.insert("date".into(), date.into());
        d.insert("start_time".into(), self.start.start_time.into());
        d.insert("weather".into(), weather.into());
        d.insert("coalition".into(), coalition.into());
        d.insert("triggers".into(), triggers.into());
        d.insert("trigrules".into(), self.triggers.serialize().into());
        d.insert("goals".into(), self.goals.serialize().into());
        d.insert("forcedOptions".into(), forced.into());
        d.insert("sortie".into(), self.sortie.clone().into());
        d.insert("descriptionText".into(), self.description.clone().into());
        d.insert("descriptionBlueTask".into(), self.description_bluetask.clone().into());
        d
    }
}
