// src/models/unit.rs

use serde_yaml::Mapping;

use crate::math::Point;

/// ユニットの技量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    Average,
    Good,
    High,
    Excellent,
    Client,
    Player,
}

impl Skill {
    /// 0〜1 の難易度値から技量を決める
    pub fn from_percentage(percentage: f64) -> Skill {
        if percentage < 0.2 {
            Skill::Average
        } else if percentage < 0.5 {
            Skill::Good
        } else if percentage < 0.8 {
            Skill::High
        } else {
            Skill::Excellent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Skill::Average => "Average",
            Skill::Good => "Good",
            Skill::High => "High",
            Skill::Excellent => "Excellent",
            Skill::Client => "Client",
            Skill::Player => "Player",
        }
    }
}

/// 個々のユニット
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: u32,
    pub name: String,
    pub type_id: String,
    pub position: Point,
    pub heading: f64,          // 度
    pub skill: Skill,
    pub callsign: Option<u32>, // 航空機のみ
    pub alt: Option<f64>,      // 航空機のみ (m)
}

impl Unit {
    pub fn new(id: u32, name: String, type_id: &str, position: Point) -> Self {
        Unit {
            id,
            name,
            type_id: type_id.to_string(),
            position,
            heading: 0.0,
            skill: Skill::Average,
            callsign: None,
            alt: None,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self.skill, Skill::Client | Skill::Player)
    }

    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        d.insert("unitId".into(), self.id.into());
        d.insert("name".into(), self.name.clone().into());
        d.insert("type".into(), self.type_id.clone().into());
        d.insert("x".into(), self.position.x.into());
        d.insert("y".into(), self.position.y.into());
        d.insert("heading".into(), self.heading.to_radians().into());
        d.insert("skill".into(), self.skill.as_str().into());
        if let Some(callsign) = self.callsign {
            d.insert("callsign".into(), callsign.into());
        }
        if let Some(alt) = self.alt {
            d.insert("alt".into(), alt.into());
        }
        d
    }
}
