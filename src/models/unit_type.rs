// src/models/unit_type.rs

use crate::error::GenerationError;
use crate::models::GroupKind;

/// ユニット種別の大分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Vehicle,
    Plane,
    Helicopter,
}

impl UnitCategory {
    /// このカテゴリのユニットを収めるグループ種別
    pub fn group_kind(self) -> GroupKind {
        match self {
            UnitCategory::Vehicle => GroupKind::Vehicle,
            UnitCategory::Plane => GroupKind::Plane,
            UnitCategory::Helicopter => GroupKind::Helicopter,
        }
    }
}

/// ユニット型（シミュレータ側の型名と属性）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitType {
    pub id: &'static str,
    pub category: UnitCategory,
    pub flyable: bool,
}

const fn vehicle(id: &'static str) -> UnitType {
    UnitType { id, category: UnitCategory::Vehicle, flyable: false }
}

const fn plane(id: &'static str, flyable: bool) -> UnitType {
    UnitType { id, category: UnitCategory::Plane, flyable }
}

const fn helicopter(id: &'static str, flyable: bool) -> UnitType {
    UnitType { id, category: UnitCategory::Helicopter, flyable }
}

// 地上車両
pub const FUEL_TRUCK_ATZ_10: UnitType = vehicle("ATZ-10");
pub const AAA_ZU_23_ON_URAL_375: UnitType = vehicle("Ural-375 ZU-23");
pub const SPAAA_ZSU_23_4_SHILKA: UnitType = vehicle("ZSU-23-4 Shilka");
pub const AAA_ZU_23_EMPLACEMENT: UnitType = vehicle("ZU-23 Emplacement");
pub const SAM_SA_18_IGLA_MANPADS: UnitType = vehicle("SA-18 Igla manpad");
pub const SAM_SA_18_IGLA_COMM: UnitType = vehicle("SA-18 Igla comm");
pub const SAM_SA_11_BUK_LN: UnitType = vehicle("SA-11 Buk LN 9A310M1");
pub const SAM_SA_11_BUK_SR: UnitType = vehicle("SA-11 Buk SR 9S18M1");
pub const SAM_SA_11_BUK_CC: UnitType = vehicle("SA-11 Buk CC 9S470M1");

/// 航空機カタログ
pub const AIRCRAFT: &[UnitType] = &[
    plane("A-10A", true),
    plane("A-10C", true),
    plane("F-15C", true),
    plane("Su-25", true),
    plane("Su-25T", true),
    plane("Su-27", true),
    plane("Su-33", true),
    plane("MiG-29A", true),
    plane("MiG-29S", true),
    plane("MiG-21Bis", true),
    plane("M-2000C", true),
    plane("AJS37", true),
    plane("L-39ZA", true),
    plane("F-86F Sabre", true),
    plane("MiG-15bis", true),
    plane("P-51D", true),
    plane("TF-51D", true),
    plane("Bf-109K-4", true),
    plane("FW-190D9", true),
    plane("B-52H", false),
    plane("Tu-22M3", false),
    plane("E-3A", false),
    helicopter("Ka-50", true),
    helicopter("Mi-8MT", true),
    helicopter("UH-1H", true),
    helicopter("SA342M", true),
    helicopter("SA342L", true),
    helicopter("AH-64D", false),
    helicopter("Mi-24V", false),
];

/// プレイヤーが操縦可能な機体（飛行機、ヘリコプターの順）
pub fn flyable_aircraft() -> impl Iterator<Item = &'static UnitType> {
    AIRCRAFT.iter().filter(|t| t.flyable)
}

/// 操縦可能な機体を型名で検索する
pub fn find_flyable(id: &str) -> Result<&'static UnitType, GenerationError> {
    flyable_aircraft()
        .find(|t| t.id == id)
        .ok_or_else(|| GenerationError::UnknownAircraft(id.to_string()))
}
