// src/models/mod.rs

pub mod country;
pub mod group;
pub mod unit;
pub mod unit_type;

pub use country::{Country, GroupCollection};
pub use group::{Formation, Group, GroupId, GroupKind, MovingPoint, PointAction};
pub use unit::{Skill, Unit};
pub use unit_type::{UnitCategory, UnitType};
