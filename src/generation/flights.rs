// src/generation/flights.rs

use rand::Rng;
use tracing::info;

use crate::config::{GeneratorParameters, TerrainScenario};
use crate::error::GenerationError;
use crate::mission::Mission;
use crate::models::unit_type::flyable_aircraft;
use crate::models::{GroupId, UnitType};

const FLIGHT_TASK: &str = "CAS";

/// 出撃空港に航空機を配置する
///
/// - マルチプレイ: 操縦可能な全機種について2機編隊のクライアント枠を作る
/// - シングルプレイ: 指定機種のプレイヤー編隊を1つ作る
///
/// # 戻り値
/// - シングルプレイ時のプレイヤー編隊のID
pub fn place_aircraft<R: Rng + ?Sized>(
    mission: &mut Mission,
    scenario: &TerrainScenario,
    player_aircraft: Option<&UnitType>,
    params: &GeneratorParameters,
    rng: &mut R,
) -> Result<Option<GroupId>, GenerationError> {
    let airport = &scenario.airport;
    let country = &scenario.blue_country;

    match player_aircraft {
        None => {
            let mut count = 0;
            for aircraft in flyable_aircraft() {
                let name = format!("{} Client", aircraft.id);
                let mut group =
                    mission.flight_group_from_airport(country, &name, aircraft, airport, FLIGHT_TASK, params.client_group_size)?;
                group.add_runway_waypoint(airport, rng);
                group.set_client();
                mission.add_group(country, group)?;
                count += 1;
            }
            info!(groups = count, airport = %airport.name, "クライアント枠を配置しました");
            Ok(None)
        }
        Some(aircraft) => {
            let mut group = mission.flight_group_from_airport(country, "Player", aircraft, airport, FLIGHT_TASK, 1)?;
            group.add_runway_waypoint(airport, rng);
            group.set_player();
            let id = mission.add_group(country, group)?;
            info!(aircraft = aircraft.id, airport = %airport.name, "プレイヤー機を配置しました");
            Ok(Some(id))
        }
    }
}
