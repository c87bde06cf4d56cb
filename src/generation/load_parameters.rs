// src/generation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde_yaml::from_reader;

use crate::config::{GeneratorParameters, Terrain, TerrainScenario};
use crate::error::GenerationError;

/// 生成パラメータの読み込み
pub fn load_generator_parameters(path: &Path) -> Result<GeneratorParameters, GenerationError> {
    let file = File::open(path)?;
    let params: GeneratorParameters = from_reader(file)?;
    Ok(params)
}

/// 地形シナリオの読み込み（同梱データ）
pub fn load_terrain_scenario(terrain: Terrain) -> Result<TerrainScenario, GenerationError> {
    let data = terrain
        .bundled_data()
        .ok_or_else(|| GenerationError::UnsupportedTerrain(terrain.name().to_string()))?;
    parse_terrain_scenario(data)
}

/// 地形シナリオの読み込み（任意のYAML文字列）
pub fn parse_terrain_scenario(yaml: &str) -> Result<TerrainScenario, GenerationError> {
    let scenario: TerrainScenario = serde_yaml::from_str(yaml)?;
    Ok(scenario)
}
