// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use convoygen::config::{Difficulty, GeneratorParameters, Terrain};
use convoygen::generation::load_parameters::{load_generator_parameters, load_terrain_scenario};
use convoygen::generation::stats::{collect_stats, create_stats_table};
use convoygen::generation::{generate_mission, GenerationOptions};
use convoygen::graph::CityGraph;
use convoygen::mission::{MissionWriter, YamlMissionWriter};
use convoygen::models::unit_type::find_flyable;

/// 石油輸送船団の撃破ミッションを生成する
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// プレイヤーの機体
    #[arg(short = 'a', long = "aircrafttype", default_value = "A-10C", value_parser = parse_aircraft)]
    aircraft_type: String,

    /// 敵部隊をブリーフィング時点で表示する
    #[arg(short, long)]
    unhide: bool,

    #[arg(short, long, value_enum, default_value_t = Terrain::Caucasus)]
    terrain: Terrain,

    #[arg(short, long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// 操縦可能な全機種のクライアント枠を作る
    #[arg(short, long)]
    multiplayer: bool,

    /// 集計表を表示しない
    #[arg(short = 's', long, visible_alias = "stats")]
    no_stats: bool,

    /// 出力先（省略時は Saved Games 配下）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 乱数シード
    #[arg(long)]
    seed: Option<u64>,

    /// 生成パラメータのYAMLファイル
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_aircraft(value: &str) -> Result<String, String> {
    find_flyable(value).map(|t| t.id.to_string()).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 設定とシナリオの読み込み
    let params = match &args.config {
        Some(path) => load_generator_parameters(path)?,
        None => GeneratorParameters::default(),
    };
    let scenario = load_terrain_scenario(args.terrain)?;
    let graph = CityGraph::from_data(&scenario.graph)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let options = GenerationOptions {
        difficulty: args.difficulty.value(),
        player_aircraft: args.aircraft_type.clone(),
        multiplayer: args.multiplayer,
        unhide: args.unhide,
    };
    let generated = generate_mission(&options, &scenario, &graph, &params, &mut rng)?;

    if !args.no_stats {
        print!("{}", create_stats_table(&collect_stats(&generated.mission)));
    }

    // 出力先の決定と書き込み
    let output = match args.output {
        Some(path) => path,
        None => {
            let home = dirs::home_dir().ok_or("ホームディレクトリが見つかりません")?;
            args.terrain.default_output_path(&home)
        }
    };
    YamlMissionWriter.write(&generated.mission, &output)?;
    info!(path = %output.display(), difficulty = %args.difficulty, "ミッションを保存しました");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 集計表の抑止は -s, --no-stats, --stats のいずれでも指定できる
    #[test]
    fn test_stats_switch_spellings() {
        for flag in ["-s", "--no-stats", "--stats"] {
            let args = Args::try_parse_from(["convoygen", flag]).unwrap();
            assert!(args.no_stats, "{}", flag);
        }
        assert!(!Args::try_parse_from(["convoygen"]).unwrap().no_stats);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["convoygen"]).unwrap();
        assert_eq!(args.aircraft_type, "A-10C");
        assert_eq!(args.terrain, Terrain::Caucasus);
        assert_eq!(args.difficulty, Difficulty::Normal);
        assert!(!args.multiplayer && !args.unhide);
    }

    #[test]
    fn test_rejects_ai_only_aircraft() {
        assert!(Args::try_parse_from(["convoygen", "-a", "B-52H"]).is_err());
        assert!(Args::try_parse_from(["convoygen", "-d", "ohno"]).is_ok());
    }
}
