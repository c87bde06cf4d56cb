// src/mission/writer.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::error::GenerationError;
use crate::mission::Mission;

/// 完成したミッションの書き出し先
pub trait MissionWriter {
    fn write(&self, mission: &Mission, path: &Path) -> Result<(), GenerationError>;
}

/// ミッションの階層構造をYAML文書として保存する
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlMissionWriter;

impl MissionWriter for YamlMissionWriter {
    fn write(&self, mission: &Mission, path: &Path) -> Result<(), GenerationError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let document = Value::Mapping(mission.serialize());
        let mut writer = BufWriter::new(File::create(path)?);
        serde_yaml::to_writer(&mut writer, &document)?;
        writer.flush()?;
        debug!(path = %path.display(), "ミッションファイルを書き込みました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 存在しない親ディレクトリも作成して書き込む
    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Saved Games").join("DCS").join("Missions").join("oil_transport.miz");
        let mut mission = Mission::new("caucasus");
        mission.set_sortie_text("Search and destroy the oil convoy");

        YamlMissionWriter.write(&mission, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.get("theatre"), Some(&Value::from("caucasus")));
        assert_eq!(parsed.get("sortie"), Some(&Value::from("Search and destroy the oil convoy")));
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mission = Mission::new("caucasus");
        assert!(matches!(
            YamlMissionWriter.write(&mission, dir.path()),
            Err(GenerationError::Io(_))
        ));
    }
}
