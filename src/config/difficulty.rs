// src/config/difficulty.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::GenerationError;

/// ミッション難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    #[value(name = "ohno")]
    OhNo,
}

impl Difficulty {
    /// 難易度を 0〜1 の連続値に変換する
    pub fn value(self) -> f64 {
        match self {
            Difficulty::Easy => 0.25,
            Difficulty::Normal => 0.5,
            Difficulty::Hard => 0.7,
            Difficulty::OhNo => 0.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::OhNo => "ohno",
        }
    }
}

impl FromStr for Difficulty {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "ohno" => Ok(Difficulty::OhNo),
            other => Err(GenerationError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
