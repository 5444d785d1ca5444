use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ShelfError;

/// Primary scorer selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Collaborative,
    ContentBased,
    Hybrid,
    MultiModal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Collaborative,
        Algorithm::ContentBased,
        Algorithm::Hybrid,
        Algorithm::MultiModal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Collaborative => "collaborative",
            Algorithm::ContentBased => "content-based",
            Algorithm::Hybrid => "hybrid",
            Algorithm::MultiModal => "multi-modal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == name)
            .ok_or_else(|| ShelfError::InvalidAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Which scorer produced a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "Collaborative")]
    Collaborative,
    #[serde(rename = "Content-Based")]
    ContentBased,
    #[serde(rename = "Multi-Modal")]
    MultiModal,
    #[serde(rename = "Popular")]
    Popular,
    #[serde(rename = "Hybrid-merged")]
    HybridMerged,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Collaborative => "Collaborative",
            Source::ContentBased => "Content-Based",
            Source::MultiModal => "Multi-Modal",
            Source::Popular => "Popular",
            Source::HybridMerged => "Hybrid-merged",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
