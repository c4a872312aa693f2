// src/types.rs
use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Origins the backend aggregates. The backend stores `source` as a closed
/// enum and rejects anything else with 400, so unknown values here are a
/// contract violation rather than new data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Zhihu,
    Weibo,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Zhihu => "zhihu",
            Source::Weibo => "weibo",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zhihu" => Ok(Source::Zhihu),
            "weibo" => Ok(Source::Weibo),
            other => bail!("unknown source: {other}"),
        }
    }
}

/// One trending entry as the backend returns it. Timestamps stay the
/// backend's ISO-8601 strings; this layer never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub source: Source,
    /// Position within the origin's trending list at fetch time.
    pub rank: i32,
    /// Origin-supplied popularity label; not every origin sends one.
    #[serde(default)]
    pub hot_value: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Optional filters for a list fetch. `None` means no filter; absent fields
/// are left out of the query string entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TopicQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TopicQuery {
    pub fn for_source(source: Source) -> Self {
        Self {
            source: Some(source),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
