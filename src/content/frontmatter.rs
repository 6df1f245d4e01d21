//! Front-matter parsing for post bodies and standalone pages

use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Accept both `tags: rust` and `tags: [rust, web]`
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

/// Front-matter of a markdown file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Page heading; posts take theirs from the data file
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split `---` delimited YAML from the body
    ///
    /// Content without a closing delimiter, or whose first block is not a
    /// YAML mapping, is returned whole with empty front-matter.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();
        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((Self::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end) = rest.find("\n---") else {
            return Ok((Self::default(), content));
        };
        let yaml = &rest[..end];
        let body = rest[end + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((Self::default(), body));
        }

        // A leading `---` may just be a markdown rule
        match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
            Ok(serde_yaml::Value::Mapping(_)) => {}
            _ => return Ok((Self::default(), content)),
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml)?;
        Ok((fm, body))
    }
}
