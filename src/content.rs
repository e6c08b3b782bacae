use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ContentBlock {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tooltip: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
    Blocks(Vec<ContentBlock>),
    Document { articles: Vec<ContentBlock> },
}

/// Which point receives the n-th content block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ContentAssignment {
    #[default]
    Leading,
    EveryOther,
}

impl ContentAssignment {
    pub fn point_for(self, block: usize) -> usize {
        match self {
            Self::Leading => block,
            Self::EveryOther => block * 2,
        }
    }
}

pub fn parse_content(raw: &str) -> Result<Vec<ContentBlock>> {
    let parsed: RawContent = serde_json::from_str(raw)
        .map_err(|error| anyhow!("expected an array of content blocks or an object with `articles`: {error}"))?;

    let blocks = match parsed {
        RawContent::Blocks(blocks) => blocks,
        RawContent::Document { articles } => articles,
    };

    Ok(blocks
        .into_iter()
        .map(|mut block| {
            block.tooltip = block.tooltip.filter(|text| !text.trim().is_empty());
            block
        })
        .collect())
}

pub fn load_content(path: &Path) -> Result<Vec<ContentBlock>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read content file {}", path.display()))?;
    parse_content(&raw).with_context(|| format!("failed to parse content file {}", path.display()))
}

pub fn demo_content() -> Vec<ContentBlock> {
    [
        ("Getting started", "Hover a labelled dot to read what it points to.", "Start here"),
        ("Neighbors", "Every dot links to the three dots nearest to where it was placed.", "How lines work"),
        ("Drift", "Dots wander towards a random target and back, forever.", "Why it moves"),
        ("Pause", "Hovering freezes a dot until the pointer leaves its popup.", "Hold still"),
    ]
    .into_iter()
    .map(|(title, body, tooltip)| ContentBlock {
        title: title.to_owned(),
        body: body.to_owned(),
        tooltip: Some(tooltip.to_owned()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_array() {
        let blocks = parse_content(
            r#"[{"title": "A", "body": "alpha", "tooltip": "tip a"}, {"title": "B"}]"#,
        )
        .unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].tooltip.as_deref(), Some("tip a"));
        assert_eq!(blocks[1].body, "");
        assert!(blocks[1].tooltip.is_none());
    }

    #[test]
    fn parses_articles_document() {
        let blocks = parse_content(r#"{"articles": [{"title": "A", "tooltip": "  "}]}"#).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].tooltip.is_none());
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_content(r#"{"posts": []}"#).is_err());
        assert!(parse_content("not json").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = load_content(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{error:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn assignment_maps_blocks_to_points() {
        assert_eq!(ContentAssignment::Leading.point_for(3), 3);
        assert_eq!(ContentAssignment::EveryOther.point_for(3), 6);
    }

    #[test]
    fn demo_content_has_tooltips() {
        assert!(demo_content().iter().all(|block| block.tooltip.is_some()));
    }
}
