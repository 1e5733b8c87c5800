//! Media library assets

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use clubdeck_core::csv::Column;
use clubdeck_core::filter::{contains_ignore_case, Facet, Searchable};
use clubdeck_core::store::Record;

use crate::model::member::cycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Image,
    Video,
    Document,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
            AssetKind::Document => "document",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,
    /// Human-readable size as the upload pipeline reported it ("18.2MB").
    pub size: String,
    pub version: u32,
    pub tags: Vec<String>,
    /// Surfaces this asset is referenced from.
    pub usage: Vec<String>,
    pub cdn_url: String,
    pub created_at: NaiveDateTime,
}

impl Record for MediaAsset {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for MediaAsset {
    fn matches_query(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || self.tags.iter().any(|t| contains_ignore_case(t, needle))
            || contains_ignore_case(&self.id, needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetKindFilter {
    #[default]
    All,
    Image,
    Video,
    Document,
}

impl AssetKindFilter {
    pub const VALUES: [Self; 4] = [Self::All, Self::Image, Self::Video, Self::Document];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Document => "Document",
        }
    }

    pub fn cycle(self) -> Self {
        cycle(&Self::VALUES, self)
    }
}

impl Facet<MediaAsset> for AssetKindFilter {
    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn matches(&self, asset: &MediaAsset) -> bool {
        match self {
            Self::All => true,
            Self::Image => asset.kind == AssetKind::Image,
            Self::Video => asset.kind == AssetKind::Video,
            Self::Document => asset.kind == AssetKind::Document,
        }
    }
}

pub fn export_columns() -> Vec<Column<MediaAsset>> {
    vec![
        Column {
            header: "ID",
            value: |a| a.id.clone(),
        },
        Column {
            header: "Name",
            value: |a| a.name.clone(),
        },
        Column {
            header: "Type",
            value: |a| a.kind.label().to_string(),
        },
        Column {
            header: "Size",
            value: |a| a.size.clone(),
        },
        Column {
            header: "Tags",
            value: |a| a.tags.join("|"),
        },
        Column {
            header: "Version",
            value: |a| a.version.to_string(),
        },
        Column {
            header: "UsedIn",
            value: |a| a.usage.join("; "),
        },
        Column {
            header: "CreatedAt",
            value: |a| a.created_at.format("%Y-%m-%d %H:%M").to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;
    use clubdeck_core::filter;

    #[test]
    fn kind_facet_narrows_the_library() {
        let assets = seed::assets();
        let videos = filter::apply(&assets, "", &[&AssetKindFilter::Video]);
        for a in &videos {
            assert_eq!(a.kind, AssetKind::Video);
        }
    }

    #[test]
    fn search_matches_tags() {
        let assets = seed::assets();
        assert!(!filter::apply(&assets, "onboarding", &[]).is_empty());
    }
}
