use serde::Deserialize;

/// Body of a volume search, `GET /books/v1/volumes?q=isbn:...`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumesResponse {
    pub kind: String,
    pub total_items: u32,
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
    pub id: String,
    pub self_link: String,
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    pub title: String,
    pub authors: Vec<String>,
    pub industry_identifiers: Vec<IndustryIdentifier>,
    pub language: String,
    pub image_links: Option<ImageLinks>,
}

impl VolumeInfo {
    /// Identifier tagged with `kind`, e.g. `ISBN_13`
    pub fn identifier(&self, kind: &str) -> Option<&str> {
        self.industry_identifiers
            .iter()
            .find(|id| id.kind == kind)
            .map(|id| id.identifier.as_str())
    }

    /// Largest cover image link available
    pub fn cover(&self) -> Option<&str> {
        let links = self.image_links.as_ref()?;
        [&links.thumbnail, &links.small_thumbnail]
            .into_iter()
            .find(|link| !link.is_empty())
            .map(String::as_str)
    }
}

/// A type-tagged identifier such as `{"type": "ISBN_10", "identifier": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLinks {
    pub small_thumbnail: String,
    pub thumbnail: String,
}
