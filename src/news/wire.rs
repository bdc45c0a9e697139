use serde::{Deserialize, Deserializer};

/// Top-level provider response. Both array shapes are seen in the wild.
#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    #[serde(default, deserialize_with = "items_or_none")]
    pub(crate) data: Option<Vec<DataItem>>,
    #[serde(default, deserialize_with = "items_or_none")]
    pub(crate) news: Option<Vec<AltItem>>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub(crate) message: Option<String>,
}

/// Item of the primary `data` array.
#[derive(Deserialize)]
pub(crate) struct DataItem {
    pub(crate) title: Option<String>,
    pub(crate) source_name: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) text: Option<String>,
    pub(crate) news_url: Option<String>,
}

/// Item of the fallback `news` array, which mixes two naming schemes.
#[derive(Deserialize)]
pub(crate) struct AltItem {
    pub(crate) title: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) source_name: Option<String>,
    pub(crate) published_at: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) text: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) news_url: Option<String>,
}

/// Accepts a JSON array and keeps the elements that decode as `T`.
/// Anything that is not an array reads as absent.
fn items_or_none<'de, D, T>(de: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(de)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Keeps a string value; anything else reads as absent.
fn string_or_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(de)? {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
