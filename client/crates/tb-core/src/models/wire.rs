//! Lenient field deserializers for backend payloads.
//!
//! The backend sometimes populates references (a user object instead of a
//! user id) and is loose about nulls. These helpers normalize both shapes.

use crate::Priority;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRef {
    Id(String),
    Object {
        #[serde(rename = "_id", alias = "id")]
        id: String,
    },
}

impl IdRef {
    fn into_id(self) -> String {
        match self {
            Self::Id(id) | Self::Object { id } => id,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRefs {
    Many(Vec<IdRef>),
    One(IdRef),
}

/// A list of ids, populated objects, a single reference, or null.
pub fn id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = match Option::<IdRefs>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(IdRefs::Many(refs)) => refs.into_iter().map(IdRef::into_id).collect(),
        Some(IdRefs::One(single)) => vec![single.into_id()],
    };
    Ok(ids)
}

/// An id or a populated object carrying `_id`.
pub fn id_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IdRef>::deserialize(deserializer)?.map(IdRef::into_id))
}

/// Unknown or missing priorities read as the default.
pub fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

/// Null reads as the empty string.
pub fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
