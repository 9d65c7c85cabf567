use serde::{Deserialize, Deserializer};

pub mod client;
pub mod profile;
pub mod project;
pub mod social;
pub mod technology;
pub mod user;
pub mod work_experience;

/// Deserializer for nullable fields in PATCH bodies that must distinguish
/// "absent" from "explicit null": absent stays `None` (keep current value),
/// `null` becomes `Some(None)` (clear), a value becomes `Some(Some(v))`.
/// Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
