//! Per-key fallbacks for settings deserialization.
//!
//! A value of the wrong shape (`num_fields = "many"`, `show_help = 3`) is
//! replaced by that key's default and logged; the rest of the blob still
//! loads.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::lister::{ListerConfig, DEFAULT_NUM_FIELDS, DEFAULT_PAGE_SIZE};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Exact(T),
    Other(IgnoredAny),
}

fn or_else<'de, D, T>(deserializer: D, fallback: impl FnOnce() -> T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Loose::<T>::deserialize(deserializer)? {
        Loose::Exact(value) => Ok(value),
        Loose::Other(_) => {
            tracing::warn!(
                expected = std::any::type_name::<T>(),
                "Settings value has the wrong type, using its default"
            );
            Ok(fallback())
        }
    }
}

/// Mismatch falls back to `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    or_else(deserializer, T::default)
}

/// Flags that are on unless configured otherwise.
pub(crate) fn or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    or_else(deserializer, || true)
}

pub(crate) fn num_fields<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    or_else(deserializer, || DEFAULT_NUM_FIELDS)
}

pub(crate) fn page_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    or_else(deserializer, || DEFAULT_PAGE_SIZE)
}

/// Per-template configs; an entry that is not a table is dropped on its own.
pub(crate) fn configs<'de, D>(deserializer: D) -> Result<BTreeMap<String, ListerConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: BTreeMap<String, Loose<ListerConfig>> = or_default(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|(name, entry)| match entry {
            Loose::Exact(config) => Some((name, config)),
            Loose::Other(_) => {
                tracing::warn!(template = %name, "Lister config is not a table, ignoring it");
                None
            }
        })
        .collect())
}
