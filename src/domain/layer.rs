//! Key-indexed maps: defaults, override layers, merge input and output

use super::{ConfigValue, SourceTag, ValueEntry};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Baseline configuration: bare values, implicitly tagged [`SourceTag::Default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDefaults(BTreeMap<String, ConfigValue>);

impl RawDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for RawDefaults {
    type Item = (String, ConfigValue);
    type IntoIter = btree_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for RawDefaults {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One override layer (file, env or cli): key to source-tagged entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMap(BTreeMap<String, ValueEntry>);

impl LayerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every pair with `source`.
    pub fn from_pairs<K, V, I>(source: SourceTag, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<ConfigValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), ValueEntry::new(v, source))).collect())
    }

    /// Builder-style insert of a value tagged with `source`.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
        source: SourceTag,
    ) -> Self {
        self.0.insert(key.into(), ValueEntry::new(value, source));
        self
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, entry: ValueEntry) -> Option<ValueEntry> {
        self.0.insert(key.into(), entry)
    }

    pub fn get(&self, key: &str) -> Option<&ValueEntry> {
        self.0.get(key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ValueEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a LayerMap {
    type Item = (&'a String, &'a ValueEntry);
    type IntoIter = btree_map::Iter<'a, String, ValueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Input to a merge: required defaults plus up to three override layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeOptions {
    pub defaults: RawDefaults,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<LayerMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<LayerMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli: Option<LayerMap>,
}

impl MergeOptions {
    pub fn new(defaults: RawDefaults) -> Self {
        Self { defaults, file: None, env: None, cli: None }
    }

    pub fn with_file(mut self, layer: LayerMap) -> Self {
        self.file = Some(layer);
        self
    }

    pub fn with_env(mut self, layer: LayerMap) -> Self {
        self.env = Some(layer);
        self
    }

    pub fn with_cli(mut self, layer: LayerMap) -> Self {
        self.cli = Some(layer);
        self
    }

    /// Supplied override layers, lowest precedence first.
    pub fn layers(&self) -> impl Iterator<Item = (SourceTag, &LayerMap)> {
        [
            (SourceTag::File, self.file.as_ref()),
            (SourceTag::Env, self.env.as_ref()),
            (SourceTag::Cli, self.cli.as_ref()),
        ]
        .into_iter()
        .filter_map(|(source, layer)| layer.map(|layer| (source, layer)))
    }
}

/// Result of a merge: every key from every layer with its winning entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedConfig(BTreeMap<String, ValueEntry>);

impl MergedConfig {
    pub(crate) fn from_entries(entries: BTreeMap<String, ValueEntry>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&ValueEntry> {
        self.0.get(key)
    }

    pub fn value(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key).map(ValueEntry::value)
    }

    pub fn source_of(&self, key: &str) -> Option<SourceTag> {
        self.0.get(key).map(ValueEntry::source)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys whose winning value came from `source`.
    pub fn keys_from(&self, source: SourceTag) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, entry)| entry.source() == source)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ValueEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a MergedConfig {
    type Item = (&'a String, &'a ValueEntry);
    type IntoIter = btree_map::Iter<'a, String, ValueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
