//! Plugin registry and built-in plugins operating on assembled paragraphs.
//!
//! Plugins are downstream of the preprocessing core: they read (and in two
//! cases edit) the paragraph list the caller passes in, never the raw chunk
//! input. The registry is constructed per use: there is no process-wide
//! plugin state, so different callers can scope different plugin sets.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::paragraphs::Paragraph;
use crate::{Error, Result};

pub mod actions;
pub mod export;
pub mod highlight;
pub mod replace;
pub mod search;
pub mod speaker;
pub mod summarize;
pub mod word_frequency;

/// Static description of a plugin, used for listing and registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: PluginCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginCategory {
    Analysis,
    Editing,
    Output,
}

/// Everything a plugin invocation can see and touch.
///
/// `paragraphs` is borrowed mutably because `replace` and `highlight` edit
/// paragraphs in place; all other built-ins only read. Callers that invoke
/// editing plugins concurrently on the same paragraph list must serialize
/// those edits themselves.
pub struct PluginContext<'a> {
    pub paragraphs: &'a mut Vec<Paragraph>,
    pub options: serde_json::Value,
}

impl<'a> PluginContext<'a> {
    pub fn new(paragraphs: &'a mut Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            options: serde_json::Value::Null,
        }
    }

    pub fn with_options(paragraphs: &'a mut Vec<Paragraph>, options: serde_json::Value) -> Self {
        Self {
            paragraphs,
            options,
        }
    }

    /// Deserialize this invocation's options into the plugin's own options
    /// type; `null` means all defaults.
    pub fn parse_options<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.options.is_null() {
            return Ok(T::default());
        }
        Ok(serde_json::from_value(self.options.clone())?)
    }
}

/// What a plugin invocation produced, one variant per built-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PluginOutput {
    Search(Vec<search::SearchMatch>),
    Replace(replace::ReplaceSummary),
    Highlight(highlight::HighlightSummary),
    Actions(Vec<actions::ActionItem>),
    Summary(summarize::Summary),
    SpeakerTransitions(Vec<speaker::SpeakerTransition>),
    WordFrequency(Vec<word_frequency::WordCount>),
    Export(String),
}

/// A single transcript operation registered under a stable name.
///
/// All built-ins are synchronous pure computations over the paragraph list;
/// implementations that need I/O should do it outside `execute` and feed
/// results in through options.
pub trait Plugin {
    fn info(&self) -> PluginInfo;
    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput>;
}

struct Entry {
    plugin: Box<dyn Plugin>,
    enabled: bool,
}

/// Name-keyed plugin registry.
///
/// Two lookup failures are the registry's own errors: an unregistered name
/// and a disabled plugin. Everything else a plugin returns (e.g. an invalid
/// user-supplied pattern) propagates to the caller untouched.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, Entry>,
}

impl PluginRegistry {
    /// An empty registry. Use [`with_builtins`] for the standard set.
    ///
    /// [`with_builtins`]: PluginRegistry::with_builtins
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with every built-in plugin, all enabled.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(search::Search));
        registry.register(Box::new(replace::Replace));
        registry.register(Box::new(highlight::Highlight));
        registry.register(Box::new(actions::ExtractActions));
        registry.register(Box::new(summarize::Summarize));
        registry.register(Box::new(speaker::SpeakerTransitions));
        registry.register(Box::new(word_frequency::WordFrequency));
        registry.register(Box::new(export::Export));
        registry
    }

    /// Register (or re-register) a plugin under its own declared name.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        let name = plugin.info().name.to_string();
        self.plugins.insert(
            name,
            Entry {
                plugin,
                enabled: true,
            },
        );
    }

    /// Enable or disable a registered plugin.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<()> {
        let entry = self
            .plugins
            .get_mut(name)
            .ok_or_else(|| Error::PluginNotFound(name.to_string()))?;
        entry.enabled = enabled;
        Ok(())
    }

    /// Execute a registered, enabled plugin by name.
    pub fn execute(&self, name: &str, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let entry = self
            .plugins
            .get(name)
            .ok_or_else(|| Error::PluginNotFound(name.to_string()))?;
        if !entry.enabled {
            return Err(Error::PluginDisabled(name.to_string()));
        }

        tracing::debug!(plugin = name, "executing plugin");
        entry.plugin.execute(ctx)
    }

    /// Descriptions of all registered plugins, sorted by name.
    pub fn list(&self) -> Vec<PluginInfo> {
        let mut infos: Vec<PluginInfo> = self.plugins.values().map(|e| e.plugin.info()).collect();
        infos.sort_by_key(|i| i.name);
        infos
    }
}

/// Milliseconds since the Unix epoch, for edit-history records.
pub(crate) fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
