//! Speaker transition detection.
//!
//! The preprocessing core never populates `Paragraph::speaker`; external
//! diarization does. For core output this plugin therefore returns an empty
//! list, but the detection itself is real once speakers are attached.

use serde::Serialize;

use crate::plugins::{Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

/// A change of speaker between consecutive speaker-labelled paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerTransition {
    pub from: String,
    pub to: String,
    pub paragraph_index: usize,
    pub at: f64,
}

pub struct SpeakerTransitions;

impl Plugin for SpeakerTransitions {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "speaker-transitions",
            description: "Detect speaker changes across diarized paragraphs",
            category: PluginCategory::Analysis,
        }
    }

    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let mut transitions = Vec::new();
        let mut previous: Option<&str> = None;

        for (index, paragraph) in ctx.paragraphs.iter().enumerate() {
            let Some(speaker) = paragraph.speaker.as_deref() else {
                continue;
            };
            if let Some(prev) = previous {
                if prev != speaker {
                    transitions.push(SpeakerTransition {
                        from: prev.to_string(),
                        to: speaker.to_string(),
                        paragraph_index: index,
                        at: paragraph.start,
                    });
                }
            }
            previous = Some(speaker);
        }

        Ok(PluginOutput::SpeakerTransitions(transitions))
    }
}
