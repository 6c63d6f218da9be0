//! Terminal presentation settings.

use serde::Deserialize;

use crate::domain::{Tutorial, TutorialStep};

/// Terminal presentation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Print the banner when an interactive session starts.
    #[serde(default = "default_true")]
    pub banner: bool,
    /// Show QA-only menu rows such as tutorial reset.
    #[serde(default)]
    pub show_qa_items: bool,
    /// Replacement tutorial pages. Empty keeps the built-in tour.
    #[serde(default)]
    pub tutorial: Vec<TutorialStepConfig>,
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner: true,
            show_qa_items: false,
            tutorial: Vec::new(),
        }
    }
}

/// One configured tutorial page.
#[derive(Debug, Clone, Deserialize)]
pub struct TutorialStepConfig {
    pub key: Option<String>,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub image: Option<String>,
}

impl UiConfig {
    /// Tutorial built from the configured pages; the final page is marked last.
    #[must_use]
    pub fn tutorial(&self) -> Tutorial {
        let count = self.tutorial.len();
        let steps = self
            .tutorial
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                let key = step.key.clone().unwrap_or_else(|| format!("step-{idx}"));
                let mut built = TutorialStep::new(key, &step.title, &step.body);
                built.image.clone_from(&step.image);
                built.is_last = idx + 1 == count;
                built
            })
            .collect();
        Tutorial::new(steps)
    }
}
