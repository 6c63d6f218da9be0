//! First-run tutorial content and progress tracking.

use serde::Serialize;

/// One page of the tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorialStep {
    pub key: String,
    pub title: String,
    pub body: String,
    /// Illustration URL, if the step has one.
    pub image: Option<String>,
    pub is_last: bool,
}

impl TutorialStep {
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            body: body.into(),
            image: None,
            is_last: false,
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    #[must_use]
    pub fn last(mut self) -> Self {
        self.is_last = true;
        self
    }
}

/// Built-in tour shown on first launch.
#[must_use]
pub fn default_steps() -> Vec<TutorialStep> {
    vec![
        TutorialStep::new(
            "welcome",
            "Welcome",
            "This quick tour shows how to use the Risk Calculator. Scroll down to see all steps.",
        )
        .with_image("https://images.unsplash.com/photo-1521791136064-7986c2920216?q=80&w=1200&auto=format&fit=crop"),
        TutorialStep::new(
            "inputs",
            "Enter Your Inputs",
            "Fill in Stoploss %, Account Risk %, and Account Capital. Margin and Risk are computed instantly.",
        )
        .with_image("https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1200&auto=format&fit=crop"),
        TutorialStep::new(
            "defaults",
            "Set Defaults & Theme",
            "Use the menu to save default Risk % and Capital. Toggle dark/light themes anytime.",
        )
        .with_image("https://images.unsplash.com/photo-1498050108023-c5249f4df085?q=80&w=1200&auto=format&fit=crop"),
        TutorialStep::new(
            "done",
            "You’re All Set",
            "That’s it! You can revisit this tutorial from the menu whenever you like.",
        )
        .last(),
    ]
}

/// An ordered tutorial. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tutorial {
    steps: Vec<TutorialStep>,
}

impl Tutorial {
    /// Use `steps`, or the built-in tour when `steps` is empty.
    #[must_use]
    pub fn new(steps: Vec<TutorialStep>) -> Self {
        if steps.is_empty() {
            Self::default()
        } else {
            Self { steps }
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[TutorialStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Progress after paging to step `index` (zero-based).
    #[must_use]
    pub fn progress_at(&self, index: usize) -> ScrollProgress {
        ScrollProgress::from_scroll(index as f64, self.steps.len() as f64, 1.0)
    }
}

impl Default for Tutorial {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

/// Fraction of the tutorial scrolled through, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Progress bar disappears at or past this fraction.
    pub const COMPLETE: f64 = 0.999;

    /// Progress for a scroll offset within content taller than the viewport.
    #[must_use]
    pub fn from_scroll(offset: f64, content_height: f64, viewport_height: f64) -> Self {
        let total = (content_height - viewport_height).max(1.0);
        let fraction = (offset / total).clamp(0.0, 1.0);
        Self(if fraction.is_nan() { 0.0 } else { fraction })
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Whole-number percentage for accessibility readouts.
    #[must_use]
    pub fn percent(self) -> u8 {
        // fraction is clamped to [0, 1], so this fits in u8
        (self.0 * 100.0).round() as u8
    }

    /// Whether the progress bar is still shown.
    #[must_use]
    pub fn show_bar(self) -> bool {
        self.0 < Self::COMPLETE
    }
}
