//! Editing session state.
//!
//! An [`EditingSession`] owns the current outline, a selection cursor and the
//! chosen theme key. Whenever the outline is non-empty the cursor points at an
//! existing slide; when it is empty the cursor is 0.

use crate::common::{Error, Result};
use crate::outline::SlideRecord;
use crate::theme::{self, Theme};
use tracing::debug;

/// Title of a slide created by [`EditingSession::add_slide`].
pub const NEW_SLIDE_TITLE: &str = "New Slide";
/// Bullets of a slide created by [`EditingSession::add_slide`].
pub const NEW_SLIDE_BULLETS: [&str; 3] = ["Point 1", "Point 2", "Point 3"];
/// Display title for slides whose title is empty.
pub const UNTITLED: &str = "Untitled";

/// Title and bullet text of the selected slide, ready for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorView {
    pub title: String,
    /// Bullets joined with `\n`
    pub bullets: String,
}

/// One row of the slide list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSummary {
    /// 1-based slide number
    pub number: usize,
    pub title: String,
    pub bullet_count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct EditingSession {
    slides: Vec<SlideRecord>,
    current_index: usize,
    theme_key: String,
}

impl Default for EditingSession {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            current_index: 0,
            theme_key: theme::DEFAULT_THEME.to_string(),
        }
    }
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing outline.
    pub fn with_outline(slides: Vec<SlideRecord>) -> Self {
        let mut session = Self::new();
        session.set_outline(slides);
        session
    }

    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The selected slide, if any.
    pub fn current(&self) -> Option<&SlideRecord> {
        self.slides.get(self.current_index)
    }

    /// Replace the whole outline and select the first slide.
    pub fn set_outline(&mut self, slides: Vec<SlideRecord>) {
        debug!(slides = slides.len(), "outline replaced");
        self.slides = slides;
        self.current_index = 0;
    }

    /// Select a slide by 0-based index.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.slides.len() {
            return Err(Error::SlideIndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Replace the selected slide with the edited title and bullet text.
    ///
    /// Returns `false` without touching anything when the outline is empty.
    pub fn save_current(&mut self, title: &str, raw_bullets: &str) -> bool {
        let Some(slot) = self.slides.get_mut(self.current_index) else {
            return false;
        };
        *slot = SlideRecord::from_editor(title, raw_bullets);
        true
    }

    /// Append a placeholder slide and select it.
    pub fn add_slide(&mut self) {
        self.slides.push(SlideRecord::new(
            NEW_SLIDE_TITLE,
            NEW_SLIDE_BULLETS.iter().map(|b| b.to_string()).collect(),
        ));
        self.current_index = self.slides.len() - 1;
    }

    /// Remove the selected slide and select the one before it.
    ///
    /// Returns the removed slide; `None` when the outline is empty.
    pub fn delete_slide(&mut self) -> Option<SlideRecord> {
        if self.slides.is_empty() {
            return None;
        }
        let removed = self.slides.remove(self.current_index);
        self.current_index = self.current_index.saturating_sub(1);
        Some(removed)
    }

    /// Whether there is anything to export.
    pub fn download_enabled(&self) -> bool {
        !self.slides.is_empty()
    }

    pub fn editor_view(&self) -> EditorView {
        self.current()
            .map(|slide| EditorView {
                title: slide.title.clone(),
                bullets: slide.bullets.join("\n"),
            })
            .unwrap_or_default()
    }

    pub fn summaries(&self) -> Vec<SlideSummary> {
        self.slides
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideSummary {
                number: index + 1,
                title: if slide.title.is_empty() {
                    UNTITLED.to_string()
                } else {
                    slide.title.clone()
                },
                bullet_count: slide.bullets.len(),
                selected: index == self.current_index,
            })
            .collect()
    }

    pub fn theme_key(&self) -> &str {
        &self.theme_key
    }

    /// Select a theme. Unknown keys fall back to the default theme.
    pub fn set_theme(&mut self, key: &str) {
        self.theme_key = theme::resolve_key(key).to_string();
    }

    pub fn theme(&self) -> &'static Theme {
        theme::resolve(&self.theme_key)
    }
}
