//! Curriculum path selection (board → class → subject → chapter).
//!
//! DESIGN
//! ======
//! Each stage is only meaningful relative to the stage before it, so choosing
//! a value at one stage clears every later stage instead of merely hiding it.
//! That keeps a stale chapter from surviving a board change and ending up in a
//! submitted path.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use super::catalog;

/// Storage bucket prefix the backend resolves paths against.
pub const BUCKET_PREFIX: &str = "gs://rag-project-storagebucket";

/// One step of the cascading selector, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Board,
    Class,
    Subject,
    Chapter,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Board, Stage::Class, Stage::Subject, Stage::Chapter];

    /// The stage that must be set before this one unlocks.
    pub fn previous(self) -> Option<Stage> {
        match self {
            Stage::Board => None,
            Stage::Class => Some(Stage::Board),
            Stage::Subject => Some(Stage::Class),
            Stage::Chapter => Some(Stage::Subject),
        }
    }

    /// Prompt shown above the stage's options.
    pub fn prompt(self) -> &'static str {
        match self {
            Stage::Board => "Choose your board",
            Stage::Class => "Which class are you in?",
            Stage::Subject => "Pick a subject",
            Stage::Chapter => "Select a chapter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0:?} cannot be chosen before the previous stage")]
    StageLocked(Stage),
    #[error("'{value}' is not an option for {stage:?}")]
    UnknownOption { stage: Stage, value: String },
    #[error("selection is incomplete")]
    Incomplete,
}

/// The four chosen values; an empty string means "not chosen yet".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub board: String,
    pub class: String,
    pub subject: String,
    pub chapter: String,
}

impl SelectionState {
    pub fn value(&self, stage: Stage) -> &str {
        match stage {
            Stage::Board => &self.board,
            Stage::Class => &self.class,
            Stage::Subject => &self.subject,
            Stage::Chapter => &self.chapter,
        }
    }

    fn slot(&mut self, stage: Stage) -> &mut String {
        match stage {
            Stage::Board => &mut self.board,
            Stage::Class => &mut self.class,
            Stage::Subject => &mut self.subject,
            Stage::Chapter => &mut self.chapter,
        }
    }

    pub fn is_set(&self, stage: Stage) -> bool {
        !self.value(stage).is_empty()
    }

    /// Board is always open; every other stage opens once its predecessor is set.
    pub fn is_unlocked(&self, stage: Stage) -> bool {
        stage.previous().map_or(true, |prev| self.is_set(prev))
    }

    pub fn is_complete(&self) -> bool {
        Stage::ALL.iter().all(|stage| self.is_set(*stage))
    }

    /// Record `value` for `stage` and clear every later stage.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::StageLocked`] when the previous stage is unset
    /// and [`SelectionError::UnknownOption`] when `value` is not offered for the
    /// stage given the current earlier choices. The state is untouched on error.
    pub fn select(&mut self, stage: Stage, value: impl Into<String>) -> Result<(), SelectionError> {
        let value = value.into();
        if !self.is_unlocked(stage) {
            return Err(SelectionError::StageLocked(stage));
        }
        if !catalog::options_for(stage, self).iter().any(|opt| *opt == value) {
            return Err(SelectionError::UnknownOption { stage, value });
        }

        for later in Stage::ALL.into_iter().filter(|s| *s > stage) {
            self.slot(later).clear();
        }
        *self.slot(stage) = value;
        Ok(())
    }

    /// Storage path for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Incomplete`] unless all four stages are set.
    pub fn resource_path(&self) -> Result<String, SelectionError> {
        if !self.is_complete() {
            return Err(SelectionError::Incomplete);
        }
        Ok(format!(
            "{BUCKET_PREFIX}/{}/{}/{}/{}",
            self.board,
            self.class,
            self.subject,
            self.chapter.replace(' ', "_")
        ))
    }
}
