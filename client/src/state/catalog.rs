//! Option lists for each selector stage.
//!
//! Chapters are placeholders until chapter metadata comes from the backend.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::selection::{SelectionState, Stage};

pub const BOARDS: [&str; 2] = ["NCERT", "CBSE"];

const SENIOR_CLASSES: [&str; 2] = ["Class 11", "Class 12"];
const CORE_SUBJECTS: [&str; 2] = ["Mathematics", "Science"];
const SENIOR_SUBJECTS: [&str; 4] = ["Physics", "Chemistry", "Biology", "Computer Science"];
const CHAPTER_COUNT: u32 = 10;

/// Options offered for `stage` given the earlier choices in `selection`.
/// Locked stages have no options.
pub fn options_for(stage: Stage, selection: &SelectionState) -> Vec<String> {
    if !selection.is_unlocked(stage) {
        return Vec::new();
    }
    match stage {
        Stage::Board => BOARDS.iter().map(|b| (*b).to_owned()).collect(),
        Stage::Class => class_options(&selection.board),
        Stage::Subject => subject_options(&selection.class),
        Stage::Chapter => (1..=CHAPTER_COUNT).map(|n| format!("Chapter {n}")).collect(),
    }
}

fn class_options(board: &str) -> Vec<String> {
    let first = if board == "NCERT" { 6 } else { 9 };
    (first..=12).map(|n| format!("Class {n}")).collect()
}

fn subject_options(class: &str) -> Vec<String> {
    let mut subjects: Vec<String> = CORE_SUBJECTS.iter().map(|s| (*s).to_owned()).collect();
    if SENIOR_CLASSES.contains(&class) {
        subjects.extend(SENIOR_SUBJECTS.iter().map(|s| (*s).to_owned()));
    }
    subjects
}
