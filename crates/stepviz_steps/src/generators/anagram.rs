use std::collections::BTreeMap;

use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Position, Step, StepContext,
    StepType,
};

const FIRST: &str = "firstString";
const SECOND: &str = "secondString";
const COUNTS: &str = "charCounts";

fn snapshot(step: &mut Step, first: &[char], second: &[char], counts: &BTreeMap<char, i64>) {
    step.add_structure(FIRST, DataStructure::text(first, "First").at(Position::Top))
        .add_structure(SECOND, DataStructure::text(second, "Second").at(Position::Center))
        .add_structure(COUNTS, DataStructure::counts(counts, "Counts").at(Position::Bottom))
        .set_var("counts", counts);
}

/// Character-frequency anagram check. Case-sensitive, compares Unicode
/// scalar values.
pub fn is_anagram(first: &str, second: &str) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();
    let mut counts: BTreeMap<char, i64> = BTreeMap::new();

    let step = recorder.push(
        StepType::Initialization,
        format!("Check whether \"{}\" and \"{}\" are anagrams.", first, second),
    );
    snapshot(step, &a, &b, &counts);

    if a.len() != b.len() {
        let step = recorder.push(
            StepType::Return,
            format!(
                "The strings have different lengths ({} vs {}), so they cannot be anagrams.",
                a.len(),
                b.len()
            ),
        );
        snapshot(step, &a, &b, &counts);
        step.set_var("isAnagram", &false);
        return finish(recorder);
    }

    for (i, &ch) in a.iter().enumerate() {
        let count = counts.entry(ch).or_insert(0);
        *count += 1;
        let count = *count;
        let step = recorder.push(
            StepType::Assignment,
            format!("Count '{}' from the first string: count['{}'] = {}.", ch, ch, count),
        );
        snapshot(step, &a, &b, &counts);
        step.add_highlight(FIRST, Highlight::indices([i], HighlightStyle::Current))
            .add_highlight(COUNTS, Highlight::keys([ch], HighlightStyle::Active))
            .set_var("index", &i)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Write, COUNTS).at(i));
    }

    for (i, &ch) in b.iter().enumerate() {
        let available = counts.get(&ch).copied().unwrap_or(0);
        let step = recorder.push(
            StepType::Comparison,
            format!(
                "Take '{}' from the second string: count['{}'] is {}.",
                ch, ch, available
            ),
        );
        snapshot(step, &a, &b, &counts);
        step.add_highlight(SECOND, Highlight::indices([i], HighlightStyle::Current))
            .add_highlight(COUNTS, Highlight::keys([ch], HighlightStyle::Compare))
            .set_var("index", &i)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Compare, COUNTS).at(i));

        if available == 0 {
            let step = recorder.push(
                StepType::Return,
                format!(
                    "'{}' appears more often in \"{}\" than in \"{}\", so they are not anagrams.",
                    ch, second, first
                ),
            );
            snapshot(step, &a, &b, &counts);
            step.add_highlight(SECOND, Highlight::indices([i], HighlightStyle::Match))
                .set_var("isAnagram", &false);
            return finish(recorder);
        }

        counts.insert(ch, available - 1);
        let step = recorder.push(
            StepType::Assignment,
            format!("Decrement count['{}'] to {}.", ch, available - 1),
        );
        snapshot(step, &a, &b, &counts);
        step.add_highlight(SECOND, Highlight::indices(0..=i, HighlightStyle::Visited))
            .add_highlight(COUNTS, Highlight::keys([ch], HighlightStyle::Active))
            .set_var("index", &i);
    }

    let step = recorder.push(
        StepType::Return,
        format!(
            "Every count is back to zero, so \"{}\" and \"{}\" are anagrams.",
            first, second
        ),
    );
    snapshot(step, &a, &b, &counts);
    step.add_highlight(FIRST, Highlight::indices(0..a.len(), HighlightStyle::Match))
        .add_highlight(SECOND, Highlight::indices(0..b.len(), HighlightStyle::Match))
        .set_var("isAnagram", &true);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "anagram-detection generated");
    steps
}
