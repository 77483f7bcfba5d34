//! Binary search over a sorted copy of the input.
//!
//! The input is sorted ascending before searching, so every index in the
//! produced steps refers to the sorted working copy, not the caller's order.

use crate::generators::{bracketed, sorted_copy};
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Step, StepContext, StepType,
};

const ARRAY: &str = "searchArray";

/// Window highlight plus boundary markers. A single-candidate window gets a
/// different marker style than a two-boundary window.
fn highlight_window(step: &mut Step, left: usize, right: usize) {
    step.add_highlight(
        ARRAY,
        Highlight::indices(left..=right, HighlightStyle::Highlight).intensity(0.3),
    );
    if left == right {
        step.add_highlight(ARRAY, Highlight::indices([left], HighlightStyle::Active));
    } else {
        step.add_highlight(
            ARRAY,
            Highlight::indices([left, right], HighlightStyle::Compare),
        );
    }
}

/// Searches a sorted copy of `array`. Reported indices refer to that copy,
/// not to the caller's order.
pub fn binary_search(array: &[i64], target: i64) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let sorted = sorted_copy(array);

    let mut left: isize = 0;
    let mut right: isize = sorted.len() as isize - 1;

    let step = recorder.push(
        StepType::Initialization,
        format!(
            "Sort the array to {} and search for {} between indices {} and {}.",
            bracketed(&sorted),
            target,
            left,
            right
        ),
    );
    step.add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
        .set_var("left", &left)
        .set_var("right", &right)
        .set_var("target", &target);
    if left <= right {
        highlight_window(step, left as usize, right as usize);
    }

    while left <= right {
        let mid = (left + right) / 2;
        let (l, r, m) = (left as usize, right as usize, mid as usize);
        let value = sorted[m];

        let step = recorder.push(
            StepType::Comparison,
            format!(
                "Check the middle element array[{}] = {} and compare it with {}.",
                mid, value, target
            ),
        );
        step.add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
            .set_var("left", &left)
            .set_var("right", &right)
            .set_var("mid", &mid)
            .set_var("midValue", &value)
            .set_var("target", &target)
            .set_context(StepContext::new(Some(LoopKind::While), Operation::Compare, ARRAY).at(m));
        highlight_window(step, l, r);
        step.add_highlight(ARRAY, Highlight::indices([m], HighlightStyle::Current));

        if value == target {
            recorder
                .push(
                    StepType::ReturnFound,
                    format!("Found {} at index {}.", target, mid),
                )
                .add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
                .add_highlight(ARRAY, Highlight::indices([m], HighlightStyle::Match))
                .set_var("left", &left)
                .set_var("right", &right)
                .set_var("mid", &mid)
                .set_var("target", &target)
                .set_var("found", &true)
                .set_var("result", &mid);
            return finish(recorder);
        }

        let explanation = if value < target {
            left = mid + 1;
            format!(
                "{} < {}, so the target can only be on the right. Move left to {}.",
                value, target, left
            )
        } else {
            right = mid - 1;
            format!(
                "{} > {}, so the target can only be on the left. Move right to {}.",
                value, target, right
            )
        };
        let step = recorder.push(StepType::Assignment, explanation);
        step.add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
            .set_var("left", &left)
            .set_var("right", &right)
            .set_var("mid", &mid)
            .set_var("target", &target)
            .set_context(StepContext::new(Some(LoopKind::While), Operation::Write, ARRAY));
        if left <= right {
            highlight_window(step, left as usize, right as usize);
        }
    }

    recorder
        .push(
            StepType::ReturnNotFound,
            format!("{} is not in the array.", target),
        )
        .add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
        .set_var("left", &left)
        .set_var("right", &right)
        .set_var("target", &target)
        .set_var("found", &false)
        .set_var("result", &-1);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "binary-search generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::{assert_well_formed, explanations, highlighted, step_types};
    use rstest::rstest;
    use serde_json::json;

    const SORTED: [i64; 8] = [2, 5, 8, 12, 16, 23, 38, 45];

    #[test]
    fn test_finds_target() {
        let steps = binary_search(&SORTED, 23);
        assert_well_formed(&steps);
        let last = steps.last().unwrap();
        assert_eq!(last.step_type, StepType::ReturnFound);
        assert_eq!(last.variable("result"), Some(&json!(5)));
        assert_eq!(SORTED[5], 23);
        assert_eq!(
            step_types(&steps),
            vec![
                StepType::Initialization,
                StepType::Comparison,
                StepType::Assignment,
                StepType::Comparison,
                StepType::ReturnFound
            ]
        );
    }

    #[test]
    fn test_missing_target() {
        let steps = binary_search(&SORTED, 99);
        assert_well_formed(&steps);
        let last = steps.last().unwrap();
        assert_eq!(last.step_type, StepType::ReturnNotFound);
        assert_eq!(last.variable("result"), Some(&json!(-1)));
        assert!(last.highlights.is_empty());
    }

    #[test]
    fn test_sorts_a_copy_first() {
        let steps = binary_search(&[9, 1, 5], 9);
        let last = steps.last().unwrap();
        assert_eq!(last.step_type, StepType::ReturnFound);
        // index into the sorted copy [1, 5, 9]
        assert_eq!(last.variable("result"), Some(&json!(2)));
    }

    #[rstest]
    #[case(&[], 3)]
    #[case(&[3], 3)]
    #[case(&[3], 4)]
    #[case(&[1, 1, 1, 1], 1)]
    #[case(&[-5, 0, 5], -6)]
    fn test_degenerate_inputs_terminate(#[case] array: &[i64], #[case] target: i64) {
        let steps = binary_search(array, target);
        assert_well_formed(&steps);
        let found = array.contains(&target);
        let expected = if found {
            StepType::ReturnFound
        } else {
            StepType::ReturnNotFound
        };
        assert_eq!(steps.last().unwrap().step_type, expected);
    }

    #[test]
    fn test_mid_highlight_matches_variable() {
        for step in binary_search(&SORTED, 99)
            .iter()
            .filter(|s| s.step_type == StepType::Comparison)
        {
            let mid = step.variable("mid").and_then(|v| v.as_u64()).unwrap() as usize;
            assert_eq!(highlighted(step, ARRAY, HighlightStyle::Current), vec![mid]);
        }
    }

    #[test]
    fn test_single_candidate_window_uses_active_marker() {
        let steps = binary_search(&[1, 2, 3], 3);
        // left = 2, right = 2 after the first move
        let narrowed = &steps[2];
        assert_eq!(narrowed.step_type, StepType::Assignment);
        assert_eq!(highlighted(narrowed, ARRAY, HighlightStyle::Active), vec![2]);
        assert!(highlighted(narrowed, ARRAY, HighlightStyle::Compare).is_empty());
    }

    #[test]
    fn test_explanations() {
        let steps = binary_search(&SORTED, 23);
        insta::assert_snapshot!(explanations(&steps), @r"
        Sort the array to [2, 5, 8, 12, 16, 23, 38, 45] and search for 23 between indices 0 and 7.
        Check the middle element array[3] = 12 and compare it with 23.
        12 < 23, so the target can only be on the right. Move left to 4.
        Check the middle element array[5] = 23 and compare it with 23.
        Found 23 at index 5.
        ");
    }
}
