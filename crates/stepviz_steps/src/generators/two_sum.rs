//! Two-pointer pair search over a sorted copy of the input. Returned indices
//! are positions in the sorted copy.

use serde_json::Value;

use crate::generators::{bracketed, sorted_copy};
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Step, StepContext, StepType,
};

const ARRAY: &str = "array";

fn pointer_highlights(step: &mut Step, left: isize, right: isize, len: usize) {
    let in_range = |i: isize| (i >= 0 && (i as usize) < len).then_some(i as usize);
    step.add_highlight(
        ARRAY,
        Highlight::indices(in_range(left), HighlightStyle::Current),
    )
    .add_highlight(
        ARRAY,
        Highlight::indices(in_range(right), HighlightStyle::Active),
    );
}

/// `sum` as a JSON number when it fits in an `i64`, otherwise as decimal text
/// so the watch value never goes missing.
fn sum_value(sum: i128) -> Value {
    i64::try_from(sum).map_or_else(|_| Value::String(sum.to_string()), Value::from)
}

/// Two-pointer pair search over a sorted copy of `array`. `result` holds
/// indices into the sorted copy; `values` holds the matching values.
pub fn two_sum(array: &[i64], target: i64) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let sorted = sorted_copy(array);
    let len = sorted.len();

    recorder
        .push(
            StepType::Initialization,
            format!(
                "Sort the array to {} and look for two numbers that add up to {}.",
                bracketed(&sorted),
                target
            ),
        )
        .add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
        .set_var("target", &target);

    let mut left: isize = 0;
    let mut right: isize = len as isize - 1;

    let step = recorder.push(
        StepType::PointerInitialization,
        format!(
            "Place left at index {} and right at index {}.",
            left, right
        ),
    );
    step.add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
        .set_var("left", &left)
        .set_var("right", &right)
        .set_var("target", &target);
    pointer_highlights(step, left, right, len);

    while left < right {
        let (l, r) = (left as usize, right as usize);
        let sum = i128::from(sorted[l]) + i128::from(sorted[r]);

        recorder
            .push(
                StepType::Comparison,
                format!(
                    "array[{}] + array[{}] = {} + {} = {}. Compare it with {}.",
                    l, r, sorted[l], sorted[r], sum, target
                ),
            )
            .add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
            .add_highlight(ARRAY, Highlight::indices([l, r], HighlightStyle::Compare))
            .set_var("left", &left)
            .set_var("right", &right)
            .set_var("sum", &sum_value(sum))
            .set_var("target", &target)
            .set_context(StepContext::new(Some(LoopKind::While), Operation::Compare, ARRAY));

        if sum == i128::from(target) {
            recorder
                .push(
                    StepType::Return,
                    format!(
                        "Found the pair {} + {} = {} at indices {} and {}.",
                        sorted[l], sorted[r], target, l, r
                    ),
                )
                .add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
                .add_highlight(ARRAY, Highlight::indices([l, r], HighlightStyle::Match))
                .set_var("left", &left)
                .set_var("right", &right)
                .set_var("sum", &sum_value(sum))
                .set_var("target", &target)
                .set_var("found", &true)
                .set_var("result", &[l, r])
                .set_var("values", &[sorted[l], sorted[r]]);
            return finish(recorder);
        }

        let step = if sum < i128::from(target) {
            left += 1;
            recorder.push(
                StepType::PointerMoveLeft,
                format!(
                    "{} is less than {}, so move left to index {}.",
                    sum, target, left
                ),
            )
        } else {
            right -= 1;
            recorder.push(
                StepType::PointerMoveRight,
                format!(
                    "{} is greater than {}, so move right to index {}.",
                    sum, target, right
                ),
            )
        };
        step.add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
            .set_var("left", &left)
            .set_var("right", &right)
            .set_var("target", &target)
            .set_context(StepContext::new(Some(LoopKind::While), Operation::Write, ARRAY));
        pointer_highlights(step, left, right, len);
    }

    recorder
        .push(
            StepType::Return,
            format!("The pointers met without finding a pair that adds up to {}.", target),
        )
        .add_structure(ARRAY, DataStructure::array(&sorted, "Sorted Array"))
        .set_var("left", &left)
        .set_var("right", &right)
        .set_var("target", &target)
        .set_var("found", &false)
        .set_var("result", &serde_json::Value::Null);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "two-sum generated");
    steps
}
