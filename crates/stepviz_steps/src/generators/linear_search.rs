use crate::generators::bracketed;
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Step, StepContext, StepType,
};

const ARRAY: &str = "searchArray";
const COMPARE_COLOR: &str = "#f59e0b";

/// Scans `array` left to right in the caller's order.
pub fn linear_search(array: &[i64], target: i64) -> Vec<Step> {
    let mut recorder = StepRecorder::new();

    recorder
        .push(
            StepType::Initialization,
            format!("Search for {} in {} from left to right.", target, bracketed(array)),
        )
        .add_structure(ARRAY, DataStructure::array(array, "Array"))
        .set_var("target", &target)
        .set_var("currentIndex", &0);

    for (i, &value) in array.iter().enumerate() {
        recorder
            .push(
                StepType::LoopStart,
                format!("Look at index {}: array[{}] = {}.", i, i, value),
            )
            .add_structure(ARRAY, DataStructure::array(array, "Array"))
            .add_highlight(ARRAY, Highlight::indices(0..i, HighlightStyle::Visited))
            .add_highlight(ARRAY, Highlight::indices([i], HighlightStyle::Current))
            .set_var("currentIndex", &i)
            .set_var("currentValue", &value)
            .set_var("target", &target)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Read, ARRAY).at(i));

        recorder
            .push(
                StepType::Comparison,
                format!("Compare array[{}] = {} with {}.", i, value, target),
            )
            .add_structure(ARRAY, DataStructure::array(array, "Array"))
            .add_highlight(ARRAY, Highlight::indices(0..i, HighlightStyle::Visited))
            .add_highlight(
                ARRAY,
                Highlight::indices([i], HighlightStyle::Compare).color(COMPARE_COLOR),
            )
            .set_var("currentIndex", &i)
            .set_var("currentValue", &value)
            .set_var("target", &target)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Compare, ARRAY).at(i));

        if value == target {
            recorder
                .push(
                    StepType::ReturnFound,
                    format!("Found {} at index {}.", target, i),
                )
                .add_structure(ARRAY, DataStructure::array(array, "Array"))
                .add_highlight(ARRAY, Highlight::indices(0..i, HighlightStyle::Visited))
                .add_highlight(ARRAY, Highlight::indices([i], HighlightStyle::Match))
                .set_var("currentIndex", &i)
                .set_var("target", &target)
                .set_var("found", &true)
                .set_var("result", &i);
            return finish(recorder);
        }

        recorder
            .push(
                StepType::Assignment,
                format!("{} is not {}, keep searching.", value, target),
            )
            .add_structure(ARRAY, DataStructure::array(array, "Array"))
            .add_highlight(ARRAY, Highlight::indices(0..=i, HighlightStyle::Visited))
            .set_var("currentIndex", &i)
            .set_var("target", &target);
    }

    recorder
        .push(
            StepType::ReturnNotFound,
            format!(
                "{} was not found after checking all {} elements.",
                target,
                array.len()
            ),
        )
        .add_structure(ARRAY, DataStructure::array(array, "Array"))
        .add_highlight(
            ARRAY,
            Highlight::indices(0..array.len(), HighlightStyle::Visited),
        )
        .set_var("currentIndex", &array.len())
        .set_var("target", &target)
        .set_var("found", &false)
        .set_var("result", &-1);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "linear-search generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::{assert_well_formed, highlighted, step_types};
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn test_found_short_circuits() {
        let steps = linear_search(&[4, 7, 1], 7);
        assert_well_formed(&steps);
        assert_eq!(
            step_types(&steps),
            vec![
                StepType::Initialization,
                StepType::LoopStart,
                StepType::Comparison,
                StepType::Assignment,
                StepType::LoopStart,
                StepType::Comparison,
                StepType::ReturnFound
            ]
        );
        assert_eq!(steps.last().unwrap().variable("result"), Some(&json!(1)));
    }

    #[test]
    fn test_not_found_visits_every_index() {
        let array = [4, 7, 1, 9];
        let steps = linear_search(&array, 5);
        assert_well_formed(&steps);

        let last = steps.last().unwrap();
        assert_eq!(last.step_type, StepType::ReturnNotFound);
        assert_eq!(last.variable("currentIndex"), Some(&json!(array.len())));

        let visited: BTreeSet<usize> = steps
            .iter()
            .flat_map(|s| highlighted(s, ARRAY, HighlightStyle::Visited))
            .collect();
        assert_eq!(visited, (0..array.len()).collect());
    }

    #[test]
    fn test_empty_array() {
        let steps = linear_search(&[], 1);
        assert_eq!(
            step_types(&steps),
            vec![StepType::Initialization, StepType::ReturnNotFound]
        );
        assert_eq!(steps[1].variable("currentIndex"), Some(&json!(0)));
    }

    #[test]
    fn test_keeps_caller_order() {
        let steps = linear_search(&[9, 1, 5], 5);
        assert_eq!(steps.last().unwrap().variable("result"), Some(&json!(2)));
    }
}
