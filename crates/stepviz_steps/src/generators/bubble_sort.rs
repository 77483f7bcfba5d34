use crate::generators::bracketed;
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Step, StepContext, StepType,
};

const ARRAY: &str = "array";

pub fn bubble_sort(array: &[i64]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut working = array.to_vec();
    let n = working.len();

    recorder
        .push(
            StepType::Initialization,
            format!(
                "Sort {} by repeatedly swapping adjacent elements that are out of order.",
                bracketed(array)
            ),
        )
        .add_structure(ARRAY, DataStructure::array(&working, "Array"))
        .set_var("length", &n);

    // elements at index >= sorted_from are in their final place
    let mut sorted_from = n;
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            let (a, b) = (working[j], working[j + 1]);
            recorder
                .push(
                    StepType::Comparison,
                    format!("Compare array[{}] = {} with array[{}] = {}.", j, a, j + 1, b),
                )
                .add_structure(ARRAY, DataStructure::array(&working, "Array"))
                .add_highlight(ARRAY, Highlight::indices(sorted_from..n, HighlightStyle::Visited))
                .add_highlight(ARRAY, Highlight::indices([j, j + 1], HighlightStyle::Compare))
                .set_var("pass", &pass)
                .set_var("j", &j)
                .set_context(
                    StepContext::new(Some(LoopKind::For), Operation::Compare, ARRAY).at(j),
                );

            if a > b {
                working.swap(j, j + 1);
                swapped = true;
                recorder
                    .push(StepType::Swap, format!("{} > {}, so swap them.", a, b))
                    .add_structure(ARRAY, DataStructure::array(&working, "Array"))
                    .add_highlight(
                        ARRAY,
                        Highlight::indices(sorted_from..n, HighlightStyle::Visited),
                    )
                    .add_highlight(ARRAY, Highlight::indices([j, j + 1], HighlightStyle::Active))
                    .set_var("pass", &pass)
                    .set_var("j", &j)
                    .set_var("swapped", &swapped)
                    .set_context(
                        StepContext::new(Some(LoopKind::For), Operation::Swap, ARRAY).at(j),
                    );
            }
        }

        sorted_from = n - 1 - pass;
        if !swapped {
            sorted_from = 0;
        }
        let explanation = if swapped {
            format!(
                "Pass {} is complete: {} is now in its final position.",
                pass + 1,
                working[n - 1 - pass]
            )
        } else {
            format!(
                "Pass {} made no swaps, so the array is already sorted.",
                pass + 1
            )
        };
        recorder
            .push(StepType::PassComplete, explanation)
            .add_structure(ARRAY, DataStructure::array(&working, "Array"))
            .add_highlight(ARRAY, Highlight::indices(sorted_from..n, HighlightStyle::Visited))
            .set_var("pass", &pass)
            .set_var("swapped", &swapped);
        if !swapped {
            break;
        }
    }

    recorder
        .push(
            StepType::Return,
            format!("The array is sorted: {}.", bracketed(&working)),
        )
        .add_structure(ARRAY, DataStructure::array(&working, "Array"))
        .add_highlight(ARRAY, Highlight::indices(0..n, HighlightStyle::Match))
        .set_var("result", &working);

    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "bubble-sort generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::{assert_well_formed, step_types};
    use crate::step::StructureData;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![5, 1, 4, 2, 8], vec![1, 2, 4, 5, 8])]
    #[case(vec![3, 3, -1], vec![-1, 3, 3])]
    fn test_sorts(#[case] input: Vec<i64>, #[case] expected: Vec<i64>) {
        let steps = bubble_sort(&input);
        assert_well_formed(&steps);
        assert_eq!(steps.last().unwrap().variable("result"), Some(&json!(expected)));
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        let steps = bubble_sort(&[1, 2, 3]);
        assert_eq!(
            step_types(&steps),
            vec![
                StepType::Initialization,
                StepType::Comparison,
                StepType::Comparison,
                StepType::PassComplete,
                StepType::Return
            ]
        );
    }

    #[test]
    fn test_swap_snapshot_shows_swapped_values() {
        let steps = bubble_sort(&[2, 1]);
        let swap = steps.iter().find(|s| s.step_type == StepType::Swap).unwrap();
        assert_eq!(
            swap.structure(ARRAY).unwrap().data,
            StructureData::Array(vec![1, 2])
        );
        // the comparison before it still shows the original order
        assert_eq!(
            steps[1].structure(ARRAY).unwrap().data,
            StructureData::Array(vec![2, 1])
        );
    }
}
