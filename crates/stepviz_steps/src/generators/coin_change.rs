//! Fewest coins for an amount, bottom-up. `dp[a]` is `None` while amount `a`
//! is unreachable.

use crate::generators::bracketed;
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Step, StepContext, StepType,
};

const TABLE: &str = "dpTable";

fn cell(value: Option<u32>) -> String {
    value.map_or_else(|| "unreachable".to_string(), |v| v.to_string())
}

fn snapshot(step: &mut Step, dp: &[Option<u32>]) {
    let cells: Vec<Option<i64>> = dp.iter().map(|c| c.map(i64::from)).collect();
    step.add_structure(TABLE, DataStructure::table(&cells, "dp[amount]"))
        .set_var("dp", &cells);
}

pub fn coin_change(coins: &[u32], amount: u32) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let mut usable: Vec<u32> = coins.iter().copied().filter(|&c| c > 0).collect();
    usable.sort_unstable();
    usable.dedup();

    let size = amount as usize + 1;
    let mut dp: Vec<Option<u32>> = vec![None; size];
    dp[0] = Some(0);

    let step = recorder.push(
        StepType::Initialization,
        format!(
            "Build a table of the fewest coins for every amount from 0 to {} using coins {}. dp[0] = 0.",
            amount,
            bracketed(&usable)
        ),
    );
    snapshot(step, &dp);
    step.add_highlight(TABLE, Highlight::indices([0], HighlightStyle::Match))
        .set_var("coins", &usable)
        .set_var("amount", &amount);

    for a in 1..size {
        let step = recorder.push(StepType::LoopStart, format!("Compute dp[{}].", a));
        snapshot(step, &dp);
        step.add_highlight(TABLE, Highlight::indices([a], HighlightStyle::Current))
            .set_var("current", &a)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Read, TABLE).at(a));

        for &coin in usable.iter().take_while(|&&c| c as usize <= a) {
            let rest = a - coin as usize;
            let candidate = dp[rest].map(|c| c + 1);
            let explanation = match candidate {
                Some(count) => format!(
                    "With coin {}: dp[{}] + 1 = {}, current dp[{}] is {}.",
                    coin,
                    rest,
                    count,
                    a,
                    cell(dp[a])
                ),
                None => format!(
                    "With coin {}: dp[{}] is unreachable, so this coin cannot finish {}.",
                    coin, rest, a
                ),
            };
            let step = recorder.push(StepType::Comparison, explanation);
            snapshot(step, &dp);
            step.add_highlight(TABLE, Highlight::indices([a], HighlightStyle::Current))
                .add_highlight(TABLE, Highlight::indices([rest], HighlightStyle::Compare))
                .set_var("current", &a)
                .set_var("coin", &coin)
                .set_context(
                    StepContext::new(Some(LoopKind::For), Operation::Compare, TABLE).at(rest),
                );

            let improves = match (candidate, dp[a]) {
                (Some(c), Some(existing)) => c < existing,
                (Some(_), None) => true,
                (None, _) => false,
            };
            if improves {
                dp[a] = candidate;
                let step = recorder.push(
                    StepType::DpTableUpdate,
                    format!("Update dp[{}] = {}.", a, cell(dp[a])),
                );
                snapshot(step, &dp);
                step.add_highlight(TABLE, Highlight::indices([a], HighlightStyle::Active))
                    .set_var("current", &a)
                    .set_var("coin", &coin)
                    .set_context(
                        StepContext::new(Some(LoopKind::For), Operation::Write, TABLE).at(a),
                    );
            }
        }
    }

    let result: i64 = dp[amount as usize].map_or(-1, i64::from);
    let explanation = match dp[amount as usize] {
        Some(count) => format!("The fewest coins needed for {} is {}.", amount, count),
        None => format!(
            "{} cannot be made from coins {}, so the answer is -1.",
            amount,
            bracketed(&usable)
        ),
    };
    let step = recorder.push(StepType::Return, explanation);
    snapshot(step, &dp);
    step.add_highlight(
        TABLE,
        Highlight::indices([amount as usize], HighlightStyle::Match),
    )
    .set_var("result", &result);

    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "coin-change generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::{assert_well_formed, step_types};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(&[1, 2, 5], 11, 3)]
    #[case(&[2], 3, -1)]
    #[case(&[1], 0, 0)]
    #[case(&[], 4, -1)]
    #[case(&[0, 3, 3], 6, 2)]
    #[case(&[5, 1], 7, 3)]
    fn test_coin_change(#[case] coins: &[u32], #[case] amount: u32, #[case] expected: i64) {
        let steps = coin_change(coins, amount);
        assert_well_formed(&steps);
        assert_eq!(steps.last().unwrap().variable("result"), Some(&json!(expected)));
    }

    #[test]
    fn test_zero_amount_has_no_loop() {
        let steps = coin_change(&[1, 2], 0);
        assert_eq!(
            step_types(&steps),
            vec![StepType::Initialization, StepType::Return]
        );
    }

    #[test]
    fn test_table_updates_only_on_improvement() {
        // dp[2]: coin 1 gives 2, coin 2 gives 1 -> two updates; dp[1] one update
        let steps = coin_change(&[1, 2], 2);
        let updates = steps
            .iter()
            .filter(|s| s.step_type == StepType::DpTableUpdate)
            .count();
        assert_eq!(updates, 3);
    }
}
