//! Minimum cost to climb past the end of a cost array, starting at index 0
//! or 1 and moving one or two positions at a time.
//! `dp[i] = cost[i] + min(dp[i - 1], dp[i - 2])`.

use crate::generators::bracketed;
use crate::recorder::StepRecorder;
use crate::step::{
    DataStructure, Highlight, HighlightStyle, LoopKind, Operation, Position, Step, StepContext,
    StepType,
};

const COST: &str = "cost";
const TABLE: &str = "dpTable";

fn snapshot(step: &mut Step, costs: &[i64], dp: &[Option<i64>]) {
    step.add_structure(COST, DataStructure::array(costs, "cost"))
        .add_structure(TABLE, DataStructure::table(dp, "dp").at(Position::Bottom))
        .set_var("dp", dp);
}

pub fn min_cost_climbing(costs: &[i64]) -> Vec<Step> {
    let mut recorder = StepRecorder::new();
    let n = costs.len();
    let mut dp: Vec<Option<i64>> = vec![None; n];

    let step = recorder.push(
        StepType::Initialization,
        format!(
            "Find the cheapest way past the end of {}, starting at index 0 or 1 and moving one or two steps.",
            bracketed(costs)
        ),
    );
    snapshot(step, costs, &dp);

    if n < 2 {
        let step = recorder.push(
            StepType::Return,
            "With fewer than two steps you can start past the end, so the cost is 0.",
        );
        snapshot(step, costs, &dp);
        step.set_var("result", &0);
        return finish(recorder);
    }

    for i in 0..2 {
        dp[i] = Some(costs[i]);
        let step = recorder.push(
            StepType::DpTableUpdate,
            format!(
                "Index {} can be a starting point, so dp[{}] = cost[{}] = {}.",
                i, i, i, costs[i]
            ),
        );
        snapshot(step, costs, &dp);
        step.add_highlight(COST, Highlight::indices([i], HighlightStyle::Current))
            .add_highlight(TABLE, Highlight::indices([i], HighlightStyle::Active))
            .set_var("i", &i);
    }

    for i in 2..n {
        let (one_back, two_back) = (dp[i - 1].unwrap_or(0), dp[i - 2].unwrap_or(0));
        let step = recorder.push(
            StepType::Comparison,
            format!(
                "Reach index {} from dp[{}] = {} or dp[{}] = {}.",
                i,
                i - 1,
                one_back,
                i - 2,
                two_back
            ),
        );
        snapshot(step, costs, &dp);
        step.add_highlight(TABLE, Highlight::indices([i - 2, i - 1], HighlightStyle::Compare))
            .add_highlight(COST, Highlight::indices([i], HighlightStyle::Current))
            .set_var("i", &i)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Compare, TABLE).at(i));

        let best = one_back.min(two_back);
        let (value, explanation) = match costs[i].checked_add(best) {
            Some(value) => (value, format!("dp[{}] = {} + {} = {}.", i, costs[i], best, value)),
            None => {
                let value = costs[i].saturating_add(best);
                let explanation = format!(
                    "dp[{}] = {} + {} overflows a 64-bit integer, so it is clamped to {}.",
                    i, costs[i], best, value
                );
                (value, explanation)
            }
        };
        dp[i] = Some(value);
        let step = recorder.push(StepType::DpTableUpdate, explanation);
        snapshot(step, costs, &dp);
        step.add_highlight(TABLE, Highlight::indices([i], HighlightStyle::Active))
            .set_var("i", &i)
            .set_context(StepContext::new(Some(LoopKind::For), Operation::Write, TABLE).at(i));
    }

    let (last, second_last) = (dp[n - 1].unwrap_or(0), dp[n - 2].unwrap_or(0));
    let result = last.min(second_last);
    let step = recorder.push(
        StepType::Return,
        format!(
            "Leave from index {} or {}: the minimum cost is min({}, {}) = {}.",
            n - 2,
            n - 1,
            second_last,
            last,
            result
        ),
    );
    snapshot(step, costs, &dp);
    let best_index = if last < second_last { n - 1 } else { n - 2 };
    step.add_highlight(TABLE, Highlight::indices([best_index], HighlightStyle::Match))
        .set_var("result", &result);
    finish(recorder)
}

fn finish(recorder: StepRecorder) -> Vec<Step> {
    let steps = recorder.finish();
    tracing::debug!(steps = steps.len(), "min-cost-array generated");
    steps
}
