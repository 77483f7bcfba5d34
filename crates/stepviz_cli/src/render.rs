use std::fmt::Write as _;

use serde::Serialize;
use stepviz_steps::{Algorithm, Step};

#[derive(Serialize)]
struct TraceFile<'a> {
    algorithm: Algorithm,
    steps: &'a [Step],
}

/// `#id step_type: explanation {vars}`
pub fn text_line(step: &Step) -> String {
    let mut line = format!("#{} {}: {}", step.id, step.step_type, step.explanation);
    if !step.variables.is_empty() {
        let vars = serde_json::to_string(&step.variables).unwrap_or_default();
        let _ = write!(line, " {}", vars);
    }
    line
}

pub fn text(steps: &[Step]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push_str(&text_line(step));
        out.push('\n');
    }
    out
}

pub fn json(algorithm: Algorithm, steps: &[Step]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(&TraceFile { algorithm, steps })?;
    out.push('\n');
    Ok(out)
}
