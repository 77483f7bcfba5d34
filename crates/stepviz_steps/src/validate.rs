use crate::error::TraceError;
use crate::step::{HighlightTarget, Step};

/// Checks the filmstrip invariants every generator promises: non-empty,
/// `steps[i].id == i`, exactly one terminal step and it is the last one,
/// and every highlight points at something that exists in its step.
pub fn validate_trace(steps: &[Step]) -> Result<(), TraceError> {
    let Some(last) = steps.last() else {
        return Err(TraceError::Empty);
    };

    for (position, step) in steps.iter().enumerate() {
        if step.id != position {
            return Err(TraceError::IdMismatch {
                position,
                id: step.id,
            });
        }
        if step.is_terminal() && position + 1 != steps.len() {
            return Err(TraceError::TerminalNotLast { position });
        }
        check_highlights(step)?;
    }

    if !last.is_terminal() {
        return Err(TraceError::MissingTerminal);
    }
    Ok(())
}

fn check_highlights(step: &Step) -> Result<(), TraceError> {
    for (name, highlights) in &step.highlights {
        let Some(structure) = step.data_structures.get(name) else {
            return Err(TraceError::UnknownHighlightTarget {
                step: step.id,
                structure: name.clone(),
            });
        };
        for highlight in highlights {
            let (ids, len) = match &highlight.target {
                HighlightTarget::Indices(ids) => (ids, structure.data.indexable_len()),
                HighlightTarget::Nodes(ids) => (ids, structure.data.node_count()),
                HighlightTarget::Links(_) | HighlightTarget::Keys(_) => continue,
            };
            let Some(len) = len else { continue };
            if let Some(&index) = ids.iter().find(|&&i| i >= len) {
                return Err(TraceError::IndexOutOfRange {
                    step: step.id,
                    structure: name.clone(),
                    index,
                    len,
                });
            }
        }
    }
    Ok(())
}
