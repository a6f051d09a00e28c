//! Shared execute-time replay of an evaluation record

use verdict_core::{Evaluation, ExecutionError, Facts, Rules};

/// Execute the children named in the record, in record order.
///
/// A name with no matching child means the record did not come from an
/// immediately preceding evaluate of this group.
pub(crate) fn execute_selection(
    group: &str,
    rules: &Rules,
    facts: &mut Facts,
    evaluation: &Evaluation,
) -> Result<(), ExecutionError> {
    for (name, child_evaluation) in evaluation.children() {
        let child = rules.get(name).ok_or_else(|| {
            ExecutionError::ActionFailed(format!(
                "group '{}' has no child named '{}' (stale evaluation record?)",
                group, name
            ))
        })?;
        child.execute(facts, child_evaluation)?;
    }
    Ok(())
}
