use super::*;

// There is no item list here, the probe outcome is the whole snapshot.
pub(super) fn evaluate(target: &str, reachable: bool) -> Evaluation {
    let line = if reachable {
        format!("Database {target} is reachable")
    } else {
        format!("Database {target} is not reachable")
    };
    Evaluation {
        satisfied: reachable,
        lines: vec![line],
    }
}
