use kube::ResourceExt as _;

use k8s::JobExt as _;

use super::*;

pub(super) fn evaluate(jobs: &[batchv1::Job]) -> Evaluation {
    if jobs.is_empty() {
        return Evaluation::nothing_found(WaitKind::JobComplete);
    }

    let mut satisfied = true;
    let lines = jobs
        .iter()
        .map(|job| {
            satisfied &= job.is_complete();
            let done = job.succeeded_count();
            let want = job.target_completions();
            format!("Job {} --> {done}/{want} Completed", job.name_any())
        })
        .collect();

    Evaluation { satisfied, lines }
}
