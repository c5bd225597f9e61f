use super::*;

#[test]
fn pod_without_status_is_not_ready() {
    let pod = corev1::Pod::new("web-0");
    assert!(pod.conditions().is_empty());
    assert!(!pod.is_ready());
}

#[test]
fn pod_ready_requires_true_status() {
    let pod = corev1::Pod::new("web-0").with_condition(POD_READY, "False");
    assert!(!pod.is_ready());

    let pod = pod.with_condition(POD_READY, CONDITION_TRUE);
    assert!(pod.is_ready());
}

#[test]
fn pod_other_conditions_do_not_count() {
    let pod = corev1::Pod::new("web-0")
        .with_condition("PodScheduled", CONDITION_TRUE)
        .with_condition("ContainersReady", CONDITION_TRUE);
    assert_eq!(pod.conditions().len(), 2);
    assert!(!pod.is_ready());
}

#[test]
fn job_target_defaults_to_one() {
    let job = batchv1::Job::new("migrate");
    assert_eq!(job.target_completions(), 1);
    assert_eq!(job.succeeded_count(), 0);
    assert!(!job.is_complete());

    let job = job.succeeded(1);
    assert!(job.is_complete());
}

#[test]
fn job_explicit_completions() {
    let job = batchv1::Job::new("batch").completions(3).succeeded(2);
    assert_eq!(job.target_completions(), 3);
    assert!(!job.is_complete());

    let job = job.succeeded(4);
    assert!(job.is_complete());
}
