use k8s::CONDITION_TRUE;
use k8s::JobExt as _;
use k8s::POD_READY;
use k8s::PodExt as _;

use super::*;

fn pod(name: &str, ready: bool) -> corev1::Pod {
    let status = if ready { CONDITION_TRUE } else { "False" };
    corev1::Pod::new(name).with_condition(POD_READY, status)
}

fn job(name: &str, target: Option<i32>, succeeded: i32) -> batchv1::Job {
    batchv1::Job::new(name).completions(target).succeeded(succeeded)
}

#[test]
fn empty_snapshots_are_unsatisfied() {
    for snapshot in [Snapshot::Pods(vec![]), Snapshot::Jobs(vec![])] {
        let evaluation = snapshot.evaluate();
        assert!(!evaluation.satisfied, "{snapshot:?}");
        assert_eq!(evaluation.lines.len(), 1);
    }

    assert_eq!(
        Snapshot::Pods(vec![]).evaluate().lines,
        ["No Pods found yet..."]
    );
    assert_eq!(
        Snapshot::Jobs(vec![]).evaluate().lines,
        ["No Jobs found yet..."]
    );
}

#[test]
fn all_pods_ready() {
    let snapshot = Snapshot::Pods(vec![pod("a", true), pod("b", true)]);
    let evaluation = snapshot.evaluate();
    assert!(evaluation.satisfied);
    assert_eq!(
        evaluation.lines,
        ["Pod a --> Ready: true", "Pod b --> Ready: true"]
    );
}

#[test]
fn one_unready_pod_blocks() {
    let snapshot = Snapshot::Pods(vec![pod("a", true), pod("b", false), pod("c", true)]);
    let evaluation = snapshot.evaluate();
    assert!(!evaluation.satisfied);
    assert_eq!(evaluation.lines[1], "Pod b --> Ready: false");
    assert_eq!(evaluation.lines.len(), 3);
}

#[test]
fn pod_without_conditions_is_unready() {
    let snapshot = Snapshot::Pods(vec![corev1::Pod::new("pending-0")]);
    assert!(!snapshot.evaluate().satisfied);
}

#[test]
fn lines_follow_fetch_order() {
    let snapshot = Snapshot::Pods(vec![pod("zeta", false), pod("alpha", true)]);
    let lines = snapshot.evaluate().lines;
    assert!(lines[0].starts_with("Pod zeta"));
    assert!(lines[1].starts_with("Pod alpha"));
}

#[test]
fn partially_completed_job() {
    let snapshot = Snapshot::Jobs(vec![job("j1", Some(3), 2)]);
    let evaluation = snapshot.evaluate();
    assert!(!evaluation.satisfied);
    assert_eq!(evaluation.lines, ["Job j1 --> 2/3 Completed"]);
}

#[test]
fn job_target_defaults_to_one() {
    let snapshot = Snapshot::Jobs(vec![job("migrate", None, 0)]);
    let evaluation = snapshot.evaluate();
    assert!(!evaluation.satisfied);
    assert_eq!(evaluation.lines, ["Job migrate --> 0/1 Completed"]);

    let snapshot = Snapshot::Jobs(vec![job("migrate", None, 1)]);
    assert!(snapshot.evaluate().satisfied);
}

#[test]
fn every_job_must_complete() {
    let done = job("seed", Some(2), 2);
    let over = job("keys", None, 3);
    let behind = job("index", Some(5), 4);

    let snapshot = Snapshot::Jobs(vec![done.clone(), over.clone()]);
    assert!(snapshot.evaluate().satisfied);

    let snapshot = Snapshot::Jobs(vec![done, behind, over]);
    assert!(!snapshot.evaluate().satisfied);
}

#[test]
fn database_snapshot_mirrors_reachability() {
    let reachable = Snapshot::Database {
        target: "root@db:3306/app".to_string(),
        reachable: true,
    };
    let evaluation = reachable.evaluate();
    assert!(evaluation.satisfied);
    assert_eq!(evaluation.lines, ["Database root@db:3306/app is reachable"]);

    let unreachable = Snapshot::Database {
        target: "root@db:3306/app".to_string(),
        reachable: false,
    };
    assert!(!unreachable.evaluate().satisfied);
    assert_eq!(unreachable.kind(), WaitKind::DbReachable);
}

#[test]
fn evaluation_is_repeatable() {
    let snapshot = Snapshot::Pods(vec![pod("a", true), pod("b", false)]);
    assert_eq!(snapshot.evaluate(), snapshot.evaluate());
}
