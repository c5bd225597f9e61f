use kube::ResourceExt as _;

use k8s::PodExt as _;

use super::*;

pub(super) fn evaluate(pods: &[corev1::Pod]) -> Evaluation {
    if pods.is_empty() {
        return Evaluation::nothing_found(WaitKind::PodReady);
    }

    let mut satisfied = true;
    let lines = pods
        .iter()
        .map(|pod| {
            let ready = pod.is_ready();
            satisfied &= ready;
            format!("Pod {} --> Ready: {ready}", pod.name_any())
        })
        .collect();

    Evaluation { satisfied, lines }
}
