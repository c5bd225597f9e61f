pub use k8s_openapi::api::batch::v1 as batchv1;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

pub const POD_READY: &str = "Ready";
pub const CONDITION_TRUE: &str = "True";

pub trait PodExt {
    fn new(name: impl ToString) -> Self;
    fn with_condition(self, type_: impl ToString, status: impl ToString) -> Self;
    fn conditions(&self) -> &[corev1::PodCondition];
    fn is_ready(&self) -> bool;
}

impl PodExt for corev1::Pod {
    fn new(name: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::new(name);
        Self {
            metadata,
            ..default()
        }
    }

    fn with_condition(mut self, type_: impl ToString, status: impl ToString) -> Self {
        let condition = corev1::PodCondition {
            type_: type_.to_string(),
            status: status.to_string(),
            ..default()
        };
        self.status
            .get_or_insert_with(default)
            .conditions
            .get_or_insert_with(default)
            .push(condition);
        self
    }

    fn conditions(&self) -> &[corev1::PodCondition] {
        self.status
            .as_ref()
            .and_then(|status| status.conditions.as_deref())
            .unwrap_or_default()
    }

    /// A pod is ready when it carries a `Ready` condition with status `True`.
    fn is_ready(&self) -> bool {
        self.conditions()
            .iter()
            .any(|condition| condition.type_ == POD_READY && condition.status == CONDITION_TRUE)
    }
}

pub trait JobExt {
    fn new(name: impl ToString) -> Self;
    fn completions(self, completions: impl Into<Option<i32>>) -> Self;
    fn succeeded(self, succeeded: i32) -> Self;
    fn target_completions(&self) -> i32;
    fn succeeded_count(&self) -> i32;
    fn is_complete(&self) -> bool;
}

impl JobExt for batchv1::Job {
    fn new(name: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::new(name);
        Self {
            metadata,
            ..default()
        }
    }

    fn completions(mut self, completions: impl Into<Option<i32>>) -> Self {
        self.spec.get_or_insert_with(default).completions = completions.into();
        self
    }

    fn succeeded(mut self, succeeded: i32) -> Self {
        self.status.get_or_insert_with(default).succeeded = Some(succeeded);
        self
    }

    /// Number of successful runs the job asks for, `1` when `spec.completions` is unset.
    fn target_completions(&self) -> i32 {
        self.spec
            .as_ref()
            .and_then(|spec| spec.completions)
            .unwrap_or(1)
    }

    fn succeeded_count(&self) -> i32 {
        self.status
            .as_ref()
            .and_then(|status| status.succeeded)
            .unwrap_or_default()
    }

    fn is_complete(&self) -> bool {
        self.succeeded_count() >= self.target_completions()
    }
}

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}

#[cfg(test)]
mod tests;
