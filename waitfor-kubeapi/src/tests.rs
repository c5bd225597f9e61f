use super::*;

#[test]
fn list_params_carry_selector() {
    let lp = list_params("app.kubernetes.io/instance=vault");
    assert_eq!(
        lp.label_selector.as_deref(),
        Some("app.kubernetes.io/instance=vault")
    );
    assert!(lp.field_selector.is_none());
}

#[test]
fn list_params_accept_set_based_selector() {
    let lp = list_params("tier in (db,cache),!canary");
    assert_eq!(lp.label_selector.as_deref(), Some("tier in (db,cache),!canary"));
}
