use super::*;

#[test]
fn loading_tracks_outstanding_requests() {
    let mut state = AppState::default();
    assert!(!state.is_loading());

    state.begin_request();
    state.begin_request();
    assert!(state.is_loading());

    state.end_request();
    assert!(state.is_loading());
    state.end_request();
    assert!(!state.is_loading());
}

#[test]
fn end_request_saturates_at_zero() {
    let mut state = AppState::default();
    state.end_request();
    assert!(!state.is_loading());
    state.begin_request();
    assert!(state.is_loading());
}

#[test]
fn notification_ids_are_monotonic() {
    let mut state = AppState::default();
    let a = state.notify_error("boom");
    let b = state.notify(NoticeLevel::Info, "ok");
    assert!(b > a);
    assert_eq!(state.notifications().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = AppState::default();
    let a = state.notify_error("one");
    let _b = state.notify_error("two");
    state.dismiss(a);

    assert_eq!(state.notifications().len(), 1);
    assert_eq!(state.notifications()[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = AppState::default();
    state.notify_error("one");
    state.dismiss(999);
    assert_eq!(state.notifications().len(), 1);
}

#[test]
fn clear_notifications_empties_the_list() {
    let mut state = AppState::default();
    state.notify_error("one");
    state.notify_error("two");
    state.clear_notifications();
    assert!(state.notifications().is_empty());
}

#[test]
fn sidebar_toggle_flips_state() {
    let mut state = AppState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
    state.toggle_sidebar();
    assert!(!state.sidebar_collapsed);
}
