mod common;

use common::{entities, entity, failure, ids, int_ids};
use stockroom::mvi::Reducer;
use stockroom::resource::{Lifecycle, ResourceAction, ResourceIntent, ResourceKind};
use stockroom::session::{AuthToken, SessionIntent};
use stockroom::store::{AppIntent, AppReducer, AppState, Store};

fn load(kind: ResourceKind, raw: &[i64]) -> AppIntent {
    ResourceIntent::new(kind, ResourceAction::Load(Lifecycle::Succeeded(entities(raw)))).into()
}

#[test]
fn event_for_one_resource_leaves_others_untouched() {
    let mut state = AppState::default();
    for kind in ResourceKind::ALL {
        state = AppReducer::reduce(state, load(kind, &[1, 2]));
    }

    for target in ResourceKind::ALL {
        let before = state.clone();
        let after = AppReducer::reduce(
            state.clone(),
            ResourceIntent::new(
                target,
                ResourceAction::Create(Lifecycle::Succeeded(entity(3))),
            )
            .into(),
        );
        for other in ResourceKind::ALL.into_iter().filter(|k| *k != target) {
            assert_eq!(after.resource(other), before.resource(other), "{target} leaked into {other}");
        }
        assert_eq!(ids(after.resource(target)), int_ids(&[1, 2, 3]));
        assert_eq!(after.session, before.session);
    }
}

#[test]
fn reset_clears_every_slice() {
    let state = AppReducer::reduce(AppState::default(), load(ResourceKind::Supplies, &[5]));
    let state = AppReducer::reduce(
        state,
        SessionIntent::LoginSucceeded {
            user: "ana".into(),
            token: AuthToken::new("t"),
        }
        .into(),
    );
    let state = AppReducer::reduce(state, AppIntent::Reset);
    assert_eq!(state, AppState::default());
}

#[test]
fn global_flags_aggregate_all_resources() {
    let state = AppReducer::reduce(
        AppState::default(),
        ResourceIntent::new(ResourceKind::SupplyMovements, ResourceAction::Load(Lifecycle::Started))
            .into(),
    );
    assert!(state.is_loading());

    let state = AppReducer::reduce(
        state,
        ResourceIntent::new(
            ResourceKind::SupplyMovements,
            ResourceAction::Load(Lifecycle::Failed(failure("gateway timeout"))),
        )
        .into(),
    );
    assert!(!state.is_loading());
    assert_eq!(
        state.errors(),
        vec![(ResourceKind::SupplyMovements, "gateway timeout".to_string())]
    );
}

#[test]
fn store_handle_shares_state_between_clones() {
    let store = Store::new();
    let view = store.clone();
    store.dispatch(load(ResourceKind::Products, &[1]));
    assert_eq!(ids(&view.resource(ResourceKind::Products)), int_ids(&[1]));
    assert_eq!(view.revision(), 1);
}

#[test]
fn snapshots_are_detached_from_later_events() {
    let store = Store::new();
    store.dispatch(load(ResourceKind::Products, &[1]));
    let snapshot = store.snapshot();
    store.dispatch(load(ResourceKind::Products, &[2, 3]));
    assert_eq!(ids(&snapshot.products), int_ids(&[1]));
    assert_eq!(ids(&store.resource(ResourceKind::Products)), int_ids(&[2, 3]));
}

#[test]
fn reset_through_handle_empties_the_store() {
    let store = Store::new();
    store.dispatch(load(ResourceKind::ProductMovements, &[1, 2]));
    store.reset();
    assert!(store.resource(ResourceKind::ProductMovements).is_empty());
    assert_eq!(store.snapshot(), AppState::default());
}

#[tokio::test]
async fn subscribers_wake_on_every_event() {
    let store = Store::new();
    let mut changes = store.subscribe();

    let writer = store.clone();
    tokio::spawn(async move {
        writer.dispatch(load(ResourceKind::Supplies, &[4]));
    });

    changes.changed().await.unwrap();
    assert!(*changes.borrow_and_update() >= 1);
    assert_eq!(ids(&store.resource(ResourceKind::Supplies)), int_ids(&[4]));
}
