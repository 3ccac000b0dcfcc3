mod common;

use common::{apply, entities, entity, failure, ids, int_ids, loaded};
use serde_json::json;
use stockroom::resource::{
    EntityId, Lifecycle, OperationKind, OperationStatus, ResourceAction, ResourceKind,
    ResourceState,
};

// -- Load ---------------------------------------------------------------------

#[test]
fn load_success_yields_exactly_the_payload_in_order() {
    for kind in ResourceKind::ALL {
        let state = loaded(kind, &[3, 1, 2]);
        assert_eq!(ids(&state), int_ids(&[3, 1, 2]), "{kind}");
        assert_eq!(state.load_status(), OperationStatus::Succeeded);
    }
}

#[test]
fn load_success_overwrites_previous_collection() {
    let state = loaded(ResourceKind::Products, &[1, 2, 3]);
    let state = apply(
        state,
        ResourceKind::Products,
        ResourceAction::Load(Lifecycle::Succeeded(entities(&[9]))),
    );
    assert_eq!(ids(&state), int_ids(&[9]));
}

#[test]
fn load_scenario_started_failed_succeeded() {
    for kind in ResourceKind::ALL {
        let state = apply(
            ResourceState::default(),
            kind,
            ResourceAction::Load(Lifecycle::Started),
        );
        assert_eq!(state.load_status(), OperationStatus::Loading);
        assert!(state.error().is_none());

        let state = apply(
            state,
            kind,
            ResourceAction::Load(Lifecycle::Failed(failure("network error"))),
        );
        assert_eq!(state.load_status(), OperationStatus::Failed);
        assert_eq!(state.error(), Some(&failure("network error")));
        assert!(state.is_empty());

        let state = apply(
            state,
            kind,
            ResourceAction::Load(Lifecycle::Succeeded(vec![json!({"id": 1}), json!({"id": 2})])),
        );
        assert_eq!(state.load_status(), OperationStatus::Succeeded);
        assert_eq!(ids(&state), int_ids(&[1, 2]));
    }
}

#[test]
fn reload_keeps_stale_items_visible_until_new_result() {
    let state = loaded(ResourceKind::Supplies, &[1, 2]);
    let state = apply(state, ResourceKind::Supplies, ResourceAction::Load(Lifecycle::Started));
    assert_eq!(state.load_status(), OperationStatus::Loading);
    assert_eq!(ids(&state), int_ids(&[1, 2]));

    let state = apply(
        state,
        ResourceKind::Supplies,
        ResourceAction::Load(Lifecycle::Failed(failure("timeout"))),
    );
    assert_eq!(ids(&state), int_ids(&[1, 2]));
}

#[test]
fn load_started_clears_the_shared_error() {
    let state = apply(
        ResourceState::default(),
        ResourceKind::Products,
        ResourceAction::Load(Lifecycle::Failed(failure("offline"))),
    );
    let state = apply(state, ResourceKind::Products, ResourceAction::Load(Lifecycle::Started));
    assert!(state.error().is_none());
    assert!(state.operation(OperationKind::Load).error().is_none());
}

// -- Create -------------------------------------------------------------------

#[test]
fn create_appends_and_is_idempotent() {
    for kind in ResourceKind::ALL {
        let state = loaded(kind, &[1]);
        let state = apply(state, kind, ResourceAction::Create(Lifecycle::Succeeded(entity(2))));
        assert_eq!(ids(&state), int_ids(&[1, 2]));

        let again = apply(
            state.clone(),
            kind,
            ResourceAction::Create(Lifecycle::Succeeded(entity(2))),
        );
        assert_eq!(again.items(), state.items());

        let duplicate = apply(state, kind, ResourceAction::Create(Lifecycle::Succeeded(entity(1))));
        assert_eq!(ids(&duplicate), int_ids(&[1, 2]));
    }
}

#[test]
fn create_acknowledgement_leaves_collection_untouched() {
    let state = loaded(ResourceKind::ProductMovements, &[1]);
    for ack in [json!(null), json!({"ok": true}), json!("created")] {
        let next = apply(
            state.clone(),
            ResourceKind::ProductMovements,
            ResourceAction::Create(Lifecycle::Succeeded(ack)),
        );
        assert_eq!(next.items(), state.items());
        assert_eq!(next.status(OperationKind::Create), OperationStatus::Succeeded);
    }
}

#[test]
fn create_started_does_not_touch_load_status() {
    let state = loaded(ResourceKind::Products, &[1]);
    let state = apply(state, ResourceKind::Products, ResourceAction::Create(Lifecycle::Started));
    assert_eq!(state.load_status(), OperationStatus::Succeeded);
    assert_eq!(state.status(OperationKind::Create), OperationStatus::Loading);
}

#[test]
fn product_create_failure_is_surfaced() {
    let state = apply(
        ResourceState::default(),
        ResourceKind::Products,
        ResourceAction::Create(Lifecycle::Failed(failure("name required"))),
    );
    assert_eq!(state.error(), Some(&failure("name required")));
    assert_eq!(
        state.operation(OperationKind::Create).error(),
        Some(&failure("name required"))
    );
    assert_eq!(state.status(OperationKind::Create), OperationStatus::Failed);
}

#[test]
fn movement_write_failures_stay_out_of_shared_state() {
    for kind in [ResourceKind::ProductMovements, ResourceKind::SupplyMovements] {
        for action in [
            ResourceAction::Create(Lifecycle::Failed(failure("invalid quantity"))),
            ResourceAction::Update(Lifecycle::Failed(failure("invalid quantity"))),
            ResourceAction::Delete(Lifecycle::Failed(failure("invalid quantity"))),
        ] {
            let operation = action.operation();
            let state = apply(loaded(kind, &[1]), kind, action);
            assert!(state.error().is_none(), "{kind} {operation}");
            assert!(state.operation(operation).error().is_none());
            assert_eq!(state.status(operation), OperationStatus::Failed);
            assert_eq!(state.load_status(), OperationStatus::Succeeded);
        }
    }
}

#[test]
fn movement_load_failure_is_still_surfaced() {
    let state = apply(
        ResourceState::default(),
        ResourceKind::SupplyMovements,
        ResourceAction::Load(Lifecycle::Failed(failure("500"))),
    );
    assert_eq!(state.error(), Some(&failure("500")));
}

// -- Update -------------------------------------------------------------------

#[test]
fn update_replaces_matching_entity_in_place() {
    let state = loaded(ResourceKind::Supplies, &[1, 2, 3]);
    let state = apply(
        state,
        ResourceKind::Supplies,
        ResourceAction::Update(Lifecycle::Succeeded(json!({"id": 2, "name": "renamed"}))),
    );
    assert_eq!(ids(&state), int_ids(&[1, 2, 3]));
    let updated = state.get(&EntityId::from(2)).unwrap();
    assert_eq!(updated.get("name"), Some(&json!("renamed")));
}

#[test]
fn update_of_absent_id_changes_nothing() {
    let state = loaded(ResourceKind::Products, &[1, 2]);
    let next = apply(
        state.clone(),
        ResourceKind::Products,
        ResourceAction::Update(Lifecycle::Succeeded(json!({"id": 7, "name": "ghost"}))),
    );
    assert_eq!(next.items(), state.items());
}

#[test]
fn update_refreshes_the_selected_entity() {
    let state = loaded(ResourceKind::Products, &[1]);
    let state = apply(
        state,
        ResourceKind::Products,
        ResourceAction::FindById(Lifecycle::Succeeded(entity(1))),
    );
    let state = apply(
        state,
        ResourceKind::Products,
        ResourceAction::Update(Lifecycle::Succeeded(json!({"id": 1, "name": "fresh"}))),
    );
    assert_eq!(state.selected().unwrap().get("name"), Some(&json!("fresh")));
}

// -- Delete -------------------------------------------------------------------

#[test]
fn delete_removes_exactly_one_entity() {
    let state = loaded(ResourceKind::ProductMovements, &[1, 2, 3]);
    let state = apply(
        state,
        ResourceKind::ProductMovements,
        ResourceAction::Delete(Lifecycle::Succeeded(EntityId::from(2))),
    );
    assert_eq!(ids(&state), int_ids(&[1, 3]));
}

#[test]
fn delete_of_absent_id_is_noop() {
    let state = loaded(ResourceKind::Products, &[1, 2]);
    let next = apply(
        state.clone(),
        ResourceKind::Products,
        ResourceAction::Delete(Lifecycle::Succeeded(EntityId::from("2"))),
    );
    assert_eq!(next.items(), state.items());
}

// -- Find by id ---------------------------------------------------------------

#[test]
fn find_by_id_fills_selected_without_touching_collection() {
    let state = loaded(ResourceKind::Supplies, &[1]);
    let state = apply(
        state,
        ResourceKind::Supplies,
        ResourceAction::FindById(Lifecycle::Succeeded(entity(42))),
    );
    assert_eq!(state.selected().map(|e| e.id().clone()), Some(EntityId::from(42)));
    assert_eq!(ids(&state), int_ids(&[1]));
}

#[test]
fn deleting_the_selected_entity_clears_selection() {
    let state = loaded(ResourceKind::Supplies, &[1]);
    let state = apply(
        state,
        ResourceKind::Supplies,
        ResourceAction::FindById(Lifecycle::Succeeded(entity(1))),
    );
    let state = apply(
        state,
        ResourceKind::Supplies,
        ResourceAction::Delete(Lifecycle::Succeeded(EntityId::from(1))),
    );
    assert!(state.selected().is_none());
}

// -- Status independence ------------------------------------------------------

#[test]
fn statuses_only_change_for_their_own_operation() {
    let phases = |operation: OperationKind| -> Vec<ResourceAction> {
        match operation {
            OperationKind::Load => vec![
                ResourceAction::Load(Lifecycle::Started),
                ResourceAction::Load(Lifecycle::Failed(failure("x"))),
            ],
            OperationKind::Create => vec![
                ResourceAction::Create(Lifecycle::Started),
                ResourceAction::Create(Lifecycle::Failed(failure("x"))),
            ],
            OperationKind::Update => vec![
                ResourceAction::Update(Lifecycle::Started),
                ResourceAction::Update(Lifecycle::Failed(failure("x"))),
            ],
            OperationKind::Delete => vec![
                ResourceAction::Delete(Lifecycle::Started),
                ResourceAction::Delete(Lifecycle::Failed(failure("x"))),
            ],
            OperationKind::FindById => vec![
                ResourceAction::FindById(Lifecycle::Started),
                ResourceAction::FindById(Lifecycle::Failed(failure("x"))),
            ],
        }
    };

    for kind in ResourceKind::ALL {
        for target in OperationKind::ALL {
            let before = loaded(kind, &[1]);
            let mut state = before.clone();
            for action in phases(target) {
                state = apply(state, kind, action);
            }
            for other in OperationKind::ALL.into_iter().filter(|op| *op != target) {
                assert_eq!(
                    state.status(other),
                    before.status(other),
                    "{kind}: {target} changed {other}"
                );
            }
            assert_eq!(state.status(target), OperationStatus::Failed);
        }
    }
}

#[test]
fn newer_request_overwrites_status_of_older_one() {
    let state = loaded(ResourceKind::Products, &[1]);
    let state = apply(state, ResourceKind::Products, ResourceAction::Delete(Lifecycle::Started));
    let state = apply(
        state,
        ResourceKind::Products,
        ResourceAction::Delete(Lifecycle::Failed(failure("locked"))),
    );
    let state = apply(state, ResourceKind::Products, ResourceAction::Delete(Lifecycle::Started));
    assert_eq!(state.status(OperationKind::Delete), OperationStatus::Loading);
    assert!(state.operation(OperationKind::Delete).error().is_none());
}
