use super::Event;

use crate::{api::API, error::Error, external::Notifier};

#[tracing::instrument(skip(api, notifier))]
pub fn handle<T: API>(api: &mut T, notifier: &mut dyn Notifier, event: Event) {
    let result = match event {
        Event::MapClicked { coordinates } => api.select_location(coordinates),
        Event::FormSubmitted => api.submit_form().map(|_| ()),
        Event::PlaceClicked { id } => api.focus_place(id).map(|_| ()),
        Event::DeleteRequested { id } => api.delete_place(id).map(|_| ()),
        Event::SortChanged { order } => {
            api.change_sort(order);
            Ok(())
        }
    };

    if let Err(err) = result {
        report(notifier, err);
    }
}

/// User-correctable errors become a notice; a missing place is dropped quietly.
fn report(notifier: &mut dyn Notifier, err: Error) {
    if err.is_user_facing() {
        notifier.notify(&err.message);
    } else if err.is_not_found() {
        tracing::debug!("ignored event for missing place");
    } else {
        tracing::warn!("event failed: {}", err);
    }
}

#[test]
fn delete_of_missing_place_is_silent() {
    use crate::entities::PlaceId;
    use crate::external::mock::MockNotifier;

    let mut harness = crate::engine::started_harness();
    let mut notifier = MockNotifier::default();

    handle(
        &mut harness.engine,
        &mut notifier,
        Event::DeleteRequested { id: PlaceId::new() },
    );

    assert!(notifier.messages().is_empty());
}

#[test]
fn validation_failure_is_reported() {
    use crate::entities::{Category, Coordinates, PlaceFields};
    use crate::external::mock::MockNotifier;

    let mut harness = crate::engine::started_harness();
    let mut notifier = MockNotifier::default();
    harness
        .form
        .push(PlaceFields::new("", "x", 3, Category::Western));

    handle(
        &mut harness.engine,
        &mut notifier,
        Event::MapClicked {
            coordinates: Coordinates::new(1.0, 1.0),
        },
    );
    handle(&mut harness.engine, &mut notifier, Event::FormSubmitted);

    assert_eq!(notifier.messages(), vec!["name should not be empty".to_string()]);
    assert!(harness.engine.is_empty());
}

#[test]
fn delete_and_focus_route_by_id() {
    use crate::api::PlaceAPI;
    use crate::entities::{Category, Coordinates, PlaceFields};
    use crate::external::mock::MockNotifier;

    let mut harness = crate::engine::started_harness();
    let mut notifier = MockNotifier::default();
    let at = Coordinates::new(1.0, 1.0);

    let a = harness
        .engine
        .create_place(at, PlaceFields::new("Cafe", "good", 3, Category::Western))
        .unwrap();
    let b = harness
        .engine
        .create_place(at, PlaceFields::new("Cafe2", "ok", 5, Category::Western))
        .unwrap();

    handle(&mut harness.engine, &mut notifier, Event::DeleteRequested { id: a.id });
    handle(&mut harness.engine, &mut notifier, Event::PlaceClicked { id: b.id });

    assert_eq!(harness.list.names(), vec!["Cafe2"]);
    assert_eq!(harness.map.state().pans, vec![at]);
    assert!(notifier.messages().is_empty());
}
