mod handlers;

use async_channel::Receiver;
use futures::StreamExt;
use serde::{Deserialize, Serialize};

use crate::{
    api::API,
    entities::{Coordinates, PlaceId},
    external::Notifier,
    registry::SortOrder,
};

/// Discrete user or system events, delivered one at a time by the hosting layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    MapClicked { coordinates: Coordinates },
    FormSubmitted,
    PlaceClicked { id: PlaceId },
    DeleteRequested { id: PlaceId },
    SortChanged { order: SortOrder },
}

/// Runs each event to completion before taking the next. Returns once every
/// sender has been dropped.
pub async fn serve<T: API>(api: &mut T, events: Receiver<Event>, notifier: &mut dyn Notifier) {
    futures::pin_mut!(events);

    while let Some(event) = events.next().await {
        handlers::handle(api, notifier, event);
    }

    tracing::info!("event stream closed");
}

#[test]
fn event_json_shape() {
    let event: Event = serde_json::from_str(
        r#"{"event":"map_clicked","coordinates":{"lat":1.5,"lng":2.5}}"#,
    )
    .unwrap();
    assert_eq!(
        event,
        Event::MapClicked {
            coordinates: Coordinates::new(1.5, 2.5)
        }
    );

    let event: Event = serde_json::from_str(r#"{"event":"sort_changed","order":"rating_ascending"}"#).unwrap();
    assert_eq!(
        event,
        Event::SortChanged {
            order: SortOrder::RatingAscending
        }
    );
}

#[test]
fn serve_routes_events_in_order() {
    use crate::api::{PlaceAPI, SelectionAPI};
    use crate::entities::{Category, PlaceFields};
    use crate::external::mock::MockNotifier;
    use tokio_test::block_on;

    let mut harness = crate::engine::started_harness();
    let mut notifier = MockNotifier::default();
    let (sender, receiver) = async_channel::unbounded();

    let at = Coordinates::new(1.0, 1.0);
    harness
        .form
        .push(PlaceFields::new("Cafe", "good", 3, Category::Western));
    harness
        .form
        .push(PlaceFields::new("Cafe2", "ok", 5, Category::Western));

    block_on(async {
        sender.send(Event::FormSubmitted).await.unwrap();
        sender.send(Event::MapClicked { coordinates: at }).await.unwrap();
        sender.send(Event::FormSubmitted).await.unwrap();
        sender.send(Event::FormSubmitted).await.unwrap();
    });
    drop(sender);

    block_on(serve(&mut harness.engine, receiver, &mut notifier));

    assert_eq!(
        notifier.messages(),
        vec!["select a location on the map first".to_string()]
    );
    assert_eq!(harness.engine.selection(), Some(at));

    let places = harness.engine.list_places(SortOrder::Insertion);
    assert_eq!(places.len(), 2);
    assert!(places.iter().all(|place| place.coordinates == at));
    assert_eq!(harness.list.names(), vec!["Cafe", "Cafe2"]);
}
