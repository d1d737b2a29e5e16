use super::{Engine, MapState};

use crate::{
    api::PlaceAPI,
    entities::{Coordinates, Place, PlaceFields, PlaceId},
    error::{map_unavailable_error, Error},
    registry::SortOrder,
};

impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn create_place(&mut self, coordinates: Coordinates, fields: PlaceFields) -> Result<Place, Error> {
        if self.map_state != MapState::Ready {
            return Err(map_unavailable_error());
        }

        let place = self.registry.create(coordinates, fields)?;

        if let Err(err) = self.correlator.attach(self.map.as_mut(), &place) {
            tracing::warn!("marker for {} failed, rolling back: {}", place.id, err);
            self.registry.delete(&place.id)?;
            return Err(err);
        }

        tracing::info!("created place {} \"{}\"", place.id, place.name);
        self.render_list();

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    fn delete_place(&mut self, id: PlaceId) -> Result<Place, Error> {
        self.registry.find(&id)?;

        self.correlator.detach(self.map.as_mut(), &id)?;
        let place = self.registry.delete(&id)?;

        tracing::info!("deleted place {} \"{}\"", place.id, place.name);
        self.render_list();

        Ok(place)
    }

    fn find_place(&self, id: PlaceId) -> Result<Place, Error> {
        self.registry.find(&id).cloned()
    }

    fn list_places(&self, order: SortOrder) -> Vec<Place> {
        self.registry.list(order)
    }
}

#[test]
fn create_place_attaches_marker_and_renders() {
    use crate::entities::Category;

    let mut harness = super::started_harness();
    let fields = PlaceFields::new("Cafe", "good", 3, Category::Western);

    let place = harness
        .engine
        .create_place(Coordinates::new(1.0, 1.0), fields)
        .unwrap();

    assert_eq!(harness.engine.find_place(place.id).unwrap(), place);
    assert_eq!(harness.engine.marker_count(), 1);
    assert_eq!(harness.map.state().markers.len(), 1);
    assert_eq!(harness.list.names(), vec!["Cafe"]);
}

#[test]
fn create_place_requires_ready_map() {
    use crate::entities::Category;

    let mut harness = super::harness();
    let fields = PlaceFields::new("Cafe", "good", 3, Category::Western);

    let err = harness
        .engine
        .create_place(Coordinates::new(1.0, 1.0), fields)
        .unwrap_err();

    assert_eq!(err, map_unavailable_error());
    assert!(harness.engine.is_empty());
}

#[test]
fn create_place_with_empty_name_is_rejected() {
    use crate::entities::Category;

    let mut harness = super::started_harness();
    let fields = PlaceFields::new("", "x", 3, Category::Western);

    let err = harness
        .engine
        .create_place(Coordinates::new(1.0, 1.0), fields)
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(harness.engine.len(), 0);
    assert_eq!(harness.engine.marker_count(), 0);
}

#[test]
fn create_place_rolls_back_when_marker_fails() {
    use crate::entities::Category;

    let mut harness = super::started_harness();
    harness.map.state().fail_add = true;
    let fields = PlaceFields::new("Cafe", "good", 3, Category::Western);

    assert!(harness
        .engine
        .create_place(Coordinates::new(1.0, 1.0), fields)
        .is_err());

    assert!(harness.engine.is_empty());
    assert_eq!(harness.engine.marker_count(), 0);
    assert!(harness.list.names().is_empty());
}

#[test]
fn delete_keeps_place_sharing_coordinates() {
    use crate::entities::Category;

    let mut harness = super::started_harness();
    let at = Coordinates::new(1.0, 1.0);

    let a = harness
        .engine
        .create_place(at, PlaceFields::new("Cafe", "good", 3, Category::Western))
        .unwrap();
    let b = harness
        .engine
        .create_place(at, PlaceFields::new("Cafe2", "ok", 5, Category::Western))
        .unwrap();

    let removed = harness.engine.delete_place(a.id).unwrap();

    assert_eq!(removed.id, a.id);
    assert!(harness.engine.find_place(a.id).unwrap_err().is_not_found());
    assert_eq!(harness.engine.find_place(b.id).unwrap(), b);
    assert_eq!(harness.list.names(), vec!["Cafe2"]);
    assert_eq!(harness.engine.marker_count(), 1);
    assert_eq!(harness.map.state().markers.len(), 1);
    assert_eq!(harness.map.state().markers.values().next().unwrap().1, "Cafe2");
}

#[test]
fn delete_unknown_place_is_not_found() {
    use crate::error::not_found_error;

    let mut harness = super::started_harness();

    let err = harness.engine.delete_place(PlaceId::new()).unwrap_err();

    assert_eq!(err, not_found_error());
}

#[test]
fn delete_is_a_no_op_when_marker_removal_fails() {
    use crate::entities::Category;

    let mut harness = super::started_harness();
    let place = harness
        .engine
        .create_place(
            Coordinates::new(1.0, 1.0),
            PlaceFields::new("Cafe", "good", 3, Category::Western),
        )
        .unwrap();
    harness.map.state().fail_remove = true;

    assert!(harness.engine.delete_place(place.id).is_err());

    assert_eq!(harness.engine.len(), 1);
    assert_eq!(harness.engine.marker_count(), 1);
    assert_eq!(harness.list.names(), vec!["Cafe"]);
}

#[test]
fn list_length_matches_marker_count() {
    use crate::entities::Category;

    let mut harness = super::started_harness();
    let mut ids = Vec::new();

    for i in 0..10 {
        let fields = PlaceFields::new(&format!("place {}", i), "x", i % 5 + 1, Category::Local);
        let place = harness
            .engine
            .create_place(Coordinates::new(i as f64, 0.0), fields)
            .unwrap();
        ids.push(place.id);
    }

    for id in ids.iter().step_by(3) {
        harness.engine.delete_place(*id).unwrap();
    }

    let listed = harness.engine.list_places(SortOrder::Insertion).len();
    assert_eq!(listed, 6);
    assert_eq!(listed, harness.engine.marker_count());
    assert_eq!(listed, harness.list.names().len());
    assert_eq!(listed, harness.map.state().markers.len());
}
