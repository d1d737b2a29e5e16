use std::collections::HashMap;

use crate::entities::{Place, PlaceId};
use crate::error::{invalid_state_error, not_found_error, Error};
use crate::external::{MapRenderer, MarkerHandle};

/// Tracks which marker stands for which place. Lookups go through the place id
/// only; two places may share coordinates.
#[derive(Debug, Default)]
pub struct MarkerCorrelator {
    markers: HashMap<PlaceId, MarkerHandle>,
}

impl MarkerCorrelator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, map: &mut dyn MapRenderer, place: &Place) -> Result<MarkerHandle, Error> {
        if self.markers.contains_key(&place.id) {
            return Err(invalid_state_error());
        }

        let handle = map.add_marker(place.coordinates, &place.name)?;
        self.markers.insert(place.id, handle);

        Ok(handle)
    }

    /// Keeps the association if the map refuses to remove the marker.
    pub fn detach(&mut self, map: &mut dyn MapRenderer, id: &PlaceId) -> Result<MarkerHandle, Error> {
        let handle = self.handle(id).ok_or_else(not_found_error)?;

        map.remove_marker(handle)?;
        self.markers.remove(id);

        Ok(handle)
    }

    pub fn handle(&self, id: &PlaceId) -> Option<MarkerHandle> {
        self.markers.get(id).copied()
    }

    pub fn contains(&self, id: &PlaceId) -> bool {
        self.markers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
fn place_at(name: &str, lat: f64, lng: f64) -> Place {
    use crate::entities::{Category, Coordinates, PlaceFields};

    let fields = PlaceFields::new(name, "comment", 3, Category::Western);
    Place::new(Coordinates::new(lat, lng), fields).unwrap()
}

#[test]
fn attach_records_handle() {
    use crate::external::mock::MockMap;

    let mut map = MockMap::default();
    let mut correlator = MarkerCorrelator::new();
    let place = place_at("Cafe", 1.0, 1.0);

    let handle = correlator.attach(&mut map, &place).unwrap();

    assert_eq!(correlator.handle(&place.id), Some(handle));
    assert_eq!(map.state().markers[&handle].1, "Cafe");
}

#[test]
fn attach_twice_is_rejected() {
    use crate::error::INVALID_STATE_ERROR;
    use crate::external::mock::MockMap;

    let mut map = MockMap::default();
    let mut correlator = MarkerCorrelator::new();
    let place = place_at("Cafe", 1.0, 1.0);

    correlator.attach(&mut map, &place).unwrap();
    let err = correlator.attach(&mut map, &place).unwrap_err();

    assert_eq!(err.code, INVALID_STATE_ERROR);
    assert_eq!(map.state().markers.len(), 1);
}

#[test]
fn detach_resolves_by_id_when_coordinates_are_shared() {
    use crate::external::mock::MockMap;

    let mut map = MockMap::default();
    let mut correlator = MarkerCorrelator::new();
    let a = place_at("Cafe", 1.0, 1.0);
    let b = place_at("Cafe2", 1.0, 1.0);

    let handle_a = correlator.attach(&mut map, &a).unwrap();
    let handle_b = correlator.attach(&mut map, &b).unwrap();

    assert_eq!(correlator.detach(&mut map, &a.id).unwrap(), handle_a);

    assert_eq!(map.state().removed, vec![handle_a]);
    assert!(map.state().markers.contains_key(&handle_b));
    assert_eq!(correlator.handle(&b.id), Some(handle_b));
    assert_eq!(correlator.len(), 1);
}

#[test]
fn detach_unknown_id_is_not_found() {
    use crate::external::mock::MockMap;

    let mut map = MockMap::default();
    let mut correlator = MarkerCorrelator::new();

    let err = correlator.detach(&mut map, &PlaceId::new()).unwrap_err();

    assert!(err.is_not_found());
    assert!(map.state().removed.is_empty());
}

#[test]
fn detach_keeps_association_when_map_fails() {
    use crate::external::mock::MockMap;

    let mut map = MockMap::default();
    let mut correlator = MarkerCorrelator::new();
    let place = place_at("Cafe", 1.0, 1.0);
    correlator.attach(&mut map, &place).unwrap();

    map.state().fail_remove = true;

    assert!(correlator.detach(&mut map, &place.id).is_err());
    assert!(correlator.contains(&place.id));
}
