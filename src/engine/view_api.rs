use super::Engine;

use crate::{
    api::ViewAPI,
    entities::{Place, PlaceId},
    error::Error,
    registry::SortOrder,
};

impl ViewAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn change_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.render_list();
    }

    fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[tracing::instrument(skip(self))]
    fn focus_place(&mut self, id: PlaceId) -> Result<Place, Error> {
        let place = self.registry.find(&id)?.clone();
        self.map.pan_to(place.coordinates, &self.config.pan);

        Ok(place)
    }
}

#[test]
fn change_sort_rerenders_by_rating() {
    use crate::api::PlaceAPI;
    use crate::entities::{Category, Coordinates, PlaceFields};

    let mut harness = super::started_harness();
    let at = Coordinates::new(1.0, 1.0);

    for (name, rating) in [("first", 5), ("middle", 3), ("last", 5)] {
        harness
            .engine
            .create_place(at, PlaceFields::new(name, "x", rating, Category::Western))
            .unwrap();
    }
    assert_eq!(harness.list.names(), vec!["first", "middle", "last"]);

    harness.engine.change_sort(SortOrder::RatingAscending);
    assert_eq!(harness.list.names(), vec!["middle", "first", "last"]);

    let canonical: Vec<String> = harness
        .engine
        .list_places(SortOrder::Insertion)
        .into_iter()
        .map(|place| place.name)
        .collect();
    assert_eq!(canonical, vec!["first", "middle", "last"]);

    harness.engine.change_sort(SortOrder::Insertion);
    assert_eq!(harness.list.names(), vec!["first", "middle", "last"]);
}

#[test]
fn new_places_follow_current_sort_order() {
    use crate::api::PlaceAPI;
    use crate::entities::{Category, Coordinates, PlaceFields};

    let mut harness = super::started_harness();
    let at = Coordinates::new(1.0, 1.0);
    harness.engine.change_sort(SortOrder::RatingAscending);

    harness
        .engine
        .create_place(at, PlaceFields::new("high", "x", 4, Category::Cafe))
        .unwrap();
    harness
        .engine
        .create_place(at, PlaceFields::new("low", "x", 1, Category::Cafe))
        .unwrap();

    assert_eq!(harness.list.names(), vec!["low", "high"]);
}

#[test]
fn focus_place_pans_map() {
    use crate::api::PlaceAPI;
    use crate::entities::{Category, Coordinates, PlaceFields};

    let mut harness = super::started_harness();
    let at = Coordinates::new(2.5, 4.5);
    let place = harness
        .engine
        .create_place(at, PlaceFields::new("Cafe", "x", 2, Category::Cafe))
        .unwrap();

    harness.engine.focus_place(place.id).unwrap();
    assert_eq!(harness.map.state().pans, vec![at]);

    assert!(harness
        .engine
        .focus_place(PlaceId::new())
        .unwrap_err()
        .is_not_found());
    assert_eq!(harness.map.state().pans.len(), 1);
}
