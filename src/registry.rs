use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Place, PlaceFields, PlaceId};
use crate::error::{not_found_error, validation_error, Error};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Insertion,
    RatingAscending,
}

impl SortOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::RatingAscending => "rating_ascending",
        }
    }
}

/// Accepts the sort selector's option values as well as the canonical names.
impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" | "insertion" => Ok(Self::Insertion),
            "rating" | "rating_ascending" => Ok(Self::RatingAscending),
            _ => Err(validation_error("unknown sort order")),
        }
    }
}

/// Canonical store of live places, kept in insertion order (newest last).
#[derive(Debug, Default)]
pub struct PlaceRegistry {
    places: Vec<Place>,
}

impl PlaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, coordinates: Coordinates, fields: PlaceFields) -> Result<Place, Error> {
        let place = Place::new(coordinates, fields)?;
        self.places.push(place.clone());

        Ok(place)
    }

    pub fn delete(&mut self, id: &PlaceId) -> Result<Place, Error> {
        let index = self
            .places
            .iter()
            .position(|place| &place.id == id)
            .ok_or_else(not_found_error)?;

        Ok(self.places.remove(index))
    }

    pub fn find(&self, id: &PlaceId) -> Result<&Place, Error> {
        self.places
            .iter()
            .find(|place| &place.id == id)
            .ok_or_else(not_found_error)
    }

    /// Returns a fresh sequence; canonical order is left untouched.
    pub fn list(&self, order: SortOrder) -> Vec<Place> {
        let mut places = self.places.clone();

        match order {
            SortOrder::Insertion => {}
            // sort_by_key is stable, equal ratings keep insertion order
            SortOrder::RatingAscending => places.sort_by_key(|place| place.rating),
        }

        places
    }

    pub fn ids(&self) -> impl Iterator<Item = &PlaceId> + '_ {
        self.places.iter().map(|place| &place.id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
fn fields(name: &str, rating: i64) -> PlaceFields {
    use crate::entities::Category;

    PlaceFields::new(name, "comment", rating, Category::Western)
}

#[test]
fn create_assigns_distinct_ids() {
    use std::collections::HashSet;

    let mut registry = PlaceRegistry::new();
    let at = Coordinates::new(1.0, 1.0);

    let ids: HashSet<PlaceId> = (0..1000)
        .map(|i| registry.create(at, fields(&format!("place {}", i), 3)).unwrap().id)
        .collect();

    assert_eq!(ids.len(), 1000);
    assert_eq!(registry.len(), 1000);
}

#[test]
fn create_then_find_and_delete() {
    let mut registry = PlaceRegistry::new();

    let place = registry
        .create(Coordinates::new(1.0, 1.0), fields("Cafe", 3))
        .unwrap();
    assert_eq!(registry.find(&place.id).unwrap(), &place);

    let removed = registry.delete(&place.id).unwrap();
    assert_eq!(removed, place);
    assert!(registry.find(&place.id).unwrap_err().is_not_found());
    assert!(registry.is_empty());
}

#[test]
fn delete_unknown_id_is_a_reported_no_op() {
    let mut registry = PlaceRegistry::new();
    registry
        .create(Coordinates::new(1.0, 1.0), fields("Cafe", 3))
        .unwrap();

    let result = registry.delete(&PlaceId::new());

    assert!(result.unwrap_err().is_not_found());
    assert_eq!(registry.len(), 1);
}

#[test]
fn create_with_empty_name_does_not_mutate() {
    let mut registry = PlaceRegistry::new();

    let result = registry.create(Coordinates::new(1.0, 1.0), fields("", 3));

    assert!(result.unwrap_err().is_validation());
    assert_eq!(registry.len(), 0);
}

#[test]
fn list_by_rating_is_stable() {
    let mut registry = PlaceRegistry::new();
    let at = Coordinates::new(1.0, 1.0);

    let first = registry.create(at, fields("first", 5)).unwrap();
    let middle = registry.create(at, fields("middle", 3)).unwrap();
    let last = registry.create(at, fields("last", 5)).unwrap();

    let sorted: Vec<PlaceId> = registry
        .list(SortOrder::RatingAscending)
        .iter()
        .map(|place| place.id)
        .collect();
    assert_eq!(sorted, vec![middle.id, first.id, last.id]);

    let canonical: Vec<PlaceId> = registry.ids().copied().collect();
    assert_eq!(canonical, vec![first.id, middle.id, last.id]);
    assert_eq!(registry.list(SortOrder::Insertion).len(), registry.len());
}

#[test]
fn sort_order_from_str() {
    assert_eq!("default".parse::<SortOrder>().unwrap(), SortOrder::Insertion);
    assert_eq!("rating".parse::<SortOrder>().unwrap(), SortOrder::RatingAscending);
    assert!("name".parse::<SortOrder>().is_err());
}
