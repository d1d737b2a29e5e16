use crate::entities::{Coordinates, Place, PlaceFields, PlaceId};
use crate::error::Error;
use crate::registry::SortOrder;

pub trait PlaceAPI {
    /// Registers the place and its marker as one unit.
    fn create_place(&mut self, coordinates: Coordinates, fields: PlaceFields) -> Result<Place, Error>;
    fn delete_place(&mut self, id: PlaceId) -> Result<Place, Error>;
    fn find_place(&self, id: PlaceId) -> Result<Place, Error>;
    fn list_places(&self, order: SortOrder) -> Vec<Place>;
}

pub trait SelectionAPI {
    fn select_location(&mut self, coordinates: Coordinates) -> Result<(), Error>;
    fn selection(&self) -> Option<Coordinates>;
    fn submit_form(&mut self) -> Result<Place, Error>;
}

pub trait ViewAPI {
    fn change_sort(&mut self, order: SortOrder);
    fn sort_order(&self) -> SortOrder;
    fn focus_place(&mut self, id: PlaceId) -> Result<Place, Error>;
}

pub trait API: PlaceAPI + SelectionAPI + ViewAPI {}
