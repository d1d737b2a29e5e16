mod location;
mod place;
mod view;

pub use location::Coordinates;
pub use place::{Category, Place, PlaceFields, PlaceId, Rating};
pub use view::PlaceView;
