use serde::{Deserialize, Serialize};

use crate::entities::{Place, PlaceId};

/// What the list renderer needs to draw one entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceView {
    pub id: PlaceId,
    pub name: String,
    pub rating: String,
    pub category: String,
    pub comment: String,
}

impl From<&Place> for PlaceView {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id,
            name: place.name.clone(),
            rating: place.rating.glyphs(),
            category: place.category.name().into(),
            comment: place.comment.clone(),
        }
    }
}

#[test]
fn place_view_from_place() {
    use crate::entities::{Category, Coordinates, PlaceFields};

    let fields = PlaceFields::new("myBurgerLab", "soft patty", 4, Category::Western);
    let place = Place::new(Coordinates::new(3.1321683, 101.6710431), fields).unwrap();
    let view = PlaceView::from(&place);

    assert_eq!(view.id, place.id);
    assert_eq!(view.rating, "⭐⭐⭐⭐");
    assert_eq!(view.category, "western");

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["id"], serde_json::json!(place.id.to_string()));
}
