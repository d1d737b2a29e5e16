use super::Engine;

use crate::{
    api::PlaceAPI,
    entities::{Category, Coordinates, PlaceFields, PlaceView},
};

pub const SAMPLE_COORDINATES: Coordinates = Coordinates {
    lat: 3.1321683,
    lng: 101.6710431,
};

impl Engine {
    /// Replaces the displayed list with the registry's current presentation.
    pub(super) fn render_list(&mut self) {
        let views: Vec<PlaceView> = self
            .registry
            .list(self.sort_order)
            .iter()
            .map(PlaceView::from)
            .collect();

        self.list.clear();
        self.list.show(&views);
    }

    /// Registers the bundled sample place through the normal create path.
    pub(super) fn seed_sample(&mut self) {
        let fields = PlaceFields::new(
            "myBurgerLab",
            "The beef patty is on the soft side, but not too mushy. Real skin-on chips, not cut too thin.",
            4,
            Category::Western,
        );

        if let Err(err) = self.create_place(SAMPLE_COORDINATES, fields) {
            tracing::warn!("sample place was not created: {}", err);
        }
    }
}
