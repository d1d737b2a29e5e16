use super::{Engine, MapState};

use crate::{
    api::{PlaceAPI, SelectionAPI},
    entities::{Coordinates, Place},
    error::{map_unavailable_error, no_active_selection_error, Error},
};

impl SelectionAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn select_location(&mut self, coordinates: Coordinates) -> Result<(), Error> {
        if self.map_state != MapState::Ready {
            return Err(map_unavailable_error());
        }

        coordinates.validate()?;
        self.selection = Some(coordinates);
        self.form.focus();

        Ok(())
    }

    fn selection(&self) -> Option<Coordinates> {
        self.selection
    }

    /// The selection is kept after a successful submit.
    #[tracing::instrument(skip(self))]
    fn submit_form(&mut self) -> Result<Place, Error> {
        let coordinates = self.selection.ok_or_else(no_active_selection_error)?;
        let fields = self.form.fields();

        let place = self.create_place(coordinates, fields)?;
        self.form.clear();

        Ok(place)
    }
}

#[test]
fn submit_without_selection_is_rejected() {
    use crate::entities::{Category, PlaceFields};

    let mut harness = super::started_harness();
    harness
        .form
        .push(PlaceFields::new("Cafe", "good", 3, Category::Western));

    let err = harness.engine.submit_form().unwrap_err();

    assert_eq!(err, no_active_selection_error());
    assert!(harness.engine.is_empty());
    assert_eq!(harness.form.state().cleared, 0);
}

#[test]
fn select_location_requires_ready_map() {
    let mut harness = super::harness();

    let err = harness
        .engine
        .select_location(Coordinates::new(1.0, 1.0))
        .unwrap_err();

    assert_eq!(err, map_unavailable_error());
    assert!(harness.engine.selection().is_none());
}

#[test]
fn submit_creates_place_at_selection_and_clears_form() {
    use crate::entities::{Category, PlaceFields};

    let mut harness = super::started_harness();
    let at = Coordinates::new(1.0, 1.0);
    harness.engine.select_location(at).unwrap();
    harness
        .form
        .push(PlaceFields::new("Cafe", "good", 3, Category::Western));

    let place = harness.engine.submit_form().unwrap();

    assert_eq!(place.coordinates, at);
    assert_eq!(harness.form.state().focused, 1);
    assert_eq!(harness.form.state().cleared, 1);
    assert_eq!(harness.engine.selection(), Some(at));
}

#[test]
fn invalid_submission_keeps_form_contents() {
    use crate::entities::{Category, PlaceFields};

    let mut harness = super::started_harness();
    harness.engine.select_location(Coordinates::new(1.0, 1.0)).unwrap();
    harness.form.push(PlaceFields::new("Cafe", "", 3, Category::Western));

    assert!(harness.engine.submit_form().unwrap_err().is_validation());

    assert_eq!(harness.form.state().cleared, 0);
    assert_eq!(harness.form.state().queued.len(), 1);
}
