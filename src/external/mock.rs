use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{
    FormInput, Geolocation, ListRenderer, MapOptions, MapRenderer, MarkerHandle, Notifier,
    PanOptions,
};
use crate::entities::{Coordinates, PlaceFields, PlaceView};
use crate::error::{map_error, Error};

#[derive(Clone, Debug)]
pub struct MockGeolocation(pub Option<Coordinates>);

#[async_trait]
impl Geolocation for MockGeolocation {
    async fn current_position(&self) -> Option<Coordinates> {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct MapState {
    pub center: Option<Coordinates>,
    pub markers: HashMap<MarkerHandle, (Coordinates, String)>,
    pub removed: Vec<MarkerHandle>,
    pub pans: Vec<Coordinates>,
    pub fail_initialize: bool,
    pub fail_add: bool,
    pub fail_remove: bool,
    next: u64,
}

/// Records every call; clones share state so tests can inspect after handing one to the engine.
#[derive(Clone, Debug, Default)]
pub struct MockMap(pub Arc<Mutex<MapState>>);

impl MockMap {
    pub fn state(&self) -> std::sync::MutexGuard<'_, MapState> {
        self.0.lock().unwrap()
    }
}

#[async_trait]
impl MapRenderer for MockMap {
    async fn initialize(&mut self, center: Coordinates, _options: &MapOptions) -> Result<(), Error> {
        let mut state = self.state();
        if state.fail_initialize {
            return Err(map_error("initialize"));
        }

        state.center = Some(center);
        Ok(())
    }

    fn add_marker(&mut self, coordinates: Coordinates, label: &str) -> Result<MarkerHandle, Error> {
        let mut state = self.state();
        if state.fail_add {
            return Err(map_error("add_marker"));
        }

        state.next += 1;
        let handle = MarkerHandle::new(state.next);
        state.markers.insert(handle, (coordinates, label.into()));

        Ok(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) -> Result<(), Error> {
        let mut state = self.state();
        if state.fail_remove {
            return Err(map_error("remove_marker"));
        }

        state.markers.remove(&handle);
        state.removed.push(handle);

        Ok(())
    }

    fn pan_to(&mut self, coordinates: Coordinates, _options: &PanOptions) {
        self.state().pans.push(coordinates);
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    pub queued: VecDeque<PlaceFields>,
    pub cleared: usize,
    pub focused: usize,
}

/// Serves queued fields front first; `clear` drops the current entry.
#[derive(Clone, Debug, Default)]
pub struct MockForm(pub Arc<Mutex<FormState>>);

impl MockForm {
    pub fn push(&self, fields: PlaceFields) {
        self.state().queued.push_back(fields);
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, FormState> {
        self.0.lock().unwrap()
    }
}

impl FormInput for MockForm {
    fn fields(&self) -> PlaceFields {
        self.state().queued.front().cloned().unwrap_or_default()
    }

    fn clear(&mut self) {
        let mut state = self.state();
        state.queued.pop_front();
        state.cleared += 1;
    }

    fn focus(&mut self) {
        self.state().focused += 1;
    }
}

#[derive(Clone, Debug, Default)]
pub struct MockList(pub Arc<Mutex<Vec<PlaceView>>>);

impl MockList {
    pub fn names(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|view| view.name.clone()).collect()
    }
}

impl ListRenderer for MockList {
    fn show(&mut self, places: &[PlaceView]) {
        self.0.lock().unwrap().extend_from_slice(places);
    }

    fn clear(&mut self) {
        self.0.lock().unwrap().clear();
    }
}

#[derive(Clone, Debug, Default)]
pub struct MockNotifier(pub Arc<Mutex<Vec<String>>>);

impl MockNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&mut self, message: &str) {
        self.0.lock().unwrap().push(message.into());
    }
}
