mod helpers;
mod place_api;
mod selection_api;
mod view_api;

use crate::{
    api::API,
    config::Config,
    correlator::MarkerCorrelator,
    entities::Coordinates,
    external::{FormInput, Geolocation, ListRenderer, MapRenderer},
    registry::{PlaceRegistry, SortOrder},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapState {
    Unavailable,
    Ready,
}

/// Owns the canonical registry and the marker correlation. Nothing else writes to either.
pub struct Engine {
    config: Config,
    registry: PlaceRegistry,
    correlator: MarkerCorrelator,
    map: Box<dyn MapRenderer>,
    list: Box<dyn ListRenderer>,
    form: Box<dyn FormInput>,
    map_state: MapState,
    selection: Option<Coordinates>,
    sort_order: SortOrder,
}

impl Engine {
    pub fn new(
        config: Config,
        map: Box<dyn MapRenderer>,
        list: Box<dyn ListRenderer>,
        form: Box<dyn FormInput>,
    ) -> Self {
        Self {
            config,
            registry: PlaceRegistry::new(),
            correlator: MarkerCorrelator::new(),
            map,
            list,
            form,
            map_state: MapState::Unavailable,
            selection: None,
            sort_order: SortOrder::default(),
        }
    }

    /// Waits for the device position and brings the map up around it. Either
    /// step failing leaves the map unavailable and place creation inert.
    #[tracing::instrument(name = "Engine::start", skip_all)]
    pub async fn start(&mut self, geolocation: &dyn Geolocation) -> MapState {
        let center = match geolocation.current_position().await {
            Some(center) => center,
            None => {
                tracing::warn!("no position available, map stays unavailable");
                return self.map_state;
            }
        };

        if let Err(err) = self.map.initialize(center, &self.config.map).await {
            tracing::warn!("map failed to initialize: {}", err);
            return self.map_state;
        }

        self.map_state = MapState::Ready;
        tracing::info!("map ready at {}", center);

        if self.config.seed_sample {
            self.seed_sample();
        }

        self.render_list();
        self.map_state
    }

    pub fn map_state(&self) -> MapState {
        self.map_state
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn marker_count(&self) -> usize {
        self.correlator.len()
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) struct Harness {
    pub engine: Engine,
    pub map: crate::external::mock::MockMap,
    pub list: crate::external::mock::MockList,
    pub form: crate::external::mock::MockForm,
}

#[cfg(test)]
pub(crate) fn harness() -> Harness {
    use crate::external::mock::{MockForm, MockList, MockMap};

    let map = MockMap::default();
    let list = MockList::default();
    let form = MockForm::default();

    let engine = Engine::new(
        Config::default(),
        Box::new(map.clone()),
        Box::new(list.clone()),
        Box::new(form.clone()),
    );

    Harness {
        engine,
        map,
        list,
        form,
    }
}

#[cfg(test)]
pub(crate) fn started_harness() -> Harness {
    use crate::external::mock::MockGeolocation;
    use tokio_test::block_on;

    let mut harness = harness();
    let geolocation = MockGeolocation(Some(Coordinates::new(3.1321683, 101.6710431)));
    assert_eq!(block_on(harness.engine.start(&geolocation)), MapState::Ready);

    harness
}

#[test]
fn start_initializes_map_at_position() {
    let harness = started_harness();

    assert_eq!(harness.engine.map_state(), MapState::Ready);
    assert_eq!(
        harness.map.state().center,
        Some(Coordinates::new(3.1321683, 101.6710431))
    );
}

#[test]
fn start_without_position_leaves_map_unavailable() {
    use crate::external::mock::MockGeolocation;
    use tokio_test::block_on;

    let mut harness = harness();

    let state = block_on(harness.engine.start(&MockGeolocation(None)));

    assert_eq!(state, MapState::Unavailable);
    assert!(harness.map.state().center.is_none());
}

#[test]
fn start_with_failing_map_leaves_map_unavailable() {
    use crate::external::mock::MockGeolocation;
    use tokio_test::block_on;

    let mut harness = harness();
    harness.map.state().fail_initialize = true;

    let state = block_on(
        harness
            .engine
            .start(&MockGeolocation(Some(Coordinates::new(0.0, 0.0)))),
    );

    assert_eq!(state, MapState::Unavailable);
}

#[test]
fn start_seeds_sample_place_when_configured() {
    use crate::api::PlaceAPI;
    use crate::external::mock::{MockForm, MockGeolocation, MockList, MockMap};
    use tokio_test::block_on;

    let map = MockMap::default();
    let list = MockList::default();
    let config = Config {
        seed_sample: true,
        ..Config::default()
    };
    let mut engine = Engine::new(
        config,
        Box::new(map.clone()),
        Box::new(list.clone()),
        Box::new(MockForm::default()),
    );

    let geolocation = MockGeolocation(Some(Coordinates::new(0.0, 0.0)));
    assert_eq!(block_on(engine.start(&geolocation)), MapState::Ready);

    let places = engine.list_places(SortOrder::Insertion);
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].coordinates, helpers::SAMPLE_COORDINATES);
    assert_eq!(engine.marker_count(), 1);
    assert_eq!(map.state().markers.len(), 1);
    assert_eq!(list.names(), vec!["myBurgerLab"]);
}

#[test]
fn start_without_seed_leaves_registry_empty() {
    let harness = started_harness();

    assert!(harness.engine.is_empty());
    assert_eq!(harness.engine.marker_count(), 0);
}
