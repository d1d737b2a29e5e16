use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{
    FormInput, Geolocation, ListRenderer, MapOptions, MapRenderer, MarkerHandle, Notifier,
    PanOptions,
};
use crate::entities::{Coordinates, PlaceFields, PlaceView};
use crate::error::{config_error, Error};

/// Reports a configured position, or nothing when none is configured.
#[derive(Clone, Debug)]
pub struct FixedGeolocation {
    position: Option<Coordinates>,
}

impl FixedGeolocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocation for FixedGeolocation {
    async fn current_position(&self) -> Option<Coordinates> {
        self.position
    }
}

/// A map with no surface; every call is traced.
#[derive(Debug, Default)]
pub struct TracingMap {
    next_handle: u64,
}

#[async_trait]
impl MapRenderer for TracingMap {
    #[tracing::instrument(skip(self))]
    async fn initialize(&mut self, center: Coordinates, options: &MapOptions) -> Result<(), Error> {
        tracing::info!("map ready at {} (zoom {})", center, options.zoom);
        Ok(())
    }

    fn add_marker(&mut self, coordinates: Coordinates, label: &str) -> Result<MarkerHandle, Error> {
        self.next_handle += 1;
        let handle = MarkerHandle::new(self.next_handle);

        tracing::info!("marker {} \"{}\" at {}", handle.raw(), label, coordinates);
        Ok(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) -> Result<(), Error> {
        tracing::info!("marker {} removed", handle.raw());
        Ok(())
    }

    fn pan_to(&mut self, coordinates: Coordinates, options: &PanOptions) {
        tracing::info!(
            "pan to {} (zoom {}, animate {}, {}s)",
            coordinates,
            options.zoom,
            options.animate,
            options.duration_secs
        );
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}

impl FromStr for ListFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(config_error("LIST_FORMAT")),
        }
    }
}

/// Writes list entries to stdout, one per line.
#[derive(Debug)]
pub struct StdoutList {
    format: ListFormat,
}

impl StdoutList {
    pub fn new(format: ListFormat) -> Self {
        Self { format }
    }

    fn line(&self, view: &PlaceView) -> Result<String, serde_json::Error> {
        match self.format {
            ListFormat::Text => Ok(format!(
                "{} {} {} [{}] {}",
                view.id, view.name, view.rating, view.category, view.comment
            )),
            ListFormat::Json => serde_json::to_string(view),
        }
    }
}

impl ListRenderer for StdoutList {
    fn show(&mut self, places: &[PlaceView]) {
        let mut out = std::io::stdout().lock();
        for view in places {
            let line = match self.line(view) {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!("failed to encode place {}: {}", view.id, err);
                    continue;
                }
            };

            if let Err(err) = writeln!(out, "{}", line) {
                tracing::warn!("failed to write list entry: {}", err);
                return;
            }
        }
    }

    fn clear(&mut self) {
        println!("--");
    }
}

/// Holds the fields as currently filled in. Clones share the slot so the
/// host can keep editing it after the engine owns the form; a new `fill`
/// replaces whatever was there.
#[derive(Clone, Debug, Default)]
pub struct SharedForm {
    current: Arc<Mutex<Option<PlaceFields>>>,
}

impl SharedForm {
    pub fn new(fields: Option<PlaceFields>) -> Self {
        Self {
            current: Arc::new(Mutex::new(fields)),
        }
    }

    pub fn fill(&self, fields: PlaceFields) {
        match self.current.lock() {
            Ok(mut current) => *current = Some(fields),
            Err(err) => tracing::warn!("form lock poisoned: {}", err),
        }
    }
}

impl FormInput for SharedForm {
    fn fields(&self) -> PlaceFields {
        self.current
            .lock()
            .ok()
            .and_then(|current| current.clone())
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        match self.current.lock() {
            Ok(mut current) => *current = None,
            Err(err) => tracing::warn!("form lock poisoned: {}", err),
        }
    }

    fn focus(&mut self) {
        tracing::debug!("form focused");
    }
}

#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("! {}", message);
    }
}

#[test]
fn stdout_list_lines() {
    use crate::entities::{Category, Place};

    let fields = PlaceFields::new("Cafe", "good", 2, Category::Cafe);
    let place = Place::new(Coordinates::new(1.0, 1.0), fields).unwrap();
    let view = PlaceView::from(&place);

    let text = StdoutList::new(ListFormat::Text).line(&view).unwrap();
    assert_eq!(text, format!("{} Cafe ⭐⭐ [cafe] good", place.id));

    let json = StdoutList::new(ListFormat::Json).line(&view).unwrap();
    let parsed: PlaceView = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, view);
}

#[test]
fn shared_form_fill_replaces_current_fields() {
    use crate::entities::Category;

    let mut form = SharedForm::new(Some(PlaceFields::new("a", "x", 1, Category::Local)));
    let host = form.clone();
    host.fill(PlaceFields::new("b", "y", 2, Category::Local));

    assert_eq!(form.fields().name, "b");
    form.clear();
    assert_eq!(host.fields(), PlaceFields::default());
}

#[test]
fn corrected_form_submits_after_rejection() {
    use crate::api::{PlaceAPI, SelectionAPI};
    use crate::config::Config;
    use crate::engine::{Engine, MapState};
    use crate::entities::Category;
    use crate::external::mock::{MockGeolocation, MockList, MockMap};
    use crate::registry::SortOrder;
    use tokio_test::block_on;

    let form = SharedForm::default();
    let mut engine = Engine::new(
        Config::default(),
        Box::new(MockMap::default()),
        Box::new(MockList::default()),
        Box::new(form.clone()),
    );
    let at = Coordinates::new(1.0, 1.0);
    let geolocation = MockGeolocation(Some(at));
    assert_eq!(block_on(engine.start(&geolocation)), MapState::Ready);
    engine.select_location(at).unwrap();

    form.fill(PlaceFields::new("", "x", 3, Category::Western));
    assert!(engine.submit_form().unwrap_err().is_validation());

    form.fill(PlaceFields::new("Cafe", "good", 3, Category::Western));
    let place = engine.submit_form().unwrap();

    assert_eq!(place.name, "Cafe");
    assert_eq!(engine.list_places(SortOrder::Insertion), vec![place]);
    assert_eq!(form.fields(), PlaceFields::default());
}

#[test]
fn list_format_from_str() {
    assert_eq!("json".parse::<ListFormat>().unwrap(), ListFormat::Json);
    assert!("yaml".parse::<ListFormat>().is_err());
}
