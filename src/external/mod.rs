pub mod console;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, PlaceFields, PlaceView};
use crate::error::Error;

/// Opaque handle for a marker, issued by the map renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanOptions {
    pub zoom: u8,
    pub animate: bool,
    pub duration_secs: f64,
}

/// One-shot device position. `None` when the position is denied or unknown.
#[async_trait]
pub trait Geolocation: Send + Sync {
    async fn current_position(&self) -> Option<Coordinates>;
}

#[async_trait]
pub trait MapRenderer: Send {
    async fn initialize(&mut self, center: Coordinates, options: &MapOptions) -> Result<(), Error>;

    fn add_marker(&mut self, coordinates: Coordinates, label: &str) -> Result<MarkerHandle, Error>;

    fn remove_marker(&mut self, handle: MarkerHandle) -> Result<(), Error>;

    fn pan_to(&mut self, coordinates: Coordinates, options: &PanOptions);
}

pub trait FormInput: Send {
    fn fields(&self) -> PlaceFields;

    fn clear(&mut self);

    fn focus(&mut self);
}

pub trait ListRenderer: Send {
    /// Appends the entries in the given order.
    fn show(&mut self, places: &[PlaceView]);

    fn clear(&mut self);
}

pub trait Notifier: Send {
    fn notify(&mut self, message: &str);
}
