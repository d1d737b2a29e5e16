use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;
use crate::error::{validation_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(Uuid);

impl PlaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PlaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Uuid::parse_str(s).map_err(|_| validation_error("invalid place id"))?;
        Ok(Self(id))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn glyphs(&self) -> String {
        "⭐".repeat(self.0 as usize)
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(validation_error("rating must be between 1 and 5"));
        }

        Ok(Self(value as u8))
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0 as i64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Western,
    Eastern,
    Local,
    Fusion,
    Cafe,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Western,
        Self::Eastern,
        Self::Local,
        Self::Fusion,
        Self::Cafe,
        Self::Dessert,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Western => "western",
            Self::Eastern => "eastern",
            Self::Local => "local",
            Self::Fusion => "fusion",
            Self::Cafe => "cafe",
            Self::Dessert => "dessert",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| validation_error("unknown category"))
    }
}

/// Creation fields as supplied by the form. `rating` is not yet range checked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceFields {
    pub name: String,
    pub comment: String,
    pub rating: i64,
    pub category: Category,
}

impl PlaceFields {
    pub fn new(name: &str, comment: &str, rating: i64, category: Category) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            rating,
            category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub coordinates: Coordinates,
    pub name: String,
    pub comment: String,
    pub rating: Rating,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Place {
    /// Validates every field before anything is allocated for the place.
    pub fn new(coordinates: Coordinates, fields: PlaceFields) -> Result<Self, Error> {
        let name = fields.name.trim();
        let comment = fields.comment.trim();

        if name.is_empty() {
            return Err(validation_error("name should not be empty"));
        }

        if comment.is_empty() {
            return Err(validation_error("comment should not be empty"));
        }

        let rating = Rating::try_from(fields.rating)?;
        coordinates.validate()?;

        Ok(Self {
            id: PlaceId::new(),
            coordinates,
            name: name.into(),
            comment: comment.into(),
            rating,
            category: fields.category,
            created_at: Utc::now(),
        })
    }
}

#[test]
fn place_new_trims_fields() {
    let fields = PlaceFields::new("  Cafe ", " good\n", 3, Category::Cafe);
    let place = Place::new(Coordinates::new(1.0, 1.0), fields).unwrap();

    assert_eq!(place.name, "Cafe");
    assert_eq!(place.comment, "good");
    assert_eq!(place.rating.value(), 3);
}

#[test]
fn place_new_rejects_invalid_fields() {
    let at = Coordinates::new(1.0, 1.0);

    let blank_name = PlaceFields::new("   ", "x", 3, Category::Western);
    assert!(Place::new(at, blank_name).unwrap_err().is_validation());

    let empty_comment = PlaceFields::new("Cafe", "", 3, Category::Western);
    assert!(Place::new(at, empty_comment).unwrap_err().is_validation());

    let zero_rating = PlaceFields::new("Cafe", "x", 0, Category::Western);
    assert!(Place::new(at, zero_rating).unwrap_err().is_validation());

    let large_rating = PlaceFields::new("Cafe", "x", 6, Category::Western);
    assert!(Place::new(at, large_rating).unwrap_err().is_validation());

    let fields = PlaceFields::new("Cafe", "x", 3, Category::Western);
    assert!(Place::new(Coordinates::new(100.0, 0.0), fields).is_err());
}

#[test]
fn rating_glyphs() {
    assert_eq!(Rating::try_from(1).unwrap().glyphs(), "⭐");
    assert_eq!(Rating::try_from(5).unwrap().glyphs().chars().count(), 5);
}

#[test]
fn category_from_str() {
    assert_eq!("western".parse::<Category>().unwrap(), Category::Western);
    assert_eq!("dessert".parse::<Category>().unwrap(), Category::Dessert);
    assert!("Western".parse::<Category>().is_err());
}

#[test]
fn place_id_round_trips_through_string() {
    let id = PlaceId::new();
    assert_eq!(id.to_string().parse::<PlaceId>().unwrap(), id);
    assert!("not-an-id".parse::<PlaceId>().is_err());
}

#[test]
fn category_defaults_to_western() {
    assert_eq!(Category::default(), Category::Western);
    assert_eq!(PlaceFields::default().category, Category::Western);
}
