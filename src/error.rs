use std::fmt::{self, Debug, Display};

pub const CONFIG_ERROR: i32 = 1;
pub const MAP_ERROR: i32 = 4;
pub const INVALID_STATE_ERROR: i32 = 100;
pub const VALIDATION_ERROR: i32 = 101;
pub const NO_ACTIVE_SELECTION_ERROR: i32 = 102;
pub const MAP_UNAVAILABLE_ERROR: i32 = 103;
pub const NOT_FOUND_ERROR: i32 = 104;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND_ERROR
    }

    pub fn is_validation(&self) -> bool {
        self.code == VALIDATION_ERROR
    }

    /// Errors the user can correct at the next interaction and should be told about.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self.code,
            VALIDATION_ERROR | NO_ACTIVE_SELECTION_ERROR | MAP_UNAVAILABLE_ERROR
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

pub fn invalid_state_error() -> Error {
    Error {
        code: INVALID_STATE_ERROR,
        message: "invalid state".into(),
    }
}

pub fn validation_error(reason: &str) -> Error {
    Error {
        code: VALIDATION_ERROR,
        message: reason.into(),
    }
}

pub fn no_active_selection_error() -> Error {
    Error {
        code: NO_ACTIVE_SELECTION_ERROR,
        message: "select a location on the map first".into(),
    }
}

pub fn map_unavailable_error() -> Error {
    Error {
        code: MAP_UNAVAILABLE_ERROR,
        message: "map is unavailable".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: NOT_FOUND_ERROR,
        message: "place not found".into(),
    }
}

pub fn config_error(key: &str) -> Error {
    Error {
        code: CONFIG_ERROR,
        message: format!("invalid value for {}", key),
    }
}

pub fn map_error<T: Debug>(_: T) -> Error {
    Error {
        code: MAP_ERROR,
        message: "map error".into(),
    }
}

#[test]
fn user_facing_errors() {
    assert!(validation_error("name is empty").is_user_facing());
    assert!(no_active_selection_error().is_user_facing());
    assert!(map_unavailable_error().is_user_facing());
    assert!(!not_found_error().is_user_facing());
    assert!(!invalid_state_error().is_user_facing());
}
