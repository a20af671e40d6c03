//! Navigation routes for recipedeck consumers.
//!
//! This module defines the route sum type a presentation layer navigates
//! over: three tab destinations plus a detail route carrying the recipe id.
//! Routes round-trip through the string paths the original screens used.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a route path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteParseError {
    /// The path does not name any known route.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// A detail path carried a non-numeric id.
    #[error("invalid recipe id in route: {0}")]
    InvalidId(String),
}

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The recipe list.
    Home,
    /// The add-recipe form.
    Add,
    /// The settings screen.
    Settings,
    /// The detail screen for the recipe with the given id.
    Detail(i64),
}

impl Route {
    /// The string path for this route.
    #[must_use]
    pub fn as_path(&self) -> String {
        match self {
            Self::Home => "home".to_string(),
            Self::Add => "add".to_string(),
            Self::Settings => "settings".to_string(),
            Self::Detail(id) => format!("detail/{id}"),
        }
    }

    /// Human-readable label for this route.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Add => "Add",
            Self::Settings => "Settings",
            Self::Detail(_) => "Detail",
        }
    }

    /// Whether this route is a top-level tab destination.
    ///
    /// Detail is only reachable from the list, not from the tab bar.
    #[must_use]
    pub fn is_tab(&self) -> bool {
        !matches!(self, Self::Detail(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "add" => Ok(Self::Add),
            "settings" => Ok(Self::Settings),
            _ => {
                if let Some(id_part) = s.strip_prefix("detail/") {
                    id_part
                        .parse::<i64>()
                        .map(Self::Detail)
                        .map_err(|_| RouteParseError::InvalidId(id_part.to_string()))
                } else {
                    Err(RouteParseError::UnknownRoute(s.to_string()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.as_path(), "home");
        assert_eq!(Route::Add.as_path(), "add");
        assert_eq!(Route::Settings.as_path(), "settings");
        assert_eq!(Route::Detail(42).as_path(), "detail/42");
    }

    #[test]
    fn test_route_labels() {
        assert_eq!(Route::Home.label(), "Home");
        assert_eq!(Route::Add.label(), "Add");
        assert_eq!(Route::Settings.label(), "Settings");
        assert_eq!(Route::Detail(1).label(), "Detail");
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Home.to_string(), "home");
        assert_eq!(Route::Detail(7).to_string(), "detail/7");
    }

    #[test]
    fn test_parse_tab_routes() {
        assert_eq!("home".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("add".parse::<Route>().unwrap(), Route::Add);
        assert_eq!("settings".parse::<Route>().unwrap(), Route::Settings);
    }

    #[test]
    fn test_parse_detail_route() {
        assert_eq!("detail/3".parse::<Route>().unwrap(), Route::Detail(3));
    }

    #[test]
    fn test_parse_roundtrip() {
        for route in [
            Route::Home,
            Route::Add,
            Route::Settings,
            Route::Detail(99),
        ] {
            assert_eq!(route.as_path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_parse_unknown_route() {
        let err = "nowhere".parse::<Route>().unwrap_err();
        assert_eq!(err, RouteParseError::UnknownRoute("nowhere".to_string()));
    }

    #[test]
    fn test_parse_detail_with_bad_id() {
        let err = "detail/abc".parse::<Route>().unwrap_err();
        assert_eq!(err, RouteParseError::InvalidId("abc".to_string()));
    }

    #[test]
    fn test_is_tab() {
        assert!(Route::Home.is_tab());
        assert!(Route::Add.is_tab());
        assert!(Route::Settings.is_tab());
        assert!(!Route::Detail(1).is_tab());
    }

    #[test]
    fn test_route_parse_error_display() {
        assert!(RouteParseError::UnknownRoute("x".to_string())
            .to_string()
            .contains("unknown route"));
        assert!(RouteParseError::InvalidId("x".to_string())
            .to_string()
            .contains("invalid recipe id"));
    }
}
