//! Route types, travel direction, and reverse-companion derivation.
//!
//! Every forward route with at least two stops gets a companion route whose
//! stop sequence runs the other way. The companion lives under its own
//! document id, formed by appending [`REVERSE_MARKER`] to the source id, so
//! external clients keep addressing directions by identifier while the code
//! works with an explicit [`RouteDirection`].

use serde::{Deserialize, Serialize};

/// Identifier suffix marking a derived reverse route.
pub const REVERSE_MARKER: char = 'R';

/// An ordered sequence of stop identifiers served by vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier (e.g. "10"; "10R" for the derived companion)
    pub id: String,
    /// Display name (e.g. "Harbor - Airport")
    pub name: String,
    /// Stop identifiers in travel order
    #[serde(default)]
    pub stops: Vec<String>,
}

impl Route {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stops: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stops,
        }
    }

    /// Whether this route's own identifier carries the reverse marker.
    pub fn is_reverse(&self) -> bool {
        RouteToken::parse(&self.id).direction == RouteDirection::Reverse
    }

    /// Derive the reverse companion route, if one is meaningful.
    ///
    /// Returns `None` for routes with fewer than two stops and for routes
    /// whose own id already parses as reverse-directed (a companion is never
    /// itself re-reversed).
    pub fn derive_reverse(&self) -> Option<Route> {
        if self.stops.len() < 2 || self.is_reverse() {
            return None;
        }
        let mut stops = self.stops.clone();
        stops.reverse();
        Some(Route {
            id: format!("{}{}", self.id, REVERSE_MARKER),
            name: reversed_name(&self.name),
            stops,
        })
    }
}

/// Direction of travel along a base route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteDirection {
    Forward,
    Reverse,
}

/// A route identifier decomposed into base id + direction.
///
/// Callers address directions with the trailing-marker convention ("10" vs
/// "10R"); internally everything operates on this tagged form. Parsing and
/// formatting must stay the exact inverse of [`Route::derive_reverse`]'s id
/// rule or direction-suffixed lookups silently match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteToken {
    pub base_id: String,
    pub direction: RouteDirection,
}

impl RouteToken {
    /// Interpret a caller-supplied route token.
    ///
    /// A token is reverse-seeking when it ends with the marker and stripping
    /// it leaves a non-empty base id; everything else is forward.
    pub fn parse(token: &str) -> Self {
        match token.strip_suffix(REVERSE_MARKER) {
            Some(base) if !base.is_empty() => Self {
                base_id: base.to_string(),
                direction: RouteDirection::Reverse,
            },
            _ => Self {
                base_id: token.to_string(),
                direction: RouteDirection::Forward,
            },
        }
    }

    /// Format back to the identifier convention ("10" / "10R").
    pub fn route_id(&self) -> String {
        match self.direction {
            RouteDirection::Forward => self.base_id.clone(),
            RouteDirection::Reverse => format!("{}{}", self.base_id, REVERSE_MARKER),
        }
    }
}

/// Transform a route display name for the reverse companion.
///
/// Names shaped as a single dash-separated pair ("Harbor - Airport") swap
/// their trimmed halves with a canonical " - " joiner. Any other shape gets
/// the marker appended instead.
pub fn reversed_name(name: &str) -> String {
    if name.matches('-').count() == 1 {
        let mut halves = name.splitn(2, '-');
        let first = halves.next().unwrap_or_default().trim();
        let second = halves.next().unwrap_or_default().trim();
        format!("{} - {}", second, first)
    } else {
        format!("{} {}", name, REVERSE_MARKER)
    }
}
