//! Filter facets and their query-string form.

use serde::{Deserialize, Serialize};

use crate::catalog::ManufacturerList;
use crate::error::CatalogError;
use crate::limits::CatalogLimits;
use crate::search::codec::{decode_component, encode_component};
use crate::search::query::params;
use crate::search::QueryMap;

/// Inclusive price range selected on the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub from: f64,
    pub to: f64,
}

impl PriceRange {
    /// Create a price range.
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Both bounds rounded up to whole units, as sent on the wire.
    pub fn rounded_up(&self) -> Self {
        Self {
            from: self.from.ceil(),
            to: self.to.ceil(),
        }
    }

    /// Query-string form of a bound: whole numbers print without a fraction.
    fn bound_param(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            value.to_string()
        }
    }
}

/// The set of active filter predicates.
///
/// A facet is `Some` only when it is valid: a price range inside the
/// configured limits, or a non-empty list of manufacturer titles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSet {
    pub price: Option<PriceRange>,
    pub gym: Option<Vec<String>>,
    pub parts: Option<Vec<String>>,
}

impl FacetSet {
    /// An empty facet set (unfiltered).
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if no facet is active.
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.gym.is_none() && self.parts.is_none()
    }

    /// Set a price facet.
    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    /// Set a manufacturer facet; an empty list clears it.
    pub fn with_titles(mut self, list: ManufacturerList, titles: Vec<String>) -> Self {
        let titles = (!titles.is_empty()).then_some(titles);
        match list {
            ManufacturerList::Gym => self.gym = titles,
            ManufacturerList::Parts => self.parts = titles,
        }
        self
    }

    /// Titles for one manufacturer list.
    pub fn titles(&self, list: ManufacturerList) -> Option<&[String]> {
        match list {
            ManufacturerList::Gym => self.gym.as_deref(),
            ManufacturerList::Parts => self.parts.as_deref(),
        }
    }

    /// Short labels of the active facets, for logs.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.price.is_some() {
            labels.push("price");
        }
        if self.gym.is_some() {
            labels.push("gym");
        }
        if self.parts.is_some() {
            labels.push("parts");
        }
        labels
    }

    /// Read the valid facets from router query parameters.
    ///
    /// Missing or out-of-range prices and missing, empty or non-array title
    /// lists simply leave the facet unset. Malformed percent-encoding and
    /// unparseable JSON are errors, reported by the caller.
    pub fn from_query(query: &QueryMap, limits: &CatalogLimits) -> Result<Self, CatalogError> {
        let gym = parse_titles(query, ManufacturerList::Gym)?;
        let parts = parse_titles(query, ManufacturerList::Parts)?;

        let from = parse_price(query.get(params::PRICE_FROM));
        let to = parse_price(query.get(params::PRICE_TO));
        let price = match (from, to) {
            (Some(from), Some(to)) if limits.is_valid_price(from) && limits.is_valid_price(to) => {
                Some(PriceRange::new(from, to))
            }
            _ => None,
        };

        Ok(Self { price, gym, parts })
    }

    /// Write the active facets into router query parameters.
    ///
    /// Title lists are JSON-encoded and then percent-encoded into the value,
    /// the form the restoration path decodes.
    pub fn write_query(&self, query: &mut QueryMap) {
        for (key, value) in self.wire_params() {
            query.set(key, value);
        }
    }

    /// Facet parameters in request order: price, gym, parts.
    pub fn wire_params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();

        if let Some(range) = self.price {
            let range = range.rounded_up();
            out.push((params::PRICE_FROM, PriceRange::bound_param(range.from)));
            out.push((params::PRICE_TO, PriceRange::bound_param(range.to)));
        }
        for list in ManufacturerList::ALL {
            if let Some(titles) = self.titles(list) {
                out.push((list.query_key(), encode_titles(titles)));
            }
        }

        out
    }
}

/// JSON-encode a title list and percent-encode the JSON.
pub fn encode_titles(titles: &[String]) -> String {
    let json = serde_json::to_string(titles).unwrap_or_else(|_| "[]".to_string());
    encode_component(&json)
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

fn parse_titles(
    query: &QueryMap,
    list: ManufacturerList,
) -> Result<Option<Vec<String>>, CatalogError> {
    let Some(raw) = query.get(list.query_key()) else {
        return Ok(None);
    };

    let decoded = decode_component(raw)?;
    let value: serde_json::Value =
        serde_json::from_str(&decoded).map_err(|e| CatalogError::InvalidFilterJson {
            param: list.query_key().to_string(),
            message: e.to_string(),
        })?;

    let titles: Vec<String> = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok((!titles.is_empty()).then_some(titles))
}
