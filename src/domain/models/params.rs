//! Tool parameter models.
//!
//! These are deserialized straight from MCP tool calls, so every string is
//! trimmed and every range checked before a request goes upstream.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Response rendering selected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown
    #[default]
    Markdown,
    /// Structured JSON
    Json,
}

/// Resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    /// Resolve an optional `limit` against the configured default and maximum.
    pub fn resolve(
        limit: Option<u32>,
        offset: u32,
        default_size: u32,
        max_size: u32,
    ) -> Result<Self, ValidationError> {
        let limit = limit.unwrap_or(default_size);
        if limit == 0 || limit > max_size {
            return Err(ValidationError::new(
                "limit",
                format!("must be between 1 and {max_size}, got {limit}"),
            ));
        }
        Ok(Self { limit, offset })
    }

    /// Upstream page index for page-based APIs.
    pub const fn page_index(&self) -> u32 {
        self.offset / self.limit
    }
}

/// Parameters for `systembolaget_search_products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchProductsParams {
    /// Search query for product name or description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Filter by category (e.g., 'Öl', 'Vin', 'Sprit')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Minimum price in SEK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Maximum price in SEK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Minimum alcohol percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_alcohol: Option<f64>,
    /// Maximum alcohol percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_alcohol: Option<f64>,
    /// Filter by country of origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Number of results to return (default 20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of results to skip for pagination
    #[serde(default)]
    pub offset: u32,
    /// Response format: 'markdown' for human-readable or 'json' for structured data
    #[serde(default)]
    pub format: ResponseFormat,
}

impl SearchProductsParams {
    /// Trim strings, drop blanks and check numeric ranges.
    pub fn normalize(mut self) -> Result<Self, ValidationError> {
        self.query = non_blank(self.query);
        self.category = non_blank(self.category);
        self.country = non_blank(self.country);

        check_min("min_price", self.min_price, 0.0)?;
        check_min("max_price", self.max_price, 0.0)?;
        check_percentage("min_alcohol", self.min_alcohol)?;
        check_percentage("max_alcohol", self.max_alcohol)?;
        check_order("max_price", "min_price", self.min_price, self.max_price)?;
        check_order("max_alcohol", "min_alcohol", self.min_alcohol, self.max_alcohol)?;

        Ok(self)
    }
}

/// Parameters for `systembolaget_get_product`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetProductParams {
    /// The product number (artikelnummer) to retrieve
    pub product_number: String,
    /// Response format: 'markdown' for human-readable or 'json' for structured data
    #[serde(default)]
    pub format: ResponseFormat,
}

impl GetProductParams {
    pub fn normalize(mut self) -> Result<Self, ValidationError> {
        self.product_number = required("product_number", &self.product_number)?;
        Ok(self)
    }
}

/// Parameters for `systembolaget_search_stores`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchStoresParams {
    /// Search query for store name or location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Filter by city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Number of results to return (default 20)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of results to skip for pagination
    #[serde(default)]
    pub offset: u32,
    /// Response format: 'markdown' for human-readable or 'json' for structured data
    #[serde(default)]
    pub format: ResponseFormat,
}

impl SearchStoresParams {
    pub fn normalize(mut self) -> Result<Self, ValidationError> {
        self.query = non_blank(self.query);
        self.city = non_blank(self.city);
        Ok(self)
    }

    /// Query and city joined into the single search term the API accepts.
    pub fn search_term(&self) -> Option<String> {
        let terms: Vec<&str> = [self.query.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if terms.is_empty() {
            None
        } else {
            Some(terms.join(" "))
        }
    }
}

/// Parameters for `systembolaget_get_store`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetStoreParams {
    /// The store ID (site ID) to retrieve
    pub store_id: String,
    /// Response format: 'markdown' for human-readable or 'json' for structured data
    #[serde(default)]
    pub format: ResponseFormat,
}

impl GetStoreParams {
    pub fn normalize(mut self) -> Result<Self, ValidationError> {
        self.store_id = required("store_id", &self.store_id)?;
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn check_min(field: &'static str, value: Option<f64>, min: f64) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() || v < min => Err(ValidationError::new(
            field,
            format!("must be a number >= {min}, got {v}"),
        )),
        _ => Ok(()),
    }
}

fn check_percentage(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !(0.0..=100.0).contains(&v) => Err(ValidationError::new(
            field,
            format!("must be between 0 and 100, got {v}"),
        )),
        _ => Ok(()),
    }
}

fn check_order(
    upper_field: &'static str,
    lower_field: &'static str,
    lower: Option<f64>,
    upper: Option<f64>,
) -> Result<(), ValidationError> {
    match (lower, upper) {
        (Some(lo), Some(hi)) if hi < lo => Err(ValidationError::new(
            upper_field,
            format!("must be greater than or equal to {lower_field}"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_and_bounds() {
        let page = Page::resolve(None, 40, 20, 100).unwrap();
        assert_eq!(page, Page { limit: 20, offset: 40 });
        assert_eq!(page.page_index(), 2);

        let err = Page::resolve(Some(0), 0, 20, 100).unwrap_err();
        assert_eq!(err.field, "limit");
        assert!(Page::resolve(Some(101), 0, 20, 100).is_err());
        assert!(Page::resolve(Some(100), 0, 20, 100).is_ok());
    }

    #[test]
    fn test_search_products_trims_and_drops_blank() {
        let params = SearchProductsParams {
            query: Some("  lager ".to_string()),
            category: Some("   ".to_string()),
            ..Default::default()
        }
        .normalize()
        .unwrap();

        assert_eq!(params.query.as_deref(), Some("lager"));
        assert!(params.category.is_none());
    }

    #[test]
    fn test_search_products_rejects_inverted_price_range() {
        let err = SearchProductsParams {
            min_price: Some(200.0),
            max_price: Some(100.0),
            ..Default::default()
        }
        .normalize()
        .unwrap_err();

        assert_eq!(err.field, "max_price");
        assert_eq!(
            err.to_string(),
            "Invalid max_price: must be greater than or equal to min_price"
        );
    }

    #[test]
    fn test_search_products_rejects_out_of_range_alcohol() {
        let err = SearchProductsParams {
            max_alcohol: Some(140.0),
            ..Default::default()
        }
        .normalize()
        .unwrap_err();
        assert_eq!(err.field, "max_alcohol");

        let err = SearchProductsParams {
            min_price: Some(-1.0),
            ..Default::default()
        }
        .normalize()
        .unwrap_err();
        assert_eq!(err.field, "min_price");
    }

    #[test]
    fn test_get_product_requires_number() {
        let err = GetProductParams {
            product_number: "  ".to_string(),
            format: ResponseFormat::Json,
        }
        .normalize()
        .unwrap_err();
        assert_eq!(err.field, "product_number");
    }

    #[test]
    fn test_store_search_term_joins_query_and_city() {
        let params = SearchStoresParams {
            query: Some("Centrum".to_string()),
            city: Some(" Umeå ".to_string()),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        assert_eq!(params.search_term().as_deref(), Some("Centrum Umeå"));

        let empty = SearchStoresParams::default().normalize().unwrap();
        assert_eq!(empty.search_term(), None);
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let params: GetStoreParams =
            serde_json::from_str(r#"{"store_id": "0102", "format": "json"}"#).unwrap();
        assert_eq!(params.format, ResponseFormat::Json);

        let params: GetStoreParams = serde_json::from_str(r#"{"store_id": "0102"}"#).unwrap();
        assert_eq!(params.format, ResponseFormat::Markdown);
    }
}
