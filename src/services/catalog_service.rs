use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

use super::formatting::{
    more_results_footer, product_details_markdown, product_markdown, store_details_markdown,
    store_markdown, to_pretty_json, Pagination,
};
use super::truncation::truncate_response;
use crate::domain::errors::ValidationError;
use crate::domain::models::{
    GetProductParams, GetStoreParams, OutputConfig, Page, ResponseFormat, SearchProductsParams,
    SearchStoresParams,
};
use crate::infrastructure::systembolaget::{ApiError, Query, SystembolagetClient};

/// Failure of a catalog tool call.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The four read-only catalog operations exposed as agent tools.
pub struct CatalogService {
    client: Arc<SystembolagetClient>,
    output: OutputConfig,
    override_env: String,
}

impl CatalogService {
    pub fn new(client: Arc<SystembolagetClient>, output: OutputConfig, override_env: String) -> Self {
        Self {
            client,
            output,
            override_env,
        }
    }

    /// Short actionable text for an upstream failure.
    pub fn error_text(&self, err: &ApiError) -> String {
        match err {
            ApiError::Credential(cause) => format!(
                "Error: Could not obtain API key ({cause}). Set the {} environment variable to bypass automatic extraction.",
                self.override_env
            ),
            ApiError::Forbidden => format!(
                "Error: {err}. Verify the key in the {} environment variable.",
                self.override_env
            ),
            other => format!("Error: {other}"),
        }
    }

    pub async fn search_products(&self, params: SearchProductsParams) -> Result<String, CatalogError> {
        let params = params.normalize()?;
        let page = self.page(params.limit, params.offset)?;
        info!(query = ?params.query, category = ?params.category, "searching products");

        let data = self.client.search_products(product_query(&params, page)).await?;
        let products = array_at(&data, "products");
        let total_count = data
            .pointer("/metadata/totalCount")
            .and_then(Value::as_u64)
            .unwrap_or(products.len() as u64);
        let returned = products.len();
        let has_more = u64::from(page.offset) + (returned as u64) < total_count;

        info!(total_count, returned, "product search complete");

        if params.format == ResponseFormat::Json {
            let pagination = Pagination {
                limit: page.limit,
                offset: page.offset,
                total_count,
                returned_count: returned,
                has_more,
            };
            return self.render_json(&json!({ "products": products, "pagination": pagination }));
        }

        if products.is_empty() {
            return Ok("No products found matching your criteria.".to_string());
        }

        let mut md = format!(
            "# Product Search Results\n\nFound {total_count} products (showing {returned})\n\n"
        );
        for product in products {
            md.push_str(&product_markdown(product));
            md.push_str("\n\n");
        }
        if has_more {
            md.push_str(&more_results_footer(page.offset + page.limit));
        }

        Ok(self.truncate(&md))
    }

    pub async fn get_product(&self, params: GetProductParams) -> Result<String, CatalogError> {
        let params = params.normalize()?;
        info!(product_number = %params.product_number, "getting product");

        let product = self.client.get_product(&params.product_number).await?;

        match params.format {
            ResponseFormat::Json => self.render_json(&product),
            ResponseFormat::Markdown => Ok(self.truncate(&product_details_markdown(&product))),
        }
    }

    /// The store search endpoint has no paging, so the window is applied here.
    pub async fn search_stores(&self, params: SearchStoresParams) -> Result<String, CatalogError> {
        let params = params.normalize()?;
        let page = self.page(params.limit, params.offset)?;
        info!(query = ?params.query, city = ?params.city, "searching stores");

        let data = self
            .client
            .search_stores(params.search_term().as_deref())
            .await?;
        let stores = array_at(&data, "siteSearchResults");
        let total_count = stores.len();
        let window: Vec<&Value> = stores
            .iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect();
        let has_more = (page.offset as usize) + (page.limit as usize) < total_count;

        info!(total_count, returned = window.len(), "store search complete");

        if params.format == ResponseFormat::Json {
            let pagination = Pagination {
                limit: page.limit,
                offset: page.offset,
                total_count: total_count as u64,
                returned_count: window.len(),
                has_more,
            };
            return self.render_json(&json!({ "stores": window, "pagination": pagination }));
        }

        if window.is_empty() {
            return Ok("No stores found matching your criteria.".to_string());
        }

        let mut md = format!(
            "# Store Search Results\n\nFound {total_count} stores (showing {})\n\n",
            window.len()
        );
        for store in window {
            md.push_str(&store_markdown(store));
            md.push_str("\n\n");
        }
        if has_more {
            md.push_str(&more_results_footer(page.offset + page.limit));
        }

        Ok(self.truncate(&md))
    }

    pub async fn get_store(&self, params: GetStoreParams) -> Result<String, CatalogError> {
        let params = params.normalize()?;
        info!(store_id = %params.store_id, "getting store");

        let store = self.client.get_store(&params.store_id).await?;

        match params.format {
            ResponseFormat::Json => self.render_json(&store),
            ResponseFormat::Markdown => Ok(self.truncate(&store_details_markdown(&store))),
        }
    }

    fn page(&self, limit: Option<u32>, offset: u32) -> Result<Page, ValidationError> {
        Page::resolve(
            limit,
            offset,
            self.output.default_page_size,
            self.output.max_page_size,
        )
    }

    fn render_json(&self, value: &Value) -> Result<String, CatalogError> {
        let json = to_pretty_json(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(self.truncate(&json))
    }

    fn truncate(&self, content: &str) -> String {
        truncate_response(content, self.output.character_limit)
    }
}

fn array_at<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn product_query(params: &SearchProductsParams, page: Page) -> Query {
    let mut query: Query = Vec::new();
    if let Some(q) = &params.query {
        query.push(("searchQuery", q.clone()));
    }
    if let Some(category) = &params.category {
        query.push(("category", category.clone()));
    }
    if let Some(v) = params.min_price {
        query.push(("minPrice", v.to_string()));
    }
    if let Some(v) = params.max_price {
        query.push(("maxPrice", v.to_string()));
    }
    if let Some(v) = params.min_alcohol {
        query.push(("minAlcohol", v.to_string()));
    }
    if let Some(v) = params.max_alcohol {
        query.push(("maxAlcohol", v.to_string()));
    }
    if let Some(country) = &params.country {
        query.push(("country", country.clone()));
    }
    query.push(("page", page.page_index().to_string()));
    query.push(("pageSize", page.limit.to_string()));
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_query_maps_filters_and_page() {
        let params = SearchProductsParams {
            query: Some("ipa".to_string()),
            min_price: Some(20.0),
            max_alcohol: Some(6.5),
            country: Some("Sverige".to_string()),
            ..Default::default()
        };
        let query = product_query(&params, Page { limit: 10, offset: 25 });

        assert_eq!(
            query,
            vec![
                ("searchQuery", "ipa".to_string()),
                ("minPrice", "20".to_string()),
                ("maxAlcohol", "6.5".to_string()),
                ("country", "Sverige".to_string()),
                ("page", "2".to_string()),
                ("pageSize", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_array_at_missing_key() {
        assert!(array_at(&json!({}), "products").is_empty());
        assert!(array_at(&json!({ "products": null }), "products").is_empty());
        assert_eq!(array_at(&json!({ "products": [1, 2] }), "products").len(), 2);
    }
}
