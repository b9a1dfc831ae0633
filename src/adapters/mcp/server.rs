//! rmcp server exposing the four read-only catalog tools.
//!
//! Protocol: JSON-RPC 2.0 over stdin/stdout. Logging goes to stderr.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use tracing::error;

use crate::domain::models::{GetProductParams, GetStoreParams, SearchProductsParams, SearchStoresParams};
use crate::services::{CatalogError, CatalogService};

/// Systembolaget MCP server implementation
#[derive(Clone)]
pub struct SystembolagetServer {
    catalog: Arc<CatalogService>,
    tool_router: ToolRouter<Self>,
}

impl SystembolagetServer {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }

    /// Validation failures are protocol errors; upstream failures are tool text.
    fn present(&self, tool: &str, result: Result<String, CatalogError>) -> Result<String, McpError> {
        match result {
            Ok(text) => Ok(text),
            Err(CatalogError::Invalid(e)) => Err(McpError::invalid_params(e.to_string(), None)),
            Err(CatalogError::Api(e)) => {
                error!(tool, error = %e, "tool call failed");
                Ok(self.catalog.error_text(&e))
            }
        }
    }
}

#[tool_router]
impl SystembolagetServer {
    #[tool(
        name = "systembolaget_search_products",
        description = "Search the Systembolaget product catalog. Filter by free-text query, category, price range (SEK), alcohol percentage range and country of origin. Results are paginated with limit and offset.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn search_products(
        &self,
        params: Parameters<SearchProductsParams>,
    ) -> Result<String, McpError> {
        let result = self.catalog.search_products(params.0).await;
        self.present("systembolaget_search_products", result)
    }

    #[tool(
        name = "systembolaget_get_product",
        description = "Get full details for one product by its product number, including description, taste profile, serving suggestions and food pairings.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn get_product(&self, params: Parameters<GetProductParams>) -> Result<String, McpError> {
        let result = self.catalog.get_product(params.0).await;
        self.present("systembolaget_get_product", result)
    }

    #[tool(
        name = "systembolaget_search_stores",
        description = "Search Systembolaget stores and agents by name or city. Results are paginated with limit and offset.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn search_stores(
        &self,
        params: Parameters<SearchStoresParams>,
    ) -> Result<String, McpError> {
        let result = self.catalog.search_stores(params.0).await;
        self.present("systembolaget_search_stores", result)
    }

    #[tool(
        name = "systembolaget_get_store",
        description = "Get details for one store by its store id, including address, opening hours, services and parking.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    async fn get_store(&self, params: Parameters<GetStoreParams>) -> Result<String, McpError> {
        let result = self.catalog.get_store(params.0).await;
        self.present("systembolaget_get_store", result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SystembolagetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "systembolaget-mcp".to_string(),
                title: Some("Systembolaget Catalog Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Read-only access to the Systembolaget product catalog and store directory. Search products or stores, then fetch details by product number or store id.".to_string(),
            ),
        }
    }
}
