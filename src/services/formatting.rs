//! Markdown and JSON rendering of catalog API payloads.
//!
//! Payloads are kept as `serde_json::Value`: the API schema is large and
//! loosely documented, and only a handful of fields are rendered.

use serde::Serialize;
use serde_json::Value;

const NOT_AVAILABLE: &str = "N/A";

/// Pagination block attached to JSON search responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub total_count: u64,
    pub returned_count: usize,
    pub has_more: bool,
}

/// Pretty-printed JSON with non-ASCII characters preserved.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Render a scalar field; null, missing, empty strings, arrays and objects are `None`.
fn field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field_or_na(value: &Value, key: &str) -> String {
    field(value, key).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn truthy(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Summary block for one product.
pub fn product_markdown(product: &Value) -> String {
    let name = field(product, "productNameBold").unwrap_or_else(|| "Unknown".to_string());

    let mut md = format!("### {name}");
    if let Some(subtitle) = field(product, "productNameThin") {
        md.push_str(&format!(" - {subtitle}"));
    }
    md.push_str("\n\n");

    md.push_str(&format!("- **Product Number:** {}\n", field_or_na(product, "productNumber")));
    md.push_str(&format!("- **Price:** {} SEK\n", field_or_na(product, "price")));
    md.push_str(&format!("- **Volume:** {} ml\n", field_or_na(product, "volume")));
    md.push_str(&format!("- **Alcohol:** {}%\n", field_or_na(product, "alcoholPercentage")));
    md.push_str(&format!("- **Category:** {}\n", field_or_na(product, "categoryLevel1")));

    if let Some(country) = field(product, "country") {
        md.push_str(&format!("- **Country:** {country}\n"));
    }
    if let Some(assortment) = field(product, "assortmentText") {
        md.push_str(&format!("- **Assortment:** {assortment}\n"));
    }

    let taste = [
        ("Bitterness", field(product, "tasteClockBitter")),
        ("Sweetness", field(product, "tasteClockSweetness")),
        ("Body", field(product, "tasteClockBody")),
    ];
    if taste.iter().any(|(_, v)| v.is_some()) {
        md.push_str("\n**Taste Profile:**\n");
        for (label, score) in taste {
            if let Some(score) = score {
                md.push_str(&format!("- {label}: {score}/12\n"));
            }
        }
    }

    md
}

/// Summary block plus description, taste, serving and food pairing sections.
pub fn product_details_markdown(product: &Value) -> String {
    let mut md = product_markdown(product);

    if let Some(description) = field(product, "description") {
        md.push_str(&format!("\n**Description:**\n{description}\n"));
    }
    if let Some(taste) = field(product, "taste") {
        md.push_str(&format!("\n**Taste:**\n{taste}\n"));
    }
    if let Some(usage) = field(product, "usage") {
        md.push_str(&format!("\n**Serving Suggestions:**\n{usage}\n"));
    }
    append_list(&mut md, "Food Pairings", product.get("tasteSymbols"));

    md
}

/// Summary block for one store.
pub fn store_markdown(store: &Value) -> String {
    let name = field(store, "displayName")
        .or_else(|| field(store, "alias"))
        .unwrap_or_else(|| "Unknown".to_string());

    let mut md = format!("### {name}\n\n");
    md.push_str(&format!("- **Store ID:** {}\n", field_or_na(store, "siteId")));

    if let Some(street) = field(store, "streetAddress") {
        let address: Vec<String> = [
            Some(street),
            field(store, "postalCode"),
            field(store, "city"),
        ]
        .into_iter()
        .flatten()
        .collect();
        md.push_str(&format!("- **Address:** {}\n", address.join(" ")));
    }

    if truthy(store, "isAgent") {
        md.push_str("- **Type:** Agent\n");
    }
    if truthy(store, "isTastingStore") {
        md.push_str("- **Features:** Tasting Store\n");
    }

    if let Some(hours) = opening_hours(store) {
        md.push_str(&format!("- **Hours:** {hours}\n"));
    }

    if let Some(position) = store.get("position") {
        let lat = position.get("latitude").and_then(Value::as_f64);
        let lon = position.get("longitude").and_then(Value::as_f64);
        if let (Some(lat), Some(lon)) = (lat, lon) {
            if lat != 0.0 && lon != 0.0 {
                md.push_str(&format!("- **Location:** {lat:.4}, {lon:.4}\n"));
            }
        }
    }

    md
}

/// Summary block plus services, parking and public transport sections.
pub fn store_details_markdown(store: &Value) -> String {
    let mut md = store_markdown(store);

    append_list(&mut md, "Services", store.get("services"));
    if let Some(parking) = field(store, "parkingInfo") {
        md.push_str(&format!("\n**Parking:** {parking}\n"));
    }
    if let Some(transport) = field(store, "publicTransport") {
        md.push_str(&format!("\n**Public Transport:** {transport}\n"));
    }

    md
}

/// First of the next three days the store is not closed, as `HH:MM - HH:MM`.
fn opening_hours(store: &Value) -> Option<String> {
    let days = store.get("openingHours")?.as_array()?;
    days.iter()
        .take(3)
        .find(|day| day.get("openFrom").and_then(Value::as_str) != Some("00:00:00"))
        .map(|day| {
            let from = hh_mm(day.get("openFrom"));
            let to = hh_mm(day.get("openTo"));
            format!("{from} - {to}")
        })
}

fn hh_mm(time: Option<&Value>) -> String {
    time.and_then(Value::as_str)
        .map(|t| t.chars().take(5).collect())
        .unwrap_or_default()
}

fn append_list(md: &mut String, title: &str, items: Option<&Value>) {
    let Some(items) = items.and_then(Value::as_array).filter(|a| !a.is_empty()) else {
        return;
    };
    md.push_str(&format!("\n**{title}:**\n"));
    for item in items {
        match item {
            Value::String(s) => {
                md.push_str(&format!("- {s}\n"));
            }
            other => {
                md.push_str(&format!("- {other}\n"));
            }
        }
    }
}

/// Footer pointing at the next page.
pub fn more_results_footer(next_offset: u32) -> String {
    format!(
        "\n---\n**More results available.** Use `offset: {next_offset}` to see the next page.\n"
    )
}
