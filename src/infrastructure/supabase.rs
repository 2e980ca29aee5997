// SPDX-License-Identifier: MPL-2.0
//! Hosted gift store (Supabase / PostgREST).
//!
//! Talks to the REST endpoint of the `gifts` table using the project's public
//! key. Every request carries the `apikey` header and a bearer token with the
//! same key.
//!
//! Purchases are conditional on `available=eq.true`, so two guests racing for
//! the same gift cannot both win: the loser receives an empty representation.

use crate::application::port::{GiftStore, StoreError, StoreResult};
use crate::config::GIFTS_TABLE;
use crate::domain::gift::{CustomGift, Gift, GiftId, Price, Purchase};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("gift-registry/", env!("CARGO_PKG_VERSION"));

/// Asks PostgREST to echo the affected rows.
const RETURN_REPRESENTATION: &str = "return=representation";

/// Longest response body kept in [`StoreError::Status`].
const MAX_ERROR_BODY: usize = 512;

// =============================================================================
// Wire Types
// =============================================================================

/// Row shape of the `gifts` table.
#[derive(Debug, Deserialize)]
struct GiftRow {
    id: i64,
    name: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default = "default_available")]
    available: bool,
    #[serde(default)]
    buyer_name: Option<String>,
    #[serde(default)]
    buyer_phone: Option<String>,
    #[serde(default)]
    buyer_message: Option<String>,
}

fn default_available() -> bool {
    true
}

impl TryFrom<GiftRow> for Gift {
    type Error = StoreError;

    fn try_from(row: GiftRow) -> StoreResult<Self> {
        let price = match row.price {
            Some(amount) => Price::from_reais(amount).ok_or_else(|| {
                StoreError::Decode(format!("gift {} has an invalid price: {amount}", row.id))
            })?,
            None => Price::default(),
        };

        let gift = Gift::new(GiftId::new(row.id), row.name, price)
            .with_link(row.link.unwrap_or_default());

        if row.available {
            return Ok(gift);
        }

        // Older rows may lack buyer details; they are still taken.
        let buyer = Purchase::new(
            row.buyer_name.as_deref().unwrap_or_default(),
            row.buyer_phone.as_deref().unwrap_or_default(),
            row.buyer_message.as_deref().unwrap_or_default(),
        )
        .ok();
        Ok(gift.taken(buyer))
    }
}

/// Body of the purchase `PATCH`.
#[derive(Debug, Serialize, PartialEq)]
struct PurchasePatch<'a> {
    available: bool,
    buyer_name: &'a str,
    buyer_phone: &'a str,
    buyer_message: Option<&'a str>,
}

impl<'a> From<&'a Purchase> for PurchasePatch<'a> {
    fn from(purchase: &'a Purchase) -> Self {
        Self {
            available: false,
            buyer_name: purchase.buyer_name(),
            buyer_phone: purchase.buyer_phone(),
            buyer_message: purchase.buyer_message(),
        }
    }
}

/// Body of the custom gift `POST`.
#[derive(Debug, Serialize, PartialEq)]
struct CustomGiftInsert<'a> {
    name: &'a str,
    price: f64,
    link: &'a str,
    #[serde(flatten)]
    purchase: PurchasePatch<'a>,
}

impl<'a> From<&'a CustomGift> for CustomGiftInsert<'a> {
    fn from(gift: &'a CustomGift) -> Self {
        Self {
            name: gift.name(),
            price: gift.price().unwrap_or_default().as_reais(),
            link: "",
            purchase: PurchasePatch::from(gift.purchase()),
        }
    }
}

// =============================================================================
// Endpoint Helpers
// =============================================================================

fn table_url(base_url: &str) -> String {
    format!("{}/rest/v1/{GIFTS_TABLE}", base_url.trim_end_matches('/'))
}

fn list_url(base_url: &str) -> String {
    format!("{}?select=*&order=price.desc", table_url(base_url))
}

fn purchase_url(base_url: &str, id: GiftId) -> String {
    format!("{}?id=eq.{id}&available=eq.true", table_url(base_url))
}

fn lookup_url(base_url: &str, id: GiftId) -> String {
    format!("{}?id=eq.{id}&select=id", table_url(base_url))
}

fn decode_rows(body: &str) -> StoreResult<Vec<Gift>> {
    let rows: Vec<GiftRow> =
        serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))?;
    rows.into_iter().map(Gift::try_from).collect()
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}

// =============================================================================
// SupabaseStore
// =============================================================================

/// Gift store backed by a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
}

impl SupabaseStore {
    /// Creates a client for the project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Network`] when the key cannot be sent as a header
    /// or the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, anon_key: &str) -> StoreResult<Self> {
        let invalid_key = |_| StoreError::Network("API key contains invalid characters".into());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert("apikey", HeaderValue::from_str(anon_key).map_err(invalid_key)?);
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {anon_key}")).map_err(invalid_key)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Checks the status and decodes the body as a list of rows.
    async fn handle_response(&self, response: reqwest::Response) -> StoreResult<Vec<Gift>> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::Status {
                code: status.as_u16(),
                body: truncate_body(body),
            });
        }

        decode_rows(&body)
    }

    async fn exists(&self, id: GiftId) -> StoreResult<bool> {
        let response = self
            .client
            .get(lookup_url(&self.base_url, id))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(StoreError::Status {
                code: status.as_u16(),
                body: truncate_body(body),
            });
        }
        let ids: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(!ids.is_empty())
    }
}

#[async_trait]
impl GiftStore for SupabaseStore {
    async fn list_gifts(&self) -> StoreResult<Vec<Gift>> {
        let url = list_url(&self.base_url);
        tracing::debug!(%url, "fetching gift list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        self.handle_response(response).await
    }

    async fn mark_purchased(&self, id: GiftId, purchase: &Purchase) -> StoreResult<Gift> {
        tracing::debug!(%id, "marking gift as purchased");

        let response = self
            .client
            .patch(purchase_url(&self.base_url, id))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&PurchasePatch::from(purchase))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if let Some(gift) = self.handle_response(response).await?.into_iter().next() {
            return Ok(gift);
        }

        // Nothing matched the conditional update: either taken or missing.
        if self.exists(id).await? {
            Err(StoreError::AlreadyPurchased(id))
        } else {
            Err(StoreError::NotFound(id))
        }
    }

    async fn insert_custom_gift(&self, gift: &CustomGift) -> StoreResult<Gift> {
        tracing::debug!(name = gift.name(), "inserting custom gift");

        let response = self
            .client
            .post(table_url(&self.base_url))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&CustomGiftInsert::from(gift))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        self.handle_response(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no rows".to_string()))
    }

    fn name(&self) -> &'static str {
        "supabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://project.supabase.co";

    #[test]
    fn client_creation_succeeds_with_plain_key() {
        assert!(SupabaseStore::new(BASE, "public-anon-key").is_ok());
    }

    #[test]
    fn client_creation_rejects_header_breaking_key() {
        let result = SupabaseStore::new(BASE, "bad\nkey");
        assert!(matches!(result, Err(StoreError::Network(_))));
    }

    #[test]
    fn urls_target_the_gifts_table() {
        assert_eq!(
            list_url(BASE),
            "https://project.supabase.co/rest/v1/gifts?select=*&order=price.desc"
        );
        assert_eq!(
            purchase_url(&format!("{BASE}/"), GiftId::new(12)),
            "https://project.supabase.co/rest/v1/gifts?id=eq.12&available=eq.true"
        );
        assert_eq!(
            lookup_url(BASE, GiftId::new(3)),
            "https://project.supabase.co/rest/v1/gifts?id=eq.3&select=id"
        );
    }

    #[test]
    fn decode_rows_maps_store_shape() {
        let body = r#"[
            {"id": 1, "name": "Geladeira", "price": 3899.0, "link": "https://loja/1", "available": true,
             "buyer_name": null, "buyer_phone": null, "buyer_message": null},
            {"id": 2, "name": "Taças", "price": 189.9, "link": "", "available": false,
             "buyer_name": "Ana", "buyer_phone": "123", "buyer_message": "Parabéns"}
        ]"#;

        let gifts = decode_rows(body).expect("valid body");
        assert_eq!(gifts.len(), 2);

        assert_eq!(gifts[0].price(), Price::from_cents(389_900));
        assert_eq!(gifts[0].link(), Some("https://loja/1"));
        assert!(gifts[0].is_available());

        assert_eq!(gifts[1].price(), Price::from_cents(18_990));
        assert_eq!(gifts[1].link(), None);
        assert!(!gifts[1].is_available());
        let buyer = gifts[1].purchase().expect("buyer details");
        assert_eq!(buyer.buyer_message(), Some("Parabéns"));
    }

    #[test]
    fn decode_rows_tolerates_missing_buyer_details() {
        let body = r#"[{"id": 5, "name": "Jogo de cama", "price": 350, "available": false}]"#;
        let gifts = decode_rows(body).expect("valid body");
        assert!(!gifts[0].is_available());
        assert!(gifts[0].purchase().is_none());
    }

    #[test]
    fn decode_rows_rejects_malformed_bodies() {
        assert!(matches!(decode_rows("{}"), Err(StoreError::Decode(_))));
        assert!(matches!(
            decode_rows(r#"[{"id": 1, "name": "x", "price": -5}]"#),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn purchase_patch_serializes_buyer_fields() {
        let purchase = Purchase::new("Ana", "123", "").expect("valid purchase");
        let json = serde_json::to_value(PurchasePatch::from(&purchase)).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "available": false,
                "buyer_name": "Ana",
                "buyer_phone": "123",
                "buyer_message": null
            })
        );
    }

    #[test]
    fn custom_gift_insert_is_flat() {
        let purchase = Purchase::new("Caio", "456", "Com carinho").expect("valid purchase");
        let gift = CustomGift::new("Quadro", "250,50", purchase).expect("valid gift");
        let json = serde_json::to_value(CustomGiftInsert::from(&gift)).expect("serializable");

        assert_eq!(json["name"], "Quadro");
        assert_eq!(json["price"], 250.5);
        assert_eq!(json["available"], false);
        assert_eq!(json["buyer_message"], "Com carinho");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(MAX_ERROR_BODY);
        let truncated = truncate_body(body);
        assert!(truncated.len() <= MAX_ERROR_BODY);
        assert!(truncated.chars().all(|c| c == 'é'));
    }
}
