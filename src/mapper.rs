//! Conversions between the stored representation of a provider and
//! [`VpnData`].
//!
//! Reading is total: a row that matches the schema always maps, whatever
//! its decimal text or JSON list columns contain.

use jiff::Timestamp;
use sea_orm::Set;
use serde_json::Value as JsonValue;

use crate::{
    entities::vpn_provider,
    models::{NewVpn, VpnData, VpnPatch},
};

impl From<vpn_provider::Model> for VpnData {
    fn from(row: vpn_provider::Model) -> Self {
        VpnData {
            id: row.id,
            name: row.name,
            slug: row.slug,
            logo: row.logo,
            screenshot: row.screenshot,
            thumbnail_image: row.thumbnail_image,
            card_image: row.card_image,
            og_image: row.og_image,
            website: row.website,
            affiliate_url: row.affiliate_url,
            price_monthly: decimal(&row.price_monthly).unwrap_or(0.0),
            price_yearly: row.price_yearly.as_deref().and_then(decimal),
            price_two_year: row.price_two_year.as_deref().and_then(decimal),
            money_back_days: row.money_back_days,
            free_tier: row.free_tier,
            servers: row.servers,
            countries: row.countries,
            max_devices: row.max_devices,
            speed_score: row.speed_score,
            security_score: row.security_score,
            streaming_score: row.streaming_score,
            overall_rating: decimal(&row.overall_rating).unwrap_or(0.0),
            protocols: string_list(row.protocols),
            encryption: row.encryption,
            kill_switch: row.kill_switch,
            no_logs: row.no_logs,
            netflix_support: row.netflix_support,
            torrent_support: row.torrent_support,
            editor_choice: row.editor_choice,
            short_description: row.short_description,
            pros: string_list(row.pros),
            cons: string_list(row.cons),
            featured: row.featured,
            sort_order: row.sort_order,
            created_at: timestamp(row.created_at),
            updated_at: timestamp(row.updated_at),
        }
        .normalized()
    }
}

impl VpnData {
    /// Shared final step of every mapping. Idempotent.
    pub fn normalized(mut self) -> Self {
        self.overall_rating = five_point(self.overall_rating);
        self.speed_score = self.speed_score.clamp(0, 100);
        self.security_score = self.security_score.clamp(0, 100);
        self.streaming_score = self.streaming_score.clamp(0, 100);
        for list in [&mut self.protocols, &mut self.pros, &mut self.cons] {
            list.retain(|item| !item.trim().is_empty());
        }
        self
    }
}

fn five_point(rating: f64) -> f64 {
    let rating = if rating.is_finite() { rating.clamp(1.0, 5.0) } else { 1.0 };
    (rating * 10.0).round() / 10.0
}

fn decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn string_list(value: Option<JsonValue>) -> Vec<String> {
    match value {
        Some(JsonValue::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                JsonValue::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn timestamp(millis: i64) -> Timestamp {
    Timestamp::from_millisecond(millis).unwrap_or(Timestamp::UNIX_EPOCH)
}

pub(crate) fn now_millis() -> i64 {
    Timestamp::now().as_millisecond()
}

fn price_text(price: f64) -> String {
    format!("{price:.2}")
}

fn rating_text(rating: f64) -> String {
    format!("{:.1}", five_point(rating))
}

fn list_json(items: Vec<String>) -> Option<JsonValue> {
    Some(JsonValue::Array(items.into_iter().map(JsonValue::String).collect()))
}

impl NewVpn {
    pub(crate) fn into_active_model(self, now: i64) -> vpn_provider::ActiveModel {
        vpn_provider::ActiveModel {
            id: Default::default(),
            name: Set(self.name),
            slug: Set(self.slug),
            logo: Set(self.logo),
            screenshot: Set(self.screenshot),
            thumbnail_image: Set(self.thumbnail_image),
            card_image: Set(self.card_image),
            og_image: Set(self.og_image),
            website: Set(self.website),
            affiliate_url: Set(self.affiliate_url),
            price_monthly: Set(price_text(self.price_monthly)),
            price_yearly: Set(self.price_yearly.map(price_text)),
            price_two_year: Set(self.price_two_year.map(price_text)),
            money_back_days: Set(self.money_back_days),
            free_tier: Set(self.free_tier),
            servers: Set(self.servers),
            countries: Set(self.countries),
            max_devices: Set(self.max_devices),
            speed_score: Set(self.speed_score),
            security_score: Set(self.security_score),
            streaming_score: Set(self.streaming_score),
            overall_rating: Set(rating_text(self.overall_rating)),
            protocols: Set(list_json(self.protocols)),
            encryption: Set(self.encryption),
            kill_switch: Set(self.kill_switch),
            no_logs: Set(self.no_logs),
            netflix_support: Set(self.netflix_support),
            torrent_support: Set(self.torrent_support),
            editor_choice: Set(self.editor_choice),
            short_description: Set(self.short_description),
            pros: Set(list_json(self.pros)),
            cons: Set(list_json(self.cons)),
            featured: Set(self.featured),
            sort_order: Set(self.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

impl VpnPatch {
    /// Writes only the fields present in the patch. Timestamps are left to the caller.
    pub(crate) fn apply(self, row: &mut vpn_provider::ActiveModel) {
        if let Some(v) = self.name {
            row.name = Set(v);
        }
        if let Some(v) = self.slug {
            row.slug = Set(v);
        }
        if let Some(v) = self.logo {
            row.logo = Set(v);
        }
        if let Some(v) = self.screenshot {
            row.screenshot = Set(v);
        }
        if let Some(v) = self.thumbnail_image {
            row.thumbnail_image = Set(v);
        }
        if let Some(v) = self.card_image {
            row.card_image = Set(v);
        }
        if let Some(v) = self.og_image {
            row.og_image = Set(v);
        }
        if let Some(v) = self.website {
            row.website = Set(v);
        }
        if let Some(v) = self.affiliate_url {
            row.affiliate_url = Set(v);
        }
        if let Some(v) = self.price_monthly {
            row.price_monthly = Set(price_text(v));
        }
        if let Some(v) = self.price_yearly {
            row.price_yearly = Set(v.map(price_text));
        }
        if let Some(v) = self.price_two_year {
            row.price_two_year = Set(v.map(price_text));
        }
        if let Some(v) = self.money_back_days {
            row.money_back_days = Set(v);
        }
        if let Some(v) = self.free_tier {
            row.free_tier = Set(v);
        }
        if let Some(v) = self.servers {
            row.servers = Set(v);
        }
        if let Some(v) = self.countries {
            row.countries = Set(v);
        }
        if let Some(v) = self.max_devices {
            row.max_devices = Set(v);
        }
        if let Some(v) = self.speed_score {
            row.speed_score = Set(v);
        }
        if let Some(v) = self.security_score {
            row.security_score = Set(v);
        }
        if let Some(v) = self.streaming_score {
            row.streaming_score = Set(v);
        }
        if let Some(v) = self.overall_rating {
            row.overall_rating = Set(rating_text(v));
        }
        if let Some(v) = self.protocols {
            row.protocols = Set(list_json(v));
        }
        if let Some(v) = self.encryption {
            row.encryption = Set(v);
        }
        if let Some(v) = self.kill_switch {
            row.kill_switch = Set(v);
        }
        if let Some(v) = self.no_logs {
            row.no_logs = Set(v);
        }
        if let Some(v) = self.netflix_support {
            row.netflix_support = Set(v);
        }
        if let Some(v) = self.torrent_support {
            row.torrent_support = Set(v);
        }
        if let Some(v) = self.editor_choice {
            row.editor_choice = Set(v);
        }
        if let Some(v) = self.short_description {
            row.short_description = Set(v);
        }
        if let Some(v) = self.pros {
            row.pros = Set(list_json(v));
        }
        if let Some(v) = self.cons {
            row.cons = Set(list_json(v));
        }
        if let Some(v) = self.featured {
            row.featured = Set(v);
        }
        if let Some(v) = self.sort_order {
            row.sort_order = Set(v);
        }
    }
}
