use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    form,
};

/// Canonical view of a VPN provider. Database rows and the static dataset
/// both map into this type, so callers cannot tell where a record came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnData {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub screenshot: Option<String>,
    pub thumbnail_image: Option<String>,
    pub card_image: Option<String>,
    pub og_image: Option<String>,
    pub website: String,
    pub affiliate_url: String,
    pub price_monthly: f64,
    pub price_yearly: Option<f64>,
    /// `None` means the plan is not offered, not that it is free.
    pub price_two_year: Option<f64>,
    pub money_back_days: i32,
    pub free_tier: bool,
    pub servers: i32,
    pub countries: i32,
    pub max_devices: i32,
    pub speed_score: i32,
    pub security_score: i32,
    pub streaming_score: i32,
    /// Five-point scale, one decimal.
    pub overall_rating: f64,
    pub protocols: Vec<String>,
    pub encryption: String,
    pub kill_switch: bool,
    pub no_logs: bool,
    pub netflix_support: bool,
    pub torrent_support: bool,
    pub editor_choice: bool,
    pub short_description: Option<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VpnData {
    pub fn has_two_year_plan(&self) -> bool {
        self.price_two_year.is_some()
    }

    /// Longer plans should never cost more per month than shorter ones.
    pub fn price_ladder_is_consistent(&self) -> bool {
        let yearly_ok = self.price_yearly.is_none_or(|yearly| yearly <= self.price_monthly);
        let two_year_ok = match (self.price_two_year, self.price_yearly) {
            (Some(two_year), Some(yearly)) => two_year <= yearly,
            (Some(two_year), None) => two_year <= self.price_monthly,
            (None, _) => true,
        };
        yearly_ok && two_year_ok
    }
}

/// Resolved catalog written by `vpnrank export`.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogSnapshot {
    pub all: Vec<VpnData>,
    pub featured: Vec<VpnData>,
}

/// Admin create payload: the full field set minus identity and timestamps.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVpn {
    pub name: String,
    /// Derived from `name` when blank.
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub screenshot: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub thumbnail_image: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub card_image: Option<String>,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub og_image: Option<String>,
    pub website: String,
    pub affiliate_url: String,
    #[serde(deserialize_with = "form::number")]
    pub price_monthly: f64,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub price_yearly: Option<f64>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub price_two_year: Option<f64>,
    #[serde(default = "default_money_back_days", deserialize_with = "form::number")]
    pub money_back_days: i32,
    #[serde(default)]
    pub free_tier: bool,
    #[serde(default, deserialize_with = "form::number")]
    pub servers: i32,
    #[serde(default, deserialize_with = "form::number")]
    pub countries: i32,
    #[serde(default, deserialize_with = "form::number")]
    pub max_devices: i32,
    #[serde(default, deserialize_with = "form::number")]
    pub speed_score: i32,
    #[serde(default, deserialize_with = "form::number")]
    pub security_score: i32,
    #[serde(default, deserialize_with = "form::number")]
    pub streaming_score: i32,
    #[serde(deserialize_with = "form::number")]
    pub overall_rating: f64,
    #[serde(default)]
    pub protocols: Vec<String>,
    #[serde(default = "default_encryption")]
    pub encryption: String,
    #[serde(default = "default_true")]
    pub kill_switch: bool,
    #[serde(default = "default_true")]
    pub no_logs: bool,
    #[serde(default)]
    pub netflix_support: bool,
    #[serde(default)]
    pub torrent_support: bool,
    #[serde(default)]
    pub editor_choice: bool,
    #[serde(default, deserialize_with = "form::optional_text")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_sort_order", deserialize_with = "form::number")]
    pub sort_order: i32,
}

fn default_money_back_days() -> i32 {
    30
}

fn default_encryption() -> String {
    "AES-256".to_string()
}

fn default_true() -> bool {
    true
}

fn default_sort_order() -> i32 {
    999
}

impl NewVpn {
    /// Trims identity fields, fills a blank slug from the name and checks
    /// every field the storage layer relies on.
    pub fn validated(mut self) -> AppResult<Self> {
        self.name = self.name.trim().to_string();
        self.slug = self.slug.trim().to_string();
        if self.slug.is_empty() {
            self.slug = slugify(&self.name);
        }

        require_text("name", &self.name)?;
        check_slug(&self.slug)?;
        check_url("website", &self.website)?;
        check_url("affiliateUrl", &self.affiliate_url)?;
        check_price("priceMonthly", self.price_monthly)?;
        if let Some(price) = self.price_yearly {
            check_price("priceYearly", price)?;
        }
        if let Some(price) = self.price_two_year {
            check_price("priceTwoYear", price)?;
        }
        check_non_negative("moneyBackDays", self.money_back_days)?;
        check_non_negative("servers", self.servers)?;
        check_non_negative("countries", self.countries)?;
        check_non_negative("maxDevices", self.max_devices)?;
        check_score("speedScore", self.speed_score)?;
        check_score("securityScore", self.security_score)?;
        check_score("streamingScore", self.streaming_score)?;
        check_rating(self.overall_rating)?;
        require_text("encryption", &self.encryption)?;
        Ok(self)
    }
}

impl From<&VpnData> for NewVpn {
    fn from(vpn: &VpnData) -> Self {
        Self {
            name: vpn.name.clone(),
            slug: vpn.slug.clone(),
            logo: vpn.logo.clone(),
            screenshot: vpn.screenshot.clone(),
            thumbnail_image: vpn.thumbnail_image.clone(),
            card_image: vpn.card_image.clone(),
            og_image: vpn.og_image.clone(),
            website: vpn.website.clone(),
            affiliate_url: vpn.affiliate_url.clone(),
            price_monthly: vpn.price_monthly,
            price_yearly: vpn.price_yearly,
            price_two_year: vpn.price_two_year,
            money_back_days: vpn.money_back_days,
            free_tier: vpn.free_tier,
            servers: vpn.servers,
            countries: vpn.countries,
            max_devices: vpn.max_devices,
            speed_score: vpn.speed_score,
            security_score: vpn.security_score,
            streaming_score: vpn.streaming_score,
            overall_rating: vpn.overall_rating,
            protocols: vpn.protocols.clone(),
            encryption: vpn.encryption.clone(),
            kill_switch: vpn.kill_switch,
            no_logs: vpn.no_logs,
            netflix_support: vpn.netflix_support,
            torrent_support: vpn.torrent_support,
            editor_choice: vpn.editor_choice,
            short_description: vpn.short_description.clone(),
            pros: vpn.pros.clone(),
            cons: vpn.cons.clone(),
            featured: vpn.featured,
            sort_order: vpn.sort_order,
        }
    }
}

/// Admin update payload. Absent keys leave the column untouched; for
/// nullable columns an explicit `null` clears the value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnPatch {
    #[serde(default, deserialize_with = "form::required_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form::required_text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "form::nullable_text")]
    pub logo: Option<Option<String>>,
    #[serde(default, deserialize_with = "form::nullable_text")]
    pub screenshot: Option<Option<String>>,
    #[serde(default, deserialize_with = "form::nullable_text")]
    pub thumbnail_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "form::nullable_text")]
    pub card_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "form::nullable_text")]
    pub og_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "form::required_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "form::required_text")]
    pub affiliate_url: Option<String>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub price_monthly: Option<f64>,
    #[serde(default, deserialize_with = "form::nullable_number")]
    pub price_yearly: Option<Option<f64>>,
    #[serde(default, deserialize_with = "form::nullable_number")]
    pub price_two_year: Option<Option<f64>>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub money_back_days: Option<i32>,
    #[serde(default)]
    pub free_tier: Option<bool>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub servers: Option<i32>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub countries: Option<i32>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub max_devices: Option<i32>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub speed_score: Option<i32>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub security_score: Option<i32>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub streaming_score: Option<i32>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub protocols: Option<Vec<String>>,
    #[serde(default, deserialize_with = "form::required_text")]
    pub encryption: Option<String>,
    #[serde(default)]
    pub kill_switch: Option<bool>,
    #[serde(default)]
    pub no_logs: Option<bool>,
    #[serde(default)]
    pub netflix_support: Option<bool>,
    #[serde(default)]
    pub torrent_support: Option<bool>,
    #[serde(default)]
    pub editor_choice: Option<bool>,
    #[serde(default, deserialize_with = "form::nullable_text")]
    pub short_description: Option<Option<String>>,
    #[serde(default)]
    pub pros: Option<Vec<String>>,
    #[serde(default)]
    pub cons: Option<Vec<String>>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "form::optional_number")]
    pub sort_order: Option<i32>,
}

impl VpnPatch {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(encryption) = &self.encryption {
            require_text("encryption", encryption)?;
        }
        if let Some(slug) = &self.slug {
            check_slug(slug)?;
        }
        if let Some(url) = &self.website {
            check_url("website", url)?;
        }
        if let Some(url) = &self.affiliate_url {
            check_url("affiliateUrl", url)?;
        }
        if let Some(price) = self.price_monthly {
            check_price("priceMonthly", price)?;
        }
        if let Some(Some(price)) = self.price_yearly {
            check_price("priceYearly", price)?;
        }
        if let Some(Some(price)) = self.price_two_year {
            check_price("priceTwoYear", price)?;
        }
        for (field, value) in [
            ("moneyBackDays", self.money_back_days),
            ("servers", self.servers),
            ("countries", self.countries),
            ("maxDevices", self.max_devices),
        ] {
            if let Some(value) = value {
                check_non_negative(field, value)?;
            }
        }
        for (field, value) in [
            ("speedScore", self.speed_score),
            ("securityScore", self.security_score),
            ("streamingScore", self.streaming_score),
        ] {
            if let Some(value) = value {
                check_score(field, value)?;
            }
        }
        if let Some(rating) = self.overall_rating {
            check_rating(rating)?;
        }
        Ok(())
    }
}

/// Lowercase ASCII, runs of anything else collapsed to a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn invalid(message: String) -> AppError {
    AppError::Validation(message)
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} is required")));
    }
    Ok(())
}

fn check_slug(slug: &str) -> AppResult<()> {
    require_text("slug", slug)?;
    let url_safe = slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !url_safe || slug.starts_with('-') || slug.ends_with('-') {
        return Err(invalid(format!("slug {slug:?} must be lowercase letters, digits and dashes")));
    }
    Ok(())
}

fn check_url(field: &str, url: &str) -> AppResult<()> {
    require_text(field, url)?;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(invalid(format!("{field} must be an http(s) URL")));
    }
    Ok(())
}

fn check_price(field: &str, price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(invalid(format!("{field} must be a non-negative amount")));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: i32) -> AppResult<()> {
    if value < 0 {
        return Err(invalid(format!("{field} must not be negative")));
    }
    Ok(())
}

fn check_score(field: &str, score: i32) -> AppResult<()> {
    if !(0..=100).contains(&score) {
        return Err(invalid(format!("{field} must be between 0 and 100")));
    }
    Ok(())
}

fn check_rating(rating: f64) -> AppResult<()> {
    if !(1.0..=5.0).contains(&rating) {
        return Err(invalid("overallRating must be between 1.0 and 5.0".to_string()));
    }
    Ok(())
}
