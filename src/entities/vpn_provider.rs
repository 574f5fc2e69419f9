use sea_orm::entity::prelude::*;

/// Persisted VPN provider. Prices and the rating are decimal strings, list
/// columns are JSON arrays that may be null; `mapper` turns a row into
/// [`crate::models::VpnData`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vpn_providers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub logo: Option<String>,
    pub screenshot: Option<String>,
    pub thumbnail_image: Option<String>,
    pub card_image: Option<String>,
    pub og_image: Option<String>,
    pub website: String,
    pub affiliate_url: String,
    pub price_monthly: String,
    pub price_yearly: Option<String>,
    pub price_two_year: Option<String>,
    pub money_back_days: i32,
    pub free_tier: bool,
    pub servers: i32,
    pub countries: i32,
    pub max_devices: i32,
    pub speed_score: i32,
    pub security_score: i32,
    pub streaming_score: i32,
    pub overall_rating: String,
    #[sea_orm(column_type = "Json", nullable)]
    pub protocols: Option<Json>,
    pub encryption: String,
    pub kill_switch: bool,
    pub no_logs: bool,
    pub netflix_support: bool,
    pub torrent_support: bool,
    pub editor_choice: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub pros: Option<Json>,
    #[sea_orm(column_type = "Json", nullable)]
    pub cons: Option<Json>,
    pub featured: bool,
    pub sort_order: i32,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::click::Entity")]
    Clicks,
    #[sea_orm(has_many = "super::user_review::Entity")]
    UserReviews,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::click::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clicks.def()
    }
}

impl Related<super::user_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserReviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
