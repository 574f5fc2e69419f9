use sea_orm::entity::prelude::*;

/// Locale/country-specific affiliate URL override, keyed by provider slug.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "affiliate_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vpn_slug: String,
    pub locale: Option<String>,
    pub country: Option<String>,
    pub url: String,
    pub active: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
