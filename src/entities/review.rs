use sea_orm::entity::prelude::*;

/// Editorial review of a provider, one per locale.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vpn_id: i32,
    pub locale: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub rating: String,
    pub author: Option<String>,
    pub published: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vpn_provider::Entity",
        from = "Column::VpnId",
        to = "super::vpn_provider::Column::Id",
        on_delete = "Cascade"
    )]
    VpnProvider,
}

impl Related<super::vpn_provider::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VpnProvider.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
