use sea_orm::entity::prelude::*;

/// Outbound affiliate click.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clicks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vpn_id: i32,
    pub page: String,
    pub locale: Option<String>,
    pub country: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: i64,
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
