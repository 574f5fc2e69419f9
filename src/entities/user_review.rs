use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vpn_id: i32,
    pub author_name: String,
    pub author_email: Option<String>,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub approved: bool,
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
