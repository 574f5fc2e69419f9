use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VpnProviders::Table)
                    .if_not_exists()
                    .col(pk_auto(VpnProviders::Id))
                    .col(string_uniq(VpnProviders::Name))
                    .col(string_uniq(VpnProviders::Slug))
                    .col(string_null(VpnProviders::Logo))
                    .col(string_null(VpnProviders::Screenshot))
                    .col(string_null(VpnProviders::ThumbnailImage))
                    .col(string_null(VpnProviders::CardImage))
                    .col(string_null(VpnProviders::OgImage))
                    .col(string(VpnProviders::Website))
                    .col(string(VpnProviders::AffiliateUrl))
                    // Prices and rating are decimal strings.
                    .col(string(VpnProviders::PriceMonthly))
                    .col(string_null(VpnProviders::PriceYearly))
                    .col(string_null(VpnProviders::PriceTwoYear))
                    .col(integer(VpnProviders::MoneyBackDays).default(30))
                    .col(boolean(VpnProviders::FreeTier).default(false))
                    .col(integer(VpnProviders::Servers).default(0))
                    .col(integer(VpnProviders::Countries).default(0))
                    .col(integer(VpnProviders::MaxDevices).default(0))
                    .col(integer(VpnProviders::SpeedScore).default(0))
                    .col(integer(VpnProviders::SecurityScore).default(0))
                    .col(integer(VpnProviders::StreamingScore).default(0))
                    .col(string(VpnProviders::OverallRating))
                    .col(json_null(VpnProviders::Protocols))
                    .col(string(VpnProviders::Encryption).default("AES-256"))
                    .col(boolean(VpnProviders::KillSwitch).default(true))
                    .col(boolean(VpnProviders::NoLogs).default(true))
                    .col(boolean(VpnProviders::NetflixSupport).default(false))
                    .col(boolean(VpnProviders::TorrentSupport).default(false))
                    .col(boolean(VpnProviders::EditorChoice).default(false))
                    .col(text_null(VpnProviders::ShortDescription))
                    .col(json_null(VpnProviders::Pros))
                    .col(json_null(VpnProviders::Cons))
                    .col(boolean(VpnProviders::Featured).default(false))
                    .col(integer(VpnProviders::SortOrder).default(999))
                    .col(big_integer(VpnProviders::CreatedAt))
                    .col(big_integer(VpnProviders::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vpn_providers_sort_order")
                    .table(VpnProviders::Table)
                    .col(VpnProviders::SortOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vpn_providers_featured")
                    .table(VpnProviders::Table)
                    .col(VpnProviders::Featured)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(VpnProviders::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum VpnProviders {
    Table,
    Id,
    Name,
    Slug,
    Logo,
    Screenshot,
    ThumbnailImage,
    CardImage,
    OgImage,
    Website,
    AffiliateUrl,
    PriceMonthly,
    PriceYearly,
    PriceTwoYear,
    MoneyBackDays,
    FreeTier,
    Servers,
    Countries,
    MaxDevices,
    SpeedScore,
    SecurityScore,
    StreamingScore,
    OverallRating,
    Protocols,
    Encryption,
    KillSwitch,
    NoLogs,
    NetflixSupport,
    TorrentSupport,
    EditorChoice,
    ShortDescription,
    Pros,
    Cons,
    Featured,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
