use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::Id))
                    .col(integer(Reviews::VpnId))
                    .col(string(Reviews::Locale))
                    .col(string(Reviews::Title))
                    .col(text(Reviews::Content))
                    .col(string(Reviews::Rating))
                    .col(string_null(Reviews::Author))
                    .col(boolean(Reviews::Published).default(false))
                    .col(big_integer(Reviews::CreatedAt))
                    .col(big_integer(Reviews::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_vpn_id")
                            .from(Reviews::Table, Reviews::VpnId)
                            .to(VpnProviders::Table, VpnProviders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Clicks::Table)
                    .if_not_exists()
                    .col(pk_auto(Clicks::Id))
                    .col(integer(Clicks::VpnId))
                    .col(string(Clicks::Page))
                    .col(string_null(Clicks::Locale))
                    .col(string_null(Clicks::Country))
                    .col(string_null(Clicks::Referrer))
                    .col(string_null(Clicks::UserAgent))
                    .col(big_integer(Clicks::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clicks_vpn_id")
                            .from(Clicks::Table, Clicks::VpnId)
                            .to(VpnProviders::Table, VpnProviders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clicks_vpn_id")
                    .table(Clicks::Table)
                    .col(Clicks::VpnId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserReviews::Table)
                    .if_not_exists()
                    .col(pk_auto(UserReviews::Id))
                    .col(integer(UserReviews::VpnId))
                    .col(string(UserReviews::AuthorName))
                    .col(string_null(UserReviews::AuthorEmail))
                    .col(integer(UserReviews::Rating))
                    .col(text(UserReviews::Comment))
                    .col(boolean(UserReviews::Approved).default(false))
                    .col(big_integer(UserReviews::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_reviews_vpn_id")
                            .from(UserReviews::Table, UserReviews::VpnId)
                            .to(VpnProviders::Table, VpnProviders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subscribers::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscribers::Id))
                    .col(string_uniq(Subscribers::Email))
                    .col(string(Subscribers::Locale))
                    .col(boolean(Subscribers::Confirmed).default(false))
                    .col(big_integer(Subscribers::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(pk_auto(Pages::Id))
                    .col(string(Pages::Slug))
                    .col(string(Pages::Locale))
                    .col(string(Pages::Title))
                    .col(text_null(Pages::Description))
                    .col(text(Pages::Content))
                    .col(boolean(Pages::Published).default(false))
                    .col(big_integer(Pages::CreatedAt))
                    .col(big_integer(Pages::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pages_slug_locale")
                    .table(Pages::Table)
                    .col(Pages::Slug)
                    .col(Pages::Locale)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Coupons::Table)
                    .if_not_exists()
                    .col(pk_auto(Coupons::Id))
                    .col(string(Coupons::VpnSlug))
                    .col(string(Coupons::Code))
                    .col(string(Coupons::Discount))
                    .col(text_null(Coupons::Description))
                    .col(big_integer_null(Coupons::ExpiresAt))
                    .col(boolean(Coupons::Active).default(true))
                    .col(big_integer(Coupons::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ScrapeJobs::Table)
                    .if_not_exists()
                    .col(pk_auto(ScrapeJobs::Id))
                    .col(string(ScrapeJobs::VpnSlug))
                    .col(string(ScrapeJobs::Status).default("pending"))
                    .col(big_integer_null(ScrapeJobs::LastRunAt))
                    .col(text_null(ScrapeJobs::LastError))
                    .col(big_integer(ScrapeJobs::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPosts::Id))
                    .col(string(BlogPosts::Slug))
                    .col(string(BlogPosts::Locale))
                    .col(string(BlogPosts::Title))
                    .col(text_null(BlogPosts::Excerpt))
                    .col(text(BlogPosts::Content))
                    .col(string_null(BlogPosts::Author))
                    .col(boolean(BlogPosts::Published).default(false))
                    .col(big_integer_null(BlogPosts::PublishedAt))
                    .col(big_integer(BlogPosts::CreatedAt))
                    .col(big_integer(BlogPosts::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_slug_locale")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Slug)
                    .col(BlogPosts::Locale)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContentQueue::Table)
                    .if_not_exists()
                    .col(pk_auto(ContentQueue::Id))
                    .col(string(ContentQueue::Topic))
                    .col(string(ContentQueue::Locale))
                    .col(string(ContentQueue::Status).default("queued"))
                    .col(integer(ContentQueue::Priority).default(0))
                    .col(big_integer_null(ContentQueue::ScheduledAt))
                    .col(big_integer(ContentQueue::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AffiliateLinks::Table)
                    .if_not_exists()
                    .col(pk_auto(AffiliateLinks::Id))
                    .col(string(AffiliateLinks::VpnSlug))
                    .col(string_null(AffiliateLinks::Locale))
                    .col(string_null(AffiliateLinks::Country))
                    .col(string(AffiliateLinks::Url))
                    .col(boolean(AffiliateLinks::Active).default(true))
                    .col(big_integer(AffiliateLinks::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AffiliateLinks::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ContentQueue::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(BlogPosts::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ScrapeJobs::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Coupons::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Pages::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Subscribers::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(UserReviews::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Clicks::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Reviews::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum VpnProviders {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    VpnId,
    Locale,
    Title,
    Content,
    Rating,
    Author,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Clicks {
    Table,
    Id,
    VpnId,
    Page,
    Locale,
    Country,
    Referrer,
    UserAgent,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserReviews {
    Table,
    Id,
    VpnId,
    AuthorName,
    AuthorEmail,
    Rating,
    Comment,
    Approved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subscribers {
    Table,
    Id,
    Email,
    Locale,
    Confirmed,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Pages {
    Table,
    Id,
    Slug,
    Locale,
    Title,
    Description,
    Content,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Coupons {
    Table,
    Id,
    VpnSlug,
    Code,
    Discount,
    Description,
    ExpiresAt,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ScrapeJobs {
    Table,
    Id,
    VpnSlug,
    Status,
    LastRunAt,
    LastError,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Slug,
    Locale,
    Title,
    Excerpt,
    Content,
    Author,
    Published,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContentQueue {
    Table,
    Id,
    Topic,
    Locale,
    Status,
    Priority,
    ScheduledAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AffiliateLinks {
    Table,
    Id,
    VpnSlug,
    Locale,
    Country,
    Url,
    Active,
    CreatedAt,
}
