use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set, TransactionTrait,
};
use tracing::{debug, info};

use crate::{
    db::LazyDb,
    entities::vpn_provider,
    error::{AppError, AppResult},
    mapper::now_millis,
    models::{NewVpn, VpnData, VpnPatch},
};

/// Access to persisted VPN providers.
///
/// List projections are ordered by `sort_order` ascending, ties broken by id.
/// Lookups return `Ok(None)` for a missing row.
#[async_trait]
pub trait VpnStore: Send + Sync {
    async fn all(&self) -> AppResult<Vec<VpnData>>;

    async fn featured(&self) -> AppResult<Vec<VpnData>>;

    async fn by_slug(&self, slug: &str) -> AppResult<Option<VpnData>>;

    async fn by_id(&self, id: i32) -> AppResult<Option<VpnData>>;

    async fn create(&self, input: NewVpn) -> AppResult<VpnData>;

    /// Applies only the fields present in `patch` and bumps `updated_at`.
    /// Fails with [`AppError::NotFound`] for an unknown id.
    async fn update(&self, id: i32, patch: VpnPatch) -> AppResult<VpnData>;

    /// Returns whether a row was removed. Dependent reviews and clicks go
    /// with it through `ON DELETE CASCADE`.
    async fn delete(&self, id: i32) -> AppResult<bool>;

    async fn count(&self) -> AppResult<u64>;

    /// One-time import of `vpns` into an empty store. All rows are written
    /// or none are; a store that already has rows is reported as a conflict.
    async fn seed(&self, vpns: &[VpnData]) -> AppResult<usize>;
}

#[derive(Clone)]
pub struct VpnRepository {
    db: LazyDb,
}

impl VpnRepository {
    pub fn new(db: LazyDb) -> Self {
        Self { db }
    }
}

fn ordered(query: Select<vpn_provider::Entity>) -> Select<vpn_provider::Entity> {
    query.order_by_asc(vpn_provider::Column::SortOrder).order_by_asc(vpn_provider::Column::Id)
}

#[async_trait]
impl VpnStore for VpnRepository {
    async fn all(&self) -> AppResult<Vec<VpnData>> {
        let db = self.db.get().await?;
        let rows = ordered(vpn_provider::Entity::find()).all(db).await?;
        Ok(rows.into_iter().map(VpnData::from).collect())
    }

    async fn featured(&self) -> AppResult<Vec<VpnData>> {
        let db = self.db.get().await?;
        let rows = ordered(vpn_provider::Entity::find())
            .filter(vpn_provider::Column::Featured.eq(true))
            .all(db)
            .await?;
        Ok(rows.into_iter().map(VpnData::from).collect())
    }

    async fn by_slug(&self, slug: &str) -> AppResult<Option<VpnData>> {
        let db = self.db.get().await?;
        let row = vpn_provider::Entity::find()
            .filter(vpn_provider::Column::Slug.eq(slug))
            .one(db)
            .await?;
        Ok(row.map(VpnData::from))
    }

    async fn by_id(&self, id: i32) -> AppResult<Option<VpnData>> {
        let db = self.db.get().await?;
        let row = vpn_provider::Entity::find_by_id(id).one(db).await?;
        Ok(row.map(VpnData::from))
    }

    async fn create(&self, input: NewVpn) -> AppResult<VpnData> {
        let input = input.validated()?;
        let db = self.db.get().await?;

        let row = input
            .into_active_model(now_millis())
            .insert(db)
            .await
            .map_err(AppError::from_write)?;
        info!(id = row.id, slug = %row.slug, "created VPN provider");
        Ok(row.into())
    }

    async fn update(&self, id: i32, patch: VpnPatch) -> AppResult<VpnData> {
        patch.validate()?;
        let db = self.db.get().await?;

        let existing = vpn_provider::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("VPN provider {id} not found")))?;

        // updated_at strictly advances, even for two writes in the same millisecond.
        let updated_at = now_millis().max(existing.updated_at.saturating_add(1));
        let mut row: vpn_provider::ActiveModel = existing.into();
        patch.apply(&mut row);
        row.updated_at = Set(updated_at);

        let row = row.update(db).await.map_err(AppError::from_write)?;
        info!(id, slug = %row.slug, "updated VPN provider");
        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let db = self.db.get().await?;
        let res = vpn_provider::Entity::delete_by_id(id).exec(db).await?;
        let removed = res.rows_affected > 0;
        if removed {
            info!(id, "deleted VPN provider");
        } else {
            debug!(id, "delete of unknown VPN provider ignored");
        }
        Ok(removed)
    }

    async fn count(&self) -> AppResult<u64> {
        let db = self.db.get().await?;
        Ok(vpn_provider::Entity::find().count(db).await?)
    }

    async fn seed(&self, vpns: &[VpnData]) -> AppResult<usize> {
        let inputs =
            vpns.iter().map(|vpn| NewVpn::from(vpn).validated()).collect::<AppResult<Vec<_>>>()?;
        let db = self.db.get().await?;

        // Dropping the transaction on an early return rolls it back.
        let txn = db.begin().await?;
        let existing = vpn_provider::Entity::find().count(&txn).await?;
        if existing > 0 {
            return Err(AppError::Conflict(format!(
                "store already holds {existing} providers; seeding is only allowed when empty"
            )));
        }

        let now = now_millis();
        for input in inputs {
            input.into_active_model(now).insert(&txn).await.map_err(AppError::from_write)?;
        }
        txn.commit().await?;

        info!(count = vpns.len(), "seeded VPN providers");
        Ok(vpns.len())
    }
}
