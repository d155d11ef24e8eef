//! Generic repository over any table bound to a domain entity.
//!
//! The five elementary operations (create, update, remove, get, get-all)
//! are written once against the [`Table`] binding. Entity-specific
//! repositories compose a [`BaseRepository`] and build their own queries
//! on top of it.
//!
//! Every read goes back to the store and returns owned domain values.
//! Nothing is cached and nothing tracks changes made to returned values.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use common::{AppError, AppResult, OptionExt};
use domain::{Entity, EntityId};

/// Binds a SeaORM entity to the domain type stored in its rows.
pub trait Table: EntityTrait {
    /// Domain entity materialized from rows of this table
    type Domain: Entity + From<Self::Model>;

    /// Column holding the entity identifier
    fn id_column() -> Self::Column;

    /// Active model carrying every column of `entity`.
    ///
    /// Transient entities must leave the id unset so the store assigns one.
    fn to_active_model(entity: &Self::Domain) -> Self::ActiveModel;
}

/// CRUD operations shared by every table.
pub struct BaseRepository<T: Table> {
    db: DatabaseConnection,
    _table: PhantomData<fn() -> T>,
}

impl<T: Table> Clone for BaseRepository<T> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _table: PhantomData,
        }
    }
}

impl<T> BaseRepository<T>
where
    T: Table,
    T::Model: IntoActiveModel<T::ActiveModel> + Send + Sync,
    T::ActiveModel: ActiveModelBehavior + Send + 'static,
{
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _table: PhantomData,
        }
    }

    /// Insert a new record and return it as stored.
    ///
    /// A transient entity gets its identifier from the store.
    pub async fn create(&self, entity: T::Domain) -> AppResult<T::Domain> {
        entity.validate()?;

        let model = T::to_active_model(&entity).insert(&self.db).await?;
        let created: T::Domain = model.into();

        tracing::debug!(table = T::default().table_name(), id = created.id(), "Record created");
        Ok(created)
    }

    /// Replace every column of the record that shares `entity`'s identifier.
    pub async fn update(&self, entity: T::Domain) -> AppResult<T::Domain> {
        entity.validate()?;

        if entity.is_transient() {
            return Err(AppError::NotFound);
        }

        let model = T::to_active_model(&entity)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::NotFound,
                other => AppError::from(other),
            })?;
        let updated: T::Domain = model.into();

        tracing::debug!(table = T::default().table_name(), id = updated.id(), "Record updated");
        Ok(updated)
    }

    /// Delete the record with the given identifier.
    ///
    /// Removing an identifier that is not stored is an error, so a second
    /// removal of the same id fails with [`AppError::NotFound`].
    pub async fn remove(&self, id: EntityId) -> AppResult<()> {
        let result = T::delete_many()
            .filter(T::id_column().eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::debug!(table = T::default().table_name(), id, "Record removed");
        Ok(())
    }

    /// Find record by identifier
    pub async fn get(&self, id: EntityId) -> AppResult<T::Domain> {
        T::find()
            .filter(T::id_column().eq(id))
            .one(&self.db)
            .await?
            .map(|model| model.into())
            .ok_or_not_found()
    }

    /// All records, ordered by identifier
    pub async fn get_all(&self) -> AppResult<Vec<T::Domain>> {
        let models = T::find()
            .order_by_asc(T::id_column())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|model| model.into()).collect())
    }
}
