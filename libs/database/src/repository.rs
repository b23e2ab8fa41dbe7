use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use std::marker::PhantomData;

/// Generic CRUD helpers over a SeaORM entity
///
/// Domain repositories hold one of these and add their own queries on top,
/// reaching the connection through [`BaseRepository::db`].
///
/// ```ignore
/// pub struct PgProductRepository {
///     base: BaseRepository<entity::Entity>,
/// }
/// ```
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert a row and return the stored model
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Update a row by primary key, `DbErr::RecordNotUpdated` when it is gone
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    pub async fn find_by_id<T>(&self, id: T) -> Result<Option<E::Model>, DbErr>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Delete by primary key, returning the number of rows removed
    pub async fn delete_by_id<T>(&self, id: T) -> Result<u64, DbErr>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
