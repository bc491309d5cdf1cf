//! Generic data access shared by every resource.
//!
//! [`Repository`] is parameterized by a sea-orm `ActiveModel` and exposes the
//! same get/list/create/update/remove operations for each entity. All
//! operations take any [`ConnectionTrait`], so handlers decide whether they run
//! against the pool or inside a transaction.

use std::marker::PhantomData;

use sea_orm::*;

use crate::entity::{yolo_module, yolo_version};

/// Request contract that can be written onto an active model.
///
/// Implementations must `Set` every field the contract carries: updates are a
/// full replace of those fields, never a merge.
pub trait WriteContract<A: ActiveModelTrait> {
    fn write(self, active: &mut A);
}

pub struct Repository<A> {
    _active: PhantomData<A>,
}

pub type YoloVersions = Repository<yolo_version::ActiveModel>;
pub type YoloModules = Repository<yolo_module::ActiveModel>;

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;

type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;

impl<A> Repository<A>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    ModelOf<A>: IntoActiveModel<A> + Send + Sync,
    <<A::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    /// Look up a record by primary key.
    pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<ModelOf<A>>, DbErr> {
        A::Entity::find_by_id(id).one(db).await
    }

    /// Page through records in insertion (primary key) order.
    pub async fn get_multi<C: ConnectionTrait>(
        db: &C,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ModelOf<A>>, DbErr> {
        let mut select = A::Entity::find();
        for key in <A::Entity as EntityTrait>::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }

        select.offset(Some(skip)).limit(Some(limit)).all(db).await
    }

    pub async fn create<C, I>(db: &C, input: I) -> Result<ModelOf<A>, DbErr>
    where
        C: ConnectionTrait,
        I: WriteContract<A>,
    {
        let mut active = A::new();
        input.write(&mut active);
        active.insert(db).await
    }

    /// Overwrite `existing` with every field of `input` and persist it.
    pub async fn update<C, I>(db: &C, existing: ModelOf<A>, input: I) -> Result<ModelOf<A>, DbErr>
    where
        C: ConnectionTrait,
        I: WriteContract<A>,
    {
        let mut active: A = existing.into_active_model();
        input.write(&mut active);
        active.update(db).await
    }

    /// Delete by primary key and hand back the row as it was before deletion.
    ///
    /// Missing ids are not an error here; they yield `None` and delete nothing.
    pub async fn remove<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<ModelOf<A>>, DbErr> {
        let Some(existing) = Self::get(db, id).await? else {
            return Ok(None);
        };

        A::Entity::delete_by_id(id).exec(db).await?;
        Ok(Some(existing))
    }
}

impl YoloVersions {
    pub async fn get_by_name<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> Result<Option<yolo_version::Model>, DbErr> {
        yolo_version::Entity::find()
            .filter(yolo_version::Column::Name.eq(name))
            .one(db)
            .await
    }
}
