use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::users::{
            EditUserEntity, MemberProfileEntity, RegisterUserEntity, TrainerProfileEntity,
            UserEntity,
        },
        repositories::users::UserRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPool,
        schema::{member_profiles, trainer_profiles, users},
    },
};

pub struct UserPostgres {
    db_pool: Arc<PgPool>,
}

impl UserPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepository for UserPostgres {
    async fn register(&self, register_user_entity: RegisterUserEntity) -> Result<UserEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let user = insert_into(users::table)
            .values(&register_user_entity)
            .returning(UserEntity::as_returning())
            .get_result::<UserEntity>(&mut conn)?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let user = users::table
            .filter(users::username.eq(username))
            .select(UserEntity::as_select())
            .first::<UserEntity>(&mut conn)
            .optional()?;

        Ok(user)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let user = users::table
            .find(user_id)
            .select(UserEntity::as_select())
            .first::<UserEntity>(&mut conn)
            .optional()?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = users::table
            .select(UserEntity::as_select())
            .order(users::created_at.asc())
            .load::<UserEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        user_id: Uuid,
        edit_user_entity: EditUserEntity,
    ) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let user = update(users::table.find(user_id))
            .set(&edit_user_entity)
            .returning(UserEntity::as_returning())
            .get_result::<UserEntity>(&mut conn)
            .optional()?;

        Ok(user)
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(users::table.find(user_id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn create_member_profile(&self, profile: MemberProfileEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(member_profiles::table)
            .values(&profile)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn create_trainer_profile(&self, profile: TrainerProfileEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(trainer_profiles::table)
            .values(&profile)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn find_member_profile(&self, user_id: Uuid) -> Result<Option<MemberProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let profile = member_profiles::table
            .find(user_id)
            .select(MemberProfileEntity::as_select())
            .first::<MemberProfileEntity>(&mut conn)
            .optional()?;

        Ok(profile)
    }

    async fn find_trainer_profile(&self, user_id: Uuid) -> Result<Option<TrainerProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let profile = trainer_profiles::table
            .find(user_id)
            .select(TrainerProfileEntity::as_select())
            .first::<TrainerProfileEntity>(&mut conn)
            .optional()?;

        Ok(profile)
    }
}
