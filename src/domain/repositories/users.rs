use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::users::{
    EditUserEntity, MemberProfileEntity, RegisterUserEntity, TrainerProfileEntity, UserEntity,
};

#[async_trait]
#[automock]
pub trait UserRepository {
    async fn register(&self, register_user_entity: RegisterUserEntity) -> Result<UserEntity>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>>;
    async fn list(&self) -> Result<Vec<UserEntity>>;
    async fn update(
        &self,
        user_id: Uuid,
        edit_user_entity: EditUserEntity,
    ) -> Result<Option<UserEntity>>;
    async fn delete(&self, user_id: Uuid) -> Result<bool>;

    async fn create_member_profile(&self, profile: MemberProfileEntity) -> Result<()>;
    async fn create_trainer_profile(&self, profile: TrainerProfileEntity) -> Result<()>;
    async fn find_member_profile(&self, user_id: Uuid) -> Result<Option<MemberProfileEntity>>;
    async fn find_trainer_profile(&self, user_id: Uuid) -> Result<Option<TrainerProfileEntity>>;
}
