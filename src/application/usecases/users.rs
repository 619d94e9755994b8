use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    domain::{
        entities::users::{MemberProfileEntity, TrainerProfileEntity},
        repositories::users::UserRepository,
        value_objects::{
            enums::roles::UserRole,
            users::{
                MemberProfileModel, RegisterUserModel, RoleDetails, TrainerProfileModel,
                UserModel, UserProfileModel,
            },
        },
    },
    infrastructure::hashing,
};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("user already exists")]
    AlreadyExists,
    #[error("user not found")]
    NotFound,
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UserError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            UserError::AlreadyExists | UserError::Validation(_) => StatusCode::BAD_REQUEST,
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UserResult<T> = Result<T, UserError>;

pub struct UsersUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
}

impl<U> UsersUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    fn validate(model: &RegisterUserModel) -> UserResult<()> {
        if !(0..=120).contains(&model.age) {
            return Err(UserError::Validation(
                "age must be between 0 and 120".to_string(),
            ));
        }
        if model.gender != "male" && model.gender != "female" {
            return Err(UserError::Validation(
                "gender must be male or female".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn register(&self, model: RegisterUserModel) -> UserResult<UserModel> {
        Self::validate(&model)?;

        if self
            .user_repo
            .find_by_username(&model.username)
            .await?
            .is_some()
        {
            warn!(username = %model.username, "users: registration with taken username");
            return Err(UserError::AlreadyExists);
        }

        let password_hash = hashing::hash_password(&model.password)?;
        let user = self.user_repo.register(model.to_entity(password_hash)).await?;

        // Empty detail row matching the role discriminator; admins get none.
        match model.role {
            UserRole::Member => {
                self.user_repo
                    .create_member_profile(MemberProfileEntity {
                        user_id: user.id,
                        weight: None,
                        height: None,
                        membership_status: None,
                    })
                    .await?;
            }
            UserRole::Trainer => {
                self.user_repo
                    .create_trainer_profile(TrainerProfileEntity {
                        user_id: user.id,
                        description: None,
                        experience: None,
                        specialization: None,
                        rating: None,
                        rate_per_hour: None,
                        certification: None,
                        photo: None,
                    })
                    .await?;
            }
            UserRole::Admin => {}
        }

        info!(user_id = %user.id, role = %model.role, "users: user registered");
        Ok(UserModel::from(user))
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> UserResult<UserModel> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !hashing::verify_password(password, &user.password_hash)? {
            warn!(username, "users: failed login attempt");
            return Err(UserError::InvalidCredentials);
        }

        info!(user_id = %user.id, "users: login succeeded");
        Ok(UserModel::from(user))
    }

    pub async fn profile(&self, user_id: Uuid) -> UserResult<UserProfileModel> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)?;

        let role = UserRole::from_str(&user.role).unwrap_or_default();
        let details = match role {
            UserRole::Member => {
                let profile = self.user_repo.find_member_profile(user_id).await?;
                RoleDetails::Member(profile.map(MemberProfileModel::from).unwrap_or(
                    MemberProfileModel {
                        weight: None,
                        height: None,
                        membership_status: None,
                    },
                ))
            }
            UserRole::Trainer => {
                let profile = self.user_repo.find_trainer_profile(user_id).await?;
                RoleDetails::Trainer(profile.map(TrainerProfileModel::from).unwrap_or(
                    TrainerProfileModel {
                        description: None,
                        experience: None,
                        specialization: None,
                        rating: None,
                        rate_per_hour: None,
                        certification: None,
                        photo: None,
                    },
                ))
            }
            UserRole::Admin => RoleDetails::Admin,
        };

        Ok(UserProfileModel {
            user: UserModel::from(user),
            details,
        })
    }

    pub async fn list_users(&self) -> UserResult<Vec<UserModel>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(UserModel::from).collect())
    }

    pub async fn update_user(
        &self,
        user_id: Uuid,
        model: RegisterUserModel,
    ) -> UserResult<UserModel> {
        Self::validate(&model)?;

        let password_hash = hashing::hash_password(&model.password)?;
        let updated = self
            .user_repo
            .update(user_id, model.to_edit_entity(password_hash))
            .await?
            .ok_or(UserError::NotFound)?;

        info!(%user_id, "users: user updated");
        Ok(UserModel::from(updated))
    }

    pub async fn delete_user(&self, user_id: Uuid) -> UserResult<()> {
        if !self.user_repo.delete(user_id).await? {
            return Err(UserError::NotFound);
        }
        info!(%user_id, "users: user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::users::UserEntity, repositories::users::MockUserRepository,
    };
    use chrono::Utc;

    fn register_model(role: UserRole) -> RegisterUserModel {
        RegisterUserModel {
            username: "jdoe".to_string(),
            password: "hunter2".to_string(),
            name: "Jordan".to_string(),
            surname: "Doe".to_string(),
            age: 28,
            gender: "female".to_string(),
            email: "jdoe@example.com".to_string(),
            phone: None,
            role,
        }
    }

    fn user_entity(id: Uuid, role: UserRole, password_hash: String) -> UserEntity {
        UserEntity {
            id,
            username: "jdoe".to_string(),
            name: "Jordan".to_string(),
            surname: "Doe".to_string(),
            age: 28,
            gender: "female".to_string(),
            email: "jdoe@example.com".to_string(),
            phone: None,
            password_hash,
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn registering_member_creates_detail_row() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(|_| Box::pin(async { Ok(None) }));
        user_repo.expect_register().returning(|entity| {
            let user = UserEntity {
                id: Uuid::new_v4(),
                username: entity.username,
                name: entity.name,
                surname: entity.surname,
                age: entity.age,
                gender: entity.gender,
                email: entity.email,
                phone: entity.phone,
                password_hash: entity.password_hash,
                role: entity.role,
                created_at: entity.created_at,
                updated_at: entity.updated_at,
            };
            Box::pin(async move { Ok(user) })
        });
        user_repo
            .expect_create_member_profile()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase = UsersUseCase::new(Arc::new(user_repo));
        let user = usecase.register(register_model(UserRole::Member)).await.unwrap();

        assert_eq!(user.role, UserRole::Member);
    }

    #[tokio::test]
    async fn taken_username_is_rejected() {
        let mut user_repo = MockUserRepository::new();
        let existing = user_entity(Uuid::new_v4(), UserRole::Member, "x".to_string());
        user_repo.expect_find_by_username().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });

        let usecase = UsersUseCase::new(Arc::new(user_repo));
        let result = usecase.register(register_model(UserRole::Member)).await;

        assert!(matches!(result, Err(UserError::AlreadyExists)));
    }

    #[tokio::test]
    async fn out_of_range_age_fails_validation() {
        let user_repo = MockUserRepository::new();
        let usecase = UsersUseCase::new(Arc::new(user_repo));

        let mut model = register_model(UserRole::Member);
        model.age = 121;

        let result = usecase.register(model).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let hash = hashing::hash_password("correct-horse").unwrap();
        let user = user_entity(Uuid::new_v4(), UserRole::Member, hash);

        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_username().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let usecase = UsersUseCase::new(Arc::new(user_repo));
        let result = usecase.authenticate("jdoe", "battery-staple").await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn admin_profile_has_no_detail_record() {
        let user_id = Uuid::new_v4();
        let user = user_entity(user_id, UserRole::Admin, "x".to_string());

        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let usecase = UsersUseCase::new(Arc::new(user_repo));
        let profile = usecase.profile(user_id).await.unwrap();

        assert_eq!(profile.details, RoleDetails::Admin);
    }
}
