use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::users::{
        EditUserEntity, MemberProfileEntity, RegisterUserEntity, TrainerProfileEntity, UserEntity,
    },
    value_objects::enums::roles::UserRole,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for UserModel {
    fn from(entity: UserEntity) -> Self {
        let role = UserRole::from_str(&entity.role).unwrap_or_default();
        Self {
            id: entity.id,
            username: entity.username,
            name: entity.name,
            surname: entity.surname,
            age: entity.age,
            gender: entity.gender,
            email: entity.email,
            phone: entity.phone,
            role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserModel {
    pub username: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl RegisterUserModel {
    pub fn to_entity(&self, password_hash: String) -> RegisterUserEntity {
        RegisterUserEntity {
            username: self.username.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            age: self.age,
            gender: self.gender.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password_hash,
            role: self.role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // Updates reuse the registration payload and replace every field,
    // password included.
    pub fn to_edit_entity(&self, password_hash: String) -> EditUserEntity {
        EditUserEntity {
            username: self.username.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            age: self.age,
            gender: self.gender.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password_hash,
            role: self.role.to_string(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginModel {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenModel {
    pub access_token: String,
    pub token_type: String,
}

/// Role-specific detail shape selected by the `role` discriminator on the
/// user row. Admins carry no extra data.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleDetails {
    Member(MemberProfileModel),
    Trainer(TrainerProfileModel),
    Admin,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberProfileModel {
    pub weight: Option<f64>,
    pub height: Option<i32>,
    pub membership_status: Option<String>,
}

impl From<MemberProfileEntity> for MemberProfileModel {
    fn from(entity: MemberProfileEntity) -> Self {
        Self {
            weight: entity.weight,
            height: entity.height,
            membership_status: entity.membership_status,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrainerProfileModel {
    pub description: Option<String>,
    pub experience: Option<i32>,
    pub specialization: Option<String>,
    pub rating: Option<i32>,
    pub rate_per_hour: Option<i32>,
    pub certification: Option<String>,
    pub photo: Option<String>,
}

impl From<TrainerProfileEntity> for TrainerProfileModel {
    fn from(entity: TrainerProfileEntity) -> Self {
        Self {
            description: entity.description,
            experience: entity.experience,
            specialization: entity.specialization,
            rating: entity.rating,
            rate_per_hour: entity.rate_per_hour,
            certification: entity.certification,
            photo: entity.photo,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserProfileModel {
    #[serde(flatten)]
    pub user: UserModel,
    pub details: RoleDetails,
}
