use crate::model::user::UserProfileDto;

/// An account holder, identified by email.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            email: self.email,
        }
    }
}
