//! Fail-fast field validation.
//!
//! Each entity has an ordered list of checks; the first violated check is the
//! single problem reported to the client (400 with the check's code), and
//! everything after it is skipped. Pure length/format checks run first, then
//! the uniqueness checks that need a repository round trip. A repository
//! failure during a uniqueness check propagates as an infrastructure error,
//! never as a validation code.

#[cfg(test)]
mod test;

use thiserror::Error;

use crate::server::{
    data::{league::LeagueRepository, player::PlayerRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
};

pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_TAG_LENGTH: usize = 5;
pub const MIN_TAG_LENGTH: usize = 2;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_GAME_IDENTIFIER_LENGTH: usize = 50;
pub const MIN_GAME_IDENTIFIER_LENGTH: usize = 2;
pub const MAX_EMAIL_LENGTH: usize = 256;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A violated field constraint, carrying its stable wire code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("name exceeds {MAX_NAME_LENGTH} characters")]
    NameTooLong,
    #[error("name is shorter than {MIN_NAME_LENGTH} characters")]
    NameTooShort,
    #[error("tag exceeds {MAX_TAG_LENGTH} characters")]
    TagTooLong,
    #[error("tag is shorter than {MIN_TAG_LENGTH} characters")]
    TagTooShort,
    #[error("description exceeds {MAX_DESCRIPTION_LENGTH} characters")]
    DescriptionTooLong,
    #[error("game identifier exceeds {MAX_GAME_IDENTIFIER_LENGTH} characters")]
    GameIdentifierTooLong,
    #[error("game identifier is shorter than {MIN_GAME_IDENTIFIER_LENGTH} characters")]
    GameIdentifierTooShort,
    #[error("name is already in use")]
    NameInUse,
    #[error("tag is already in use")]
    TagInUse,
    #[error("game identifier is already in use in this league")]
    GameIdentifierInUse,
    #[error("email address is malformed")]
    EmailMalformed,
    #[error("email exceeds {MAX_EMAIL_LENGTH} characters")]
    EmailTooLong,
    #[error("email is already registered")]
    EmailInUse,
    #[error("password is shorter than {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
    #[error("request body could not be parsed")]
    MalformedInput,
}

impl Violation {
    /// Stable machine-readable code sent to the client as `{"error": code}`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameTooLong => "nameTooLong",
            Self::NameTooShort => "nameTooShort",
            Self::TagTooLong => "tagTooLong",
            Self::TagTooShort => "tagTooShort",
            Self::DescriptionTooLong => "descriptionTooLong",
            Self::GameIdentifierTooLong => "gameIdentifierTooLong",
            Self::GameIdentifierTooShort => "gameIdentifierTooShort",
            Self::NameInUse => "nameInUse",
            Self::TagInUse => "tagInUse",
            Self::GameIdentifierInUse => "gameIdentifierInUse",
            Self::EmailMalformed => "emailMalformed",
            Self::EmailTooLong => "emailTooLong",
            Self::EmailInUse => "emailInUse",
            Self::PasswordTooShort => "passwordTooShort",
            Self::MalformedInput => "malformedInput",
        }
    }
}

/// Length checks for team name/tag/description, in declaration order.
pub fn check_team_field_lengths(
    name: &str,
    tag: &str,
    description: &str,
) -> Result<(), Violation> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(Violation::NameTooLong);
    }
    if tag.len() > MAX_TAG_LENGTH {
        return Err(Violation::TagTooLong);
    }
    if name.len() < MIN_NAME_LENGTH {
        return Err(Violation::NameTooShort);
    }
    if tag.len() < MIN_TAG_LENGTH {
        return Err(Violation::TagTooShort);
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(Violation::DescriptionTooLong);
    }
    Ok(())
}

/// Length checks for league name/description, in declaration order.
pub fn check_league_field_lengths(name: &str, description: &str) -> Result<(), Violation> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(Violation::DescriptionTooLong);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(Violation::NameTooLong);
    }
    Ok(())
}

/// Length checks for player name/game identifier, in declaration order.
pub fn check_player_field_lengths(name: &str, game_identifier: &str) -> Result<(), Violation> {
    if game_identifier.len() > MAX_GAME_IDENTIFIER_LENGTH {
        return Err(Violation::GameIdentifierTooLong);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(Violation::NameTooLong);
    }
    if game_identifier.len() < MIN_GAME_IDENTIFIER_LENGTH {
        return Err(Violation::GameIdentifierTooShort);
    }
    Ok(())
}

/// Format and length checks for a new account, in declaration order.
pub fn check_new_user_fields(email: &str, password: &str) -> Result<(), Violation> {
    let (local, domain) = email.split_once('@').unwrap_or(("", ""));
    if local.is_empty() || domain.is_empty() {
        return Err(Violation::EmailMalformed);
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(Violation::EmailTooLong);
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(Violation::PasswordTooShort);
    }
    Ok(())
}

/// Full team validation: lengths, then name/tag uniqueness within the league.
///
/// `excluded_team_id` skips the team being updated in the uniqueness checks.
pub async fn validate_team_fields(
    teams: &TeamRepository<'_>,
    league_id: i32,
    excluded_team_id: Option<i32>,
    name: &str,
    tag: &str,
    description: &str,
) -> Result<(), AppError> {
    check_team_field_lengths(name, tag, description)?;

    if teams.is_name_in_use(league_id, excluded_team_id, name).await? {
        return Err(Violation::NameInUse.into());
    }
    if teams.is_tag_in_use(league_id, excluded_team_id, tag).await? {
        return Err(Violation::TagInUse.into());
    }

    Ok(())
}

/// Full league validation: lengths, then global name uniqueness.
pub async fn validate_league_fields(
    leagues: &LeagueRepository<'_>,
    excluded_league_id: Option<i32>,
    name: &str,
    description: &str,
) -> Result<(), AppError> {
    check_league_field_lengths(name, description)?;

    if leagues.is_name_in_use(excluded_league_id, name).await? {
        return Err(Violation::NameInUse.into());
    }

    Ok(())
}

/// Full player validation: lengths, then league-wide identifier uniqueness.
pub async fn validate_player_fields(
    players: &PlayerRepository<'_>,
    league_id: i32,
    excluded_player_id: Option<i32>,
    name: &str,
    game_identifier: &str,
) -> Result<(), AppError> {
    check_player_field_lengths(name, game_identifier)?;

    if players
        .is_game_identifier_in_use(league_id, excluded_player_id, game_identifier)
        .await?
    {
        return Err(Violation::GameIdentifierInUse.into());
    }

    Ok(())
}

/// Full new-account validation: format and lengths, then email uniqueness.
pub async fn validate_new_user(
    users: &UserRepository<'_>,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    check_new_user_fields(email, password)?;

    if users.is_email_in_use(email).await? {
        return Err(Violation::EmailInUse.into());
    }

    Ok(())
}
