//! League domain models and parameters.

use crate::model::league::{
    LeagueInformationDto, LeagueRequestDto, ManagerDto, PublicLeagueDto, TeamManagersDto,
    TeamSummaryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueInformation {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub public_view: bool,
    pub public_join: bool,
}

impl LeagueInformation {
    pub fn from_entity(entity: entity::league::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            public_view: entity.public_view,
            public_join: entity.public_join,
        }
    }

    /// Converts to the wire DTO; the caller supplies the rendered description.
    pub fn into_dto(self, description_html: String) -> LeagueInformationDto {
        LeagueInformationDto {
            id: self.id,
            name: self.name,
            description: self.description,
            description_html,
            public_view: self.public_view,
            public_join: self.public_join,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublicLeague {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub public_join: bool,
}

impl PublicLeague {
    pub fn from_entity(entity: entity::league::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            public_join: entity.public_join,
        }
    }

    pub fn into_dto(self) -> PublicLeagueDto {
        PublicLeagueDto {
            id: self.id,
            name: self.name,
            description: self.description,
            public_join: self.public_join,
        }
    }
}

/// One row of the league standings, sorted by record.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub id: i32,
    pub name: String,
    pub tag: String,
    pub wins: i32,
    pub losses: i32,
    pub icon_small: String,
    pub icon_large: String,
}

impl TeamSummary {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tag: entity.tag,
            wins: entity.wins,
            losses: entity.losses,
            icon_small: entity.icon_small,
            icon_large: entity.icon_large,
        }
    }

    pub fn into_dto(self) -> TeamSummaryDto {
        TeamSummaryDto {
            id: self.id,
            name: self.name,
            tag: self.tag,
            wins: self.wins,
            losses: self.losses,
            icon_small: self.icon_small,
            icon_large: self.icon_large,
        }
    }
}

/// A user with management rights on one team, as seen by a league admin.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerSummary {
    pub user_id: i32,
    pub user_email: String,
    pub administrator: bool,
    pub information: bool,
    pub players: bool,
    pub report_results: bool,
}

impl ManagerSummary {
    pub fn into_dto(self) -> ManagerDto {
        ManagerDto {
            user_id: self.user_id,
            user_email: self.user_email,
            administrator: self.administrator,
            information: self.information,
            players: self.players,
            report_results: self.report_results,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamManagers {
    pub team_id: i32,
    pub team_name: String,
    pub team_tag: String,
    pub managers: Vec<ManagerSummary>,
}

impl TeamManagers {
    pub fn into_dto(self) -> TeamManagersDto {
        TeamManagersDto {
            team_id: self.team_id,
            team_name: self.team_name,
            team_tag: self.team_tag,
            managers: self.managers.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}

/// Fields for creating or updating a league.
#[derive(Debug, Clone)]
pub struct LeagueParams {
    pub name: String,
    pub description: String,
    pub public_view: bool,
    pub public_join: bool,
}

impl LeagueParams {
    pub fn from_dto(dto: LeagueRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            public_view: dto.public_view,
            public_join: dto.public_join,
        }
    }
}
