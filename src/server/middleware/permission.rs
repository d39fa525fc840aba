//! Pure permission evaluation over league and team permission records.
//!
//! A user's standing in a league is four independent flags, and likewise for
//! a team. A missing row means "no special permissions" (the default record),
//! never an error. Each gated capability is an explicit OR over the relevant
//! flags, written out once in [`Capability::granted_by`] so the whole matrix
//! can be read and audited in one place instead of being scattered through
//! the guards.

/// Per-league permission flags for one user. Absent row = all false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaguePermissions {
    pub administrator: bool,
    pub create_teams: bool,
    pub edit_teams: bool,
    pub edit_games: bool,
}

/// Per-team permission flags for one user. Absent row = all false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamPermissions {
    pub administrator: bool,
    pub information: bool,
    pub players: bool,
    pub report_results: bool,
}

/// A capability some guard requires, evaluated against both permission records.
///
/// League-scoped capabilities ignore the team record; callers pass
/// `TeamPermissions::default()` for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    LeagueAdmin,
    TeamAdmin,
    CreateTeam,
    EditSchedule,
    EditTeamInfo,
    EditPlayers,
    ReportResult,
}

impl Capability {
    /// Evaluates the capability's OR-formula. Pure; no lookups, no failures.
    ///
    /// Note the deliberate asymmetry: league-level `edit_teams` grants team
    /// information edits but not roster edits.
    pub fn granted_by(&self, league: &LeaguePermissions, team: &TeamPermissions) -> bool {
        match self {
            Self::LeagueAdmin => league.administrator,
            Self::TeamAdmin => league.administrator || team.administrator,
            Self::CreateTeam => league.administrator || league.create_teams,
            Self::EditSchedule => league.administrator || league.edit_games,
            Self::EditTeamInfo => {
                league.administrator
                    || league.edit_teams
                    || team.administrator
                    || team.information
            }
            Self::EditPlayers => league.administrator || team.administrator || team.players,
            Self::ReportResult => {
                league.administrator
                    || league.edit_games
                    || team.administrator
                    || team.report_results
            }
        }
    }
}
