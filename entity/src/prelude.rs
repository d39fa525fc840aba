pub use super::game::Entity as Game;
pub use super::league::Entity as League;
pub use super::league_permission::Entity as LeaguePermission;
pub use super::player::Entity as Player;
pub use super::team::Entity as Team;
pub use super::team_permission::Entity as TeamPermission;
pub use super::user::Entity as User;
