use test_utils::{builder::TestBuilder, factory};

use crate::server::data::{league::LeagueRepository, league_permission::LeaguePermissionRepository};

mod join;
mod summary;
mod viewable;
