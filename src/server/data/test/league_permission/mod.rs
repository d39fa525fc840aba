use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::league_permission::LeaguePermissionRepository,
    middleware::permission::LeaguePermissions,
};

mod get;
mod set;
