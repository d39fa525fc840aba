use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{team::TeamRepository, team_permission::TeamPermissionRepository},
    model::team::TeamFields,
};

mod exists;
mod played_games;
