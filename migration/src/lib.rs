pub use sea_orm_migration::prelude::*;

mod m20240119_153012_create_users_table;
mod m20240119_161408_create_hackathons_table;
mod m20240120_094517_create_teams_table;
mod m20240120_101236_create_team_members_table;
mod m20240205_183025_create_exercises_table;
mod m20240205_190142_create_team_exercises_table;
mod m20240221_213304_create_submissions_table;
mod m20240221_215940_create_grades_table;
mod m20240307_114508_create_leaderboard_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240119_153012_create_users_table::Migration),
            Box::new(m20240119_161408_create_hackathons_table::Migration),
            Box::new(m20240120_094517_create_teams_table::Migration),
            Box::new(m20240120_101236_create_team_members_table::Migration),
            Box::new(m20240205_183025_create_exercises_table::Migration),
            Box::new(m20240205_190142_create_team_exercises_table::Migration),
            Box::new(m20240221_213304_create_submissions_table::Migration),
            Box::new(m20240221_215940_create_grades_table::Migration),
            Box::new(m20240307_114508_create_leaderboard_table::Migration),
        ]
    }
}
