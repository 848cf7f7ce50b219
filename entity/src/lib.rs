pub mod exercises;
pub mod grades;
pub mod hackathons;
pub mod leaderboard;
pub mod submissions;
pub mod team_exercises;
pub mod team_members;
pub mod teams;
pub mod users;
