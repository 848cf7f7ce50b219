use uuid::{fmt::Simple, Uuid};

#[inline(always)]
pub fn hackathon_info(hackathon_id: &Uuid) -> String {
    let mut buf = [0u8; Simple::LENGTH];
    let id = hackathon_id.as_simple().encode_lower(&mut buf);
    format!("hackathon.{id}.info")
}

#[inline(always)]
pub fn hackathon_leaderboard(hackathon_id: &Uuid) -> String {
    let mut buf = [0u8; Simple::LENGTH];
    let id = hackathon_id.as_simple().encode_lower(&mut buf);
    format!("hackathon.{id}.leaderboard")
}

#[inline(always)]
pub fn team_info(team_id: &Uuid) -> String {
    let mut buf = [0u8; Simple::LENGTH];
    let id = team_id.as_simple().encode_lower(&mut buf);
    format!("team.{id}.info")
}
