use serde::Serialize;

/// Body of `PUT /project/:id/team` and `PUT /project/:id/team/remove`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberChange {
    pub team_member_id: String,
}

impl TeamMemberChange {
    pub fn new(team_member_id: impl Into<String>) -> Self {
        Self {
            team_member_id: team_member_id.into(),
        }
    }
}
