use serde::{Deserialize, Serialize};

use crate::error::AllocationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamStatus {
    Available,
    Moving,
    Rescuing,
    LostContact,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub members: u32,
    pub capacity: u32,
    pub status: TeamStatus,
}

impl Team {
    pub fn is_full(&self) -> bool {
        self.members >= self.capacity
    }

    pub fn open_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.members)
    }

    /// Add one volunteer to the team.
    pub fn add_member(&mut self) -> Result<u32, AllocationError> {
        if self.is_full() {
            return Err(AllocationError::TeamFull {
                team_id: self.id.clone(),
                capacity: self.capacity,
            });
        }
        self.members += 1;
        Ok(self.members)
    }
}
