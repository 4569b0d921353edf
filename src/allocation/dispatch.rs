use crate::error::AllocationError;
use crate::models::{LocationStatus, ReliefLocation, Team, TeamStatus, VolunteerRequest};
use crate::scoring::calculate_priority_score;

/// Send an available team to an unassigned location.
///
/// Nothing is modified on error.
pub fn dispatch_team(team: &mut Team, location: &mut ReliefLocation) -> Result<(), AllocationError> {
    if team.status != TeamStatus::Available {
        return Err(AllocationError::TeamUnavailable {
            team_id: team.id.clone(),
            status: team.status,
        });
    }
    location.advance_status(LocationStatus::Assigned)?;
    location.assigned_team = Some(team.id.clone());
    team.status = TeamStatus::Moving;

    // Priority carries a status bonus, so it moves with the status.
    if let Some(danger) = location.danger_score {
        location.priority_score = Some(calculate_priority_score(location, danger));
    }

    tracing::info!(team = %team.id, location = %location.id, "team dispatched");
    Ok(())
}

/// Add a volunteer to a team, returning the new member count.
pub fn assign_volunteer(team: &mut Team, volunteer: &VolunteerRequest) -> Result<u32, AllocationError> {
    let members = team.add_member()?;
    tracing::info!(team = %team.id, volunteer = %volunteer.id, members, "volunteer assigned");
    Ok(members)
}
