//! Mock data the dashboard starts from. Rebuilt on every call; nothing is
//! persisted.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    Coordinates, InventoryItem, LocationStatus, Needs, ReliefLocation, Team, TeamStatus, Urgency,
    VolunteerRequest,
};

fn location(
    id: &str,
    name: &str,
    province: &str,
    (lat, lng): (f64, f64),
    urgency: Urgency,
    people_count: u32,
    needs: Needs,
    status: LocationStatus,
    reported_at: DateTime<Utc>,
) -> ReliefLocation {
    ReliefLocation {
        id: id.to_string(),
        name: name.to_string(),
        province: province.to_string(),
        coordinates: Coordinates::new(lat, lng),
        urgency,
        people_count,
        needs,
        status,
        reported_at,
        danger_score: None,
        priority_score: None,
        distance_from_hq: None,
        assigned_team: None,
    }
}

const fn needs(food: bool, water: bool, medicine: bool, emergency_rescue: bool) -> Needs {
    Needs {
        food,
        water,
        medicine,
        emergency_rescue,
    }
}

/// Report times are expressed relative to `now`.
pub fn relief_locations(now: DateTime<Utc>) -> Vec<ReliefLocation> {
    vec![
        location(
            "RL-001",
            "Long Biên riverside",
            "Hà Nội",
            (21.0450, 105.8700),
            Urgency::High,
            240,
            needs(true, true, false, true),
            LocationStatus::Unassigned,
            now - Duration::hours(3),
        ),
        location(
            "RL-002",
            "Hoàng Mai lowlands",
            "Hà Nội",
            (20.9960, 105.8670),
            Urgency::Medium,
            120,
            needs(true, true, true, false),
            LocationStatus::Assigned,
            now - Duration::hours(8),
        ),
        location(
            "RL-003",
            "Tây Hồ embankment",
            "Hà Nội",
            (21.0727, 105.8198),
            Urgency::Low,
            45,
            needs(false, true, false, false),
            LocationStatus::Unassigned,
            now - Duration::minutes(40),
        ),
        location(
            "RL-004",
            "Lệ Thủy village",
            "Quảng Bình",
            (17.2140, 106.7900),
            Urgency::High,
            380,
            needs(true, true, true, true),
            LocationStatus::Unassigned,
            now - Duration::hours(12),
        ),
        location(
            "RL-005",
            "Bắc Hà landslide",
            "Lào Cai",
            (22.5370, 104.2900),
            Urgency::High,
            60,
            needs(false, false, true, true),
            LocationStatus::OnTheWay,
            now - Duration::hours(5),
        ),
        location(
            "RL-006",
            "Thanh Xuân shelter",
            "Hà Nội",
            (20.9930, 105.8100),
            Urgency::Medium,
            150,
            needs(true, false, false, false),
            LocationStatus::Unassigned,
            now - Duration::hours(1),
        ),
    ]
}

pub fn teams() -> Vec<Team> {
    let team = |id: &str, name: &str, members, capacity, status| Team {
        id: id.to_string(),
        name: name.to_string(),
        members,
        capacity,
        status,
    };
    vec![
        team("TM-01", "Đội cứu hộ Alpha", 8, 10, TeamStatus::Available),
        team("TM-02", "Đội y tế Bravo", 6, 6, TeamStatus::Rescuing),
        team("TM-03", "Đội hậu cần Charlie", 4, 12, TeamStatus::Moving),
        team("TM-04", "Đội thuyền Delta", 5, 8, TeamStatus::LostContact),
        team("TM-05", "Đội tình nguyện Echo", 3, 10, TeamStatus::Available),
    ]
}

pub fn volunteers() -> Vec<VolunteerRequest> {
    let volunteer = |id: &str, name: &str, skills: &[&str], lat, lng| VolunteerRequest {
        id: id.to_string(),
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        coordinates: Coordinates::new(lat, lng),
        distance: None,
        is_nearest: false,
    };
    vec![
        volunteer("VR-01", "Nguyễn Văn An", &["first-aid", "driving"], 21.0727, 105.8198),
        volunteer("VR-02", "Trần Thị Bình", &["medical"], 21.0049, 105.8460),
        volunteer("VR-03", "Lê Minh Châu", &["boat", "swimming"], 20.9800, 105.7900),
        volunteer("VR-04", "Phạm Quốc Dũng", &["logistics"], 21.0450, 105.8700),
        volunteer("VR-05", "Hoàng Thu Hà", &["first-aid", "cooking"], 21.0190, 105.8080),
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    let item = |id: &str, name: &str, category: &str, current, capacity, unit: &str| InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        current,
        capacity,
        unit: unit.to_string(),
    };
    vec![
        item("INV-01", "Rice", "food", 1_800, 5_000, "kg"),
        item("INV-02", "Bottled water", "water", 900, 6_000, "bottle"),
        item("INV-03", "First-aid kit", "medicine", 140, 200, "kit"),
        item("INV-04", "Life jacket", "rescue", 35, 300, "piece"),
        item("INV-05", "Tarpaulin", "shelter", 420, 500, "sheet"),
    ]
}
