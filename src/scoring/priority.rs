use crate::models::{LocationStatus, ReliefLocation};

pub const DANGER_WEIGHT: f64 = 0.7;

/// Mountain provinces where road access is the limiting factor.
pub const REMOTE_PROVINCES: &[&str] = &[
    "Hà Giang",
    "Cao Bằng",
    "Lào Cai",
    "Lai Châu",
    "Điện Biên",
    "Yên Bái",
    "Sơn La",
    "Bắc Kạn",
];

/// Central coast provinces cut off by seasonal flooding.
pub const FLOOD_PRONE_PROVINCES: &[&str] = &[
    "Nghệ An",
    "Hà Tĩnh",
    "Quảng Bình",
    "Quảng Trị",
    "Thừa Thiên Huế",
    "Quảng Nam",
    "Quảng Ngãi",
];

fn in_list(list: &[&str], province: &str) -> bool {
    let province = province.trim();
    list.iter().any(|p| p.to_lowercase() == province.to_lowercase())
}

pub fn province_bonus(province: &str) -> f64 {
    if in_list(REMOTE_PROVINCES, province) {
        15.0
    } else if in_list(FLOOD_PRONE_PROVINCES, province) {
        10.0
    } else {
        5.0
    }
}

pub fn status_bonus(status: LocationStatus) -> f64 {
    match status {
        LocationStatus::Unassigned => 15.0,
        LocationStatus::Assigned => 5.0,
        _ => 0.0,
    }
}

/// Priority in `0..=100` from a previously computed danger score.
pub fn calculate_priority_score(location: &ReliefLocation, danger_score: u8) -> u8 {
    let score = danger_score as f64 * DANGER_WEIGHT
        + province_bonus(&location.province)
        + status_bonus(location.status);
    score.clamp(0.0, 100.0).round() as u8
}
