mod simulation_snapshot;
mod user_repository;

use crate::NewUser;

use ts_core::PathType;

pub(crate) const FIXTURE_CSV: &str = "\
tourist_id,path_type,lat,lon,timestamp,username
T1,normal,26.90,75.80,2024-01-01T10:00:00,asha
T2,anomaly,26.91,75.81,2024-01-01T10:00:00,ravi
T1,normal,26.92,75.82,2024-01-01T10:00:05,asha
T3,normal,26.93,75.83,2024-01-01T10:00:05,mira
T2,anomaly,26.94,75.84,2024-01-01T10:00:10,ravi
T4,detour,26.95,75.85,2024-01-01T10:00:10,neel
";

pub(crate) fn new_user(username: &str, phone: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        phone: phone.to_string(),
        path_type: Some(PathType::Normal),
        ..NewUser::default()
    }
}
