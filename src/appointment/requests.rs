use serde::Deserialize;

#[derive(Deserialize)]
pub struct ScheduleRequest {
    pub login_token: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub attendant: String,
}

#[derive(Deserialize)]
pub struct EditAppointmentRequest {
    pub login_token: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub attendant: String,
}

#[derive(Deserialize)]
pub struct DeleteAppointmentRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct MyAppointmentsRequest {
    pub login_token: String,
}
