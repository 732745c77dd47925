use serde::Serialize;

use crate::models::appointments::AppointmentData;

#[derive(Default, Serialize)]
pub struct AppointmentItem {
    pub id: u64,
    pub name: String,
    pub date: String,
    pub time: String,
    pub attendant: String,
}

impl From<AppointmentData> for AppointmentItem {
    fn from(data: AppointmentData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            date: crate::utils::format_date_str(&data.date),
            time: crate::utils::format_time_str(&data.time),
            attendant: data.attendant,
        }
    }
}

#[derive(Default, Serialize)]
pub struct AppointmentResponse {
    pub success: bool,
    pub err: String,
    pub appointment: Option<AppointmentItem>,
}

impl AppointmentResponse {
    pub fn ok(data: AppointmentData) -> Self {
        Self {
            success: true,
            err: "".to_string(),
            appointment: Some(data.into()),
        }
    }
}

#[derive(Default, Serialize)]
pub struct MyAppointmentsResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointmentItem>,
    pub total_count: usize,
    pub today: Vec<AppointmentItem>,
    pub today_count: usize,
    pub next_today: Vec<AppointmentItem>,
    pub next_today_count: usize,
    pub future: Vec<AppointmentItem>,
    pub future_count: usize,
    pub past: Vec<AppointmentItem>,
    pub past_count: usize,
}

crate::impl_err_response! {
    AppointmentResponse,
    MyAppointmentsResponse,
}
