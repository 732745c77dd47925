use crate::schema::appointments;
use chrono::{NaiveDate, NaiveTime};

#[derive(Queryable, Clone)]
pub struct AppointmentData {
    pub id: u64,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub attendant: String,
    // nullable only for legacy rows; every write path sets it
    pub user_id: Option<u64>,
}

#[derive(Insertable)]
#[table_name = "appointments"]
pub struct NewAppointment {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub attendant: String,
    pub user_id: Option<u64>,
}
