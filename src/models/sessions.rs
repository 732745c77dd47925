use crate::schema::sessions;
use chrono::NaiveDateTime;

#[derive(Queryable, Insertable)]
#[table_name = "sessions"]
pub struct SessionData {
    pub token: String,
    pub user_id: u64,
    pub login_time: NaiveDateTime,
}
