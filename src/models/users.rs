use crate::schema::users;
use chrono::NaiveDateTime;

#[derive(Queryable, Identifiable)]
#[table_name = "users"]
pub struct UserData {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}
