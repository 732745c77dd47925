use actix_web::web;
use diesel::prelude::*;

use crate::{
    database::{blocking, get_db_conn},
    errors::ServiceError,
    DbPool,
};

pub async fn assert_user(pool: &web::Data<DbPool>, user_id: u64) -> anyhow::Result<()> {
    use crate::schema::users;

    let conn = get_db_conn(pool)?;
    let res = blocking(move || {
        users::table
            .filter(users::id.eq(user_id))
            .count()
            .get_result::<i64>(&conn)
            .map_err(|_| ServiceError::persistence("database error").into())
    })
    .await?;

    if res == 0 {
        return Err(ServiceError::not_found("no such user").into());
    }

    Ok(())
}
