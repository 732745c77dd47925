mod requests;
mod responses;
pub mod utils;

use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    database::{blocking, get_db_conn},
    errors::ServiceError,
    models::{sessions::SessionData, users::NewUser, users::UserData},
    protocol::SimpleResponse,
    DbPool,
};

use self::{
    requests::*,
    responses::*,
    utils::{generate_salt, generate_token, get_user_id_from_token, hash_password, verify_password},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(logout)
        .service(update_password);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (update_password, "/update_password", UpdatePasswordRequest, SimpleResponse),
}

crate::get_funcs! {
    (logout, "/logout", LogoutRequest, SimpleResponse),
}

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::users;

    let info = info.into_inner();

    if info.username.chars().count() < 3 {
        return Err(ServiceError::validation("username must be at least 3 characters").into());
    }
    if info.password.chars().count() < 6 {
        return Err(ServiceError::validation("password must be at least 6 characters").into());
    }
    if info.password != info.confirm_password {
        return Err(ServiceError::validation("passwords do not match").into());
    }

    let conn = get_db_conn(&pool)?;
    blocking(move || {
        conn.transaction(|| {
            let res = users::table
                .filter(users::username.eq(&info.username))
                .count()
                .get_result::<i64>(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;
            if res > 0 {
                return Err(ServiceError::conflict("username already taken").into());
            }

            let res = users::table
                .filter(users::email.eq(&info.email))
                .count()
                .get_result::<i64>(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;
            if res > 0 {
                return Err(ServiceError::conflict("email already in use").into());
            }

            let salt = generate_salt();
            let data = NewUser {
                username: info.username,
                email: info.email,
                password: hash_password(&info.password, &salt),
                created_at: Utc::now().naive_utc(),
            };
            diesel::insert_into(users::table)
                .values(data)
                .execute(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    use crate::schema::{sessions, users};

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;

    let login_token = blocking(move || {
        conn.transaction(|| {
            let user = users::table
                .filter(users::username.eq(&info.username))
                .get_result::<UserData>(&conn)
                .optional()
                .map_err(|_| ServiceError::persistence("database error"))?;

            // same message for unknown user and wrong password
            let user = match user {
                Some(user) if verify_password(&info.password, &user.password) => user,
                _ => {
                    return Err(
                        ServiceError::validation("incorrect username or password").into()
                    )
                }
            };

            let login_token = generate_token(user.id);
            let session = SessionData {
                token: login_token.clone(),
                user_id: user.id,
                login_time: Utc::now().naive_utc(),
            };
            diesel::insert_into(sessions::table)
                .values(session)
                .execute(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;

            Ok(login_token)
        })
    })
    .await?;

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        login_token,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Query<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::sessions;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    blocking(move || {
        diesel::delete(sessions::table.filter(sessions::token.eq(info.login_token)))
            .execute(&conn)
            .map_err(|_| ServiceError::persistence("database error").into())
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn update_password_impl(
    pool: web::Data<DbPool>,
    info: web::Json<UpdatePasswordRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::users;

    let info = info.into_inner();
    let user_id = get_user_id_from_token(info.login_token.clone(), &pool).await?;

    if info.password_new.chars().count() < 6 {
        return Err(ServiceError::validation("password must be at least 6 characters").into());
    }

    let conn = get_db_conn(&pool)?;
    blocking(move || {
        conn.transaction(|| {
            let user = users::table
                .filter(users::id.eq(user_id))
                .get_result::<UserData>(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;

            if !verify_password(&info.password_old, &user.password) {
                return Err(ServiceError::validation("incorrect password").into());
            }

            let salt = generate_salt();
            diesel::update(users::table.filter(users::id.eq(user_id)))
                .set(users::password.eq(hash_password(&info.password_new, &salt)))
                .execute(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}
