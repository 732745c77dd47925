use actix_web::web;
use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    database::{blocking, get_db_conn},
    errors::ServiceError,
    models::sessions::SessionData,
    DbPool,
};

const MAX_LOGIN_TIME_SECS: i64 = 3600;

/// Resolves a session token to its user id, the explicit identity check every
/// protected operation runs first.
pub async fn get_user_id_from_token(
    token: String,
    pool: &web::Data<DbPool>,
) -> anyhow::Result<u64> {
    use crate::schema::sessions;

    let conn = get_db_conn(pool)?;
    let data = blocking(move || {
        sessions::table
            .filter(sessions::token.eq(token))
            .order(sessions::login_time.desc())
            .limit(1)
            .get_result::<SessionData>(&conn)
            .optional()
            .map_err(|_| ServiceError::persistence("database error").into())
    })
    .await?;

    match data {
        Some(data) => {
            let time_diff = Utc::now()
                .naive_utc()
                .signed_duration_since(data.login_time);
            if time_diff.num_seconds() <= MAX_LOGIN_TIME_SECS {
                Ok(data.user_id)
            } else {
                Err(ServiceError::forbidden("login expired").into())
            }
        }
        None => Err(ServiceError::forbidden("not logged in").into()),
    }
}

pub fn generate_token(user_id: u64) -> String {
    let nonce: [u8; 16] = rand::random();
    let seed = format!("{}:{}:{:?}", user_id, Utc::now().timestamp_nanos(), nonce);
    format!("{:x}", Blake2b::digest(seed.as_bytes()))
}

pub fn generate_salt() -> String {
    let bytes: [u8; 8] = rand::random();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Stored form is `salt$digest` so each user hashes differently even with the
/// same password.
pub fn hash_password(password: &str, salt: &str) -> String {
    let digest = Blake2b::digest(format!("{}{}", salt, password).as_bytes());
    format!("{}${:x}", salt, digest)
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, _)) => hash_password(password, salt) == stored,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_own_hash() {
        let stored = hash_password("hunter22", &generate_salt());
        assert!(verify_password("hunter22", &stored));
        assert!(!verify_password("hunter23", &stored));
    }

    #[test]
    fn salting_makes_hashes_differ() {
        let a = hash_password("hunter22", &generate_salt());
        let b = hash_password("hunter22", &generate_salt());
        assert_ne!(a, b);
        assert!(verify_password("hunter22", &a));
        assert!(verify_password("hunter22", &b));
    }

    #[test]
    fn rejects_unsalted_stored_value() {
        assert!(!verify_password("hunter22", "deadbeef"));
    }

    #[test]
    fn tokens_are_unique_per_login() {
        assert_ne!(generate_token(1), generate_token(1));
    }
}
