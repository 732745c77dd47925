pub mod assert;

use actix_web::error::BlockingError;
use actix_web::web;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use r2d2::PooledConnection;

use crate::{errors::ServiceError, DbPool};

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get()
        .map_err(|_| ServiceError::persistence("database connection unavailable").into())
}

/// Runs blocking diesel work off the actix runtime. Unwraps the
/// `BlockingError` wrapper so `ServiceError` variants keep their status.
pub async fn blocking<F, T>(f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match web::block(f).await {
        Ok(value) => Ok(value),
        Err(BlockingError::Error(err)) => Err(err),
        Err(BlockingError::Canceled) => {
            Err(ServiceError::persistence("database task canceled").into())
        }
    }
}
