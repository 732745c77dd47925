use chrono::{NaiveDate, NaiveTime};

use crate::errors::ServiceError;

/// JSON-body POST handlers. Each `$func_name` pairs with an async
/// `[$func_name]_impl` in the same module.
#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    match [<$func_name _impl>](pool, info).await {
                        Ok(response) => HttpResponse::Ok().json(response),
                        Err(err) => {
                            tracing::warn!("{} failed: {}", $url, err);
                            HttpResponse::build(crate::errors::status_for(&err))
                                .json(<$response>::err(err))
                        }
                    }
                }
            }
        )+
    };
}

/// Same as `post_funcs!`, with a numeric id taken from the path.
#[macro_export]
macro_rules! post_id_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    path: web::Path<u64>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    match [<$func_name _impl>](pool, path.into_inner(), info).await {
                        Ok(response) => HttpResponse::Ok().json(response),
                        Err(err) => {
                            tracing::warn!("{} failed: {}", $url, err);
                            HttpResponse::build(crate::errors::status_for(&err))
                                .json(<$response>::err(err))
                        }
                    }
                }
            }
        )+
    };
}

/// GET handlers taking their request from the query string.
#[macro_export]
macro_rules! get_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[get($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Query<$request>
                ) -> impl Responder {
                    match [<$func_name _impl>](pool, info).await {
                        Ok(response) => HttpResponse::Ok().json(response),
                        Err(err) => {
                            tracing::warn!("{} failed: {}", $url, err);
                            HttpResponse::build(crate::errors::status_for(&err))
                                .json(<$response>::err(err))
                        }
                    }
                }
            }
        )+
    };
}

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIME_FMT: &str = "%H:%M";

pub fn parse_date_str(s: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(s, DATE_FMT)
        .map_err(|_| ServiceError::validation("invalid date, expected YYYY-MM-DD"))
}

pub fn parse_time_str(s: &str) -> Result<NaiveTime, ServiceError> {
    NaiveTime::parse_from_str(s, TIME_FMT)
        .map_err(|_| ServiceError::validation("invalid time, expected HH:MM"))
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn format_time_str(time: &NaiveTime) -> String {
    time.format(TIME_FMT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_formats() {
        assert_eq!(
            parse_date_str("2024-06-10").unwrap(),
            NaiveDate::from_ymd(2024, 6, 10)
        );
        assert_eq!(
            parse_time_str("08:05").unwrap(),
            NaiveTime::from_hms(8, 5, 0)
        );
    }

    #[test]
    fn rejects_out_of_range_date() {
        let err = parse_date_str("2024-13-40").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(parse_time_str("25:00").is_err());
        assert!(parse_time_str("9h30").is_err());
        assert!(parse_time_str("").is_err());
    }

    #[test]
    fn formats_round_trip() {
        let date = NaiveDate::from_ymd(2024, 6, 10);
        let time = NaiveTime::from_hms(9, 30, 0);
        assert_eq!(parse_date_str(&format_date_str(&date)).unwrap(), date);
        assert_eq!(parse_time_str(&format_time_str(&time)).unwrap(), time);
    }
}
