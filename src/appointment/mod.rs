mod partition;
mod requests;
mod responses;

use actix_web::{get, http::header, post, web, HttpResponse, Responder};
use chrono::Local;
use diesel::prelude::*;

use crate::{
    auth::utils::get_user_id_from_token,
    database::{assert, blocking, get_db_conn},
    errors::ServiceError,
    models::appointments::{AppointmentData, NewAppointment},
    protocol::SimpleResponse,
    utils::{parse_date_str, parse_time_str},
    DbPool,
};

use self::{partition::partition, requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(schedule)
        .service(appointment_list)
        .service(my_appointments)
        .service(edit_appointment)
        .service(delete_appointment);
}

crate::post_funcs! {
    (schedule, "/schedule", ScheduleRequest, AppointmentResponse),
}

crate::post_id_funcs! {
    (edit_appointment, "/appointments/edit/{id}", EditAppointmentRequest, AppointmentResponse),
    (delete_appointment, "/appointments/delete/{id}", DeleteAppointmentRequest, SimpleResponse),
}

crate::get_funcs! {
    (my_appointments, "/my-appointments", MyAppointmentsRequest, MyAppointmentsResponse),
}

/// The listing moved to /my-appointments; this path only forwards there.
#[get("/appointments")]
async fn appointment_list() -> impl Responder {
    HttpResponse::Found()
        .header(header::LOCATION, "/my-appointments")
        .finish()
}

async fn schedule_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ScheduleRequest>,
) -> anyhow::Result<AppointmentResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let owner_id = get_user_id_from_token(info.login_token.clone(), &pool).await?;
    assert::assert_user(&pool, owner_id).await?;

    let date = parse_date_str(&info.date)?;
    let time = parse_time_str(&info.time)?;

    let conn = get_db_conn(&pool)?;
    let created = blocking(move || {
        conn.transaction(|| {
            // conflict key is (owner, date, time); other owners may share the slot
            let res = appointments::table
                .filter(appointments::user_id.eq(owner_id))
                .filter(appointments::date.eq(date))
                .filter(appointments::time.eq(time))
                .count()
                .get_result::<i64>(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;
            if res > 0 {
                return Err(
                    ServiceError::conflict("an appointment already exists at this slot").into(),
                );
            }

            let data = NewAppointment {
                name: info.name,
                date,
                time,
                attendant: info.attendant,
                user_id: Some(owner_id),
            };
            diesel::insert_into(appointments::table)
                .values(data)
                .execute(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;

            // the slot is unique per owner, so this reads back the new row
            appointments::table
                .filter(appointments::user_id.eq(owner_id))
                .filter(appointments::date.eq(date))
                .filter(appointments::time.eq(time))
                .get_result::<AppointmentData>(&conn)
                .map_err(|_| ServiceError::persistence("database error").into())
        })
    })
    .await?;

    Ok(AppointmentResponse::ok(created))
}

async fn edit_appointment_impl(
    pool: web::Data<DbPool>,
    appointment_id: u64,
    info: web::Json<EditAppointmentRequest>,
) -> anyhow::Result<AppointmentResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let owner_id = get_user_id_from_token(info.login_token.clone(), &pool).await?;

    let date = parse_date_str(&info.date)?;
    let time = parse_time_str(&info.time)?;

    let conn = get_db_conn(&pool)?;
    let updated = blocking(move || {
        conn.transaction(|| {
            let appo = appointments::table
                .filter(appointments::id.eq(appointment_id))
                .get_result::<AppointmentData>(&conn)
                .optional()
                .map_err(|_| ServiceError::persistence("database error"))?
                .ok_or_else(|| ServiceError::not_found("no such appointment"))?;

            if appo.user_id != Some(owner_id) {
                return Err(
                    ServiceError::forbidden("appointment belongs to another user").into(),
                );
            }

            // only creation enforces the conflict key; edits do not re-check
            diesel::update(appointments::table.filter(appointments::id.eq(appointment_id)))
                .set((
                    appointments::name.eq(&info.name),
                    appointments::date.eq(date),
                    appointments::time.eq(time),
                    appointments::attendant.eq(&info.attendant),
                ))
                .execute(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;

            appointments::table
                .filter(appointments::id.eq(appointment_id))
                .get_result::<AppointmentData>(&conn)
                .map_err(|_| ServiceError::persistence("database error").into())
        })
    })
    .await?;

    Ok(AppointmentResponse::ok(updated))
}

async fn delete_appointment_impl(
    pool: web::Data<DbPool>,
    appointment_id: u64,
    info: web::Json<DeleteAppointmentRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let owner_id = get_user_id_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    blocking(move || {
        conn.transaction(|| {
            let appo = appointments::table
                .filter(appointments::id.eq(appointment_id))
                .get_result::<AppointmentData>(&conn)
                .optional()
                .map_err(|_| ServiceError::persistence("database error"))?
                .ok_or_else(|| ServiceError::not_found("no such appointment"))?;

            if appo.user_id != Some(owner_id) {
                return Err(
                    ServiceError::forbidden("appointment belongs to another user").into(),
                );
            }

            diesel::delete(appointments::table.filter(appointments::id.eq(appointment_id)))
                .execute(&conn)
                .map_err(|_| ServiceError::persistence("database error"))?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn my_appointments_impl(
    pool: web::Data<DbPool>,
    info: web::Query<MyAppointmentsRequest>,
) -> anyhow::Result<MyAppointmentsResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let owner_id = get_user_id_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let appos = blocking(move || {
        appointments::table
            .filter(appointments::user_id.eq(owner_id))
            .order((appointments::date.asc(), appointments::time.asc()))
            .get_results::<AppointmentData>(&conn)
            .map_err(|_| ServiceError::persistence("database error").into())
    })
    .await?;

    let part = partition(appos, Local::now().naive_local());

    Ok(MyAppointmentsResponse {
        success: true,
        err: "".to_string(),
        total_count: part.all.len(),
        today_count: part.today.len(),
        next_today_count: part.next_today.len(),
        future_count: part.future.len(),
        past_count: part.past.len(),
        appointments: items(part.all),
        today: items(part.today),
        next_today: items(part.next_today),
        future: items(part.future),
        past: items(part.past),
    })
}

fn items(appos: Vec<AppointmentData>) -> Vec<AppointmentItem> {
    appos.into_iter().map(Into::into).collect()
}
