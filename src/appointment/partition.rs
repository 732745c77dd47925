use chrono::NaiveDateTime;

use crate::models::appointments::AppointmentData;

/// Time-based buckets of one owner's appointments relative to a reference
/// instant. `next_today` is the tail of `today` that has not started yet;
/// there is no fixed look-ahead cutoff.
pub struct Partition {
    pub all: Vec<AppointmentData>,
    pub today: Vec<AppointmentData>,
    pub next_today: Vec<AppointmentData>,
    pub future: Vec<AppointmentData>,
    pub past: Vec<AppointmentData>,
}

/// Pure function of the appointment set and `as_of`; every bucket is ordered
/// ascending by (date, time).
pub fn partition(mut appointments: Vec<AppointmentData>, as_of: NaiveDateTime) -> Partition {
    appointments.sort_by_key(|appo| (appo.date, appo.time));

    let today_date = as_of.date();
    let now = as_of.time();

    let mut today = Vec::new();
    let mut next_today = Vec::new();
    let mut future = Vec::new();
    let mut past = Vec::new();

    for appo in &appointments {
        if appo.date < today_date {
            past.push(appo.clone());
        } else if appo.date > today_date {
            future.push(appo.clone());
        } else {
            today.push(appo.clone());
            if appo.time >= now {
                next_today.push(appo.clone());
            } else {
                past.push(appo.clone());
            }
        }
    }

    Partition {
        all: appointments,
        today,
        next_today,
        future,
        past,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn appo(id: u64, date: (i32, u32, u32), time: (u32, u32)) -> AppointmentData {
        AppointmentData {
            id,
            name: format!("appointment {}", id),
            date: NaiveDate::from_ymd(date.0, date.1, date.2),
            time: NaiveTime::from_hms(time.0, time.1, 0),
            attendant: "Ana".to_string(),
            user_id: Some(1),
        }
    }

    fn as_of(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd(date.0, date.1, date.2).and_hms(time.0, time.1, 0)
    }

    fn ids(bucket: &[AppointmentData]) -> Vec<u64> {
        bucket.iter().map(|a| a.id).collect()
    }

    #[test]
    fn splits_past_next_and_future() {
        let appos = vec![
            appo(1, (2024, 6, 10), (8, 0)),
            appo(2, (2024, 6, 10), (10, 0)),
            appo(3, (2024, 6, 12), (9, 0)),
        ];
        let part = partition(appos, as_of((2024, 6, 10), (9, 0)));

        assert_eq!(ids(&part.past), vec![1]);
        assert_eq!(ids(&part.next_today), vec![2]);
        assert_eq!(ids(&part.future), vec![3]);
        assert_eq!(part.today.len(), 2);
    }

    #[test]
    fn orders_every_bucket_ascending() {
        let appos = vec![
            appo(1, (2024, 7, 1), (15, 0)),
            appo(2, (2024, 6, 1), (9, 0)),
            appo(3, (2024, 7, 1), (8, 0)),
            appo(4, (2024, 6, 15), (12, 30)),
            appo(5, (2024, 6, 15), (9, 45)),
        ];
        let part = partition(appos, as_of((2024, 6, 15), (10, 0)));

        assert_eq!(ids(&part.all), vec![2, 5, 4, 3, 1]);
        assert_eq!(ids(&part.past), vec![2, 5]);
        assert_eq!(ids(&part.next_today), vec![4]);
        assert_eq!(ids(&part.future), vec![3, 1]);
    }

    #[test]
    fn appointment_starting_now_is_still_upcoming() {
        let appos = vec![appo(1, (2024, 6, 10), (9, 0))];
        let part = partition(appos, as_of((2024, 6, 10), (9, 0)));

        assert_eq!(ids(&part.next_today), vec![1]);
        assert!(part.past.is_empty());
    }

    #[test]
    fn no_look_ahead_cutoff_for_next_today() {
        // late-evening entry still counts even hours ahead of as_of
        let appos = vec![appo(1, (2024, 6, 10), (23, 30))];
        let part = partition(appos, as_of((2024, 6, 10), (6, 0)));

        assert_eq!(ids(&part.next_today), vec![1]);
    }

    #[test]
    fn buckets_cover_every_appointment_exactly_once() {
        let appos = vec![
            appo(1, (2024, 5, 1), (8, 0)),
            appo(2, (2024, 6, 10), (7, 0)),
            appo(3, (2024, 6, 10), (18, 0)),
            appo(4, (2024, 8, 2), (11, 0)),
        ];
        let part = partition(appos, as_of((2024, 6, 10), (12, 0)));

        // past/future by date plus today covers all; next_today stays inside today
        let today_by_date = part.today.len();
        let past_by_date = part
            .past
            .iter()
            .filter(|a| a.date < NaiveDate::from_ymd(2024, 6, 10))
            .count();
        assert_eq!(today_by_date + past_by_date + part.future.len(), part.all.len());
        assert!(part
            .next_today
            .iter()
            .all(|a| part.today.iter().any(|t| t.id == a.id)));
    }

    #[test]
    fn is_deterministic_for_same_inputs() {
        let appos = vec![
            appo(1, (2024, 6, 10), (8, 0)),
            appo(2, (2024, 6, 11), (9, 0)),
        ];
        let first = partition(appos.clone(), as_of((2024, 6, 10), (9, 0)));
        let second = partition(appos, as_of((2024, 6, 10), (9, 0)));

        assert_eq!(ids(&first.all), ids(&second.all));
        assert_eq!(ids(&first.past), ids(&second.past));
        assert_eq!(ids(&first.today), ids(&second.today));
        assert_eq!(ids(&first.next_today), ids(&second.next_today));
        assert_eq!(ids(&first.future), ids(&second.future));
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        let part = partition(Vec::new(), as_of((2024, 6, 10), (9, 0)));
        assert!(part.all.is_empty());
        assert!(part.today.is_empty());
        assert!(part.next_today.is_empty());
        assert!(part.future.is_empty());
        assert!(part.past.is_empty());
    }
}
