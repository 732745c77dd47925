table! {
    appointments (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        date -> Date,
        time -> Time,
        attendant -> Varchar,
        user_id -> Nullable<Unsigned<Bigint>>,
    }
}

table! {
    sessions (token) {
        token -> Char,
        user_id -> Unsigned<Bigint>,
        login_time -> Datetime,
    }
}

table! {
    users (id) {
        id -> Unsigned<Bigint>,
        username -> Varchar,
        email -> Varchar,
        password -> Varchar,
        created_at -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(
    appointments,
    sessions,
    users,
);
