// Copyright (C) 2026 Shift Desk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    shifts (shift_id) {
        shift_id -> BigInt,
        name -> Text,
        start_time -> Text,
        end_time -> Text,
        duration_hours -> Integer,
        shift_type -> Text,
        is_active -> Integer,
        created_at -> Text,
    }
}

diesel::table! {
    bookings (booking_id) {
        booking_id -> BigInt,
        user_id -> Text,
        shift_id -> BigInt,
        shift_date -> Text,
        status -> Text,
        created_at -> Text,
    }
}

diesel::joinable!(bookings -> shifts (shift_id));

diesel::allow_tables_to_appear_in_same_query!(shifts, bookings);
