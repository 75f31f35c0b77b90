/// Third-party seat booking system.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `total_seats_to_allocate` seats against the given account
    fn reserve_seat(&self, account_id: i64, total_seats_to_allocate: u32);
}
