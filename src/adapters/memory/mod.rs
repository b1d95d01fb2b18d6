//! In-memory store implementation.
//!
//! Implements every persistence port over one mutex-guarded state. Useful for:
//! - Tests of handlers and HTTP routes
//! - Local runs without a database (`database.url` unset)
//!
//! Data does not survive a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::domain::account::{User, UserWithCredentials};
use crate::domain::booking::{
    listing_order, Booking, BookingDetail, BookingStatus, CustomerBooking, StaffBooking,
};
use crate::domain::cafe::Cafe;
use crate::domain::foundation::{
    BookingId, CafeId, DomainError, ErrorCode, OwnedByUser, UserId,
};
use crate::domain::stats::StatsSnapshot;
use crate::ports::{BookingReader, BookingRepository, CafeRepository, StatsReader, UserRepository};

#[derive(Default)]
struct State {
    users: HashMap<UserId, UserWithCredentials>,
    cafes: HashMap<CafeId, Cafe>,
    bookings: HashMap<BookingId, Booking>,
}

/// In-memory implementation of all repository and reader ports.
///
/// Thread-safe via an internal `Mutex`; the lock is never held across an
/// await point.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryStore::new());
/// let cafes: Arc<dyn CafeRepository> = store.clone();
/// let bookings: Arc<dyn BookingRepository> = store.clone();
/// ```
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `DatabaseError` until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Inserts a user directly, bypassing signup (used to seed admins).
    pub fn insert_user(&self, user: User, password_hash: impl Into<String>) -> Result<(), DomainError> {
        let mut state = self.lock()?;
        state.users.insert(
            user.id,
            UserWithCredentials {
                user,
                password_hash: password_hash.into(),
            },
        );
        Ok(())
    }

    /// Number of stored bookings.
    pub fn booking_count(&self) -> usize {
        self.lock().map(|s| s.bookings.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Store unavailable"));
        }
        self.state
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Store lock poisoned"))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Users
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User, password_hash: &str) -> Result<(), DomainError> {
        let mut state = self.lock()?;
        if state.users.values().any(|u| u.user.email == user.email) {
            return Err(DomainError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            ));
        }
        state.users.insert(
            user.id,
            UserWithCredentials {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.lock()?.users.get(id).map(|u| u.user.clone()))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserWithCredentials>, DomainError> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| u.user.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.lock()?.users.values().any(|u| u.user.email == email))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Cafes
// ════════════════════════════════════════════════════════════════════════════

fn newest_first(mut cafes: Vec<Cafe>) -> Vec<Cafe> {
    cafes.sort_by(|a, b| b.created_at().cmp(a.created_at()));
    cafes
}

#[async_trait]
impl CafeRepository for InMemoryStore {
    async fn save(&self, cafe: &Cafe) -> Result<(), DomainError> {
        self.lock()?.cafes.insert(*cafe.id(), cafe.clone());
        Ok(())
    }

    async fn update(&self, cafe: &Cafe) -> Result<(), DomainError> {
        let mut state = self.lock()?;
        match state.cafes.get_mut(cafe.id()) {
            Some(stored) => {
                *stored = cafe.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::CafeNotFound, "Cafe not found")),
        }
    }

    async fn delete(&self, id: &CafeId) -> Result<(), DomainError> {
        let mut state = self.lock()?;
        if state.bookings.values().any(|b| b.cafe_id() == id) {
            return Err(DomainError::new(
                ErrorCode::CafeHasBookings,
                "Cafe has bookings and cannot be deleted",
            ));
        }
        state
            .cafes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::new(ErrorCode::CafeNotFound, "Cafe not found"))
    }

    async fn find_by_id(&self, id: &CafeId) -> Result<Option<Cafe>, DomainError> {
        Ok(self.lock()?.cafes.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Cafe>, DomainError> {
        Ok(newest_first(self.lock()?.cafes.values().cloned().collect()))
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Cafe>, DomainError> {
        Ok(newest_first(
            self.lock()?
                .cafes
                .values()
                .filter(|c| c.is_owner(owner_id))
                .cloned()
                .collect(),
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Bookings
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        self.lock()?.bookings.insert(*booking.id(), booking.clone());
        Ok(())
    }

    async fn find_detail(&self, id: &BookingId) -> Result<Option<BookingDetail>, DomainError> {
        let state = self.lock()?;
        Ok(state.bookings.get(id).and_then(|booking| {
            state.cafes.get(booking.cafe_id()).map(|cafe| BookingDetail {
                booking: booking.clone(),
                cafe_owner_id: *cafe.owner_id(),
            })
        }))
    }

    async fn update_status(
        &self,
        id: &BookingId,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<bool, DomainError> {
        let mut state = self.lock()?;
        let Some(stored) = state.bookings.get(id) else {
            return Ok(false);
        };
        if stored.status() != expected {
            return Ok(false);
        }
        let updated = Booking::reconstitute(
            *stored.id(),
            *stored.cafe_id(),
            *stored.user_id(),
            stored.booking_date(),
            stored.booking_time().to_string(),
            stored.people_count(),
            stored.special_requests().map(str::to_string),
            next,
            *stored.created_at(),
        );
        state.bookings.insert(*id, updated);
        Ok(true)
    }

    async fn exists_for_cafe(&self, cafe_id: &CafeId) -> Result<bool, DomainError> {
        Ok(self.lock()?.bookings.values().any(|b| b.cafe_id() == cafe_id))
    }
}

impl State {
    fn staff_view(&self, booking: &Booking) -> Option<StaffBooking> {
        let cafe = self.cafes.get(booking.cafe_id())?;
        let customer = self.users.get(booking.user_id())?;
        Some(StaffBooking {
            id: *booking.id(),
            booking_date: booking.booking_date(),
            booking_time: booking.booking_time().to_string(),
            people_count: booking.people_count(),
            status: booking.status(),
            special_requests: booking.special_requests().map(str::to_string),
            cafe_id: *cafe.id(),
            cafe_name: cafe.name().to_string(),
            user_id: customer.user.id,
            customer_name: customer.user.name.clone(),
            customer_email: customer.user.email.clone(),
            created_at: Some(*booking.created_at()),
        })
    }

    fn sorted_staff_views<'a>(
        &self,
        bookings: impl Iterator<Item = &'a Booking>,
    ) -> Vec<StaffBooking> {
        let mut rows: Vec<StaffBooking> = bookings.filter_map(|b| self.staff_view(b)).collect();
        rows.sort_by(|a, b| {
            listing_order(
                (a.booking_date, a.created_at.as_ref()),
                (b.booking_date, b.created_at.as_ref()),
            )
        });
        rows
    }
}

#[async_trait]
impl BookingReader for InMemoryStore {
    async fn list_for_customer(
        &self,
        customer_id: &UserId,
    ) -> Result<Vec<CustomerBooking>, DomainError> {
        let state = self.lock()?;
        let mut rows: Vec<CustomerBooking> = state
            .bookings
            .values()
            .filter(|b| b.user_id() == customer_id)
            .filter_map(|b| {
                let cafe = state.cafes.get(b.cafe_id())?;
                Some(CustomerBooking {
                    id: *b.id(),
                    booking_date: b.booking_date(),
                    booking_time: b.booking_time().to_string(),
                    people_count: b.people_count(),
                    status: b.status(),
                    special_requests: b.special_requests().map(str::to_string),
                    cafe_name: cafe.name().to_string(),
                    location: cafe.location().map(str::to_string),
                    created_at: Some(*b.created_at()),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            listing_order(
                (a.booking_date, a.created_at.as_ref()),
                (b.booking_date, b.created_at.as_ref()),
            )
        });
        Ok(rows)
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<StaffBooking>, DomainError> {
        let state = self.lock()?;
        let owned = state.bookings.values().filter(|b| {
            state
                .cafes
                .get(b.cafe_id())
                .map_or(false, |c| c.is_owner(owner_id))
        });
        Ok(state.sorted_staff_views(owned))
    }

    async fn list_all(&self) -> Result<Vec<StaffBooking>, DomainError> {
        let state = self.lock()?;
        Ok(state.sorted_staff_views(state.bookings.values()))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stats
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl StatsReader for InMemoryStore {
    async fn snapshot(&self) -> Result<StatsSnapshot, DomainError> {
        let state = self.lock()?;
        let confirmed: Vec<&Booking> = state
            .bookings
            .values()
            .filter(|b| b.status() == BookingStatus::Confirmed)
            .collect();
        let mut owners: Vec<&UserId> = state.cafes.values().map(|c| c.owner_id()).collect();
        owners.sort_by_key(|id| *id.as_uuid());
        owners.dedup();

        Ok(StatsSnapshot {
            total_bookings: state.bookings.len() as i64,
            confirmed_bookings: confirmed.len() as i64,
            confirmed_people: confirmed.iter().map(|b| b.people_count() as i64).sum(),
            total_cafes: state.cafes.len() as i64,
            active_owners: owners.len() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{Actor, BookingRequest};
    use crate::domain::cafe::CafeDetails;
    use crate::domain::foundation::{Role, Timestamp};

    fn user(role: Role, email: &str) -> User {
        User {
            id: UserId::new(),
            name: email.split('@').next().unwrap_or("user").to_string(),
            email: email.to_string(),
            phone: None,
            role,
            created_at: Timestamp::now(),
        }
    }

    fn cafe(owner: &User, capacity: i64) -> Cafe {
        Cafe::new(
            CafeId::new(),
            owner.id,
            CafeDetails {
                name: "Steam".to_string(),
                capacity,
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn booking(customer: &User, cafe: &Cafe, date: &str, people: i64) -> Booking {
        let request = BookingRequest {
            cafe_id: Some(cafe.id().to_string()),
            booking_date: Some(date.to_string()),
            booking_time: Some("18:00".to_string()),
            people_count: Some(people),
            special_requests: None,
        }
        .validate()
        .unwrap();
        Booking::place(BookingId::new(), customer.id, cafe, request).unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryStore::new();
        let first = user(Role::Customer, "a@example.com");
        let second = user(Role::Owner, "a@example.com");

        UserRepository::create(&store, &first, "h").await.unwrap();
        let err = UserRepository::create(&store, &second, "h").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn status_update_is_compare_and_set() {
        let store = InMemoryStore::new();
        let owner = user(Role::Owner, "o@example.com");
        let customer = user(Role::Customer, "c@example.com");
        let cafe = cafe(&owner, 4);
        let booking = booking(&customer, &cafe, "2025-05-05", 2);
        CafeRepository::save(&store, &cafe).await.unwrap();
        BookingRepository::save(&store, &booking).await.unwrap();

        let id = *booking.id();
        assert!(store
            .update_status(&id, BookingStatus::Pending, BookingStatus::Confirmed)
            .await
            .unwrap());
        assert!(!store
            .update_status(&id, BookingStatus::Pending, BookingStatus::Cancelled)
            .await
            .unwrap());

        let detail = store.find_detail(&id).await.unwrap().unwrap();
        assert_eq!(detail.booking.status(), BookingStatus::Confirmed);
        assert_eq!(detail.cafe_owner_id, owner.id);
    }

    #[tokio::test]
    async fn owner_listing_is_scoped_and_ordered() {
        let store = InMemoryStore::new();
        let owner = user(Role::Owner, "o@example.com");
        let rival = user(Role::Owner, "r@example.com");
        let customer = user(Role::Customer, "c@example.com");
        for u in [&owner, &rival, &customer] {
            store.insert_user(u.clone(), "h").unwrap();
        }
        let mine = cafe(&owner, 10);
        let theirs = cafe(&rival, 10);
        CafeRepository::save(&store, &mine).await.unwrap();
        CafeRepository::save(&store, &theirs).await.unwrap();

        let early = booking(&customer, &mine, "2025-01-01", 2);
        let late = booking(&customer, &mine, "2025-03-01", 2);
        let other = booking(&customer, &theirs, "2025-02-01", 2);
        for b in [&early, &late, &other] {
            BookingRepository::save(&store, b).await.unwrap();
        }

        let rows = store.list_for_owner(&owner.id).await.unwrap();
        let ids: Vec<BookingId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![*late.id(), *early.id()]);
        assert_eq!(rows[0].customer_email, "c@example.com");
    }

    #[tokio::test]
    async fn cafe_with_bookings_cannot_be_deleted() {
        let store = InMemoryStore::new();
        let owner = user(Role::Owner, "o@example.com");
        let customer = user(Role::Customer, "c@example.com");
        let cafe = cafe(&owner, 4);
        CafeRepository::save(&store, &cafe).await.unwrap();
        BookingRepository::save(&store, &booking(&customer, &cafe, "2025-05-05", 1))
            .await
            .unwrap();

        let err = CafeRepository::delete(&store, cafe.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CafeHasBookings);
    }

    #[tokio::test]
    async fn snapshot_counts_confirmed_guests_and_distinct_owners() {
        let store = InMemoryStore::new();
        let owner = user(Role::Owner, "o@example.com");
        let customer = user(Role::Customer, "c@example.com");
        let a = cafe(&owner, 10);
        let b = cafe(&owner, 10);
        CafeRepository::save(&store, &a).await.unwrap();
        CafeRepository::save(&store, &b).await.unwrap();

        let mut confirmed = booking(&customer, &a, "2025-05-05", 3);
        confirmed.transition(Actor::Staff, BookingStatus::Confirmed).unwrap();
        BookingRepository::save(&store, &confirmed).await.unwrap();
        BookingRepository::save(&store, &booking(&customer, &b, "2025-05-06", 5))
            .await
            .unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.total_bookings, 2);
        assert_eq!(snapshot.confirmed_bookings, 1);
        assert_eq!(snapshot.confirmed_people, 3);
        assert_eq!(snapshot.total_cafes, 2);
        assert_eq!(snapshot.active_owners, 1);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = InMemoryStore::new();
        store.set_unavailable(true);
        let err = CafeRepository::list_all(&store).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
