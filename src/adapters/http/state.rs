//! Shared application state for every route.

use std::sync::Arc;

use crate::application::{
    CancelOwnBookingHandler, CreateBookingHandler, CreateCafeHandler, DeleteCafeHandler,
    GetAdminStatsHandler, GetCafeHandler, GetMyCafesHandler, ListAllBookingsHandler,
    ListCafesHandler, ListCustomerBookingsHandler, ListOwnerBookingsHandler, LoginHandler,
    SeedAdminHandler, SignupHandler, TransitionBookingStatusHandler, UpdateCafeHandler,
};
use crate::ports::{
    BookingReader, BookingRepository, CafeRepository, CredentialVerifier, PasswordHasher,
    StatsReader, TokenIssuer, UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is Arc-wrapped. Handlers are
/// created on demand from it.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub cafes: Arc<dyn CafeRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub booking_reader: Arc<dyn BookingReader>,
    pub stats_reader: Arc<dyn StatsReader>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Estimated spend per confirmed guest.
    pub unit_price: i64,
}

impl AppState {
    /// Builds the state around one store that implements every persistence port.
    pub fn with_store<S>(
        store: Arc<S>,
        hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        verifier: Arc<dyn CredentialVerifier>,
        unit_price: i64,
    ) -> Self
    where
        S: UserRepository + CafeRepository + BookingRepository + BookingReader + StatsReader + 'static,
    {
        Self {
            users: store.clone(),
            cafes: store.clone(),
            bookings: store.clone(),
            booking_reader: store.clone(),
            stats_reader: store,
            hasher,
            token_issuer,
            verifier,
            unit_price,
        }
    }

    // Account

    pub fn signup_handler(&self) -> SignupHandler {
        SignupHandler::new(
            self.users.clone(),
            self.hasher.clone(),
            self.token_issuer.clone(),
        )
    }

    pub fn seed_admin_handler(&self) -> SeedAdminHandler {
        SeedAdminHandler::new(self.users.clone(), self.hasher.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.hasher.clone(),
            self.token_issuer.clone(),
        )
    }

    // Cafes

    pub fn create_cafe_handler(&self) -> CreateCafeHandler {
        CreateCafeHandler::new(self.cafes.clone())
    }

    pub fn list_cafes_handler(&self) -> ListCafesHandler {
        ListCafesHandler::new(self.cafes.clone())
    }

    pub fn get_cafe_handler(&self) -> GetCafeHandler {
        GetCafeHandler::new(self.cafes.clone())
    }

    pub fn my_cafes_handler(&self) -> GetMyCafesHandler {
        GetMyCafesHandler::new(self.cafes.clone())
    }

    pub fn update_cafe_handler(&self) -> UpdateCafeHandler {
        UpdateCafeHandler::new(self.cafes.clone())
    }

    pub fn delete_cafe_handler(&self) -> DeleteCafeHandler {
        DeleteCafeHandler::new(self.cafes.clone(), self.bookings.clone())
    }

    // Bookings

    pub fn create_booking_handler(&self) -> CreateBookingHandler {
        CreateBookingHandler::new(self.cafes.clone(), self.bookings.clone())
    }

    pub fn customer_bookings_handler(&self) -> ListCustomerBookingsHandler {
        ListCustomerBookingsHandler::new(self.booking_reader.clone())
    }

    pub fn owner_bookings_handler(&self) -> ListOwnerBookingsHandler {
        ListOwnerBookingsHandler::new(self.booking_reader.clone())
    }

    pub fn all_bookings_handler(&self) -> ListAllBookingsHandler {
        ListAllBookingsHandler::new(self.booking_reader.clone())
    }

    pub fn admin_stats_handler(&self) -> GetAdminStatsHandler {
        GetAdminStatsHandler::new(self.stats_reader.clone(), self.unit_price)
    }

    pub fn transition_status_handler(&self) -> TransitionBookingStatusHandler {
        TransitionBookingStatusHandler::new(self.bookings.clone())
    }

    pub fn cancel_own_booking_handler(&self) -> CancelOwnBookingHandler {
        CancelOwnBookingHandler::new(self.bookings.clone())
    }
}
