//! Account domain module.
//!
//! Registered users and the rules for creating them. A user's role is fixed
//! at signup; clients may ask for `customer` or `owner` but never `admin`.

mod user;

pub use user::{LoginRequest, NewAccount, SignupRequest, User, UserWithCredentials};
