//! Cafe Booking - booking marketplace backend.
//!
//! Customers reserve seats at cafes, owners manage their cafes and the
//! bookings made there, admins see everything and a revenue dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
