//! Core data types and structures for rental processing.
//!
//! This module defines all the fundamental types used throughout the rental
//! billing system, including the customer record parsed from input rows, the
//! vehicle classes the shop rents out, and the stock ledger that tracks how
//! many units of each class remain.
//!
//! # Type Aliases
//!
//! - [`Amount`]: Type alias for monetary amounts (Decimal)
//! - [`Days`]: Type alias for rental lengths in whole days (u32)
//!
//! # Core Types
//!
//! - [`Customer`]: One rental request as read from the input file
//! - [`VehicleClass`]: Tagged vehicle category (Ford, Honda, Unknown) carrying
//!   the per-day pricing multiplier
//! - [`VehicleOffer`]: The outcome of resolving a request against the ledger
//!   (class plus availability)
//! - [`StockLedger`]: Remaining unit counts per class, decremented as
//!   reservations succeed
//!
//! # Serialization
//!
//! [`Customer`] implements [`Deserialize`] from `serde` for CSV processing.
//! Field renames map the camelCase input header (`firstName`, `lastName`,
//! `vehicleCategory`, `lengthDays`) onto snake_case struct fields. The three
//! numeric columns are integer-typed, so a row with a non-numeric license,
//! phone, or length fails deserialization as a whole — no partial customer is
//! ever constructed.
//!
//! # Examples
//!
//! Reserving against a fresh ledger:
//! ```
//! use rental_desk::types::{StockLedger, VehicleClass};
//!
//! let mut ledger = StockLedger::new(2, 3);
//! assert!(ledger.try_reserve(VehicleClass::Ford));
//! assert!(ledger.try_reserve(VehicleClass::Ford));
//! assert!(!ledger.try_reserve(VehicleClass::Ford));
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;

pub type Amount = Decimal;
pub type Days = u32;

/// Flat rental fee charged for every available vehicle, before the per-day rate.
pub const BASE_COST: u32 = 100;

/// Fixed surcharge added when the damage check triggers for a rental.
pub const DAMAGE_CHARGE: u32 = 2000;

/// Ford units on the lot at the start of a session.
pub const STARTING_FORDS: u32 = 2;

/// Honda units on the lot at the start of a session.
pub const STARTING_HONDAS: u32 = 3;

/// One rental request, parsed from a single input row.
///
/// A customer is created once per valid row and discarded after its report
/// line has been produced. The requested category is kept as the raw string;
/// use [`Customer::vehicle_class`] to resolve it to a [`VehicleClass`].
///
/// # Fields
///
/// - `first_name` / `last_name`: The customer's name, used in report lines
/// - `license`: Driver's license number
/// - `phone`: Contact phone number
/// - `email`: Contact email address
/// - `vehicle`: The requested vehicle category as written in the input
/// - `length`: Rental length in whole days
#[derive(Debug, Deserialize)]
pub struct Customer {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub license: u64,
    pub phone: u64,
    pub email: String,
    #[serde(rename = "vehicleCategory")]
    pub vehicle: String,
    #[serde(rename = "lengthDays")]
    pub length: Days,
}

impl Customer {
    /// Resolves the raw requested category to a [`VehicleClass`].
    pub fn vehicle_class(&self) -> VehicleClass {
        VehicleClass::from_request(&self.vehicle)
    }
}

/// Represents the class of vehicle a customer asked for.
///
/// The shop stocks two makes; anything else resolves to `Unknown`, which is
/// never available and never charged. Each class carries its per-day pricing
/// multiplier, keeping the catalog data-driven rather than spread across
/// subtypes.
///
/// # Variants
///
/// - **Ford**: Per-day multiplier 25.
/// - **Honda**: Per-day multiplier 20.
/// - **Unknown**: Unrecognized request. Multiplier 0; no stock is ever
///   reserved for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Ford,
    Honda,
    Unknown,
}

impl VehicleClass {
    /// Resolves a requested category string, case-insensitively.
    pub fn from_request(request: &str) -> Self {
        match request.to_ascii_lowercase().as_str() {
            "ford" => VehicleClass::Ford,
            "honda" => VehicleClass::Honda,
            _ => VehicleClass::Unknown,
        }
    }

    /// Per-day rate for this class.
    pub fn multiplier(self) -> u32 {
        match self {
            VehicleClass::Ford => 25,
            VehicleClass::Honda => 20,
            VehicleClass::Unknown => 0,
        }
    }
}

/// The outcome of resolving one rental request against the stock ledger.
///
/// Immutable after creation. `available` reflects exactly one reservation
/// attempt made at resolution time; an unavailable offer is never priced.
#[derive(Debug, Clone, Copy)]
pub struct VehicleOffer {
    pub class: VehicleClass,
    pub available: bool,
}

impl VehicleOffer {
    pub fn base_cost(&self) -> Amount {
        Amount::from(BASE_COST)
    }

    pub fn multiplier(&self) -> Amount {
        Amount::from(self.class.multiplier())
    }
}

/// Priced outcome of one rental: the amount to charge and whether the damage
/// check triggered. Derived per row and discarded after its report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub amount: Amount,
    pub damaged: bool,
}

/// Remaining stock per vehicle class for one session.
///
/// Initialized once at process start and monotonically decremented as
/// reservations succeed; never replenished within a run and not persisted
/// between runs.
#[derive(Debug)]
pub struct StockLedger {
    fords: u32,
    hondas: u32,
}

impl StockLedger {
    pub fn new(fords: u32, hondas: u32) -> Self {
        StockLedger { fords, hondas }
    }

    /// Attempts to reserve one unit of the given class.
    ///
    /// Returns `true` and decrements the count if at least one unit remains;
    /// otherwise returns `false` and leaves the count unchanged. The check and
    /// the decrement happen in a single call, so a count can never go
    /// negative. `Unknown` always fails without touching either count.
    pub fn try_reserve(&mut self, class: VehicleClass) -> bool {
        let remaining = match class {
            VehicleClass::Ford => &mut self.fords,
            VehicleClass::Honda => &mut self.hondas,
            VehicleClass::Unknown => return false,
        };

        if *remaining >= 1 {
            *remaining -= 1;
            true
        } else {
            false
        }
    }

    pub fn fords_remaining(&self) -> u32 {
        self.fords
    }

    pub fn hondas_remaining(&self) -> u32 {
        self.hondas
    }
}
