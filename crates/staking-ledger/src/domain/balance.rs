//! Conserved-quantity asset value.
//!
//! `Balance` is the ledger-side view of the external fungible asset: an
//! owned quantity that can only be moved, merged, or split. It is
//! deliberately neither `Clone` nor `Copy`, so the type system enforces
//! that no call path duplicates or silently drops asset units. The
//! issuance module (out of scope here) defines 9 decimals and mints
//! 1_000_000_000 * 10^9 base units at genesis; this ledger neither mints
//! nor burns.

use super::errors::StakingError;

/// An owned quantity of the staked asset, in base units.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Balance {
    units: u64,
}

impl Balance {
    /// The empty balance.
    pub const fn zero() -> Self {
        Self { units: 0 }
    }

    /// Creates a balance of `units` base units.
    ///
    /// Issuance belongs to the asset module; within this crate the
    /// constructor marks the custody boundary where externally-minted
    /// value enters the ledger (and is the fixture seam for tests).
    pub const fn issue(units: u64) -> Self {
        Self { units }
    }

    /// Quantity held, in base units.
    pub const fn value(&self) -> u64 {
        self.units
    }

    /// Returns true if no units are held.
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Absorbs `other` into `self`, conserving the combined quantity.
    ///
    /// Total circulating supply is bounded far below `u64::MAX`, so the
    /// sum of any two real balances cannot overflow.
    pub fn merge(&mut self, other: Balance) {
        self.units += other.units;
    }

    /// Splits `amount` units out of `self`.
    ///
    /// On error `self` is left untouched.
    ///
    /// # Errors
    /// `CustodyShortfall` if `amount` exceeds the held quantity.
    pub fn split(&mut self, amount: u64) -> Result<Balance, StakingError> {
        if amount > self.units {
            return Err(StakingError::CustodyShortfall {
                requested: amount,
                available: self.units,
            });
        }
        self.units -= amount;
        Ok(Balance { units: amount })
    }

    /// Splits off the entire held quantity, leaving `self` empty.
    pub fn take_all(&mut self) -> Balance {
        Balance {
            units: std::mem::take(&mut self.units),
        }
    }
}
