//! Capability registry: owner and admin authority.
//!
//! Authority is bound to the registry, not to possession of a capability
//! value. `OwnerCap` and `AdminCap` are issued as credential records, but
//! every gated operation re-validates the caller against the current
//! registry set. Consequences:
//!
//! - transferring a cap value grants nothing to the recipient;
//! - `remove_admin` is fully effective: a previously issued `AdminCap`
//!   stops passing authority checks the moment its seat is removed.

use serde::{Deserialize, Serialize};

use super::entities::Address;
use super::errors::StakingError;

/// Maximum number of concurrently delegated admin seats.
pub const MAX_ADMINS: usize = 2;

/// Owner credential, issued once at genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerCap {
    /// The address recognized as owner.
    pub owner: Address,
}

/// Admin credential, issued by `delegate_admin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCap {
    /// The address this credential was issued to.
    pub admin: Address,
}

/// Live authorization record: one permanent owner, up to two admin seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRegistry {
    owner: Address,
    admins: Vec<Address>,
}

impl CapabilityRegistry {
    /// Creates a registry with `owner` and no delegated admins.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            admins: Vec::with_capacity(MAX_ADMINS),
        }
    }

    /// The permanent owner address.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Currently delegated admin addresses, in delegation order.
    pub fn admins(&self) -> &[Address] {
        &self.admins
    }

    /// Returns true if `address` currently holds an admin seat.
    pub fn is_admin(&self, address: Address) -> bool {
        self.admins.contains(&address)
    }

    /// Rejects any caller other than the owner.
    pub fn require_owner(&self, caller: Address) -> Result<(), StakingError> {
        if caller != self.owner {
            return Err(StakingError::NotOwner);
        }
        Ok(())
    }

    /// Rejects any caller without a current admin seat.
    pub fn require_admin(&self, caller: Address) -> Result<(), StakingError> {
        if !self.is_admin(caller) {
            return Err(StakingError::NotAdmin);
        }
        Ok(())
    }

    /// Delegates an admin seat to `admin` and issues its credential.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    /// - `AdminCeilingReached` if both seats are taken
    /// - `AdminAlreadyPresent` if `admin` already holds a seat
    pub fn delegate_admin(
        &mut self,
        caller: Address,
        admin: Address,
    ) -> Result<AdminCap, StakingError> {
        self.require_owner(caller)?;
        if self.admins.len() >= MAX_ADMINS {
            return Err(StakingError::AdminCeilingReached);
        }
        if self.admins.contains(&admin) {
            return Err(StakingError::AdminAlreadyPresent);
        }
        self.admins.push(admin);
        Ok(AdminCap { admin })
    }

    /// Removes `admin`'s seat. Any credential issued to it stops passing
    /// authority checks immediately.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    /// - `AdminNotFound` if `admin` holds no seat
    pub fn remove_admin(&mut self, caller: Address, admin: Address) -> Result<(), StakingError> {
        self.require_owner(caller)?;
        let seat = self
            .admins
            .iter()
            .position(|a| *a == admin)
            .ok_or(StakingError::AdminNotFound)?;
        self.admins.remove(seat);
        Ok(())
    }
}
