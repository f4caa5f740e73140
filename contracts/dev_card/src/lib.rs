// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

#![no_std]

/// Contract version for tracking deployments and upgrades
pub const VERSION: &str = "1.0.0";

pub mod error;
pub mod functions;
pub mod schema;


use crate::schema::{CardProfile, DevCard, Registry, CARD_PRICE};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

/// Dev Card Contract
///
/// A registry of paid developer cards. Anyone may buy a card by paying the
/// fixed price to the registry owner; only a card's owner may edit it, and
/// only the holder of the admin capability may destroy it.
#[contract]
pub struct DevCardContract;

#[contractimpl]
impl DevCardContract {
    /// Deploy-time constructor.
    ///
    /// Mints the write-once registry and the single admin capability, both
    /// bound to `admin`. The host runs this exactly once.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `admin` - The activating address; becomes capability holder and payment receiver
    /// * `payment_token` - Token contract card payments are made in
    pub fn __constructor(env: Env, admin: Address, payment_token: Address) {
        functions::initialize::initialize(&env, admin, payment_token)
    }

    /// Create a new card owned by `owner`.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `owner` - The paying address; must authorize the call
    /// * `profile` - Profile payloads copied verbatim into the card
    /// * `payment` - Amount of the payment token; must equal the card price
    ///
    /// # Returns
    ///
    /// Returns the newly created `DevCard`.
    ///
    /// # Panics
    ///
    /// * `InsufficientFunds` if `payment` is not exactly the card price
    /// * If `owner` cannot cover the payment
    ///
    /// # Examples
    ///
    /// ```rust
    /// let card = client.create_card(&dev, &profile, &1);
    /// assert!(card.open_to_work);
    /// ```
    ///
    /// # Edge Cases
    ///
    /// * **Overpayment**: Rejected like underpayment, nothing is transferred
    /// * **Empty fields**: Accepted as-is; no content validation
    pub fn create_card(env: Env, owner: Address, profile: CardProfile, payment: i128) -> DevCard {
        functions::create_card::create_card(env, owner, profile, payment)
    }

    /// Replace the description of a card.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `caller` - Must be the card's owner and authorize the call
    /// * `card_id` - The card to update
    /// * `description` - The new description; the old one is discarded
    ///
    /// # Panics
    ///
    /// * `NotOwner` if `caller` does not own the card
    /// * `CardNotFound` if the card does not exist or was destroyed
    pub fn change_description(
        env: Env,
        caller: Address,
        card_id: u64,
        description: String,
    ) -> DevCard {
        functions::change_description::change_description(env, caller, card_id, description)
    }

    /// Set the open-to-work flag of a card.
    ///
    /// # Panics
    ///
    /// * `NotOwner` if `caller` does not own the card
    /// * `CardNotFound` if the card does not exist or was destroyed
    ///
    /// # Edge Cases
    ///
    /// * **Same value**: Writing the current value is a no-op, not an error
    pub fn change_work_status(
        env: Env,
        caller: Address,
        card_id: u64,
        open_to_work: bool,
    ) -> DevCard {
        functions::change_work_status::change_work_status(env, caller, card_id, open_to_work)
    }

    /// Destroy a card. Requires the admin capability holder's authorization.
    ///
    /// # Panics
    ///
    /// * If the capability holder did not authorize the invocation
    /// * `CardNotFound` if the card does not exist or was already destroyed
    pub fn destroy_card(env: Env, card_id: u64) {
        functions::destroy_card::destroy_card(env, card_id)
    }

    /// Get a card by id.
    pub fn get_card(env: Env, card_id: u64) -> DevCard {
        functions::get_card::get_card(&env, card_id)
    }

    /// Get the registry: payment receiver and payment token.
    pub fn get_registry(env: Env) -> Registry {
        functions::get_registry::get_registry(&env)
    }

    /// Get the address holding the admin capability.
    pub fn get_admin(env: Env) -> Address {
        functions::get_registry::get_admin(&env)
    }

    /// Get the exact payment `create_card` expects.
    pub fn get_card_price(_env: Env) -> i128 {
        CARD_PRICE
    }

    /// Get the current contract version
    ///
    /// # Returns
    /// * `String` - The current contract version
    pub fn get_contract_version(env: Env) -> String {
        String::from_str(&env, VERSION)
    }
}
