// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{contracttype, Address, String};

/// Price of a new card, in units of the registry's payment token.
///
/// The payment supplied to `create_card` must equal this value exactly.
pub const CARD_PRICE: i128 = 1;

/// Ledgers remaining before a TTL bump is triggered (~30 days).
pub const TTL_THRESHOLD: u32 = 518_400;
/// Ledgers a live entry is extended to on each touch (~150 days).
pub const TTL_EXTEND_TO: u32 = 2_592_000;

/// A developer card.
///
/// Owned by the address that paid for it. Only `description` and
/// `open_to_work` change after creation, and only at the owner's request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DevCard {
    /// Sequential identifier assigned at creation, never reused
    pub id: u64,
    /// Address that created the card; fixed for the card's lifetime
    pub owner: Address,
    pub name: String,
    pub title: String,
    /// Reference to the card's image
    pub img_url: String,
    pub years_of_exp: u32,
    pub technologies: String,
    pub portfolio: String,
    pub contact: String,
    /// Free-form description; absent until the owner sets one
    pub description: Option<String>,
    pub open_to_work: bool,
}

/// Profile payloads supplied by the caller of `create_card`.
///
/// Copied verbatim into the new card. No content, encoding or length
/// checks are applied.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardProfile {
    pub name: String,
    pub title: String,
    pub img_url: String,
    pub years_of_exp: u32,
    pub technologies: String,
    pub portfolio: String,
    pub contact: String,
}

/// Write-once registry record.
///
/// Created by the constructor and never written again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registry {
    /// Receiver of every card payment
    pub owner: Address,
    /// Token contract the card price is denominated in
    pub payment_token: Address,
}

/// The administrative capability.
///
/// Exactly one exists per deployment. The holder's authorization is what
/// allows a card to be destroyed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminCap {
    pub holder: Address,
}

/// Storage keys for the dev card contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Instance storage: the frozen `Registry`
    Registry,
    /// Instance storage: the single `AdminCap`
    AdminCap,
    /// Instance storage: id of the most recently created card
    CardCount,
    /// Persistent storage: card id -> `DevCard`
    Card(u64),
}
