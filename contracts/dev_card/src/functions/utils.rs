// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::Env;

use crate::error::{handle_error, Error};
use crate::schema::{AdminCap, DataKey, DevCard, Registry, TTL_EXTEND_TO, TTL_THRESHOLD};

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn read_registry(env: &Env) -> Registry {
    bump_instance(env);
    env.storage()
        .instance()
        .get::<DataKey, Registry>(&DataKey::Registry)
        .unwrap_or_else(|| handle_error(env, Error::NotInitialized))
}

pub fn read_admin_cap(env: &Env) -> AdminCap {
    bump_instance(env);
    env.storage()
        .instance()
        .get::<DataKey, AdminCap>(&DataKey::AdminCap)
        .unwrap_or_else(|| handle_error(env, Error::NotInitialized))
}

/// Allocate the next card id. Ids start at 1 and are never reused, even
/// after the card holding them is destroyed.
pub fn next_card_id(env: &Env) -> u64 {
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CardCount)
        .unwrap_or(0);
    let next: u64 = current + 1;
    env.storage().instance().set(&DataKey::CardCount, &next);
    next
}

/// Load a live card, aborting with `CardNotFound` if it was never created
/// or has been destroyed. Extends both the card entry and the instance entry.
pub fn load_card(env: &Env, card_id: u64) -> DevCard {
    bump_instance(env);
    let key: DataKey = DataKey::Card(card_id);
    match env.storage().persistent().get::<DataKey, DevCard>(&key) {
        Some(card) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            card
        }
        None => handle_error(env, Error::CardNotFound),
    }
}

pub fn save_card(env: &Env, card: &DevCard) {
    bump_instance(env);
    let key: DataKey = DataKey::Card(card.id);
    env.storage().persistent().set(&key, card);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
