// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{log, Address, Env};

use crate::schema::{AdminCap, DataKey, Registry};
use super::utils::bump_instance;

/// Mint the registry and the admin capability.
///
/// Runs once, from the contract constructor. The host never invokes a
/// constructor twice, so there is no re-initialization guard here.
///
/// # Arguments
/// * `env` - Soroban environment
/// * `admin` - Activating address; receives the capability and all card payments
/// * `payment_token` - Token contract card payments are made in
pub fn initialize(env: &Env, admin: Address, payment_token: Address) {
    let registry: Registry = Registry {
        owner: admin.clone(),
        payment_token,
    };
    let cap: AdminCap = AdminCap {
        holder: admin.clone(),
    };

    env.storage().instance().set(&DataKey::Registry, &registry);
    env.storage().instance().set(&DataKey::AdminCap, &cap);
    env.storage().instance().set(&DataKey::CardCount, &0_u64);
    bump_instance(env);

    log!(env, "dev card registry initialized", admin);
}
