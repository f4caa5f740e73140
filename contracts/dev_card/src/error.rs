// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{contracterror, panic_with_error, Env};

/// Errors raised by the dev card contract.
///
/// Every variant aborts the invocation; the host rolls back all writes and
/// token transfers made before the abort.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the owner of the card it tried to modify
    NotOwner = 0,
    /// Payment does not equal the card price
    InsufficientFunds = 1,
    /// No card is stored under the requested id
    CardNotFound = 2,
    /// Registry or admin capability missing from instance storage
    NotInitialized = 3,
}

pub fn handle_error(env: &Env, error: Error) -> ! {
    panic_with_error!(env, error);
}
