// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{log, Env};

use super::utils::{load_card, read_admin_cap};
use crate::schema::{AdminCap, DataKey, DevCard};

/// Permanently remove a card.
///
/// Only the admin capability holder can authorize this; the host rejects
/// the invocation otherwise. Card owners have no way to delete their own
/// card. The destroyed id is never handed out again.
pub fn destroy_card(env: Env, card_id: u64) {
    let cap: AdminCap = read_admin_cap(&env);
    cap.holder.require_auth();

    let card: DevCard = load_card(&env, card_id);
    env.storage().persistent().remove(&DataKey::Card(card.id));

    log!(&env, "card destroyed", card_id, cap.holder);
}
