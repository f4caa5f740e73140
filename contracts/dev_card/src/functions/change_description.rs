// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{log, Address, Env, String};

use super::utils::{load_card, save_card};
use crate::error::{handle_error, Error};
use crate::schema::DevCard;

/// Replace a card's description. Any previous description is discarded.
pub fn change_description(
    env: Env,
    caller: Address,
    card_id: u64,
    description: String,
) -> DevCard {
    caller.require_auth();

    let mut card: DevCard = load_card(&env, card_id);

    if card.owner != caller {
        handle_error(&env, Error::NotOwner)
    }

    card.description = Some(description);
    save_card(&env, &card);

    log!(&env, "card description changed", card_id, caller);

    card
}
