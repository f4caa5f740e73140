// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::Env;

use super::utils::load_card;
use crate::schema::DevCard;

pub fn get_card(env: &Env, card_id: u64) -> DevCard {
    load_card(env, card_id)
}
