// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{log, token, Address, Env};

use super::utils::{next_card_id, read_registry, save_card};
use crate::error::{handle_error, Error};
use crate::schema::{CardProfile, DevCard, Registry, CARD_PRICE};

/// Create a new card owned by `owner`.
///
/// The payment must equal `CARD_PRICE` exactly; it is moved in full from
/// `owner` to the registry owner. The transfer and the card write commit
/// together, since any abort rolls back the whole invocation.
pub fn create_card(env: Env, owner: Address, profile: CardProfile, payment: i128) -> DevCard {
    owner.require_auth();

    if payment != CARD_PRICE {
        handle_error(&env, Error::InsufficientFunds)
    }

    let registry: Registry = read_registry(&env);
    token::TokenClient::new(&env, &registry.payment_token).transfer(
        &owner,
        &registry.owner,
        &payment,
    );

    let card: DevCard = DevCard {
        id: next_card_id(&env),
        owner: owner.clone(),
        name: profile.name,
        title: profile.title,
        img_url: profile.img_url,
        years_of_exp: profile.years_of_exp,
        technologies: profile.technologies,
        portfolio: profile.portfolio,
        contact: profile.contact,
        description: None,
        open_to_work: true,
    };
    save_card(&env, &card);

    log!(&env, "card created", card.id, owner);

    card
}
