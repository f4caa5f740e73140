// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{log, Address, Env};

use super::utils::{load_card, save_card};
use crate::error::{handle_error, Error};
use crate::schema::DevCard;

/// Set whether the card's owner is open to work.
///
/// The flag is written unconditionally; repeating the same value is not an error.
pub fn change_work_status(
    env: Env,
    caller: Address,
    card_id: u64,
    open_to_work: bool,
) -> DevCard {
    caller.require_auth();

    let mut card: DevCard = load_card(&env, card_id);

    if card.owner != caller {
        handle_error(&env, Error::NotOwner)
    }

    card.open_to_work = open_to_work;
    save_card(&env, &card);

    log!(&env, "card work status changed", card_id, caller, open_to_work);

    card
}

#[cfg(test)]
mod test {
    use soroban_sdk::{testutils::Address as _, Address, Env};

    use crate::error::Error;
    use crate::schema::DevCard;
    use crate::test::{create_funded_card, setup};

    #[test]
    fn test_change_work_status_success() {
        let env: Env = Env::default();
        env.mock_all_auths();
        let (client, _admin, token) = setup(&env);
        let (dev, card) = create_funded_card(&env, &client, &token);
        assert!(card.open_to_work);

        let updated: DevCard = client.change_work_status(&dev, &card.id, &false);
        assert!(!updated.open_to_work);
        assert!(!client.get_card(&card.id).open_to_work);

        client.change_work_status(&dev, &card.id, &true);
        assert!(client.get_card(&card.id).open_to_work);
    }

    #[test]
    fn test_change_work_status_idempotent() {
        let env: Env = Env::default();
        env.mock_all_auths();
        let (client, _admin, token) = setup(&env);
        let (dev, card) = create_funded_card(&env, &client, &token);

        let once: DevCard = client.change_work_status(&dev, &card.id, &false);
        let twice: DevCard = client.change_work_status(&dev, &card.id, &false);
        assert_eq!(once, twice);

        // Setting the initial value again is a no-op, not an error
        client.change_work_status(&dev, &card.id, &true);
        let again: DevCard = client.change_work_status(&dev, &card.id, &true);
        assert_eq!(again, card);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #0)")]
    fn test_change_work_status_not_owner() {
        let env: Env = Env::default();
        env.mock_all_auths();
        let (client, _admin, token) = setup(&env);
        let (_dev, card) = create_funded_card(&env, &client, &token);

        let impostor: Address = Address::generate(&env);
        client.change_work_status(&impostor, &card.id, &false);
    }

    #[test]
    fn test_change_work_status_not_owner_leaves_card_unchanged() {
        let env: Env = Env::default();
        env.mock_all_auths();
        let (client, _admin, token) = setup(&env);
        let (_dev, card) = create_funded_card(&env, &client, &token);

        let impostor: Address = Address::generate(&env);
        let result = client.try_change_work_status(&impostor, &card.id, &false);
        assert_eq!(result, Err(Ok(Error::NotOwner.into())));
        assert!(client.get_card(&card.id).open_to_work);
    }

    #[test]
    fn test_change_work_status_card_not_found() {
        let env: Env = Env::default();
        env.mock_all_auths();
        let (client, _admin, _token) = setup(&env);

        let dev: Address = Address::generate(&env);
        let result = client.try_change_work_status(&dev, &7, &true);
        assert_eq!(result, Err(Ok(Error::CardNotFound.into())));
    }
}
