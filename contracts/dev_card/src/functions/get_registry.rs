// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{Address, Env};

use super::utils::{read_admin_cap, read_registry};
use crate::schema::Registry;

pub fn get_registry(env: &Env) -> Registry {
    read_registry(env)
}

/// Address currently holding the admin capability.
pub fn get_admin(env: &Env) -> Address {
    read_admin_cap(env).holder
}

#[cfg(test)]
mod test {
    use soroban_sdk::{testutils::Address as _, Address, Env};

    use crate::error::Error;
    use crate::schema::{DataKey, Registry};
    use crate::test::{create_funded_card, setup};

    #[test]
    fn test_registry_unchanged_by_card_lifecycle() {
        let env: Env = Env::default();
        env.mock_all_auths();
        let (client, admin, token) = setup(&env);
        let before: Registry = client.get_registry();

        let (dev, card) = create_funded_card(&env, &client, &token);
        client.change_work_status(&dev, &card.id, &false);
        client.destroy_card(&card.id);

        assert_eq!(client.get_registry(), before);
        assert_eq!(before.owner, admin);
        assert_eq!(client.get_admin(), admin);
    }

    #[test]
    fn test_card_owner_does_not_hold_cap() {
        let env: Env = Env::default();
        env.mock_all_auths();
        let (client, admin, token) = setup(&env);
        let (dev, _card) = create_funded_card(&env, &client, &token);

        let stranger: Address = Address::generate(&env);
        assert_ne!(client.get_admin(), dev);
        assert_ne!(client.get_admin(), stranger);
        assert_eq!(client.get_admin(), admin);
    }

    #[test]
    fn test_missing_registry_is_not_initialized() {
        let env: Env = Env::default();
        let (client, _admin, _token) = setup(&env);

        env.as_contract(&client.address, || {
            env.storage().instance().remove(&DataKey::Registry);
            env.storage().instance().remove(&DataKey::AdminCap);
        });

        assert_eq!(client.try_get_registry(), Err(Ok(Error::NotInitialized.into())));
        assert_eq!(client.try_get_admin(), Err(Ok(Error::NotInitialized.into())));
    }
}
