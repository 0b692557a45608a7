use sc2ranks::{from_env, new_client, Sc2Ranks, Sc2RanksError, APP_KEY_ENV, DEFAULT_APP_KEY};

// Kept in one test so nothing else in this binary races on the variable
#[test]
fn test_app_key_from_environment() {
    std::env::remove_var(APP_KEY_ENV);
    assert!(matches!(from_env(), Err(Sc2RanksError::MissingAppKey)));

    std::env::set_var(APP_KEY_ENV, "env key");
    let client = from_env().unwrap();
    assert_eq!(client.app_key(), "env key");

    #[cfg(feature = "blocking")]
    {
        let blocking = sc2ranks::blocking::from_env().unwrap();
        assert_eq!(blocking.app_key(), "env key");
    }

    std::env::remove_var(APP_KEY_ENV);
    #[cfg(feature = "blocking")]
    {
        assert!(matches!(
            sc2ranks::blocking::from_env(),
            Err(Sc2RanksError::MissingAppKey)
        ));
    }
}

#[test]
fn test_new_client() {
    assert_eq!(new_client("demo").app_key(), "demo");
}

#[test]
fn test_default_app_key() {
    assert_eq!(Sc2Ranks::default().app_key(), DEFAULT_APP_KEY);

    // The blocking client has no `Default`; its fallible `new` takes the key
    #[cfg(feature = "blocking")]
    {
        let blocking = sc2ranks::blocking::BlockingSc2Ranks::new(DEFAULT_APP_KEY).unwrap();
        assert_eq!(blocking.app_key(), DEFAULT_APP_KEY);
    }
}
