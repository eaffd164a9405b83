use membership_core::{AppConfig, AppContext, AppError, Authenticator, MemberFields};

fn fields(full_name: &str) -> MemberFields {
    MemberFields {
        full_name: full_name.to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        address: "Arlington".to_string(),
        phone_number: "703 555 0100".to_string(),
        date_of_birth: "1906-12-09".to_string(),
        date_joined: "2021-02-02".to_string(),
        date_exit: None,
        photo: None,
    }
}

#[test]
fn context_keeps_data_across_services() {
    let context = AppContext::open_in_memory().unwrap();

    let id = context
        .members()
        .unwrap()
        .save_member(&fields("Grace Hopper"), None)
        .member_id
        .unwrap();

    let other_view = context.members().unwrap();
    let loaded = other_view.get_member(id).unwrap().unwrap();
    assert_eq!(loaded.fields.full_name, "Grace Hopper");
}

#[test]
fn context_opens_configured_file_store_once_per_process() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        db_path: dir.path().join("church.db"),
        ..AppConfig::default()
    };

    {
        let context = AppContext::open(config.clone()).unwrap();
        context
            .members()
            .unwrap()
            .save_member(&fields("Grace Hopper"), None);
    }

    let reopened = AppContext::open(config).unwrap();
    let stats = reopened.members().unwrap().member_stats().unwrap();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.last_join_date.as_deref(), Some("2021-02-02"));
}

#[test]
fn invalid_config_is_rejected_before_opening_store() {
    let config = AppConfig {
        db_path: "".into(),
        ..AppConfig::default()
    };

    let err = AppContext::open(config).err().unwrap();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn authenticator_uses_configured_admin_credentials() {
    let context = AppContext::open_in_memory().unwrap();
    let gate = context.authenticator();

    assert!(gate.authenticate("admin", "admin1234").is_granted());
    assert!(!gate.authenticate("admin", "wrong").is_granted());
}
