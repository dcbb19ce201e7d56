use super::*;

/// Tests a command without requirements in a private channel.
///
/// Expected: Ok
#[test]
fn allows_ungated_commands_anywhere() {
    let result = PermissionGate::check(&CapabilitySet::new(), &CapabilitySet::new(), true);

    assert_eq!(result, Ok(()));
}

/// Tests a gated command in a private channel.
///
/// Expected: Err(NoGuildContext) even when the capability is held
#[test]
fn rejects_gated_commands_in_private_channels() {
    let required = test_support::capabilities(&[Capability::MANAGE_NICKNAMES]);

    let result = PermissionGate::check(&required, &required, true);

    assert_eq!(result, Err(GateRejection::NoGuildContext));
}

/// Tests a caller holding only part of the required capabilities.
///
/// Expected: Err(MissingCapabilities) listing exactly the missing ones
#[test]
fn reports_missing_capabilities() {
    let required =
        test_support::capabilities(&[Capability::MANAGE_NICKNAMES, Capability::BAN_MEMBERS]);
    let held = test_support::capabilities(&[Capability::BAN_MEMBERS, Capability::SEND_MESSAGES]);

    let result = PermissionGate::check(&required, &held, false);

    let missing = test_support::capabilities(&[Capability::MANAGE_NICKNAMES]);
    assert_eq!(result, Err(GateRejection::MissingCapabilities(missing)));
}

/// Tests a caller holding a superset of the required capabilities.
///
/// Expected: Ok
#[test]
fn allows_callers_with_all_capabilities() {
    let required = test_support::capabilities(&[Capability::MANAGE_NICKNAMES]);
    let held =
        test_support::capabilities(&[Capability::MANAGE_NICKNAMES, Capability::ADMINISTRATOR]);

    assert_eq!(PermissionGate::check(&required, &held, false), Ok(()));
}

/// Tests the user-visible text of a missing capability rejection.
///
/// Expected: message names the capability
#[test]
fn rejection_text_names_capabilities() {
    let rejection = GateRejection::MissingCapabilities(test_support::capabilities(&[
        Capability::MANAGE_NICKNAMES,
    ]));

    assert!(rejection.to_string().contains("ManageNicknames"));
}
