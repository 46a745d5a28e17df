use filesmith::app::{help_text, is_exit_command, EXIT_COMMANDS, HELP_COMMAND};

#[test]
fn exit_commands_match_case_insensitively() {
    assert!(is_exit_command("exit"));
    assert!(is_exit_command("QUIT"));
    assert!(!is_exit_command("exit now"));
    assert!(!is_exit_command("help"));
}

#[test]
fn command_surface_is_documented_in_help() {
    let help = help_text();
    for command in EXIT_COMMANDS {
        assert!(help.contains(command), "missing `{command}`");
    }
    assert!(help.contains(HELP_COMMAND));
}
