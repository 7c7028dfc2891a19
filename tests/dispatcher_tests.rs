use obsbus::protocol::{Command, CommandDispatcher, DispatchState, Request};

#[cfg(test)]
mod vocabulary_tests {
    use super::*;

    #[test]
    fn test_every_token_parses() {
        assert_eq!(Command::parse("camera"), Some(Command::Camera));
        assert_eq!(Command::parse("focuser"), Some(Command::Focuser));
        assert_eq!(Command::parse("irlamp"), Some(Command::IrLamp));
        assert_eq!(Command::parse("status"), Some(Command::Status));
        assert_eq!(Command::parse("temperatures"), Some(Command::Temperatures));
        assert_eq!(Command::parse("scani2c"), Some(Command::ScanI2c));
        assert_eq!(Command::parse("backlight"), Some(Command::Backlight));
    }

    #[test]
    fn test_display_is_backlight_alias() {
        assert_eq!(Command::parse("display"), Some(Command::Backlight));
        assert_eq!(Command::parse("DISPLAY"), Some(Command::Backlight));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(Command::parse("Camera"), Some(Command::Camera));
        assert_eq!(Command::parse("CAMERA"), Some(Command::Camera));
        assert_eq!(Command::parse("IrLaMp"), Some(Command::IrLamp));
        assert_eq!(Command::parse("Scan_I2C"), None);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(Command::parse("  status \r\n"), Some(Command::Status));
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(Command::parse("blink"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("camera on"), None);
    }
}

#[cfg(test)]
mod state_machine_tests {
    use super::*;

    #[test]
    fn test_simple_commands_stay_in_awaiting_command() {
        let mut dispatcher = CommandDispatcher::new();

        assert_eq!(dispatcher.feed_line("camera"), Request::ToggleCamera);
        assert_eq!(dispatcher.state(), DispatchState::AwaitingCommand);
        assert_eq!(dispatcher.feed_line("irlamp"), Request::ToggleLamp);
        assert_eq!(dispatcher.feed_line("backlight"), Request::ToggleBacklight);
        assert_eq!(dispatcher.feed_line("status"), Request::Status);
        assert_eq!(dispatcher.feed_line("temperatures"), Request::Temperatures);
        assert_eq!(dispatcher.feed_line("scani2c"), Request::ScanBus);
        assert_eq!(dispatcher.state(), DispatchState::AwaitingCommand);
    }

    #[test]
    fn test_focuser_prompts_then_moves() {
        let mut dispatcher = CommandDispatcher::new();

        assert_eq!(dispatcher.feed_line("focuser"), Request::PromptFocuserSteps);
        assert_eq!(dispatcher.state(), DispatchState::AwaitingFocuserSteps);

        assert_eq!(dispatcher.feed_line("250"), Request::MoveFocuser(250));
        assert_eq!(dispatcher.state(), DispatchState::AwaitingCommand);
    }

    #[test]
    fn test_negative_step_count() {
        let mut dispatcher = CommandDispatcher::new();
        dispatcher.feed_line("focuser");
        assert_eq!(dispatcher.feed_line("-40"), Request::MoveFocuser(-40));
    }

    #[test]
    fn test_non_numeric_count_moves_zero_steps() {
        let mut dispatcher = CommandDispatcher::new();
        dispatcher.feed_line("FOCUSER");
        assert_eq!(dispatcher.feed_line("lots"), Request::MoveFocuser(0));
        assert_eq!(dispatcher.state(), DispatchState::AwaitingCommand);
    }

    #[test]
    fn test_command_token_in_count_position_is_a_count() {
        let mut dispatcher = CommandDispatcher::new();
        dispatcher.feed_line("focuser");

        // While awaiting the count, even a valid command token is
        // consumed as the (non-numeric) step count.
        assert_eq!(dispatcher.feed_line("camera"), Request::MoveFocuser(0));
        assert_eq!(dispatcher.feed_line("camera"), Request::ToggleCamera);
    }

    #[test]
    fn test_unknown_token_is_ignored_not_blocking() {
        let mut dispatcher = CommandDispatcher::new();

        assert_eq!(dispatcher.feed_line("blink"), Request::Ignored);
        assert_eq!(dispatcher.state(), DispatchState::AwaitingCommand);
        assert_eq!(dispatcher.feed_line("camera"), Request::ToggleCamera);
    }
}
