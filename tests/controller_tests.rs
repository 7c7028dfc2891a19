use obsbus::config::ControllerConfig;
use obsbus::controller::DeviceController;
use obsbus::drivers::sim::{FocuserOp, SimDisplay, SimFocuser, SimHal, SimSwitchBank};
use obsbus::drivers::DisplayFrame;
use obsbus::state::TEMP_CHANNEL_LABELS;

fn bench() -> DeviceController<SimHal> {
    DeviceController::new(
        &ControllerConfig::default(),
        SimSwitchBank::new(),
        SimFocuser::new(),
        SimDisplay::new(),
    )
}

#[cfg(test)]
mod power_up_tests {
    use super::*;

    #[test]
    fn test_power_up_sequence() {
        let controller = bench();
        let state = controller.state();

        // Relays low, backlight on, splash frame shown, coils released.
        assert!(!state.camera_on);
        assert!(!state.lamp_on);
        assert!(state.backlight_on);
        assert!(!controller.switches().level(7));
        assert!(!controller.switches().level(8));
        assert!(controller.display().backlight());
        assert_eq!(controller.display().last_frame(), Some(&DisplayFrame::splash()));
        assert_eq!(controller.focuser().ops(), &[FocuserOp::Release]);
    }

    #[test]
    fn test_channels_fixed_at_construction() {
        let controller = bench();
        let channels = &controller.state().channels;

        assert_eq!(channels.len(), TEMP_CHANNEL_LABELS.len());
        for (channel, &label) in channels.iter().zip(TEMP_CHANNEL_LABELS) {
            assert_eq!(channel.label, label);
            assert!(channel.value_c.is_nan());
        }
    }

    #[test]
    fn test_atmosphere_unset_before_first_sample() {
        let controller = bench();
        assert!(controller.state().atmosphere_temp_c.is_nan());
        assert!(controller.state().atmosphere_humidity_pct.is_nan());
    }
}

#[cfg(test)]
mod device_state_tests {
    use super::*;

    #[test]
    fn test_state_mirrors_last_commanded_value() {
        let mut controller = bench();

        for &on in &[true, true, false, true, false, false] {
            controller.set_camera(on);
            assert_eq!(controller.state().camera_on, on);
            assert_eq!(controller.switches().level(7), on);
        }

        for &on in &[true, false, false, true] {
            controller.set_lamp(on);
            assert_eq!(controller.state().lamp_on, on);
            assert_eq!(controller.switches().level(8), on);
        }

        for &on in &[false, true, false] {
            controller.set_backlight(on);
            assert_eq!(controller.state().backlight_on, on);
            assert_eq!(controller.display().backlight(), on);
        }
    }

    #[test]
    fn test_toggles_flip_then_apply() {
        let mut controller = bench();

        assert!(controller.toggle_camera());
        assert!(controller.state().camera_on);
        assert!(!controller.toggle_camera());
        assert!(!controller.state().camera_on);

        assert!(controller.toggle_lamp());
        assert!(controller.state().lamp_on);
        assert!(controller.switches().level(8));

        // Backlight starts on after power-up.
        assert!(!controller.toggle_backlight());
        assert!(!controller.state().backlight_on);
    }

    #[test]
    fn test_set_is_reapplied_when_idempotent() {
        let mut controller = bench();
        let writes_before = controller.switches().write_count();

        controller.set_camera(false);
        controller.set_camera(false);

        // Same commanded level still reaches the relay each time.
        assert_eq!(controller.switches().write_count(), writes_before + 2);
        assert!(!controller.state().camera_on);
    }

    #[test]
    fn test_custom_pin_assignment() {
        let config = ControllerConfig {
            camera_pin: 3,
            lamp_pin: 12,
            ..ControllerConfig::default()
        };
        let mut controller: DeviceController<SimHal> = DeviceController::new(
            &config,
            SimSwitchBank::new(),
            SimFocuser::new(),
            SimDisplay::new(),
        );

        controller.set_camera(true);
        controller.set_lamp(true);
        assert!(controller.switches().level(3));
        assert!(controller.switches().level(12));
        assert!(!controller.switches().level(7));
    }
}

#[cfg(test)]
mod wind_tests {
    use super::*;

    #[test]
    fn test_peak_tracks_maximum_of_samples() {
        let mut controller = bench();
        let samples = [10.0_f32, 25.5, 25.5, 3.0, 18.0];

        for &speed in &samples {
            controller.record_wind_sample(speed);
            assert!(controller.state().max_wind_speed_kmh >= controller.state().wind_speed_kmh);
        }

        let expected = samples.iter().fold(0.0_f32, |acc, &s| acc.max(s));
        assert_eq!(controller.state().wind_speed_kmh, 18.0);
        assert_eq!(controller.state().max_wind_speed_kmh, expected);
    }

    #[test]
    fn test_negative_sample_accepted_without_validation() {
        let mut controller = bench();
        controller.record_wind_sample(12.0);
        controller.record_wind_sample(-4.0);

        assert_eq!(controller.state().wind_speed_kmh, -4.0);
        assert_eq!(controller.state().max_wind_speed_kmh, 12.0);
    }

    #[test]
    fn test_nan_sample_never_raises_peak() {
        let mut controller = bench();
        controller.record_wind_sample(9.0);
        controller.record_wind_sample(f32::NAN);

        assert!(controller.state().wind_speed_kmh.is_nan());
        assert_eq!(controller.state().max_wind_speed_kmh, 9.0);
    }

    #[test]
    fn test_peak_is_never_reset() {
        let mut controller = bench();
        controller.record_wind_sample(40.0);
        for _ in 0..10 {
            controller.record_wind_sample(1.0);
        }
        assert_eq!(controller.state().max_wind_speed_kmh, 40.0);
    }
}

#[cfg(test)]
mod focuser_tests {
    use super::*;

    #[test]
    fn test_move_steps_then_releases_coils() {
        let mut controller = bench();
        controller.move_focuser(120);

        // Skip the power-up release at index 0.
        assert_eq!(
            &controller.focuser().ops()[1..],
            &[FocuserOp::Step(120), FocuserOp::Release]
        );
        assert_eq!(controller.focuser().position(), 120);
    }

    #[test]
    fn test_zero_step_move_still_releases() {
        let mut controller = bench();
        controller.move_focuser(0);

        assert_eq!(
            &controller.focuser().ops()[1..],
            &[FocuserOp::Step(0), FocuserOp::Release]
        );
        assert_eq!(controller.focuser().position(), 0);
    }

    #[test]
    fn test_negative_count_passes_through_unchanged() {
        let mut controller = bench();
        controller.move_focuser(-300);

        assert_eq!(
            &controller.focuser().ops()[1..],
            &[FocuserOp::Step(-300), FocuserOp::Release]
        );
        assert_eq!(controller.focuser().position(), -300);
    }

    #[test]
    fn test_channel_refresh_preserves_order() {
        let mut controller = bench();
        controller.refresh_channels(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        let values: Vec<f32> = controller.state().channels.iter().map(|c| c.value_c).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        // A second refresh overwrites in the same fixed order.
        controller.refresh_channels(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        let labels: Vec<&str> = controller.state().channels.iter().map(|c| c.label).collect();
        assert_eq!(labels, TEMP_CHANNEL_LABELS.to_vec());
    }
}
