mod tests {
    use pixel_show_engine::show::{
        Blend, Direction, RANDOM_BINS, RandomLayout, ShowType, SplitMix64, TransitionType,
    };

    #[test]
    fn test_show_type_names() {
        assert_eq!(ShowType::parse_from_str("CHASE"), Some(ShowType::Chase));
        assert_eq!(ShowType::parse_from_str("pulse"), Some(ShowType::Pulse));
        assert_eq!(ShowType::parse_from_str("strobe"), None);
        assert_eq!(ShowType::All.as_str(), "all");
    }

    #[test]
    fn test_show_type_from_raw() {
        assert_eq!(ShowType::from_raw(0), Some(ShowType::Static));
        assert_eq!(ShowType::from_raw(3), Some(ShowType::Pulse));
        assert_eq!(ShowType::from_raw(4), None);
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(
            Direction::parse_from_str("MID_TO_END"),
            Some(Direction::MidToEnd)
        );
        assert_eq!(Direction::from_raw(4), Some(Direction::Random));
        assert_eq!(Direction::EndToMid.as_str(), "end_to_mid");
        assert_eq!(Direction::from_raw(5), None);
    }

    #[test]
    fn test_transition_names() {
        assert_eq!(
            TransitionType::parse_from_str("Trailing"),
            Some(TransitionType::Trailing)
        );
        assert_eq!(TransitionType::from_raw(1), Some(TransitionType::Leading));
        assert_eq!(TransitionType::Both.as_str(), "both");
    }

    #[test]
    fn test_static_ignores_phase() {
        let a = ShowType::Static.step_position(2.5, 0.0);
        let b = ShowType::Static.step_position(2.5, 3.25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_chase_travels_with_phase() {
        let position = ShowType::Chase.step_position(3.0, 1.0);
        assert_eq!(position.index, 2.0);
        assert_eq!(position.level, 255);
    }

    #[test]
    fn test_pulse_envelope() {
        assert_eq!(ShowType::Pulse.step_position(0.0, 0.0).level, 255);
        assert_eq!(ShowType::Pulse.step_position(0.0, 0.5).level, 0);
        assert_eq!(ShowType::Pulse.step_position(0.0, 1.0).level, 255);
    }

    #[test]
    fn test_direction_remap() {
        assert_eq!(Direction::LeftRight.remap(3.0, 10.0, None), 3.0);
        assert_eq!(Direction::RightLeft.remap(3.0, 10.0, None), 7.0);
        assert_eq!(Direction::RightLeft.remap(0.0, 10.0, None), 0.0);
        assert_eq!(Direction::MidToEnd.remap(5.0, 10.0, None), 0.0);
        assert_eq!(Direction::MidToEnd.remap(0.0, 10.0, None), 5.0);
        assert_eq!(Direction::EndToMid.remap(0.0, 10.0, None), 0.0);
        assert_eq!(Direction::EndToMid.remap(5.0, 10.0, None), 5.0);
        assert_eq!(Direction::Random.remap(3.0, 10.0, None), 3.0);
    }

    #[test]
    fn test_transition_hard_step() {
        for t in [0.0, 0.25, 0.5, 0.99] {
            assert_eq!(TransitionType::Both.shape(0.0, t), Blend::Pure);
            assert_eq!(TransitionType::Leading.shape(0.0, t), Blend::Pure);
            assert_eq!(TransitionType::Trailing.shape(0.0, t), Blend::Pure);
        }
    }

    #[test]
    fn test_transition_leading() {
        assert_eq!(TransitionType::Leading.shape(0.5, 0.0), Blend::Previous(1.0));
        assert_eq!(TransitionType::Leading.shape(0.5, 0.25), Blend::Previous(0.5));
        assert_eq!(TransitionType::Leading.shape(0.5, 0.5), Blend::Pure);
        assert_eq!(TransitionType::Leading.shape(0.5, 0.75), Blend::Pure);
    }

    #[test]
    fn test_transition_trailing() {
        assert_eq!(TransitionType::Trailing.shape(0.5, 0.25), Blend::Pure);
        assert_eq!(TransitionType::Trailing.shape(0.5, 0.75), Blend::Next(0.5));
    }

    #[test]
    fn test_transition_both_full_width() {
        assert_eq!(TransitionType::Both.shape(1.0, 0.0), Blend::Previous(0.5));
        assert_eq!(TransitionType::Both.shape(1.0, 0.5), Blend::Pure);
        assert_eq!(TransitionType::Both.shape(1.0, 0.75), Blend::Next(0.25));
    }

    #[test]
    fn test_random_layout_is_permutation() {
        let mut rng = SplitMix64::new(42);
        let layout = RandomLayout::shuffled(&mut rng);
        let mut bins = *layout.bins();
        bins.sort_unstable();
        assert_eq!(&bins, RandomLayout::identity().bins());
    }

    #[test]
    fn test_random_layout_is_seeded() {
        let a = RandomLayout::shuffled(&mut SplitMix64::new(7));
        let b = RandomLayout::shuffled(&mut SplitMix64::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_layout_remap_keeps_offset_in_bin() {
        let layout = RandomLayout::shuffled(&mut SplitMix64::new(3));
        let bin_width = 1.0 / RANDOM_BINS as f32;
        for bin in 0..RANDOM_BINS {
            let position = (bin as f32 + 0.5) * bin_width;
            let remapped = layout.remap(position);
            let expected = (f32::from(layout.bins()[bin]) + 0.5) * bin_width;
            assert!((remapped - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rng_below_is_bounded() {
        let mut rng = SplitMix64::new(1);
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
        assert_eq!(rng.below(0), 0);
    }
}
