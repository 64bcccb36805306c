mod tests {
    use embassy_time::{Duration, Instant};
    use pixel_show_engine::{
        CommandChannel, ConfigError, DmxOutput, DmxUniverse, Error, FrameScheduler,
        OutputDriver, Rgb, ShowCommand, ShowEngine, ShowType,
        command::TrySendError,
        dmx::{DMX_MAX_PIXELS, DmxWriter, pixel_channel},
        error::Param,
    };

    #[derive(Default)]
    struct RecordingOutput {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingOutput {
        fn write(&mut self, pixels: &[Rgb]) {
            self.frames.push(pixels.to_vec());
        }
    }

    fn blue_white_engine() -> ShowEngine {
        let mut engine = ShowEngine::new();
        engine.set_color_step(1, 0, 0, 255);
        engine.set_color_step(2, 255, 255, 255);
        engine.set_color_count(2);
        engine
    }

    #[test]
    fn test_tick_writes_full_frame() {
        let mut scheduler =
            FrameScheduler::<_, 170, 4>::new(blue_white_engine(), RecordingOutput::default(), 70);
        scheduler.tick(Instant::from_millis(0));

        let frames = &scheduler.output().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 70);
        assert_eq!(frames[0][0], Rgb::new(0, 0, 255));
        assert_eq!(frames[0][1], Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_frame_pacing() {
        let mut scheduler =
            FrameScheduler::<_, 170, 4>::new(ShowEngine::new(), RecordingOutput::default(), 10);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        // Stalled far past the deadline: skip the backlog
        let result = scheduler.tick(Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(520));
    }

    #[test]
    fn test_zero_frame_delay_runs_back_to_back() {
        let mut scheduler =
            FrameScheduler::<_, 170, 4>::new(ShowEngine::new(), RecordingOutput::default(), 10);
        scheduler.set_frame_delay(Duration::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(3));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));

        // 40 frames of 0.25 ms at 60 BPM move the phase by 0.01 beat
        for frame in 1..=40 {
            scheduler.tick(Instant::from_micros(3_000 + frame * 250));
        }
        assert!((scheduler.engine().phase() - 0.01).abs() < 1e-4);
    }

    #[test]
    fn test_frame_delay_is_capped() {
        let mut scheduler =
            FrameScheduler::<_, 170, 4>::new(ShowEngine::new(), RecordingOutput::default(), 10);
        scheduler.set_frame_delay(Duration::from_millis(50));
        assert_eq!(scheduler.frame_delay(), Duration::from_millis(20));
        assert_eq!(
            scheduler.engine().take_error(),
            Some(Error::Config(ConfigError::OutOfRange {
                param: Param::FrameDelay,
                value: 50.0
            }))
        );
    }

    #[test]
    fn test_pixel_count_is_clamped() {
        let mut scheduler =
            FrameScheduler::<_, 170, 4>::new(ShowEngine::new(), RecordingOutput::default(), 200);
        assert_eq!(scheduler.pixel_count(), 170);
        scheduler.set_pixel_count(0);
        assert_eq!(scheduler.pixel_count(), 1);
        scheduler.set_pixel_count(70);
        assert_eq!(scheduler.pixel_count(), 70);
    }

    #[test]
    fn test_commands_apply_at_frame_boundary() {
        let channel = CommandChannel::<4>::new();
        let sender = channel.sender();
        let mut scheduler =
            FrameScheduler::<_, 170, 4>::new(ShowEngine::new(), RecordingOutput::default(), 10)
                .with_commands(channel.receiver());

        sender
            .try_send(ShowCommand::SetColorStep(1, Rgb::new(9, 8, 7)))
            .unwrap();
        sender
            .try_send(ShowCommand::SetShowType(ShowType::Chase))
            .unwrap();
        sender.try_send(ShowCommand::SetSpeed(90)).unwrap();
        sender.try_send(ShowCommand::SetSize(3)).unwrap();
        let rejected = ShowCommand::SetSplits(2);
        assert_eq!(sender.try_send(rejected), Err(TrySendError(rejected)));

        assert_eq!(scheduler.engine().config().show_type(), ShowType::Static);
        scheduler.tick(Instant::from_millis(0));

        let config = scheduler.engine().config();
        assert_eq!(config.show_type(), ShowType::Chase);
        assert_eq!(config.speed_bpm(), 90);
        assert_eq!(config.size(), 3);
        assert_eq!(config.splits(), 1);
        assert!(
            scheduler.output().frames[0]
                .iter()
                .all(|color| *color == Rgb::new(9, 8, 7))
        );
    }

    #[test]
    fn test_dmx_channel_layout() {
        assert_eq!(pixel_channel(0), Some(1));
        assert_eq!(pixel_channel(1), Some(4));
        assert_eq!(pixel_channel(DMX_MAX_PIXELS - 1), Some(508));
        assert_eq!(pixel_channel(DMX_MAX_PIXELS), None);
    }

    #[test]
    fn test_dmx_output_writes_rgb_triples() {
        let mut scheduler = FrameScheduler::<_, 170, 4>::new(
            blue_white_engine(),
            DmxOutput::new(DmxUniverse::new()),
            70,
        );
        scheduler.tick(Instant::from_millis(0));

        let universe = scheduler.output().writer();
        assert_eq!(
            [universe.channel(1), universe.channel(2), universe.channel(3)],
            [0, 0, 255]
        );
        assert_eq!(
            [universe.channel(4), universe.channel(5), universe.channel(6)],
            [255, 255, 255]
        );
        // Pixel 70 (offset 69) is white, nothing is written past it
        assert_eq!(universe.channel(208), 255);
        assert_eq!(universe.channel(211), 0);
    }

    #[test]
    fn test_dmx_output_drops_pixels_past_universe() {
        let mut output = DmxOutput::new(DmxUniverse::new());
        let pixels = [Rgb::new(1, 2, 3); 200];
        output.write(&pixels);
        let universe = output.into_inner();
        assert_eq!(universe.channel(510), 3);
        assert_eq!(universe.channel(511), 0);
        assert_eq!(universe.channel(512), 0);
    }

    #[test]
    fn test_dmx_universe_ignores_out_of_range_channels() {
        let mut universe = DmxUniverse::new();
        universe.write_channel(0, 9);
        universe.write_channel(513, 9);
        assert!(universe.as_slice().iter().all(|value| *value == 0));
        assert_eq!(universe.channel(0), 0);
    }
}
