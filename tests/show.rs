mod common;

mod tests {
    use bling_star::{
        DEFAULT_REPEAT_COUNT, PatternId, Playlist, Quadrant, SEG_OFF, ShowConfig, StepTimings,
    };

    use super::common::{self, Event};

    fn pattern_events(pattern: PatternId, count: u32) -> Vec<Event> {
        let (mut player, log) = common::player();
        player.play(pattern, count);
        common::events(&log)
    }

    #[test]
    fn test_default_config() {
        let config = ShowConfig::default();
        assert_eq!(config.repeat_count, DEFAULT_REPEAT_COUNT);
        assert_eq!(config.repeat_count, 3);
        assert_eq!(config.playlist.as_slice(), &PatternId::SEQUENCE);
        assert_eq!(config.timings, StepTimings::default());
    }

    #[test]
    fn test_lap_plays_every_pattern_in_order() {
        let (mut show, log) = common::show(&ShowConfig::default());
        show.lap();

        let mut expected = Vec::new();
        for pattern in PatternId::SEQUENCE {
            expected.extend(pattern_events(pattern, 3));
        }
        expected.push(Event::Feed);

        assert_eq!(common::events(&log), expected);
        assert_eq!(show.laps(), 1);
    }

    #[test]
    fn test_lap_feeds_watchdog_once_at_the_end() {
        let (mut show, log) = common::show(&ShowConfig::default());
        show.lap();
        show.lap();

        let events = common::events(&log);
        let feeds: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, event)| **event == Event::Feed)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(feeds, vec![events.len() / 2 - 1, events.len() - 1]);
        assert_eq!(show.laps(), 2);
    }

    #[test]
    fn test_lap_duration() {
        let (mut show, log) = common::show(&ShowConfig::default());
        show.lap();
        assert_eq!(common::total_ms(&common::events(&log)), 51_900);
    }

    #[test]
    fn test_setup_before_first_lap() {
        let (mut show, log) = common::show(&ShowConfig::default());
        show.setup();
        let events = common::events(&log);
        assert_eq!(events.len(), 5);
        assert_eq!(events[4], Event::Delay(50));
        assert!(show.player().ports().latch().is_all_off());
    }

    #[test]
    fn test_custom_playlist() {
        let mut playlist = Playlist::new();
        playlist.push(PatternId::QuadrantDance).unwrap();
        playlist.push(PatternId::SolidFlash).unwrap();
        let config = ShowConfig {
            repeat_count: 1,
            playlist,
            ..ShowConfig::default()
        };

        let (mut show, log) = common::show(&config);
        assert_eq!(
            show.playlist(),
            &[PatternId::QuadrantDance, PatternId::SolidFlash]
        );
        show.lap();

        let mut expected = pattern_events(PatternId::QuadrantDance, 1);
        expected.extend(pattern_events(PatternId::SolidFlash, 1));
        expected.push(Event::Feed);
        assert_eq!(common::events(&log), expected);
    }

    /// Delay steps of every pattern at the default repeat count, in lap order
    const STEPS_PER_PATTERN: [(PatternId, usize); 15] = [
        (PatternId::SolidFlash, 6),
        (PatternId::QuadrantChase, 24),
        (PatternId::QuadrantDance, 18),
        (PatternId::ChaseCw, 96),
        (PatternId::ChaseCcw, 96),
        (PatternId::TraceCw, 99),
        (PatternId::TraceCcw, 99),
        (PatternId::TraceTopToBottom, 51),
        (PatternId::TraceBottomToTop, 51),
        (PatternId::TraceTopAndBottom, 27),
        (PatternId::TraceMiddleToTopBottom, 27),
        (PatternId::TraceLeftToRight, 51),
        (PatternId::TraceRightToLeft, 51),
        (PatternId::TraceLeftAndRight, 27),
        (PatternId::TraceMiddleToLeftRight, 27),
    ];

    #[test]
    fn test_lap_starts_with_a_dark_star_then_full_flash() {
        let (mut show, log) = common::show(&ShowConfig::default());
        show.lap();
        let events = common::events(&log);

        assert_eq!(
            &events[..5],
            &[
                Event::Write(Quadrant::LowerRight, SEG_OFF),
                Event::Write(Quadrant::LowerLeft, SEG_OFF),
                Event::Write(Quadrant::UpperRight, SEG_OFF),
                Event::Write(Quadrant::UpperLeft, SEG_OFF),
                Event::Write(Quadrant::LowerRight, 0x00),
            ]
        );
        let first = &common::steps(&events)[0];
        assert_eq!(first.ms, 250);
        assert_eq!(first.latch.lit_count(), 32);
    }

    #[test]
    fn test_lap_step_counts_per_pattern() {
        let mut total = 0;
        for (index, (pattern, steps)) in STEPS_PER_PATTERN.iter().enumerate() {
            assert_eq!(PatternId::SEQUENCE[index], *pattern);

            let mut playlist = Playlist::new();
            playlist.push(*pattern).unwrap();
            let config = ShowConfig {
                playlist,
                ..ShowConfig::default()
            };
            let (mut show, log) = common::show(&config);
            show.lap();
            assert_eq!(common::steps(&common::events(&log)).len(), *steps, "{pattern:?}");
            total += steps;
        }

        let (mut show, log) = common::show(&ShowConfig::default());
        show.lap();
        assert_eq!(common::steps(&common::events(&log)).len(), total);
        assert_eq!(total, 750);
    }
}
