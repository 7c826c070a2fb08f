mod common;

mod tests {
    use super::common::{RecordingTransport, decode_pixels};
    use ws2812b_fx::color::BLACK;
    use ws2812b_fx::effect::BreatheDirection;
    use ws2812b_fx::engine::BUSY_RETRY_DELAY;
    use ws2812b_fx::{
        Color, ColorSpace, Command, Duration, EffectEngine, EffectId, EffectSlot, EngineConfig,
        FrameOutcome, Hsl, Instant, Palette, RainbowStyle, Rgb, TransmitLatch, pulse_buffer_len,
    };

    const LEN6: usize = pulse_buffer_len(6);
    const LEN8: usize = pulse_buffer_len(8);

    fn fixed(effect: EffectId) -> EngineConfig {
        EngineConfig {
            effect,
            auto_cycle: false,
            ..EngineConfig::default()
        }
    }

    fn with_palette(effect: EffectId, palette: Palette) -> EngineConfig {
        EngineConfig {
            palette,
            ..fixed(effect)
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_defaults() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &EngineConfig::default());

        assert_eq!(engine.effect(), EffectId::RainbowChase);
        assert!(engine.is_auto_cycle());
        assert_eq!(engine.cycle_duration(), Duration::from_millis(5_000));
        assert_eq!(engine.knobs().brightness(), 100);
        assert_eq!(engine.knobs().speed(), 50);
    }

    #[test]
    fn test_auto_cycle_order_and_timing() {
        let latch = TransmitLatch::new();
        let config = EngineConfig {
            cycle_duration: Duration::from_millis(1_000),
            ..EngineConfig::default()
        };
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        let mut transitions = Vec::new();
        let mut current = engine.effect();
        for ms in (0..=6_020).step_by(10) {
            let result = engine.tick(at(ms), &mut transport);
            assert_eq!(result.outcome, FrameOutcome::Committed);
            if result.effect != current {
                transitions.push((ms, result.effect));
                current = result.effect;
            }
        }

        assert_eq!(
            transitions,
            vec![
                (1_010, EffectId::Fire),
                (2_010, EffectId::Breathe),
                (3_010, EffectId::TheaterChase),
                (4_010, EffectId::Twinkle),
                (5_010, EffectId::StaticColor),
                (6_010, EffectId::RainbowChase),
            ]
        );
    }

    #[test]
    fn test_cycle_restarts_after_long_stall() {
        let latch = TransmitLatch::new();
        let config = EngineConfig {
            cycle_duration: Duration::from_millis(1_000),
            ..EngineConfig::default()
        };
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        // One transition per tick, however long the gap
        assert_eq!(engine.tick(at(10_000), &mut transport).effect, EffectId::Fire);
        assert_eq!(engine.tick(at(10_500), &mut transport).effect, EffectId::Fire);
        assert_eq!(engine.tick(at(11_001), &mut transport).effect, EffectId::Breathe);
    }

    #[test]
    fn test_set_effect_disables_auto_cycle_and_clears() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &EngineConfig::default(),
        );
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert!(engine.frame().pixels().iter().any(|&p| p != BLACK));

        engine.set_effect(EffectId::TheaterChase);
        assert_eq!(engine.effect(), EffectId::TheaterChase);
        assert!(!engine.is_auto_cycle());
        assert!(engine.frame().pixels().iter().all(|&p| p == BLACK));

        for ms in (0..20_000).step_by(100) {
            assert_eq!(
                engine.tick(at(ms), &mut transport).effect,
                EffectId::TheaterChase
            );
        }
    }

    #[test]
    fn test_deferred_tick_keeps_phase() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::StaticColor),
        );
        let mut transport = RecordingTransport::new();

        let first = engine.tick(at(0), &mut transport);
        assert_eq!(first.outcome, FrameOutcome::Committed);
        assert!(decode_pixels(transport.last(), 8).iter().all(|&w| w == 0x00_FF_00));

        let deferred = engine.tick(at(1), &mut transport);
        assert_eq!(deferred.outcome, FrameOutcome::Deferred);
        assert_eq!(deferred.delay, BUSY_RETRY_DELAY);
        assert_eq!(transport.frames.len(), 1);

        latch.complete(&mut transport);
        let second = engine.tick(at(2), &mut transport);
        assert_eq!(second.outcome, FrameOutcome::Committed);
        // Hue 1, not hue 2: the deferred tick did not step the effect
        assert!(decode_pixels(transport.last(), 8).iter().all(|&w| w == 0x04_FF_00));
    }

    #[test]
    fn test_frame_delay_follows_speed() {
        let latch = TransmitLatch::new();
        let mut transport = RecordingTransport::completing(&latch);

        let cases = [
            (EffectId::RainbowChase, 50),
            (EffectId::TheaterChase, 100),
            (EffectId::Breathe, 100),
            (EffectId::Fire, 50),
        ];
        for (effect, expected) in cases {
            let mut pulses = [0u16; LEN8];
            let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &fixed(effect));
            let result = engine.tick(at(0), &mut transport);
            assert_eq!(result.delay, Duration::from_millis(expected), "{effect:?}");
        }

        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::RainbowChase),
        );
        engine.set_speed(100);
        assert_eq!(
            engine.tick(at(0), &mut transport).delay,
            Duration::from_millis(1)
        );
        engine.set_effect(EffectId::TheaterChase);
        assert_eq!(
            engine.tick(at(0), &mut transport).delay,
            Duration::from_millis(1)
        );
        engine.set_speed(1);
        assert_eq!(
            engine.tick(at(0), &mut transport).delay,
            Duration::from_millis(198)
        );
    }

    #[test]
    fn test_knobs_clamp() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &EngineConfig::default(),
        );

        engine.set_brightness(250);
        engine.set_speed(0);
        assert_eq!(engine.knobs().brightness(), 100);
        assert_eq!(engine.knobs().speed(), 1);

        engine.set_speed(200);
        assert_eq!(engine.knobs().speed(), 100);
    }

    #[test]
    fn test_zero_brightness_is_dark() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::StaticColor),
        );
        let mut transport = RecordingTransport::completing(&latch);

        engine.set_brightness(0);
        engine.tick(at(0), &mut transport);
        assert!(decode_pixels(transport.last(), 8).iter().all(|&w| w == 0));
    }

    #[test]
    fn test_rainbow_spreads_hue() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN6];
        let mut engine = EffectEngine::<6, LEN6>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::RainbowChase),
        );
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        let words = decode_pixels(transport.last(), 6);
        assert_eq!(words[0], 0x00_FF_00);
        assert_eq!(words[2], 0xFF_00_00);
        assert_eq!(words[4], 0x00_00_FF);
    }

    #[test]
    fn test_rainbow_rgb_wheel() {
        let latch = TransmitLatch::new();
        let config = EngineConfig {
            palette: Palette {
                color_space: ColorSpace::Rgb,
                ..Palette::DEFAULT
            },
            ..fixed(EffectId::RainbowChase)
        };
        let mut pulses = [0u16; pulse_buffer_len(3)];
        let mut engine = EffectEngine::<3, { pulse_buffer_len(3) }>::new(
            &latch,
            &mut pulses,
            &config,
        );
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert_eq!(
            engine.frame().pixels(),
            &[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), Rgb::new(0, 255, 0)]
        );

        engine.tick(at(50), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(249, 0, 6)));
    }

    #[test]
    fn test_rainbow_hsl() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN6];
        let mut engine = EffectEngine::<6, LEN6>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::RainbowChase),
        );
        let mut transport = RecordingTransport::completing(&latch);

        engine.apply(Command::SetColorSpace(ColorSpace::Hsl));
        engine.tick(at(0), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(engine.frame().pixel(2), Some(Rgb::new(5, 255, 0)));
    }

    #[test]
    fn test_theater_chase_pattern() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN6];
        let mut engine = EffectEngine::<6, LEN6>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::TheaterChase),
        );
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert_eq!(
            decode_pixels(transport.last(), 6),
            vec![0x00_FF_00, 0, 0, 0x00_FF_00, 0, 0]
        );

        engine.tick(at(100), &mut transport);
        assert_eq!(
            decode_pixels(transport.last(), 6),
            vec![0, 0x15_FF_00, 0, 0, 0x15_FF_00, 0]
        );

        engine.tick(at(200), &mut transport);
        let words = decode_pixels(transport.last(), 6);
        assert!(words[2] != 0 && words[5] != 0);
        assert_eq!((words[0], words[1], words[3], words[4]), (0, 0, 0, 0));

        // Back to the first offset
        engine.tick(at(300), &mut transport);
        let words = decode_pixels(transport.last(), 6);
        assert!(words[0] != 0 && words[3] != 0);
    }

    #[test]
    fn test_breathe_stays_in_band() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::Breathe),
        );
        let mut transport = RecordingTransport::completing(&latch);

        let (mut lowest, mut highest) = (u8::MAX, 0);
        for ms in 0..300 {
            engine.tick(at(ms), &mut transport);
            let pixel = engine.frame().pixel(0).unwrap();
            let peak = pixel.r.max(pixel.g).max(pixel.b);
            lowest = lowest.min(peak);
            highest = highest.max(peak);
        }

        // 10% and 90% of 255
        assert_eq!(lowest, 25);
        assert_eq!(highest, 229);
    }

    #[test]
    fn test_fire_palette() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &fixed(EffectId::Fire));
        let mut transport = RecordingTransport::completing(&latch);

        let mut distinct = std::collections::HashSet::new();
        for ms in 0..50 {
            engine.tick(at(ms), &mut transport);
            for &pixel in engine.frame().pixels() {
                assert_eq!(pixel.b, 0);
                assert!(pixel.r >= 51, "{pixel:?}");
                assert!(pixel.g <= pixel.r / 2 + 1, "{pixel:?}");
                distinct.insert((pixel.r, pixel.g));
            }
        }
        assert!(distinct.len() > 10);
    }

    #[test]
    fn test_fire_is_reproducible() {
        let latch = TransmitLatch::new();
        let config = EngineConfig {
            seed: 42,
            ..fixed(EffectId::Fire)
        };
        let mut pulses_a = [0u16; LEN8];
        let mut a = EffectEngine::<8, LEN8>::new(&latch, &mut pulses_a, &config);
        let mut pulses_b = [0u16; LEN8];
        let mut b = EffectEngine::<8, LEN8>::new(&latch, &mut pulses_b, &config);
        let mut transport = RecordingTransport::completing(&latch);

        for ms in 0..10 {
            a.tick(at(ms), &mut transport);
            b.tick(at(ms), &mut transport);
            assert_eq!(a.frame().pixels(), b.frame().pixels());
        }
    }

    #[test]
    fn test_twinkle_fixed_color() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &fixed(EffectId::Twinkle),
        );
        let mut transport = RecordingTransport::completing(&latch);

        for ms in 0..3 {
            engine.tick(at(ms), &mut transport);
            assert!(
                engine
                    .frame()
                    .pixels()
                    .iter()
                    .all(|&p| p == Rgb::new(243, 0, 255))
            );
        }
    }

    #[test]
    fn test_apply_commands() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(
            &latch,
            &mut pulses,
            &EngineConfig::default(),
        );

        engine.apply(Command::SetBrightness(150));
        engine.apply(Command::SetSpeed(0));
        assert_eq!(engine.knobs().brightness(), 100);
        assert_eq!(engine.knobs().speed(), 1);

        engine.apply(Command::SetEffect(EffectId::Fire));
        assert_eq!(engine.effect(), EffectId::Fire);
        assert!(!engine.is_auto_cycle());

        engine.apply(Command::SetCycleDuration(Duration::from_millis(250)));
        engine.apply(Command::SetAutoCycle(true));
        assert!(engine.is_auto_cycle());
        assert_eq!(engine.cycle_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_auto_cycle_window_restarts_when_enabled() {
        let latch = TransmitLatch::new();
        let config = EngineConfig {
            cycle_duration: Duration::from_millis(1_000),
            ..fixed(EffectId::StaticColor)
        };
        let mut pulses = [0u16; LEN8];
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        engine.tick(at(5_000), &mut transport);
        engine.set_auto_cycle(true);

        // Window starts at the first tick after enabling
        let result = engine.tick(at(5_500), &mut transport);
        assert_eq!(result.effect, EffectId::StaticColor);
        let result = engine.tick(at(6_400), &mut transport);
        assert_eq!(result.effect, EffectId::StaticColor);
        let result = engine.tick(at(6_501), &mut transport);
        assert_eq!(result.effect, EffectId::RainbowChase);
    }

    #[test]
    fn test_static_color_base_color() {
        let latch = TransmitLatch::new();
        let palette = Palette {
            base_color: Some(Color::Rgb(Rgb::new(10, 20, 30))),
            ..Palette::DEFAULT
        };
        let mut pulses = [0u16; LEN8];
        let config = with_palette(EffectId::StaticColor, palette);
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.set_brightness(0);
        for ms in 0..3 {
            engine.tick(at(ms), &mut transport);
            assert!(decode_pixels(transport.last(), 8).iter().all(|&w| w == 0x14_0A_1E));
        }
    }

    #[test]
    fn test_static_color_rotates_in_color_space() {
        let latch = TransmitLatch::new();
        let palette = Palette {
            color_space: ColorSpace::Rgb,
            ..Palette::DEFAULT
        };
        let mut pulses = [0u16; LEN8];
        let config = with_palette(EffectId::StaticColor, palette);
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(255, 0, 0)));
        engine.tick(at(1), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(255, 4, 0)));

        engine.set_color_space(ColorSpace::Hsl);
        engine.tick(at(2), &mut transport);
        assert_eq!(
            engine.frame().pixel(0),
            Some(Hsl::new(2, 100, 50).to_rgb())
        );
    }

    #[test]
    fn test_breathe_scales_rgb_base() {
        let latch = TransmitLatch::new();
        let palette = Palette {
            base_color: Some(Color::Rgb(Rgb::new(200, 100, 0))),
            ..Palette::DEFAULT
        };
        let mut pulses = [0u16; LEN8];
        let config = with_palette(EffectId::Breathe, palette);
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(100, 50, 0)));
        engine.tick(at(1), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(102, 51, 0)));
    }

    #[test]
    fn test_breathe_drives_hsl_lightness() {
        let latch = TransmitLatch::new();
        let palette = Palette {
            base_color: Some(Color::Hsl(Hsl::new(120, 100, 100))),
            ..Palette::DEFAULT
        };
        let mut pulses = [0u16; LEN8];
        let config = with_palette(EffectId::Breathe, palette);
        let mut engine = EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(5, 255, 0)));
        engine.tick(at(1), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(10, 255, 5)));
    }

    #[test]
    fn test_breathe_ignores_brightness() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine =
            EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &fixed(EffectId::Breathe));
        let mut transport = RecordingTransport::completing(&latch);

        engine.set_brightness(0);
        engine.tick(at(0), &mut transport);
        // Hue 0 at 50%: V = 127
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(127, 0, 0)));
    }

    #[test]
    fn test_theater_chase_base_color_keeps_phase() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN6];
        let mut engine =
            EffectEngine::<6, LEN6>::new(&latch, &mut pulses, &fixed(EffectId::TheaterChase));
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        engine.apply(Command::SetBaseColor(Some(Hsl::new(300, 100, 50).into())));
        engine.tick(at(100), &mut transport);

        let magenta = Rgb::new(243, 0, 255);
        assert_eq!(
            engine.frame().pixels(),
            &[BLACK, magenta, BLACK, BLACK, magenta, BLACK]
        );

        // Back to the rotating hue (10° after two frames)
        engine.apply(Command::SetBaseColor(None));
        engine.tick(at(200), &mut transport);
        assert_eq!(engine.frame().pixel(2), Some(Rgb::new(255, 42, 0)));
    }

    #[test]
    fn test_theater_chase_rgb_ramp() {
        let latch = TransmitLatch::new();
        let palette = Palette {
            color_space: ColorSpace::Rgb,
            ..Palette::DEFAULT
        };
        let mut pulses = [0u16; LEN6];
        let config = with_palette(EffectId::TheaterChase, palette);
        let mut engine = EffectEngine::<6, LEN6>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(255, 0, 0)));
        engine.tick(at(100), &mut transport);
        assert_eq!(engine.frame().pixel(1), Some(Rgb::new(255, 21, 0)));
    }

    #[test]
    fn test_rainbow_chase_style() {
        let latch = TransmitLatch::new();
        let palette = Palette {
            rainbow_style: RainbowStyle::Chase,
            ..Palette::DEFAULT
        };
        let mut pulses = [0u16; pulse_buffer_len(4)];
        let config = with_palette(EffectId::RainbowChase, palette);
        let mut engine =
            EffectEngine::<4, { pulse_buffer_len(4) }>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        let expected = [
            Rgb::new(255, 0, 0),
            Rgb::new(255, 127, 0),
            Rgb::new(255, 255, 0),
            Rgb::new(128, 255, 0),
        ];
        engine.tick(at(0), &mut transport);
        assert_eq!(engine.frame().pixels(), &expected);

        // Six-segment ramp in RGB mode
        engine.set_color_space(ColorSpace::Rgb);
        engine.tick(at(50), &mut transport);
        assert_eq!(engine.frame().pixel(0), Some(Rgb::new(255, 12, 0)));
        assert_eq!(engine.frame().pixel(1), Some(Rgb::new(255, 140, 0)));
    }

    #[test]
    fn test_rainbow_pastel_wave() {
        let latch = TransmitLatch::new();
        let palette = Palette {
            color_space: ColorSpace::Rgb,
            rainbow_style: RainbowStyle::PastelWave,
            ..Palette::DEFAULT
        };
        let mut pulses = [0u16; pulse_buffer_len(2)];
        let config = with_palette(EffectId::RainbowChase, palette);
        let mut engine =
            EffectEngine::<2, { pulse_buffer_len(2) }>::new(&latch, &mut pulses, &config);
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        assert_eq!(
            engine.frame().pixels(),
            &[Rgb::new(234, 174, 174), Rgb::new(174, 234, 232)]
        );
    }

    #[test]
    fn test_palette_survives_effect_switch() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine =
            EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &EngineConfig::default());

        engine.apply(Command::SetRainbowStyle(RainbowStyle::Chase));
        engine.apply(Command::SetColorSpace(ColorSpace::Hsl));
        engine.set_effect(EffectId::Fire);
        engine.set_effect(EffectId::RainbowChase);

        assert_eq!(engine.palette().rainbow_style, RainbowStyle::Chase);
        match engine.slot() {
            EffectSlot::RainbowChase(effect) => {
                assert_eq!(effect.style(), RainbowStyle::Chase);
                assert_eq!(effect.color_space(), ColorSpace::Hsl);
                assert_eq!(effect.base_hue(), 0);
            }
            other => panic!("unexpected slot {other:?}"),
        }
    }

    #[test]
    fn test_slot_exposes_effect_phase() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine =
            EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &fixed(EffectId::Breathe));
        let mut transport = RecordingTransport::completing(&latch);

        for ms in 0..41 {
            engine.tick(at(ms), &mut transport);
        }
        match engine.slot() {
            EffectSlot::Breathe(effect) => {
                assert_eq!(effect.value(), 89);
                assert_eq!(effect.direction(), BreatheDirection::Falling);
            }
            other => panic!("unexpected slot {other:?}"),
        }

        engine.set_effect(EffectId::StaticColor);
        engine.tick(at(100), &mut transport);
        engine.tick(at(200), &mut transport);
        match engine.slot() {
            EffectSlot::StaticColor(effect) => assert_eq!(effect.hue(), 2),
            other => panic!("unexpected slot {other:?}"),
        }

        engine.set_effect(EffectId::TheaterChase);
        engine.tick(at(300), &mut transport);
        match engine.slot() {
            EffectSlot::TheaterChase(effect) => assert_eq!(effect.frame(), 1),
            other => panic!("unexpected slot {other:?}"),
        }

        engine.set_effect(EffectId::Twinkle);
        match engine.slot() {
            EffectSlot::Twinkle(effect) => assert_eq!(effect.color(), Hsl::new(300, 100, 50)),
            other => panic!("unexpected slot {other:?}"),
        }
    }

    #[test]
    fn test_slot_reset_restarts_phase() {
        let latch = TransmitLatch::new();
        let mut pulses = [0u16; LEN8];
        let mut engine =
            EffectEngine::<8, LEN8>::new(&latch, &mut pulses, &fixed(EffectId::RainbowChase));
        let mut transport = RecordingTransport::completing(&latch);

        engine.tick(at(0), &mut transport);
        engine.tick(at(50), &mut transport);

        let mut slot = engine.slot().clone();
        match &slot {
            EffectSlot::RainbowChase(effect) => assert_eq!(effect.base_hue(), 4),
            other => panic!("unexpected slot {other:?}"),
        }
        slot.reset();
        match &slot {
            EffectSlot::RainbowChase(effect) => assert_eq!(effect.base_hue(), 0),
            other => panic!("unexpected slot {other:?}"),
        }
    }
}
