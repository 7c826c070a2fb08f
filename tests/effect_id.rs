mod tests {
    use ws2812b_fx::EffectId;

    #[test]
    fn test_effect_id_raw_matches_cycle_order() {
        for (index, id) in EffectId::ALL.iter().enumerate() {
            assert_eq!(*id as u8 as usize, index);
            assert_eq!(EffectId::from_raw(index as u8), Some(*id));
        }
        assert_eq!(EffectId::from_raw(6), None);
    }

    #[test]
    fn test_effect_id_names_round_trip() {
        for id in EffectId::ALL {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(EffectId::TheaterChase.as_str(), "theater_chase");
        assert_eq!(EffectId::parse_from_str("sparkle"), None);
    }

    #[test]
    fn test_effect_id_next_wraps() {
        assert_eq!(EffectId::StaticColor.next(), EffectId::RainbowChase);
        assert_eq!(EffectId::Twinkle.next(), EffectId::StaticColor);

        let mut id = EffectId::RainbowChase;
        for _ in 0..EffectId::ALL.len() {
            id = id.next();
        }
        assert_eq!(id, EffectId::RainbowChase);
    }
}
