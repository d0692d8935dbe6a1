mod tests {
    use myrtio_signal_strip::fade::{DEFAULT_FADE_WIDTH, ring_distance};
    use myrtio_signal_strip::fade_weight;

    const LEN: usize = 6;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_fade_weight_at_position_is_full() {
        for pixel in 0..LEN {
            assert_eq!(fade_weight(pixel as f32, pixel, LEN, DEFAULT_FADE_WIDTH), 1.0);
        }
    }

    #[test]
    fn test_fade_weight_gaussian() {
        assert!(approx(fade_weight(0.0, 1, LEN, 2.0), (-0.5f32).exp()));
        assert!(approx(fade_weight(0.0, 2, LEN, 2.0), (-2.0f32).exp()));
        assert!(approx(fade_weight(0.0, 3, LEN, 2.0), (-4.5f32).exp()));
    }

    #[test]
    fn test_fade_weight_wraps_at_seam() {
        assert!(approx(ring_distance(5.5, 0, LEN), 0.5));
        assert!(approx(fade_weight(5.5, 0, LEN, 2.0), (-0.125f32).exp()));
        assert!(approx(fade_weight(0.0, 5, LEN, 2.0), fade_weight(0.0, 1, LEN, 2.0)));
    }

    #[test]
    fn test_fade_weight_circular_symmetry() {
        for position in 0..LEN {
            for k in 1..LEN {
                let forward = (position + k) % LEN;
                let backward = (position + LEN - k) % LEN;
                assert_eq!(
                    fade_weight(position as f32, forward, LEN, 2.0),
                    fade_weight(position as f32, backward, LEN, 2.0),
                    "position {position}, offset {k}"
                );
            }
        }
    }

    #[test]
    fn test_fade_weight_is_bounded() {
        for step in 0..60 {
            let position = step as f32 * 0.1;
            for pixel in 0..LEN {
                let weight = fade_weight(position, pixel, LEN, 2.0);
                assert!((0.0..=1.0).contains(&weight));
            }
        }
    }

    #[test]
    fn test_fade_weight_degenerate_width() {
        assert_eq!(fade_weight(2.0, 2, LEN, 0.0), 1.0);
        assert_eq!(fade_weight(2.0, 3, LEN, 0.0), 0.0);
        assert_eq!(fade_weight(2.0, 3, LEN, -1.0), 0.0);
        assert_eq!(fade_weight(2.0, 3, LEN, f32::NAN), 0.0);
    }
}
