mod tests {
    use subpixel_composer::{ConfigError, MAX_PRECISION, Precision};

    #[test]
    fn test_precision_bounds() {
        assert_eq!(Precision::new(8), Err(ConfigError::PrecisionOutOfRange(8)));
        assert_eq!(Precision::try_from(200_u8), Err(ConfigError::PrecisionOutOfRange(200)));
        assert_eq!(Precision::saturating(12).bits(), MAX_PRECISION);
        assert_eq!(Precision::saturating(3).bits(), 3);
    }

    #[test]
    fn test_precision_units() {
        let cases = [(0, 1, 0), (3, 8, 7), (4, 16, 15), (7, 128, 127)];
        for (bits, one, mask) in cases {
            let precision = Precision::new(bits).unwrap();
            assert_eq!(precision.one(), one);
            assert_eq!(precision.fraction_mask(), mask);
        }
        assert_eq!(Precision::default().bits(), 4);
    }

    #[test]
    fn test_location_split() {
        let precision = Precision::saturating(4);
        assert_eq!(precision.index_of(0x35), 3);
        assert_eq!(precision.fraction_of(0x35), 5);
        assert_eq!(precision.remaining_in_unit(0x35), 11);
        assert_eq!(precision.remaining_in_unit(0x30), 16);
    }

    #[test]
    fn test_to_fixed() {
        let precision = Precision::saturating(4);
        assert_eq!(precision.to_fixed(3), 0x30);
        assert_eq!(precision.to_fixed(0), 0);
        assert_eq!(precision.to_fixed(u32::MAX), u32::MAX);
        assert_eq!(Precision::saturating(0).to_fixed(42), 42);
    }
}
