mod tests {
    use subpixel_composer::math8::{
        max8, qadd8, scale_both8, scale_fraction8, scale_intensity8,
    };

    #[test]
    fn test_scale_fraction8() {
        assert_eq!(scale_fraction8(255, 8, 4), 127);
        assert_eq!(scale_fraction8(255, 16, 4), 255);
        assert_eq!(scale_fraction8(100, 0, 4), 0);
        assert_eq!(scale_fraction8(200, 1, 0), 200);
        assert_eq!(scale_fraction8(255, 127, 7), 253);
    }

    #[test]
    fn test_scale_intensity8() {
        assert_eq!(scale_intensity8(255, 128), 128);
        assert_eq!(scale_intensity8(200, 128), 100);
        assert_eq!(scale_intensity8(255, 255), 255);
        assert_eq!(scale_intensity8(10, 0), 0);
    }

    #[test]
    fn test_scale_both8() {
        assert_eq!(scale_both8(255, 8, 128, 4), 64);
        assert_eq!(scale_both8(200, 16, 255, 4), 200);
        assert_eq!(scale_both8(255, 0, 255, 4), 0);
        assert_eq!(scale_both8(255, 16, 0, 4), 0);
        // One division instead of two: the sequential result is one lower
        assert_eq!(scale_intensity8(scale_fraction8(255, 8, 4), 128), 63);
    }

    #[test]
    fn test_qadd8_saturates() {
        assert_eq!(qadd8(10, 20), 30);
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(255, 255), 255);
    }

    #[test]
    fn test_max8() {
        assert_eq!(max8(3, 9), 9);
        assert_eq!(max8(9, 3), 9);
        assert_eq!(max8(0, 0), 0);
    }
}
