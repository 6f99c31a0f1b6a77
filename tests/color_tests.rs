use blockcast::{
    CastError, Hsv, Rgb, Value, decimal_to_hex, decimal_to_rgb, hex_to_decimal, hex_to_rgb, hsv_to_rgb, mix_rgb, rgb_to_decimal,
    rgb_to_hex, rgb_to_hsv, to_rgb_color_list, to_rgb_color_object,
};
use std::borrow::Cow;

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(r as f64, g as f64, b as f64)
}

#[cfg(test)]
mod decimal_tests {
    use super::*;

    #[test]
    fn test_decimal_to_hex() {
        assert_eq!(decimal_to_hex(0.0), "#000000");
        assert_eq!(decimal_to_hex(0xFF0000 as f64), "#ff0000");
        assert_eq!(decimal_to_hex(0x00FF as f64), "#0000ff");
        assert_eq!(decimal_to_hex(-1.0), "#ffffff");
        assert_eq!(decimal_to_hex(-0x10000 as f64), "#ff0000");
    }

    #[test]
    fn test_decimal_to_hex_truncates_like_decimal_to_rgb() {
        assert_eq!(decimal_to_hex(16711680.9), "#ff0000");
        assert_eq!(decimal_to_hex(-1.5), "#ffffff");
        assert_eq!(decimal_to_hex(f64::NAN), "#000000");
        assert_eq!(decimal_to_hex(f64::INFINITY), "#000000");
        let n = 0x123456 as f64 + 0.75;
        assert_eq!(rgb_to_hex(&decimal_to_rgb(n)), decimal_to_hex(n));
    }

    #[test]
    fn test_decimal_to_hex_always_seven_chars() {
        for d in [0.0, 1.0, 0xABCDEF as f64, 0xFFFFFF as f64, -0xFFFFFF as f64, 0x1FFFFFF as f64, -0x2000000 as f64] {
            assert_eq!(decimal_to_hex(d).len(), 7, "decimal {d}");
        }
    }

    #[test]
    fn test_decimal_to_rgb() {
        let c = decimal_to_rgb(0x123456 as f64);
        assert_eq!((c.r, c.g, c.b), (0x12 as f64, 0x34 as f64, 0x56 as f64));
        assert_eq!(c.a, Some(255));
    }

    #[test]
    fn test_decimal_roundtrip_through_hex() {
        let mut d = 0_i64;
        while d <= 0xFFFFFF {
            let hex = decimal_to_hex(d as f64);
            let reparsed = i64::from_str_radix(&hex[1..], 16).unwrap();
            let c = decimal_to_rgb(reparsed as f64);
            assert_eq!(rgb_to_decimal(&c), d);
            d += 0x010307;
        }
    }
}

#[cfg(test)]
mod hex_tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_short_form() {
        let c = hex_to_rgb("#F00").unwrap();
        assert_eq!(c, rgb(255, 0, 0));
        let c = hex_to_rgb("03f").unwrap();
        assert_eq!(c, rgb(0x00, 0x33, 0xFF));
    }

    #[test]
    fn test_hex_to_rgb_long_form() {
        assert_eq!(hex_to_rgb("#0033FF").unwrap(), rgb(0, 0x33, 0xFF));
        assert_eq!(hex_to_rgb("a1b2c3").unwrap(), rgb(0xA1, 0xB2, 0xC3));
        assert_eq!(hex_to_rgb("#0033FF").unwrap().a, None);
    }

    #[test]
    fn test_hex_words_made_of_hex_digits_parse() {
        // b, a and d are all hex digits
        assert_eq!(hex_to_rgb("bad").unwrap(), rgb(0xBB, 0xAA, 0xDD));
        assert_eq!(hex_to_rgb("#C0FFEE").unwrap(), rgb(0xC0, 0xFF, 0xEE));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        assert!(matches!(hex_to_rgb("#xyz"), Err(CastError::InvalidHex { .. })));
        assert!(matches!(hex_to_rgb("no!"), Err(CastError::InvalidHex { .. })));
        assert!(matches!(hex_to_rgb("#12zz56"), Err(CastError::InvalidHex { .. })));
        assert!(matches!(hex_to_rgb("#1234"), Err(CastError::InvalidHexLength { len: 4 })));
        assert!(matches!(hex_to_rgb(""), Err(CastError::InvalidHexLength { len: 0 })));
        assert!(matches!(hex_to_rgb("#"), Err(CastError::InvalidHexLength { len: 0 })));
        assert!(matches!(hex_to_rgb("##fff"), Err(CastError::InvalidHexLength { len: 4 })));
    }

    #[test]
    fn test_hex_length_counts_characters() {
        assert!(matches!(hex_to_rgb("#é"), Err(CastError::InvalidHexLength { len: 1 })));
        assert!(matches!(hex_to_rgb("#éé"), Err(CastError::InvalidHexLength { len: 2 })));
        // Three characters, six bytes
        assert!(matches!(hex_to_rgb("ééé"), Err(CastError::InvalidHex { .. })));
        assert!(matches!(hex_to_rgb("#éa"), Err(CastError::InvalidHexLength { len: 2 })));
    }

    #[test]
    fn test_hex_roundtrip() {
        let mut d = 0_u32;
        while d <= 0xFFFFFF {
            let hex = format!("#{:06X}", d);
            let back = rgb_to_hex(&hex_to_rgb(&hex).unwrap());
            assert_eq!(back, hex.to_lowercase());
            d += 0x000F1B;
        }
    }

    #[test]
    fn test_hex_to_decimal() {
        assert_eq!(hex_to_decimal("#FF8000").unwrap(), 0xFF8000);
        assert_eq!(hex_to_decimal("#fff").unwrap(), 0xFFFFFF);
        assert!(hex_to_decimal("#ggg").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = hex_to_rgb("#12").unwrap_err();
        assert_eq!(err.to_string(), "Invalid hex color length 2: expected 3 or 6 digits");
        let err = hex_to_rgb("#xyz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid hex color '#xyz'");
    }
}

#[cfg(test)]
mod hsv_tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(hsv_to_rgb(&Hsv::new(0.0, 1.0, 1.0)), rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(&Hsv::new(120.0, 1.0, 1.0)), rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(&Hsv::new(240.0, 1.0, 1.0)), rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(&Hsv::new(60.0, 1.0, 1.0)), rgb(255, 255, 0));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsv_to_rgb(&Hsv::new(360.0, 1.0, 1.0)), rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(&Hsv::new(-120.0, 1.0, 1.0)), rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(&Hsv::new(480.0, 1.0, 1.0)), rgb(0, 255, 0));
    }

    #[test]
    fn test_saturation_and_value_clamped() {
        assert_eq!(hsv_to_rgb(&Hsv::new(0.0, 2.0, 5.0)), rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(&Hsv::new(0.0, -1.0, 1.0)), rgb(255, 255, 255));
        assert_eq!(hsv_to_rgb(&Hsv::new(0.0, 1.0, -3.0)), rgb(0, 0, 0));
    }

    #[test]
    fn test_channels_are_floored() {
        // 0.5 * 255 = 127.5
        assert_eq!(hsv_to_rgb(&Hsv::new(0.0, 0.0, 0.5)), rgb(127, 127, 127));
    }

    #[test]
    fn test_rgb_to_hsv_gray_is_zero_hue() {
        assert_eq!(rgb_to_hsv(&rgb(0, 0, 0)), Hsv::new(0.0, 0.0, 0.0));
        let gray = rgb_to_hsv(&rgb(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.v - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_rgb_to_hsv_sectors() {
        assert_eq!(rgb_to_hsv(&rgb(255, 0, 0)), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(&rgb(0, 255, 0)), Hsv::new(120.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(&rgb(0, 0, 255)), Hsv::new(240.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(&rgb(255, 0, 255)), Hsv::new(300.0, 1.0, 1.0));
        let hsv = rgb_to_hsv(&rgb(255, 128, 0));
        assert!((hsv.h - 30.117647058823529).abs() < 1e-9);
    }

    #[test]
    fn test_hsv_roundtrip_within_one() {
        for r in (0..=255_u32).step_by(17) {
            for g in (0..=255_u32).step_by(15) {
                for b in (0..=255_u32).step_by(5) {
                    let original = rgb(r as u8, g as u8, b as u8);
                    let back = hsv_to_rgb(&rgb_to_hsv(&original));
                    for (x, y) in [(original.r, back.r), (original.g, back.g), (original.b, back.b)] {
                        assert!((x - y).abs() <= 1.0, "{:?} came back as {:?}", original, back);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod mix_tests {
    use super::*;

    #[test]
    fn test_mix_endpoints_are_the_inputs() {
        let a = rgb(10, 20, 30);
        let b = rgb(200, 100, 0);
        match mix_rgb(&a, &b, 0.0) {
            Cow::Borrowed(c) => assert!(std::ptr::eq(c, &a)),
            Cow::Owned(_) => panic!("Expected rgb0 itself"),
        }
        match mix_rgb(&a, &b, -2.0) {
            Cow::Borrowed(c) => assert!(std::ptr::eq(c, &a)),
            Cow::Owned(_) => panic!("Expected rgb0 itself"),
        }
        match mix_rgb(&a, &b, 1.0) {
            Cow::Borrowed(c) => assert!(std::ptr::eq(c, &b)),
            Cow::Owned(_) => panic!("Expected rgb1 itself"),
        }
    }

    #[test]
    fn test_mix_is_unrounded() {
        let a = rgb(0, 0, 0);
        let b = rgb(1, 3, 255);
        let mixed = mix_rgb(&a, &b, 0.5).into_owned();
        assert_eq!((mixed.r, mixed.g, mixed.b), (0.5, 1.5, 127.5));
        assert_eq!(mixed.rounded(), rgb(1, 2, 128));
    }

    #[test]
    fn test_mix_quarter() {
        let a = rgb(100, 0, 40);
        let b = rgb(200, 100, 0);
        let mixed = mix_rgb(&a, &b, 0.25);
        assert_eq!((mixed.r, mixed.g, mixed.b), (125.0, 25.0, 30.0));
    }
}

#[cfg(test)]
mod color_object_tests {
    use super::*;

    #[test]
    fn test_hex_string() {
        assert_eq!(to_rgb_color_object(&Value::from("#00ff00")), rgb(0, 255, 0));
        assert_eq!(to_rgb_color_list(&Value::from("#abc")), [0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_invalid_hex_is_opaque_black() {
        let c = to_rgb_color_object(&Value::from("#nothex"));
        assert_eq!(c, Rgb::BLACK.with_alpha(255));
        assert_eq!(to_rgb_color_list(&Value::from("#")), [0, 0, 0]);
    }

    #[test]
    fn test_numbers_decode_as_decimal() {
        let c = to_rgb_color_object(&Value::from(0xFF8800));
        assert_eq!(c, rgb(255, 0x88, 0).with_alpha(255));
        assert_eq!(to_rgb_color_list(&Value::from("16711680")), [255, 0, 0]);
        assert_eq!(to_rgb_color_list(&Value::from(-1)), [255, 255, 255]);
    }

    #[test]
    fn test_non_hex_strings_cast_to_number() {
        // No leading '#': cast to number, and "ff0000" is NaN -> 0 -> black
        assert_eq!(to_rgb_color_list(&Value::from("ff0000")), [0, 0, 0]);
        assert_eq!(to_rgb_color_list(&Value::from("0xff0000")), [255, 0, 0]);
        assert_eq!(to_rgb_color_object(&Value::Boolean(true)), rgb(0, 0, 1).with_alpha(255));
    }

    #[test]
    fn test_constants() {
        assert_eq!(rgb_to_hex(&Rgb::BLACK), "#000000");
        assert_eq!(rgb_to_hex(&Rgb::WHITE), "#ffffff");
    }
}
