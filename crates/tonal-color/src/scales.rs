//! Named color scales.
//!
//! Each scale carries the ten numbered shades (50–900) and four accent
//! shades (A100–A700) of the Material color system. The palette layer only
//! treats these as opaque constant lookups.

use crate::rgba::Rgba;

/// A 14-shade color scale: numbered shades 50–900 plus accents A100–A700.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    pub s50: Rgba,
    pub s100: Rgba,
    pub s200: Rgba,
    pub s300: Rgba,
    pub s400: Rgba,
    pub s500: Rgba,
    pub s600: Rgba,
    pub s700: Rgba,
    pub s800: Rgba,
    pub s900: Rgba,
    pub a100: Rgba,
    pub a200: Rgba,
    pub a400: Rgba,
    pub a700: Rgba,
}

pub const INDIGO: Scale = Scale {
    s50: Rgba::hex(0xe8eaf6),
    s100: Rgba::hex(0xc5cae9),
    s200: Rgba::hex(0x9fa8da),
    s300: Rgba::hex(0x7986cb),
    s400: Rgba::hex(0x5c6bc0),
    s500: Rgba::hex(0x3f51b5),
    s600: Rgba::hex(0x3949ab),
    s700: Rgba::hex(0x303f9f),
    s800: Rgba::hex(0x283593),
    s900: Rgba::hex(0x1a237e),
    a100: Rgba::hex(0x8c9eff),
    a200: Rgba::hex(0x536dfe),
    a400: Rgba::hex(0x3d5afe),
    a700: Rgba::hex(0x304ffe),
};

pub const PINK: Scale = Scale {
    s50: Rgba::hex(0xfce4ec),
    s100: Rgba::hex(0xf8bbd0),
    s200: Rgba::hex(0xf48fb1),
    s300: Rgba::hex(0xf06292),
    s400: Rgba::hex(0xec407a),
    s500: Rgba::hex(0xe91e63),
    s600: Rgba::hex(0xd81b60),
    s700: Rgba::hex(0xc2185b),
    s800: Rgba::hex(0xad1457),
    s900: Rgba::hex(0x880e4f),
    a100: Rgba::hex(0xff80ab),
    a200: Rgba::hex(0xff4081),
    a400: Rgba::hex(0xf50057),
    a700: Rgba::hex(0xc51162),
};

pub const RED: Scale = Scale {
    s50: Rgba::hex(0xffebee),
    s100: Rgba::hex(0xffcdd2),
    s200: Rgba::hex(0xef9a9a),
    s300: Rgba::hex(0xe57373),
    s400: Rgba::hex(0xef5350),
    s500: Rgba::hex(0xf44336),
    s600: Rgba::hex(0xe53935),
    s700: Rgba::hex(0xd32f2f),
    s800: Rgba::hex(0xc62828),
    s900: Rgba::hex(0xb71c1c),
    a100: Rgba::hex(0xff8a80),
    a200: Rgba::hex(0xff5252),
    a400: Rgba::hex(0xff1744),
    a700: Rgba::hex(0xd50000),
};

pub const DEEP_ORANGE: Scale = Scale {
    s50: Rgba::hex(0xfbe9e7),
    s100: Rgba::hex(0xffccbc),
    s200: Rgba::hex(0xffab91),
    s300: Rgba::hex(0xff8a65),
    s400: Rgba::hex(0xff7043),
    s500: Rgba::hex(0xff5722),
    s600: Rgba::hex(0xf4511e),
    s700: Rgba::hex(0xe64a19),
    s800: Rgba::hex(0xd84315),
    s900: Rgba::hex(0xbf360c),
    a100: Rgba::hex(0xff9e80),
    a200: Rgba::hex(0xff6e40),
    a400: Rgba::hex(0xff3d00),
    a700: Rgba::hex(0xdd2c00),
};

pub const GREEN: Scale = Scale {
    s50: Rgba::hex(0xe8f5e9),
    s100: Rgba::hex(0xc8e6c9),
    s200: Rgba::hex(0xa5d6a7),
    s300: Rgba::hex(0x81c784),
    s400: Rgba::hex(0x66bb6a),
    s500: Rgba::hex(0x4caf50),
    s600: Rgba::hex(0x43a047),
    s700: Rgba::hex(0x388e3c),
    s800: Rgba::hex(0x2e7d32),
    s900: Rgba::hex(0x1b5e20),
    a100: Rgba::hex(0xb9f6ca),
    a200: Rgba::hex(0x69f0ae),
    a400: Rgba::hex(0x00e676),
    a700: Rgba::hex(0x00c853),
};

pub const GREY: Scale = Scale {
    s50: Rgba::hex(0xfafafa),
    s100: Rgba::hex(0xf5f5f5),
    s200: Rgba::hex(0xeeeeee),
    s300: Rgba::hex(0xe0e0e0),
    s400: Rgba::hex(0xbdbdbd),
    s500: Rgba::hex(0x9e9e9e),
    s600: Rgba::hex(0x757575),
    s700: Rgba::hex(0x616161),
    s800: Rgba::hex(0x424242),
    s900: Rgba::hex(0x212121),
    a100: Rgba::hex(0xd5d5d5),
    a200: Rgba::hex(0xaaaaaa),
    a400: Rgba::hex(0x303030),
    a700: Rgba::hex(0x616161),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::relative_luminance;

    #[test]
    fn numbered_shades_get_darker() {
        for scale in [INDIGO, PINK, RED, DEEP_ORANGE, GREEN, GREY] {
            let shades = [
                scale.s50, scale.s100, scale.s200, scale.s300, scale.s400, scale.s500, scale.s600,
                scale.s700, scale.s800, scale.s900,
            ];
            for pair in shades.windows(2) {
                assert!(
                    relative_luminance(pair[0]) > relative_luminance(pair[1]),
                    "shade order broken between {} and {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn scales_are_fully_opaque() {
        for scale in [INDIGO, PINK, RED, DEEP_ORANGE, GREEN, GREY] {
            for shade in [scale.s50, scale.s500, scale.s900, scale.a100, scale.a700] {
                assert!(shade.is_opaque());
            }
        }
    }

    #[test]
    fn spot_check_known_values() {
        assert_eq!(INDIGO.s500.to_string(), "#3f51b5");
        assert_eq!(PINK.a400.to_string(), "#f50057");
        assert_eq!(RED.s500.to_string(), "#f44336");
        assert_eq!(GREY.s50.to_string(), "#fafafa");
    }
}
