//! The 16-colour palette used by every draw command

use super::frame::ColorIndex;

pub const BLACK: ColorIndex = 0;
pub const NAVY: ColorIndex = 1;
pub const PURPLE: ColorIndex = 2;
pub const GREEN: ColorIndex = 3;
pub const BROWN: ColorIndex = 4;
pub const DARK_BLUE: ColorIndex = 5;
pub const LIGHT_BLUE: ColorIndex = 6;
pub const WHITE: ColorIndex = 7;
pub const RED: ColorIndex = 8;
pub const ORANGE: ColorIndex = 9;
pub const YELLOW: ColorIndex = 10;
pub const LIME: ColorIndex = 11;
pub const SKY: ColorIndex = 12;
pub const GRAY: ColorIndex = 13;
pub const PINK: ColorIndex = 14;
pub const PEACH: ColorIndex = 15;

/// 0xRRGGBB for each palette index
pub const COLORS: [u32; 16] = [
    0x000000, 0x2B335F, 0x7E2072, 0x19959C, 0x8B4852, 0x395C98, 0xA9C1FF, 0xEEEEEE,
    0xD4186C, 0xD38441, 0xE9C35B, 0x70C6A9, 0x7696DE, 0xA3A3A3, 0xFF9798, 0xEDC7B0,
];

/// RGB value for an index (wraps past 15)
pub fn rgb(index: ColorIndex) -> u32 {
    COLORS[index as usize % COLORS.len()]
}

/// CSS colour string (`#rrggbb`) for an index
pub fn css(index: ColorIndex) -> String {
    format!("#{:06x}", rgb(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_and_wrap() {
        assert_eq!(css(BLACK), "#000000");
        assert_eq!(css(SKY), "#7696de");
        assert_eq!(rgb(16), rgb(BLACK));
    }
}
