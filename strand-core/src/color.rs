//! Color packing and conversion.
//!
//! A color is a 24-bit integer whose three bytes are laid out per the
//! global byte-order selector (0..=5), matching whichever channel
//! order the attached LED chips expect. Two HSV conversions exist:
//! `make_color`, an integer HSL-style mapping with hue 0..360 and
//! saturation/lightness 0..100, and `hsv_rainbow`, the equal-area
//! "rainbow" mapping LED work prefers, with the same input ranges
//! scaled onto bytes.

/// Pack three 0..=255 channel values per the byte-order selector.
pub fn pack(format: i32, r: i32, g: i32, b: i32) -> i32 {
    let (hi, mid, lo) = match format {
        1 => (g, r, b), // grb
        2 => (b, g, r), // bgr
        3 => (g, b, r), // gbr
        4 => (r, b, g), // rbg
        5 => (b, r, g), // brg
        _ => (r, g, b), // rgb
    };
    (hi & 0xff) << 16 | (mid & 0xff) << 8 | (lo & 0xff)
}

/// Unpack a 24-bit color into (r, g, b) per the byte-order selector.
pub fn unpack(format: i32, c: i32) -> (i32, i32, i32) {
    let hi = (c & 0xff0000) >> 16;
    let mid = (c & 0x00ff00) >> 8;
    let lo = c & 0x0000ff;
    match format {
        1 => (mid, hi, lo),
        2 => (lo, mid, hi),
        3 => (lo, hi, mid),
        4 => (hi, lo, mid),
        5 => (mid, lo, hi),
        _ => (hi, mid, lo),
    }
}

fn h2rgb(v1: u32, v2: u32, hue: u32) -> u32 {
    if hue < 60 {
        v1 * 60 + (v2 - v1) * hue
    } else if hue < 180 {
        v2 * 60
    } else if hue < 240 {
        v1 * 60 + (v2 - v1) * (240 - hue)
    } else {
        v1 * 60
    }
}

/// HSL-style conversion: hue 0..360, saturation and lightness 0..100.
/// All-integer arithmetic; out-of-range inputs wrap or clamp.
pub fn make_color(format: i32, hue: i32, saturation: i32, lightness: i32) -> i32 {
    let mut hue = hue as u32;
    let mut saturation = saturation as u32;
    let mut lightness = lightness as u32;

    if hue > 359 {
        hue %= 360;
    }
    if saturation > 100 {
        saturation = 100;
    }
    if lightness > 100 {
        lightness = 100;
    }

    let (red, green, blue);
    if saturation == 0 {
        red = lightness * 255 / 100;
        green = red;
        blue = red;
    } else {
        let var2 = if lightness < 50 {
            lightness * (100 + saturation)
        } else {
            (lightness + saturation) * 100 - saturation * lightness
        };
        let var1 = lightness * 200 - var2;
        red = h2rgb(var1, var2, if hue < 240 { hue + 120 } else { hue - 240 }) * 255 / 600000;
        green = h2rgb(var1, var2, hue) * 255 / 600000;
        blue = h2rgb(var1, var2, if hue >= 120 { hue - 120 } else { hue + 240 }) * 255 / 600000;
    }
    pack(format, red as i32, green as i32, blue as i32)
}

fn scale8(i: u8, scale: u8) -> u8 {
    ((i as u16 * (1 + scale as u16)) >> 8) as u8
}

fn scale8_video(i: u8, scale: u8) -> u8 {
    let j = ((i as u16 * scale as u16) >> 8) as u8;
    if i != 0 && scale != 0 {
        j + 1
    } else {
        j
    }
}

/// The rainbow transform on byte-ranged hue/sat/val: eight hue
/// sections of 32 with per-section ramps sized so every hue band
/// covers an equal visual area, then saturation and value scaling
/// with a video floor that keeps dim channels from dropping to black.
fn rainbow_bytes(hue: u8, sat: u8, val: u8) -> (u8, u8, u8) {
    let offset8 = (hue & 0x1f) << 3;
    let third = scale8(offset8, 85);
    let twothirds = scale8(offset8, 170);

    let (mut r, mut g, mut b) = match (hue & 0x80 != 0, hue & 0x40 != 0, hue & 0x20 != 0) {
        (false, false, false) => (255 - third, third, 0),            // red -> orange
        (false, false, true) => (171, 85 + third, 0),                // orange -> yellow
        (false, true, false) => (171 - twothirds, 170 + third, 0),   // yellow -> green
        (false, true, true) => (0, 255 - third, third),              // green -> aqua
        (true, false, false) => (0, 171 - twothirds, 85 + twothirds), // aqua -> blue
        (true, false, true) => (third, 0, 255 - third),              // blue -> purple
        (true, true, false) => (85 + third, 0, 171 - third),         // purple -> pink
        (true, true, true) => (170 + third, 0, 85 - third),          // pink -> red
    };

    if sat != 255 {
        if sat == 0 {
            r = 255;
            g = 255;
            b = 255;
        } else {
            let mut desat = 255 - sat;
            desat = scale8_video(desat, desat);
            let satscale = 255 - desat;
            if r != 0 {
                r = scale8(r, satscale) + 1;
            }
            if g != 0 {
                g = scale8(g, satscale) + 1;
            }
            if b != 0 {
                b = scale8(b, satscale) + 1;
            }
            r = r.wrapping_add(desat);
            g = g.wrapping_add(desat);
            b = b.wrapping_add(desat);
        }
    }

    if val != 255 {
        let val = scale8_video(val, val);
        if val == 0 {
            r = 0;
            g = 0;
            b = 0;
        } else {
            if r != 0 {
                r = scale8(r, val) + 1;
            }
            if g != 0 {
                g = scale8(g, val) + 1;
            }
            if b != 0 {
                b = scale8(b, val) + 1;
            }
        }
    }

    (r, g, b)
}

/// Rainbow conversion with the word-level input ranges: hue 0..360,
/// saturation and value 0..100, packed per the selector.
pub fn hsv_rainbow(format: i32, h: i32, s: i32, v: i32) -> i32 {
    let val = (((v * 255) / 100) % 256).clamp(0, 255) as u8;
    let sat = (((s * 255) / 100) % 256).clamp(0, 255) as u8;
    let hue = (((h * 255) / 360) % 256).clamp(0, 255) as u8;
    let (r, g, b) = rainbow_bytes(hue, sat, val);
    pack(format, r as i32, g as i32, b as i32)
}

/// Per-channel blend: a weighted toward b by ratio percent.
pub fn blend(format: i32, a: i32, b: i32, ratio: i32) -> i32 {
    let (ar, ag, ab) = unpack(format, a);
    let (br, bg, bb) = unpack(format, b);
    let mix = |x: i32, y: i32| (y * ratio + x * (100 - ratio)) / 100;
    pack(format, mix(ar, br), mix(ag, bg), mix(ab, bb))
}
