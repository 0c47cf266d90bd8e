//! TIA colour palettes.
//!
//! The TIA colour registers carry 7 significant bits: hue in bits 7-4 and
//! luminance in bits 3-1. Bit 0 is ignored, so a register value maps to a
//! palette index with `value >> 1`. Entries are `0x00RRGGBB`, each noted
//! with the register value that selects it and its luminance step.
//!
//! PAL hues 0, 1, 14 and 15 all decode to greys.

/// NTSC palette: 16 hues x 8 luminances.
pub const NTSC_PALETTE: [u32; 128] = [
    0x0000_0000, // 0x00: grey 0
    0x0040_4040, // 0x02: grey 1
    0x006C_6C6C, // 0x04: grey 2
    0x0090_9090, // 0x06: grey 3
    0x00B0_B0B0, // 0x08: grey 4
    0x00C8_C8C8, // 0x0A: grey 5
    0x00DC_DCDC, // 0x0C: grey 6
    0x00EC_ECEC, // 0x0E: grey 7
    0x0044_4400, // 0x10: gold 0
    0x0064_6410, // 0x12: gold 1
    0x0084_8424, // 0x14: gold 2
    0x00A0_A034, // 0x16: gold 3
    0x00B8_B840, // 0x18: gold 4
    0x00D0_D050, // 0x1A: gold 5
    0x00E8_E85C, // 0x1C: gold 6
    0x00FC_FC68, // 0x1E: gold 7
    0x0070_2800, // 0x20: orange 0
    0x0084_4414, // 0x22: orange 1
    0x0098_5C28, // 0x24: orange 2
    0x00AC_783C, // 0x26: orange 3
    0x00BC_8C4C, // 0x28: orange 4
    0x00CC_A05C, // 0x2A: orange 5
    0x00DC_B468, // 0x2C: orange 6
    0x00EC_C878, // 0x2E: orange 7
    0x0084_1800, // 0x30: bright orange 0
    0x0098_3418, // 0x32: bright orange 1
    0x00AC_5030, // 0x34: bright orange 2
    0x00C0_6848, // 0x36: bright orange 3
    0x00D0_805C, // 0x38: bright orange 4
    0x00E0_9470, // 0x3A: bright orange 5
    0x00EC_A880, // 0x3C: bright orange 6
    0x00FC_BC94, // 0x3E: bright orange 7
    0x0088_0000, // 0x40: pink 0
    0x009C_2020, // 0x42: pink 1
    0x00B0_3C3C, // 0x44: pink 2
    0x00C0_5858, // 0x46: pink 3
    0x00D0_7070, // 0x48: pink 4
    0x00E0_8888, // 0x4A: pink 5
    0x00EC_A0A0, // 0x4C: pink 6
    0x00FC_B4B4, // 0x4E: pink 7
    0x0078_005C, // 0x50: purple 0
    0x008C_2074, // 0x52: purple 1
    0x00A0_3C88, // 0x54: purple 2
    0x00B0_589C, // 0x56: purple 3
    0x00C0_70B0, // 0x58: purple 4
    0x00D0_84C0, // 0x5A: purple 5
    0x00DC_9CD0, // 0x5C: purple 6
    0x00EC_B0E0, // 0x5E: purple 7
    0x0048_0078, // 0x60: purple-blue 0
    0x0060_2090, // 0x62: purple-blue 1
    0x0078_3CA4, // 0x64: purple-blue 2
    0x008C_58B8, // 0x66: purple-blue 3
    0x00A0_70CC, // 0x68: purple-blue 4
    0x00B4_84DC, // 0x6A: purple-blue 5
    0x00C4_9CEC, // 0x6C: purple-blue 6
    0x00D4_B0FC, // 0x6E: purple-blue 7
    0x0014_0084, // 0x70: blue 0
    0x0030_2098, // 0x72: blue 1
    0x004C_3CAC, // 0x74: blue 2
    0x0068_58C0, // 0x76: blue 3
    0x007C_70D0, // 0x78: blue 4
    0x0094_88E0, // 0x7A: blue 5
    0x00A8_A0EC, // 0x7C: blue 6
    0x00BC_B4FC, // 0x7E: blue 7
    0x0000_0088, // 0x80: blue 0
    0x001C_209C, // 0x82: blue 1
    0x0038_40B0, // 0x84: blue 2
    0x0050_5CC0, // 0x86: blue 3
    0x0068_74D0, // 0x88: blue 4
    0x007C_8CE0, // 0x8A: blue 5
    0x0090_A4EC, // 0x8C: blue 6
    0x00A4_B8FC, // 0x8E: blue 7
    0x0000_187C, // 0x90: light blue 0
    0x001C_3890, // 0x92: light blue 1
    0x0038_54A8, // 0x94: light blue 2
    0x0050_70BC, // 0x96: light blue 3
    0x0068_88CC, // 0x98: light blue 4
    0x007C_9CDC, // 0x9A: light blue 5
    0x0090_B4EC, // 0x9C: light blue 6
    0x00A4_C8FC, // 0x9E: light blue 7
    0x0000_2C5C, // 0xA0: turquoise 0
    0x001C_4C78, // 0xA2: turquoise 1
    0x0038_6890, // 0xA4: turquoise 2
    0x0050_84AC, // 0xA6: turquoise 3
    0x0068_9CC0, // 0xA8: turquoise 4
    0x007C_B4D4, // 0xAA: turquoise 5
    0x0090_CCE8, // 0xAC: turquoise 6
    0x00A4_E0FC, // 0xAE: turquoise 7
    0x0000_3C2C, // 0xB0: green-blue 0
    0x001C_5C48, // 0xB2: green-blue 1
    0x0038_7C64, // 0xB4: green-blue 2
    0x0050_9C80, // 0xB6: green-blue 3
    0x0068_B494, // 0xB8: green-blue 4
    0x007C_D0AC, // 0xBA: green-blue 5
    0x0090_E4C0, // 0xBC: green-blue 6
    0x00A4_FCD4, // 0xBE: green-blue 7
    0x0000_3C00, // 0xC0: green 0
    0x0020_5C20, // 0xC2: green 1
    0x0040_7C40, // 0xC4: green 2
    0x005C_9C5C, // 0xC6: green 3
    0x0074_B474, // 0xC8: green 4
    0x008C_D08C, // 0xCA: green 5
    0x00A4_E4A4, // 0xCC: green 6
    0x00B8_FCB8, // 0xCE: green 7
    0x0014_3800, // 0xD0: yellow-green 0
    0x0034_5C1C, // 0xD2: yellow-green 1
    0x0050_7C38, // 0xD4: yellow-green 2
    0x006C_9850, // 0xD6: yellow-green 3
    0x0084_B468, // 0xD8: yellow-green 4
    0x009C_CC7C, // 0xDA: yellow-green 5
    0x00B4_E490, // 0xDC: yellow-green 6
    0x00C8_FCA4, // 0xDE: yellow-green 7
    0x002C_3000, // 0xE0: orange-green 0
    0x004C_501C, // 0xE2: orange-green 1
    0x0068_7034, // 0xE4: orange-green 2
    0x0084_8C4C, // 0xE6: orange-green 3
    0x009C_A864, // 0xE8: orange-green 4
    0x00B4_C078, // 0xEA: orange-green 5
    0x00CC_D488, // 0xEC: orange-green 6
    0x00E0_EC9C, // 0xEE: orange-green 7
    0x0044_2800, // 0xF0: light orange 0
    0x0064_4818, // 0xF2: light orange 1
    0x0084_6830, // 0xF4: light orange 2
    0x00A0_8444, // 0xF6: light orange 3
    0x00B8_9C58, // 0xF8: light orange 4
    0x00D0_B46C, // 0xFA: light orange 5
    0x00E8_CC7C, // 0xFC: light orange 6
    0x00FC_E08C, // 0xFE: light orange 7
];

/// PAL palette: 16 hues x 8 luminances.
pub const PAL_PALETTE: [u32; 128] = [
    0x0000_0000, // 0x00: grey 0
    0x0028_2828, // 0x02: grey 1
    0x0050_5050, // 0x04: grey 2
    0x0074_7474, // 0x06: grey 3
    0x0094_9494, // 0x08: grey 4
    0x00B4_B4B4, // 0x0A: grey 5
    0x00D0_D0D0, // 0x0C: grey 6
    0x00EC_ECEC, // 0x0E: grey 7
    0x0000_0000, // 0x10: grey 0
    0x0028_2828, // 0x12: grey 1
    0x0050_5050, // 0x14: grey 2
    0x0074_7474, // 0x16: grey 3
    0x0094_9494, // 0x18: grey 4
    0x00B4_B4B4, // 0x1A: grey 5
    0x00D0_D0D0, // 0x1C: grey 6
    0x00EC_ECEC, // 0x1E: grey 7
    0x0080_5800, // 0x20: gold 0
    0x0094_7020, // 0x22: gold 1
    0x00A8_843C, // 0x24: gold 2
    0x00BC_9C58, // 0x26: gold 3
    0x00CC_AC70, // 0x28: gold 4
    0x00DC_C084, // 0x2A: gold 5
    0x00EC_D09C, // 0x2C: gold 6
    0x00FC_E0B0, // 0x2E: gold 7
    0x0044_5C00, // 0x30: yellow-green 0
    0x005C_7820, // 0x32: yellow-green 1
    0x0074_903C, // 0x34: yellow-green 2
    0x008C_AC58, // 0x36: yellow-green 3
    0x00A0_C070, // 0x38: yellow-green 4
    0x00B0_D484, // 0x3A: yellow-green 5
    0x00C4_E89C, // 0x3C: yellow-green 6
    0x00D4_FCB0, // 0x3E: yellow-green 7
    0x0070_3400, // 0x40: orange 0
    0x0088_5020, // 0x42: orange 1
    0x00A0_683C, // 0x44: orange 2
    0x00B4_8458, // 0x46: orange 3
    0x00C8_9870, // 0x48: orange 4
    0x00DC_AC84, // 0x4A: orange 5
    0x00EC_C09C, // 0x4C: orange 6
    0x00FC_D4B0, // 0x4E: orange 7
    0x0000_6414, // 0x50: green 0
    0x0020_8034, // 0x52: green 1
    0x003C_9850, // 0x54: green 2
    0x0058_B06C, // 0x56: green 3
    0x0070_C484, // 0x58: green 4
    0x0084_D89C, // 0x5A: green 5
    0x009C_E8B4, // 0x5C: green 6
    0x00B0_FCC8, // 0x5E: green 7
    0x0070_0014, // 0x60: red 0
    0x0088_2034, // 0x62: red 1
    0x00A0_3C50, // 0x64: red 2
    0x00B4_586C, // 0x66: red 3
    0x00C8_7084, // 0x68: red 4
    0x00DC_849C, // 0x6A: red 5
    0x00EC_9CB4, // 0x6C: red 6
    0x00FC_B0C8, // 0x6E: red 7
    0x0000_5C5C, // 0x70: cyan-green 0
    0x0020_7474, // 0x72: cyan-green 1
    0x003C_8C8C, // 0x74: cyan-green 2
    0x0058_A4A4, // 0x76: cyan-green 3
    0x0070_B8B8, // 0x78: cyan-green 4
    0x0084_C8C8, // 0x7A: cyan-green 5
    0x009C_DCDC, // 0x7C: cyan-green 6
    0x00B0_ECEC, // 0x7E: cyan-green 7
    0x0070_005C, // 0x80: magenta 0
    0x0084_2074, // 0x82: magenta 1
    0x0094_3C88, // 0x84: magenta 2
    0x00A8_589C, // 0x86: magenta 3
    0x00B4_70B0, // 0x88: magenta 4
    0x00C4_84C0, // 0x8A: magenta 5
    0x00D0_9CD0, // 0x8C: magenta 6
    0x00E0_B0E0, // 0x8E: magenta 7
    0x0000_3C70, // 0x90: cyan 0
    0x001C_5888, // 0x92: cyan 1
    0x0038_74A0, // 0x94: cyan 2
    0x0050_8CB4, // 0x96: cyan 3
    0x0068_A4C8, // 0x98: cyan 4
    0x007C_B8DC, // 0x9A: cyan 5
    0x0090_CCEC, // 0x9C: cyan 6
    0x00A4_E0FC, // 0x9E: cyan 7
    0x0058_0070, // 0xA0: violet 0
    0x006C_2088, // 0xA2: violet 1
    0x0080_3CA0, // 0xA4: violet 2
    0x0094_58B4, // 0xA6: violet 3
    0x00A4_70C8, // 0xA8: violet 4
    0x00B4_84DC, // 0xAA: violet 5
    0x00C4_9CEC, // 0xAC: violet 6
    0x00D4_B0FC, // 0xAE: violet 7
    0x0000_2070, // 0xB0: light blue 0
    0x001C_3C88, // 0xB2: light blue 1
    0x0038_58A0, // 0xB4: light blue 2
    0x0050_74B4, // 0xB6: light blue 3
    0x0068_88C8, // 0xB8: light blue 4
    0x007C_A0DC, // 0xBA: light blue 5
    0x0090_B4EC, // 0xBC: light blue 6
    0x00A4_C8FC, // 0xBE: light blue 7
    0x003C_0080, // 0xC0: purple 0
    0x0054_2094, // 0xC2: purple 1
    0x006C_3CA8, // 0xC4: purple 2
    0x0080_58BC, // 0xC6: purple 3
    0x0094_70CC, // 0xC8: purple 4
    0x00A8_84DC, // 0xCA: purple 5
    0x00B8_9CEC, // 0xCC: purple 6
    0x00C8_B0FC, // 0xCE: purple 7
    0x0000_0088, // 0xD0: blue 0
    0x0020_209C, // 0xD2: blue 1
    0x003C_3CB0, // 0xD4: blue 2
    0x0058_58C0, // 0xD6: blue 3
    0x0070_70D0, // 0xD8: blue 4
    0x0084_84E0, // 0xDA: blue 5
    0x009C_9CEC, // 0xDC: blue 6
    0x00B0_B0FC, // 0xDE: blue 7
    0x0000_0000, // 0xE0: grey 0
    0x0028_2828, // 0xE2: grey 1
    0x0050_5050, // 0xE4: grey 2
    0x0074_7474, // 0xE6: grey 3
    0x0094_9494, // 0xE8: grey 4
    0x00B4_B4B4, // 0xEA: grey 5
    0x00D0_D0D0, // 0xEC: grey 6
    0x00EC_ECEC, // 0xEE: grey 7
    0x0000_0000, // 0xF0: grey 0
    0x0028_2828, // 0xF2: grey 1
    0x0050_5050, // 0xF4: grey 2
    0x0074_7474, // 0xF6: grey 3
    0x0094_9494, // 0xF8: grey 4
    0x00B4_B4B4, // 0xFA: grey 5
    0x00D0_D0D0, // 0xFC: grey 6
    0x00EC_ECEC, // 0xFE: grey 7
];
