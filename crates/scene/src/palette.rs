//! Scene colors.

use egui::Color32;

pub(crate) const APPLE_RED: Color32 = Color32::from_rgb(0xFF, 0x44, 0x44);
pub(crate) const APPLE_RED_DARK: Color32 = Color32::from_rgb(0xCC, 0x00, 0x00);

pub(crate) const HAIR_BROWN: Color32 = Color32::from_rgb(0x8B, 0x45, 0x13);
pub(crate) const HAIR_BROWN_DARK: Color32 = Color32::from_rgb(0x65, 0x43, 0x21);

pub(crate) const CAP_NAVY: Color32 = Color32::from_rgb(0x1E, 0x3A, 0x8A);
pub(crate) const CAP_NAVY_DARK: Color32 = Color32::from_rgb(0x1E, 0x40, 0xAF);
pub(crate) const CAP_BLUE: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
pub(crate) const CAP_BLUE_DARK: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
pub(crate) const CAP_BUTTON: Color32 = Color32::from_rgb(0xFB, 0xBF, 0x24);
pub(crate) const CAP_BUTTON_DARK: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);

pub(crate) const LEAF_GREEN: Color32 = Color32::from_rgb(0x90, 0xEE, 0x90);
pub(crate) const LEAF_GREEN_DARK: Color32 = Color32::from_rgb(0x22, 0x8B, 0x22);

pub(crate) const SHORTS_BLUE: Color32 = Color32::from_rgb(0x41, 0x69, 0xE1);
pub(crate) const SHORTS_BLUE_DARK: Color32 = Color32::from_rgb(0x00, 0x00, 0xCD);
pub(crate) const BELT_GOLD: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x00);
pub(crate) const BELT_GOLD_DARK: Color32 = Color32::from_rgb(0xDA, 0xA5, 0x20);

pub(crate) const WAVE_GOLD: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x00);
pub(crate) const SLEEP_BLUE: Color32 = Color32::from_rgb(0x87, 0xCE, 0xEB);

pub(crate) const PLATE_GREY: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
pub(crate) const PLATE_EDGE: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);
pub(crate) const PORRIDGE: Color32 = Color32::from_rgb(0xD2, 0xB4, 0x8C);
pub(crate) const PORRIDGE_EDGE: Color32 = Color32::from_rgb(0xBC, 0x9A, 0x6A);
pub(crate) const PORRIDGE_SPECK: Color32 = Color32::from_rgb(0xC1, 0x9A, 0x6B);
pub(crate) const SPOON_SILVER: Color32 = Color32::from_rgb(0xC0, 0xC0, 0xC0);
pub(crate) const SPOON_EDGE: Color32 = Color32::from_rgb(0xA0, 0xA0, 0xA0);
