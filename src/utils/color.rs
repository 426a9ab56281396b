use eframe::egui::Color32;

/// Named colours for the splitter form.
pub struct Palette;

impl Palette {
    pub const SIDEBAR: Color32 = Color32::from_rgb(15, 23, 42);
    pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
    pub const SUCCESS: Color32 = Color32::from_rgb(21, 128, 61);
    pub const SUCCESS_BG: Color32 = Color32::from_rgb(240, 253, 244);
    pub const ERROR: Color32 = Color32::from_rgb(185, 28, 28);
    pub const ERROR_BG: Color32 = Color32::from_rgb(254, 242, 242);
    pub const MUTED: Color32 = Color32::from_rgb(148, 163, 184);

    /// Banner colours as (text, background).
    pub fn banner(is_error: bool) -> (Color32, Color32) {
        if is_error {
            (Self::ERROR, Self::ERROR_BG)
        } else {
            (Self::SUCCESS, Self::SUCCESS_BG)
        }
    }
}
