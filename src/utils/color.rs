use eframe::egui::Color32;

pub trait ColorExt {
    /// Parses `#rrggbb` or the `#rgb` shorthand; the `#` is optional.
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Color32::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // each digit doubles: "f43" == "ff4433"
            3 => Some(Color32::from_rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            <Color32 as ColorExt>::from_hex("#4caf50"),
            Some(Color32::from_rgb(0x4c, 0xaf, 0x50))
        );
        assert_eq!(
            <Color32 as ColorExt>::from_hex("f43"),
            Some(Color32::from_rgb(0xff, 0x44, 0x33))
        );
        assert_eq!(<Color32 as ColorExt>::from_hex("#12345"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("#zzzzzz"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("#ééé"), None);
    }
}
