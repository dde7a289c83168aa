//! Deterministic project colors for the production calendar.

pub const PALETTE: [&str; 16] = [
    "#2563EB", "#DC2626", "#16A34A", "#D97706", "#7C3AED", "#DB2777", "#0891B2", "#65A30D",
    "#EA580C", "#4F46E5", "#0D9488", "#B91C1C", "#9333EA", "#CA8A04", "#0284C7", "#BE185D",
];

/// Background alpha of a group card.
pub const GROUP_ALPHA: f32 = 0.15;

/// `PALETTE[id % 16]`; negative or missing ids get the first color.
pub fn project_color(project_id: Option<i64>) -> &'static str {
    match project_id {
        Some(id) if id >= 0 => PALETTE[(id % PALETTE.len() as i64) as usize],
        _ => PALETTE[0],
    }
}

/// Fallback for records that only carry a project code (djb2 over bytes).
pub fn project_color_by_code(code: &str) -> &'static str {
    let hash = code
        .bytes()
        .fold(5381u32, |h, b| h.wrapping_mul(33).wrapping_add(u32::from(b)));
    PALETTE[(hash % PALETTE.len() as u32) as usize]
}

/// Id-based color, or the code-based one when the id is not a real project
/// id (zero or negative) and a code is known.
pub fn color_for_project(project_id: i64, project_code: Option<&str>) -> &'static str {
    match project_code {
        Some(code) if project_id <= 0 && !code.is_empty() => project_color_by_code(code),
        _ => project_color(Some(project_id)),
    }
}

/// `#RRGGBB` -> `rgba(r, g, b, alpha)`. Malformed input falls back to grey.
pub fn light_color(hex: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or((128, 128, 128));
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_deterministic() {
        assert_eq!(project_color(Some(5)), project_color(Some(5)));
        assert_eq!(project_color(Some(0)), PALETTE[0]);
        assert_eq!(project_color(Some(16)), PALETTE[0]);
        assert_eq!(project_color(Some(17)), PALETTE[1]);
        assert_eq!(project_color(Some(-3)), PALETTE[0]);
        assert_eq!(project_color(None), PALETTE[0]);
    }

    #[test]
    fn test_color_for_project() {
        assert_eq!(color_for_project(17, Some("H5")), PALETTE[1]);
        assert_eq!(color_for_project(0, Some("H5")), project_color_by_code("H5"));
        assert_eq!(color_for_project(-1, None), PALETTE[0]);
        assert_eq!(color_for_project(0, Some("")), PALETTE[0]);
    }

    #[test]
    fn test_color_by_code() {
        assert_eq!(project_color_by_code("H5"), project_color_by_code("H5"));
        // djb2("") = 5381, 5381 % 16 = 5
        assert_eq!(project_color_by_code(""), PALETTE[5]);
        assert!(PALETTE.contains(&project_color_by_code("Hat-12 / Kaynak")));
    }

    #[test]
    fn test_light_color() {
        assert_eq!(light_color("#2563EB", 0.15), "rgba(37, 99, 235, 0.15)");
        assert_eq!(light_color("2563eb", 1.0), "rgba(37, 99, 235, 1)");
        assert_eq!(light_color("#zzz", 0.5), "rgba(128, 128, 128, 0.5)");
    }
}
