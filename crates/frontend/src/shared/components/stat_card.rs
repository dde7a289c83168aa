use crate::shared::icons::icon;
use leptos::prelude::*;

/// `1234567.891` with 2 decimals → `"1 234 567,89"` (non-breaking spaces).
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('\u{00a0}');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && value.abs() >= 0.5 * 10f64.powi(-(decimals as i32)) {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped},{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Single metric tile.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1\u{a0}234\u{a0}567,89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 1), "1\u{a0}000,0");
        assert_eq!(format_number(-1500.5, 2), "-1\u{a0}500,50");
        assert_eq!(format_number(-0.001, 2), "0,00");
    }
}
