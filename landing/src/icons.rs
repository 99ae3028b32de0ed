//! Inline SVG line icons (24x24 grid, 2px stroke).
//!
//! Content refers to icons by name; [`icon_paths`] resolves the name to
//! path data. Unknown names render an empty square rather than failing.

use leptos::prelude::*;

/// Path data for a named icon.
pub fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "menu" => &["M4 6h16", "M4 12h16", "M4 18h16"],
        "x" => &["M18 6 6 18", "m6 6 12 12"],
        "arrow-right" => &["M5 12h14", "m12 5 7 7-7 7"],
        "arrow-up" => &["m5 12 7-7 7 7", "M12 19V5"],
        "arrow-up-right" => &["M7 7h10v10", "M7 17 17 7"],
        "chevron-left" => &["m15 18-6-6 6-6"],
        "chevron-right" => &["m9 18 6-6-6-6"],
        "play" => &["m6 3 14 9-14 9V3z"],
        "sparkles" => &[
            "M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z",
            "M5 3v4",
            "M3 5h4",
            "M19 17v4",
            "M17 19h4",
        ],
        "palette" => &[
            "M12 22a10 10 0 1 1 10-10c0 2.8-2.2 4-4 4h-2a2 2 0 0 0-1.5 3.3A2 2 0 0 1 12 22z",
            "M13.5 6.5h.01",
            "M17.5 10.5h.01",
            "M8.5 7.5h.01",
            "M6.5 12.5h.01",
        ],
        "code" => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        "smartphone" => &["M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z", "M12 18h.01"],
        "search" => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.3-4.3"],
        "zap" => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        "shield" => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        "briefcase" => &[
            "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
            "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
        ],
        "users" => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M22 21v-2a4 4 0 0 0-3-3.9",
            "M16 3.1a4 4 0 0 1 0 7.8",
        ],
        "award" => &[
            "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14z",
            "M8.2 13.9 7 23l5-3 5 3-1.2-9.1",
        ],
        "clock" => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        "globe" => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M2 12h20",
            "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
        ],
        "trending-up" => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        "megaphone" => &["m3 11 18-5v12L3 14v-3z", "M11.6 16.8a3 3 0 1 1-5.8-1.6"],
        "video" => &[
            "m22 8-6 4 6 4V8z",
            "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
        ],
        "layers" => &["M12 2 2 7l10 5 10-5-10-5z", "m2 17 10 5 10-5", "m2 12 10 5 10-5"],
        "smile" => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M8 14s1.5 2 4 2 4-2 4-2",
            "M9 9h.01",
            "M15 9h.01",
        ],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "external-link" => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        "github" => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.1-1.3-.3-2.5-1-3.5.3-1.2.3-2.4 0-3.5 0 0-1 0-3 1.5-2.6-.5-5.4-.5-8 0C6 2 5 2 5 2c-.3 1.1-.3 2.3 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.4.5-.7 1-.8 1.7-.2.6-.3 1.2-.2 1.8v4",
            "M9 18c-4.5 2-5-2-7-2",
        ],
        "star" => &["m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1L12 2z"],
        "quote" => &[
            "M3 21c3 0 7-1 7-8V5c0-1.2-.8-2-2-2H4c-1.2 0-2 .8-2 2v6c0 1.1.9 2 2 2h2.8c.6 0 1 .4 1 1 0 3-3 5-4.8 5z",
            "M15 21c3 0 7-1 7-8V5c0-1.2-.8-2-2-2h-4c-1.2 0-2 .8-2 2v6c0 1.1.9 2 2 2h2.8c.6 0 1 .4 1 1 0 3-3 5-4.8 5z",
        ],
        "mail" => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "m22 7-10 6L2 7"],
        "phone" => &[
            "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z",
        ],
        "map-pin" => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
            "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        ],
        "send" => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
        "linkedin" => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        ],
        "twitter" => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        "instagram" => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4z",
            "M17.5 6.5h.01",
        ],
        "heart" => &[
            "M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7z",
        ],
        _ => &["M4 4h16v16H4z"],
    }
}

/// Line icon by name.
#[component]
pub fn Icon(
    /// Icon name, see [`icon_paths`]
    #[prop(into)]
    name: String,
    /// Size in pixels
    #[prop(default = 24)]
    size: u32,
    /// Fill the shape with the current colour (stars, play, heart)
    #[prop(default = false)]
    filled: bool,
    /// Extra class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let paths = icon_paths(&name);
    let size = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill=if filled { "currentColor" } else { "none" }
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
