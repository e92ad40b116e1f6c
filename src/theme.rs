//! Colours of the landing page. The accent cycles through `PALETTE`, one step
//! every `STEP_SECONDS`; the cycle is a CSS animation that lives and dies with
//! the page, so the server keeps no timer state.

pub const PALETTE: [&str; 5] = [
    "#0066FF", // blue
    "#2D5A27", // muted forest green
    "#7B506F", // muted purple
    "#1B365D", // navy
    "#4A6670", // steel blue-gray
];

pub const STEP_SECONDS: u32 = 3;

/// Rejection messages are always shown in this colour
pub const REJECTION_COLOR: &str = "red";

/// `@keyframes` rule named `name` that steps `property` through the palette
/// and back to the first colour.
pub fn color_cycle_keyframes(
    name: &str,
    property: &str,
) -> String {
    let step = 100.0 / PALETTE.len() as f32;
    let mut frames = String::new();
    for (i, color) in PALETTE.iter().chain(PALETTE.first()).enumerate() {
        frames.push_str(&format!("  {:.0}% {{ {property}: {color}; }}\n", i as f32 * step));
    }
    format!("@keyframes {name} {{\n{frames}}}\n")
}

/// Total length of one full cycle, for `animation-duration`
pub fn cycle_seconds() -> u32 { STEP_SECONDS * PALETTE.len() as u32 }
