/// Link prefixes accepted in front of an invite code.
const INVITE_LINK_PREFIXES: [&str; 4] = [
    "https://discord.gg/",
    "http://discord.gg/",
    "https://discord.com/invite/",
    "http://discord.com/invite/",
];

/// Extracts the invite code from user input.
///
/// Accepts a bare code or a full `discord.gg` / `discord.com/invite` link and strips
/// surrounding whitespace.
///
/// # Arguments
/// - `input` - Raw option value typed by the user
///
/// # Returns
/// - `&str` - The invite code portion of the input
pub fn parse_invite_code(input: &str) -> &str {
    let input = input.trim();

    INVITE_LINK_PREFIXES
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))
        .unwrap_or(input)
}
