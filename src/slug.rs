//! Gallery slug derivation.
//!
//! Every delivered gallery lives in a folder named by its slug:
//!
//! ```text
//! {normalized-client-name}-{date}-{token}
//! "Anna & Ben"  + 2026-01-19 + 2fefa5  →  anna-ben-2026-01-19-2fefa5
//! ```
//!
//! The name portion is URL-safe by construction. The date and token are
//! inserted verbatim; callers are responsible for supplying safe values.
//!
//! ## Tokens
//!
//! The token keeps two deliveries for the same client on the same day from
//! colliding. When the user does not pass one, a [`TokenSource`] supplies it.
//! [`RandomToken`] reads three bytes from the operating system's CSPRNG and
//! hex-encodes them; [`FixedToken`] returns a preset value for deterministic
//! runs.

use rand::RngCore;
use rand::rngs::OsRng;

/// Name portion used when the client name normalizes to nothing.
pub const DEFAULT_NAME: &str = "client";

/// Number of random bytes in a generated token (two hex chars each).
const TOKEN_BYTES: usize = 3;

/// Normalize a client name into a URL-safe slug fragment.
///
/// - `"Anna & Ben"` → `"anna-ben"`
/// - `"  Margaret River  "` → `"margaret-river"`
/// - `"Zoë"` → `"zo"`
/// - `"!!!"` → `"client"`
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }

    if out.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        out
    }
}

/// Join the normalized client name, date and token into a slug.
pub fn build_slug(client_name: &str, date: &str, token: &str) -> String {
    format!("{}-{}-{}", normalize_name(client_name), date, token)
}

/// Supplies the token for a slug when none was given explicitly.
pub trait TokenSource {
    fn token(&mut self) -> String;
}

/// Six lowercase hex characters drawn from the OS random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomToken;

impl TokenSource for RandomToken {
    fn token(&mut self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

/// Always returns the same token.
#[derive(Debug, Clone)]
pub struct FixedToken(pub String);

impl TokenSource for FixedToken {
    fn token(&mut self) -> String {
        self.0.clone()
    }
}

/// Use `explicit` when present and non-empty, otherwise ask `source` for a
/// fresh token.
pub fn resolve_token(explicit: Option<&str>, source: &mut dyn TokenSource) -> String {
    match explicit.filter(|t| !t.is_empty()) {
        Some(t) => t.to_string(),
        None => source.token(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lowercase kebab-case check.
    fn validate_slug(slug: &str) -> Result<(), String> {
        let is_valid = !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if is_valid {
            Ok(())
        } else {
            Err(format!("slug must be lowercase kebab-case: {slug:?}"))
        }
    }

    #[test]
    fn simple_name_lowercased() {
        assert_eq!(normalize_name("Anna"), "anna");
    }

    #[test]
    fn symbol_runs_collapse_to_one_hyphen() {
        assert_eq!(normalize_name("Anna & Ben"), "anna-ben");
        assert_eq!(normalize_name("second lot -- margret river"), "second-lot-margret-river");
    }

    #[test]
    fn surrounding_whitespace_and_symbols_trimmed() {
        assert_eq!(normalize_name("  --Margaret River!--  "), "margaret-river");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(normalize_name("Zoë Smith"), "zo-smith");
        assert_eq!(normalize_name("José"), "jos");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(normalize_name("Studio 54"), "studio-54");
    }

    #[test]
    fn all_symbols_falls_back_to_default() {
        assert_eq!(normalize_name("!!! ???"), DEFAULT_NAME);
        assert_eq!(normalize_name(""), DEFAULT_NAME);
        assert_eq!(normalize_name("   "), DEFAULT_NAME);
        assert_eq!(normalize_name("日本"), DEFAULT_NAME);
    }

    #[test]
    fn normalized_names_are_always_clean() {
        let inputs = [
            "Anna",
            "a--b",
            "-lead",
            "trail-",
            "  x  y  ",
            "ÀÉÎ õü",
            "O'Brien & Sons, Ltd.",
            "___",
            "tab\tseparated\nlines",
            "MiXeD123CaSe",
        ];
        for input in inputs {
            let n = normalize_name(input);
            validate_slug(&n).unwrap_or_else(|e| panic!("{input:?} normalized badly: {e}"));
        }
    }

    #[test]
    fn slug_joins_parts() {
        assert_eq!(
            build_slug("Second Lot Margret River", "2026-01-19", "2fefa5"),
            "second-lot-margret-river-2026-01-19-2fefa5"
        );
    }

    #[test]
    fn slug_does_not_escape_date_or_token() {
        assert_eq!(build_slug("Anna", "19/01", "AB CD"), "anna-19/01-AB CD");
    }

    #[test]
    fn random_token_is_six_lowercase_hex() {
        let token = RandomToken.token();
        assert_eq!(token.len(), 6);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn random_tokens_differ() {
        // 24 bits of entropy: a handful of draws should never all collide.
        let mut source = RandomToken;
        let tokens: std::collections::HashSet<String> = (0..8).map(|_| source.token()).collect();
        assert!(tokens.len() > 1);
    }

    #[test]
    fn explicit_token_wins_over_source() {
        let mut source = FixedToken("aaaaaa".into());
        assert_eq!(resolve_token(Some("custom"), &mut source), "custom");
        assert_eq!(resolve_token(None, &mut source), "aaaaaa");
    }

    #[test]
    fn empty_token_falls_back_to_source() {
        let mut source = FixedToken("2fefa5".into());
        let token = resolve_token(Some(""), &mut source);
        assert_eq!(token, "2fefa5");

        let slug = build_slug("Anna", "2026-01-19", &token);
        assert_eq!(slug, "anna-2026-01-19-2fefa5");
        validate_slug(&slug).unwrap();
    }
}
