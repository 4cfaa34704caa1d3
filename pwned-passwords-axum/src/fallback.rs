//! Static common-password fallback list.
//!
//! Consulted when the breach API cannot be reached, so an outage never
//! means a breached password slips through unexamined. The list is a
//! small, embedded excerpt of the most frequently breached passwords;
//! the live API remains the authoritative check.

use std::collections::HashSet;
use std::sync::OnceLock;

static COMMON_PASSWORDS_RAW: &str = include_str!("../data/common-passwords.txt");

fn common_passwords() -> &'static HashSet<&'static str> {
    static LIST: OnceLock<HashSet<&'static str>> = OnceLock::new();
    LIST.get_or_init(|| {
        COMMON_PASSWORDS_RAW
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    })
}

/// Whether `password` appears in the embedded common-password list.
///
/// Matching is case-insensitive; the list itself is stored lowercase.
pub fn is_common_password(password: &str) -> bool {
    common_passwords().contains(password.to_lowercase().as_str())
}
