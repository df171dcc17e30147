//! Name formatters shared by every generator.
//!
//! These follow the conventions of Angular file and symbol naming rather than
//! a general word-segmentation algorithm: kebab case only normalises what the
//! user typed, and Pascal case keeps the inner casing of each word.

/// Lowercase, whitespace runs to `-`, then drop anything outside `[a-z0-9-]`.
///
/// `"User List"` → `"user-list"`, `"Admin_Panel!"` → `"adminpanel"`.
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_space = false;

    for c in input.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;

        for lower in c.to_lowercase() {
            if lower.is_ascii_lowercase() || lower.is_ascii_digit() || lower == '-' {
                out.push(lower);
            }
        }
    }

    out
}

/// Capitalise the first letter of every word; `-`, `_` and whitespace separate words.
///
/// `"user-list"` → `"UserList"`, `"userList"` → `"UserList"`.
pub fn to_pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Pascal case with a lowercase first character.
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"userProfile"` → `"USER_PROFILE"`, `"user-profile"` → `"USER_PROFILE"`.
///
/// A lowercase letter followed by an uppercase one is split with `_`; runs of
/// `-` and whitespace collapse into a single `_`. Existing underscores are kept.
pub fn to_constant_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;
    let mut in_separator = false;

    for c in input.chars() {
        if c == '-' || c.is_whitespace() {
            if !in_separator {
                out.push('_');
            }
            in_separator = true;
            prev_lower = false;
            continue;
        }
        in_separator = false;

        if prev_lower && c.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        out.extend(c.to_uppercase());
    }

    out
}
