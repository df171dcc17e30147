pub mod artifacts;
pub mod feature;
pub mod project;

use ngforge_core::case::{to_camel_case, to_constant_case, to_kebab_case, to_pascal_case};

/// Every spelling of one user-supplied name.
///
/// The kebab form is derived from the raw answer; the other forms are derived
/// from the kebab form so that `"User List"`, `"user-list"` and `"user list"`
/// all produce the same files and symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    /// `user-list`: file and folder names, selectors, route paths.
    pub kebab: String,
    /// `UserList`: class names.
    pub pascal: String,
    /// `userList`: pipe names.
    pub camel: String,
    /// `USER_LIST`: route constants.
    pub constant: String,
}

impl Names {
    pub fn new(raw: &str) -> Self {
        let kebab = to_kebab_case(raw).trim_matches('-').to_string();
        Names {
            pascal: to_pascal_case(&kebab),
            camel: to_camel_case(&kebab),
            constant: to_constant_case(&kebab),
            kebab,
        }
    }

    /// `USER_LIST_ROUTES`
    pub fn routes_const(&self) -> String {
        format!("{}_ROUTES", self.constant)
    }
}
