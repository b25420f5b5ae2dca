//! Political party domain entity and logo update types.

/// Political party as seen by the maintenance tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub id: i32,
    /// Unique party name, matched verbatim against the logo mapping
    pub name: String,
    pub logo: Option<String>,
}

impl Party {
    /// Logo path, treating an empty string the same as no logo
    pub fn logo_path(&self) -> Option<&str> {
        self.logo.as_deref().filter(|path| !path.is_empty())
    }
}

/// A single logo path reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoChange {
    pub party_id: i32,
    pub name: String,
    pub old_path: Option<String>,
    pub new_path: String,
}

/// Outcome of a logo update run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Parties whose logo path was reassigned
    pub updated: usize,
    /// Parties fetched from the database
    pub examined: usize,
    /// Names with no entry in the mapping
    pub unmatched: Vec<String>,
}
