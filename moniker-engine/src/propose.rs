//! The naming-proposal engine.

use indexmap::IndexSet;

use crate::{
    error::{Error, Result},
    parts::{abbreviate_uppercase, has_multiple_parts, split_name_parts, strip_interface_prefix},
    table::WellKnownTypes,
};

/// Part-combination generation is skipped past this many name parts, since
/// the subset count grows as `2^k`.
const MAX_COMBINED_PARTS: usize = 16;

/// Declaration-site context supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct ProposalOptions {
    /// Pascal-case every candidate (property or public field site).
    pub uppercase: bool,

    /// Append a plural `s` to every candidate (collection element site).
    pub plural: bool,

    /// Token text already typed at the site, combined with the type's
    /// well-known suffixes (`Foo` + `Guid` proposes `FooId`).
    pub prefix: Option<String>,
}

/// Maps a type name and declaration-site context to a ranked list of
/// candidate identifiers.
///
/// The proposer holds only a read-only [`WellKnownTypes`] table, performs no
/// I/O, and allocates per call, so a single instance can serve any number of
/// threads without coordination.
#[derive(Debug, Clone)]
pub struct NameProposer {
    table: WellKnownTypes,
}

impl Default for NameProposer {
    fn default() -> Self {
        Self::new(WellKnownTypes::builtin())
    }
}

impl NameProposer {
    /// Create a proposer over the given mapping table.
    pub fn new(table: WellKnownTypes) -> Self {
        Self { table }
    }

    /// The mapping table this proposer consults.
    pub fn table(&self) -> &WellKnownTypes {
        &self.table
    }

    /// Propose identifier names for a declaration site of type `type_name`.
    ///
    /// Candidates are unique and ordered by descending length, the most
    /// specific first. Names of two characters or fewer (after
    /// interface-prefix stripping) yield no proposals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTypeName`] when `type_name` is empty or
    /// all-whitespace. Every other input is total.
    pub fn propose(&self, type_name: &str, options: &ProposalOptions) -> Result<Vec<String>> {
        if type_name.trim().is_empty() {
            return Err(Error::EmptyTypeName);
        }

        let name = strip_interface_prefix(type_name);
        if name.chars().count() <= 2 {
            return Ok(Vec::new());
        }

        let mut pool = Vec::new();

        if let Some(common) = self.table.names.get(name) {
            pool.push(common.clone());
        }

        if let Some(prefix) = options.prefix.as_deref().filter(|p| !p.is_empty()) {
            if let Some(suffixes) = self.table.suffixes.get(name) {
                for suffix in suffixes {
                    pool.push(format!("{prefix}{suffix}"));
                }
            }
        }

        if name.starts_with(char::is_uppercase) && !self.table.filtered.contains(name) {
            pool.push(lower_first(name));
        }

        if has_multiple_parts(name) {
            pool.push(abbreviate_uppercase(name));

            let parts = split_name_parts(name);
            if parts.len() <= MAX_COMBINED_PARTS {
                for mask in 1u32..1 << parts.len() {
                    let word: String = parts
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, part)| *part)
                        .collect();
                    pool.push(lower_first(&word));
                }
            }
        }

        if options.uppercase {
            for candidate in &mut pool {
                *candidate = upper_first(candidate);
            }
        }

        if options.plural {
            for candidate in &mut pool {
                candidate.push('s');
            }
        }

        Ok(finalize(pool))
    }
}

/// De-duplicate (first occurrence wins) and rank longest first. The sort is
/// stable, so equal-length candidates keep their generation order.
fn finalize(pool: Vec<String>) -> Vec<String> {
    let unique: IndexSet<String> = pool.into_iter().collect();
    let mut candidates: Vec<String> = unique.into_iter().collect();
    candidates.sort_by_key(|candidate| std::cmp::Reverse(candidate.chars().count()));
    candidates
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
