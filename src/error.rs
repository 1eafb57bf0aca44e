use miette::Diagnostic;
use thiserror::Error;

use crate::symbol::Addr;

/// Errors surfaced by [`SymbolTable::insert`](crate::SymbolTable::insert).
///
/// Lookup misses are not errors; those come back as `None`.
#[derive(Error, Diagnostic, Clone, PartialEq, Eq, Debug)]
pub enum SymbolError {
    /// A label with the same fold-case name is already stored. The table
    /// is left unchanged.
    #[error("duplicate label `{name}`")]
    #[diagnostic(
        code(symbol::duplicate_label),
        help("labels are case-insensitive; `Loop` and `LOOP` name the same symbol")
    )]
    DuplicateName {
        /// The label as passed to the rejected insert.
        name: String,
    },

    /// The address does not fit inside the table's address space.
    #[error("address {addr} is outside the {space}-word address space")]
    #[diagnostic(
        code(symbol::addr_range),
        help("full LC3 memory spans x0000 to xFFFF; this table was built over less")
    )]
    AddressOutOfRange { addr: Addr, space: usize },

    /// Labels must contain at least one character.
    #[error("empty label")]
    #[diagnostic(code(symbol::empty_label))]
    EmptyName,
}
