use std::fmt;

/// Newtype representing an address inside the LC3 memory.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Addr(pub u16);

impl Addr {
    pub fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for Addr {
    fn from(value: u16) -> Self {
        Addr(value)
    }
}

impl fmt::Display for Addr {
    // LC3 convention: hex with an `x` prefix, like x3000
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{:04X}", self.0)
    }
}

/// A stored label together with the address it resolved to.
///
/// The table owns every `Symbol`; lookups and snapshots hand out
/// references, never copies.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Symbol {
    name: Box<str>,
    addr: Addr,
    /// Fold-case hash of `name`, cached so chain scans can skip the
    /// string comparison on a mismatch.
    hash: u32,
}

impl Symbol {
    pub(crate) fn new(name: &str, addr: Addr, hash: u32) -> Self {
        Symbol {
            name: name.into(),
            addr,
            hash,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addr(&self) -> Addr {
        self.addr
    }

    pub(crate) fn hash(&self) -> u32 {
        self.hash
    }
}

/// Orders available from [`SymbolTable::sorted`](crate::SymbolTable::sorted).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortOrder {
    /// Case-insensitive lexicographic order on names.
    Name,
    /// Ascending address; equal addresses fall back to name order.
    Address,
}
