//! Symbol table used by the LC3 assembler front end to resolve labels to
//! memory addresses and back.
//!
//! The table is indexed two ways: a fixed-capacity hash index finds a
//! label by name (ignoring case, as LC3 labels do), and a direct index
//! over the address space finds the label last placed at an address.
//! Both indexes share one owned copy of every entry.
//!
//! ```
//! use eyelet::{Addr, SortOrder, SymbolTable};
//!
//! let mut table = SymbolTable::default();
//! table.insert("START", Addr(0x3000)).unwrap();
//! table.insert("loop", Addr(0x3001)).unwrap();
//!
//! assert_eq!(table.get("start").map(|sym| sym.addr()), Some(Addr(0x3000)));
//! assert_eq!(table.name_at(Addr(0x3001)), Some("loop"));
//!
//! let listing = table.sorted(SortOrder::Address);
//! assert_eq!(listing[0].name(), "START");
//! ```

// Entry storage
mod symbol;
pub use symbol::{Addr, SortOrder, Symbol};

// Dual-indexed table
mod table;
pub use table::{Iter, SymbolTable};

mod error;
pub use error::SymbolError;

// Case folding shared by hashing, equality and ordering
mod fold;

/// Number of addressable words in LC3 memory.
pub const LC3_MEMORY_SIZE: usize = 1 << 16;

/// Bucket count used by [`SymbolTable::default`].
pub const DEFAULT_CAPACITY: usize = 997;
