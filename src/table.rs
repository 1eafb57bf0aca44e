use std::fmt;
use std::iter::FusedIterator;

use crate::error::SymbolError;
use crate::fold;
use crate::symbol::{Addr, SortOrder, Symbol};
use crate::{DEFAULT_CAPACITY, LC3_MEMORY_SIZE};

/// Dual-indexed symbol table.
///
/// Labels are found by fold-case name through a hash index whose bucket
/// count is fixed at construction, and by address through a direct index
/// over the table's address space. Entries are owned once, in `entries`;
/// both indexes refer to them by position.
pub struct SymbolTable {
    /// One chain of entry indices per bucket. Chains keep the most
    /// recently inserted entry first.
    buckets: Box<[Vec<u32>]>,
    /// Sole owner of every entry. Entries are only removed in bulk, so
    /// indices held by the chains and the address index stay valid.
    entries: Vec<Symbol>,
    /// addr -> index of the last entry inserted at that address.
    addr_index: Box<[Option<u32>]>,
}

impl SymbolTable {
    /// Creates an empty table with `capacity` hash buckets over the full
    /// LC3 address space.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_address_space(capacity, LC3_MEMORY_SIZE)
    }

    /// Creates an empty table over the first `space` addresses only, for
    /// targets mapping less than the full 64K words.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `space` exceeds
    /// [`LC3_MEMORY_SIZE`](crate::LC3_MEMORY_SIZE).
    pub fn with_address_space(capacity: usize, space: usize) -> Self {
        assert!(capacity > 0, "symbol table requires at least one bucket");
        assert!(
            space <= LC3_MEMORY_SIZE,
            "address space cannot exceed LC3 memory"
        );
        SymbolTable {
            buckets: vec![Vec::new(); capacity].into_boxed_slice(),
            entries: Vec::new(),
            addr_index: vec![None; space].into_boxed_slice(),
        }
    }

    /// Number of hash buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of addressable words covered by the address index.
    pub fn address_space(&self) -> usize {
        self.addr_index.len()
    }

    /// Number of stored symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `name` at `addr`.
    ///
    /// Rejects names already present under any casing; the table is not
    /// touched on any error. Two distinct names may share an address:
    /// both stay reachable by name, while [`name_at`](Self::name_at)
    /// reports only the later one.
    pub fn insert(&mut self, name: &str, addr: Addr) -> Result<(), SymbolError> {
        if name.is_empty() {
            return Err(SymbolError::EmptyName);
        }
        if usize::from(addr.get()) >= self.addr_index.len() {
            return Err(SymbolError::AddressOutOfRange {
                addr,
                space: self.addr_index.len(),
            });
        }
        let hash = fold::hash(name);
        let bucket = self.bucket_of(hash);
        if self.search(bucket, hash, name).is_some() {
            return Err(SymbolError::DuplicateName {
                name: name.to_string(),
            });
        }
        let index = self.entries.len() as u32;
        self.entries.push(Symbol::new(name, addr, hash));
        self.buckets[bucket].insert(0, index);
        self.addr_index[usize::from(addr.get())] = Some(index);
        Ok(())
    }

    /// Looks up a label by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        let hash = fold::hash(name);
        let index = self.search(self.bucket_of(hash), hash, name)?;
        Some(&self.entries[index as usize])
    }

    /// Returns the name of the label last inserted at `addr`, or `None`
    /// if no insertion has targeted it (including addresses outside the
    /// table's address space).
    pub fn name_at(&self, addr: Addr) -> Option<&str> {
        let slot = self.addr_index.get(usize::from(addr.get()))?;
        slot.map(|index| self.entries[index as usize].name())
    }

    /// Iterates over every stored symbol exactly once.
    ///
    /// The order follows the internal bucket layout and should be
    /// treated as unspecified; use [`sorted`](Self::sorted) when a
    /// deterministic order matters.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            bucket: 0,
            pos: 0,
            yielded: 0,
        }
    }

    /// Returns references to every symbol sorted per `order`.
    ///
    /// The snapshot is independent of the live table's layout: the table
    /// keeps ownership of the entries and later insertions do not show
    /// up in an already-taken snapshot.
    pub fn sorted(&self, order: SortOrder) -> Vec<&Symbol> {
        let mut snapshot: Vec<&Symbol> = self.iter().collect();
        match order {
            SortOrder::Name => snapshot.sort_by(|a, b| fold::cmp(a.name(), b.name())),
            SortOrder::Address => snapshot.sort_by(|a, b| {
                a.addr()
                    .cmp(&b.addr())
                    .then_with(|| fold::cmp(a.name(), b.name()))
            }),
        }
        snapshot
    }

    /// Removes every symbol, keeping capacity and address space.
    ///
    /// The table is immediately reusable; names previously rejected as
    /// duplicates insert cleanly afterwards. Calling this on an empty
    /// table is a no-op.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.addr_index.fill(None);
        self.entries.clear();
    }

    fn bucket_of(&self, hash: u32) -> usize {
        hash as usize % self.buckets.len()
    }

    /// Walks one chain front to back, comparing cached hashes before
    /// touching the strings.
    fn search(&self, bucket: usize, hash: u32, name: &str) -> Option<u32> {
        self.buckets[bucket].iter().copied().find(|&index| {
            let sym = &self.entries[index as usize];
            sym.hash() == hash && fold::eq(sym.name(), name)
        })
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for SymbolTable {
    // The address index is 64K slots; don't dump it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("capacity", &self.capacity())
            .field("address_space", &self.address_space())
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the symbols of a [`SymbolTable`] in bucket order,
/// newest first within a bucket.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    table: &'a SymbolTable,
    bucket: usize,
    pos: usize,
    yielded: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        while self.bucket < self.table.buckets.len() {
            if let Some(&index) = self.table.buckets[self.bucket].get(self.pos) {
                self.pos += 1;
                self.yielded += 1;
                return Some(&self.table.entries[index as usize]);
            }
            self.bucket += 1;
            self.pos = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.table.entries.len() - self.yielded;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
