use eyelet::{Addr, SortOrder, SymbolTable};

#[test]
fn builds_a_program_listing() {
    let mut table = SymbolTable::default();
    let labels = [
        ("START", 0x3000),
        ("Loop", 0x3002),
        ("done", 0x3007),
        ("MSG", 0x3008),
    ];
    for (name, addr) in labels {
        table.insert(name, Addr(addr)).unwrap();
    }

    // Second pass resolves operands by name, ignoring case
    assert_eq!(table.get("loop").unwrap().addr(), Addr(0x3002));
    assert_eq!(table.get("DONE").unwrap().addr(), Addr(0x3007));

    // Listing output walks addresses in order
    let listing: Vec<(&str, u16)> = table
        .sorted(SortOrder::Address)
        .iter()
        .map(|sym| (sym.name(), sym.addr().get()))
        .collect();
    assert_eq!(
        listing,
        [
            ("START", 0x3000),
            ("Loop", 0x3002),
            ("done", 0x3007),
            ("MSG", 0x3008),
        ]
    );

    // Disassembly annotates addresses with the label placed there
    assert_eq!(table.name_at(Addr(0x3008)), Some("MSG"));
    assert_eq!(table.name_at(Addr(0x3001)), None);
}

#[test]
fn survives_reuse_across_files() {
    let mut table = SymbolTable::default();
    table.insert("main", Addr(0x3000)).unwrap();
    assert!(table.insert("MAIN", Addr(0x4000)).is_err());

    // Next source file starts from a clean table
    table.clear();
    table.insert("MAIN", Addr(0x4000)).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.name_at(Addr(0x3000)), None);
    assert_eq!(table.get("main").unwrap().addr(), Addr(0x4000));
}
