use enum_bitset::{EnumSet, Enumerated, enum_count, name_of, reflect_enum};

reflect_enum! {
    #[derive(Debug, PartialEq)]
    pub enum Permission {
        Read = 1,
        Write = 2,
        Execute = 4,
        Admin = 8,
    }
}

fn main() {
    println!("{} permissions discovered:", enum_count::<Permission>());
    for &value in Permission::VALUES {
        println!("  {} = {}", name_of::<Permission>(value), value);
    }

    let granted = Permission::Read | Permission::Write;
    println!("granted: {granted:?}");
    println!("denied:  {:?}", !granted);

    let mut elevated = granted;
    elevated |= Permission::Admin;
    println!("elevated: {elevated:?}");

    let revoked = elevated & !EnumSet::from(Permission::Admin);
    println!("after revocation: {revoked:?}");
    assert_eq!(revoked, granted);
}
