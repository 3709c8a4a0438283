use hidpi_winapi::OsVersion;

fn main() {
    let version = OsVersion::query();
    match version.detected() {
        Some(v) => println!("Windows {v}"),
        None => println!("unknown Windows version, assuming {}", version.system_version()),
    }
    println!("Vista or newer: {}", version.is_windows_vista_or_higher());
    println!("7 or newer: {}", version.is_windows7_or_higher());
    println!("8 or newer: {}", version.is_windows8_or_higher());
    println!("8.1 or newer: {}", version.is_windows8_point1_or_higher());
}
