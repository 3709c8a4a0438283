use hidpi_winapi::{OsVersion, ProcessEnvironment, ScalingConfig, ScalingFix, SystemBackend};

fn main() {
    let version = OsVersion::query();
    let config = ScalingConfig::default();
    let outcome = ScalingFix::new(&version, &config).apply(&SystemBackend::default(), &mut ProcessEnvironment);
    println!("{outcome} (handled: {})", outcome.is_handled());
    if let Ok(factor) = std::env::var(&config.scale_factor_var) {
        println!("{}={factor}", config.scale_factor_var);
    }
}
