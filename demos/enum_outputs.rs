use hidpi_winapi::{output_dpi, DisplayBackend, Error, ScalingConfig, SystemBackend, BASE_DPI};

fn main() -> Result<(), Error> {
    let backend = SystemBackend::default();
    let config = ScalingConfig::default();
    let api = backend.load_dpi_api()?;

    for output in backend.outputs()? {
        let name = match backend.device_name(&output) {
            Ok(name) => name,
            Err(e) => {
                println!("{e:?}");
                continue
            },
        };
        match output_dpi(&backend, &api, &config, &output) {
            Some(dpi) => println!("{name}: {dpi} DPI, scale {}", dpi.scale_factor(BASE_DPI)),
            None => println!("{name}: no DPI"),
        }
    }

    Ok(())
}
