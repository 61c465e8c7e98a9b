use std::fs::File;
use std::io::BufWriter;

use em_fdtd::prelude::*;
use log::info;

fn experiment(max_time: usize) -> Result<TransmissionReport, EmFdtdError> {
    let free_space = SimulationConfig::default().with_max_time(max_time);
    let slab = free_space.clone().with_range(Material::glass().slab(150, 200));

    let free_record = free_space.run()?;
    let slab_record = slab.run()?;
    let report = transmission(&slab_record, &free_record)?;
    info!("{max_time} steps: {report:?}");
    Ok(report)
}

fn main() -> Result<(), EmFdtdError> {
    env_logger::init();

    let short = experiment(DEFAULT_MAX_TIME)?;
    let long = experiment(501)?;
    println!("steps, transmission, reflectance");
    println!("{DEFAULT_MAX_TIME}, {:.6}, {:.6}", short.transmission, short.reflectance);
    println!("501, {:.6}, {:.6}", long.transmission, long.reflectance);
    println!(
        "relative change: {:.3e}",
        relative_difference(long.transmission, short.transmission)
    );

    let free_space = SimulationConfig::default();
    let slab = SimulationConfig::default().with_range(Material::glass().slab(150, 200));
    let free_record = free_space.run()?;
    let mut snapshots = SnapshotWriter::new(BufWriter::new(File::create("slab_snapshots.csv")?), 10);
    let slab_record = slab.run_with_snapshots(|q, grid| snapshots.record(q, grid))?;
    snapshots.finish()?;
    write_sensor_csv(BufWriter::new(File::create("slab_sensor.csv")?), &slab_record)?;

    let (vacuum, glass) = (Material::vacuum(), Material::glass());
    println!(
        "interface estimate: transmission {:.6}, extra delay {:.1} steps",
        vacuum.transmission_coefficient(&glass) * glass.transmission_coefficient(&vacuum),
        transit_steps(50, glass.relative_permittivity) - transit_steps(50, vacuum.relative_permittivity),
    );

    println!("\nfrequency, |T|, |T|(dB), phase(deg)");
    let freqs: Vec<Scalar> = frequency_axis(51).into_iter().take(6).collect();
    let spectrum = TransmissionSpectrum::from_points(&spectral_transmission(&slab_record, &free_record, &freqs)?);
    let columns = spectrum.frequency.iter().zip(&spectrum.magnitude).zip(&spectrum.magnitude_db);
    for (((f, m), db), deg) in columns.zip(&spectrum.phase_deg) {
        println!("{f:.4}, {m:.6}, {db:.3}, {deg:.2}");
    }
    Ok(())
}
