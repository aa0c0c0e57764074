use lattice_wave::{Waveform, WaveformConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the square, a flat segment at y = 250 over every column
    let square = WaveformConfig::default().build()?;
    println!("{}", square);
    square.print_performance();

    // a flat segment that bends into an arc centred on the diagonal
    for (x, x0) in [(0, 0), (100, 50), (150, 100), (200, 100)] {
        let wf = Waveform::new(x, x0, 0.5)?;
        println!(
            "{}  points={}  radius={:.3}  performance={:.8}",
            wf,
            wf.points().len(),
            wf.radius(),
            wf.performance()
        );
    }

    // out of range parameters are rejected
    if let Err(e) = Waveform::new(300, 0, 0.5) {
        println!("error: {}", e);
    }
    Ok(())
}
