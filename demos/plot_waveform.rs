use lattice_wave::Waveform;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let wf = Waveform::new(150, 100, 0.5)?;
    wf.print_performance();
    wf.plot_waveform("waveform.png")?;
    println!("wrote waveform.png for {}", wf);
    Ok(())
}
