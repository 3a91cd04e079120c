use navcalc::convert::{ConvertInput, Unit};

#[derive(clap::Parser)]
pub struct Opts {
    /// Value to convert
    #[clap(allow_hyphen_values = true)]
    value: String,
    /// Source unit, e.g. ft, m, fathoms, shackles, cables, sm, nm, m/s, kn
    #[clap(long)]
    from: Unit,
    /// Target unit
    #[clap(long)]
    to: Unit,
}

#[tracing::instrument(skip_all)]
pub fn execute(opts: Opts, json: bool) -> Result<(), super::Error> {
    let conversion = ConvertInput {
        value: &opts.value,
        from: opts.from,
        to: opts.to,
    }
    .calculate()?;

    if json {
        super::print(&conversion, json)
    } else {
        println!("Converted Value: {} ({})", conversion, conversion.to);
        Ok(())
    }
}
