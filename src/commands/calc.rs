use navcalc::calc::{
    AnchorInput, RotInput, RotMode, RpmInput, SquatInput, StdInput, StdMode, SweptPathInput,
    TrueWindInput, TurnInput,
};

use super::{print, Error};

#[derive(clap::ArgEnum, Clone, Copy)]
pub enum RotSolveFor {
    Rot,
    Radius,
    Speed,
}

#[derive(clap::Parser)]
pub struct RotOpts {
    /// Quantity to solve for
    #[clap(long, arg_enum, default_value = "rot")]
    solve: RotSolveFor,
    /// Speed in knots
    #[clap(long)]
    speed: Option<String>,
    /// Turn radius in nautical miles
    #[clap(long)]
    radius: Option<String>,
    /// Rate of turn in degrees per minute
    #[clap(long)]
    rot: Option<String>,
}

#[tracing::instrument(skip_all)]
pub fn rot(opts: RotOpts, json: bool) -> Result<(), Error> {
    let mode = match opts.solve {
        RotSolveFor::Rot => RotMode::Rot,
        RotSolveFor::Radius => RotMode::Radius,
        RotSolveFor::Speed => RotMode::Speed,
    };
    let result = RotInput {
        mode,
        speed: field(&opts.speed),
        radius: field(&opts.radius),
        rot: field(&opts.rot),
    }
    .calculate()?;
    print(&result, json)
}

#[derive(clap::Parser)]
pub struct AnchorOpts {
    /// Vessel length overall in meters
    #[clap(long)]
    loa: String,
    /// Bottom depth in meters
    #[clap(long)]
    depth: String,
    /// Hawsepipe freeboard in meters (defaults to 0)
    #[clap(long)]
    freeboard: Option<String>,
    /// Shackles on deck
    #[clap(long)]
    shackles: String,
}

#[tracing::instrument(skip_all)]
pub fn anchor(opts: AnchorOpts, json: bool) -> Result<(), Error> {
    let result = AnchorInput {
        loa: &opts.loa,
        depth: &opts.depth,
        freeboard: field(&opts.freeboard),
        shackles: &opts.shackles,
    }
    .calculate()?;
    print(&result, json)
}

#[derive(clap::Parser)]
pub struct SquatOpts {
    /// Least charted depth in meters
    #[clap(long)]
    charted_depth: String,
    /// Height of tide in meters
    #[clap(long)]
    tide: String,
    /// Block coefficient (Cb)
    #[clap(long)]
    cb: String,
    /// Transit speed in knots
    #[clap(long)]
    speed: String,
    /// Deepest draft in meters
    #[clap(long)]
    draft: String,
}

#[tracing::instrument(skip_all)]
pub fn squat(opts: SquatOpts, json: bool) -> Result<(), Error> {
    let result = SquatInput {
        least_charted_depth: &opts.charted_depth,
        height_of_tide: &opts.tide,
        block_coefficient: &opts.cb,
        transit_speed: &opts.speed,
        deep_draft: &opts.draft,
    }
    .calculate()?;
    print(&result, json)
}

#[derive(clap::Parser)]
pub struct SweptPathOpts {
    /// Vessel length in meters
    #[clap(long)]
    length: String,
    /// Vessel beam in meters
    #[clap(long)]
    beam: String,
    /// Additional drift angle in degrees
    #[clap(long)]
    drift: Option<String>,
}

#[tracing::instrument(skip_all)]
pub fn swept_path(opts: SweptPathOpts, json: bool) -> Result<(), Error> {
    let result = SweptPathInput {
        length: &opts.length,
        beam: &opts.beam,
        additional_drift: field(&opts.drift),
    }
    .calculate()?;
    print(&result, json)
}

#[derive(clap::Parser)]
pub struct TrueWindOpts {
    /// Apparent wind speed in knots
    #[clap(long)]
    aws: String,
    /// Apparent wind angle, 0-359 degrees relative to the bow
    #[clap(long)]
    awa: String,
    /// Boat speed in knots
    #[clap(long)]
    speed: String,
    /// True heading in degrees
    #[clap(long)]
    heading: String,
}

#[tracing::instrument(skip_all)]
pub fn true_wind(opts: TrueWindOpts, json: bool) -> Result<(), Error> {
    let result = TrueWindInput {
        apparent_speed: &opts.aws,
        apparent_angle: &opts.awa,
        boat_speed: &opts.speed,
        heading: &opts.heading,
    }
    .calculate()?;
    print(&result, json)
}

#[derive(clap::Parser)]
pub struct TurnOpts {
    /// Course of the first leg in degrees
    #[clap(long)]
    leg1: String,
    /// Course of the second leg in degrees
    #[clap(long)]
    leg2: String,
    /// Turn radius in nautical miles
    #[clap(long)]
    radius: String,
}

#[tracing::instrument(skip_all)]
pub fn turn(opts: TurnOpts, json: bool) -> Result<(), Error> {
    let result = TurnInput {
        leg1: &opts.leg1,
        leg2: &opts.leg2,
        radius: &opts.radius,
    }
    .calculate()?;
    print(&result, json)
}

#[derive(clap::ArgEnum, Clone, Copy)]
pub enum StdSolveFor {
    Speed,
    Time,
    Distance,
}

#[derive(clap::Parser)]
pub struct StdOpts {
    /// Quantity to solve for
    #[clap(long, arg_enum)]
    solve: StdSolveFor,
    /// Speed in knots
    #[clap(long)]
    speed: Option<String>,
    /// Time in hours
    #[clap(long)]
    time: Option<String>,
    /// Distance in nautical miles
    #[clap(long)]
    distance: Option<String>,
}

#[tracing::instrument(skip_all)]
pub fn speed_time_distance(opts: StdOpts, json: bool) -> Result<(), Error> {
    let mode = match opts.solve {
        StdSolveFor::Speed => StdMode::Speed,
        StdSolveFor::Time => StdMode::Time,
        StdSolveFor::Distance => StdMode::Distance,
    };
    let result = StdInput {
        mode,
        speed: field(&opts.speed),
        time: field(&opts.time),
        distance: field(&opts.distance),
    }
    .calculate()?;
    print(&result, json)
}

#[derive(clap::Parser)]
pub struct RpmOpts {
    /// Current shaft RPM
    #[clap(long)]
    rpm: String,
    /// Current speed in knots
    #[clap(long)]
    speed: String,
    /// Desired speed in knots
    #[clap(long)]
    desired: String,
}

#[tracing::instrument(skip_all)]
pub fn rpm(opts: RpmOpts, json: bool) -> Result<(), Error> {
    let result = RpmInput {
        current_rpm: &opts.rpm,
        current_speed: &opts.speed,
        desired_speed: &opts.desired,
    }
    .calculate()?;
    print(&result, json)
}

// Options left out on the command line reach the calculators as blank fields.
fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
