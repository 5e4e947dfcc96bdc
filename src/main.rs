use anyhow::Result;
use clap::Parser;
use exclusion_lib::app::{ensemble_summary, summary, App};
use exclusion_lib::model::config::AppConfig;
use exclusion_lib::model::state::ModelKind;
use exclusion_lib::ui::terminal::{play_animation, print_run_view, quit_requested, Tui};
use exclusion_view::RunView;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exact Gillespie simulation of 1-D exclusion processes", long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Rate preset: sep (0.5/0.5), tasep (1/0), asep (0.8/0.2)
    #[arg(short, long, value_enum)]
    model: Option<Model>,

    /// Lattice length L
    #[arg(short = 'L', long)]
    length: Option<usize>,

    /// Particle count N
    #[arg(short = 'N', long)]
    particles: Option<usize>,

    /// Right-hop rate (overrides the preset)
    #[arg(short)]
    p: Option<f64>,

    /// Left-hop rate (overrides the preset)
    #[arg(short)]
    q: Option<f64>,

    /// Total Gillespie steps
    #[arg(long)]
    steps: Option<u64>,

    /// Record a frame every this many steps
    #[arg(long)]
    sample_every: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Save the trajectory (JSON, gzip when ending in .gz)
    #[arg(short, long)]
    output: Option<String>,

    /// Write the space-time diagram as a PGM image
    #[arg(long)]
    spacetime: Option<String>,

    /// Play the trajectory as a terminal animation
    #[arg(long)]
    animate: bool,

    #[arg(long)]
    fps: Option<u32>,

    /// Skip the ASCII space-time diagram and density profile
    #[arg(long)]
    no_plots: bool,

    /// Run this many independent replicas instead of a single run
    #[arg(long)]
    ensemble: Option<usize>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Model {
    Sep,
    Tasep,
    Asep,
}

impl From<Model> for ModelKind {
    fn from(model: Model) -> Self {
        match model {
            Model::Sep => ModelKind::Sep,
            Model::Tasep => ModelKind::Tasep,
            Model::Asep => ModelKind::Asep,
        }
    }
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(model) = self.model {
            let rates = ModelKind::from(model).preset();
            config.rates.p = rates.p();
            config.rates.q = rates.q();
        }
        if let Some(p) = self.p {
            config.rates.p = p;
        }
        if let Some(q) = self.q {
            config.rates.q = q;
        }
        if let Some(length) = self.length {
            config.lattice.length = length;
        }
        if let Some(particles) = self.particles {
            config.lattice.particles = particles;
        }
        if let Some(steps) = self.steps {
            config.run.total_steps = steps;
        }
        if let Some(sample_every) = self.sample_every {
            config.run.sample_every = sample_every;
        }
        if self.seed.is_some() {
            config.lattice.seed = self.seed;
        }
        if self.output.is_some() {
            config.output.trajectory = self.output.clone();
        }
        if self.spacetime.is_some() {
            config.output.spacetime_image = self.spacetime.clone();
        }
        if let Some(fps) = self.fps {
            config.output.animation_fps = fps;
        }
        if self.no_plots {
            config.output.show_plots = false;
        }
    }
}

fn main() -> Result<()> {
    exclusion_core::init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    let app = App::new(config)?;

    if let Some(replicas) = args.ensemble {
        println!(
            "Running {} ensemble of {replicas} replicas on L={} with N={}...",
            app.model().label(),
            app.config.lattice.length,
            app.config.lattice.particles
        );
        let summaries = app.run_ensemble(replicas)?;
        println!("{}", ensemble_summary(&summaries));
        return Ok(());
    }

    println!(
        "Running {} Simulation on L={} with N={}...",
        app.model().label(),
        app.config.lattice.length,
        app.config.lattice.particles
    );
    let outcome = app.run()?;
    println!("{}", summary(&outcome));

    if app.config.output.show_plots {
        let title = format!("{} Space-Time Evolution", outcome.model.label());
        print_run_view(RunView {
            trajectory: &outcome.trajectory,
            title: &title,
            max_rows: 40,
        })?;
    }

    if args.animate {
        let frames = exclusion_view::frames(&outcome.trajectory);
        let mut tui = Tui::new()?;
        tui.init()?;
        let shown = play_animation(
            &mut tui.terminal,
            &frames,
            app.config.output.animation_fps,
            quit_requested,
        )?;
        tui.exit()?;
        println!("Played {shown} of {} frames", frames.len());
    }

    Ok(())
}
