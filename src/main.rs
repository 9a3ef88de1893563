use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use recurrence_lab::catalog::{self, Recurrence, WorkShape};
use recurrence_lab::report::{
    BoundTable, LevelTable, MasterSummary, ReportConfig, TelescopingTable, TraceTable,
};
use recurrence_lab::substitution::{self, SubstitutionKind};
use recurrence_lab::trace::{descending_input, ProducerRegistry};
use recurrence_lab::{analyze, master, telescoping, MasterConfig};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "recurrence-lab",
    about = "Recursion-tree work analysis for T(n) = aT(n/b) + f(n)"
)]
struct Cli {
    /// Log analysis steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Per-level work of the idealized recursion tree.
    Analyze(AnalyzeArgs),
    /// Numeric Master-Method case estimate.
    Master(MasterArgs),
    /// Run a recursive algorithm and print its per-depth work.
    Trace(TraceArgs),
    /// Unroll T(n) = T(n-1) + n and check it against n(n+1)/2.
    Telescope {
        /// Size to unroll.
        #[arg(long, default_value_t = 10)]
        n: u64,
        /// Unrolling steps to print.
        #[arg(long, default_value_t = 4)]
        steps: u64,
    },
    /// Check a guessed bound T(n) <= c·g(n) against exact recursion.
    Substitute {
        /// merge-sort, halving-quadratic, merge-sort-nlogn or linear.
        kind: SubstitutionKind,
        /// Constant c (defaults to one that works).
        #[arg(long)]
        c: Option<f64>,
        /// Check sizes up to 2^k.
        #[arg(long, default_value_t = 10)]
        k: u32,
    },
    /// List built-in recurrences, trace producers and substitution checks.
    List,
}

/// Either a built-in recurrence or explicit a, b and f(n).
#[derive(Args, Debug)]
struct RecurrenceArgs {
    /// Built-in recurrence name (see `list`).
    #[arg(long, conflicts_with_all = ["a", "b", "work"])]
    recurrence: Option<String>,
    /// Subproblems per call.
    #[arg(long, default_value_t = 2)]
    a: u64,
    /// Size reduction factor.
    #[arg(long, default_value_t = 2.0)]
    b: f64,
    /// Outside work f(n): 1, n, nlogn, n^2 or n^3.
    #[arg(long, default_value = "n")]
    work: WorkShape,
}

impl RecurrenceArgs {
    fn resolve(&self) -> Result<Recurrence> {
        match &self.recurrence {
            Some(name) => catalog::lookup(name).context("try `recurrence-lab list`"),
            None => Ok(Recurrence::custom(self.a, self.b, self.work)),
        }
    }
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    recurrence: RecurrenceArgs,
    /// Problem size.
    #[arg(long, default_value_t = 64)]
    n: u64,
    /// Longest bar in characters.
    #[arg(long, default_value_t = 30)]
    bar_width: usize,
    /// Rows shown before truncating.
    #[arg(long, default_value_t = 64)]
    max_rows: usize,
    /// Print the analysis as JSON.
    #[cfg(feature = "visualize")]
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct MasterArgs {
    #[command(flatten)]
    recurrence: RecurrenceArgs,
    /// Size at which f(n) is compared to n^(log_b a).
    #[arg(long, default_value_t = 1000)]
    sample_n: u64,
    /// Ratios below this are Case 1.
    #[arg(long, default_value_t = 0.5)]
    lower: f64,
    /// Ratios above this are Case 3.
    #[arg(long, default_value_t = 2.0)]
    upper: f64,
}

#[derive(Args, Debug)]
struct TraceArgs {
    /// Producer name (see `list`).
    producer: String,
    /// Input length.
    #[arg(long, default_value_t = 16)]
    size: usize,
    /// Also print the idealized analysis at the same size.
    #[arg(long)]
    compare: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => run_analyze(args)?,
        Commands::Master(args) => run_master(args)?,
        Commands::Trace(args) => run_trace(args)?,
        Commands::Telescope { n, steps } => run_telescope(n, steps)?,
        Commands::Substitute { kind, c, k } => run_substitute(kind, c, k)?,
        Commands::List => run_list(),
    }

    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let recurrence = args.recurrence.resolve()?;
    let result = analyze(&recurrence.spec(args.n))
        .with_context(|| format!("failed to analyze {}", recurrence.label()))?;

    #[cfg(feature = "visualize")]
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let config = ReportConfig::default()
        .with_bar_width(args.bar_width)
        .with_max_rows(args.max_rows);
    println!("{}, n = {}", recurrence.label(), args.n);
    println!();
    print!("{}", LevelTable::new(&result, &config));
    println!("Fingerprint: {}", result.fingerprint().to_hex());

    match master::estimate(
        recurrence.a,
        recurrence.b,
        recurrence.shape.as_fn(),
        &MasterConfig::default(),
    ) {
        Ok(estimate) => {
            println!();
            print!("{}", MasterSummary::new(&estimate, &recurrence.shape.to_string()));
        }
        Err(err) => debug!(%err, "master estimate skipped"),
    }
    Ok(())
}

fn run_master(args: MasterArgs) -> Result<()> {
    let recurrence = args.recurrence.resolve()?;
    let config = MasterConfig::default()
        .with_sample_n(args.sample_n)
        .with_band(args.lower, args.upper);
    let estimate = master::estimate(recurrence.a, recurrence.b, recurrence.shape.as_fn(), &config)
        .with_context(|| format!("failed to estimate {}", recurrence.label()))?;

    println!("{}", recurrence.label());
    print!("{}", MasterSummary::new(&estimate, &recurrence.shape.to_string()));

    let tree = analyze(&recurrence.spec(args.sample_n))?;
    println!(
        "Tree regime at n = {}: {} (suggests {})",
        args.sample_n,
        tree.dominant_regime,
        tree.dominant_regime.master_case()
    );
    Ok(())
}

fn run_trace(args: TraceArgs) -> Result<()> {
    let registry = ProducerRegistry::with_builtins();
    let producer = registry
        .get(&args.producer)
        .ok_or_else(|| anyhow!("unknown producer '{}' (try `recurrence-lab list`)", args.producer))?;

    let input = descending_input(args.size);
    let trace = producer.run(&input);
    let config = ReportConfig::default();

    println!("{}: {}", producer.name(), producer.description());
    println!("Idealized: {}", producer.recurrence().label());
    println!();
    print!("{}", TraceTable::new(&trace, &config));

    if args.compare {
        let idealized = producer
            .idealized(&input)
            .context("failed to analyze the idealized recurrence")?;
        println!();
        println!("Idealized tree at n = {}:", producer.problem_size(&input).max(1));
        print!("{}", LevelTable::new(&idealized, &config));
    }
    Ok(())
}

fn run_telescope(n: u64, steps: u64) -> Result<()> {
    let expansion = telescoping::expansion(n, steps);
    let mut sizes = vec![1, 5, 10, 15, 20, n];
    sizes.sort_unstable();
    sizes.dedup();
    let checks = telescoping::verify(&sizes)?;
    print!("{}", TelescopingTable::new(&expansion, &checks));
    Ok(())
}

fn run_substitute(kind: SubstitutionKind, c: Option<f64>, k: u32) -> Result<()> {
    let c = c.unwrap_or_else(|| kind.suggested_c());
    let checks = substitution::check(kind, c, k)?;
    print!("{}", BoundTable::new(kind, c, &checks));

    let tightest = substitution::tightest_constant(kind, k)?;
    println!("Smallest c that holds on this domain: {tightest:.4}");

    if let Some(recurrence) = kind.recurrence() {
        if let Ok(estimate) = master::estimate(
            recurrence.a,
            recurrence.b,
            recurrence.shape.as_fn(),
            &MasterConfig::default(),
        ) {
            println!(
                "Master estimate: {} → {}",
                estimate.case,
                estimate.solution(&recurrence.shape.to_string())
            );
        }
    }
    Ok(())
}

fn run_list() {
    println!("Recurrences:");
    for recurrence in catalog::BUILTIN {
        println!("  {:<18} {}", recurrence.name, recurrence.label());
    }

    println!();
    println!("Trace producers:");
    for info in ProducerRegistry::with_builtins().list() {
        println!("  {:<18} {}", info.name, info.description);
    }

    println!();
    println!("Substitution checks:");
    for kind in SubstitutionKind::ALL {
        println!("  {:<18} {}", kind.name(), kind);
    }

    println!();
    let shapes: Vec<String> = WorkShape::ALL.iter().map(ToString::to_string).collect();
    println!("Work shapes: {}", shapes.join(", "));
}
