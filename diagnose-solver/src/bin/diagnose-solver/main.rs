mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
use diagnose_solver::core::asserts::DIAGNOSE_ASSERT_LEVEL_DEFINITION;
use diagnose_solver::core::asserts::DIAGNOSE_ASSERT_MODERATE;
use diagnose_solver::core::conflicts::ConflictSetExtractor;
use diagnose_solver::core::convert_case::Case;
use diagnose_solver::core::hitting_sets::brute_force_hitting_sets;
use diagnose_solver::core::hitting_sets::Heuristic;
use diagnose_solver::core::hitting_sets::HittingSetSearch;
use diagnose_solver::core::hitting_sets::HsTree;
use diagnose_solver::core::hitting_sets::SearchOptions;
use diagnose_solver::core::statistics::configure_statistic_logging;
use diagnose_solver::core::statistics::log_statistic;
use diagnose_solver::core::statistics::log_statistic_postfix;
use diagnose_solver::core::statistics::should_log_statistics;
use diagnose_solver::core::statistics::Statistic;
use diagnose_solver::core::statistics::StatisticLogger;
use diagnose_solver::core::termination::Combinator;
use diagnose_solver::core::termination::NodeBudget;
use diagnose_solver::core::termination::TimeBudget;
use diagnose_solver::core::ComponentSet;
use diagnose_solver::core::DisplaySet;
use diagnose_solver::parsers::circuit::read_circuit;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::DiagnoseSolverError;
use result::DiagnoseSolverResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The circuit to diagnose. The file should contain the following sections:
    ///  - 'COMPONENTS:' declaring gates such as 'XORG(X1)', 'ANDG(A1)' or 'ORG(O1)',
    ///  - 'BEHAVIOUR:' wiring component inputs to outputs, e.g. 'IN1(X2)=OUT(X1)',
    ///  - 'OBSERVATIONS:' assigning values to component inputs, e.g. 'IN1(X1)=1',
    ///  - 'OUTOBSERVATIONS:' assigning values to component outputs, e.g. 'OUT(X2)=0'.
    ///
    /// Every section is closed by its 'END' marker, e.g. 'ENDCOMPONENTS'.
    #[clap(verbatim_doc_comment)]
    circuit_path: PathBuf,

    /// The heuristic which selects the conflict set the HS-tree branches on.
    ///
    /// Ignored when the brute-force algorithm is used or when all heuristics are compared.
    #[arg(long, value_enum, default_value_t)]
    heuristic: Heuristic,

    /// The algorithm which computes the minimal hitting sets of the conflict sets.
    #[arg(long, value_enum, default_value_t)]
    algorithm: Algorithm,

    /// The seed of the random heuristic. If it is not provided, the random heuristic is seeded
    /// from system entropy and the number of visited nodes may differ between runs.
    ///
    /// Possible values: u64
    #[arg(long = "random-seed")]
    random_seed: Option<u64>,

    /// The maximum number of nodes the HS-tree may visit. When the limit is reached, the hitting
    /// sets found so far are reported as a partial result.
    ///
    /// Possible values: u64
    #[arg(long = "node-limit")]
    node_limit: Option<u64>,

    /// The time limit of the HS-tree search in milliseconds. When the limit is reached, the
    /// hitting sets found so far are reported as a partial result.
    ///
    /// Possible values: u64
    #[arg(long = "time-limit")]
    time_limit: Option<u64>,

    /// Run the HS-tree with every heuristic and report the number of visited nodes and the time
    /// taken by each of them.
    ///
    /// The run fails if the heuristics do not agree on the minimal hitting sets.
    #[arg(long = "compare-heuristics")]
    compare_heuristics: bool,

    /// Enables logging of debug information.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Enables logging of statistics of the conflict set extraction and the hitting set search.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,
}

/// The algorithms which compute minimal hitting sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Algorithm {
    /// A search over the HS-tree, pruning branches which contain a recorded hitting set.
    #[default]
    HsTree,
    /// Tests every combination of the components in the conflict sets.
    BruteForce,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%diagnose-stat:",
            Some("%%%diagnose-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% {}: ", record.level())?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> DiagnoseSolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if DIAGNOSE_ASSERT_LEVEL_DEFINITION >= DIAGNOSE_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {DIAGNOSE_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    }

    let circuit = read_circuit(&args.circuit_path)?;
    info!(
        "Diagnosing {} with {} components",
        args.circuit_path.display(),
        circuit.model.len()
    );

    let mut extractor = ConflictSetExtractor::new();
    let conflicts = extractor.extract(&circuit.model, &circuit.observations)?;
    if should_log_statistics() {
        extractor
            .statistics()
            .log(StatisticLogger::new("extraction"));
    }

    print_sets("Conflict sets", &conflicts);

    if conflicts.is_empty() {
        println!("The circuit works correctly, there are no faulty components!");
        log_statistic_postfix();
        return Ok(());
    }

    if args.compare_heuristics {
        compare_heuristics(&args, &conflicts)?;
    } else {
        match args.algorithm {
            Algorithm::HsTree => {
                let result = run_hs_tree(&args, args.heuristic, &conflicts);
                print_search(&result);
            }
            Algorithm::BruteForce => {
                let result = brute_force_hitting_sets(&conflicts);
                log_statistic("bruteForceCombinationsTested", result.combinations_tested);

                print_sets("Hitting sets", &result.hitting_sets);
                print_sets("Minimal hitting sets", &result.minimal_hitting_sets);
            }
        }
    }

    log_statistic_postfix();
    Ok(())
}

fn run_hs_tree(args: &Args, heuristic: Heuristic, conflicts: &[ComponentSet]) -> HittingSetSearch {
    let options = SearchOptions {
        heuristic,
        random_seed: args.random_seed,
    };
    let mut termination = Combinator::new(
        args.node_limit.map(NodeBudget::new),
        args.time_limit
            .map(|milliseconds| TimeBudget::starting_now(Duration::from_millis(milliseconds))),
    );

    let result = HsTree::new(options).search(conflicts, &mut termination);
    if !result.is_complete() {
        warn!("The search was stopped by a limit, the hitting sets may be incomplete");
    }
    if should_log_statistics() {
        result
            .statistics
            .log(StatisticLogger::new(format!("search_{}", heuristic.name())));
    }

    result
}

fn compare_heuristics(args: &Args, conflicts: &[ComponentSet]) -> DiagnoseSolverResult<()> {
    let results = Heuristic::ALL
        .into_iter()
        .map(|heuristic| (heuristic, run_hs_tree(args, heuristic, conflicts)))
        .collect::<Vec<_>>();

    for (heuristic, result) in &results {
        println!(
            "{heuristic}: {} nodes visited in {:?}, {} minimal hitting sets{}",
            result.nodes_visited,
            result.elapsed,
            result.minimal_hitting_sets.len(),
            if result.is_complete() { "" } else { " (partial)" }
        );
    }

    let complete = results
        .iter()
        .filter(|(_, result)| result.is_complete())
        .collect::<Vec<_>>();
    if let Some((first, reference)) = complete.first() {
        for (other, result) in &complete[1..] {
            if result.minimal_hitting_sets != reference.minimal_hitting_sets {
                return Err(DiagnoseSolverError::HeuristicsDisagree {
                    first: *first,
                    second: *other,
                });
            }
        }
        print_sets("Minimal hitting sets", &reference.minimal_hitting_sets);
    }

    Ok(())
}

fn print_search(result: &HittingSetSearch) {
    print_sets("Hitting sets", &result.hitting_sets);
    print_sets("Minimal hitting sets", &result.minimal_hitting_sets);
    println!(
        "Nodes visited: {}, time: {:?}",
        result.nodes_visited, result.elapsed
    );
    if !result.is_complete() {
        println!("The search was stopped before completion, the result is partial.");
    }
}

fn print_sets(title: &str, sets: &[ComponentSet]) {
    println!("{title}:");
    for set in sets {
        println!("{}", DisplaySet(set));
    }
}
