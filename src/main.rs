use clap::Parser;
use color_eyre::Result;
use crease::analysis::{self, BattingReport, BowlingReport};
use crease::cli::{Args, Mode};
use crease::filter::{FilterCriteria, MetricRange};
use crease::schema::DatasetKind;
use crease::DataContext;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Args::parse();

    let ctx = DataContext::load(&args.bowling, &args.batting)?;
    match args.mode {
        Mode::Bowling => run_bowling(&ctx, &args),
        Mode::Batting => run_batting(&ctx, &args),
        Mode::Comparison => run_comparison(&ctx, &args),
    }
}

/// Maps CLI flags onto dataset-specific filter criteria: the two range
/// flags bind to the dataset's own metric columns.
fn criteria_for(args: &Args, kind: DatasetKind) -> FilterCriteria {
    let (column_a, column_b) = kind.range_columns();
    FilterCriteria {
        name: args.player.clone(),
        teams: (!args.teams.is_empty()).then(|| args.teams.clone()),
        range_a: args
            .range_a
            .map(|(low, high)| MetricRange::new(column_a, low, high)),
        range_b: args
            .range_b
            .map(|(low, high)| MetricRange::new(column_b, low, high)),
    }
}

fn run_bowling(ctx: &DataContext, args: &Args) -> Result<()> {
    let criteria = criteria_for(args, DatasetKind::Bowling);
    match analysis::bowling_report(ctx, &criteria, args.top)? {
        None => println!("No data matches your filters."),
        Some(BowlingReport {
            filtered,
            top_wicket_takers,
            country_means,
            correlation,
        }) => {
            println!("Filtered data\n{filtered}");
            println!("\nTop wicket-takers\n{top_wicket_takers}");
            println!("\nMeans by country\n{country_means}");
            println!("\nCorrelation matrix\n{correlation}");
        }
    }
    Ok(())
}

fn run_batting(ctx: &DataContext, args: &Args) -> Result<()> {
    let criteria = criteria_for(args, DatasetKind::Batting);
    match analysis::batting_report(ctx, &criteria, args.top)? {
        None => println!("No data matches your filters."),
        Some(BattingReport {
            filtered,
            top_run_scorers,
            country_means,
            correlation,
        }) => {
            println!("Filtered data\n{filtered}");
            println!("\nTop run scorers\n{top_run_scorers}");
            println!("\nMeans by country\n{country_means}");
            println!("\nCorrelation matrix\n{correlation}");
        }
    }
    Ok(())
}

fn run_comparison(ctx: &DataContext, args: &Args) -> Result<()> {
    match analysis::comparison_report(ctx, &args.metric)? {
        None => println!("No sufficient comparative data."),
        Some(comparison) => {
            println!("Team comparison ({})\n{comparison}", args.metric);
        }
    }
    Ok(())
}
