use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Commands, EnvOverrides, OutputFormat, SortKey, SortOrder};
use crate::config::Config;
use crate::core::{self, Blog};
use crate::error::AppError;
use crate::output::{
    LoadSummary, NumberFormat, TableOptions, output_authors_csv, output_authors_json,
    output_dummy_json, output_favorite_json, output_list_csv, output_list_json,
    output_most_blogs_json, output_most_likes_json, output_summary_json, output_total_likes_json,
    print_authors_table, print_favorite_table, print_list_table, print_most_blogs_table,
    print_most_likes_table, print_summary_table, print_total_likes, sort_authors, sort_blogs,
};
use crate::source::{LoadResult, load_blogs};
use crate::utils::{filter_json, init_logging};

pub(crate) struct CommandContext<'a> {
    pub(crate) format: OutputFormat,
    pub(crate) table: TableOptions,
    pub(crate) sort: SortKey,
    pub(crate) order: SortOrder,
    pub(crate) jq_filter: Option<&'a str>,
}

/// Parse arguments, run the selected command and map failures to exit code 1
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_failure(&e),
    };
    init_logging(cli.debug);
    let cli = cli.with_config(&Config::load(), &EnvOverrides::from_env());

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `--help` and `--version` exit 0; real argument errors exit 1 like any other error
fn parse_failure(e: &clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn execute(cli: &Cli) -> Result<(), AppError> {
    let command = cli.command();
    let format = cli.output_format()?;
    if format == OutputFormat::Csv && !command.supports_csv() {
        return Err(AppError::CsvUnsupported);
    }

    let ctx = CommandContext {
        format,
        table: TableOptions {
            use_color: cli.use_color(),
            compact: cli.compact,
            number_format: NumberFormat::from_locale(cli.locale.as_deref())?,
        },
        sort: cli.sort,
        order: cli.order,
        jq_filter: cli.jq.as_deref(),
    };

    // The placeholder helper ignores its input, so it needs no source
    if command == Commands::Dummy {
        return emit(render_dummy(&ctx), &ctx);
    }

    let source = cli.source()?;
    let result = load_blogs(source.as_ref(), &cli.filter())?;
    emit(render(command, &result, &ctx), &ctx)
}

fn render_dummy(ctx: &CommandContext<'_>) -> String {
    match ctx.format {
        OutputFormat::Json => output_dummy_json(&[]),
        _ => format!("{}\n", core::dummy(&[])),
    }
}

/// Render one command's output for the chosen format
pub(crate) fn render(command: Commands, result: &LoadResult, ctx: &CommandContext<'_>) -> String {
    let blogs = result.blogs.as_slice();
    let json = ctx.format == OutputFormat::Json;

    match command {
        Commands::Summary if json => output_summary_json(blogs),
        Commands::Summary => {
            let summary = LoadSummary {
                blogs: blogs.len(),
                inputs: result.inputs,
                skipped: result.skipped,
                filtered_out: result.filtered_out,
                elapsed_ms: Some(result.elapsed_ms),
            };
            print_summary_table(blogs, &summary, ctx.table)
        }
        Commands::TotalLikes if json => output_total_likes_json(blogs),
        Commands::TotalLikes => print_total_likes(blogs, ctx.table),
        Commands::Favorite if json => output_favorite_json(blogs),
        Commands::Favorite => print_favorite_table(blogs, ctx.table),
        Commands::MostBlogs if json => output_most_blogs_json(blogs),
        Commands::MostBlogs => print_most_blogs_table(blogs, ctx.table),
        Commands::MostLikes if json => output_most_likes_json(blogs),
        Commands::MostLikes => print_most_likes_table(blogs, ctx.table),
        Commands::Authors => {
            let mut stats = core::author_stats(blogs);
            sort_authors(&mut stats, ctx.sort, ctx.order);
            match ctx.format {
                OutputFormat::Json => output_authors_json(&stats),
                OutputFormat::Csv => output_authors_csv(&stats),
                OutputFormat::Table => print_authors_table(&stats, ctx.table),
            }
        }
        Commands::List => {
            let mut sorted: Vec<&Blog> = blogs.iter().collect();
            sort_blogs(&mut sorted, ctx.sort, ctx.order);
            match ctx.format {
                OutputFormat::Json => output_list_json(&sorted),
                OutputFormat::Csv => output_list_csv(&sorted),
                OutputFormat::Table => print_list_table(&sorted, ctx.table),
            }
        }
        Commands::Dummy => render_dummy(ctx),
    }
}

/// Write rendered output to stdout, optionally filtering JSON through jq
fn emit(output: String, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match ctx.jq_filter {
        Some(filter) => print!("{}", filter_json(&output, filter)?),
        None if output.ends_with('\n') => print!("{output}"),
        None => println!("{output}"),
    }
    Ok(())
}
