//! Day timeline commands for CLI.

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dayplan_core::{
    next_workday, project_shares, BlockRect, Config, DaySchedule, HourTick, LaidOutBlock,
    RenderMetrics,
};
use serde::Serialize;

#[derive(Args)]
pub struct DayArgs {
    /// Target date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Keep Saturday/Sunday instead of moving to the following Monday
    #[arg(long)]
    no_weekend_shift: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the day timeline
    Show(DayArgs),
    /// Show column layout and canvas geometry
    Layout(DayArgs),
    /// Show minutes and share per project
    Summary(DayArgs),
}

#[derive(Serialize)]
struct LayoutRow<'a> {
    #[serde(flatten)]
    block: LaidOutBlock,
    rect: BlockRect,
    /// Accent color, project blocks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

#[derive(Serialize)]
struct LayoutView<'a> {
    canvas_height_px: f64,
    hour_ticks: Vec<HourTick>,
    blocks: Vec<LayoutRow<'a>>,
}

impl DayArgs {
    fn resolve_date(&self) -> NaiveDate {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        if self.no_weekend_shift {
            date
        } else {
            next_workday(date)
        }
    }
}

fn build(config: &Config, args: &DayArgs) -> Result<DaySchedule, Box<dyn std::error::Error>> {
    let date = args.resolve_date();
    let schedule = config.builder()?.build(date, Some(&config.project_names));
    for warning in &schedule.warnings {
        eprintln!("warning: {warning}");
    }
    Ok(schedule)
}

fn print_header(schedule: &DaySchedule) {
    println!(
        "{}  {} - {} ({} min)",
        schedule.date.format("%a %Y-%m-%d"),
        schedule.work_start.format("%H:%M"),
        schedule.work_end.format("%H:%M"),
        schedule.total_minutes
    );
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        PlanAction::Show(args) => {
            let schedule = build(&config, &args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
                return Ok(());
            }
            print_header(&schedule);
            for block in &schedule.timeline {
                println!(
                    "{}-{}  {:<24} {:>4}m{}",
                    block.start.format("%H:%M"),
                    block.end.format("%H:%M"),
                    block.title,
                    block.minutes,
                    if block.fixed { "  fixed" } else { "" }
                );
            }
        }
        PlanAction::Layout(args) => {
            let schedule = build(&config, &args)?;
            let metrics = RenderMetrics::default();
            let colors = &config.settings.project_colors;
            let view = LayoutView {
                canvas_height_px: metrics.canvas_height(schedule.total_minutes),
                hour_ticks: metrics.hour_ticks(schedule.work_start, schedule.work_end),
                blocks: schedule
                    .layout()
                    .into_iter()
                    .map(|block| LayoutRow {
                        rect: metrics.rect(&block, schedule.work_start),
                        color: block.block.project().map(|id| colors.color(id)),
                        block,
                    })
                    .collect(),
            };

            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }
            print_header(&schedule);
            println!("canvas height: {:.0}px", view.canvas_height_px);
            let ticks: Vec<String> = view
                .hour_ticks
                .iter()
                .map(|tick| format!("{}@{:.0}px", tick.label, tick.top_px))
                .collect();
            println!("hours: {}", ticks.join(" "));
            for row in &view.blocks {
                println!(
                    "{}-{}  {:<24} col {}/{}  top {:.0}px height {:.0}px left {:.1}% width {:.1}%",
                    row.block.block.start.format("%H:%M"),
                    row.block.block.end.format("%H:%M"),
                    row.block.block.title,
                    row.block.column_index + 1,
                    row.block.columns_count,
                    row.rect.top_px,
                    row.rect.height_px,
                    row.rect.left_pct,
                    row.rect.width_pct
                );
            }
        }
        PlanAction::Summary(args) => {
            let schedule = build(&config, &args)?;
            let shares = project_shares(&schedule.timeline, &config.project_names);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&shares)?);
                return Ok(());
            }
            for share in &shares {
                println!(
                    "{}  {:<24} {:>4} minutes  {:.1}%",
                    share.id, share.title, share.minutes, share.percent
                );
            }
        }
    }
    Ok(())
}
