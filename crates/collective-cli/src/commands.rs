//! Command parsing and execution.
//!
//! Each command produces its output as a string so `main` only has to print
//! it. Subject tiers are parsed leniently (anything unrecognized is `none`);
//! required tiers are parsed strictly so a typo never opens a gate.

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, Result};
use collective_momentum::{validate_goal, Progress};
use collective_tiers::{
    all_info, describe, has_access, info_of_name, rank_of_name, resolve, unlocked_features,
    upgrade_path, Feature, Resolution, Tier, TierInfo,
};
use serde::Serialize;
use std::fmt::Write;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tiers,
    Rank { tier: String },
    Info { tier: String },
    Access { subject: String, required: String },
    Describe { tier: String },
    Features { tier: Option<String> },
    Progress { current: u64, goal: u64 },
    Goal { goal: u64 },
}

fn arg<'a>(args: &'a [String], index: usize, cmd: &str, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("{} requires a {} argument", cmd, name)))
}

fn number(args: &[String], index: usize, cmd: &str, name: &str) -> Result<u64> {
    let raw = arg(args, index, cmd, name)?;
    raw.parse().map_err(|_| {
        CliError::Usage(format!("{} must be a non-negative integer, got {:?}", name, raw))
    })
}

// Largest argument count each command takes, command name included.
fn max_args(cmd: &str) -> usize {
    match cmd {
        "tiers" => 1,
        "access" | "progress" => 3,
        _ => 2,
    }
}

impl Command {
    /// Parse arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let name = args
            .first()
            .ok_or_else(|| CliError::Usage("missing command".to_string()))?;

        let cmd = match name.as_str() {
            "tiers" => Command::Tiers,
            "rank" => Command::Rank {
                tier: arg(args, 1, "rank", "tier")?.to_string(),
            },
            "info" => Command::Info {
                tier: arg(args, 1, "info", "tier")?.to_string(),
            },
            "access" => Command::Access {
                subject: arg(args, 1, "access", "subject tier")?.to_string(),
                required: arg(args, 2, "access", "required tier")?.to_string(),
            },
            "describe" => Command::Describe {
                tier: arg(args, 1, "describe", "tier")?.to_string(),
            },
            "features" => Command::Features {
                tier: args.get(1).cloned(),
            },
            "progress" => Command::Progress {
                current: number(args, 1, "progress", "current")?,
                goal: number(args, 2, "progress", "goal")?,
            },
            "goal" => Command::Goal {
                goal: number(args, 1, "goal", "goal")?,
            },
            other => return Err(CliError::Usage(format!("unknown command: {}", other))),
        };
        let max = max_args(name);
        if args.len() > max {
            return Err(CliError::Usage(format!(
                "{} takes at most {} argument(s), got {}: {:?}",
                name,
                max - 1,
                args.len() - 1,
                &args[max..]
            )));
        }
        Ok(cmd)
    }
}

#[derive(Serialize)]
struct AccessReport {
    subject: Tier,
    required: Tier,
    granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
}

#[derive(Serialize)]
struct FeatureReport {
    feature: Feature,
    title: &'static str,
    required: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlocked: Option<bool>,
}

#[derive(Serialize)]
struct ProgressReport {
    current: u64,
    goal: u64,
    percentage: f64,
    bar_width: f64,
    remaining: u64,
}

/// Run a command and render its output.
pub fn run(command: &Command, config: &CliConfig) -> Result<String> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Tiers => tiers(config),
        Command::Rank { tier } => {
            let rank = rank_of_name(tier);
            match config.output {
                OutputFormat::Text => Ok(format!("{}\n", rank)),
                OutputFormat::Json => json(&serde_json::json!({ "tier": tier, "rank": rank })),
            }
        }
        Command::Info { tier } => {
            let info = info_of_name(tier)?;
            match config.output {
                OutputFormat::Text => Ok(info_text(info)?),
                OutputFormat::Json => json(info),
            }
        }
        Command::Access { subject, required } => access(subject, required, config),
        Command::Describe { tier } => describe_tier(tier, config),
        Command::Features { tier } => features(tier.as_deref(), config),
        Command::Progress { current, goal } => progress(*current, *goal, config),
        Command::Goal { goal } => {
            let goal = validate_goal(*goal)?;
            match config.output {
                OutputFormat::Text => Ok(format!("{} participants\n", goal)),
                OutputFormat::Json => json(&serde_json::json!({ "goal": goal, "valid": true })),
            }
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn tiers(config: &CliConfig) -> Result<String> {
    if config.output == OutputFormat::Json {
        return json(all_info());
    }
    let mut out = String::new();
    for info in all_info() {
        writeln!(
            out,
            "{}  {:<14} {:<22} {}{}",
            info.rank(),
            info.tier,
            info.name,
            info.price_label(),
            if info.popular { "  (most popular)" } else { "" }
        )?;
    }
    Ok(out)
}

fn info_text(info: &TierInfo) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} {}", info.icon, info.name)?;
    writeln!(out, "rank:  {}", info.rank())?;
    writeln!(out, "color: {}", info.color)?;
    writeln!(out, "price: {}", info.price_label())?;
    writeln!(out, "benefits:")?;
    for benefit in info.benefits {
        writeln!(out, "  - {}", benefit)?;
    }
    Ok(out)
}

fn access(subject: &str, required: &str, config: &CliConfig) -> Result<String> {
    let subject = Tier::parse_lenient(subject);
    let required: Tier = required.parse()?;

    let report = match resolve(subject, required, (), None) {
        Resolution::UpgradeRequired(prompt) => AccessReport {
            subject,
            required,
            granted: false,
            message: Some(prompt.message()),
            action: Some(prompt.action()),
        },
        _ => AccessReport {
            subject,
            required,
            granted: has_access(subject, required),
            message: None,
            action: None,
        },
    };

    match config.output {
        OutputFormat::Json => json(&report),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "{}", if report.granted { "granted" } else { "denied" })?;
            if let Some(message) = &report.message {
                writeln!(out, "{}", message)?;
            }
            if let Some(action) = &report.action {
                writeln!(out, "{}", action)?;
            }
            Ok(out)
        }
    }
}

fn describe_tier(tier: &str, config: &CliConfig) -> Result<String> {
    let tier = Tier::parse_lenient(tier);
    let descriptor = describe(tier);

    if config.output == OutputFormat::Json {
        return json(&descriptor);
    }

    let mut out = String::new();
    match descriptor.icon() {
        Some(icon) => writeln!(out, "{} {}", icon, descriptor.label())?,
        None => writeln!(out, "{}", descriptor.label())?,
    }
    if let Some(title) = descriptor.badge_title() {
        writeln!(out, "badge: {} ({})", title, descriptor.color().unwrap_or_default())?;
    }
    writeln!(out, "{}", descriptor.status_message())?;
    write!(out, "{}", descriptor.headline(config.headline))?;

    let next: Vec<String> = upgrade_path(tier).iter().map(Tier::to_string).collect();
    if !next.is_empty() {
        writeln!(out, "upgrades: {}", next.join(", "))?;
    }
    Ok(out)
}

fn features(tier: Option<&str>, config: &CliConfig) -> Result<String> {
    let subject = tier.map(Tier::parse_lenient);
    let unlocked = subject.map(unlocked_features).unwrap_or_default();

    let reports: Vec<FeatureReport> = Feature::ALL
        .into_iter()
        .map(|feature| FeatureReport {
            feature,
            title: feature.title(),
            required: feature.required_tier(),
            unlocked: subject.map(|_| unlocked.contains(&feature)),
        })
        .collect();

    if config.output == OutputFormat::Json {
        return json(&reports);
    }

    let mut out = String::new();
    for report in &reports {
        let status = match report.unlocked {
            Some(true) => "  unlocked",
            Some(false) => "  locked",
            None => "",
        };
        writeln!(out, "{:<28} {}+{}", report.title, report.required, status)?;
    }
    Ok(out)
}

fn progress(current: u64, goal: u64, config: &CliConfig) -> Result<String> {
    let progress = Progress::new(current, goal)?;
    let report = ProgressReport {
        current: progress.current,
        goal: progress.goal,
        percentage: progress.percentage(),
        bar_width: progress.bar_width(),
        remaining: progress.remaining(),
    };

    match config.output {
        OutputFormat::Json => json(&report),
        OutputFormat::Text => Ok(format!(
            "{} / {} participants\nprogress: {:.1}%\nbar: {:.1}%\n",
            report.current, report.goal, report.percentage, report.bar_width
        )),
    }
}
