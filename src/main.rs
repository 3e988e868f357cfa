use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_budget_command, handle_dashboard_command, handle_export_command, handle_goal_command,
    handle_login_command, handle_logout_command, handle_settings_command,
    handle_transaction_command, handle_whoami_command, BudgetCommands, Context, DashboardArgs,
    ExportArgs, GoalCommands, LoginArgs, SettingsCommands, TransactionCommands,
};
use fintrack::config::{FinancePaths, Settings};
use fintrack::notify::Notification;
use fintrack::views::{Tab, Timeframe};
use fintrack::FinanceResult;

/// Environment variable holding the log filter
const LOG_ENV: &str = "FINTRACK_LOG";

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance tracker",
    long_about = "fintrack records income and expenses, tracks saving goals and \
                  category budgets, and summarizes them as a dashboard in the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "transaction")]
    Tx(TransactionCommands),

    /// Saving goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the dashboard
    Dashboard(DashboardArgs),

    /// Show the overview tab
    Overview,

    /// Show spending analytics
    Analytics {
        /// daily, weekly or monthly
        #[arg(short, long, default_value = "daily")]
        timeframe: Timeframe,
    },

    /// Preferences and data management
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export transactions to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Sign in with a local profile
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_config(ctx: &Context) -> FinanceResult<()> {
    let paths = ctx.paths();
    let audit_entries = ctx.audit().read_all()?.len();

    println!("fintrack Configuration");
    println!("======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Store file:     {}", paths.store_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {} ({} entries)", paths.audit_log().display(), audit_entries);
    println!();
    println!("Settings:");
    println!("  Log level:            {}", ctx.settings.log_level);
    println!("  Recent transactions:  {}", ctx.settings.recent_transaction_count);
    println!("  Budget warning at:    {}%", ctx.settings.budget_warning_percent);
    println!("  Quick contribution:   {}", ctx.settings.default_contribution);
    Ok(())
}

fn print_history(ctx: &Context, limit: usize) -> FinanceResult<()> {
    let entries = ctx.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }
    for entry in entries.iter().rev() {
        println!("{}", entry);
    }
    Ok(())
}

fn run(ctx: &mut Context, command: Commands) -> FinanceResult<()> {
    let command = match command {
        Commands::Config => return print_config(ctx),
        Commands::Login(args) => return handle_login_command(ctx, args),
        Commands::Logout => return handle_logout_command(ctx),
        Commands::Whoami => return handle_whoami_command(ctx),
        data_command => data_command,
    };

    let user = ctx.require_user()?;
    debug!(user = %user.name, "session ready");

    match command {
        Commands::Tx(cmd) => handle_transaction_command(ctx, cmd),
        Commands::Goal(cmd) => handle_goal_command(ctx, cmd),
        Commands::Budget(cmd) => handle_budget_command(ctx, cmd),
        Commands::Dashboard(args) => handle_dashboard_command(ctx, args),
        Commands::Overview => handle_dashboard_command(
            ctx,
            DashboardArgs {
                tab: Tab::Overview,
                ..Default::default()
            },
        ),
        Commands::Analytics { timeframe } => handle_dashboard_command(
            ctx,
            DashboardArgs {
                tab: Tab::Analytics,
                timeframe,
            },
        ),
        Commands::Settings(cmd) => handle_settings_command(ctx, cmd),
        Commands::Export(args) => handle_export_command(ctx, args),
        Commands::History { limit } => print_history(ctx, limit),
        Commands::Config | Commands::Login(_) | Commands::Logout | Commands::Whoami => Ok(()),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    let Some(command) = cli.command else {
        println!("fintrack - personal finance tracker");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        println!("Run 'fintrack dashboard' to see your finances.");
        return Ok(ExitCode::SUCCESS);
    };

    let mut ctx = Context::open(paths, settings)?;

    let code = match run(&mut ctx, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            ctx.notify(Notification::from_error(&err));
            ExitCode::FAILURE
        }
    };

    ctx.flush_notifications();
    Ok(code)
}
