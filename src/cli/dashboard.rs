//! Dashboard CLI command
//!
//! Prints the header and the content of one tab.

use clap::Args;

use super::Context;
use crate::display::{
    format_analytics, format_goal_list, format_header, format_overview, format_settings,
    format_transaction_register,
};
use crate::error::FinanceResult;
use crate::views::{render_tab, DashboardHeader, RenderContext, Tab, TabContent, Timeframe};

/// Arguments of `fintrack dashboard`
#[derive(Args, Default)]
pub struct DashboardArgs {
    /// overview, transactions, goals, analytics or settings
    #[arg(short, long, default_value = "overview")]
    pub tab: Tab,
    /// Spending trend granularity: daily, weekly or monthly
    #[arg(long, default_value = "daily")]
    pub timeframe: Timeframe,
}

/// Render the dashboard for the signed-in user
pub fn handle_dashboard_command(ctx: &mut Context, args: DashboardArgs) -> FinanceResult<()> {
    let user = ctx.require_user()?;
    let currency = ctx.currency();

    let header = DashboardHeader::build(&ctx.store, &ctx.settings);
    print!("{}", format_header(&header, Some(&user), currency));
    println!();

    let render_ctx = RenderContext::new(ctx.today(), &ctx.settings).with_timeframe(args.timeframe);
    let body = match render_tab(args.tab, &ctx.store, &render_ctx) {
        TabContent::Overview(view) => format_overview(&view, currency),
        TabContent::Transactions(view) => format_transaction_register(&view.transactions, currency),
        TabContent::Goals(view) => format_goal_list(&view, currency),
        TabContent::Analytics(view) => format_analytics(&view, currency),
        TabContent::Settings(view) => format_settings(&view),
    };

    println!("== {} ==", args.tab);
    print!("{}", body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::test_context;
    use crate::session::IdentityProvider;

    #[test]
    fn test_every_tab_renders() {
        let (mut ctx, _temp) = test_context();
        for tab in Tab::ALL {
            handle_dashboard_command(
                &mut ctx,
                DashboardArgs {
                    tab,
                    timeframe: Timeframe::Monthly,
                },
            )
            .unwrap();
        }
    }

    #[test]
    fn test_requires_login() {
        let (mut ctx, _temp) = test_context();
        ctx.identity.logout();
        assert!(handle_dashboard_command(&mut ctx, DashboardArgs::default()).is_err());
    }
}
