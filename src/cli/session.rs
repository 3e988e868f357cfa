//! Login, logout and whoami

use clap::Args;

use super::Context;
use crate::error::FinanceResult;
use crate::notify::Notification;
use crate::session::IdentityProvider;

/// Arguments of `fintrack login`
#[derive(Args)]
pub struct LoginArgs {
    /// Display name
    pub name: String,
    #[arg(short, long)]
    pub email: Option<String>,
}

pub fn handle_login_command(ctx: &mut Context, args: LoginArgs) -> FinanceResult<()> {
    let display = ctx
        .identity
        .login(&args.name, args.email.as_deref())?
        .display_name();
    ctx.save_identity()?;
    ctx.notify(Notification::success(format!("Logged in as {}", display)));
    Ok(())
}

pub fn handle_logout_command(ctx: &mut Context) -> FinanceResult<()> {
    if !ctx.identity.is_authenticated() {
        ctx.notify(Notification::info("Not logged in"));
        return Ok(());
    }
    ctx.identity.logout();
    ctx.save_identity()?;
    ctx.notify(Notification::success("Logged out"));
    Ok(())
}

pub fn handle_whoami_command(ctx: &mut Context) -> FinanceResult<()> {
    let user = ctx.require_user()?;
    println!("{}", user.display_name());
    Ok(())
}
