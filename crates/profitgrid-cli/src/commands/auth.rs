use profitgrid_core::{Dashboard, LoginForm, RegisterForm, Session};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{LoginArgs, RegisterArgs};
use crate::error::CliError;

use super::{surface, CommandResult};

/// Session details safe to print; the token stays in the session file.
#[derive(Debug, Serialize)]
struct SessionData<'a> {
    username: &'a str,
    user_id: i64,
}

impl<'a> From<&'a Session> for SessionData<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            username: &session.username,
            user_id: session.user_id,
        }
    }
}

pub async fn login(args: &LoginArgs, board: &mut Dashboard) -> Result<CommandResult, CliError> {
    let form = LoginForm::new(args.username.as_str(), args.password.as_str());

    let result = match board.submit_login(&form).await {
        Ok(session) => {
            let text = format!("Logged in as {}.", session.username);
            CommandResult::ok(serde_json::to_value(SessionData::from(session))?, text)
        }
        Err(error) => CommandResult::failed(surface(error)?),
    };
    Ok(result.with_view(board.view()))
}

pub async fn register(
    args: &RegisterArgs,
    board: &mut Dashboard,
) -> Result<CommandResult, CliError> {
    let mut form = RegisterForm::new(
        args.username.as_str(),
        args.password.as_str(),
        args.confirm_password.as_str(),
    );

    let result = match board.submit_register(&mut form).await {
        Ok(user) => {
            let text = board.notice().unwrap_or_default().to_owned();
            CommandResult::ok(serde_json::to_value(user)?, text)
        }
        Err(error) => CommandResult::failed(surface(error)?),
    };
    Ok(result.with_view(board.view()))
}

pub fn logout(board: &mut Dashboard) -> Result<CommandResult, CliError> {
    let was_logged_in = board.is_authenticated();
    board.logout()?;

    let text = if was_logged_in {
        "Logged out."
    } else {
        "No session to clear."
    };
    Ok(CommandResult::ok(Value::Null, text).with_view(board.view()))
}

pub fn whoami(board: &Dashboard) -> Result<CommandResult, CliError> {
    let result = match board.session() {
        Some(session) => {
            let text = format!("{} (user id {})", session.username, session.user_id);
            CommandResult::ok(serde_json::to_value(SessionData::from(session))?, text)
        }
        None => CommandResult::ok(Value::Null, "Not logged in."),
    };
    Ok(result)
}
