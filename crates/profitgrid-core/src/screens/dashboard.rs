use serde::Serialize;
use tracing::info;

use super::analyzer::Analyzer;
use crate::forms::{LoginForm, RegisterForm};
use crate::session::{Session, SessionStore};
use crate::{
    ApiClient, ApiError, CoreError, RegisteredUser, SessionError, Symbol, ValidationError,
    WatchlistItem,
};

pub const REGISTRATION_SUCCESS: &str = "Registration successful! Please log in.";

/// Top-level screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Register,
    Analyzer,
    Watchlist,
    Crypto,
}

/// Owns the view switch, the login session and every screen's state.
pub struct Dashboard {
    api: ApiClient,
    store: SessionStore,
    session: Option<Session>,
    view: View,
    analyzer: Analyzer,
    crypto: Analyzer,
    watchlist: Vec<WatchlistItem>,
    watchlist_error: Option<String>,
    form_error: Option<String>,
    notice: Option<String>,
}

impl Dashboard {
    /// Start on the analyzer, restoring any saved session.
    pub fn open(api: ApiClient, store: SessionStore) -> Result<Self, SessionError> {
        let session = store.load()?;
        Ok(Self {
            api,
            store,
            session,
            view: View::Analyzer,
            analyzer: Analyzer::stock(),
            crypto: Analyzer::crypto(),
            watchlist: Vec::new(),
            watchlist_error: None,
            form_error: None,
            notice: None,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn analyzer_mut(&mut self) -> &mut Analyzer {
        &mut self.analyzer
    }

    pub fn crypto(&self) -> &Analyzer {
        &self.crypto
    }

    pub fn crypto_mut(&mut self) -> &mut Analyzer {
        &mut self.crypto
    }

    pub fn watchlist(&self) -> &[WatchlistItem] {
        &self.watchlist
    }

    pub fn watchlist_error(&self) -> Option<&str> {
        self.watchlist_error.as_deref()
    }

    /// Error shown on the login or register form.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Success message shown on the login form after registering.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn show_login(&mut self) {
        self.switch(View::Login);
    }

    pub fn show_register(&mut self) {
        self.switch(View::Register);
    }

    pub fn show_crypto(&mut self) {
        self.switch(View::Crypto);
    }

    pub fn back_to_home(&mut self) {
        self.switch(View::Analyzer);
    }

    pub fn close_watchlist(&mut self) {
        self.switch(View::Analyzer);
    }

    pub async fn search(&mut self, input: &str) {
        self.switch(View::Analyzer);
        self.analyzer.search(&self.api, input).await;
    }

    pub async fn search_crypto(&mut self, input: &str) {
        self.switch(View::Crypto);
        self.crypto.search(&self.api, input).await;
    }

    pub async fn submit_login(&mut self, form: &LoginForm) -> Result<&Session, CoreError> {
        self.view = View::Login;
        self.form_error = None;

        if let Err(error) = form.validate() {
            self.form_error = Some(error.to_string());
            return Err(error.into());
        }

        let login = match self.api.login(&form.username, &form.password).await {
            Ok(login) => login,
            Err(error) => {
                self.form_error = Some(error.user_message());
                return Err(error.into());
            }
        };

        let session = Session::from(login);
        if let Err(error) = self.store.save(&session) {
            self.form_error = Some(error.to_string());
            return Err(error.into());
        }
        info!(username = %session.username, user_id = session.user_id, "logged in");

        self.notice = None;
        self.view = View::Analyzer;
        let session: &Session = self.session.insert(session);
        Ok(session)
    }

    pub async fn submit_register(
        &mut self,
        form: &mut RegisterForm,
    ) -> Result<RegisteredUser, CoreError> {
        self.view = View::Register;
        self.form_error = None;
        self.notice = None;

        if let Err(error) = form.validate() {
            self.form_error = Some(error.to_string());
            return Err(error.into());
        }

        match self.api.register(&form.username, &form.password).await {
            Ok(user) => {
                info!(username = %user.username, "registered");
                form.clear();
                self.notice = Some(String::from(REGISTRATION_SUCCESS));
                self.view = View::Login;
                Ok(user)
            }
            Err(error) => {
                self.form_error = Some(error.user_message());
                Err(error.into())
            }
        }
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        if let Some(session) = self.session.take() {
            info!(username = %session.username, "logged out");
        }
        self.watchlist.clear();
        self.watchlist_error = None;
        self.view = View::Analyzer;
        Ok(())
    }

    /// Show the watchlist screen and load the user's symbols.
    pub async fn open_watchlist(&mut self) -> Result<&[WatchlistItem], CoreError> {
        self.view = View::Watchlist;
        self.watchlist_error = None;

        let token = self.token()?;
        match self.api.watchlist(&token).await {
            Ok(items) => {
                self.watchlist = items;
                Ok(self.watchlist.as_slice())
            }
            Err(error) => {
                self.watchlist_error = Some(error.user_message());
                Err(error.into())
            }
        }
    }

    pub async fn add_to_watchlist(&mut self, input: &str) -> Result<&WatchlistItem, CoreError> {
        self.watchlist_error = None;
        let symbol = self.watchlist_symbol(input)?;
        let token = self.token()?;

        match self.api.add_to_watchlist(&token, &symbol).await {
            Ok(item) => {
                self.watchlist.retain(|existing| existing.symbol != item.symbol);
                self.watchlist.push(item);
                Ok(&self.watchlist[self.watchlist.len() - 1])
            }
            Err(error) => {
                self.watchlist_error = Some(error.user_message());
                Err(error.into())
            }
        }
    }

    /// Remove remotely under the row's stored spelling, then drop the row
    /// locally. Returns the symbol that was removed.
    pub async fn remove_from_watchlist(&mut self, input: &str) -> Result<String, CoreError> {
        self.watchlist_error = None;
        let symbol = self.stored_symbol(input)?;
        let token = self.token()?;

        match self.api.remove_from_watchlist(&token, &symbol).await {
            Ok(()) => {
                self.watchlist.retain(|item| item.symbol != symbol);
                Ok(symbol)
            }
            Err(error) => {
                self.watchlist_error = Some(error.user_message());
                Err(error.into())
            }
        }
    }

    /// Hand a watchlist symbol to the analyzer and return to it.
    pub async fn select_watchlist_symbol(&mut self, symbol: &str) {
        self.search(symbol).await;
    }

    fn switch(&mut self, view: View) {
        self.form_error = None;
        if view != View::Login {
            self.notice = None;
        }
        self.view = view;
    }

    fn token(&mut self) -> Result<String, CoreError> {
        match &self.session {
            Some(session) => Ok(session.token.clone()),
            None => {
                self.watchlist_error = Some(ApiError::NotAuthenticated.to_string());
                Err(ApiError::NotAuthenticated.into())
            }
        }
    }

    /// Exact match on a loaded row first, then a case-insensitive one.
    /// Input matching no row is sent trimmed but otherwise as typed.
    fn stored_symbol(&mut self, input: &str) -> Result<String, CoreError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.watchlist_error = Some(ValidationError::EmptySymbol.to_string());
            return Err(ValidationError::EmptySymbol.into());
        }

        let stored = self
            .watchlist
            .iter()
            .find(|item| item.symbol == trimmed)
            .or_else(|| {
                self.watchlist
                    .iter()
                    .find(|item| item.symbol.eq_ignore_ascii_case(trimmed))
            })
            .map_or(trimmed, |item| item.symbol.as_str());
        Ok(stored.to_owned())
    }

    fn watchlist_symbol(&mut self, input: &str) -> Result<Symbol, CoreError> {
        Symbol::parse(input).map_err(|error| {
            self.watchlist_error = Some(error.to_string());
            error.into()
        })
    }
}
