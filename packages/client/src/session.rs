//! Session context: bearer token and UI language for the current operator
//!
//! The session is an explicitly injected object shared by the gateway, the
//! services, and the UI. Login initializes it, logout tears it down, and the
//! gateway's authorization-failure path expires it. The token itself is
//! opaque; nothing here inspects it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ClientError, ClientResult};

const SESSION_FILE: &str = "session.toml";

/// On-disk session representation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    access_token: Option<String>,
    lang: Option<String>,
}

#[derive(Debug, Default)]
struct SessionInner {
    token: Option<String>,
    lang: String,
    login_required: bool,
}

/// Shared session store
///
/// Cheap to clone; all clones observe the same state. The token is
/// single-writer by convention: only login and the gateway's failure path
/// mutate it.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
    file_path: PathBuf,
}

impl SessionStore {
    /// Create a store persisting into the given config directory
    ///
    /// The language starts from the environment default and is replaced by
    /// the persisted preference on [`Self::load`].
    pub fn new(config_dir: &Path) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                token: None,
                lang: storekeep_config::lang(),
                login_required: false,
            })),
            file_path: config_dir.join(SESSION_FILE),
        }
    }

    /// Restore a previously persisted session, if any
    ///
    /// A missing file is not an error; it just means "unauthenticated".
    pub async fn load(&self) -> ClientResult<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&self.file_path).await?;
        let file: SessionFile = toml::from_str(&content)
            .map_err(|e| ClientError::config(format!("Invalid session file: {}", e)))?;

        let mut inner = self.write();
        inner.token = file.access_token;
        if let Some(lang) = file.lang {
            inner.lang = lang;
        }
        Ok(())
    }

    /// Commit a token after successful login; clears any pending redirect
    pub async fn set_token(&self, token: impl Into<String>) -> ClientResult<()> {
        {
            let mut inner = self.write();
            inner.token = Some(token.into());
            inner.login_required = false;
        }
        self.save().await
    }

    /// The current token, or `None` when unauthenticated
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Explicit logout: forget the token immediately
    pub async fn clear_token(&self) -> ClientResult<()> {
        self.write().token = None;
        self.save().await
    }

    /// Authorization-failure path: drop the token and flag that the
    /// application must navigate back to the login screen
    pub async fn expire(&self) {
        {
            let mut inner = self.write();
            inner.token = None;
            inner.login_required = true;
        }
        if let Err(e) = self.save().await {
            tracing::warn!("could not persist expired session: {}", e);
        }
    }

    /// Whether an authorization failure forced the session closed
    pub fn login_required(&self) -> bool {
        self.read().login_required
    }

    /// Current UI language code
    pub fn lang(&self) -> String {
        self.read().lang.clone()
    }

    /// Change the UI language and persist the preference
    pub async fn set_lang(&self, code: impl Into<String>) -> ClientResult<()> {
        self.write().lang = code.into();
        self.save().await
    }

    async fn save(&self) -> ClientResult<()> {
        let file = {
            let inner = self.read();
            SessionFile {
                access_token: inner.token.clone(),
                lang: Some(inner.lang.clone()),
            }
        };

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(&file)
            .map_err(|e| ClientError::config(format!("Failed to serialize session: {}", e)))?;
        fs::write(&self.file_path, content).await?;
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
