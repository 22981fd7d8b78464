use crate::i18n::*;
use leptos::logging;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Default, Display, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
pub enum AppErrorType {
  #[default]
  Unknown,

  NotFound,
  InternalServerError,
  OfflineError,

  GraphQlError(String),
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
  pub context: String,
  pub error_type: AppErrorType,
  pub description: String,
}

pub type AppResult<T> = Result<T, AppError>;

pub fn message_from_error(error: &AppError) -> String {
  let i18n = use_i18n();
  let s = match error.error_type {
    AppErrorType::NotFound => t_string!(i18n, not_found).to_string(),
    AppErrorType::InternalServerError | AppErrorType::GraphQlError(_) => t_string!(i18n, internal).to_string(),
    AppErrorType::OfflineError => t_string!(i18n, offline).to_string(),
    _ => t_string!(i18n, unknown).to_string(),
  };
  logging::error!("{}\n{:#?}", s, error);
  s
}

impl std::error::Error for AppError {}

impl core::fmt::Debug for AppError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("AppError")
      .field("context", &self.context)
      .field("error_type", &self.error_type)
      .field("description", &self.description)
      .finish()
  }
}

impl core::fmt::Display for AppError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match &self.error_type {
      AppErrorType::GraphQlError(inner) => {
        write!(f, "{{\"error_type\":{{\"{}\": {}}}}}", &self.error_type, serde_json::Value::String(inner.clone()))
      }
      _ => {
        write!(f, "{{\"error_type\":\"{}\"}}", &self.error_type)
      }
    }
  }
}

impl From<AppErrorType> for AppError {
  fn from(error_type: AppErrorType) -> Self {
    AppError {
      context: "AppErrorType error".into(),
      error_type,
      description: "".to_string(),
    }
  }
}

impl From<serde_json::error::Error> for AppError {
  fn from(value: serde_json::error::Error) -> Self {
    Self {
      context: "Serde JSON error".into(),
      error_type: AppErrorType::InternalServerError,
      description: format!("{:#?}", value),
    }
  }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for AppError {
  fn from(value: gloo_net::Error) -> Self {
    Self {
      context: "Gloo error".into(),
      error_type: AppErrorType::InternalServerError,
      description: format!("{:#?}", value),
    }
  }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for AppError {
  fn from(value: reqwest::Error) -> Self {
    Self {
      context: "Reqwest error".into(),
      error_type: AppErrorType::InternalServerError,
      description: format!("{:#?}", value),
    }
  }
}
