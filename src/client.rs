use crate::{
  errors::{AppError, AppErrorType, AppResult},
  host::graphql_endpoint,
  post::{GetRecommendedPostsResponse, ReadPostResponse},
};
use leptos::logging::log;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

pub const GET_RECOMMENDED_POSTS: &str = r#"
query RecommendedPosts($id: ID) {
  post(id: $id) {
    id
    recommended_posts {
      id
      title
      url_slug
      thumbnail
      short_description
      user {
        id
        username
        profile {
          thumbnail
        }
      }
    }
  }
}
"#;

pub const READ_POST: &str = r#"
query ReadPost($username: String, $url_slug: String) {
  post(username: $username, url_slug: $url_slug) {
    id
    title
    url_slug
    short_description
    thumbnail
    user {
      id
      username
      profile {
        display_name
        thumbnail
      }
    }
  }
}
"#;

#[derive(Clone, Debug, Serialize)]
pub struct GraphQlRequest {
  pub query: &'static str,
  pub variables: Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphQlErrorMessage {
  pub message: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphQlResponse<T> {
  pub data: Option<T>,
  #[serde(default)]
  pub errors: Vec<GraphQlErrorMessage>,
}

impl<T> GraphQlResponse<T> {
  pub fn into_result(self) -> AppResult<T> {
    if !self.errors.is_empty() {
      let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
      return Err(AppErrorType::GraphQlError(messages.join("; ")).into());
    }
    self.data.ok_or_else(|| AppError {
      context: "GraphQL response".into(),
      error_type: AppErrorType::GraphQlError("response carried no data".into()),
      description: String::new(),
    })
  }
}

pub struct GraphQlClient;

pub trait Fetch {
  async fn make_request<Response>(&self, request: GraphQlRequest) -> AppResult<Response>
  where
    Response: DeserializeOwned + 'static;
}

pub trait RecommendApi: Fetch {
  async fn recommended_posts(&self, post_id: &str) -> AppResult<GetRecommendedPostsResponse> {
    self
      .make_request(GraphQlRequest {
        query: GET_RECOMMENDED_POSTS,
        variables: json!({ "id": post_id }),
      })
      .await
  }

  async fn read_post(&self, username: &str, url_slug: &str) -> AppResult<ReadPostResponse> {
    self
      .make_request(GraphQlRequest {
        query: READ_POST,
        variables: json!({ "username": username, "url_slug": url_slug }),
      })
      .await
  }
}

impl RecommendApi for GraphQlClient {}

fn decode<Response: DeserializeOwned>(body: &str) -> AppResult<Response> {
  serde_json::from_str::<GraphQlResponse<Response>>(body)?.into_result()
}

#[cfg(feature = "ssr")]
mod client {

  use super::*;

  impl Fetch for GraphQlClient {
    async fn make_request<Response>(&self, request: GraphQlRequest) -> AppResult<Response>
    where
      Response: DeserializeOwned + 'static,
    {
      let route = graphql_endpoint();
      log!("{} {:?}", route, request.variables);

      let r = reqwest::Client::new().post(&route).json(&request).send().await?;

      match r.status().as_u16() {
        404 => {
          return Err(AppError {
            context: route,
            error_type: AppErrorType::NotFound,
            description: String::new(),
          });
        }
        400..=599 => {
          let status = r.status();
          let body = r.text().await.unwrap_or_default();
          return Err(AppError {
            context: route,
            error_type: AppErrorType::InternalServerError,
            description: format!("{} {}", status, body),
          });
        }
        _ => {}
      };

      let t = r.text().await?;
      decode(&t)
    }
  }
}

#[cfg(not(feature = "ssr"))]
mod client {

  use super::*;
  use gloo_net::http;
  use send_wrapper::SendWrapper;

  impl Fetch for GraphQlClient {
    async fn make_request<Response>(&self, request: GraphQlRequest) -> AppResult<Response>
    where
      Response: DeserializeOwned + 'static,
    {
      let route = graphql_endpoint();

      SendWrapper::new(async move {
        let online = leptos::prelude::window().navigator().on_line();
        if !online {
          return Err(AppErrorType::OfflineError.into());
        }

        let r = http::Request::post(&route).json(&request)?.send().await?;

        match r.status() {
          404 => {
            return Err(AppError {
              context: route,
              error_type: AppErrorType::NotFound,
              description: String::new(),
            });
          }
          400..=599 => {
            let status = r.status();
            let body = r.text().await.unwrap_or_default();
            log!("{} {}", status, body);
            return Err(AppError {
              context: route,
              error_type: AppErrorType::InternalServerError,
              description: format!("{} {}", status, body),
            });
          }
          _ => {}
        };

        let t = r.text().await?;
        decode(&t)
      })
      .await
    }
  }
}
