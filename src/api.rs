//! AniList API Client
//!
//! Frontend binding to the remote GraphQL data source. Errors become
//! plain strings at this boundary; the caller surfaces them.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use serde::Serialize;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use score_engine::Entry;

use crate::models::{into_ranked_entries, QueryResponse};

const ANILIST_URL: &str = "https://graphql.anilist.co";

/// The source list the session works on
const COMPLETED_LIST: &str = "Completed";

const MEDIA_LIST_QUERY: &str = r#"
query ($userName: String) {
  MediaListCollection(userName: $userName, type: MANGA) {
    lists {
      name
      entries {
        repeat
        score
        media {
          id
          title {
            romaji
            english
          }
          coverImage {
            medium
          }
          meanScore
        }
      }
    }
  }
}
"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: QueryVariables<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryVariables<'a> {
    user_name: &'a str,
}

/// Fetch the user's completed list, sorted descending by score.
///
/// Sorting happens here, at the fetch boundary; the engine itself never
/// reorders anything.
pub async fn fetch_completed_list(username: &str) -> Result<Vec<Entry>, String> {
    let body = serde_json::to_string(&GraphQlRequest {
        query: MEDIA_LIST_QUERY,
        variables: QueryVariables { user_name: username },
    })
    .map_err(|e| e.to_string())?;

    let headers = Headers::new().map_err(|e| format!("building headers failed: {:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .and_then(|_| headers.set("Accept", "application/json"))
        .map_err(|e| format!("building headers failed: {:?}", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(ANILIST_URL, &opts)
        .map_err(|e| format!("building request failed: {:?}", e))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("request failed: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch response".to_string())?;

    if !response.ok() {
        return Err(format!("the data source answered with status {}", response.status()));
    }

    let json = JsFuture::from(response.json().map_err(|e| format!("reading response failed: {:?}", e))?)
        .await
        .map_err(|e| format!("reading response failed: {:?}", e))?;
    let parsed: QueryResponse = serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;

    if let Some(error) = parsed.errors.first() {
        return Err(error.message.clone());
    }
    let data = parsed
        .data
        .ok_or_else(|| "empty response from the data source".to_string())?;

    into_ranked_entries(data.media_list_collection.lists, COMPLETED_LIST)
        .ok_or_else(|| format!("user \"{}\" has no \"{}\" list", username, COMPLETED_LIST))
}
