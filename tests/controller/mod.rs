use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::server::model::app::AppState;
use holonet_test_utils::prelude::*;

use crate::util::body_json;

mod favorite;
