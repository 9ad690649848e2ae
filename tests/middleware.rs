//! End-to-end pipeline scenarios: requests go through `QueryFlatten` into
//! JSON-echoing endpoints, and the assertions are on the JSON the client
//! would receive. Absent parameters serialize as `null`, present ones as the
//! list of decoded values.

use http::StatusCode;
use serde_json::{Value, json};
use splay::{Pipeline, QueryFlatten, Request, Response};

fn list_or_null(req: &Request, name: &str) -> Value {
    let values = req.query_all(name);
    if values.is_empty() { Value::Null } else { json!(values) }
}

async fn query_endpoint(req: Request) -> Response {
    let body = list_or_null(&req, "q");
    Response::json(serde_json::to_vec(&body).unwrap())
}

async fn multiple_query_endpoint(req: Request) -> Response {
    let body = json!({
        "q": list_or_null(&req, "q"),
        "r": list_or_null(&req, "r"),
    });
    Response::json(serde_json::to_vec(&body).unwrap())
}

fn single_app() -> Pipeline {
    Pipeline::new(query_endpoint).with(QueryFlatten::new())
}

fn multi_app() -> Pipeline {
    Pipeline::new(multiple_query_endpoint).with(QueryFlatten::new())
}

async fn get(app: &Pipeline, target: &str) -> Value {
    let res = app.run(Request::get(target)).await;
    assert_eq!(res.status_code(), StatusCode::OK);
    serde_json::from_slice(res.body()).expect("endpoint returns JSON")
}

#[tokio::test]
async fn splits_comma_joined_values() {
    assert_eq!(get(&single_app(), "/query?q=1,2").await, json!(["1", "2"]));
}

#[tokio::test]
async fn absent_parameter_stays_absent() {
    assert_eq!(get(&single_app(), "/query").await, Value::Null);
}

#[tokio::test]
async fn blank_value_is_one_empty_string() {
    assert_eq!(get(&single_app(), "/query?q=").await, json!([""]));
}

#[tokio::test]
async fn single_value_passes_through() {
    assert_eq!(get(&single_app(), "/query?q=1").await, json!(["1"]));
}

#[tokio::test]
async fn already_repeated_parameters_pass_through() {
    assert_eq!(get(&single_app(), "/query?q=1&q=2").await, json!(["1", "2"]));
}

#[tokio::test]
async fn repeated_parameters_keep_a_trailing_blank() {
    assert_eq!(get(&single_app(), "/query?q=1&q=2&q=").await, json!(["1", "2", ""]));
}

#[tokio::test]
async fn each_parameter_flattens_independently() {
    assert_eq!(
        get(&multi_app(), "/multiple_query?q=1,2&r=3,4").await,
        json!({"q": ["1", "2"], "r": ["3", "4"]}),
    );
}

#[tokio::test]
async fn both_parameters_absent_are_null() {
    assert_eq!(
        get(&multi_app(), "/multiple_query").await,
        json!({"q": null, "r": null}),
    );
}

#[tokio::test]
async fn blank_parameters_are_single_empty_strings() {
    assert_eq!(
        get(&multi_app(), "/multiple_query?q=&r=").await,
        json!({"q": [""], "r": [""]}),
    );
}

#[tokio::test]
async fn single_values_per_parameter_pass_through() {
    assert_eq!(
        get(&multi_app(), "/multiple_query?q=1&r=2").await,
        json!({"q": ["1"], "r": ["2"]}),
    );
}

#[tokio::test]
async fn delimiter_only_values_become_empty_strings() {
    assert_eq!(
        get(&multi_app(), "/multiple_query?q=,,&r=,").await,
        json!({"q": ["", "", ""], "r": ["", ""]}),
    );
}

#[tokio::test]
async fn mixed_flat_and_delimited_values_under_one_key() {
    // Entries under one key split independently; order is wire order.
    assert_eq!(get(&single_app(), "/query?q=1,2&q=3").await, json!(["1", "2", "3"]));
}

#[tokio::test]
async fn percent_encoded_values_decode_before_splitting() {
    assert_eq!(
        get(&single_app(), "/query?q=a%20b,c+d").await,
        json!(["a b", "c d"]),
    );
}

#[tokio::test]
async fn without_the_middleware_values_stay_joined() {
    let bare = Pipeline::new(query_endpoint);
    assert_eq!(get(&bare, "/query?q=1,2").await, json!(["1,2"]));
}
