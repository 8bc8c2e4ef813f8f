mod common;

use common::{BASIC_AUTH, client};
use httpmock::Method::PATCH;
use httpmock::prelude::*;
use nanonets::{
    AddFieldRequest, AddTableCellRequest, AddTableRequest, Cell, PageRef, StatusCode,
    UpdateFieldValueRequest, UpdateTableCellRequest, VerificationRequest,
};
use serde_json::json;

const PAGE_PATH: &str = "/workflows/wf_1/documents/doc_1/pages/p_1";

fn page() -> PageRef<'static> {
    PageRef::new("wf_1", "doc_1", "p_1")
}

fn verified() -> VerificationRequest {
    VerificationRequest::new("success", "checked by reviewer")
}

#[tokio::test]
async fn field_actions() {
    let server = MockServer::start_async().await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{PAGE_PATH}/fields"))
                .header("authorization", BASIC_AUTH)
                .json_body(json!({
                    "field_name": "total",
                    "value": "99.00",
                    "bbox": [1.0, 2.0, 3.0, 4.0],
                    "confidence": 1.0,
                    "verification_status": "success",
                    "verification_message": ""
                }));
            then.status(201).json_body(json!({"field_data_id": "fd_new"}));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path(format!("{PAGE_PATH}/fields/fd_1"))
                .json_body(json!({"value": "100.00"}));
            then.status(200).body("{}");
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path(format!("{PAGE_PATH}/fields/fd_2"));
            then.status(204);
        })
        .await;
    let verify = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{PAGE_PATH}/fields/fd_1/verify"))
                .json_body(json!({
                    "verification_status": "success",
                    "verification_message": "checked by reviewer"
                }));
            then.status(200).body("{}");
        })
        .await;

    let client = client(&server);
    let moderation = client.moderation();
    moderation
        .add_field(
            page(),
            &AddFieldRequest {
                field_name: "total".into(),
                value: "99.00".into(),
                bbox: vec![1.0, 2.0, 3.0, 4.0],
                confidence: 1.0,
                verification_status: "success".into(),
                verification_message: String::new(),
            },
        )
        .await
        .unwrap();
    moderation
        .update_field(
            page(),
            "fd_1",
            &UpdateFieldValueRequest {
                value: "100.00".into(),
            },
        )
        .await
        .unwrap();
    moderation.delete_field(page(), "fd_2").await.unwrap();
    moderation
        .verify_field(page(), "fd_1", &verified())
        .await
        .unwrap();

    add.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
    verify.assert_async().await;
}

#[tokio::test]
async fn table_actions() {
    let server = MockServer::start_async().await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{PAGE_PATH}/tables"))
                .json_body(json!({
                    "bbox": [10.0, 10.0, 100.0, 100.0],
                    "headers": ["item", "qty"],
                    "verification_status": "unverified",
                    "verification_message": "",
                    "cells": [{
                        "row": 0,
                        "col": 0,
                        "header": "item",
                        "text": "Widget",
                        "bbox": [10.0, 10.0, 20.0, 20.0],
                        "verification_status": "unverified",
                        "verification_message": ""
                    }]
                }));
            then.status(200).body("{}");
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path(format!("{PAGE_PATH}/tables/t_old"));
            then.status(200).body("");
        })
        .await;
    let verify = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{PAGE_PATH}/tables/t_1/verify"))
                .json_body(json!({
                    "verification_status": "success",
                    "verification_message": "checked by reviewer"
                }));
            then.status(200).body("{}");
        })
        .await;

    let client = client(&server);
    let moderation = client.moderation();
    moderation
        .add_table(
            page(),
            &AddTableRequest {
                bbox: vec![10.0, 10.0, 100.0, 100.0],
                headers: vec!["item".into(), "qty".into()],
                verification_status: "unverified".into(),
                verification_message: String::new(),
                cells: vec![Cell {
                    row: 0,
                    col: 0,
                    header: "item".into(),
                    text: "Widget".into(),
                    bbox: vec![10.0, 10.0, 20.0, 20.0],
                    verification_status: "unverified".into(),
                    verification_message: String::new(),
                }],
            },
        )
        .await
        .unwrap();
    moderation.delete_table(page(), "t_old").await.unwrap();
    moderation
        .verify_table(page(), "t_1", &verified())
        .await
        .unwrap();

    add.assert_async().await;
    delete.assert_async().await;
    verify.assert_async().await;
}

#[tokio::test]
async fn table_cell_actions() {
    let server = MockServer::start_async().await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{PAGE_PATH}/tables/t_1/cells"))
                .json_body(json!({
                    "row": 2,
                    "col": 1,
                    "header": "qty",
                    "text": "4",
                    "bbox": [],
                    "verification_status": "",
                    "verification_message": ""
                }));
            then.status(200).body("{}");
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path(format!("{PAGE_PATH}/tables/t_1/cells/c_1"))
                .json_body(json!({"value": "5"}));
            then.status(200).body("{}");
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path(format!("{PAGE_PATH}/tables/t_1/cells/c_2"));
            then.status(204);
        })
        .await;
    let verify = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{PAGE_PATH}/tables/t_1/cells/c_1/verify"));
            then.status(200).body("{}");
        })
        .await;

    let client = client(&server);
    let moderation = client.moderation();
    moderation
        .add_table_cell(
            page(),
            "t_1",
            &AddTableCellRequest {
                row: 2,
                col: 1,
                header: "qty".into(),
                text: "4".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    moderation
        .update_table_cell(
            page(),
            "t_1",
            "c_1",
            &UpdateTableCellRequest { value: "5".into() },
        )
        .await
        .unwrap();
    moderation
        .delete_table_cell(page(), "t_1", "c_2")
        .await
        .unwrap();
    moderation
        .verify_table_cell(page(), "t_1", "c_1", &verified())
        .await
        .unwrap();

    add.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
    verify.assert_async().await;
}

#[tokio::test]
async fn verify_document_is_not_page_scoped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/workflows/wf_1/documents/doc_1/verify")
                .json_body(json!({
                    "verification_status": "failed",
                    "verification_message": "totals do not match"
                }));
            then.status(200).body("{}");
        })
        .await;

    client(&server)
        .moderation()
        .verify_document(
            "wf_1",
            "doc_1",
            &VerificationRequest::new("failed", "totals do not match"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_moderation_surfaces_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path(format!("{PAGE_PATH}/fields/fd_locked"));
            then.status(409)
                .body(r#"{"error":"document already verified"}"#);
        })
        .await;

    let err = client(&server)
        .moderation()
        .update_field(
            page(),
            "fd_locked",
            &UpdateFieldValueRequest { value: "1".into() },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    assert_eq!(err.body(), Some(r#"{"error":"document already verified"}"#));
}
