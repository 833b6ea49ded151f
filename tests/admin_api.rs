//
//  cloudinary-admin
//  tests/admin_api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request shape of every Admin operation, checked through a recording
//! call strategy.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use cloudinary_admin::{
    options, Api, ApiError, ApiResponse, CallStrategy, HttpMethod, Options, Representation,
    Transformation,
};

#[derive(Debug, Clone)]
struct Call {
    method: HttpMethod,
    uri: Vec<String>,
    params: Options,
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
}

#[async_trait]
impl CallStrategy for Recorder {
    async fn call_api(
        &self,
        method: HttpMethod,
        uri: Vec<String>,
        params: Options,
        _options: &Options,
    ) -> Result<ApiResponse, ApiError> {
        self.calls.lock().unwrap().push(Call { method, uri, params });
        ApiResponse::from_value(json!({}))
    }
}

fn api() -> (Api, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    (Api::from_shared(recorder.clone()), recorder)
}

fn last(recorder: &Recorder) -> Call {
    recorder.calls.lock().unwrap().last().cloned().unwrap()
}

fn path(call: &Call) -> String {
    call.uri.join("/")
}

/// Every parameter any operation accepts, plus keys none of them forward.
const EVERY_KEY: &[&str] = &[
    "next_cursor",
    "direction",
    "max_results",
    "prefix",
    "tag",
    "tags",
    "context",
    "moderations",
    "start_at",
    "exif",
    "colors",
    "faces",
    "coordinates",
    "image_metadata",
    "pages",
    "phash",
    "keep_original",
    "invalidate",
    "overwrite",
    "public_ids",
    "derived_resource_ids",
    "all",
    "template",
    "unlisted",
    "cloud_name",
    "api_secret",
];

fn every_key() -> Options {
    EVERY_KEY
        .iter()
        .map(|key| (key.to_string(), Value::from("x")))
        .collect()
}

fn keys(call: &Call) -> BTreeSet<String> {
    call.params.keys().cloned().collect()
}

fn key_set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

#[tokio::test]
async fn account_operations() {
    let (api, rec) = api();

    api.ping(None).await.unwrap();
    assert_eq!(last(&rec).method, HttpMethod::Get);
    assert_eq!(path(&last(&rec)), "ping");

    api.usage(None).await.unwrap();
    assert_eq!(path(&last(&rec)), "usage");

    api.resource_types(None).await.unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "resources");
    assert!(call.params.is_empty());
}

#[tokio::test]
async fn resources_list_defaults_to_image_without_type() {
    let (api, rec) = api();

    api.resources(None).await.unwrap();
    assert_eq!(path(&last(&rec)), "resources/image");

    api.resources(options! {
        "resource_type" => "video",
        "type" => "private",
        "max_results" => 10,
        "unknown" => "dropped",
    })
    .await
    .unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "resources/video/private");
    assert_eq!(call.params.get("max_results"), Some(&json!(10)));
    assert!(!call.params.contains_key("unknown"));
    assert!(!call.params.contains_key("type"));
}

#[tokio::test]
async fn resources_by_tag_and_moderation() {
    let (api, rec) = api();

    api.resources_by_tag("holiday", options! { "prefix" => "x" })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "resources/image/tags/holiday");
    assert!(!call.params.contains_key("prefix"));

    api.resources_by_moderation("manual", "pending", None)
        .await
        .unwrap();
    assert_eq!(path(&last(&rec)), "resources/image/moderations/manual/pending");
}

#[tokio::test]
async fn resources_by_ids_sends_public_ids() {
    let (api, rec) = api();

    api.resources_by_ids(["a", "b"], options! { "tags" => true })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Get);
    assert_eq!(path(&call), "resources/image/upload");
    assert_eq!(call.params.get("public_ids"), Some(&json!(["a", "b"])));
    assert_eq!(call.params.get("tags"), Some(&json!(true)));
}

#[tokio::test]
async fn resource_details_filters_flags() {
    let (api, rec) = api();

    api.resource(
        "folder/sample",
        options! { "colors" => true, "type" => "authenticated", "tags" => true },
    )
    .await
    .unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "resources/image/authenticated/folder/sample");
    assert_eq!(call.params.get("colors"), Some(&json!(true)));
    assert!(!call.params.contains_key("tags"));
}

#[tokio::test]
async fn update_encodes_write_parameters() {
    let (api, rec) = api();

    api.update(
        "sample",
        options! {
            "tags" => vec!["a", "b"],
            "moderation_status" => "approved",
            "ocr" => "adv_ocr",
            "colors" => true,
        },
    )
    .await
    .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(path(&call), "resources/image/upload/sample");
    assert_eq!(call.params.str("tags").as_deref(), Some("a,b"));
    assert_eq!(call.params.str("moderation_status").as_deref(), Some("approved"));
    assert_eq!(call.params.str("ocr").as_deref(), Some("adv_ocr"));
    assert!(!call.params.contains_key("colors"));
}

#[tokio::test]
async fn delete_operations() {
    let (api, rec) = api();

    api.delete_resources(["a"], options! { "keep_original" => true })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Delete);
    assert_eq!(path(&call), "resources/image/upload");
    assert_eq!(call.params.get("public_ids"), Some(&json!(["a"])));
    assert_eq!(call.params.get("keep_original"), Some(&json!(true)));

    api.delete_resources_by_prefix("tmp/", None).await.unwrap();
    let call = last(&rec);
    assert_eq!(call.params.str("prefix").as_deref(), Some("tmp/"));

    api.delete_resources_by_tag("old", options! { "resource_type" => "raw" })
        .await
        .unwrap();
    assert_eq!(path(&last(&rec)), "resources/raw/tags/old");

    api.delete_all_resources(options! { "type" => "private" })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "resources/image/private");
    assert_eq!(call.params.get("all"), Some(&json!(true)));

    api.delete_derived_resources(["d1", "d2"], None).await.unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "derived_resources");
    assert_eq!(call.params.get("derived_resource_ids"), Some(&json!(["d1", "d2"])));
}

#[tokio::test]
async fn tags_restore_and_publish() {
    let (api, rec) = api();

    api.tags(options! { "prefix" => "ho", "resource_type" => "video" })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "tags/video");
    assert_eq!(call.params.str("prefix").as_deref(), Some("ho"));

    api.restore(["a"], None).await.unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(path(&call), "resources/image/upload/restore");

    api.publish_by_prefix("private/", options! { "invalidate" => true })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(path(&call), "resources/image/publish_resources");
    assert_eq!(call.params.str("prefix").as_deref(), Some("private/"));
    assert_eq!(call.params.get("invalidate"), Some(&json!(true)));

    api.publish_by_tag("t", None).await.unwrap();
    assert_eq!(last(&rec).params.str("tag").as_deref(), Some("t"));

    api.publish_by_ids(["x", "y"], None).await.unwrap();
    assert_eq!(last(&rec).params.get("public_ids"), Some(&json!(["x", "y"])));
}

#[tokio::test]
async fn transformation_operations() {
    let (api, rec) = api();

    api.transformations(options! { "max_results" => 5 }).await.unwrap();
    assert_eq!(path(&last(&rec)), "transformations");

    api.transformation("c_scale,w_100", None).await.unwrap();
    assert_eq!(path(&last(&rec)), "transformations/c_scale,w_100");

    let definition = Transformation::new().crop("scale").width(102).generate();
    api.create_transformation("api_test", &definition, None)
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(path(&call), "transformations/api_test");
    assert_eq!(call.params.str("transformation").as_deref(), Some("c_scale,w_102"));

    api.update_transformation(
        "api_test",
        options! { "allowed_for_strict" => true },
        None,
    )
    .await
    .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Put);
    assert_eq!(call.params.get("allowed_for_strict"), Some(&json!(true)));

    api.delete_transformation("api_test", None).await.unwrap();
    assert_eq!(last(&rec).method, HttpMethod::Delete);
}

#[tokio::test]
async fn upload_preset_operations() {
    let (api, rec) = api();

    api.create_upload_preset(options! {
        "name" => "avatars",
        "unsigned" => true,
        "folder" => "avatars",
        "tags" => vec!["a", "b"],
        "notification_url" => "",
    })
    .await
    .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(path(&call), "upload_presets");
    assert_eq!(call.params.str("name").as_deref(), Some("avatars"));
    assert_eq!(call.params.get("unsigned"), Some(&json!(true)));
    assert_eq!(call.params.str("tags").as_deref(), Some("a,b"));
    assert!(!call.params.contains_key("notification_url"));

    api.update_upload_preset("avatars", options! { "name" => "renamed", "unsigned" => false })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Put);
    assert_eq!(path(&call), "upload_presets/avatars");
    assert!(!call.params.contains_key("name"));
    assert_eq!(call.params.get("unsigned"), Some(&json!(false)));

    api.upload_preset("avatars", options! { "max_results" => 3, "x" => 1 })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.params.len(), 1);

    api.delete_upload_preset("avatars", None).await.unwrap();
    assert_eq!(last(&rec).method, HttpMethod::Delete);

    api.upload_presets(None).await.unwrap();
    assert_eq!(path(&last(&rec)), "upload_presets");
}

#[tokio::test]
async fn upload_mapping_operations_address_folder_by_parameter() {
    let (api, rec) = api();

    api.create_upload_mapping("wiki", options! { "template" => "https://example.com/" })
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(path(&call), "upload_mappings");
    assert_eq!(call.params.str("folder").as_deref(), Some("wiki"));
    assert_eq!(call.params.str("template").as_deref(), Some("https://example.com/"));

    api.update_upload_mapping("wiki", options! { "template" => "https://other.com/" })
        .await
        .unwrap();
    assert_eq!(last(&rec).method, HttpMethod::Put);

    api.upload_mapping("wiki", None).await.unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Get);
    assert_eq!(call.params.str("folder").as_deref(), Some("wiki"));

    api.delete_upload_mapping("wiki", None).await.unwrap();
    assert_eq!(last(&rec).method, HttpMethod::Delete);

    api.upload_mappings(None).await.unwrap();
    assert_eq!(path(&last(&rec)), "upload_mappings");
}

#[tokio::test]
async fn folder_operations() {
    let (api, rec) = api();

    api.root_folders(None).await.unwrap();
    assert_eq!(path(&last(&rec)), "folders");

    api.sub_folders("parent/child", None).await.unwrap();
    assert_eq!(path(&last(&rec)), "folders/parent/child");
}

#[tokio::test]
async fn streaming_profile_operations() {
    let (api, rec) = api();
    let representations = vec![Representation::new(
        Transformation::new().crop("limit").width(1200).height(1200).bit_rate("5m"),
    )];

    api.create_streaming_profile("custom", Some("Custom"), &representations, None)
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(path(&call), "streaming_profiles");
    assert_eq!(call.params.str("name").as_deref(), Some("custom"));
    assert_eq!(call.params.str("display_name").as_deref(), Some("Custom"));
    let encoded = call.params.str("representations").unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, json!([{ "transformation": "br_5m,c_limit,h_1200,w_1200" }]));

    api.update_streaming_profile("custom", None, Some(&representations), None)
        .await
        .unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Put);
    assert_eq!(path(&call), "streaming_profiles/custom");
    assert!(call.params.contains_key("representations"));
    assert!(!call.params.contains_key("display_name"));

    api.get_streaming_profile("custom", None).await.unwrap();
    assert_eq!(last(&rec).method, HttpMethod::Get);

    api.list_streaming_profiles(None).await.unwrap();
    assert_eq!(path(&last(&rec)), "streaming_profiles");

    api.delete_streaming_profile("custom", None).await.unwrap();
    let call = last(&rec);
    assert_eq!(call.method, HttpMethod::Delete);
    assert_eq!(path(&call), "streaming_profiles/custom");
}

#[tokio::test]
async fn listing_forwards_exactly_its_parameters() {
    let (api, rec) = api();
    let page = [
        "next_cursor",
        "direction",
        "max_results",
        "tags",
        "context",
        "moderations",
    ];

    api.resources(every_key()).await.unwrap();
    let mut expected = key_set(&page);
    expected.extend(key_set(&["prefix", "start_at"]));
    assert_eq!(keys(&last(&rec)), expected);

    api.resources_by_tag("beach", every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), key_set(&page));

    api.resources_by_moderation("manual", "pending", every_key())
        .await
        .unwrap();
    assert_eq!(keys(&last(&rec)), key_set(&page));

    api.resources_by_ids(["a"], every_key()).await.unwrap();
    let call = last(&rec);
    assert_eq!(keys(&call), key_set(&["tags", "context", "moderations", "public_ids"]));
    assert_eq!(call.params.get("public_ids"), Some(&json!(["a"])));
}

#[tokio::test]
async fn resource_details_forward_exactly_their_flags() {
    let (api, rec) = api();

    api.resource("sample", every_key()).await.unwrap();

    assert_eq!(
        keys(&last(&rec)),
        key_set(&[
            "exif",
            "colors",
            "faces",
            "coordinates",
            "image_metadata",
            "pages",
            "phash",
            "max_results",
        ])
    );
}

#[tokio::test]
async fn deletes_forward_exactly_their_parameters() {
    let (api, rec) = api();
    let delete = ["keep_original", "invalidate", "next_cursor"];

    api.delete_resources(["a"], every_key()).await.unwrap();
    let call = last(&rec);
    let mut expected = key_set(&delete);
    expected.insert("public_ids".into());
    assert_eq!(keys(&call), expected);
    assert_eq!(call.params.get("public_ids"), Some(&json!(["a"])));

    api.delete_resources_by_prefix("samples/", every_key())
        .await
        .unwrap();
    let call = last(&rec);
    let mut expected = key_set(&delete);
    expected.insert("prefix".into());
    assert_eq!(keys(&call), expected);
    assert_eq!(call.params.get("prefix"), Some(&json!("samples/")));

    api.delete_resources_by_tag("old", every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), key_set(&delete));

    api.delete_all_resources(every_key()).await.unwrap();
    let call = last(&rec);
    let mut expected = key_set(&delete);
    expected.insert("all".into());
    assert_eq!(keys(&call), expected);
    assert_eq!(call.params.get("all"), Some(&json!(true)));

    api.delete_derived_resources(["d1"], every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), key_set(&["derived_resource_ids"]));

    api.restore(["a"], every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), key_set(&["public_ids"]));
}

#[tokio::test]
async fn tags_and_publish_forward_exactly_their_parameters() {
    let (api, rec) = api();

    api.tags(every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), key_set(&["next_cursor", "max_results", "prefix"]));

    api.publish_by_prefix("private/", every_key()).await.unwrap();
    let call = last(&rec);
    assert_eq!(keys(&call), key_set(&["invalidate", "overwrite", "prefix"]));
    assert_eq!(call.params.get("prefix"), Some(&json!("private/")));

    api.publish_by_tag("launch", every_key()).await.unwrap();
    let call = last(&rec);
    assert_eq!(keys(&call), key_set(&["invalidate", "overwrite", "tag"]));
    assert_eq!(call.params.get("tag"), Some(&json!("launch")));

    api.publish_by_ids(["a", "b"], every_key()).await.unwrap();
    let call = last(&rec);
    assert_eq!(keys(&call), key_set(&["invalidate", "overwrite", "public_ids"]));
    assert_eq!(call.params.get("public_ids"), Some(&json!(["a", "b"])));
}

#[tokio::test]
async fn paged_listings_forward_only_paging() {
    let (api, rec) = api();
    let paging = key_set(&["next_cursor", "max_results"]);

    api.transformations(every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), paging);

    api.transformation("c_scale,w_100", every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), paging);

    api.upload_presets(every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), paging);

    api.upload_preset("signed", every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), key_set(&["max_results"]));

    api.upload_mappings(every_key()).await.unwrap();
    assert_eq!(keys(&last(&rec)), paging);
}
