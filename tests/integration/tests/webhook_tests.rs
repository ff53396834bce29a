//! End-to-end webhook tests
//!
//! Each test runs the bot on in-memory stores against a local fake Bot API
//! and drives it with updates over HTTP.

use integration_tests::{
    eventually, group_text, members_joined, private_document, user, FakeBotApi, TestServer,
};
use reqwest::StatusCode;

const GROUP: i64 = -100_123;
const ADMIN: i64 = 555;

/// Upload `content` as the allow-list from the admin's private chat
async fn upload_allow_list(server: &TestServer, api: &FakeBotApi, content: &[u8]) {
    api.put_file("list-1", content);
    let response = server
        .deliver(&private_document(user(ADMIN, Some("boss")), "list-1", "text/plain"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(
        eventually(|| !api.messages_to(ADMIN).is_empty()).await,
        "no reply to the upload"
    );
}

#[tokio::test]
async fn test_health_endpoints() {
    let api = FakeBotApi::start().await.unwrap();
    let server = TestServer::start(&api, &[]).await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get("/health/ready").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upload_then_join_bans_only_strangers() {
    let api = FakeBotApi::start().await.unwrap();
    let server = TestServer::start(&api, &[]).await.unwrap();

    upload_allow_list(&server, &api, b"@GoodUser\nhttps://t.me/friend/\n42\n\n").await;
    assert_eq!(
        api.messages_to(ADMIN),
        vec!["Allow-list updated: 3 entries.".to_string()]
    );

    let update = members_joined(
        GROUP,
        user(1, Some("inviter")),
        vec![
            user(10, Some("gooduser")),
            user(11, Some("Friend")),
            user(42, None),
            user(77, Some("stranger")),
        ],
    );
    server.deliver(&update).await.unwrap();

    assert!(eventually(|| !api.banned_ids().is_empty()).await);
    // Give the rest of the batch a moment to show up if it were going to
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert_eq!(api.banned_ids(), vec![77]);
}

#[tokio::test]
async fn test_wrong_file_type_gets_hint() {
    let api = FakeBotApi::start().await.unwrap();
    let server = TestServer::start(&api, &[]).await.unwrap();

    server
        .deliver(&private_document(user(ADMIN, None), "pic", "image/png"))
        .await
        .unwrap();

    assert!(eventually(|| !api.messages_to(ADMIN).is_empty()).await);
    assert!(api.messages_to(ADMIN)[0].contains(".txt"));
    assert!(api.calls("getFile").is_empty());
}

#[tokio::test]
async fn test_clean_sweeps_known_members() {
    let api = FakeBotApi::start().await.unwrap();
    let server = TestServer::start(&api, &[("ADMIN_CHAT_ID", "555")]).await.unwrap();

    upload_allow_list(&server, &api, b"@boss\n@gooduser\n").await;

    // Chatting members become known to the sweep
    server
        .deliver(&group_text(GROUP, user(10, Some("gooduser")), "hello"))
        .await
        .unwrap();
    server
        .deliver(&group_text(GROUP, user(77, Some("lurker")), "hi all"))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    server
        .deliver(&group_text(GROUP, user(ADMIN, Some("boss")), "/clean"))
        .await
        .unwrap();

    assert!(eventually(|| api.messages_to(GROUP).len() >= 2).await);
    assert_eq!(
        api.messages_to(GROUP),
        vec![
            "Starting sweep... (checking known members)".to_string(),
            "Checked: 3. Found: 1. Banned: 1.".to_string(),
        ]
    );
    assert_eq!(api.banned_ids(), vec![77]);
}

#[tokio::test]
async fn test_clean_refused_for_non_admin() {
    let api = FakeBotApi::start().await.unwrap();
    let server = TestServer::start(&api, &[("ADMIN_CHAT_ID", "555")]).await.unwrap();

    server
        .deliver(&group_text(GROUP, user(77, Some("lurker")), "/clean@guard_bot"))
        .await
        .unwrap();

    assert!(eventually(|| !api.messages_to(GROUP).is_empty()).await);
    assert_eq!(
        api.messages_to(GROUP),
        vec!["Only the admin can run /clean.".to_string()]
    );
    assert!(api.banned_ids().is_empty());
}

#[tokio::test]
async fn test_ban_failure_notifies_admin() {
    let api = FakeBotApi::start().await.unwrap();
    api.fail_ban(77, "Bad Request: not enough rights to restrict/unrestrict chat member");
    let server = TestServer::start(&api, &[("ADMIN_CHAT_ID", "555")]).await.unwrap();

    upload_allow_list(&server, &api, b"@boss\n").await;

    server
        .deliver(&members_joined(
            GROUP,
            user(77, Some("stranger")),
            vec![user(77, Some("stranger"))],
        ))
        .await
        .unwrap();

    assert!(eventually(|| api.messages_to(ADMIN).len() >= 2).await);
    let notice = &api.messages_to(ADMIN)[1];
    assert!(notice.starts_with(&format!("Failed to ban @stranger in chat {GROUP}")));
    assert!(notice.contains("not enough rights"));
}

#[tokio::test]
async fn test_departed_member_is_not_reported() {
    let api = FakeBotApi::start().await.unwrap();
    api.fail_ban(77, "Bad Request: USER_NOT_PARTICIPANT");
    let server = TestServer::start(&api, &[("ADMIN_CHAT_ID", "555")]).await.unwrap();

    upload_allow_list(&server, &api, b"@boss\n").await;

    server
        .deliver(&members_joined(
            GROUP,
            user(ADMIN, Some("boss")),
            vec![user(77, Some("ghost"))],
        ))
        .await
        .unwrap();

    assert!(eventually(|| !api.banned_ids().is_empty()).await);
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    // Only the upload confirmation; nothing about the failed ban
    assert_eq!(api.messages_to(ADMIN).len(), 1);
}

#[tokio::test]
async fn test_webhook_secret_enforced() {
    let api = FakeBotApi::start().await.unwrap();
    let server = TestServer::start(&api, &[("WEBHOOK_SECRET", "s3cret")])
        .await
        .unwrap();
    let update = group_text(GROUP, user(10, None), "hi");

    let missing = server.deliver(&update).await.unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let wrong = server
        .deliver_with_secret(&update, Some("guess"))
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let right = server
        .deliver_with_secret(&update, Some("s3cret"))
        .await
        .unwrap();
    assert_eq!(right.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_update_rejected() {
    let api = FakeBotApi::start().await.unwrap();
    let server = TestServer::start(&api, &[]).await.unwrap();

    let response = server
        .client
        .post(format!("{}/telegram/webhook", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
