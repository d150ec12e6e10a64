use super::*;

// =============================================================
// Backend JSON shapes
// =============================================================

#[test]
fn activity_decodes_backend_feed_row() {
    let json = r#"{
        "uuid": "68f126b0-1ceb-4a33-88be-d90fa7109eee",
        "handle": "andrewbrown",
        "message": "Cloud is fun!",
        "created_at": "2026-08-12T18:22:47.000000+00:00",
        "expires_at": "2026-08-19T18:22:47.000000+00:00",
        "likes_count": 5,
        "replies_count": 1
    }"#;

    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(activity.handle, "andrewbrown");
    assert_eq!(activity.likes_count, 5);
    assert_eq!(activity.replies_count, 1);
}

#[test]
fn activity_tolerates_missing_counts() {
    let json = r#"{
        "uuid": "68f126b0-1ceb-4a33-88be-d90fa7109eee",
        "handle": "bayko",
        "message": "just created",
        "created_at": "2026-08-12T18:22:47.000000+00:00"
    }"#;

    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(activity.expires_at, None);
    assert_eq!(activity.likes_count, 0);
}

#[test]
fn message_group_decodes_display_name() {
    let json = r#"{
        "uuid": "4d6de95f-31ee-4b29-9b0f-62a4575cbd4f",
        "handle": "bayko",
        "display_name": "Andrew Bayko"
    }"#;

    let group: MessageGroup = serde_json::from_str(json).unwrap();
    assert_eq!(group.display_name, "Andrew Bayko");
}

#[test]
fn message_decodes_backend_row() {
    let json = r#"{
        "uuid": "f1f2b32f-87bb-48ad-a29a-0f53a0b4b3a4",
        "handle": "andrewbrown",
        "message": "hey!",
        "created_at": "2026-08-12T19:01:05.000000+00:00"
    }"#;

    let message: Message = serde_json::from_str(json).unwrap();
    assert_eq!(message.message, "hey!");
}
