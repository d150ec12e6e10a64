use super::*;

fn no_match(path: &str) -> RouteError {
    RouteError::NoMatch(path.to_owned())
}

// =============================================================
// Literal paths
// =============================================================

#[test]
fn root_resolves_to_home_feed() {
    let matched = resolve("/").unwrap();
    assert_eq!(matched.page, Page::HomeFeed);
    assert_eq!(matched.param("handle"), None);
}

#[test]
fn messages_resolves_to_message_groups() {
    assert_eq!(resolve("/messages").unwrap().page, Page::MessageGroups);
}

#[test]
fn signup_resolves_to_signup() {
    assert_eq!(resolve("/signup").unwrap().page, Page::Signup);
}

#[test]
fn signin_resolves_to_signin() {
    assert_eq!(resolve("/signin").unwrap().page, Page::Signin);
}

#[test]
fn forgot_resolves_to_recover() {
    assert_eq!(resolve("/forgot").unwrap().page, Page::Recover);
}

#[test]
fn each_sample_path_matches_exactly_one_entry() {
    let samples = [
        "/",
        "/@alice",
        "/messages",
        "/messages/@bob",
        "/signup",
        "/signin",
        "/confirm/user@example.com",
        "/forgot",
    ];
    for path in samples {
        let rest = path.strip_prefix('/').unwrap();
        let segments: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        let matches = ROUTE_TABLE
            .iter()
            .filter(|entry| match_entry(entry, &segments).is_some())
            .count();
        assert_eq!(matches, 1, "path {path} matched {matches} entries");
    }
}

// =============================================================
// Handle captures
// =============================================================

#[test]
fn user_feed_captures_handle_without_at() {
    let matched = resolve("/@alice").unwrap();
    assert_eq!(matched.page, Page::UserFeed);
    assert_eq!(matched.param("handle"), Some("alice"));
}

#[test]
fn empty_handle_is_no_match() {
    assert_eq!(resolve("/@"), Err(no_match("/@")));
}

#[test]
fn single_segment_without_at_is_no_match() {
    assert_eq!(resolve("/alice"), Err(no_match("/alice")));
}

#[test]
fn message_group_detail_captures_handle() {
    let matched = resolve("/messages/@bob").unwrap();
    assert_eq!(matched.page, Page::MessageGroup);
    assert_eq!(matched.param("handle"), Some("bob"));
}

#[test]
fn message_list_and_detail_are_distinct_pages() {
    assert_eq!(resolve("/messages").unwrap().page, Page::MessageGroups);
    assert_eq!(resolve("/messages/@bob").unwrap().page, Page::MessageGroup);
}

#[test]
fn message_detail_with_empty_handle_is_no_match() {
    assert_eq!(resolve("/messages/@"), Err(no_match("/messages/@")));
}

// =============================================================
// Email capture
// =============================================================

#[test]
fn confirm_captures_full_email_including_at() {
    let matched = resolve("/confirm/user@example.com").unwrap();
    assert_eq!(matched.page, Page::Confirmation);
    assert_eq!(matched.param("email"), Some("user@example.com"));
}

#[test]
fn confirm_with_empty_email_is_no_match() {
    assert_eq!(resolve("/confirm/"), Err(no_match("/confirm/")));
}

// =============================================================
// NoMatch
// =============================================================

#[test]
fn unknown_path_is_no_match() {
    assert_eq!(resolve("/unknown"), Err(no_match("/unknown")));
}

#[test]
fn empty_path_is_no_match() {
    assert_eq!(resolve(""), Err(no_match("")));
}

#[test]
fn relative_path_is_no_match() {
    assert_eq!(resolve("signin"), Err(no_match("signin")));
}

#[test]
fn trailing_slash_is_no_match() {
    assert_eq!(resolve("/messages/"), Err(no_match("/messages/")));
}

#[test]
fn extra_segments_are_no_match() {
    assert_eq!(
        resolve("/messages/@bob/extra"),
        Err(no_match("/messages/@bob/extra"))
    );
}

// =============================================================
// Tie-break and table shape
// =============================================================

#[test]
fn static_entry_wins_over_parametric_of_same_length() {
    // `/messages` shares its segment count with the handle pattern; the
    // static entry must win regardless of table order.
    assert_eq!(resolve("/messages").unwrap().page, Page::MessageGroups);
    assert_eq!(resolve("/signup").unwrap().page, Page::Signup);
}

#[test]
fn table_lists_all_eight_pages_once() {
    assert_eq!(ROUTE_TABLE.len(), 8);
    for entry in ROUTE_TABLE {
        let same_page = ROUTE_TABLE
            .iter()
            .filter(|other| other.page == entry.page)
            .count();
        assert_eq!(same_page, 1);
    }
}

#[test]
fn no_match_displays_the_offending_path() {
    let err = resolve("/nope").unwrap_err();
    assert_eq!(err.to_string(), "no route matches `/nope`");
}
