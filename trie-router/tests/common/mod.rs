//! GitHub v3 API route table, the usual router benchmark set, with some parameters constrained by
//! validators. Shared by the integration tests and the benches.

#![allow(dead_code)]

use std::collections::HashMap;

use trie_router::{PathTemplate, Router};

pub const UUID: &str = "3f2a9c4e-8b1d-4e6f-a2c3-7d5e9b0f1a2c";

pub const VALIDATORS: &[(&str, &str)] = &[
    ("int", "^[0-9]+$"),
    ("float", "^[0-9]+(.[0-9]+)?$"),
    (
        "uuid",
        "^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
    ),
];

/// Method, template, handler id and parameter values to resolve with.
pub type RouteCase = (&'static str, &'static str, u32, &'static [(&'static str, &'static str)]);

const P2: &[(&str, &str)] = &[("param1", "123"), ("param2", "321")];
const P3: &[(&str, &str)] = &[("param1", "11"), ("param2", "22"), ("param3", "33")];
const P1: &[(&str, &str)] = &[("param1", "123")];
const NONE: &[(&str, &str)] = &[];

pub const ROUTES: &[RouteCase] = &[
    ("GET", "/authorizations", 0, NONE),
    ("GET", "/authorizations/{param1}", 1, &[("param1", "auth")]),
    ("GET", "/repos/{param1}/{param2}/subscription", 2, P2),
    ("GET", "/repos/{param1}/{param2}/events", 3, P2),
    ("GET", "/repos/{param1}/{param2}/notifications", 4, P2),
    ("GET", "/repos/{param1}/{param2}/stargazers", 5, P2),
    ("GET", "/repos/{param1}/{param2}/subscribers", 6, P2),
    ("GET", "/repos/{param1}/{param2}/issues", 7, P2),
    ("GET", "/repos/{param1}/{param2}/issues/{param3}", 8, P3),
    ("GET", "/repos/{param1}/{param2}/assignees", 9, P2),
    ("GET", "/repos/{param1}/{param2}/assignees/{param3}", 10, P3),
    ("GET", "/repos/{param1}/{param2}/issues/{param3}/comments", 11, P3),
    ("GET", "/repos/{param1}/{param2}/issues/{param3}/events", 12, P3),
    ("GET", "/repos/{param1}/{param2}/labels", 13, P2),
    ("GET", "/repos/{param1}/{param2}/labels/{param3}", 14, P3),
    ("GET", "/repos/{param1}/{param2}/issues/{param3}/labels", 15, P3),
    ("GET", "/repos/{param1}/{param2}/milestones/{param3}/labels", 16, &[("param1", "1"), ("param2", "22"), ("param3", "33")]),
    ("GET", "/repos/{param1}/{param2}/milestones/", 17, P2),
    ("GET", "/repos/{param1}/{param2}/milestones/{param3}", 18, P3),
    ("GET", "/repos/{param1}/{param2}/git/blobs/{param3}", 19, P3),
    ("GET", "/repos/{param1}/{param2}/git/commits/{param3}", 20, P3),
    ("GET", "/repos/{param1}/{param2}/git/refs", 21, P2),
    ("GET", "/repos/{param1}/{param2}/git/tags/{param3}", 22, P3),
    ("GET", "/repos/{param1}/{param2}/git/trees/{param3}", 23, P3),
    ("GET", "/repos/{param1}/{param2}/pulls", 24, P2),
    ("GET", "/repos/{param1}/{param2}/pulls/{param3}", 25, P3),
    ("GET", "/repos/{param1}/{param2}/pulls/{param3}/commits", 26, P3),
    ("GET", "/repos/{param1}/{param2}/pulls/{param3}/files", 27, P3),
    ("GET", "/repos/{param1}/{param2}/pulls/{param3}/merge", 28, P3),
    ("GET", "/repos/{param1}/{param2}/pulls/{param3}/comments", 29, P3),
    ("GET", "/repos/{param1}/{param2}", 30, P2),
    ("GET", "/repos/{param1}/{param2}/contributors", 31, P2),
    ("GET", "/repos/{param1}/{param2}/languages", 32, P2),
    ("GET", "/repos/{param1}/{param2}/teams", 33, P2),
    ("GET", "/repos/{param1}/{param2}/tags", 34, P2),
    ("GET", "/repos/{param1}/{param2}/branches", 35, P2),
    ("GET", "/repos/{param1}/{param2}/branches/{param3}", 36, P3),
    ("GET", "/repos/{param1}/{param2}/collaborators", 37, P2),
    ("GET", "/repos/{param1}/{param2}/collaborators/{param3}", 38, P3),
    ("GET", "/repos/{param1}/{param2}/comments", 39, P2),
    ("GET", "/repos/{param1}/{param2}/commits/{param3}/comments", 40, P3),
    ("GET", "/repos/{param1}/{param2}/commits", 41, P2),
    ("GET", "/repos/{param1}/{param2}/commits/{param3}", 42, P3),
    ("GET", "/repos/{param1}/{param2}/readme", 43, P2),
    ("GET", "/repos/{param1}/{param2}/keys", 44, P2),
    ("GET", "/repos/{param1}/{param2}/keys/{param3}", 45, P3),
    ("GET", "/repos/{param1}/{param2}/downloads", 46, P2),
    ("GET", "/repos/{param1}/{param2}/downloads/{param3}", 47, P3),
    ("GET", "/repos/{param1}/{param2}/forks", 48, P2),
    ("GET", "/repos/{param1}/{param2}/hooks", 49, P2),
    ("GET", "/repos/{param1}/{param2}/hooks/{param3}", 50, P3),
    ("GET", "/repos/{param1}/{param2}/releases", 51, P2),
    ("GET", "/repos/{param1}/{param2}/releases/{param3}", 52, P3),
    ("GET", "/repos/{param1}/{param2}/releases/{param3}/assets", 53, P3),
    ("GET", "/repos/{param1}/{param2}/stats/contributors", 54, P2),
    ("GET", "/repos/{param1}/{param2}/stats/commit_activity", 55, P2),
    ("GET", "/repos/{param1}/{param2}/stats/code_frequency", 56, P2),
    ("GET", "/repos/{param1}/{param2}/stats/participation", 57, P2),
    ("GET", "/repos/{param1}/{param2}/stats/punch_card", 58, P2),
    ("GET", "/repos/{param1}/{param2}/statuses/{param3}", 59, P3),
    ("GET", "/users/{param1:int}/received_events", 60, P1),
    ("GET", "/users/{param1:int}/received_events/public", 61, P1),
    ("GET", "/users/{param1:int}/events", 62, P1),
    ("GET", "/users/{param1:int}/events/public", 63, P1),
    ("GET", "/users/{param1:int}/events/orgs/{param2}", 64, &[("param1", "123"), ("param2", "22")]),
    ("GET", "/users/{param1}/starred", 65, P1),
    ("GET", "/user/starred", 66, NONE),
    ("GET", "/user/starred/{param1}/{param2}", 67, P2),
    ("GET", "/users/{param1}/subscriptions", 68, P1),
    ("GET", "/user/subscriptions", 69, NONE),
    ("GET", "/user/subscriptions/{param1}/{param2}", 70, P2),
    ("GET", "/users/{param1}", 71, P1),
    ("GET", "/user", 72, NONE),
    ("GET", "/users", 73, NONE),
    ("GET", "/user/emails", 74, NONE),
    ("GET", "/users/{param1}/followers", 75, P1),
    ("GET", "/user/followers", 76, NONE),
    ("GET", "/users/{param1}/following", 77, P1),
    ("GET", "/user/following", 78, NONE),
    ("GET", "/user/following/{param1}", 79, P1),
    ("GET", "/users/{param1}/following/{param2}", 80, &[("param1", "123"), ("param2", "22")]),
    ("GET", "/users/{param1}/keys", 81, P1),
    ("GET", "/user/keys", 82, NONE),
    ("GET", "/user/keys/{param1}", 83, P1),
    ("GET", "/user/teams", 84, NONE),
    ("GET", "/user/repos", 85, NONE),
    ("GET", "/users/{param1}/repos", 86, P1),
    ("GET", "/users/{param1}/orgs", 87, P1),
    ("GET", "/user/orgs", 88, NONE),
    ("GET", "/users/{param1}/gists", 89, P1),
    ("GET", "/user/issues", 90, NONE),
    ("GET", "/networks/{param1:int}/{param2:int}/events", 91, P2),
    ("GET", "/networks/{param1:int}/{param2:uuid}/events", 92, &[("param1", "123"), ("param2", UUID)]),
    ("GET", "/feeds", 93, NONE),
    ("GET", "/notifications", 94, NONE),
    ("GET", "/notifications/threads/{param1}", 95, P1),
    ("GET", "/notifications/threads/{param1}/subscription", 96, P1),
    ("GET", "/gists", 97, NONE),
    ("GET", "/gists/{param1}", 98, P1),
    ("GET", "/gists/{param1}/star", 99, P1),
    ("GET", "/issues", 100, NONE),
    ("GET", "/orgs/{param1}/issues", 101, P1),
    ("GET", "/gitignore/templates", 102, NONE),
    ("GET", "/gitignore/templates/{param1}", 103, P1),
    ("GET", "/orgs/{param1}", 104, P1),
    ("GET", "/orgs/{param1}/members", 105, P1),
    ("GET", "/orgs/{param1}/members/{param2}", 106, P2),
    ("GET", "/orgs/{param1}/public_members", 107, P1),
    ("GET", "/orgs/{param1}/public_members/{param2}", 108, P2),
    ("GET", "/orgs/{param1}/teams", 109, P1),
    ("GET", "/orgs/{param1}/events", 110, P1),
    ("GET", "/orgs/{param1}/repos", 111, P1),
    ("GET", "/teams/{param1}", 112, P1),
    ("GET", "/teams/{param1}/members", 113, P1),
    ("GET", "/teams/{param1}/members/{param2}", 114, P2),
    ("GET", "/teams/{param1}/repos", 115, P1),
    ("GET", "/teams/{param1}/repos/{param2}/{param3}", 116, P3),
    ("GET", "/search/repositories", 117, NONE),
    ("GET", "/search/code", 118, NONE),
    ("GET", "/search/issues", 119, NONE),
    ("GET", "/search/users", 120, NONE),
    ("GET", "/applications/{param1}/tokens/{param2:uuid}", 121, &[("param1", "123"), ("param2", UUID)]),
    ("GET", "/events", 122, NONE),
    ("GET", "/emojis", 123, NONE),
    ("GET", "/meta", 124, NONE),
    ("GET", "/rate_limit", 125, NONE),
    ("GET", "/repositories", 126, NONE),
    ("GET", "/legacy/issues/search/{param1}/{param2}/{param3}/{param4}", 127, &[("param1", "11"), ("param2", "22"), ("param3", "33"), ("param4", "44")]),
    ("GET", "/legacy/repos/search/{param1}", 128, P1),
    ("GET", "/legacy/user/search/{param1}", 129, P1),
    ("GET", "/legacy/user/email/{param1}", 130, P1),
];

pub const LOCATIONS: &[(&str, &str, u32)] = &[
    ("GET", "/static/css", 201),
    ("GET", "/static/js", 202),
    ("GET", "/static/img", 203),
];

pub fn github_router() -> Router<u32> {
    let _ = env_logger::try_init();

    let mut router = Router::new();

    for (name, pattern) in VALIDATORS {
        router.add_validator(*name, pattern).unwrap();
    }

    for (method, template, id, _) in ROUTES {
        if let Err(err) = router.add_route(method, template, *id) {
            panic!("{} {} ({}): {}", method, template, id, err);
        }
    }

    for (method, location, id) in LOCATIONS {
        router.add_route(method, location, *id).unwrap();
    }

    router
}

/// Fills a template with the case's parameter values.
pub fn instantiate(template: &str, params: &[(&str, &str)]) -> String {
    let tpl = PathTemplate::parse(template).unwrap();
    let values = params.iter().copied().collect::<HashMap<_, _>>();

    let mut path = String::new();
    assert!(tpl.render_from_map(&mut path, &values), "{}", template);
    path
}
