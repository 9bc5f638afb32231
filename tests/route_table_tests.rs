use dnslog_portal::{
    Resolution, ViewId,
    routes::{DEFAULT_PATH, LOGIN_PATH, REGISTER_PATH, route_table},
};

// --- Helpers ---

fn view_of(resolution: &Resolution) -> ViewId {
    match resolution {
        Resolution::View { view, .. } => *view,
        Resolution::Redirect { to } => panic!("expected a view, got redirect to {to}"),
    }
}

// --- Declared Pattern Resolution ---

#[test]
fn test_gateway_paths_resolve_public() {
    let table = route_table();

    assert_eq!(
        table.resolve(LOGIN_PATH),
        Resolution::View {
            view: ViewId::Login,
            protected: false
        }
    );
    assert_eq!(
        table.resolve(REGISTER_PATH),
        Resolution::View {
            view: ViewId::Register,
            protected: false
        }
    );
}

#[test]
fn test_nested_children_resolve_protected() {
    let table = route_table();

    assert_eq!(
        table.resolve("/dns_logs"),
        Resolution::View {
            view: ViewId::DnsLogs,
            protected: true
        }
    );
    assert_eq!(
        table.resolve("/rebind"),
        Resolution::View {
            view: ViewId::Rebind,
            protected: true
        }
    );
}

#[test]
fn test_bare_parent_redirects_to_default_child() {
    let table = route_table();

    assert_eq!(
        table.resolve("/"),
        Resolution::Redirect {
            to: DEFAULT_PATH.to_string()
        }
    );
}

// --- Wildcard Fallback (Totality) ---

#[test]
fn test_unmatched_paths_fall_to_wildcard_redirect() {
    let table = route_table();

    assert_eq!(
        table.resolve("/unknown/x"),
        Resolution::Redirect {
            to: DEFAULT_PATH.to_string()
        }
    );
}

#[test]
fn test_wildcard_is_total_and_deterministic() {
    let table = route_table();

    // Every undeclared path, single- or multi-segment, resolves exactly like
    // the canonical unmatched path. There is no "not found" outcome.
    let reference = table.resolve("/any/unmatched/path");
    for path in [
        "/nope",
        "/deeply/nested/unknown/path",
        "/dns_logs/extra",
        "/LOGIN",
        "/login/child",
        "/.well-known/anything",
        "///",
    ] {
        assert_eq!(
            table.resolve(path),
            reference,
            "path {path} must fall to the wildcard redirect"
        );
    }
}

#[test]
fn test_wildcard_redirect_targets_a_declared_view() {
    let table = route_table();

    // The fallback must itself settle on a real view, otherwise resolution
    // would not be total in practice.
    let fallback = match table.resolve("/does/not/exist") {
        Resolution::Redirect { to } => to,
        other => panic!("expected wildcard redirect, got {other:?}"),
    };
    assert_eq!(view_of(&table.resolve(&fallback)), ViewId::DnsLogs);
}

// --- Normalization ---

#[test]
fn test_trailing_slash_is_insignificant() {
    let table = route_table();

    assert_eq!(table.resolve("/dns_logs/"), table.resolve("/dns_logs"));
    assert_eq!(table.resolve("/rebind/"), table.resolve("/rebind"));
    assert_eq!(table.resolve("/login/"), table.resolve("/login"));
}

#[test]
fn test_empty_path_resolves_as_root() {
    let table = route_table();

    assert_eq!(table.resolve(""), table.resolve("/"));
}

#[test]
fn test_resolution_is_pure() {
    let table = route_table();

    // Same input, same output, any number of times: the table is immutable and
    // resolve has no side effects.
    let first = table.resolve("/rebind");
    for _ in 0..3 {
        assert_eq!(table.resolve("/rebind"), first);
    }
}
