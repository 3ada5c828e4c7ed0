//! Route templates for span and metric labels.

/// Collapse numeric path segments so every cart, product and order shares one label.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

pub(super) fn span_name(method: &str, route: &str) -> String {
    format!("{method} {route}")
}
